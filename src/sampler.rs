use rand::Rng;

use crate::error::{GridError, Result};

/// Draw `count` elements from `items` uniformly at random, without replacement.
///
/// Returns `(selected, remaining)`. The input slice is left untouched; each draw
/// removes a uniformly chosen element from a private copy of the pool, so every
/// subset of size `count` is equally likely.
pub fn choose<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    count: usize,
) -> Result<(Vec<T>, Vec<T>)> {
    if count > items.len() {
        return Err(GridError::SamplingUnderflow {
            requested: count,
            available: items.len(),
        });
    }

    let mut remaining = items.to_vec();
    let mut selected = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.gen_range(0..remaining.len());
        selected.push(remaining.remove(index));
    }

    Ok((selected, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_choose_partitions_input() {
        let mut rng = StdRng::seed_from_u64(3);
        let items: Vec<usize> = (0..25).collect();

        let (selected, remaining) = choose(&mut rng, &items, 7).unwrap();
        assert_eq!(selected.len(), 7);
        assert_eq!(remaining.len(), 18);

        let selected: HashSet<_> = selected.into_iter().collect();
        let remaining: HashSet<_> = remaining.into_iter().collect();
        assert!(selected.is_disjoint(&remaining));
        let union: HashSet<_> = selected.union(&remaining).copied().collect();
        assert_eq!(union, items.iter().copied().collect());
    }

    #[test]
    fn test_choose_leaves_input_alone() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = vec!['a', 'b', 'c', 'd'];
        let _ = choose(&mut rng, &items, 4).unwrap();
        assert_eq!(items, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_choose_edges() {
        let mut rng = StdRng::seed_from_u64(0);
        let items = [1, 2, 3];

        let (none, all) = choose(&mut rng, &items, 0).unwrap();
        assert!(none.is_empty());
        assert_eq!(all, vec![1, 2, 3]);

        let (picked, rest) = choose(&mut rng, &items, 3).unwrap();
        assert_eq!(picked.len(), 3);
        assert!(rest.is_empty());

        let (picked, rest) = choose::<u8, _>(&mut rng, &[], 0).unwrap();
        assert!(picked.is_empty() && rest.is_empty());
    }

    #[test]
    fn test_choose_underflow() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = choose(&mut rng, &[1, 2], 3).unwrap_err();
        assert_eq!(
            err,
            GridError::SamplingUnderflow {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_choose_is_roughly_uniform() {
        // Every 2-subset of 4 elements should turn up about 1/6 of the time.
        let mut rng = StdRng::seed_from_u64(42);
        let items = [0u8, 1, 2, 3];
        let mut hits = std::collections::HashMap::new();
        let trials = 60_000;
        for _ in 0..trials {
            let (mut picked, _) = choose(&mut rng, &items, 2).unwrap();
            picked.sort();
            *hits.entry(picked).or_insert(0usize) += 1;
        }
        assert_eq!(hits.len(), 6);
        for count in hits.values() {
            assert!((9_000..11_000).contains(count), "skewed subset count {}", count);
        }
    }
}
