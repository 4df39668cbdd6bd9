use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::Card;

/// Configuration for the key card generator
#[derive(Debug, Clone, Parser)]
#[command(name = "duet-cards")]
#[command(about = "Generate and check two-sided key cards for cooperative word-deduction games")]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Also write log output to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a batch of cards, one per consecutive seed
    Generate {
        /// Number of cards to generate
        #[arg(short, long, default_value = "100")]
        count: usize,

        /// Seed of the first card
        #[arg(short = 's', long, visible_alias = "seed", default_value = "1")]
        start_seed: u64,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check every card in a JSON card file
    Check {
        /// Path to a card file written by `generate --format json`
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Printable sheet, side B shown from its own seat
    Text,
    /// Card file, both grids in generation space
    Json,
}

/// On-disk card file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardFile {
    pub cards: Vec<Card>,
}

/// Load cards from a JSON file
pub fn load_cards(path: &Path) -> anyhow::Result<Vec<Card>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read card file {:?}", path))?;
    let file: CardFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse card file {:?}", path))?;
    Ok(file.cards)
}

/// Render cards as a JSON card file
pub fn cards_to_json(cards: &[Card]) -> anyhow::Result<String> {
    let file = CardFile {
        cards: cards.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Write cards to a JSON file
pub fn write_cards_to_file(cards: &[Card], path: &Path) -> anyhow::Result<()> {
    let json = cards_to_json(cards)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write card file {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_cards;

    #[test]
    fn test_config_defaults() {
        let config = Config::parse_from(["duet-cards", "generate"]);
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.is_none());
        match config.command {
            Command::Generate {
                count,
                start_seed,
                format,
                output,
            } => {
                assert_eq!(count, 100);
                assert_eq!(start_seed, 1);
                assert_eq!(format, OutputFormat::Text);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_seed_alias() {
        let config = Config::parse_from(["duet-cards", "generate", "--seed", "12", "-c", "3"]);
        match config.command {
            Command::Generate { count, start_seed, .. } => {
                assert_eq!(count, 3);
                assert_eq!(start_seed, 12);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_card_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        let cards = generate_cards(1, 4).unwrap();

        write_cards_to_file(&cards, &path).unwrap();
        assert_eq!(load_cards(&path).unwrap(), cards);
    }

    #[test]
    fn test_card_file_layout() {
        let cards = generate_cards(3, 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&cards_to_json(&cards).unwrap()).unwrap();
        let card = &value["cards"][0];
        assert_eq!(card["seed"], 3);
        assert_eq!(card["a"].as_array().unwrap().len(), 25);
        assert_eq!(card["b"].as_array().unwrap().len(), 25);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_cards(Path::new("/nonexistent/cards.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read card file"));
    }
}
