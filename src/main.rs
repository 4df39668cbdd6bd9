use anyhow::{Context, Result};
use clap::Parser;
use duet_cards::config::{self, Command, Config, OutputFormat};
use duet_cards::{check_grids, generate_cards, Card, Side};
use log::{error, info};
use std::fmt::Write as _;
use std::io::Write as _;
use std::fs::OpenOptions;
use std::path::Path;

/// Writes log lines to stderr and to a file
struct DualWriter {
    file: std::fs::File,
}

impl std::io::Write for DualWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()?;
        self.file.flush()
    }
}

fn init_logger(config: &Config) -> Result<()> {
    let mut logger_builder = env_logger::Builder::from_default_env();
    logger_builder.filter_level(
        config
            .log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info),
    );

    if let Some(log_file_path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(log_file_path)
            .with_context(|| format!("Failed to open log file {:?}", log_file_path))?;
        logger_builder.target(env_logger::Target::Pipe(Box::new(DualWriter { file })));
    }

    logger_builder.init();
    Ok(())
}

/// Plain-text sheet: each side's label followed by its grid as that player holds it
fn cards_to_text(cards: &[Card]) -> Result<String> {
    let mut out = String::new();
    for card in cards {
        for side in [Side::A, Side::B] {
            writeln!(out, "{}", card.label(side))?;
            writeln!(out, "{}", card.seat_view(side))?;
        }
    }
    Ok(out)
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("Failed to write {:?}", path))?;
            info!("Wrote {:?}", path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn run_generate(
    count: usize,
    start_seed: u64,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let cards = generate_cards(start_seed, count).context("Card generation failed")?;
    info!("Generated {} cards", cards.len());

    match format {
        OutputFormat::Json => match output {
            Some(path) => {
                config::write_cards_to_file(&cards, path)?;
                info!("Wrote {} cards to {:?}", cards.len(), path);
            }
            None => println!("{}", config::cards_to_json(&cards)?),
        },
        OutputFormat::Text => emit(&cards_to_text(&cards)?, output)?,
    }
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    info!("Checking cards in {:?}", path);
    let cards = config::load_cards(path)?;

    let mut failures = 0;
    for card in &cards {
        if let Err(e) = check_grids(&card.grids) {
            error!("Card {:04}: {}", card.seed, e);
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} cards failed checks", failures, cards.len());
    }
    info!("All {} cards passed", cards.len());
    println!("{} cards ok", cards.len());
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logger(&config)?;

    info!("Configuration: {:?}", config);

    match &config.command {
        Command::Generate {
            count,
            start_seed,
            format,
            output,
        } => run_generate(*count, *start_seed, *format, output.as_deref()),
        Command::Check { path } => run_check(path),
    }
}
