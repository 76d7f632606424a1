use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod dataset;
mod error;
mod game;
mod input;
mod output;

use crate::dataset::Dataset;
use crate::game::clock::SystemClock;
use crate::game::settings::Settings;
use crate::game::Game;
use crate::input::terminal::TerminalInput;
use crate::output::terminal::TerminalOutput;

/// Multiple choice movie trivia in the terminal
#[derive(Debug, Parser)]
#[command(name = "movie-quiz", version)]
struct Cli {
    /// CSV or spreadsheet (xlsx, xls, ods) with movie_title, year, director_name, actor_name, country and genres columns
    movies_file: PathBuf,

    /// Seed for the random generator, to replay the same questions
    #[arg(long)]
    seed: Option<u64>,

    /// Number of questions per quiz
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    rounds: u16,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let dataset = Dataset::open(&cli.movies_file)
        .with_context(|| format!("Could not load movies from {:?}", cli.movies_file))?;
    info!("{} movies available", dataset.len());
    if dataset.is_empty() {
        bail!("No complete movie records in {:?}", cli.movies_file);
    }

    let settings = Settings {
        rounds: usize::from(cli.rounds),
        ..Default::default()
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(
        dataset,
        settings,
        TerminalInput::new(),
        TerminalOutput::new(),
        SystemClock::new(),
        rng,
    );
    game.run()
}
