use std::{
    env,
    fs::File,
    io::{self, Write},
    path::PathBuf,
    str::FromStr,
};

use anyhow::{Context, Result};
use chess_rules::{START_LAYOUT, Side};
use clap::{Parser, Subcommand};
use tracing::{Level, level_filters::LevelFilter};
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use chess_rules_cli::{cli_moves, cli_perft};

const LOG_PATH_VAR: &str = "CHESS_RULES_LOG_PATH";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Count the positions reachable from a layout.
    Perft {
        depth: usize,
        #[arg(long, default_value = START_LAYOUT)]
        layout: String,
        /// Side to move: white/w or black/b.
        #[arg(long, default_value = "white")]
        side: Side,
        /// Tally captures, checks and checkmates for every ply.
        #[arg(long)]
        full: bool,
    },
    /// List the legal destinations of the piece on a square.
    Moves {
        square: String,
        #[arg(long, default_value = START_LAYOUT)]
        layout: String,
    },
}

fn main() -> Result<()> {
    enable_logging()?;

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Perft {
            depth,
            layout,
            side,
            full,
        } => cli_perft(&mut stdout, &layout, side, depth, full),
        Commands::Moves { square, layout } => cli_moves(&mut stdout, &layout, &square),
    }?;

    stdout.flush()?;
    Ok(())
}

fn enable_logging() -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        );

    let log_layer = match env::var(LOG_PATH_VAR) {
        Ok(log_path_str) => {
            let log_path = PathBuf::from_str(&log_path_str)?;
            let log_file = File::create(&log_path)
                .with_context(|| format!("Couldn't create file {:?}", log_path))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(log_file)
                    .with_filter(LevelFilter::from_level(Level::DEBUG)),
            )
        }
        Err(_) => None,
    };

    Registry::default()
        .with(stderr_layer)
        .with(log_layer)
        .init();

    Ok(())
}
