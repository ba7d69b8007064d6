//! Headless command-line driver for Maple Hunt.

mod autopilot;
mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "maple-hunt",
    about = "Maple Hunt: a headless side-scrolling monster hunt",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a hunt driven by the autopilot and report the outcome
    Simulate {
        /// Number of ticks to simulate (default: 600 = 24 seconds at 40ms/tick)
        #[arg(short, long, default_value = "600")]
        ticks: u64,

        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON config file; missing fields take their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show every event (not just notable ones)
        #[arg(short, long)]
        verbose: bool,

        /// Print the final game state as JSON instead of a report
        #[arg(long)]
        json: bool,

        /// Keep at most this many events (0 = unbounded)
        #[arg(long)]
        max_events: Option<usize>,
    },

    /// Print the default configuration as JSON
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            ticks,
            seed,
            config,
            verbose,
            json,
            max_events,
        } => commands::simulate::run(
            config.as_deref(),
            ticks,
            seed,
            max_events,
            verbose,
            json,
        ),
        Commands::Config => commands::config::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
