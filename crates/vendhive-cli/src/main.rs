use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod rank;
mod score;


#[derive(Debug, Parser)]
#[command(name = "vendhive-cli")]
#[command(about = "Vendhive location lead scoring command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter, score, and rank a batch of candidate locations.
    Rank {
        /// JSON file containing an array of candidate-location records.
        #[arg(long)]
        input: PathBuf,
        /// Preferences YAML file; overrides the configured path.
        #[arg(long)]
        preferences: Option<PathBuf>,
        /// Keep at most this many ranked results.
        #[arg(long)]
        limit: Option<usize>,
        /// Emit the full report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Score every record without filtering, preserving input order.
    Score {
        /// JSON file containing an array of candidate-location records.
        #[arg(long)]
        input: PathBuf,
        /// Emit scored records as JSON instead of text lines.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = vendhive_core::load_app_config_from_env()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match cli.command {
        Commands::Rank {
            input,
            preferences,
            limit,
            json,
        } => rank::run_rank(&config, &input, preferences.as_deref(), limit, json),
        Commands::Score { input, json } => score::run_score(&input, json),
    }
}

/// `RUST_LOG` wins when set; otherwise fall back to the configured level.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
