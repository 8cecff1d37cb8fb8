//! Console entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_cli::{AppConfig, Cli, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    }
    .with_seed_override(cli.seed);

    initialize_tracing(config.log_filter());

    let rng = match config.seed() {
        Some(seed) => {
            info!(seed, "Using fixed seed");
            StdRng::seed_from_u64(*seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let announce = *config.announce_moves() && !cli.quiet;
    Orchestrator::new(stdin, stdout, rng)
        .with_announce_moves(announce)
        .run_session()
}

/// Logs go to stderr; stdout carries the game.
#[instrument]
fn initialize_tracing(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();

    info!("Tracing initialized");
}
