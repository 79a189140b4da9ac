//! Strictly Memory - Unified CLI
//!
//! Seasonal tile-matching game with several modes of operation.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, DealArgs};
use strictly_memory::{GridSize, Season, build_deck};
use strictly_memory_game::{GameConfig, deal_rng, load_catalog, run_play};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(load_config(&args)?).await,
        Command::Deal(args) => run_deal(load_config(&args)?),
        Command::Season { month } => run_season(month),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,strictly_memory=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Tracing initialized");
}

/// Reads the config file, if any, and applies command-line overrides.
#[instrument]
fn load_config(args: &DealArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(size) = args.grid_size {
        config = config.with_grid_size(GridSize::new(size)?);
    }
    if let Some(season) = args.season {
        config = config.with_season(season);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = &args.icons {
        config = config.with_icons_path(path.clone());
    }

    debug!(?config, "Effective configuration");
    Ok(config)
}

/// Deals a deck and prints it as JSON.
#[instrument(skip(config))]
fn run_deal(config: GameConfig) -> Result<()> {
    use strictly_memory::IconSupply;

    let season = config.resolved_season();
    let catalog = load_catalog(&config)?;
    let icons = catalog.icons_for_season(season)?;
    let deck = build_deck(&icons, *config.grid_size(), &mut deal_rng(&config))?;

    info!(%season, tiles = deck.len(), "Dealt deck");
    println!("{}", serde_json::to_string_pretty(&deck)?);
    Ok(())
}

/// Prints the season for a month index, or for today.
#[instrument]
fn run_season(month: Option<u32>) -> Result<()> {
    let season = match month {
        Some(month) => Season::from_month0(month)?,
        None => Season::current(),
    };
    println!("{season}");
    Ok(())
}
