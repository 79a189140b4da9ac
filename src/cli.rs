//! Command-line interface for strictly_memory_game.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_memory::Season;

/// Strictly Memory - seasonal tile-matching game
#[derive(Parser, Debug)]
#[command(name = "strictly_memory_game")]
#[command(about = "Find the pairs before the clock runs away", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by commands that deal a board
#[derive(Args, Debug, Clone, Default)]
pub struct DealArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Season to deal from (winter, summer, rainy, spring); defaults to today's
    #[arg(long)]
    pub season: Option<Season>,

    /// Grid size; the board has four tiles per step
    #[arg(short, long)]
    pub grid_size: Option<usize>,

    /// Seed for a reproducible deal
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON icon catalog to use instead of the bundled one
    #[arg(long)]
    pub icons: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(DealArgs),

    /// Print a dealt deck as JSON
    Deal(DealArgs),

    /// Print the season for a month
    Season {
        /// Month index, January = 0; defaults to the current month
        #[arg(long)]
        month: Option<u32>,
    },
}
