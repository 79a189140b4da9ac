//! Strictly Memory game library - boundary layer around the memory engine
//!
//! The engine in [`strictly_memory`] knows tiles, pairs, and time. This
//! crate adds what a playable game needs around it.
//!
//! # Architecture
//!
//! - **Config**: TOML game configuration with CLI overrides
//! - **Controller**: icon loading, dealing, and notifications for a front end
//! - **Terminal**: a line-based front end driven by tokio
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use strictly_memory::{IconCatalog, ManualClock, Season};
//! use strictly_memory_game::{GameConfig, GameController, DEFAULT_CATALOG};
//!
//! let catalog = IconCatalog::from_json_str(DEFAULT_CATALOG)?;
//! let mut controller = GameController::new(GameConfig::default(), ManualClock::new());
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! assert!(controller.start(&catalog, Season::Winter, &mut rng));
//! assert_eq!(controller.session().map(|s| s.board().len()), Some(16));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Controller
pub use controller::GameController;

// Crate-level exports - Terminal front end
pub use terminal::{
    Command as InputCommand, DEFAULT_CATALOG, deal_rng, load_catalog, parse_command, render,
    run_play,
};
