//! Pure tile-matching memory game logic.
//!
//! Tiles carrying seasonal icons are dealt face down in pairs. Players turn
//! them over two at a time; matching pairs leave the board and the game
//! ends, reporting elapsed time, once every pair is gone.
//!
//! # Architecture
//!
//! - **Deal**: [`build_deck`] shuffles an icon pool into a [`Deck`]
//! - **Board**: [`Board`] owns the [`Tile`] state machine
//! - **Resolution**: [`MatchResolver`] pairs consecutive [`Selection`]s
//! - **Timing**: [`SessionTimer`] and deferred actions on a [`TaskQueue`]
//! - **Session**: [`GameSession`] ties the pieces to one [`Clock`]
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use strictly_memory::{
//!     build_deck, GameSession, GridSize, Icon, ManualClock, Selection,
//!     SessionSettings,
//! };
//!
//! let pool: Vec<Icon> = ["🍎", "🍌", "🍇"].into_iter().map(Icon::from).collect();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(3);
//! let deck = build_deck(&pool, GridSize::new(1)?, &mut rng)?;
//!
//! let clock = ManualClock::new();
//! let mut session = GameSession::new(&deck, SessionSettings::default(), clock.clone());
//! let first = session.board().tiles()[0].clone();
//! session.select(Selection::new(first.icon().clone(), *first.id()))?;
//! clock.advance(std::time::Duration::from_millis(600));
//! assert!(session.tick()?.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod catalog;
mod icon;
mod notification;
mod resolver;
mod scheduler;
mod season;
mod session;
mod shuffle;
mod timer;

pub use action::{DeferredAction, Selection};
pub use board::{Board, BoardError, Tile, TileId, TileState};
pub use catalog::{IconCatalog, IconSupply, IconSupplyError, SeasonIcons};
pub use icon::Icon;
pub use notification::{
    GAME_OVER_TITLE, ICONS_UNAVAILABLE_TITLE, Notification, Severity, UNEXPECTED_ERROR_TITLE,
};
pub use resolver::{GameCompleted, MatchResolver, ResolveContext, SelectionOutcome};
pub use scheduler::{ScheduledTask, TaskQueue};
pub use season::{Season, SeasonError};
pub use session::{
    DEFAULT_REVEAL_DELAY, GameError, GameEvent, GameSession, SelectionPolicy, SessionSettings,
};
pub use shuffle::{Deck, DeckError, GridSize, build_deck, fisher_yates};
pub use timer::{Clock, ManualClock, SessionTimer, SystemClock, TimerError};
