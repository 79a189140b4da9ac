//! One game from deal to completion.

use crate::{
    Board, BoardError, Clock, DeckError, Deck, GameCompleted, MatchResolver, ResolveContext,
    Selection, SelectionOutcome, SessionTimer, SystemClock, TaskQueue, TimerError,
};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default delay before a failed attempt is hidden or a match disappears.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(600);

/// How selections arriving while a deferred action is pending are treated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SelectionPolicy {
    /// Handle the selection immediately against the current board.
    #[default]
    AcceptStale,
    /// Reject the selection until every pending action has run.
    BlockWhilePending,
}

/// Per-session tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SessionSettings {
    /// Delay before deferred hide/remove actions run.
    reveal_delay: Duration,
    /// Handling of selections during the delay.
    selection_policy: SelectionPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            selection_policy: SelectionPolicy::default(),
        }
    }
}

/// Game-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// Board lookup failed.
    #[display("{_0}")]
    Board(BoardError),
    /// Deck could not be built.
    #[display("{_0}")]
    Deck(DeckError),
    /// Timer read at the wrong time.
    #[display("{_0}")]
    Timer(TimerError),
    /// A deferred action is still pending and the policy blocks input.
    #[from(ignore)]
    #[display("Wait for the revealed tiles to resolve")]
    ResolutionPending,
}

/// Something the presentation layer should react to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Both tiles of a failed attempt were turned face down.
    PairHidden {
        /// The hidden tiles.
        pair: [crate::TileId; 2],
    },
    /// Both tiles of a match left the board.
    PairRemoved {
        /// The removed tiles.
        pair: [crate::TileId; 2],
    },
    /// The last pair left the board.
    Completed(GameCompleted),
}

/// Owns every piece of one game's state.
///
/// Selections go in through [`GameSession::select`]; deferred transitions
/// run when [`GameSession::tick`] observes that their delay has passed on
/// the session clock. Call `tick` before each selection so due actions
/// happen-before later clicks.
#[derive(Debug)]
pub struct GameSession<C: Clock = SystemClock> {
    board: Board,
    timer: SessionTimer,
    resolver: MatchResolver,
    tasks: TaskQueue,
    settings: SessionSettings,
    clock: C,
    completed: Option<GameCompleted>,
}

impl<C: Clock> GameSession<C> {
    /// Starts a session on a dealt deck.
    #[instrument(skip(deck, clock), fields(tiles = deck.len()))]
    pub fn new(deck: &Deck, settings: SessionSettings, clock: C) -> Self {
        info!(
            pairs = deck.pair_count(),
            delay_ms = settings.reveal_delay.as_millis() as u64,
            policy = %settings.selection_policy,
            "Starting game session"
        );
        Self {
            board: Board::new(deck),
            timer: SessionTimer::new(),
            resolver: MatchResolver::new(),
            tasks: TaskQueue::new(),
            settings,
            clock,
            completed: None,
        }
    }

    /// Delivers a tile activation.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ResolutionPending`] under
    /// [`SelectionPolicy::BlockWhilePending`] while actions are queued, and
    /// [`GameError::Board`] for unknown tile ids.
    #[instrument(skip(self), fields(selection = %selection))]
    pub fn select(&mut self, selection: Selection) -> Result<SelectionOutcome, GameError> {
        if self.settings.selection_policy == SelectionPolicy::BlockWhilePending
            && !self.tasks.is_empty()
        {
            warn!(pending = self.tasks.len(), "Selection blocked while pair resolves");
            return Err(GameError::ResolutionPending);
        }

        let ctx = ResolveContext {
            board: &mut self.board,
            timer: &mut self.timer,
            tasks: &mut self.tasks,
            now: self.clock.now(),
            reveal_delay: self.settings.reveal_delay,
        };
        Ok(self.resolver.on_tile_selected(&selection, ctx)?)
    }

    /// Runs every deferred action that is due on the session clock.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] if a queued action names an unknown tile.
    #[instrument(skip(self), fields(pending = self.tasks.len()))]
    pub fn tick(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let now = self.clock.now();
        let mut events = Vec::new();

        for action in self.tasks.drain_due(now) {
            debug!(%action, "Running deferred action");
            let completed =
                self.resolver
                    .apply_deferred(action, &mut self.board, &mut self.timer, now)?;

            events.push(match action {
                crate::DeferredAction::HidePair(pair) => GameEvent::PairHidden { pair },
                crate::DeferredAction::RemovePair(pair) => GameEvent::PairRemoved { pair },
            });

            if let Some(completed) = completed {
                self.completed = Some(completed);
                events.push(GameEvent::Completed(completed));
            }
        }

        Ok(events)
    }

    /// Time until the next deferred action is due, zero if overdue.
    pub fn until_next_due(&self) -> Option<Duration> {
        self.tasks
            .next_due()
            .map(|due| due.saturating_sub(self.clock.now()))
    }

    /// The tiles.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The session timer.
    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    /// Total selections handled.
    pub fn clicks(&self) -> u64 {
        self.resolver.clicks()
    }

    /// Pending deferred actions.
    pub fn tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    /// Session tunables.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// The session clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Completion signal, once the board is cleared.
    pub fn completed(&self) -> Option<&GameCompleted> {
        self.completed.as_ref()
    }

    /// True once the completion signal has been emitted.
    pub fn is_complete(&self) -> bool {
        self.completed.is_some()
    }
}
