//! Click-pairing state machine.
//!
//! Every click is compared with the click immediately before it. Odd clicks
//! open an attempt; even clicks close it as a reselect, a mismatch, or a
//! match. Mismatches and matches resolve after the reveal delay so both
//! icons stay visible for a moment.

use crate::{Board, BoardError, DeferredAction, Selection, SessionTimer, TaskQueue, TileId};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// What a selection did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// First tile of an attempt; nothing to compare yet.
    AwaitingPair,
    /// The same tile was clicked twice in a row and was turned back over.
    Reselected,
    /// Icons differ; the pair will be hidden after the delay.
    Mismatch {
        /// Previous and current tile.
        pair: [TileId; 2],
    },
    /// Icons match; the pair will be removed after the delay.
    Match {
        /// Previous and current tile.
        pair: [TileId; 2],
    },
}

/// Signal emitted when the last pair leaves the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCompleted {
    /// Seconds from the first click to the final removal.
    pub elapsed_seconds: f64,
}

/// Session components a resolver step reads and mutates.
#[derive(Debug)]
pub struct ResolveContext<'a> {
    /// Tiles.
    pub board: &'a mut Board,
    /// Session timer.
    pub timer: &'a mut SessionTimer,
    /// Deferred transitions.
    pub tasks: &'a mut TaskQueue,
    /// Current clock reading.
    pub now: Duration,
    /// Delay before mismatches hide and matches disappear.
    pub reveal_delay: Duration,
}

/// Pairs consecutive selections and decides their fate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResolver {
    clicks: u64,
    previous: Option<Selection>,
}

impl MatchResolver {
    /// Creates a resolver with no clicks recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total selections handled, including reselects.
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// The most recent selection.
    pub fn previous(&self) -> Option<&Selection> {
        self.previous.as_ref()
    }

    /// Handles one tile activation.
    ///
    /// The tile's state is not validated; the caller filters out tiles that
    /// are no longer in play.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] for an unknown tile id.
    #[instrument(skip(self, ctx), fields(tile = %selection.tile_id, icon = %selection.icon, clicks = self.clicks + 1))]
    pub fn on_tile_selected(
        &mut self,
        selection: &Selection,
        ctx: ResolveContext<'_>,
    ) -> Result<SelectionOutcome, BoardError> {
        ctx.board.reveal(selection.tile_id)?;
        self.clicks += 1;

        if self.clicks == 1 {
            ctx.timer.start(ctx.now);
        }

        let previous = self.previous.replace(selection.clone());

        if self.clicks % 2 == 1 {
            debug!("Attempt opened");
            return Ok(SelectionOutcome::AwaitingPair);
        }

        let Some(previous) = previous else {
            return Ok(SelectionOutcome::AwaitingPair);
        };
        let pair = [previous.tile_id, selection.tile_id];

        if previous.tile_id == selection.tile_id {
            ctx.board.hide(selection.tile_id)?;
            ctx.board.hide(previous.tile_id)?;
            debug!("Same tile clicked twice; turned back over");
            return Ok(SelectionOutcome::Reselected);
        }

        if previous.icon != selection.icon {
            ctx.tasks
                .schedule(ctx.now, ctx.reveal_delay, DeferredAction::HidePair(pair));
            debug!(previous = %previous.tile_id, "Mismatch");
            Ok(SelectionOutcome::Mismatch { pair })
        } else {
            ctx.tasks
                .schedule(ctx.now, ctx.reveal_delay, DeferredAction::RemovePair(pair));
            info!(previous = %previous.tile_id, "Match found");
            Ok(SelectionOutcome::Match { pair })
        }
    }

    /// Runs a deferred action that has come due.
    ///
    /// Returns the completion signal when this action removed the last
    /// active tile. Completion is reported once per session.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] for an unknown tile id.
    #[instrument(skip(self, board, timer))]
    pub fn apply_deferred(
        &self,
        action: DeferredAction,
        board: &mut Board,
        timer: &mut SessionTimer,
        now: Duration,
    ) -> Result<Option<GameCompleted>, BoardError> {
        match action {
            DeferredAction::HidePair([a, b]) => {
                board.hide(a)?;
                board.hide(b)?;
                Ok(None)
            }
            DeferredAction::RemovePair([a, b]) => {
                board.remove(a)?;
                board.remove(b)?;
                debug!(active = board.active_count(), "Pair removed");

                if !board.is_cleared() || !timer.stop(now) {
                    return Ok(None);
                }

                // A stopped timer always has a start: the first click set it.
                let elapsed_seconds = timer.elapsed_seconds().unwrap_or_default();
                info!(elapsed_seconds, clicks = self.clicks, "Board cleared");
                Ok(Some(GameCompleted { elapsed_seconds }))
            }
        }
    }
}
