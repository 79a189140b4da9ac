//! Boundary between the engine and whatever presents the game.
//!
//! The controller loads icons, deals, owns the [`GameSession`], and turns
//! engine outcomes and faults into [`Notification`]s instead of letting
//! them escape to the presentation layer.

use crate::config::GameConfig;
use rand::Rng;
use strictly_memory::{
    Clock, GameEvent, GameSession, IconSupply, Notification, Season, Selection, SelectionOutcome,
    TileId, TileState, build_deck,
};
use tracing::{debug, error, info, instrument, warn};

/// Drives one game at a time for a front end.
#[derive(Debug)]
pub struct GameController<C: Clock + Clone> {
    config: GameConfig,
    clock: C,
    session: Option<GameSession<C>>,
    outbox: Vec<Notification>,
}

impl<C: Clock + Clone> GameController<C> {
    /// Creates a controller with no game dealt.
    pub fn new(config: GameConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            session: None,
            outbox: Vec::new(),
        }
    }

    /// Loads the season's icons and deals a new game.
    ///
    /// On failure an error notification is queued, any previous game is
    /// discarded, and the board stays empty. Returns whether a game started.
    #[instrument(skip(self, supply, rng))]
    pub fn start<S, R>(&mut self, supply: &S, season: Season, rng: &mut R) -> bool
    where
        S: IconSupply + ?Sized,
        R: Rng + ?Sized,
    {
        self.session = None;

        let icons = match supply.icons_for_season(season) {
            Ok(icons) => icons,
            Err(e) => {
                error!(error = %e, "Icon supply failed");
                self.outbox.push(Notification::icons_unavailable(e));
                return false;
            }
        };

        let deck = match build_deck(&icons, *self.config.grid_size(), rng) {
            Ok(deck) => deck,
            Err(e) => {
                error!(error = %e, "Could not deal a deck");
                self.outbox.push(Notification::icons_unavailable(e));
                return false;
            }
        };

        info!(tiles = deck.len(), %season, "Game dealt");
        self.session = Some(GameSession::new(
            &deck,
            self.config.session_settings(),
            self.clock.clone(),
        ));
        true
    }

    /// Activates a tile the way a tile widget would: by id, carrying the
    /// icon printed on it.
    ///
    /// Matched tiles are ignored. Faults are reported as notifications.
    #[instrument(skip(self))]
    pub fn select(&mut self, tile_id: TileId) -> Option<SelectionOutcome> {
        self.tick();
        let session = self.session.as_mut()?;

        let tile = match session.board().find_by_id(tile_id) {
            Ok(tile) => tile,
            Err(e) => {
                warn!(error = %e, "Selection for unknown tile");
                self.outbox.push(Notification::unexpected(e));
                return None;
            }
        };

        if *tile.state() == TileState::Matched {
            debug!("Ignoring click on matched tile");
            return None;
        }

        let selection = Selection::new(tile.icon().clone(), *tile.id());
        match session.select(selection) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!(error = %e, "Selection rejected");
                self.outbox.push(Notification::unexpected(e));
                None
            }
        }
    }

    /// Runs due deferred actions, queueing the game-over notice when the
    /// board clears.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        match session.tick() {
            Ok(events) => {
                for event in &events {
                    if let GameEvent::Completed(completed) = event {
                        info!(elapsed = completed.elapsed_seconds, "Game over");
                        self.outbox.push(Notification::game_over(completed));
                    }
                }
                events
            }
            Err(e) => {
                error!(error = %e, "Deferred action failed");
                self.outbox.push(Notification::unexpected(e));
                Vec::new()
            }
        }
    }

    /// Takes every queued notification.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    /// The current game, if one is dealt.
    pub fn session(&self) -> Option<&GameSession<C>> {
        self.session.as_ref()
    }

    /// True once the current game is over.
    pub fn is_finished(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_complete)
    }

    /// The configuration the controller deals with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
