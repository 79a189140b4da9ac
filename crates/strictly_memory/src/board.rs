//! Tile state machine.
//!
//! Each tile moves `Hidden → Revealed → Hidden` on a failed attempt and
//! `Hidden → Revealed → Matched` on a successful one. `Matched` is terminal.

use crate::{Deck, Icon};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tile identifier: the tile's position in the dealt sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct TileId(usize);

impl TileId {
    /// Creates a tile id.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position index.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Lifecycle state of a tile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TileState {
    /// Face down, selectable.
    Hidden,
    /// Face up, part of a pending attempt.
    Revealed,
    /// Removed from play.
    Matched,
}

/// One cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tile {
    /// Position in the dealt sequence.
    id: TileId,
    /// Icon shared with exactly one other tile.
    icon: Icon,
    /// Current lifecycle state.
    state: TileState,
}

impl Tile {
    /// Returns true while the tile is still in play.
    pub fn is_active(&self) -> bool {
        self.state != TileState::Matched
    }

    /// Returns true when the icon is visible (revealed or matched).
    pub fn is_face_up(&self) -> bool {
        self.state != TileState::Hidden
    }
}

/// Board operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// No tile has the id.
    #[display("Tile {id} not found")]
    NotFound {
        /// Requested id.
        id: TileId,
    },
}

/// Ordered tiles of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
    active: usize,
}

impl Board {
    /// Deals a fresh board: one hidden tile per deck entry, in deck order.
    #[instrument(skip(deck), fields(tiles = deck.len()))]
    pub fn new(deck: &Deck) -> Self {
        let tiles: Vec<Tile> = deck
            .icons()
            .iter()
            .enumerate()
            .map(|(index, icon)| Tile {
                id: TileId(index),
                icon: icon.clone(),
                state: TileState::Hidden,
            })
            .collect();
        let active = tiles.len();
        debug!(active, "Board initialized");
        Self { tiles, active }
    }

    /// Looks up a tile.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] for ids outside the dealt range.
    pub fn find_by_id(&self, id: TileId) -> Result<&Tile, BoardError> {
        self.tiles.get(id.0).ok_or(BoardError::NotFound { id })
    }

    fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile, BoardError> {
        self.tiles.get_mut(id.0).ok_or(BoardError::NotFound { id })
    }

    /// Turns a hidden tile face up. Revealed and matched tiles are left alone.
    #[instrument(skip(self), fields(active = self.active))]
    pub fn reveal(&mut self, id: TileId) -> Result<(), BoardError> {
        let tile = self.tile_mut(id)?;
        match tile.state {
            TileState::Hidden => {
                tile.state = TileState::Revealed;
                debug!(icon = %tile.icon, "Tile revealed");
            }
            state => debug!(%state, "Reveal ignored"),
        }
        Ok(())
    }

    /// Turns a revealed tile face down again.
    ///
    /// Hidden tiles stay hidden and matched tiles are never brought back
    /// into play.
    #[instrument(skip(self), fields(active = self.active))]
    pub fn hide(&mut self, id: TileId) -> Result<(), BoardError> {
        let tile = self.tile_mut(id)?;
        match tile.state {
            TileState::Revealed => {
                tile.state = TileState::Hidden;
                debug!("Tile hidden");
            }
            state => debug!(%state, "Hide ignored"),
        }
        Ok(())
    }

    /// Removes a tile from play, decrementing the active count once.
    #[instrument(skip(self), fields(active = self.active))]
    pub fn remove(&mut self, id: TileId) -> Result<(), BoardError> {
        let tile = self.tile_mut(id)?;
        if tile.state == TileState::Matched {
            debug!("Tile already removed");
            return Ok(());
        }
        tile.state = TileState::Matched;
        self.active -= 1;
        debug!(active = self.active, "Tile removed");
        Ok(())
    }

    /// Tiles in deal order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles on the board, matched or not.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True for a board with no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles still in play (hidden or revealed).
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// True once every tile has been matched.
    pub fn is_cleared(&self) -> bool {
        self.active == 0
    }

    /// Formats the board as rows of `columns` cells: tile numbers for hidden
    /// tiles, icons for revealed ones, blanks for matched ones.
    pub fn display(&self, columns: usize) -> String {
        let columns = columns.max(1);
        let width = self.tiles.len().saturating_sub(1).to_string().len();
        self.tiles
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|tile| match tile.state {
                        TileState::Hidden => format!("[{:>width$}]", tile.id.0),
                        TileState::Revealed => format!("[{:^width$}]", tile.icon.as_str()),
                        TileState::Matched => format!(" {:width$} ", ""),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
