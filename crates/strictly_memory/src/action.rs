//! First-class event types for the memory game.
//!
//! Selections are what the player does; deferred actions are what the
//! engine promises to do once the reveal delay has passed. Both are plain
//! data so they can be logged, queued, and replayed.

use crate::{Icon, TileId};
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player activating a tile.
///
/// Serializes as `{"icon": ..., "tileId": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
#[display("tile {tile_id} ({icon})")]
pub struct Selection {
    /// Icon printed on the activated tile.
    #[new(into)]
    pub icon: Icon,
    /// Activated tile.
    #[new(into)]
    pub tile_id: TileId,
}

/// A board transition scheduled to run after the reveal delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pair", rename_all = "snake_case")]
pub enum DeferredAction {
    /// Turn both tiles of a failed attempt face down.
    #[display("hide {} and {}", _0[0], _0[1])]
    HidePair([TileId; 2]),
    /// Remove both tiles of a match from play.
    #[display("remove {} and {}", _0[0], _0[1])]
    RemovePair([TileId; 2]),
}

impl DeferredAction {
    /// The two tiles the action touches.
    pub fn pair(&self) -> [TileId; 2] {
        match self {
            DeferredAction::HidePair(pair) | DeferredAction::RemovePair(pair) => *pair,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let selection = Selection::new("🍂", TileId::new(3));
        assert_eq!(selection.to_string(), "tile 3 (🍂)");

        let pair = [TileId::new(1), TileId::new(4)];
        assert_eq!(DeferredAction::HidePair(pair).to_string(), "hide 1 and 4");
        assert_eq!(DeferredAction::RemovePair(pair).to_string(), "remove 1 and 4");
    }
}
