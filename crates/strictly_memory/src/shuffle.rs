//! Deck building: shuffle a seasonal icon pool and deal it in pairs.
//!
//! A deal takes `grid_size × 2` distinct icons from a shuffled pool and
//! appends an independently shuffled copy of that selection, so a deck of
//! `grid_size × 4` icons holds every selected icon exactly twice.

use crate::Icon;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, warn};

/// Number of distinct-icon slot pairs on a board (`gridSize`).
///
/// A board built from a grid size of `n` draws `2n` distinct icons and
/// deals `4n` tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Grid size used when none is configured.
    pub const DEFAULT: GridSize = GridSize(4);

    /// Creates a grid size.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ZeroGridSize`] for zero.
    pub fn new(size: usize) -> Result<Self, DeckError> {
        if size == 0 {
            return Err(DeckError::ZeroGridSize);
        }
        Ok(Self(size))
    }

    /// Returns the raw grid size.
    pub fn get(self) -> usize {
        self.0
    }

    /// Distinct icons drawn from the pool.
    pub fn distinct_icons(self) -> usize {
        self.0 * 2
    }

    /// Tiles on the dealt board.
    pub fn tile_count(self) -> usize {
        self.0 * 4
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for GridSize {
    type Error = DeckError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

/// Errors building a deck.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DeckError {
    /// A board needs at least one slot pair.
    #[display("Grid size must be at least 1")]
    ZeroGridSize,
    /// The pool cannot fill the board with distinct icons.
    #[display("Icon pool has {available} distinct icons but the board needs {required}")]
    InsufficientIcons {
        /// Distinct icons the grid size requires.
        required: usize,
        /// Distinct icons in the pool.
        available: usize,
    },
    /// A deck must hold at least one pair.
    #[display("Deck is empty")]
    Empty,
    /// An icon does not appear exactly twice.
    #[display("Icon {icon} appears {count} times (expected 2)")]
    Unpaired {
        /// Offending icon.
        icon: Icon,
        /// Occurrences in the deck.
        count: usize,
    },
}

/// Shuffles `items` in place with the Fisher–Yates algorithm.
///
/// Scans from the last index down, swapping each element with a uniformly
/// chosen element at an equal or lower index. Every permutation is equally
/// likely given a uniform `rng`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Ordered icon sequence dealt onto a board, every icon exactly twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Icon>", into = "Vec<Icon>")]
pub struct Deck {
    icons: Vec<Icon>,
}

impl Deck {
    /// Builds a deck from an explicit sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] for an empty sequence and
    /// [`DeckError::Unpaired`] when any icon does not appear exactly twice.
    #[instrument(skip(icons), fields(len = icons.len()))]
    pub fn from_icons(icons: Vec<Icon>) -> Result<Self, DeckError> {
        if icons.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut counts: HashMap<&Icon, usize> = HashMap::new();
        for icon in &icons {
            *counts.entry(icon).or_default() += 1;
        }

        // Report the first offender in deal order so errors are stable.
        if let Some(icon) = icons.iter().find(|icon| counts[icon] != 2) {
            let count = counts[icon];
            warn!(%icon, count, "Deck violates pairing");
            return Err(DeckError::Unpaired {
                icon: icon.clone(),
                count,
            });
        }

        Ok(Self { icons })
    }

    /// Icons in deal order.
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// Number of tiles the deck deals.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Always false; a deck holds at least one pair.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Number of pairs on the board.
    pub fn pair_count(&self) -> usize {
        self.icons.len() / 2
    }

    /// Consumes the deck, returning its icons.
    pub fn into_icons(self) -> Vec<Icon> {
        self.icons
    }
}

impl TryFrom<Vec<Icon>> for Deck {
    type Error = DeckError;

    fn try_from(icons: Vec<Icon>) -> Result<Self, Self::Error> {
        Self::from_icons(icons)
    }
}

impl From<Deck> for Vec<Icon> {
    fn from(deck: Deck) -> Self {
        deck.icons
    }
}

/// Deals a deck of `grid_size.tile_count()` icons from `pool`.
///
/// Duplicate icons in the pool are dropped (first occurrence kept) before
/// shuffling, so every icon in the result appears exactly twice.
///
/// # Errors
///
/// Returns [`DeckError::InsufficientIcons`] when the pool has fewer than
/// `grid_size.distinct_icons()` distinct icons.
#[instrument(skip(pool, rng), fields(pool_len = pool.len(), grid_size = %grid_size))]
pub fn build_deck<R: Rng + ?Sized>(
    pool: &[Icon],
    grid_size: GridSize,
    rng: &mut R,
) -> Result<Deck, DeckError> {
    let mut seen = HashSet::new();
    let mut selection: Vec<Icon> = pool
        .iter()
        .filter(|icon| seen.insert(*icon))
        .cloned()
        .collect();

    if selection.len() < pool.len() {
        debug!(
            dropped = pool.len() - selection.len(),
            "Dropped duplicate icons from pool"
        );
    }

    let required = grid_size.distinct_icons();
    if selection.len() < required {
        warn!(required, available = selection.len(), "Icon pool too small");
        return Err(DeckError::InsufficientIcons {
            required,
            available: selection.len(),
        });
    }

    fisher_yates(&mut selection, rng);
    selection.truncate(required);

    let mut second = selection.clone();
    fisher_yates(&mut second, rng);
    selection.extend(second);

    info!(tiles = selection.len(), "Dealt deck");
    Ok(Deck { icons: selection })
}
