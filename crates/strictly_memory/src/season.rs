//! Seasons select which icon set a game is dealt from.

use chrono::{Datelike, Local};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Season key understood by icon supplies.
///
/// Months map onto seasons in blocks of three, starting in January:
///
/// | months (0-indexed) | season |
/// |---|---|
/// | 0–2  | winter |
/// | 3–5  | summer |
/// | 6–8  | rainy  |
/// | 9–11 | spring |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Season {
    /// January through March.
    Winter,
    /// April through June.
    Summer,
    /// July through September.
    Rainy,
    /// October through December.
    Spring,
}

/// Month index outside `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Month index {month} is out of range (expected 0-11)")]
pub struct SeasonError {
    /// The rejected month index.
    pub month: u32,
}

impl Season {
    /// Resolves the season for a 0-indexed month (January = 0).
    ///
    /// # Errors
    ///
    /// Returns [`SeasonError`] for indices of 12 or more.
    #[instrument]
    pub fn from_month0(month: u32) -> Result<Self, SeasonError> {
        match month {
            0..=2 => Ok(Season::Winter),
            3..=5 => Ok(Season::Summer),
            6..=8 => Ok(Season::Rainy),
            9..=11 => Ok(Season::Spring),
            _ => Err(SeasonError { month }),
        }
    }

    /// Resolves the season for a calendar date.
    pub fn for_date(date: &impl Datelike) -> Self {
        // month0() is always in 0..12
        Self::from_month0(date.month0()).unwrap_or(Season::Spring)
    }

    /// Resolves the season for today's local date.
    #[instrument]
    pub fn current() -> Self {
        let season = Self::for_date(&Local::now().date_naive());
        tracing::debug!(%season, "Resolved current season");
        season
    }
}
