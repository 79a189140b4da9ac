//! Icon supply: seasonal icon sets.

use crate::{Icon, Season};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// A source of icons for a season.
///
/// Implementations may read a bundled resource, a file, or a remote
/// service; the engine only needs the list for one season.
pub trait IconSupply {
    /// Returns the icons available for `season`.
    ///
    /// # Errors
    ///
    /// Returns [`IconSupplyError`] when the season is missing, has no
    /// icons, or the underlying source cannot be read.
    fn icons_for_season(&self, season: Season) -> Result<Vec<Icon>, IconSupplyError>;
}

/// Failure to obtain icons for a season.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum IconSupplyError {
    /// The catalog has no entry for the season.
    #[display("No icons listed for season '{season}'")]
    SeasonMissing {
        /// Requested season.
        season: Season,
    },
    /// The season is listed but its icon list is empty.
    #[display("Icon list for season '{season}' is empty")]
    Empty {
        /// Requested season.
        season: Season,
    },
    /// The catalog could not be parsed.
    #[display("Malformed icon catalog: {message}")]
    Malformed {
        /// Parser message.
        message: String,
    },
    /// The catalog could not be read.
    #[display("Failed to read icon catalog: {message}")]
    Unreadable {
        /// I/O message.
        message: String,
    },
}

/// Icons listed for one season.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonIcons {
    /// Season key; entries for seasons the engine does not know are ignored.
    season_name: String,
    /// Icons in catalog order.
    icons: Vec<Icon>,
}

impl SeasonIcons {
    /// Creates a season entry.
    pub fn new(season: Season, icons: Vec<Icon>) -> Self {
        Self {
            season_name: season.to_string(),
            icons,
        }
    }
}

/// JSON icon catalog of the form
/// `{"iconList": [{"seasonName": "winter", "icons": ["❄️", ...]}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconCatalog {
    /// Season entries; the first entry for a season wins.
    icon_list: Vec<SeasonIcons>,
}

impl IconCatalog {
    /// Creates a catalog from season entries.
    pub fn new(icon_list: Vec<SeasonIcons>) -> Self {
        Self { icon_list }
    }

    /// Parses a catalog from JSON text.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json_str(json: &str) -> Result<Self, IconSupplyError> {
        let catalog: Self = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Icon catalog failed to parse");
            IconSupplyError::Malformed {
                message: e.to_string(),
            }
        })?;
        debug!(seasons = catalog.icon_list.len(), "Parsed icon catalog");
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IconSupplyError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            warn!(error = %e, "Icon catalog could not be read");
            IconSupplyError::Unreadable {
                message: e.to_string(),
            }
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(seasons = catalog.icon_list.len(), "Icon catalog loaded");
        Ok(catalog)
    }
}

impl IconSupply for IconCatalog {
    #[instrument(skip(self))]
    fn icons_for_season(&self, season: Season) -> Result<Vec<Icon>, IconSupplyError> {
        let entry = self
            .icon_list
            .iter()
            .find(|entry| entry.season_name == season.as_ref())
            .ok_or(IconSupplyError::SeasonMissing { season })?;

        if entry.icons.is_empty() {
            return Err(IconSupplyError::Empty { season });
        }

        debug!(count = entry.icons.len(), "Supplying seasonal icons");
        Ok(entry.icons.clone())
    }
}
