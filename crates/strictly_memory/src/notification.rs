//! User-facing notification events.

use crate::GameCompleted;
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Title shown when the board is cleared.
pub const GAME_OVER_TITLE: &str = "Game Over!";

/// Title shown when no icons could be loaded.
pub const ICONS_UNAVAILABLE_TITLE: &str = "Error loading icons";

/// Title shown for faults caught while handling input.
pub const UNEXPECTED_ERROR_TITLE: &str = "Unexpected error occurred!";

/// Notification tone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Something good happened.
    Success,
    /// Something failed.
    Error,
}

/// A message for the player: `{title, message, severity}`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Getters, Serialize, Deserialize)]
#[display("[{severity}] {title}: {message}")]
pub struct Notification {
    title: String,
    message: String,
    severity: Severity,
}

impl Notification {
    /// Creates a notification.
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// Completion notice carrying the elapsed time.
    pub fn game_over(completed: &GameCompleted) -> Self {
        Self::new(
            GAME_OVER_TITLE,
            format!(
                "Time taken: {} seconds! Start a new game to play again...",
                completed.elapsed_seconds
            ),
            Severity::Success,
        )
    }

    /// Icon supply failure; the game cannot start.
    pub fn icons_unavailable(detail: impl std::fmt::Display) -> Self {
        Self::new(ICONS_UNAVAILABLE_TITLE, detail.to_string(), Severity::Error)
    }

    /// Fault caught at the input boundary.
    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        Self::new(UNEXPECTED_ERROR_TITLE, detail.to_string(), Severity::Error)
    }

    /// True for error notifications.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
