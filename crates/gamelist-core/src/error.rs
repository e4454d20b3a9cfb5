//! Error types for record access and for loading host-side data files.

use thiserror::Error;

use crate::record::GameId;

/// A field a comparator needs is absent from a game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record carries no clock.
    #[error("game {0} has no clock")]
    MissingClock(GameId),

    /// The record carries no move list.
    #[error("game {0} has no move list")]
    MissingMoves(GameId),

    /// One of the two seats is empty.
    #[error("game {0} is missing a player")]
    MissingPlayer(GameId),
}

/// Errors raised while reading or writing games, preferences or catalogs.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read or written.
    #[error("could not access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The contents were not valid JSON for the expected shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn json(path: &str, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_string(),
            source,
        }
    }
}
