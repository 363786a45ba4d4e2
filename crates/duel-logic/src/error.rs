//! Error types for record decoding and history persistence

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A persisted value that cannot be turned back into a domain value.
///
/// Raised from serde `try_from` conversions, so it surfaces to callers
/// wrapped in a [`StoreError::Parse`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RecordError {
    #[error("unknown play index {0}")]
    UnknownPlay(i64),

    #[error("unknown winner {0} (expected 0, 1 or 2)")]
    UnknownWinner(i64),

    #[error("expected an integral number, got {0}")]
    NonIntegral(f64),

    #[error("attribute value {0} outside [0, 1024]")]
    AttributeOutOfRange(i64),

    #[error("count {0} is negative or too large")]
    InvalidCount(i64),
}

/// Failure reading or writing the match history file.
///
/// A missing file is not represented here; the store treats it as an
/// empty history.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read history {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse history {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize history: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write history {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Misuse of a match state machine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("match already finished after {0} turns")]
    AlreadyFinished(u32),
}
