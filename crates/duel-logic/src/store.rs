//! JSON-file match history
//!
//! The whole history is one JSON array. Appending reads it, pushes the new
//! record and rewrites the file through a temporary sibling plus rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::record::MatchRecord;

/// History file used when none is configured.
pub const DEFAULT_HISTORY_FILE: &str = "general.json";

/// Match history persisted at a single path
#[derive(Clone, Debug)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every persisted record. A missing file is an empty history.
    pub fn load_all(&self) -> Result<Vec<MatchRecord>, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "no history file, starting with empty history");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let records: Vec<MatchRecord> =
            serde_json::from_slice(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), records = records.len(), "history loaded");
        Ok(records)
    }

    /// Add one finished match to the end of the history
    pub fn append(&self, record: MatchRecord) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        records.push(record);
        self.write_all(&records)?;
        info!(path = %self.path.display(), records = records.len(), "match appended to history");
        Ok(())
    }

    fn write_all(&self, records: &[MatchRecord]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut serializer)
            .map_err(StoreError::Serialize)?;

        let staging = self.staging_path();
        fs::write(&staging, &buf).map_err(|source| StoreError::Write {
            path: staging.clone(),
            source,
        })?;
        if let Err(source) = fs::rename(&staging, &self.path) {
            if let Err(err) = fs::remove_file(&staging) {
                warn!(path = %staging.display(), %err, "failed to remove staged history");
            }
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
