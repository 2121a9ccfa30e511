//! Roster persistence service
//!
//! Loads and saves the guest list as a single binary file, rewritten
//! wholesale on every save.
//!
//! # File format
//!
//! The roster file is the bincode encoding of the ordered entry list:
//! a little-endian u64 entry count, then per entry a u64 length-prefixed
//! UTF-8 name followed by a little-endian i64 party size. The format
//! round-trips order and field values exactly; it is not meant to be
//! hand-edited.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{GuestEntry, GuestList};
use crate::infrastructure::traits::FileSystem;

/// Service for loading and saving the guest roster.
pub struct RosterService {
    fs: Arc<dyn FileSystem>,
    data_file: PathBuf,
}

impl RosterService {
    /// Create a roster service for the given data file.
    pub fn new(fs: Arc<dyn FileSystem>, data_file: PathBuf) -> Self {
        Self { fs, data_file }
    }

    /// Path of the roster file this service reads and writes.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Load the full roster from disk.
    ///
    /// A missing file is the expected first-run condition and surfaces as
    /// `RosterNotFound`. An existing but undecodable file surfaces as
    /// `CorruptRoster`, distinct from "missing".
    pub fn load(&self) -> ApplicationResult<GuestList> {
        if !self.fs.exists(&self.data_file) {
            return Err(ApplicationError::RosterNotFound(self.data_file.clone()));
        }

        let bytes = self.fs.read(&self.data_file).map_err(|e| {
            ApplicationError::OperationFailed {
                context: format!("read roster file {}", self.data_file.display()),
                source: Box::new(e),
            }
        })?;

        let entries: Vec<GuestEntry> =
            bincode::deserialize(&bytes).map_err(|e| ApplicationError::CorruptRoster {
                path: self.data_file.clone(),
                message: e.to_string(),
            })?;

        debug!(
            "loaded {} entries from {}",
            entries.len(),
            self.data_file.display()
        );
        Ok(GuestList::from_entries(entries))
    }

    /// Serialize the full roster and overwrite the file in place.
    ///
    /// Direct overwrite; atomicity across a crash is not guaranteed.
    pub fn save(&self, roster: &GuestList) -> ApplicationResult<()> {
        let bytes = bincode::serialize(roster.entries()).map_err(|e| {
            ApplicationError::OperationFailed {
                context: format!("serialize roster ({} entries)", roster.len()),
                source: Box::new(e),
            }
        })?;

        self.fs.write(&self.data_file, &bytes).map_err(|e| {
            ApplicationError::OperationFailed {
                context: format!("write roster file {}", self.data_file.display()),
                source: Box::new(e),
            }
        })?;

        debug!(
            "saved {} entries to {}",
            roster.len(),
            self.data_file.display()
        );
        Ok(())
    }
}
