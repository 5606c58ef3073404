pub mod memory;
pub mod text_file;

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Entry, Roster, normalize_entry};

/// Failure to read or write the backing roster resource.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The resource exists but could not be read.
    #[error("failed to read roster file {path}: {source}")]
    Read {
        /// Backing file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The resource was missing and could not be created.
    #[error("failed to create roster file {path}: {source}")]
    Create {
        /// Backing file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The new roster could not be written.
    #[error("failed to write roster file {path}: {source}")]
    Write {
        /// Backing file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for persistence calls.
pub type PersistResult<T> = Result<T, PersistError>;

/// Durable home of a roster.
///
/// Implementations are not synchronized themselves; [`crate::core::store::RecordStore`]
/// serializes every call behind its lock.
pub trait RosterSource: Send {
    /// Reads the full roster. A missing resource reads as empty.
    fn load(&mut self) -> PersistResult<Roster>;
    /// Replaces the full roster with `entries`.
    fn save(&mut self, entries: &[Entry]) -> PersistResult<()>;
}

/// Splits line-oriented text into entries, trimming each line and dropping blanks.
pub fn parse_lines(text: &str) -> Roster {
    text.lines()
        .filter_map(normalize_entry)
        .map(str::to_owned)
        .collect()
}

/// Joins entries with `\n`, without a trailing separator.
pub fn render_lines(entries: &[Entry]) -> String {
    entries.join("\n")
}
