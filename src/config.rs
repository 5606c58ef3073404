//! Startup configuration.

use std::path::PathBuf;

/// Default backing file name.
pub const DEFAULT_DATA_FILE: &str = "names.txt";

/// Settings for opening a roster service.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Roster file; created empty on open if missing.
    pub data_path: PathBuf,
    /// Buffered [`crate::runtime::events::RosterEvent`]s per subscriber.
    pub event_capacity: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            event_capacity: 1024,
        }
    }
}

impl RosterConfig {
    /// Default settings with a different data file.
    pub fn with_data_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
            ..Self::default()
        }
    }
}
