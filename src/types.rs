//! Shared roster value types.

use serde::{Deserialize, Serialize};

/// One participant name. Always trimmed and non-empty once stored.
pub type Entry = String;
/// Insertion-ordered, duplicate-free list of entries.
pub type Roster = Vec<Entry>;

/// Two distinct entries selected by a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPair {
    /// First winner.
    pub first: Entry,
    /// Second winner, never equal to `first`.
    pub second: Entry,
}

impl DrawPair {
    /// Returns both winners in draw order.
    pub fn into_array(self) -> [Entry; 2] {
        [self.first, self.second]
    }

    /// True if `name` is one of the two winners.
    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }
}

impl From<DrawPair> for (Entry, Entry) {
    fn from(value: DrawPair) -> Self {
        (value.first, value.second)
    }
}

/// Trims `raw` and returns it if anything is left.
pub fn normalize_entry(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
