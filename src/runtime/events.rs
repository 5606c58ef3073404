//! Runtime event stream payloads.

use crate::types::{DrawPair, Entry};

/// Events emitted after a roster operation succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// A name was appended.
    Added {
        /// Appended name, trimmed.
        name: Entry,
    },
    /// A name was removed.
    Deleted {
        /// Removed name.
        name: Entry,
    },
    /// A pair of winners was drawn.
    Drawn {
        /// Drawn winners.
        pair: DrawPair,
    },
}
