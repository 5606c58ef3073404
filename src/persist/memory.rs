//! In-process roster source.

use crate::types::{Entry, Roster};

use super::{PersistResult, RosterSource, parse_lines, render_lines};

/// [`RosterSource`] holding the rendered text in memory.
///
/// Saved entries go through the same line rendering and parsing as the file
/// format, so blank or padded names normalize the same way.
#[derive(Debug, Clone, Default)]
pub struct MemoryList {
    text: String,
}

impl MemoryList {
    /// Empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster seeded with `entries`.
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Entry>,
    {
        let entries: Vec<Entry> = entries.into_iter().map(Into::into).collect();
        Self {
            text: render_lines(&entries),
        }
    }

    /// Raw stored text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl RosterSource for MemoryList {
    fn load(&mut self) -> PersistResult<Roster> {
        Ok(parse_lines(&self.text))
    }

    fn save(&mut self, entries: &[Entry]) -> PersistResult<()> {
        self.text = render_lines(entries);
        Ok(())
    }
}
