use std::{
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use rand::Rng;
use thiserror::Error;

use crate::{
    persist::{PersistError, RosterSource, memory::MemoryList, text_file::TextFileList},
    types::{DrawPair, Entry, Roster, normalize_entry},
};

use super::draw::pick_pair;

/// Business-rule refusal. The display text is the user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    /// Name was empty after trimming.
    #[error("name must not be empty")]
    EmptyName,
    /// Name contains a line break and would not survive the line format.
    #[error("name {0:?} must not contain line breaks")]
    InvalidName(Entry),
    /// Name is already on the roster.
    #[error("name {0:?} already exists")]
    Duplicate(Entry),
    /// No entry matched the delete target.
    #[error("name {0:?} not found")]
    NotFound(Entry),
    /// Draw needs at least two entries.
    #[error("need at least 2 names to draw, roster has {count}")]
    InsufficientEntries {
        /// Entries present at draw time.
        count: usize,
    },
}

/// Failure of a [`RecordStore`] operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Refused by a roster rule; nothing was written.
    #[error(transparent)]
    Rejected(#[from] Rejected),
    /// Backing resource could not be read or written.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl StoreError {
    /// The rejection, if this is a business-rule failure.
    pub fn rejection(&self) -> Option<&Rejected> {
        match self {
            Self::Rejected(r) => Some(r),
            Self::Persist(_) => None,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Mutex-guarded roster over a [`RosterSource`].
///
/// Holds no cached roster: each call loads the source, computes, optionally
/// saves, all while holding the single lock. Read-only calls take the lock
/// too so they never observe a half-finished save.
pub struct RecordStore {
    source: Mutex<Box<dyn RosterSource>>,
    path: Option<PathBuf>,
}

impl RecordStore {
    /// Wraps an arbitrary source.
    pub fn new(source: Box<dyn RosterSource>) -> Self {
        Self {
            source: Mutex::new(source),
            path: None,
        }
    }

    /// Opens a file-backed store, creating the file empty if it is absent.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let list = TextFileList::create(path)?;
        let path = list.path().to_path_buf();
        Ok(Self {
            source: Mutex::new(Box::new(list)),
            path: Some(path),
        })
    }

    /// Store over an empty [`MemoryList`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryList::new()))
    }

    /// Backing file, when file-backed.
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    /// Current roster.
    pub fn list(&self) -> StoreResult<Roster> {
        self.critical(|source| Ok(source.load()?))
    }

    /// Appends a trimmed `candidate` unless it is empty, spans lines, or is
    /// already present. Returns the roster after the append.
    pub fn add(&self, candidate: &str) -> StoreResult<Roster> {
        let name = normalize_entry(candidate).ok_or(Rejected::EmptyName)?;
        if name.contains(['\n', '\r']) {
            return Err(Rejected::InvalidName(name.to_owned()).into());
        }

        self.critical(|source| {
            let mut roster = source.load()?;
            if roster.iter().any(|n| n == name) {
                return Err(Rejected::Duplicate(name.to_owned()).into());
            }
            roster.push(name.to_owned());
            source.save(&roster)?;
            log::debug!(target: "raffle_roster", "added {name:?}, roster size {}", roster.len());
            Ok(roster)
        })
    }

    /// Removes every entry equal to the trimmed `target`, keeping the order of
    /// the rest. Nothing is written when no entry matches.
    pub fn delete(&self, target: &str) -> StoreResult<Roster> {
        let target = target.trim();

        self.critical(|source| {
            let roster = source.load()?;
            let before = roster.len();
            let kept: Roster = roster.into_iter().filter(|n| n != target).collect();
            if kept.len() == before {
                return Err(Rejected::NotFound(target.to_owned()).into());
            }
            source.save(&kept)?;
            log::debug!(target: "raffle_roster", "deleted {target:?}, roster size {}", kept.len());
            Ok(kept)
        })
    }

    /// Draws two distinct entries using the thread-local RNG.
    pub fn draw(&self) -> StoreResult<DrawPair> {
        self.draw_with(&mut rand::thread_rng())
    }

    /// Draws two distinct entries using `rng`. Never writes.
    pub fn draw_with<R: Rng + ?Sized>(&self, rng: &mut R) -> StoreResult<DrawPair> {
        self.critical(|source| {
            let roster = source.load()?;
            let pair = pick_pair(&roster, rng).ok_or(Rejected::InsufficientEntries {
                count: roster.len(),
            })?;
            log::debug!(target: "raffle_roster", "drew {:?} and {:?} from {}", pair.first, pair.second, roster.len());
            Ok(pair)
        })
    }

    fn critical<T>(&self, f: impl FnOnce(&mut dyn RosterSource) -> StoreResult<T>) -> StoreResult<T> {
        // The guarded value carries no roster state, so a poisoned lock is still usable.
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        f(source.as_mut())
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore").field("path", &self.path).finish()
    }
}
