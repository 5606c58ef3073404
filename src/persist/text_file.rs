//! Flat newline-delimited roster file.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::types::{Entry, Roster};

use super::{PersistError, PersistResult, RosterSource, parse_lines, render_lines};

/// File-backed [`RosterSource`] with one entry per line.
#[derive(Debug, Clone)]
pub struct TextFileList {
    path: PathBuf,
}

impl TextFileList {
    /// Wraps `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Wraps `path` and creates the file empty if it does not exist yet.
    pub fn create(path: impl Into<PathBuf>) -> PersistResult<Self> {
        let list = Self::new(path);
        list.ensure_exists()?;
        Ok(list)
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file if it is missing. Returns true when it was created.
    pub fn ensure_exists(&self) -> PersistResult<bool> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                log::info!(target: "raffle_roster", "created empty roster file {}", self.path.display());
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(source) => Err(PersistError::Create {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn write_err(&self, source: std::io::Error) -> PersistError {
        PersistError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl RosterSource for TextFileList {
    fn load(&mut self) -> PersistResult<Roster> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(parse_lines(&text)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.ensure_exists()?;
                Ok(Roster::new())
            }
            Err(source) => Err(PersistError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Writes a sibling temp file and renames it over the target, so readers
    /// see either the old or the new roster.
    fn save(&mut self, entries: &[Entry]) -> PersistResult<()> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| self.write_err(e))?;
        tmp.write_all(render_lines(entries).as_bytes())
            .map_err(|e| self.write_err(e))?;
        tmp.as_file().sync_all().map_err(|e| self.write_err(e))?;

        // The temp file starts owner-only; take the target's mode, recreating the
        // target first if it vanished so the umask-derived default applies.
        let meta = match fs::metadata(&self.path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.ensure_exists()?;
                fs::metadata(&self.path).map_err(|e| self.write_err(e))?
            }
            Err(err) => return Err(self.write_err(err)),
        };
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| self.write_err(e))?;

        tmp.persist(&self.path).map_err(|e| self.write_err(e.error))?;
        Ok(())
    }
}
