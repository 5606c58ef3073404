use std::sync::Arc;

use thiserror::Error;
use tokio::{sync::broadcast, task::JoinError};

use crate::{
    config::RosterConfig,
    core::store::{RecordStore, StoreError},
    types::{DrawPair, Roster},
};

use super::events::RosterEvent;

/// Failure of an async roster call.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The store refused or failed the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The blocking task panicked or was cancelled.
    #[error("roster task failed: {0}")]
    Join(#[from] JoinError),
}

impl RuntimeError {
    /// The store error, if the task itself ran to completion.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store(err) => Some(err),
            Self::Join(_) => None,
        }
    }
}

/// Async handle over a shared [`RecordStore`].
///
/// Store calls do blocking file I/O under the store lock, so each one runs on
/// tokio's blocking pool. Successful mutations and draws are broadcast from
/// that blocking task, so an event goes out even if the caller stops awaiting.
#[derive(Clone)]
pub struct RosterHandle {
    store: Arc<RecordStore>,
    events_tx: broadcast::Sender<RosterEvent>,
}

impl RosterHandle {
    /// Wraps an existing store.
    pub fn new(store: RecordStore, event_capacity: usize) -> Self {
        let (events_tx, _) = broadcast::channel(event_capacity.max(1));
        Self {
            store: Arc::new(store),
            events_tx,
        }
    }

    /// Opens the file named by `config` and wraps it.
    pub fn open(config: &RosterConfig) -> Result<Self, RuntimeError> {
        let store = RecordStore::open(&config.data_path)?;
        Ok(Self::new(store, config.event_capacity))
    }

    /// Shared store, for synchronous callers.
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Receiver for events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<RosterEvent> {
        self.events_tx.subscribe()
    }

    /// See [`RecordStore::list`].
    pub async fn list(&self) -> Result<Roster, RuntimeError> {
        let store = Arc::clone(&self.store);
        Ok(tokio::task::spawn_blocking(move || store.list()).await??)
    }

    /// See [`RecordStore::add`].
    pub async fn add(&self, name: impl Into<String>) -> Result<Roster, RuntimeError> {
        let name = name.into();
        let store = Arc::clone(&self.store);
        let events_tx = self.events_tx.clone();
        let roster = tokio::task::spawn_blocking(move || {
            let roster = store.add(&name)?;
            let _ = events_tx.send(RosterEvent::Added {
                name: name.trim().to_owned(),
            });
            Ok::<_, StoreError>(roster)
        })
        .await??;
        Ok(roster)
    }

    /// See [`RecordStore::delete`].
    ///
    /// `name` is trimmed before matching, so `" Alice "` removes `Alice`.
    pub async fn delete(&self, name: impl Into<String>) -> Result<Roster, RuntimeError> {
        let name = name.into();
        let store = Arc::clone(&self.store);
        let events_tx = self.events_tx.clone();
        let roster = tokio::task::spawn_blocking(move || {
            let roster = store.delete(&name)?;
            let _ = events_tx.send(RosterEvent::Deleted {
                name: name.trim().to_owned(),
            });
            Ok::<_, StoreError>(roster)
        })
        .await??;
        Ok(roster)
    }

    /// See [`RecordStore::draw`].
    pub async fn draw(&self) -> Result<DrawPair, RuntimeError> {
        let store = Arc::clone(&self.store);
        let events_tx = self.events_tx.clone();
        let pair = tokio::task::spawn_blocking(move || {
            let pair = store.draw()?;
            let _ = events_tx.send(RosterEvent::Drawn { pair: pair.clone() });
            Ok::<_, StoreError>(pair)
        })
        .await??;
        Ok(pair)
    }
}
