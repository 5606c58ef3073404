//! File-backed raffle roster with lock-serialized updates and fair pair draws.
//!
//! # Examples
//!
//! Synchronous usage with [`core::store::RecordStore`]:
//! ```
//! use raffle_roster::core::store::{RecordStore, Rejected, StoreError};
//!
//! let store = RecordStore::in_memory();
//! store.add("Alice").expect("add");
//! store.add("  Bob ").expect("add");
//! assert_eq!(store.list().expect("list"), vec!["Alice", "Bob"]);
//!
//! let err = store.add("Alice").unwrap_err();
//! assert!(matches!(err, StoreError::Rejected(Rejected::Duplicate(_))));
//!
//! let pair = store.draw().expect("draw");
//! assert_ne!(pair.first, pair.second);
//! ```
//!
//! Async usage with a file on disk:
//! ```no_run
//! use raffle_roster::{
//!     api::router::Router,
//!     config::RosterConfig,
//!     runtime::handle::RosterHandle,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = RosterHandle::open(&RosterConfig::default()).expect("open roster");
//! handle.add("Alice").await.expect("add");
//! let router = Router::new(handle);
//! let reply = router.dispatch("GET", "/api/list", b"").await;
//! assert_eq!(reply.status, 200);
//! # }
//! ```
#![deny(missing_docs)]

/// Request/response payloads and path routing.
pub mod api;
/// Startup configuration.
pub mod config;
/// Record store and draw algorithm.
pub mod core;
/// Roster persistence abstraction and backends.
pub mod persist;
/// Async handle and events.
pub mod runtime;
/// Shared roster types.
pub mod types;
