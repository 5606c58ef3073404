//! Async facade and event stream APIs.

/// Event stream types emitted by the handle.
pub mod events;
/// Async handle over the record store.
pub mod handle;
