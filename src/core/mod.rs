//! Lock-serialized roster store and the draw algorithm.

/// Uniform two-winner selection.
pub mod draw;
/// Mutex-guarded record store.
pub mod store;
