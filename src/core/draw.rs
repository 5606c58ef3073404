//! Uniform pair selection.

use rand::{Rng, seq::index};

use crate::types::{DrawPair, Entry};

/// Picks two entries at distinct positions, uniformly over all pairs.
///
/// Samples two indices from `[0, n)` without replacement, which is the same
/// distribution as the first two slots of a uniform permutation. Returns
/// `None` when fewer than two entries are available.
pub fn pick_pair<R: Rng + ?Sized>(entries: &[Entry], rng: &mut R) -> Option<DrawPair> {
    if entries.len() < 2 {
        return None;
    }

    let picked = index::sample(rng, entries.len(), 2);
    Some(DrawPair {
        first: entries[picked.index(0)].clone(),
        second: entries[picked.index(1)].clone(),
    })
}
