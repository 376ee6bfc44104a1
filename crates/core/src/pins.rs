//! Pinned palette slots.
//!
//! Pins belong to whoever drives the palette (a UI, the CLI), not to this
//! crate: callers own a [`PinSet`] and pass it into [`regenerate`].

use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of pinned slot indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinSet {
    slots: BTreeSet<usize>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the pin on `index` and returns whether it is now pinned.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.slots.remove(&index) {
            false
        } else {
            self.slots.insert(index);
            true
        }
    }

    pub fn pin(&mut self, index: usize) {
        self.slots.insert(index);
    }

    pub fn unpin(&mut self, index: usize) {
        self.slots.remove(&index);
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        self.slots.contains(&index)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pinned indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }
}

impl FromIterator<usize> for PinSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// Merges a freshly generated palette with the pinned slots of `previous`.
///
/// The result has `fresh.len()` slots. Slot `i` keeps `previous[i]` when
/// `i` is pinned and `previous` has that slot; otherwise it takes
/// `fresh[i]`. Pins past the end of either palette are ignored.
pub fn regenerate(previous: &Palette, pins: &PinSet, fresh: Palette) -> Palette {
    let colors = fresh
        .into_vec()
        .into_iter()
        .enumerate()
        .map(|(i, color)| match previous.get(i) {
            Some(kept) if pins.is_pinned(i) => kept.to_string(),
            _ => color,
        })
        .collect();
    Palette::from_hex_unchecked(colors)
}
