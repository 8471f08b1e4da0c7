// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays layer storage.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use kurbo::Vec2;

use super::id::LayerId;
use crate::config::LayerConfig;

/// Struct-of-arrays storage for the layers of one container.
///
/// Layers are addressed by [`LayerId`] handles handed out in insertion order,
/// which is also the order cycles resolve and apply them in.
#[derive(Clone, Debug, Default)]
pub struct LayerStore {
    // -- Configuration (set once at insertion) --
    pub(crate) config: Vec<LayerConfig>,

    // -- Runtime state (written by applying cycles) --
    pub(crate) applied: Vec<Option<Vec2>>,
}

impl LayerStore {
    /// Creates an empty layer store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer with a resolved configuration and returns its handle.
    pub fn insert(&mut self, config: LayerConfig) -> LayerId {
        let idx = u32::try_from(self.config.len()).expect("more than u32::MAX layers");
        self.config.push(config);
        self.applied.push(None);
        LayerId { idx }
    }

    /// Returns the number of layers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.config.len()
    }

    /// Returns whether the store has no layers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    /// Returns whether `id` refers to a layer in this store.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: LayerId) -> bool {
        (id.idx as usize) < self.config.len()
    }

    /// Returns the resolved configuration of a layer.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this store.
    #[must_use]
    pub fn config(&self, id: LayerId) -> &LayerConfig {
        self.validate(id);
        &self.config[id.idx as usize]
    }

    /// Returns the translation most recently applied to a layer, or `None`
    /// if no cycle has reached the applying stage yet.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this store.
    #[must_use]
    pub fn applied(&self, id: LayerId) -> Option<Vec2> {
        self.validate(id);
        self.applied[id.idx as usize]
    }

    /// Iterates over all layer handles in application order.
    pub fn ids(&self) -> Layers {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "insert keeps the layer count within u32"
        )]
        let end = self.config.len() as u32;
        Layers { next: 0, end }
    }

    /// Records the translation applied to a layer.
    pub(crate) fn record_applied(&mut self, id: LayerId, translation: Vec2) {
        self.validate(id);
        self.applied[id.idx as usize] = Some(translation);
    }

    /// Panics if the handle is out of range.
    fn validate(&self, id: LayerId) {
        assert!(
            self.contains(id),
            "unknown LayerId: {id:?} (store has {} layers)",
            self.config.len()
        );
    }
}

/// Iterator over the [`LayerId`]s of a [`LayerStore`].
#[derive(Clone, Debug)]
pub struct Layers {
    next: u32,
    end: u32,
}

impl Iterator for Layers {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        if self.next >= self.end {
            return None;
        }
        let id = LayerId { idx: self.next };
        self.next += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Layers {}

impl FusedIterator for Layers {}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::config::{Direction, Distance};

    #[test]
    fn insert_hands_out_sequential_ids() {
        let mut store = LayerStore::new();
        assert!(store.is_empty());
        let a = store.insert(LayerConfig::default());
        let b = store.insert(LayerConfig {
            distance: Distance::Pixels(30.0),
            direction: Direction::Left,
        });
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.config(b).direction, Direction::Left);
    }

    #[test]
    fn ids_iterate_in_insertion_order() {
        let mut store = LayerStore::new();
        let ids = vec![
            store.insert(LayerConfig::default()),
            store.insert(LayerConfig::default()),
            store.insert(LayerConfig::default()),
        ];
        let iter = store.ids();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), ids);
    }

    #[test]
    fn applied_starts_empty() {
        let mut store = LayerStore::new();
        let id = store.insert(LayerConfig::default());
        assert_eq!(store.applied(id), None);
        store.record_applied(id, Vec2::new(0.0, 12.0));
        assert_eq!(store.applied(id), Some(Vec2::new(0.0, 12.0)));
    }

    #[test]
    #[should_panic(expected = "unknown LayerId")]
    fn foreign_handle_panics() {
        let store = LayerStore::new();
        let _ = store.config(LayerId::from_index(4));
    }
}
