// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer identity.

use core::fmt;

/// A handle to a layer in a [`LayerStore`](super::LayerStore).
///
/// Layers are never destroyed individually, so the slot index alone is a
/// stable identity for the lifetime of the owning engine.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId {
    /// Slot index into the store's arrays.
    pub(crate) idx: u32,
}

impl LayerId {
    /// Creates a handle for slot `idx`.
    ///
    /// Handles are normally obtained from [`LayerStore::insert`]; this is
    /// for backends and tests that index their own per-layer data.
    ///
    /// [`LayerStore::insert`]: super::LayerStore::insert
    #[inline]
    #[must_use]
    pub const fn from_index(idx: u32) -> Self {
        Self { idx }
    }

    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({})", self.idx)
    }
}
