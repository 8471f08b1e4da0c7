// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility gate.

use crate::geometry::GeometryCache;

/// Returns whether the container is close enough to the viewport for a
/// cycle to compute progress.
///
/// True while the container's bottom edge has not scrolled above the top of
/// the viewport, and the scroll position has come within one viewport height
/// of the container's top edge. `scroll_top` must already be clamped.
#[inline]
#[must_use]
pub fn is_visible(cache: &GeometryCache, scroll_top: f64) -> bool {
    cache.container_offset_bottom() >= scroll_top
        && scroll_top >= cache.container_offset_top - cache.viewport_height
}

#[cfg(test)]
mod tests {
    use super::*;

    const CACHE: GeometryCache = GeometryCache {
        viewport_height: 800.0,
        container_offset_top: 1000.0,
        container_outer_height: 500.0,
        scroll_window_delta: 800.0,
    };

    #[test]
    fn inside_band_is_visible() {
        assert!(is_visible(&CACHE, 1200.0), "overlapping container");
        assert!(is_visible(&CACHE, 200.0), "top edge at viewport bottom");
        assert!(is_visible(&CACHE, 1500.0), "bottom edge at viewport top");
    }

    #[test]
    fn outside_band_is_not_visible() {
        assert!(!is_visible(&CACHE, 3000.0), "far below");
        assert!(!is_visible(&CACHE, 1600.0), "container scrolled past");
        assert!(!is_visible(&CACHE, 199.0), "container not reached yet");
    }
}
