// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurements and the per-cycle geometry snapshot.
//!
//! A backend reads the live layout into [`ViewportMetrics`] (plus per-layer
//! heights in [`FrameMetrics`]). At the start of every cycle the engine turns
//! those into a fresh [`GeometryCache`], replacing the previous snapshot
//! wholesale. Nothing downstream reads the layout directly.

use alloc::vec::Vec;

use crate::config::ReferenceMode;
use crate::layer::LayerId;

/// Raw layout reads for one container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    /// Height of the viewport in pixels.
    pub viewport_height: f64,
    /// Distance from the top of the document to the container's top edge.
    pub container_offset_top: f64,
    /// Rendered (outer) height of the container.
    pub container_outer_height: f64,
    /// Document scroll offset exactly as reported by the platform.
    ///
    /// May be negative during overscroll; see [`clamp_scroll_top`].
    pub scroll_top: f64,
}

impl ViewportMetrics {
    /// Returns the scroll offset clamped to be non-negative.
    #[inline]
    #[must_use]
    pub fn clamped_scroll_top(&self) -> f64 {
        clamp_scroll_top(self.scroll_top)
    }
}

/// Everything a cycle needs to know about the current layout.
///
/// `layer_heights` is indexed by [`LayerId::index`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameMetrics {
    /// Container and viewport reads.
    pub viewport: ViewportMetrics,
    /// Rendered (outer) height of each layer.
    pub layer_heights: Vec<f64>,
}

impl FrameMetrics {
    /// Creates metrics with no layer heights recorded.
    #[must_use]
    pub fn new(viewport: ViewportMetrics) -> Self {
        Self {
            viewport,
            layer_heights: Vec::new(),
        }
    }

    /// Records the outer height of `layer`.
    pub fn set_layer_height(&mut self, layer: LayerId, height: f64) {
        let slot = layer.index() as usize;
        if self.layer_heights.len() <= slot {
            self.layer_heights.resize(slot + 1, f64::NAN);
        }
        self.layer_heights[slot] = height;
    }

    /// Returns the outer height recorded for `layer`, if any.
    #[must_use]
    pub fn layer_height(&self, layer: LayerId) -> Option<f64> {
        self.layer_heights
            .get(layer.index() as usize)
            .copied()
            .filter(|h| !h.is_nan())
    }
}

/// Clamps a raw scroll reading to be non-negative.
///
/// Some platforms report negative values while rubber-banding past the top
/// of the document.
#[inline]
#[must_use]
pub fn clamp_scroll_top(raw: f64) -> f64 {
    if raw >= 0.0 { raw } else { 0.0 }
}

/// Immutable snapshot of the layout values used by one cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryCache {
    /// Height of the viewport.
    pub viewport_height: f64,
    /// Document offset of the container's top edge.
    pub container_offset_top: f64,
    /// Rendered (outer) height of the container.
    pub container_outer_height: f64,
    /// `viewport_height - offset` for [`ReferenceMode::CustomOffset`].
    ///
    /// Computed for every mode (with an offset of `0`), but only read under
    /// `CustomOffset`.
    pub scroll_window_delta: f64,
}

impl GeometryCache {
    /// Builds a snapshot from fresh measurements.
    #[must_use]
    pub fn refresh(metrics: &ViewportMetrics, mode: ReferenceMode) -> Self {
        let top = metrics.container_offset_top;
        Self {
            viewport_height: metrics.viewport_height,
            container_offset_top: top,
            container_outer_height: metrics.container_outer_height,
            scroll_window_delta: (top - mode.offset() + metrics.viewport_height) - top,
        }
    }

    /// Document offset of the container's bottom edge.
    #[inline]
    #[must_use]
    pub fn container_offset_bottom(&self) -> f64 {
        self.container_offset_top + self.container_outer_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ViewportMetrics {
        ViewportMetrics {
            viewport_height: 800.0,
            container_offset_top: 1000.0,
            container_outer_height: 500.0,
            scroll_top: 0.0,
        }
    }

    #[test]
    fn refresh_copies_measurements() {
        let cache = GeometryCache::refresh(&metrics(), ReferenceMode::TopOfViewport);
        assert_eq!(cache.viewport_height, 800.0);
        assert_eq!(cache.container_offset_top, 1000.0);
        assert_eq!(cache.container_outer_height, 500.0);
        assert_eq!(cache.container_offset_bottom(), 1500.0);
    }

    #[test]
    fn scroll_window_delta_is_viewport_minus_offset() {
        let cache = GeometryCache::refresh(&metrics(), ReferenceMode::CustomOffset(100.0));
        assert_eq!(cache.scroll_window_delta, 700.0);

        let cache = GeometryCache::refresh(&metrics(), ReferenceMode::BottomOfViewport);
        assert_eq!(cache.scroll_window_delta, 800.0);
    }

    #[test]
    fn refresh_is_a_pure_function_of_measurements() {
        let a = GeometryCache::refresh(&metrics(), ReferenceMode::CustomOffset(40.0));
        let b = GeometryCache::refresh(&metrics(), ReferenceMode::CustomOffset(40.0));
        assert_eq!(a, b);
    }

    #[test]
    fn negative_scroll_is_clamped() {
        assert_eq!(clamp_scroll_top(-12.5), 0.0);
        assert_eq!(clamp_scroll_top(0.0), 0.0);
        assert_eq!(clamp_scroll_top(300.0), 300.0);

        let overscrolled = ViewportMetrics {
            scroll_top: -40.0,
            ..metrics()
        };
        assert_eq!(overscrolled.clamped_scroll_top(), 0.0);
    }

    #[test]
    fn layer_heights_are_sparse() {
        let mut frame = FrameMetrics::new(metrics());
        let id = LayerId::from_index(2);
        assert_eq!(frame.layer_height(id), None);

        frame.set_layer_height(id, 640.0);
        assert_eq!(frame.layer_height(id), Some(640.0));
        assert_eq!(frame.layer_height(LayerId::from_index(0)), None);
        assert_eq!(frame.layer_height(LayerId::from_index(9)), None);
    }
}
