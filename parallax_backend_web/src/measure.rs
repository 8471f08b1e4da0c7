// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout measurement.

use alloc::vec::Vec;

use parallax_core::geometry::{FrameMetrics, ViewportMetrics};
use web_sys::{HtmlElement, Window};

/// Reads the live layout of one container and its layers.
pub struct DomMeasurer {
    window: Window,
    container: HtmlElement,
}

impl core::fmt::Debug for DomMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomMeasurer")
            .field("container", &"HtmlElement")
            .finish_non_exhaustive()
    }
}

impl DomMeasurer {
    /// Creates a measurer for `container`.
    #[must_use]
    pub fn new(window: Window, container: HtmlElement) -> Self {
        Self { window, container }
    }

    /// Returns the raw document scroll offset (`window.scrollY`).
    ///
    /// Not clamped; overscroll may report negative values.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Returns the layout viewport height.
    ///
    /// This is `documentElement.clientHeight`, which excludes a horizontal
    /// scrollbar. Falls back to `window.innerHeight` without a root element.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        match self.window.document().and_then(|d| d.document_element()) {
            Some(root) => f64::from(root.client_height()),
            None => self
                .window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
        }
    }

    /// Reads viewport height, container offset and height, and scroll offset.
    #[must_use]
    pub fn viewport(&self) -> ViewportMetrics {
        let scroll_top = self.scroll_top();
        let viewport_height = self.viewport_height();
        // Bounding rect is viewport-relative; add the scroll offset to get
        // the document offset.
        let rect = self.container.get_bounding_client_rect();
        ViewportMetrics {
            viewport_height,
            container_offset_top: rect.top() + scroll_top,
            container_outer_height: f64::from(self.container.offset_height()),
            scroll_top,
        }
    }

    /// Reads everything a cycle needs. `layers` are indexed by
    /// [`LayerId::index`](parallax_core::layer::LayerId::index).
    #[must_use]
    pub fn measure(&self, layers: &[HtmlElement]) -> FrameMetrics {
        FrameMetrics {
            viewport: self.viewport(),
            layer_heights: layers
                .iter()
                .map(|el| f64::from(el.offset_height()))
                .collect::<Vec<_>>(),
        }
    }
}
