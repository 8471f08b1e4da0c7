// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM style application.
//!
//! Writes the translations from [`FrameOffsets`] to the `transform` property
//! of each layer element.
//!
//! [`FrameOffsets`]: parallax_core::engine::FrameOffsets

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;
use parallax_core::backend::Presenter;
use parallax_core::engine::FrameOffsets;
use parallax_core::layer::{LayerId, LayerStore};
use web_sys::HtmlElement;

/// CSS class added to every layer element.
pub const LAYER_CLASS: &str = "parallaxor-layer";

/// Maps [`LayerId`]s to live DOM elements and applies their translations.
///
/// Elements are indexed by [`LayerId::index`], in the order returned by
/// [`ParallaxEngine::build`](parallax_core::engine::ParallaxEngine::build).
pub struct DomPresenter {
    elements: Vec<HtmlElement>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl DomPresenter {
    /// Creates a presenter for the given layer elements and tags each with
    /// [`LAYER_CLASS`].
    #[must_use]
    pub fn new(elements: Vec<HtmlElement>) -> Self {
        for el in &elements {
            let _ = el.class_list().add_1(LAYER_CLASS);
        }
        Self { elements }
    }

    /// Returns the DOM element for the given layer, if it exists.
    #[must_use]
    pub fn get_element(&self, id: LayerId) -> Option<&HtmlElement> {
        self.elements.get(id.index() as usize)
    }

    /// Returns all layer elements in [`LayerId`] order.
    #[must_use]
    pub fn elements(&self) -> &[HtmlElement] {
        &self.elements
    }

    /// Removes [`LAYER_CLASS`] from every layer element. Transforms already
    /// written are left in place.
    pub fn release(&self) {
        for el in &self.elements {
            let _ = el.class_list().remove_1(LAYER_CLASS);
        }
    }
}

impl Presenter for DomPresenter {
    /// Overwrites the `transform` of every layer in `offsets`.
    fn apply(&mut self, _store: &LayerStore, offsets: &FrameOffsets) {
        for (id, offset) in offsets.iter() {
            if let Some(el) = self.get_element(id) {
                let css = css_translate(offset.translation());
                let _ = el.style().set_property("transform", &css);
            }
        }
    }
}

/// Formats a translation as a CSS `translate()` value.
#[must_use]
pub fn css_translate(t: Vec2) -> String {
    // Adding +0.0 folds -0.0 into 0.0 so idle layers don't print "-0px".
    format!("translate({}px, {}px)", t.x + 0.0, t.y + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_translate_vertical() {
        assert_eq!(css_translate(Vec2::new(0.0, 200.0)), "translate(0px, 200px)");
        assert_eq!(
            css_translate(Vec2::new(0.0, -200.0)),
            "translate(0px, -200px)"
        );
    }

    #[test]
    fn css_translate_fractional_and_negative_zero() {
        assert_eq!(
            css_translate(Vec2::new(-0.0, 12.5)),
            "translate(0px, 12.5px)"
        );
        assert_eq!(css_translate(Vec2::new(-20.0, -0.0)), "translate(-20px, 0px)");
    }
}
