// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! The engine never talks to a document itself. A *backend* crate provides
//! the collaborators it relies on:
//!
//! - **Element query**: Resolves each configured selector into concrete
//!   layer handles, once, by passing a closure to
//!   [`ParallaxEngine::build`](crate::engine::ParallaxEngine::build). The
//!   returned handles are ordered like the engine's [`LayerId`]s.
//!
//! - **Measurement**: Reads viewport height, container offset and height,
//!   layer heights, and the raw scroll offset into a
//!   [`FrameMetrics`](crate::geometry::FrameMetrics) before every cycle.
//!   The provider does not clamp the scroll offset; the core does.
//!
//! - **Signal subscription**: Calls a cycle on document ready, scroll, and
//!   resize. The setup differs fundamentally across platforms, so it is not
//!   abstracted by a trait.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to write each
//!   layer's translation to the platform element.
//!
//! [`LayerId`]: crate::layer::LayerId

use crate::engine::FrameOffsets;
use crate::layer::LayerStore;

/// Applies the offsets of an applying cycle to platform elements.
///
/// Each call must overwrite whatever translation the presenter wrote for a
/// layer before; offsets are absolute, not deltas. Skipped cycles never
/// reach the presenter, so elements keep their last translation.
///
/// # Cycle pseudocode
///
/// A typical signal handler wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_signal(signal: Signal) {
///     // Measure: read the live layout.
///     let metrics = measurer.measure(engine.layers());
///
///     // Cycle: refresh, gate, progress, resolve, then present.
///     engine.cycle_and_present(signal, &metrics, &mut presenter);
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`FrameOffsets`], reading layer configuration from
    /// `store` as needed.
    fn apply(&mut self, store: &LayerStore, offsets: &FrameOffsets);
}
