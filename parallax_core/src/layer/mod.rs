// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer data model.
//!
//! A *layer* is an element inside the container that receives its own
//! parallax offset. Each layer has:
//!
//! - An identity ([`LayerId`]), a slot index assigned when the engine is
//!   built, stable for the engine's lifetime.
//! - A resolved [`LayerConfig`](crate::config::LayerConfig), immutable once
//!   stored.
//! - The translation most recently handed to the presenter, recorded by
//!   [`ParallaxEngine`](crate::engine::ParallaxEngine) on every applying
//!   cycle.
//!
//! The [`LayerStore`] replaces attaching settings to the platform element:
//! backends keep their own element handles and index them by
//! [`LayerId::index`].
//!
//! [`resolve_offset`] is the pure mapping from progress to a directional
//! offset.

mod id;
mod resolve;
mod store;

pub use id::LayerId;
pub use resolve::{LayerOffset, resolve_offset, travel_budget};
pub use store::{Layers, LayerStore};
