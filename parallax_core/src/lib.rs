// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven parallax engine.
//!
//! `parallax_core` turns the vertical scroll position of a document into
//! per-layer translation offsets for the layers of a container. It is
//! `no_std` compatible (with `alloc`) and never touches a live document:
//! every cycle takes its measurements as explicit arguments and returns the
//! offsets to apply, so the whole engine can be driven from tests or from a
//! backend crate that owns the platform glue.
//!
//! # Architecture
//!
//! Each triggering signal (document ready, scroll, resize) runs one cycle:
//!
//! ```text
//!   Signal + FrameMetrics
//!       │
//!       ▼
//!   GeometryCache::refresh() ──► is_visible() ──► compute_progress()
//!                                                      │
//!                 ┌────────────────────────────────────┘
//!                 ▼
//!   resolve_offset() per layer ──► FrameOffsets ──► Presenter::apply()
//! ```
//!
//! **[`config`]**: Reference mode, layer distance/direction, and the
//! construction-time [`ParallaxConfig`](config::ParallaxConfig).
//!
//! **[`geometry`]**: Measurements and the [`GeometryCache`](geometry::GeometryCache)
//! snapshot that is rebuilt at the start of every cycle.
//!
//! **[`visibility`]**: The gate deciding whether a container is close
//! enough to the viewport for progress to be meaningful.
//!
//! **[`progress`]**: Maps scroll position to a `[0, 100]` percentage within
//! the reference window.
//!
//! **[`layer`]**: Layer identity, resolved per-layer configuration, and the
//! offset resolver.
//!
//! **[`engine`]**: [`ParallaxEngine`](engine::ParallaxEngine), which runs
//! the cycle.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that
//! platform backends implement to apply offsets.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! cycle instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-layer
//!   offset events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod layer;
pub mod progress;
pub mod trace;
pub mod visibility;
