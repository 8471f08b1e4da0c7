// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the engine cycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`ParallaxEngine::cycle_traced`] calls at each stage. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates [`LayerOffsetEvent`] and the
//!   corresponding `TraceSink` method.
//!
//! [`ParallaxEngine::cycle_traced`]: crate::engine::ParallaxEngine::cycle_traced

use crate::engine::{CycleState, Signal, SkipReason};
use crate::geometry::GeometryCache;
#[cfg(feature = "trace-rich")]
use crate::layer::LayerId;
use crate::progress::Progress;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a signal starts a cycle.
#[derive(Clone, Copy, Debug)]
pub struct CycleBeginEvent {
    /// Monotonic cycle counter.
    pub cycle_index: u64,
    /// The signal that triggered the cycle.
    pub signal: Signal,
    /// Scroll offset after clamping.
    pub scroll_top: f64,
}

/// Emitted on every state transition within a cycle.
#[derive(Clone, Copy, Debug)]
pub struct StateEvent {
    /// Cycle counter.
    pub cycle_index: u64,
    /// The state being entered.
    pub state: CycleState,
}

/// Emitted after the geometry cache was rebuilt.
#[derive(Clone, Copy, Debug)]
pub struct CacheRefreshEvent {
    /// Cycle counter.
    pub cycle_index: u64,
    /// The new snapshot.
    pub cache: GeometryCache,
}

/// Emitted when a cycle ends early.
#[derive(Clone, Copy, Debug)]
pub struct SkipEvent {
    /// Cycle counter.
    pub cycle_index: u64,
    /// Why the cycle was skipped.
    pub reason: SkipReason,
}

/// Emitted once progress has been computed.
#[derive(Clone, Copy, Debug)]
pub struct ProgressEvent {
    /// Cycle counter.
    pub cycle_index: u64,
    /// Progress through the reference window.
    pub progress: Progress,
}

/// Emitted for each layer offset handed to the presenter.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct LayerOffsetEvent {
    /// Cycle counter.
    pub cycle_index: u64,
    /// The layer.
    pub layer: LayerId,
    /// Translation `(dx, dy)` in pixels.
    pub translation: kurbo::Vec2,
}

/// Per-cycle summary, emitted when the engine returns to idle.
#[derive(Clone, Copy, Debug)]
pub struct CycleSummary {
    /// Cycle counter.
    pub cycle_index: u64,
    /// The signal that triggered the cycle.
    pub signal: Signal,
    /// The last non-idle state the cycle reached.
    pub reached: CycleState,
    /// Progress, if the cycle got that far.
    pub progress: Option<Progress>,
    /// Number of layer offsets produced (0 for skipped cycles).
    pub layers_applied: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from engine cycles.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a signal starts a cycle.
    fn on_cycle_begin(&mut self, e: &CycleBeginEvent) {
        _ = e;
    }

    /// Called on every state transition.
    fn on_state(&mut self, e: &StateEvent) {
        _ = e;
    }

    /// Called after the geometry cache was rebuilt.
    fn on_cache_refresh(&mut self, e: &CacheRefreshEvent) {
        _ = e;
    }

    /// Called when a cycle is skipped.
    fn on_skip(&mut self, e: &SkipEvent) {
        _ = e;
    }

    /// Called after progress is computed.
    fn on_progress(&mut self, e: &ProgressEvent) {
        _ = e;
    }

    /// Called per resolved layer offset (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_layer_offset(&mut self, e: &LayerOffsetEvent) {
        _ = e;
    }

    /// Called with the per-cycle summary.
    fn on_cycle_summary(&mut self, s: &CycleSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`CycleBeginEvent`].
    #[inline]
    pub fn cycle_begin(&mut self, e: &CycleBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cycle_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StateEvent`].
    #[inline]
    pub fn state(&mut self, e: &StateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_state(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CacheRefreshEvent`].
    #[inline]
    pub fn cache_refresh(&mut self, e: &CacheRefreshEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cache_refresh(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SkipEvent`].
    #[inline]
    pub fn skip(&mut self, e: &SkipEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_skip(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ProgressEvent`].
    #[inline]
    pub fn progress(&mut self, e: &ProgressEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_progress(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerOffsetEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn layer_offset(&mut self, e: &LayerOffsetEvent) {
        if let Some(s) = &mut self.sink {
            s.on_layer_offset(e);
        }
    }

    /// Emits a [`CycleSummary`].
    #[inline]
    pub fn cycle_summary(&mut self, s: &CycleSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_cycle_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
