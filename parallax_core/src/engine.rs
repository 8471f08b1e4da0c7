// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-signal cycle.
//!
//! Every [`Signal`] is handled identically and synchronously:
//!
//! 1. **Refreshing**: Rebuild the [`GeometryCache`] from the supplied
//!    [`FrameMetrics`], replacing the previous snapshot.
//! 2. **Gated out**: If [`is_visible`] is false, the cycle ends.
//! 3. **Computing**: [`compute_progress`]; the cycle ends on
//!    [`OutOfRange`].
//! 4. **Applying**: [`resolve_offset`] for every layer, in [`LayerId`]
//!    order.
//!
//! The engine is back in [`CycleState::Idle`] whenever `cycle` returns. A
//! skipped cycle produces no offsets and leaves the recorded translations of
//! every layer untouched.

use alloc::vec::Vec;
use core::fmt;

use crate::backend::Presenter;
use crate::config::{LayerConfig, LayerOptions, ParallaxConfig, ReferenceMode};
use crate::geometry::{FrameMetrics, GeometryCache};
use crate::layer::{LayerId, LayerOffset, LayerStore, resolve_offset};
use crate::progress::{OutOfRange, Progress, compute_progress};
use crate::trace::{
    CacheRefreshEvent, CycleBeginEvent, CycleSummary, ProgressEvent, SkipEvent, StateEvent,
    Tracer,
};
use crate::visibility::is_visible;

/// What triggered a cycle. All signals are handled the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The document finished loading.
    Ready,
    /// The document scrolled.
    Scroll,
    /// The window was resized.
    Resize,
}

/// Where a cycle currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CycleState {
    /// Waiting for a signal.
    #[default]
    Idle,
    /// Rebuilding the geometry cache.
    Refreshing,
    /// The visibility gate rejected the cycle.
    GatedOut,
    /// Computing progress.
    Computing,
    /// Resolving and emitting layer offsets.
    Applying,
}

/// Why a cycle produced no offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SkipReason {
    /// The container is outside the visibility band.
    NotVisible,
    /// Progress could not be computed.
    OutOfRange(OutOfRange),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotVisible => f.write_str("container is not visible"),
            Self::OutOfRange(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl From<OutOfRange> for SkipReason {
    fn from(e: OutOfRange) -> Self {
        Self::OutOfRange(e)
    }
}

/// Offsets produced by one applying cycle, in [`LayerId`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOffsets {
    /// Cycle counter.
    pub cycle_index: u64,
    /// Progress the offsets were resolved at.
    pub progress: Progress,
    /// One entry per layer.
    pub offsets: Vec<(LayerId, LayerOffset)>,
}

impl FrameOffsets {
    /// Number of layer offsets.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether there are no layer offsets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the offset resolved for `layer`.
    #[must_use]
    pub fn get(&self, layer: LayerId) -> Option<LayerOffset> {
        self.offsets
            .iter()
            .find(|(id, _)| *id == layer)
            .map(|&(_, offset)| offset)
    }

    /// Iterates over `(layer, offset)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, LayerOffset)> + '_ {
        self.offsets.iter().copied()
    }
}

/// Result of one cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum CycleOutcome {
    /// The cycle ended early; previously applied offsets stay as they are.
    Skipped(SkipReason),
    /// Offsets were resolved for every layer.
    Applied(FrameOffsets),
}

impl CycleOutcome {
    /// Returns the offsets of an applying cycle.
    #[must_use]
    pub fn offsets(&self) -> Option<&FrameOffsets> {
        match self {
            Self::Applied(offsets) => Some(offsets),
            Self::Skipped(_) => None,
        }
    }

    /// Returns the skip reason of a skipped cycle.
    #[must_use]
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped(reason) => Some(*reason),
            Self::Applied(_) => None,
        }
    }
}

/// Parallax engine for one container.
///
/// Owns the reference mode, the [`LayerStore`], and the most recent
/// [`GeometryCache`]. Each container gets its own engine; nothing is shared
/// between instances.
#[derive(Clone, Debug)]
pub struct ParallaxEngine {
    mode: ReferenceMode,
    layers: LayerStore,
    cache: Option<GeometryCache>,
    state: CycleState,
    cycle_count: u64,
}

impl ParallaxEngine {
    /// Creates an engine with no layers.
    #[must_use]
    pub fn new(mode: ReferenceMode) -> Self {
        Self {
            mode,
            layers: LayerStore::new(),
            cache: None,
            state: CycleState::Idle,
            cycle_count: 0,
        }
    }

    /// Builds an engine from a configuration.
    ///
    /// `query` resolves each selector into the layer handles it matches.
    /// Every handle becomes one layer, configured with its entry's options
    /// merged over [`LayerConfig::default`]. The returned handles are
    /// indexed by [`LayerId::index`].
    pub fn build<S, H, I, F>(config: &ParallaxConfig<S>, mut query: F) -> (Self, Vec<H>)
    where
        F: FnMut(&S) -> I,
        I: IntoIterator<Item = H>,
    {
        let mut engine = Self::new(config.reference_mode);
        let mut handles = Vec::new();
        for entry in &config.layers {
            let resolved = entry.options.resolve(LayerConfig::default());
            for handle in query(&entry.selector) {
                engine.layers.insert(resolved);
                handles.push(handle);
            }
        }
        (engine, handles)
    }

    /// Adds a layer, merging `options` over the defaults.
    pub fn add_layer(&mut self, options: LayerOptions) -> LayerId {
        self.layers.insert(options.resolve(LayerConfig::default()))
    }

    /// Returns the reference mode.
    #[inline]
    #[must_use]
    pub fn reference_mode(&self) -> ReferenceMode {
        self.mode
    }

    /// Returns the layer store.
    #[inline]
    #[must_use]
    pub fn layers(&self) -> &LayerStore {
        &self.layers
    }

    /// Returns the geometry snapshot of the most recent cycle.
    #[inline]
    #[must_use]
    pub fn cache(&self) -> Option<&GeometryCache> {
        self.cache.as_ref()
    }

    /// Returns the current cycle state. Always [`CycleState::Idle`] between
    /// calls.
    #[inline]
    #[must_use]
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Returns how many cycles have run.
    #[inline]
    #[must_use]
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Runs one cycle without tracing.
    pub fn cycle(&mut self, signal: Signal, metrics: &FrameMetrics) -> CycleOutcome {
        self.cycle_traced(signal, metrics, &mut Tracer::none())
    }

    /// Runs one cycle and, if it applied, hands the offsets to `presenter`.
    pub fn cycle_and_present(
        &mut self,
        signal: Signal,
        metrics: &FrameMetrics,
        presenter: &mut dyn Presenter,
        tracer: &mut Tracer<'_>,
    ) -> CycleOutcome {
        let outcome = self.cycle_traced(signal, metrics, tracer);
        if let CycleOutcome::Applied(offsets) = &outcome {
            presenter.apply(&self.layers, offsets);
        }
        outcome
    }

    /// Runs one cycle, reporting each stage to `tracer`.
    pub fn cycle_traced(
        &mut self,
        signal: Signal,
        metrics: &FrameMetrics,
        tracer: &mut Tracer<'_>,
    ) -> CycleOutcome {
        let cycle_index = self.cycle_count;
        self.cycle_count += 1;

        let scroll_top = metrics.viewport.clamped_scroll_top();
        tracer.cycle_begin(&CycleBeginEvent {
            cycle_index,
            signal,
            scroll_top,
        });

        // 1. Refresh: construct the new snapshot, then swap it in.
        self.enter(CycleState::Refreshing, cycle_index, tracer);
        let cache = GeometryCache::refresh(&metrics.viewport, self.mode);
        self.cache = Some(cache);
        tracer.cache_refresh(&CacheRefreshEvent { cycle_index, cache });

        // 2. Gate.
        if !is_visible(&cache, scroll_top) {
            self.enter(CycleState::GatedOut, cycle_index, tracer);
            return self.skip(signal, cycle_index, SkipReason::NotVisible, tracer);
        }

        // 3. Progress.
        self.enter(CycleState::Computing, cycle_index, tracer);
        let progress = match compute_progress(self.mode, &cache, scroll_top) {
            Ok(progress) => progress,
            Err(e) => return self.skip(signal, cycle_index, e.into(), tracer),
        };
        tracer.progress(&ProgressEvent {
            cycle_index,
            progress,
        });

        // 4. Apply.
        self.enter(CycleState::Applying, cycle_index, tracer);
        let container_height = cache.container_outer_height;
        let mut offsets = Vec::with_capacity(self.layers.len());
        for id in self.layers.ids() {
            // A layer nobody measured is treated as exactly container-sized.
            let layer_height = metrics.layer_height(id).unwrap_or(container_height);
            let offset = resolve_offset(
                self.layers.config(id),
                progress,
                layer_height,
                container_height,
            );
            let translation = offset.translation();
            self.layers.record_applied(id, translation);
            #[cfg(feature = "trace-rich")]
            tracer.layer_offset(&crate::trace::LayerOffsetEvent {
                cycle_index,
                layer: id,
                translation,
            });
            offsets.push((id, offset));
        }

        tracer.cycle_summary(&CycleSummary {
            cycle_index,
            signal,
            reached: CycleState::Applying,
            progress: Some(progress),
            layers_applied: offsets.len(),
        });
        self.enter(CycleState::Idle, cycle_index, tracer);

        CycleOutcome::Applied(FrameOffsets {
            cycle_index,
            progress,
            offsets,
        })
    }

    fn enter(&mut self, state: CycleState, cycle_index: u64, tracer: &mut Tracer<'_>) {
        self.state = state;
        tracer.state(&StateEvent { cycle_index, state });
    }

    fn skip(
        &mut self,
        signal: Signal,
        cycle_index: u64,
        reason: SkipReason,
        tracer: &mut Tracer<'_>,
    ) -> CycleOutcome {
        tracer.skip(&SkipEvent {
            cycle_index,
            reason,
        });
        tracer.cycle_summary(&CycleSummary {
            cycle_index,
            signal,
            reached: self.state,
            progress: None,
            layers_applied: 0,
        });
        self.enter(CycleState::Idle, cycle_index, tracer);
        CycleOutcome::Skipped(reason)
    }
}
