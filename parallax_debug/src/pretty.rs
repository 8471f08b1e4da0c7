// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use parallax_core::engine::{CycleState, Signal};
use parallax_core::trace::{
    CacheRefreshEvent, CycleBeginEvent, CycleSummary, LayerOffsetEvent, ProgressEvent, SkipEvent,
    StateEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    states: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            states: false,
        }
    }

    /// Also print every state transition (off by default; noisy).
    #[must_use]
    pub fn with_states(mut self, states: bool) -> Self {
        self.states = states;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn signal_name(signal: Signal) -> &'static str {
    match signal {
        Signal::Ready => "ready",
        Signal::Scroll => "scroll",
        Signal::Resize => "resize",
    }
}

pub(crate) fn state_name(state: CycleState) -> &'static str {
    match state {
        CycleState::Idle => "idle",
        CycleState::Refreshing => "refreshing",
        CycleState::GatedOut => "gated-out",
        CycleState::Computing => "computing",
        CycleState::Applying => "applying",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_cycle_begin(&mut self, e: &CycleBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[cycle] #{} signal={} scroll={:.1}px",
            e.cycle_index,
            signal_name(e.signal),
            e.scroll_top,
        );
    }

    fn on_state(&mut self, e: &StateEvent) {
        if self.states {
            let _ = writeln!(
                self.writer,
                "[state] #{} -> {}",
                e.cycle_index,
                state_name(e.state),
            );
        }
    }

    fn on_cache_refresh(&mut self, e: &CacheRefreshEvent) {
        let c = &e.cache;
        let _ = writeln!(
            self.writer,
            "[cache] #{} viewport={:.1} top={:.1} height={:.1} delta={:.1}",
            e.cycle_index,
            c.viewport_height,
            c.container_offset_top,
            c.container_outer_height,
            c.scroll_window_delta,
        );
    }

    fn on_skip(&mut self, e: &SkipEvent) {
        let _ = writeln!(self.writer, "[skip] #{} {}", e.cycle_index, e.reason);
    }

    fn on_progress(&mut self, e: &ProgressEvent) {
        let _ = writeln!(
            self.writer,
            "[progress] #{} {:.2}%",
            e.cycle_index,
            e.progress.percent(),
        );
    }

    fn on_layer_offset(&mut self, e: &LayerOffsetEvent) {
        let _ = writeln!(
            self.writer,
            "[layer] #{} {:?} translate({:.2}px, {:.2}px)",
            e.cycle_index, e.layer, e.translation.x, e.translation.y,
        );
    }

    fn on_cycle_summary(&mut self, s: &CycleSummary) {
        let progress = s
            .progress
            .map_or_else(|| String::from("-"), |p| format!("{:.2}%", p.percent()));
        let _ = writeln!(
            self.writer,
            "[summary] #{} signal={} reached={} progress={progress} layers={}",
            s.cycle_index,
            signal_name(s.signal),
            state_name(s.reached),
            s.layers_applied,
        );
    }
}
