// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! `Vec<RecordedEvent>`. Recordings can be inspected directly, replayed into
//! another sink with [`RecorderSink::replay`], or exported with
//! [`json::export`](crate::json::export).

use parallax_core::trace::{
    CacheRefreshEvent, CycleBeginEvent, CycleSummary, LayerOffsetEvent, ProgressEvent, SkipEvent,
    StateEvent, TraceSink,
};

/// A single recorded event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_cycle_begin`].
    CycleBegin(CycleBeginEvent),
    /// See [`TraceSink::on_state`].
    State(StateEvent),
    /// See [`TraceSink::on_cache_refresh`].
    CacheRefresh(CacheRefreshEvent),
    /// See [`TraceSink::on_skip`].
    Skip(SkipEvent),
    /// See [`TraceSink::on_progress`].
    Progress(ProgressEvent),
    /// See [`TraceSink::on_layer_offset`].
    LayerOffset(LayerOffsetEvent),
    /// See [`TraceSink::on_cycle_summary`].
    CycleSummary(CycleSummary),
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Returns the summaries of all recorded cycles.
    pub fn summaries(&self) -> impl Iterator<Item = &CycleSummary> + '_ {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::CycleSummary(s) => Some(s),
            _ => None,
        })
    }

    /// Feeds every recorded event, in order, into `sink`.
    pub fn replay(&self, sink: &mut dyn TraceSink) {
        for event in &self.events {
            match event {
                RecordedEvent::CycleBegin(e) => sink.on_cycle_begin(e),
                RecordedEvent::State(e) => sink.on_state(e),
                RecordedEvent::CacheRefresh(e) => sink.on_cache_refresh(e),
                RecordedEvent::Skip(e) => sink.on_skip(e),
                RecordedEvent::Progress(e) => sink.on_progress(e),
                RecordedEvent::LayerOffset(e) => sink.on_layer_offset(e),
                RecordedEvent::CycleSummary(s) => sink.on_cycle_summary(s),
            }
        }
    }

    /// Clears the recording.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_cycle_begin(&mut self, e: &CycleBeginEvent) {
        self.events.push(RecordedEvent::CycleBegin(*e));
    }

    fn on_state(&mut self, e: &StateEvent) {
        self.events.push(RecordedEvent::State(*e));
    }

    fn on_cache_refresh(&mut self, e: &CacheRefreshEvent) {
        self.events.push(RecordedEvent::CacheRefresh(*e));
    }

    fn on_skip(&mut self, e: &SkipEvent) {
        self.events.push(RecordedEvent::Skip(*e));
    }

    fn on_progress(&mut self, e: &ProgressEvent) {
        self.events.push(RecordedEvent::Progress(*e));
    }

    fn on_layer_offset(&mut self, e: &LayerOffsetEvent) {
        self.events.push(RecordedEvent::LayerOffset(*e));
    }

    fn on_cycle_summary(&mut self, s: &CycleSummary) {
        self.events.push(RecordedEvent::CycleSummary(*s));
    }
}

#[cfg(test)]
mod tests {
    use parallax_core::config::{Direction, Distance, LayerOptions, ReferenceMode};
    use parallax_core::engine::{CycleState, ParallaxEngine, Signal};
    use parallax_core::geometry::{FrameMetrics, ViewportMetrics};
    use parallax_core::trace::Tracer;

    use super::*;

    fn metrics(scroll_top: f64) -> FrameMetrics {
        FrameMetrics {
            viewport: ViewportMetrics {
                viewport_height: 600.0,
                container_offset_top: 900.0,
                container_outer_height: 300.0,
                scroll_top,
            },
            layer_heights: vec![600.0],
        }
    }

    fn record(scrolls: &[f64]) -> RecorderSink {
        let mut engine = ParallaxEngine::new(ReferenceMode::TopOfViewport);
        engine.add_layer(
            LayerOptions::default()
                .distance(Distance::Percent(50.0))
                .direction(Direction::Up),
        );
        let mut recorder = RecorderSink::new();
        let mut tracer = Tracer::new(&mut recorder);
        for &scroll in scrolls {
            engine.cycle_traced(Signal::Scroll, &metrics(scroll), &mut tracer);
        }
        drop(tracer);
        recorder
    }

    #[test]
    fn records_applied_cycle_in_order() {
        let recorder = record(&[1050.0]);
        let kinds: Vec<&str> = recorder
            .events()
            .iter()
            .map(|e| match e {
                RecordedEvent::CycleBegin(_) => "begin",
                RecordedEvent::State(_) => "state",
                RecordedEvent::CacheRefresh(_) => "cache",
                RecordedEvent::Skip(_) => "skip",
                RecordedEvent::Progress(_) => "progress",
                RecordedEvent::LayerOffset(_) => "layer",
                RecordedEvent::CycleSummary(_) => "summary",
            })
            .collect();
        assert_eq!(
            kinds,
            [
                "begin", "state", "cache", "state", "progress", "state", "layer", "summary",
                "state"
            ]
        );

        let layer = recorder
            .events()
            .iter()
            .find_map(|e| match e {
                RecordedEvent::LayerOffset(e) => Some(*e),
                _ => None,
            })
            .unwrap();
        // 50% progress, 50% of a 300px overflow, upwards.
        assert_eq!(layer.translation, kurbo::Vec2::new(0.0, -75.0));
    }

    #[test]
    fn summaries_cover_skipped_cycles() {
        let recorder = record(&[0.0, 1050.0, 5000.0]);
        let reached: Vec<CycleState> = recorder.summaries().map(|s| s.reached).collect();
        assert_eq!(
            reached,
            [
                CycleState::GatedOut,
                CycleState::Applying,
                CycleState::GatedOut
            ]
        );
    }

    #[test]
    fn replay_reproduces_events() {
        let recorder = record(&[950.0, 1100.0]);
        let mut copy = RecorderSink::new();
        recorder.replay(&mut copy);
        assert_eq!(copy.events().len(), recorder.events().len());
        assert_eq!(copy.summaries().count(), 2);
    }
}
