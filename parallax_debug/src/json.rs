// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] writes the events of a [`RecorderSink`](super::recorder::RecorderSink)
//! as a single JSON array, one object per event, tagged by `"event"`.
//! Non-finite numbers (a rejected NaN percentage, for example) are written
//! as `null`.

use std::io::{self, Write};

use serde_json::{Value, json};

use parallax_core::engine::SkipReason;
use parallax_core::progress::OutOfRange;

use crate::pretty::{signal_name, state_name};
use crate::recorder::RecordedEvent;

/// Exports recorded events as a JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(event_to_json).collect();
    serde_json::to_writer_pretty(&mut *writer, &Value::Array(values))?;
    writeln!(writer)
}

/// Converts one recorded event to a JSON object.
#[must_use]
pub fn event_to_json(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::CycleBegin(e) => json!({
            "event": "cycle_begin",
            "cycle": e.cycle_index,
            "signal": signal_name(e.signal),
            "scroll_top": e.scroll_top,
        }),
        RecordedEvent::State(e) => json!({
            "event": "state",
            "cycle": e.cycle_index,
            "state": state_name(e.state),
        }),
        RecordedEvent::CacheRefresh(e) => json!({
            "event": "cache_refresh",
            "cycle": e.cycle_index,
            "viewport_height": e.cache.viewport_height,
            "container_offset_top": e.cache.container_offset_top,
            "container_outer_height": e.cache.container_outer_height,
            "scroll_window_delta": e.cache.scroll_window_delta,
        }),
        RecordedEvent::Skip(e) => {
            let (reason, percentage) = match e.reason {
                SkipReason::NotVisible => ("not_visible", None),
                SkipReason::OutOfRange(OutOfRange::BelowCustomOffset) => {
                    ("below_custom_offset", None)
                }
                SkipReason::OutOfRange(OutOfRange::OutsideWindow { percentage }) => {
                    ("outside_window", Some(percentage))
                }
            };
            json!({
                "event": "skip",
                "cycle": e.cycle_index,
                "reason": reason,
                "percentage": percentage,
            })
        }
        RecordedEvent::Progress(e) => json!({
            "event": "progress",
            "cycle": e.cycle_index,
            "percent": e.progress.percent(),
        }),
        RecordedEvent::LayerOffset(e) => json!({
            "event": "layer_offset",
            "cycle": e.cycle_index,
            "layer": e.layer.index(),
            "dx": e.translation.x,
            "dy": e.translation.y,
        }),
        RecordedEvent::CycleSummary(s) => json!({
            "event": "cycle_summary",
            "cycle": s.cycle_index,
            "signal": signal_name(s.signal),
            "reached": state_name(s.reached),
            "percent": s.progress.map(|p| p.percent()),
            "layers_applied": s.layers_applied,
        }),
    }
}

#[cfg(test)]
mod tests {
    use parallax_core::engine::{CycleState, Signal};
    use parallax_core::progress::Progress;
    use parallax_core::trace::{CycleSummary, SkipEvent};

    use super::*;

    #[test]
    fn export_writes_array() {
        let events = [
            RecordedEvent::Skip(SkipEvent {
                cycle_index: 0,
                reason: SkipReason::NotVisible,
            }),
            RecordedEvent::CycleSummary(CycleSummary {
                cycle_index: 1,
                signal: Signal::Ready,
                reached: CycleState::Applying,
                progress: Progress::new(12.5),
                layers_applied: 3,
            }),
        ];
        let mut out = Vec::new();
        export(&events, &mut out).unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["reason"], "not_visible");
        assert_eq!(array[1]["signal"], "ready");
        assert_eq!(array[1]["percent"], 12.5);
        assert_eq!(array[1]["layers_applied"], 3);
    }

    #[test]
    fn nan_percentage_becomes_null() {
        let value = event_to_json(&RecordedEvent::Skip(SkipEvent {
            cycle_index: 4,
            reason: SkipReason::OutOfRange(OutOfRange::OutsideWindow {
                percentage: f64::NAN,
            }),
        }));
        assert_eq!(value["reason"], "outside_window");
        assert!(value["percentage"].is_null(), "got: {value}");
    }
}
