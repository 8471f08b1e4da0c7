// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll sweep that exercises the tracing and diagnostics pipeline.
//!
//! Scrolls a synthetic page from above the container to past it, running one
//! engine cycle per step and recording events to a
//! [`RecorderSink`](parallax_debug::recorder::RecorderSink). The recording is
//! then replayed into a
//! [`PrettyPrintSink`](parallax_debug::pretty::PrettyPrintSink) and exported
//! as JSON.

use std::fs::File;
use std::io::BufWriter;

use parallax_core::config::{Direction, Distance, LayerOptions, ParallaxConfig, ReferenceMode};
use parallax_core::engine::{ParallaxEngine, Signal};
use parallax_core::geometry::{FrameMetrics, ViewportMetrics};
use parallax_core::trace::Tracer;

use parallax_debug::pretty::PrettyPrintSink;
use parallax_debug::recorder::RecorderSink;

const VIEWPORT_HEIGHT: f64 = 800.0;
const CONTAINER_TOP: f64 = 1200.0;
const CONTAINER_HEIGHT: f64 = 400.0;
const SCROLL_STEP: f64 = 100.0;

/// Synthetic layers: (selector, measured height, options).
const LAYERS: [(&str, f64, LayerOptions); 3] = [
    (".sky", 800.0, LayerOptions::new()),
    (
        ".hills",
        600.0,
        LayerOptions::new()
            .distance(Distance::Percent(50.0))
            .direction(Direction::Up),
    ),
    (
        ".banner",
        400.0,
        LayerOptions::new()
            .distance(Distance::Pixels(120.0))
            .direction(Direction::Right),
    ),
];

fn main() {
    let mode = std::env::args()
        .nth(1)
        .map_or(ReferenceMode::TopOfViewport, |arg| ReferenceMode::parse(&arg));

    // -- engine ------------------------------------------------------------
    let config = LAYERS
        .iter()
        .fold(ParallaxConfig::new().reference_mode(mode), |c, &(sel, _, opts)| {
            c.layer(sel, opts)
        });
    // Each selector matches exactly one synthetic element: its height.
    let (mut engine, heights) = ParallaxEngine::build(&config, |&selector: &&str| {
        LAYERS
            .iter()
            .filter(move |&&(sel, ..)| sel == selector)
            .map(|&(_, height, _)| height)
    });

    // -- sweep -------------------------------------------------------------
    let mut recorder = RecorderSink::new();
    let mut scroll_top = -SCROLL_STEP;
    let end = CONTAINER_TOP + CONTAINER_HEIGHT + SCROLL_STEP;
    let mut signal = Signal::Ready;
    while scroll_top <= end {
        let mut metrics = FrameMetrics::new(ViewportMetrics {
            viewport_height: VIEWPORT_HEIGHT,
            container_offset_top: CONTAINER_TOP,
            container_outer_height: CONTAINER_HEIGHT,
            scroll_top,
        });
        for (id, &height) in engine.layers().ids().zip(&heights) {
            metrics.set_layer_height(id, height);
        }

        let mut tracer = Tracer::new(&mut recorder);
        engine.cycle_traced(signal, &metrics, &mut tracer);

        signal = Signal::Scroll;
        scroll_top += SCROLL_STEP;
    }

    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    recorder.replay(&mut pretty);

    let applied = recorder
        .summaries()
        .filter(|s| s.layers_applied > 0)
        .count();

    // -- export JSON -------------------------------------------------------
    let path = "scroll_trace.json";
    let file = File::create(path).expect("failed to create scroll_trace.json");
    let mut writer = BufWriter::new(file);
    parallax_debug::json::export(recorder.events(), &mut writer)
        .expect("failed to write scroll trace");

    println!(
        "Wrote {path} ({} cycles, {applied} applied)",
        engine.cycle_count()
    );
}
