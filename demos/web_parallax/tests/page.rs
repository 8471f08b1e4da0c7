// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser test for the demo page.
//!
//! Run with `wasm-pack test --headless --firefox demos/web_parallax`.

#![cfg(target_arch = "wasm32")]

use parallax_core::config::{Direction, Distance, ReferenceMode};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn page_config_comes_from_markup() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    let before = body.child_element_count();

    let (container, config) = web_parallax::build_page(&document).expect("build page");

    // Spacer, container, spacer.
    assert_eq!(body.child_element_count(), before + 3);
    assert_eq!(container.child_element_count(), 3);
    assert_eq!(config.reference_mode, ReferenceMode::BottomOfViewport);

    let selectors: Vec<&str> = config.layers.iter().map(|l| l.selector.as_str()).collect();
    assert_eq!(selectors, [".sky", ".hills", ".banner"]);
    assert_eq!(config.layers[1].options.distance, Some(Distance::Percent(50.0)));
    assert_eq!(config.layers[1].options.direction, Some(Direction::Up));
    assert_eq!(config.layers[2].options.distance, Some(Distance::Pixels(160.0)));
    assert_eq!(config.layers[2].options.direction, Some(Direction::Right));
}
