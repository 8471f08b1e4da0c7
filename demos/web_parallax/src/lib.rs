// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a scrolling page with DOM layers driven by `parallax_backend_web`.
//!
//! Builds a tall page with one container in the middle. The container holds
//! three layers whose travel is read from `data-parallax-*` attributes with
//! the same loose parsing page authors get from markup:
//!
//! - `data-parallax-reference` on the container: `"true"`, `"false"`, or a
//!   pixel offset
//! - `data-parallax-distance` on a layer: `"50%"` or `"120"`
//! - `data-parallax-direction` on a layer: `up`, `down`, `left`, `right`
//!
//! Build with: `wasm-pack build --target web demos/web_parallax`
//!
//! Then serve `demos/web_parallax/` and open `index.html` in a browser.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString as _};

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use parallax_backend_web::attach;
use parallax_core::config::{Direction, Distance, LayerOptions, ParallaxConfig, ReferenceMode};

const CONTAINER_HEIGHT: u32 = 480;
const SPACER_HEIGHT: u32 = 1400;

/// Demo layers: (class, height, distance attribute, direction attribute, color).
const LAYERS: [(&str, u32, &str, &str, &str); 3] = [
    ("sky", 960, "100%", "down", "rgba(33, 150, 243, 0.9)"),
    ("hills", 720, "50%", "up", "rgba(77, 176, 80, 0.9)"),
    ("banner", 120, "160", "right", "rgba(255, 194, 8, 0.9)"),
];

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document")?;

    let (container, config) = build_page(&document)?;
    let parallax = attach(container, &config)?;
    // The page lives as long as the module; so do its listeners.
    core::mem::forget(parallax);
    Ok(())
}

/// Appends the demo page to the body and returns the container together
/// with the configuration read back from its markup.
pub fn build_page(document: &Document) -> Result<(HtmlElement, ParallaxConfig<String>), JsValue> {
    let body = document.body().ok_or("no body")?;

    let top = spacer(document)?;
    body.append_child(&top)?;
    let container = create_container(document)?;
    body.append_child(&container)?;
    let bottom = spacer(document)?;
    body.append_child(&bottom)?;

    let mode = ReferenceMode::parse(
        &container
            .get_attribute("data-parallax-reference")
            .unwrap_or_default(),
    );
    let mut config = ParallaxConfig::<String>::new().reference_mode(mode);
    for &(class, height, distance, direction, color) in &LAYERS {
        let layer = create_layer(document, class, height, color)?;
        layer.set_attribute("data-parallax-distance", distance)?;
        layer.set_attribute("data-parallax-direction", direction)?;
        container.append_child(&layer)?;
        config = config.layer(format!(".{class}"), layer_options(&layer));
    }
    Ok((container, config))
}

/// Reads a layer's overrides from its `data-parallax-*` attributes.
fn layer_options(layer: &HtmlElement) -> LayerOptions {
    let mut options = LayerOptions::new();
    if let Some(distance) = layer.get_attribute("data-parallax-distance") {
        options = options.distance(Distance::parse(&distance));
    }
    if let Some(direction) = layer.get_attribute("data-parallax-direction") {
        options = options.direction(Direction::parse(&direction));
    }
    options
}

fn create_container(document: &Document) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_attribute("data-parallax-reference", "false")?;
    let style = el.style();
    style.set_property("position", "relative")?;
    style.set_property("overflow", "hidden")?;
    style.set_property("height", &format!("{CONTAINER_HEIGHT}px"))?;
    style.set_property("background", "#1a1a2e")?;
    Ok(el)
}

fn create_layer(
    document: &Document,
    class: &str,
    height: u32,
    color: &str,
) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name(class);
    el.set_text_content(Some(&class.to_string()));
    let style = el.style();
    style.set_property("position", "absolute")?;
    style.set_property("left", "0")?;
    style.set_property("width", "100%")?;
    style.set_property("height", &format!("{height}px"))?;
    style.set_property("background", color)?;
    style.set_property("will-change", "transform")?;
    Ok(el)
}

fn spacer(document: &Document) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.style()
        .set_property("height", &format!("{SPACER_HEIGHT}px"))?;
    Ok(el)
}
