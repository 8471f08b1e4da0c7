// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser tests for the DOM wiring.
//!
//! Run with `wasm-pack test --headless --firefox parallax_backend_web`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use parallax_backend_web::{
    ATTACHED_ATTR, AttachError, CONTAINER_CLASS, DomMeasurer, LAYER_CLASS, Parallax, attach,
    attach_with_sink,
};
use parallax_core::config::{LayerOptions, ParallaxConfig};
use parallax_core::engine::Signal;
use parallax_core::trace::{CycleSummary, TraceSink};
use wasm_bindgen::JsCast as _;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A container with two `.layer` children, appended to the body.
fn fixture(container_class: &str) -> HtmlElement {
    let document = document();
    let container: HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    container.set_class_name(container_class);
    for _ in 0..2 {
        let layer = document.create_element("div").unwrap();
        layer.set_class_name("layer");
        container.append_child(&layer).unwrap();
    }
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn config() -> ParallaxConfig<String> {
    ParallaxConfig::new().layer(".layer".into(), LayerOptions::new())
}

fn layer_classes_present(container: &HtmlElement) -> u32 {
    container
        .query_selector_all(&format!(".{LAYER_CLASS}"))
        .unwrap()
        .length()
}

#[wasm_bindgen_test]
fn container_class_in_markup_does_not_block_attach() {
    let container = fixture(CONTAINER_CLASS);
    let parallax = attach(container.clone(), &config()).expect("first attach");
    assert_eq!(parallax.with_engine(|e| e.layers().len()), Some(2));

    drop(parallax);
    // Markup-owned class survives; the attach marker does not.
    assert!(container.class_list().contains(CONTAINER_CLASS), "class removed");
    assert!(!container.has_attribute(ATTACHED_ATTR), "marker left behind");
}

#[wasm_bindgen_test]
fn second_attach_is_refused_until_drop() {
    let container = fixture("");
    let first = attach(container.clone(), &config()).expect("first attach");
    assert!(container.has_attribute(ATTACHED_ATTR), "marker missing");
    assert_eq!(layer_classes_present(&container), 2);

    let second = attach(container.clone(), &config());
    assert!(matches!(second, Err(AttachError::AlreadyAttached)));

    drop(first);
    assert!(!container.class_list().contains(CONTAINER_CLASS), "class left behind");
    assert_eq!(layer_classes_present(&container), 0);

    let again = attach(container, &config());
    assert!(again.is_ok(), "re-attach after drop failed");
}

#[wasm_bindgen_test]
fn viewport_height_is_root_client_height() {
    let container = fixture("");
    let window = web_sys::window().unwrap();
    let root = document().document_element().unwrap();
    let measurer = DomMeasurer::new(window, container);
    assert_eq!(
        measurer.viewport().viewport_height,
        f64::from(root.client_height())
    );
}

/// Calls back into the handle from inside a running cycle.
struct Reentrant {
    handle: Rc<RefCell<Option<Rc<Parallax>>>>,
    engine_visible: Rc<Cell<Option<bool>>>,
}

impl TraceSink for Reentrant {
    fn on_cycle_summary(&mut self, _: &CycleSummary) {
        if let Some(parallax) = self.handle.borrow().as_ref() {
            self.engine_visible
                .set(Some(parallax.with_engine(|_| ()).is_some()));
        }
    }
}

#[wasm_bindgen_test]
fn with_engine_during_cycle_returns_none() {
    let handle = Rc::new(RefCell::new(None));
    let engine_visible = Rc::new(Cell::new(None));
    let sink = Reentrant {
        handle: Rc::clone(&handle),
        engine_visible: Rc::clone(&engine_visible),
    };

    let parallax = Rc::new(
        attach_with_sink(fixture(""), &config(), Some(Box::new(sink))).expect("attach"),
    );
    *handle.borrow_mut() = Some(Rc::clone(&parallax));

    assert!(parallax.refresh(Signal::Scroll).is_some(), "refresh was busy");
    assert_eq!(engine_visible.get(), Some(false));
    assert!(parallax.with_engine(|_| ()).is_some(), "idle engine unreachable");

    // Break the handle <-> sink cycle.
    handle.borrow_mut().take();
}
