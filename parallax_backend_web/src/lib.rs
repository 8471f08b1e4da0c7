// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for `parallax_core`.
//!
//! This crate provides the DOM side of the engine's collaborators:
//!
//! - [`query_layers`]: selector lookup within the container
//! - [`DomMeasurer`]: layout measurement
//! - [`DomPresenter`]: `transform` style application
//! - [`SignalBinding`]: ready / scroll / resize listeners
//!
//! [`attach`] wires all of them to a [`ParallaxEngine`] for one container.

#![no_std]

extern crate alloc;

mod measure;
mod presenter;
mod signals;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use parallax_core::config::ParallaxConfig;
use parallax_core::engine::{CycleOutcome, ParallaxEngine, Signal};
use parallax_core::trace::{TraceSink, Tracer};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, HtmlElement};

pub use measure::DomMeasurer;
pub use parallax_core::backend::Presenter;
pub use presenter::{DomPresenter, LAYER_CLASS, css_translate};
pub use signals::SignalBinding;

/// CSS class added to an attached container.
pub const CONTAINER_CLASS: &str = "parallaxor-container";

/// Attribute marking a container that has an engine attached. Owned by this
/// crate; page markup may use [`CONTAINER_CLASS`] freely.
pub const ATTACHED_ATTR: &str = "data-parallaxor-attached";

/// Why [`attach`] failed.
#[derive(Debug)]
pub enum AttachError {
    /// There is no global `window`.
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// The container already has an engine attached.
    AlreadyAttached,
    /// A DOM call threw.
    Js(JsValue),
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::AlreadyAttached => f.write_str("container already has a parallax engine"),
            Self::Js(v) => write!(f, "DOM error: {v:?}"),
        }
    }
}

impl core::error::Error for AttachError {}

impl From<JsValue> for AttachError {
    fn from(v: JsValue) -> Self {
        Self::Js(v)
    }
}

impl From<AttachError> for JsValue {
    fn from(e: AttachError) -> Self {
        match e {
            AttachError::Js(v) => v,
            other => Self::from_str(&alloc::format!("{other}")),
        }
    }
}

/// Returns the elements inside `container` matching `selector`, in document
/// order. Matches that are not `HtmlElement`s are skipped.
pub fn query_layers(container: &Element, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = container.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

struct Instance {
    engine: ParallaxEngine,
    measurer: DomMeasurer,
    presenter: DomPresenter,
    sink: Option<Box<dyn TraceSink>>,
}

impl Instance {
    fn run(&mut self, signal: Signal) -> CycleOutcome {
        let metrics = self.measurer.measure(self.presenter.elements());
        let mut tracer = match self.sink.as_deref_mut() {
            Some(sink) => Tracer::new(sink),
            None => Tracer::none(),
        };
        self.engine
            .cycle_and_present(signal, &metrics, &mut self.presenter, &mut tracer)
    }
}

/// A parallax engine attached to one container.
///
/// Dropping the handle removes the listeners and the attach markers;
/// elements keep the last translation they were given.
pub struct Parallax {
    instance: Rc<RefCell<Instance>>,
    container: HtmlElement,
    added_class: bool,
    _signals: SignalBinding,
}

impl fmt::Debug for Parallax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parallax")
            .field("container", &"HtmlElement")
            .field("signals", &self._signals)
            .finish_non_exhaustive()
    }
}

impl Parallax {
    /// Runs a cycle immediately, outside of any DOM event.
    ///
    /// Returns `None` if a cycle is already running.
    pub fn refresh(&self, signal: Signal) -> Option<CycleOutcome> {
        let mut instance = self.instance.try_borrow_mut().ok()?;
        Some(instance.run(signal))
    }

    /// Calls `f` with the engine.
    ///
    /// Returns `None` if a cycle is running, e.g. when called from a
    /// [`TraceSink`].
    pub fn with_engine<R>(&self, f: impl FnOnce(&ParallaxEngine) -> R) -> Option<R> {
        let instance = self.instance.try_borrow().ok()?;
        Some(f(&instance.engine))
    }

    /// Returns the container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }
}

impl Drop for Parallax {
    fn drop(&mut self) {
        if let Ok(instance) = self.instance.try_borrow() {
            instance.presenter.release();
        }
        detach_container(&self.container, self.added_class);
    }
}

/// Undoes the container markers set by [`attach_with_sink`].
fn detach_container(container: &HtmlElement, added_class: bool) {
    let _ = container.remove_attribute(ATTACHED_ATTR);
    if added_class {
        let _ = container.class_list().remove_1(CONTAINER_CLASS);
    }
}

/// Attaches a parallax engine to `container`.
///
/// Each selector in `config` is resolved within `container`; every match
/// becomes one layer. The first cycle runs on document ready (or right away
/// if the document is already parsed).
///
/// The container gets [`ATTACHED_ATTR`] and [`CONTAINER_CLASS`], the layers
/// get [`LAYER_CLASS`]. A container can only be attached once at a time.
pub fn attach(
    container: HtmlElement,
    config: &ParallaxConfig<String>,
) -> Result<Parallax, AttachError> {
    attach_with_sink(container, config, None)
}

/// Like [`attach`], but reports every cycle to `sink`.
///
/// Events only reach the sink when the `trace` feature is enabled.
pub fn attach_with_sink(
    container: HtmlElement,
    config: &ParallaxConfig<String>,
    sink: Option<Box<dyn TraceSink>>,
) -> Result<Parallax, AttachError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;

    if container.has_attribute(ATTACHED_ATTR) {
        return Err(AttachError::AlreadyAttached);
    }

    let mut query_error = None;
    let (engine, elements) = ParallaxEngine::build(config, |selector: &String| {
        query_layers(&container, selector).unwrap_or_else(|e| {
            // Keep the first failure; later selectors still run.
            query_error = query_error.take().or(Some(e));
            Vec::new()
        })
    });
    if let Some(e) = query_error {
        return Err(e.into());
    }
    container.set_attribute(ATTACHED_ATTR, "")?;
    let classes = container.class_list();
    let added_class = !classes.contains(CONTAINER_CLASS);
    if added_class && let Err(e) = classes.add_1(CONTAINER_CLASS) {
        detach_container(&container, false);
        return Err(e.into());
    }

    let instance = Rc::new(RefCell::new(Instance {
        engine,
        measurer: DomMeasurer::new(window.clone(), container.clone()),
        presenter: DomPresenter::new(elements),
        sink,
    }));

    let weak = Rc::downgrade(&instance);
    let handler: Rc<dyn Fn(Signal)> = Rc::new(move |signal| {
        // Signals are serial; a busy instance means re-entry, which is dropped.
        if let Some(instance) = weak.upgrade()
            && let Ok(mut instance) = instance.try_borrow_mut()
        {
            instance.run(signal);
        }
    });
    let signals = match SignalBinding::new(&window, &document, handler) {
        Ok(signals) => signals,
        Err(e) => {
            instance.borrow().presenter.release();
            detach_container(&container, added_class);
            return Err(e.into());
        }
    };

    Ok(Parallax {
        instance,
        container,
        added_class,
        _signals: signals,
    })
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;

    use super::*;

    #[test]
    fn attach_error_messages() {
        assert_eq!(AttachError::NoWindow.to_string(), "no global window");
        assert_eq!(
            AttachError::AlreadyAttached.to_string(),
            "container already has a parallax engine"
        );
    }
}
