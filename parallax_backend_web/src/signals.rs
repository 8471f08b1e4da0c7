// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready, scroll, and resize subscription.
//!
//! [`SignalBinding`] registers DOM listeners that forward each event to a
//! handler as a [`Signal`]. Listeners stay registered until the binding is
//! dropped.

use alloc::rc::Rc;
use alloc::vec::Vec;

use parallax_core::engine::Signal;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, Window};

type Listener = Closure<dyn FnMut(Event)>;

/// One registered listener, kept so it can be removed again.
struct Registration {
    target: EventTarget,
    event: &'static str,
    closure: Listener,
}

/// Keeps the DOM listeners for one container alive.
///
/// - `DOMContentLoaded` on the document becomes [`Signal::Ready`]. If the
///   document has already been parsed, `Ready` is delivered immediately
///   instead.
/// - `scroll` on the document becomes [`Signal::Scroll`].
/// - `resize` on the window becomes [`Signal::Resize`].
pub struct SignalBinding {
    registrations: Vec<Registration>,
}

impl core::fmt::Debug for SignalBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignalBinding")
            .field("listeners", &self.registrations.len())
            .finish()
    }
}

impl SignalBinding {
    /// Registers the listeners. `handler` runs synchronously inside each
    /// event callback.
    pub fn new(
        window: &Window,
        document: &Document,
        handler: Rc<dyn Fn(Signal)>,
    ) -> Result<Self, JsValue> {
        let mut binding = Self {
            registrations: Vec::new(),
        };

        let already_parsed = document.ready_state() != "loading";
        if !already_parsed {
            binding.listen(document, "DOMContentLoaded", Signal::Ready, &handler)?;
        }
        binding.listen(document, "scroll", Signal::Scroll, &handler)?;
        binding.listen(window, "resize", Signal::Resize, &handler)?;

        if already_parsed {
            handler(Signal::Ready);
        }
        Ok(binding)
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        signal: Signal,
        handler: &Rc<dyn Fn(Signal)>,
    ) -> Result<(), JsValue> {
        let handler = Rc::clone(handler);
        let closure: Listener = Closure::new(move |_: Event| handler(signal));
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.registrations.push(Registration {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }
}

impl Drop for SignalBinding {
    fn drop(&mut self) {
        for r in &self.registrations {
            let _ = r
                .target
                .remove_event_listener_with_callback(r.event, r.closure.as_ref().unchecked_ref());
        }
    }
}
