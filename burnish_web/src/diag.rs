// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared handles to the trace and track sinks.
//!
//! Event handlers are `'static` closures, so the sinks live behind
//! `Rc<RefCell<..>>`. Both handles use `try_borrow_mut`: an event that arrives
//! while the sink is already busy (a sink that itself dispatches DOM events,
//! say) is dropped instead of panicking.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use burnish_core::trace::{HandlerFaultEvent, TraceSink, Tracer};
use burnish_core::track::{TrackEvent, TrackSink};
use wasm_bindgen::{JsCast as _, JsValue};

/// Cloneable handle to the diagnostics sink.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Rc<RefCell<dyn TraceSink>>,
}

impl core::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl Diagnostics {
    /// Wraps a sink.
    pub fn new(sink: impl TraceSink + 'static) -> Self {
        Self {
            sink: Rc::new(RefCell::new(sink)),
        }
    }

    /// Runs `f` with a [`Tracer`] pointed at the sink.
    pub fn trace(&self, f: impl FnOnce(&mut Tracer<'_>)) {
        if let Ok(mut sink) = self.sink.try_borrow_mut() {
            let mut tracer = Tracer::new(&mut *sink);
            f(&mut tracer);
        }
    }

    /// Reports a contained failure.
    ///
    /// Faults go straight to the sink, so they are logged whether or not the
    /// `trace` feature is enabled.
    pub fn fault(&self, handler: &'static str, message: &str) {
        if let Ok(mut sink) = self.sink.try_borrow_mut() {
            sink.on_handler_fault(&HandlerFaultEvent { handler, message });
        }
    }

    /// Reports a contained failure carrying a JavaScript value.
    pub fn fault_js(&self, handler: &'static str, err: &JsValue) {
        self.fault(handler, &describe(err));
    }
}

/// Best-effort text for a thrown JavaScript value.
pub(crate) fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        String::from(e.message())
    } else if let Some(s) = err.as_string() {
        s
    } else {
        format!("{err:?}")
    }
}

/// Cloneable handle to the analytics sink.
#[derive(Clone)]
pub struct Tracking {
    sink: Rc<RefCell<dyn TrackSink>>,
}

impl core::fmt::Debug for Tracking {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracking").finish_non_exhaustive()
    }
}

impl Tracking {
    /// Wraps a sink.
    pub fn new(sink: impl TrackSink + 'static) -> Self {
        Self {
            sink: Rc::new(RefCell::new(sink)),
        }
    }

    /// Forwards one event. Never fails.
    pub fn track(&self, event: &TrackEvent) {
        if let Ok(mut sink) = self.sink.try_borrow_mut() {
            sink.track(event);
        }
    }
}
