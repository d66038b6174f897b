// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` rate limiting.
//!
//! [`FrameTask`] defers work to the next animation frame. Scheduling again
//! before the frame arrives cancels the outstanding request and makes a new
//! one, so a burst of scroll events collapses into a single run per rendered
//! frame. A [`FrameGate`] tracks which request is current.
//!
//! [`FrameGate`]: burnish_core::pacing::FrameGate

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use burnish_core::pacing::{FrameGate, FrameToken};
use burnish_core::time::HostTime;

// Direct global bindings; no Window/Performance lookups per event.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Work that runs at most once per animation frame.
///
/// Create with [`FrameTask::new`], then call [`schedule`](Self::schedule) from
/// high-frequency event handlers. The callback receives the frame timestamp.
pub struct FrameTask {
    inner: Rc<FrameInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct FrameInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Set once in `new()` and reused for every request.
    closure: RefCell<Option<RafClosure>>,

    /// The user-supplied work.
    callback: RefCell<Box<dyn FnMut(HostTime)>>,

    /// Which request is current.
    gate: Cell<FrameGate>,

    /// Token of the most recent request.
    token: Cell<Option<FrameToken>>,

    /// The ID returned by the outstanding `requestAnimationFrame` call, used by
    /// [`cancel_animation_frame`] when superseding it.
    raf_id: Cell<Option<i32>>,
}

impl FrameInner {
    fn run(&self, timestamp_ms: f64) {
        self.raf_id.set(None);
        let Some(token) = self.token.take() else {
            return;
        };
        let mut gate = self.gate.get();
        let current = gate.fire(token);
        self.gate.set(gate);
        if current {
            self.callback.borrow_mut()(HostTime::from_millis_f64(timestamp_ms));
        }
    }
}

impl FrameTask {
    /// Creates an idle task around `callback`.
    pub fn new(callback: impl FnMut(HostTime) + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            closure: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
            gate: Cell::new(FrameGate::new()),
            token: Cell::new(None),
            raf_id: Cell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.run(timestamp_ms);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);
        Self { inner }
    }

    /// Requests a run on the next animation frame, superseding any request
    /// that has not run yet.
    pub fn schedule(&self) {
        let mut gate = self.inner.gate.get();
        let (token, superseded) = gate.request();
        self.inner.gate.set(gate);
        self.inner.token.set(Some(token));

        if superseded.is_some()
            && let Some(id) = self.inner.raf_id.take()
        {
            cancel_animation_frame(id);
        }
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(Some(id));
        }
    }

    /// Drops the outstanding request, if any.
    pub fn cancel(&self) {
        let mut gate = self.inner.gate.get();
        gate.cancel();
        self.inner.gate.set(gate);
        self.inner.token.set(None);
        if let Some(id) = self.inner.raf_id.take() {
            cancel_animation_frame(id);
        }
    }

    /// Returns `true` while a request is waiting for its frame.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.gate.get().is_pending()
    }
}

impl Drop for FrameTask {
    fn drop(&mut self) {
        self.cancel();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for FrameTask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameTask")
            .field("pending", &self.is_pending())
            .field("raf_id", &self.inner.raf_id.get())
            .finish()
    }
}
