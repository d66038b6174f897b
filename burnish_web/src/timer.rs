// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout`-based deferral.
//!
//! [`DebouncedTask`] runs its callback once after triggers stop arriving for a
//! quiet period. Each trigger clears the outstanding timer and arms a new one;
//! a [`Debouncer`] decides whether a timer that does fire is still the latest.
//!
//! [`after`] is a plain one-shot delay.
//!
//! [`Debouncer`]: burnish_core::pacing::Debouncer

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use burnish_core::pacing::{DebounceToken, Debouncer};
use burnish_core::time::{Duration, HostTime};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

/// Runs `f` once after `delay`.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    let mut f = Some(f);
    let handler = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    set_timeout(handler.as_ref().unchecked_ref(), delay.as_millis_i32());
    handler.forget();
}

/// Work that runs once after a burst of triggers has settled.
pub struct DebouncedTask {
    inner: Rc<DebounceInner>,
}

type TimerClosure = Closure<dyn FnMut()>;

struct DebounceInner {
    closure: RefCell<Option<TimerClosure>>,
    callback: RefCell<Box<dyn FnMut(HostTime)>>,
    debouncer: Cell<Debouncer>,
    /// Token of the most recent trigger; read when the timer fires.
    token: Cell<Option<DebounceToken>>,
    timer_id: Cell<Option<i32>>,
}

impl DebounceInner {
    fn run(&self) {
        self.timer_id.set(None);
        let Some(token) = self.token.take() else {
            return;
        };
        let mut debouncer = self.debouncer.get();
        let latest = debouncer.fire(token);
        self.debouncer.set(debouncer);
        if latest {
            self.callback.borrow_mut()(crate::now());
        }
    }
}

impl DebouncedTask {
    /// Creates an idle task that waits for `debouncer`'s quiet period.
    pub fn new(debouncer: Debouncer, callback: impl FnMut(HostTime) + 'static) -> Self {
        let inner = Rc::new(DebounceInner {
            closure: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
            debouncer: Cell::new(debouncer),
            token: Cell::new(None),
            timer_id: Cell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.run();
            }
        }) as Box<dyn FnMut()>);
        *inner.closure.borrow_mut() = Some(closure);
        Self { inner }
    }

    /// Records an event now and restarts the quiet period.
    pub fn trigger(&self) {
        let mut debouncer = self.inner.debouncer.get();
        let token = debouncer.trigger(crate::now());
        self.inner.debouncer.set(debouncer);
        self.inner.token.set(Some(token));

        if let Some(id) = self.inner.timer_id.take() {
            clear_timeout(id);
        }
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = set_timeout(
                closure.as_ref().unchecked_ref(),
                debouncer.quiet().as_millis_i32(),
            );
            self.inner.timer_id.set(Some(id));
        }
    }

    /// Returns `true` while a trigger is waiting out its quiet period.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.debouncer.get().is_pending()
    }
}

impl Drop for DebouncedTask {
    fn drop(&mut self) {
        if let Some(id) = self.inner.timer_id.take() {
            clear_timeout(id);
        }
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for DebouncedTask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DebouncedTask")
            .field("pending", &self.is_pending())
            .field("timer_id", &self.inner.timer_id.get())
            .finish()
    }
}
