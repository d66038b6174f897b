// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fault-contained event listeners.
//!
//! Every handler is registered through [`listen`], which converts an `Err`
//! from the handler into a logged fault. The listener stays registered, and
//! since each behavior owns its own listener, a failing handler never takes
//! unrelated behaviors down with it.

use alloc::boxed::Box;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, ErrorEvent, Event, EventTarget};

use crate::diag::Diagnostics;

/// Registers `handler` for `event` on `target` for the life of the page.
///
/// The event is cast to `E` before the handler runs; a cast failure is
/// reported like any other fault.
pub(crate) fn listen<E>(
    target: &EventTarget,
    event: &'static str,
    diag: &Diagnostics,
    handler: impl FnMut(E) -> Result<(), JsValue> + 'static,
) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let closure = wrap(event, diag, handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but marks the listener passive so the browser never waits
/// on it before scrolling.
pub(crate) fn listen_passive<E>(
    target: &EventTarget,
    event: &'static str,
    diag: &Diagnostics,
    handler: impl FnMut(E) -> Result<(), JsValue> + 'static,
) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let closure = wrap(event, diag, handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn wrap<E>(
    event: &'static str,
    diag: &Diagnostics,
    mut handler: impl FnMut(E) -> Result<(), JsValue> + 'static,
) -> Closure<dyn FnMut(Event)>
where
    E: JsCast + 'static,
{
    let diag = diag.clone();
    Closure::wrap(Box::new(move |raw: Event| {
        let result = match raw.dyn_into::<E>() {
            Ok(typed) => handler(typed),
            Err(raw) => Err(raw.into()),
        };
        if let Err(err) = result {
            diag.fault_js(event, &err);
        }
    }) as Box<dyn FnMut(Event)>)
}

/// Logs uncaught script errors reported to the window.
pub(crate) fn install_error_reporting(
    window: &web_sys::Window,
    diag: &Diagnostics,
) -> Result<(), JsValue> {
    let sink = diag.clone();
    listen(window, "error", diag, move |e: ErrorEvent| {
        sink.fault("window", &e.message());
        Ok(())
    })
}
