// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-view and button-click tracking.

use wasm_bindgen::JsValue;
use web_sys::{Document, Event, MouseEvent, Window};

use burnish_core::config::TrackingConfig;
use burnish_core::track::TrackEvent;

use crate::diag::{Diagnostics, Tracking};
use crate::{dom, guard};

/// Reports a page view on `load` and a click for every tracked button.
/// Returns how many buttons matched.
pub(crate) fn install_tracking(
    window: &Window,
    document: &Document,
    config: &TrackingConfig,
    tracking: &Tracking,
    diag: &Diagnostics,
) -> Result<usize, JsValue> {
    let win = window.clone();
    let sink = tracking.clone();
    guard::listen(window, "load", diag, move |_: Event| {
        let path = win.location().pathname()?;
        sink.track(&TrackEvent::page_view(&path));
        Ok(())
    })?;

    let buttons = dom::select_all(document, config.button_selector)?;
    for button in &buttons {
        let el = button.clone();
        let sink = tracking.clone();
        guard::listen(button, "click", diag, move |_: MouseEvent| {
            let text = el.text_content().unwrap_or_default();
            sink.track(&TrackEvent::button_click(&text));
            Ok(())
        })?;
    }
    Ok(buttons.len())
}
