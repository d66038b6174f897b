// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-page anchor scrolling and page fades.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, HtmlAnchorElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use burnish_core::config::TransitionConfig;
use burnish_core::links::is_internal_navigation;
use burnish_core::scroll::anchor_target;

use crate::diag::Diagnostics;
use crate::{dom, guard, timer};

/// Smooth-scrolls fragment links to their target and records the fragment in
/// history. Returns how many links matched.
pub(crate) fn install_smooth_anchors(
    window: &Window,
    document: &Document,
    diag: &Diagnostics,
) -> Result<usize, JsValue> {
    let anchors = dom::select_all(document, "a[href^=\"#\"]")?;
    for anchor in &anchors {
        let el = anchor.clone();
        let doc = document.clone();
        let win = window.clone();
        guard::listen(anchor, "click", diag, move |e: MouseEvent| {
            let Some(href) = el.get_attribute("href") else {
                return Ok(());
            };
            let Some(selector) = anchor_target(&href) else {
                return Ok(());
            };
            e.prevent_default();
            // A fragment that is not a valid selector has no target.
            let Some(target) = doc.query_selector(selector).ok().flatten() else {
                return Ok(());
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            win.history()?
                .push_state_with_url(&JsValue::NULL, "", Some(selector))?;
            Ok(())
        })?;
    }
    Ok(anchors.len())
}

/// Fades the body in on `load` and dims it when leaving for another page on
/// this site. Returns how many outgoing links matched.
pub(crate) fn install_page_fades(
    window: &Window,
    document: &Document,
    config: &TransitionConfig,
    diag: &Diagnostics,
) -> Result<usize, JsValue> {
    let doc = document.clone();
    let delay = config.fade_in_delay;
    guard::listen(window, "load", diag, move |_: Event| {
        let body = dom::body(&doc)?;
        dom::set_style(&body, &[("opacity", "0"), ("transition", "opacity 0.5s ease")]);
        timer::after(delay, move || dom::set_style(&body, &[("opacity", "1")]));
        Ok(())
    })?;

    let links = dom::select_all(document, "a:not([href^=\"#\"])")?;
    for link in &links {
        let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>().cloned() else {
            continue;
        };
        let doc = document.clone();
        let win = window.clone();
        let leaving = config.leaving_opacity;
        guard::listen(link, "click", diag, move |_: MouseEvent| {
            let page_host = win.location().hostname()?;
            let href = anchor.get_attribute("href");
            if is_internal_navigation(&anchor.hostname(), &page_host, href.as_deref()) {
                dom::set_style(
                    &dom::body(&doc)?,
                    &[("opacity", leaving), ("transition", "opacity 0.3s ease")],
                );
            }
            Ok(())
        })?;
    }
    Ok(links.len())
}
