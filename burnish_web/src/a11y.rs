// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skip link and focus outline.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, FocusEvent, HtmlAnchorElement};

use burnish_core::config::A11yConfig;

use crate::diag::Diagnostics;
use crate::{dom, guard};

const SKIP_LINK_CSS: &str = "position: absolute; top: -40px; left: 0; \
    background: var(--primary-blue); color: white; padding: 8px 16px; \
    text-decoration: none; border-radius: 0 0 4px 0; z-index: 100; \
    transition: top 0.3s;";

/// Inserts the skip link as the first child of `body` unless the page
/// already has one. Returns whether a link was inserted.
pub(crate) fn install_skip_link(
    document: &Document,
    config: &A11yConfig,
    diag: &Diagnostics,
) -> Result<bool, JsValue> {
    let existing = document.query_selector(&alloc::format!(".{}", config.skip_link_class))?;
    if existing.is_some() {
        return Ok(false);
    }

    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_href(config.skip_link_target);
    link.set_class_name(config.skip_link_class);
    link.set_text_content(Some(config.skip_link_text));
    link.style().set_css_text(SKIP_LINK_CSS);

    let el = link.clone();
    guard::listen(&link, "focus", diag, move |_: FocusEvent| {
        dom::set_style(&el, &[("top", "0")]);
        Ok(())
    })?;
    let el = link.clone();
    guard::listen(&link, "blur", diag, move |_: FocusEvent| {
        dom::set_style(&el, &[("top", "-40px")]);
        Ok(())
    })?;

    let body = dom::body(document)?;
    body.insert_before(&link, body.first_child().as_ref())?;
    Ok(true)
}

/// Appends the `:focus-visible` outline rule to `head`.
pub(crate) fn install_focus_style(document: &Document, config: &A11yConfig) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(config.focus_style));
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no head"))?;
    head.append_child(&style)?;
    Ok(())
}
