// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM helpers shared by the installers.

use alloc::vec::Vec;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// The global window, or an error when running outside a browser.
pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// The window's document.
pub(crate) fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// The document body.
pub(crate) fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document.body().ok_or_else(|| JsValue::from_str("no body"))
}

/// Every element matching `selector`, in document order.
///
/// Nodes that are not elements are skipped.
pub(crate) fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Like [`select_all`] but scoped to `root`'s descendants.
pub(crate) fn select_within(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(&root.query_selector_all(selector)?))
}

/// [`select_all`], keeping only `HtmlElement`s.
pub(crate) fn select_html(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(select_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Sets inline style properties in order. Style writes do not fail in
/// practice, so errors are ignored.
pub(crate) fn set_style(el: &HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        let _ = style.set_property(name, value);
    }
}

/// Whether two handles refer to the same DOM node.
pub(crate) fn same_node(a: &impl AsRef<JsValue>, b: &impl AsRef<JsValue>) -> bool {
    a.as_ref() == b.as_ref()
}
