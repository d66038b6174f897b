// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard handling for open dialogs.
//!
//! The dialog and its focusable list are looked up fresh on every key press;
//! nothing is cached between events.

use alloc::vec::Vec;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use burnish_core::config::A11yConfig;
use burnish_core::focus::{
    FOCUSABLE_SELECTOR, FocusRing, KeyCommand, ModalScope, ModalState, TrapAction, transition,
};
use burnish_core::trace::{FocusWrappedEvent, ModalDismissedEvent};

use crate::diag::Diagnostics;
use crate::{dom, guard};

/// The first dialog that is not hidden with an inline `display: none`.
fn open_dialog(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(dom::select_html(document, selector)?
        .into_iter()
        .find(|dialog| dialog.style().get_property_value("display").as_deref() != Ok("none")))
}

fn focusables(dialog: &Element) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(dom::select_within(dialog, FOCUSABLE_SELECTOR)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Focuses the element named by the dialog's trigger selector. An invalid
/// or unmatched selector leaves focus alone.
fn restore_trigger(document: &Document, selector: &str) -> bool {
    let Some(trigger) = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    trigger.focus().is_ok()
}

/// Installs the Escape/Tab handler on the document.
pub(crate) fn install_focus_trap(
    document: &Document,
    config: &A11yConfig,
    diag: &Diagnostics,
) -> Result<(), JsValue> {
    let doc = document.clone();
    let dialog_selector = config.dialog_selector;
    let trigger_attribute = config.trigger_attribute;
    let trace = diag.clone();

    guard::listen(document, "keydown", diag, move |e: KeyboardEvent| {
        let key = KeyCommand::from_key(&e.key(), e.shift_key());
        if key == KeyCommand::Other {
            return Ok(());
        }
        let Some(dialog) = open_dialog(&doc, dialog_selector)? else {
            return Ok(());
        };

        let items = focusables(&dialog)?;
        let active = doc
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let trigger = dialog.get_attribute(trigger_attribute);
        let scope = ModalScope {
            focusable_len: items.len(),
            active: FocusRing::new(&items).position(active.as_ref()),
            has_trigger: trigger.is_some(),
        };

        match transition(ModalState::Open, key, &scope).action {
            TrapAction::PassThrough => {}
            TrapAction::Wrap(idx) => {
                e.prevent_default();
                if let Some(target) = items.get(idx) {
                    target.focus()?;
                }
                trace.trace(|t| {
                    t.focus_wrapped(&FocusWrappedEvent {
                        to: idx,
                        of: items.len(),
                        backwards: matches!(key, KeyCommand::Tab { backwards: true }),
                    });
                });
            }
            TrapAction::Dismiss { restore_trigger: restore } => {
                dom::set_style(&dialog, &[("display", "none")]);
                let restored = restore
                    && trigger
                        .as_deref()
                        .is_some_and(|selector| restore_trigger(&doc, selector));
                trace.trace(|t| {
                    t.modal_dismissed(&ModalDismissedEvent {
                        restored_focus: restored,
                    });
                });
            }
        }
        Ok(())
    })
}
