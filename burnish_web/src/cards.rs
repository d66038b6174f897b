// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card hover transition and pointer tilt.

use wasm_bindgen::JsValue;
use web_sys::{Document, MouseEvent, Window};

use burnish_core::config::CardConfig;
use burnish_core::motion::{MotionPreference, REDUCED_MOTION_QUERY, tilt_transform};
use kurbo::{Point, Rect};

use crate::diag::Diagnostics;
use crate::{dom, guard};

/// Reads the reduced-motion media query. A browser without `matchMedia`
/// counts as having no preference.
fn motion_preference(window: &Window) -> MotionPreference {
    let matches = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    MotionPreference::from_query_match(matches)
}

/// Wires hover and tilt handlers onto every card. Returns how many matched.
pub(crate) fn install_cards(
    window: &Window,
    document: &Document,
    config: &CardConfig,
    diag: &Diagnostics,
) -> Result<usize, JsValue> {
    let cards = dom::select_html(document, config.selector)?;
    let rest = config.tilt.rest_transform();

    for card in &cards {
        let el = card.clone();
        let hover = config.hover_transition;
        guard::listen(card, "mouseenter", diag, move |_: MouseEvent| {
            dom::set_style(&el, &[("transition", hover)]);
            Ok(())
        })?;

        let el = card.clone();
        let win = window.clone();
        let tilt = config.tilt;
        guard::listen(card, "mousemove", diag, move |e: MouseEvent| {
            let rect = el.get_bounding_client_rect();
            let bounds = Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom());
            let pointer = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
            if let Some(transform) =
                tilt_transform(motion_preference(&win), pointer, bounds, &tilt)
            {
                dom::set_style(&el, &[("transform", transform.as_str())]);
            }
            Ok(())
        })?;

        let el = card.clone();
        let rest = rest.clone();
        guard::listen(card, "mouseleave", diag, move |_: MouseEvent| {
            dom::set_style(&el, &[("transform", rest.as_str())]);
            Ok(())
        })?;
    }
    Ok(cards.len())
}
