// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bars: current-page highlighting and hide-on-scroll.

use alloc::vec::Vec;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlAnchorElement, HtmlElement, Window};

use burnish_core::config::NavConfig;
use burnish_core::links::is_current_page;
use burnish_core::nav::StickyNav;
use burnish_core::trace::NavChangedEvent;

use crate::diag::Diagnostics;
use crate::dom;

/// Highlights links that point at the current page. Returns how many matched.
pub(crate) fn mark_active_links(
    window: &Window,
    document: &Document,
    config: &NavConfig,
) -> Result<usize, JsValue> {
    let current = window.location().pathname()?;
    let mut marked = 0;
    for link in dom::select_all(document, config.link_selector)? {
        let Ok(anchor) = link.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        if is_current_page(&anchor.pathname(), &current) {
            dom::set_style(
                &anchor,
                &[
                    ("font-weight", config.active_font_weight),
                    ("color", config.active_color),
                ],
            );
            marked += 1;
        }
    }
    Ok(marked)
}

/// Every matched nav bar, each with its own scroll history.
#[derive(Debug)]
pub struct NavBars {
    bars: Vec<(HtmlElement, StickyNav)>,
}

impl NavBars {
    pub(crate) fn find(document: &Document, config: &NavConfig) -> Result<Self, JsValue> {
        let bars = dom::select_html(document, config.bar_selector)?
            .into_iter()
            .map(|bar| (bar, config.sticky()))
            .collect();
        Ok(Self { bars })
    }

    /// Number of bars being driven.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns `true` if the page has no nav bar.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Feeds one scroll sample to every bar and restyles those that changed.
    pub(crate) fn on_scroll(&mut self, offset: f64, diag: &Diagnostics) {
        for (index, (bar, sticky)) in self.bars.iter_mut().enumerate() {
            let before = sticky.visibility();
            let after = sticky.on_scroll(offset);
            if after == before {
                continue;
            }
            dom::set_style(bar, &[("transform", after.transform())]);
            diag.trace(|t| {
                t.nav_changed(&NavChangedEvent {
                    bar: index,
                    visibility: after,
                    offset,
                });
            });
        }
    }
}
