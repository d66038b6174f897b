// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating back-to-top button.
//!
//! The button is created the first time the page is scrolled far enough to
//! show it, or adopted if the page already has an element with the same id.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use burnish_core::config::ScrollTopConfig;
use burnish_core::scroll::{ScrollTopControl, ScrollTopState, scroll_percent};
use burnish_core::trace::ScrollTopEvent;

use crate::diag::Diagnostics;
use crate::{dom, guard};

const BUTTON_CSS: &str = "position: fixed; bottom: 2rem; right: 2rem; width: 50px; \
    height: 50px; background: linear-gradient(135deg, var(--primary-blue), \
    var(--accent-blue)); color: white; border: none; border-radius: 50%; \
    cursor: pointer; box-shadow: var(--shadow-lg); z-index: 1000; display: flex; \
    align-items: center; justify-content: center; opacity: 0; \
    transform: translateY(100px); transition: all 0.3s ease;";

const ARROW_SVG: &str = "<svg width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" fill=\"none\" \
    xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M12 19V5M12 5L5 12M12 5L19 12\" \
    stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" \
    stroke-linejoin=\"round\"/></svg>";

/// Show/hide state for the back-to-top button.
#[derive(Debug)]
pub struct ScrollTop {
    config: ScrollTopConfig,
    control: ScrollTopControl,
    button: Option<HtmlElement>,
}

impl ScrollTop {
    pub(crate) fn new(document: &Document, config: &ScrollTopConfig) -> Self {
        let button = document
            .get_element_by_id(config.id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Self {
            config: *config,
            control: config.control(),
            button,
        }
    }

    /// Current visibility.
    #[must_use]
    pub fn state(&self) -> ScrollTopState {
        self.control.state()
    }

    /// Re-evaluates the button against the current scroll position.
    pub(crate) fn on_scroll(
        &mut self,
        window: &Window,
        document: &Document,
        diag: &Diagnostics,
    ) -> Result<(), JsValue> {
        let viewport = window.inner_height()?.as_f64().unwrap_or(0.0);
        let height = dom::body(document)?.scroll_height();
        let percent = scroll_percent(window.scroll_y()?, f64::from(height), viewport);

        let before = self.control.state();
        let state = self.control.update(percent);
        if state == ScrollTopState::Shown && self.button.is_none() {
            self.button = Some(self.create(window, document, diag)?);
        }
        // A hidden button that was never created stays uncreated.
        if let Some(button) = &self.button {
            let (opacity, transform) = state.style();
            dom::set_style(button, &[("opacity", opacity), ("transform", transform)]);
        }
        if state != before {
            diag.trace(|t| t.scroll_top_changed(&ScrollTopEvent { state, percent }));
        }
        Ok(())
    }

    fn create(
        &self,
        window: &Window,
        document: &Document,
        diag: &Diagnostics,
    ) -> Result<HtmlElement, JsValue> {
        let button = document
            .create_element("button")?
            .dyn_into::<HtmlElement>()?;
        button.set_id(self.config.id);
        button.set_inner_html(ARROW_SVG);
        button.set_attribute("aria-label", self.config.aria_label)?;
        button.style().set_css_text(BUTTON_CSS);

        let win = window.clone();
        guard::listen(&button, "click", diag, move |_: MouseEvent| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
            Ok(())
        })?;
        let el = button.clone();
        guard::listen(&button, "mouseenter", diag, move |_: MouseEvent| {
            dom::set_style(&el, &[("transform", "translateY(0) scale(1.1)")]);
            Ok(())
        })?;
        let el = button.clone();
        guard::listen(&button, "mouseleave", diag, move |_: MouseEvent| {
            dom::set_style(&el, &[("transform", "translateY(0) scale(1)")]);
            Ok(())
        })?;

        dom::body(document)?.append_child(&button)?;
        Ok(button)
    }
}
