// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll position helpers: the scroll-to-top control and in-page anchors.

/// How far down the page the viewport is, in percent of the scrollable range.
///
/// Returns `0.0` when the document is not taller than the viewport.
#[must_use]
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range > 0.0 && scroll_y.is_finite() {
        scroll_y / range * 100.0
    } else {
        0.0
    }
}

/// Visibility of the floating scroll-to-top control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollTopState {
    /// Faded out and pushed below the fold (or not yet created).
    #[default]
    Hidden,
    /// Faded in.
    Shown,
}

impl ScrollTopState {
    /// `(opacity, transform)` for this state.
    #[must_use]
    pub const fn style(self) -> (&'static str, &'static str) {
        match self {
            Self::Hidden => ("0", "translateY(100px)"),
            Self::Shown => ("1", "translateY(0)"),
        }
    }
}

/// Decides when the scroll-to-top control is shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTopControl {
    show_after_percent: f64,
    state: ScrollTopState,
}

impl ScrollTopControl {
    /// Creates a hidden control that appears past `show_after_percent`.
    #[must_use]
    pub const fn new(show_after_percent: f64) -> Self {
        Self {
            show_after_percent,
            state: ScrollTopState::Hidden,
        }
    }

    /// Feeds the current scroll percentage. Returns the new state.
    pub fn update(&mut self, percent: f64) -> ScrollTopState {
        self.state = if percent > self.show_after_percent {
            ScrollTopState::Shown
        } else {
            ScrollTopState::Hidden
        };
        self.state
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ScrollTopState {
        self.state
    }
}

/// Returns the selector to scroll to for an in-page link, or `None` when the
/// link should be left alone (an empty fragment or not a fragment at all).
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_scrollable_range() {
        assert_eq!(scroll_percent(500.0, 3000.0, 1000.0), 25.0);
        assert_eq!(scroll_percent(0.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_page_is_zero_percent() {
        assert_eq!(scroll_percent(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_percent(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn control_threshold_is_exclusive() {
        let mut c = ScrollTopControl::new(20.0);
        assert_eq!(c.update(20.0), ScrollTopState::Hidden);
        assert_eq!(c.update(20.5), ScrollTopState::Shown);
        assert_eq!(c.update(3.0), ScrollTopState::Hidden);
        assert_eq!(c.state(), ScrollTopState::Hidden);
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#contact"), Some("#contact"));
        assert_eq!(anchor_target("/about"), None);
    }
}
