// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-direction driven navigation bar visibility.

/// Whether the navigation bar is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NavVisibility {
    /// Slid into view.
    #[default]
    Visible,
    /// Slid off the top of the viewport.
    Hidden,
}

impl NavVisibility {
    /// The CSS `transform` that realizes this state.
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Visible => "translateY(0)",
            Self::Hidden => "translateY(-100%)",
        }
    }
}

/// Pure transition: hide when scrolling down past `hide_after`, show
/// otherwise.
#[must_use]
pub fn next_visibility(previous: f64, current: f64, hide_after: f64) -> NavVisibility {
    if current > previous && current > hide_after {
        NavVisibility::Hidden
    } else {
        NavVisibility::Visible
    }
}

/// Per-bar scroll state. One instance per navigation element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyNav {
    hide_after: f64,
    last_offset: f64,
    visibility: NavVisibility,
}

impl StickyNav {
    /// Creates a visible bar whose previous sample is the top of the page.
    #[must_use]
    pub const fn new(hide_after: f64) -> Self {
        Self {
            hide_after,
            last_offset: 0.0,
            visibility: NavVisibility::Visible,
        }
    }

    /// Feeds the current vertical scroll offset and returns the new state.
    ///
    /// The sample always becomes the new previous offset.
    pub fn on_scroll(&mut self, offset: f64) -> NavVisibility {
        self.visibility = next_visibility(self.last_offset, offset, self.hide_after);
        self.last_offset = offset;
        self.visibility
    }

    /// Current state.
    #[must_use]
    pub const fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    /// Last sampled offset.
    #[must_use]
    pub const fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    use NavVisibility::{Hidden, Visible};

    #[test]
    fn offset_sequence() {
        let mut nav = StickyNav::new(100.0);
        let seen: Vec<_> = [0.0, 50.0, 150.0, 140.0]
            .into_iter()
            .map(|y| nav.on_scroll(y))
            .collect();
        assert_eq!(seen, [Visible, Visible, Hidden, Visible]);
    }

    #[test]
    fn downward_scroll_within_threshold_stays_visible() {
        let mut nav = StickyNav::new(100.0);
        assert_eq!(nav.on_scroll(60.0), Visible);
        assert_eq!(nav.on_scroll(100.0), Visible, "threshold is exclusive");
        assert_eq!(nav.on_scroll(101.0), Hidden);
    }

    #[test]
    fn equal_offset_counts_as_not_descending() {
        let mut nav = StickyNav::new(100.0);
        nav.on_scroll(500.0);
        assert_eq!(nav.visibility(), Hidden);
        assert_eq!(nav.on_scroll(500.0), Visible);
    }

    #[test]
    fn previous_sample_updates_every_event() {
        let mut nav = StickyNav::new(100.0);
        nav.on_scroll(800.0);
        nav.on_scroll(300.0);
        assert_eq!(nav.last_offset(), 300.0);
        assert_eq!(nav.on_scroll(310.0), Hidden, "compared against 300, not 800");
    }

    #[test]
    fn bars_do_not_share_state() {
        let mut top = StickyNav::new(100.0);
        let mut side = StickyNav::new(100.0);
        top.on_scroll(400.0);
        assert_eq!(top.visibility(), Hidden);
        assert_eq!(side.visibility(), Visible);
        assert_eq!(side.on_scroll(50.0), Visible);
    }

    #[test]
    fn transforms() {
        assert_eq!(Hidden.transform(), "translateY(-100%)");
        assert_eq!(Visible.transform(), "translateY(0)");
    }
}
