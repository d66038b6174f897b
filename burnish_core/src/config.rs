// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for every enhancement, with a site preset.
//!
//! [`EnhanceConfig::site`] returns the values the enhancement layer was tuned
//! with. Each feature has its own sub-config and an `enabled` flag so that a
//! page can opt out of individual behaviors.

use alloc::format;
use alloc::string::String;

use crate::motion::TiltConfig;
use crate::nav::StickyNav;
use crate::pacing::Debouncer;
use crate::reveal::{ObserverConfig, RootMargin};
use crate::scroll::ScrollTopControl;
use crate::time::Duration;

/// Reveal-on-scroll for cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Whether the feature is installed.
    pub enabled: bool,
    /// Elements staged hidden and revealed on first sight.
    pub selector: &'static str,
    /// Observer options.
    pub observer: ObserverConfig,
    /// Downward offset of the staged state, in pixels.
    pub offset_px: f64,
    /// Length of the opacity/transform transition, in seconds.
    pub transition_s: f64,
}

impl RevealConfig {
    /// `(opacity, transform)` while waiting to be revealed.
    #[must_use]
    pub fn staged_style(&self) -> (&'static str, String) {
        ("0", format!("translateY({}px)", self.offset_px))
    }

    /// `(opacity, transform)` once revealed.
    #[must_use]
    pub const fn revealed_style(&self) -> (&'static str, &'static str) {
        ("1", "translateY(0)")
    }

    /// The transition declared on staged elements.
    #[must_use]
    pub fn transition(&self) -> String {
        format!("opacity {0}s ease, transform {0}s ease", self.transition_s)
    }
}

/// Deferred image loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LazyImageConfig {
    /// Whether the feature is installed.
    pub enabled: bool,
    /// Attribute holding the deferred source.
    pub source_attribute: &'static str,
    /// Observer options.
    pub observer: ObserverConfig,
}

impl LazyImageConfig {
    /// Selector for images that still carry a deferred source.
    #[must_use]
    pub fn selector(&self) -> String {
        format!("img[{}]", self.source_attribute)
    }
}

/// Card hover transition and pointer tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardConfig {
    /// Whether the feature is installed.
    pub enabled: bool,
    /// Elements that get hover effects.
    pub selector: &'static str,
    /// Transition set on pointer enter.
    pub hover_transition: &'static str,
    /// Tilt parameters.
    pub tilt: TiltConfig,
}

/// Active link highlighting and sticky navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    /// Whether the feature is installed.
    pub enabled: bool,
    /// Navigation bars that hide on downward scroll.
    pub bar_selector: &'static str,
    /// Links highlighted when they point at the current page.
    pub link_selector: &'static str,
    /// Downward scroll offset, in pixels, past which bars hide.
    pub hide_after_px: f64,
    /// Font weight for the active link.
    pub active_font_weight: &'static str,
    /// Text color for the active link.
    pub active_color: &'static str,
}

impl NavConfig {
    /// Fresh per-bar state.
    #[must_use]
    pub const fn sticky(&self) -> StickyNav {
        StickyNav::new(self.hide_after_px)
    }
}

/// Frame pacing and resize debouncing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PacingConfig {
    /// Quiet period after the last resize event.
    pub resize_quiet: Duration,
}

impl PacingConfig {
    /// Fresh resize debouncer.
    #[must_use]
    pub const fn resize_debouncer(&self) -> Debouncer {
        Debouncer::new(self.resize_quiet)
    }
}

/// The floating scroll-to-top control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTopConfig {
    /// Whether the feature is installed.
    pub enabled: bool,
    /// Element id of the control.
    pub id: &'static str,
    /// Scroll percentage past which the control shows.
    pub show_after_percent: f64,
    /// Accessible name.
    pub aria_label: &'static str,
}

impl ScrollTopConfig {
    /// Fresh control state.
    #[must_use]
    pub const fn control(&self) -> ScrollTopControl {
        ScrollTopControl::new(self.show_after_percent)
    }
}

/// Smooth in-page scrolling and page fades.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Whether anchor links scroll smoothly.
    pub smooth_scroll: bool,
    /// Whether the page fades in on load and dims on navigation.
    pub page_fades: bool,
    /// Delay before the fade-in starts, in milliseconds.
    pub fade_in_delay: Duration,
    /// Body opacity while navigating away.
    pub leaving_opacity: &'static str,
}

/// Focus trap, skip link and focus outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct A11yConfig {
    /// Whether the feature is installed.
    pub enabled: bool,
    /// Containers that trap focus while visible.
    pub dialog_selector: &'static str,
    /// Attribute on a dialog holding a selector for its trigger.
    pub trigger_attribute: &'static str,
    /// Class of the skip link (also used to detect an existing one).
    pub skip_link_class: &'static str,
    /// Where the skip link jumps to.
    pub skip_link_target: &'static str,
    /// Visible text of the skip link.
    pub skip_link_text: &'static str,
    /// Stylesheet injected to make focus visible.
    pub focus_style: &'static str,
}

/// Analytics hooks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingConfig {
    /// Whether page views and clicks are tracked.
    pub enabled: bool,
    /// Button-like links whose clicks are tracked.
    pub button_selector: &'static str,
}

/// Every knob of the enhancement layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnhanceConfig {
    /// Reveal-on-scroll.
    pub reveal: RevealConfig,
    /// Lazy images.
    pub lazy_images: LazyImageConfig,
    /// Cards.
    pub cards: CardConfig,
    /// Navigation.
    pub nav: NavConfig,
    /// Pacing.
    pub pacing: PacingConfig,
    /// Scroll-to-top control.
    pub scroll_top: ScrollTopConfig,
    /// Smooth scroll and page fades.
    pub transitions: TransitionConfig,
    /// Accessibility.
    pub a11y: A11yConfig,
    /// Tracking.
    pub tracking: TrackingConfig,
}

impl EnhanceConfig {
    /// The preset for the documentation site this layer was built for.
    #[must_use]
    pub const fn site() -> Self {
        Self {
            reveal: RevealConfig {
                enabled: true,
                selector: ".Card_principal, .columna_tema",
                observer: ObserverConfig {
                    threshold: 0.1,
                    root_margin: RootMargin::px(0.0, 0.0, -50.0, 0.0),
                },
                offset_px: 30.0,
                transition_s: 0.6,
            },
            lazy_images: LazyImageConfig {
                enabled: true,
                source_attribute: "data-src",
                observer: ObserverConfig::EAGER,
            },
            cards: CardConfig {
                enabled: true,
                selector: ".Card_principal, .Card_principal1, .columna, .columna_indice, \
                           .columna_tema, .boxshadow",
                hover_transition: "all 0.25s cubic-bezier(0.4, 0, 0.2, 1)",
                tilt: TiltConfig::SUBTLE,
            },
            nav: NavConfig {
                enabled: true,
                bar_selector: "nav",
                link_selector: "nav a, .enlace_volver",
                hide_after_px: 100.0,
                active_font_weight: "700",
                active_color: "var(--accent-blue)",
            },
            pacing: PacingConfig {
                resize_quiet: Duration::from_millis(250),
            },
            scroll_top: ScrollTopConfig {
                enabled: true,
                id: "scroll-to-top",
                show_after_percent: 20.0,
                aria_label: "Back to top",
            },
            transitions: TransitionConfig {
                smooth_scroll: true,
                page_fades: true,
                fade_in_delay: Duration::from_millis(50),
                leaving_opacity: "0.7",
            },
            a11y: A11yConfig {
                enabled: true,
                dialog_selector: "[role=\"dialog\"]",
                trigger_attribute: "data-trigger",
                skip_link_class: "skip-to-main",
                skip_link_target: "#main",
                skip_link_text: "Skip to main content",
                focus_style: ":focus-visible { outline: 3px solid var(--accent-blue); \
                              outline-offset: 2px; border-radius: 4px; }",
            },
            tracking: TrackingConfig {
                enabled: true,
                button_selector: ".enlace, .enlace_proceso, .enlace_contraste",
            },
        }
    }
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self::site()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_preset_values() {
        let cfg = EnhanceConfig::site();
        assert_eq!(cfg.reveal.observer.threshold, 0.1);
        assert_eq!(
            format!("{}", cfg.reveal.observer.root_margin),
            "0px 0px -50px 0px"
        );
        assert_eq!(cfg.nav.hide_after_px, 100.0);
        assert_eq!(cfg.pacing.resize_quiet, Duration::from_millis(250));
        assert_eq!(cfg.scroll_top.show_after_percent, 20.0);
        assert_eq!(cfg.lazy_images.selector(), "img[data-src]");
    }

    #[test]
    fn reveal_styles() {
        let reveal = EnhanceConfig::site().reveal;
        assert_eq!(reveal.staged_style(), ("0", String::from("translateY(30px)")));
        assert_eq!(reveal.revealed_style(), ("1", "translateY(0)"));
        assert_eq!(reveal.transition(), "opacity 0.6s ease, transform 0.6s ease");
    }

    #[test]
    fn factories_start_fresh() {
        let cfg = EnhanceConfig::default();
        assert_eq!(cfg.nav.sticky().last_offset(), 0.0);
        assert!(!cfg.pacing.resize_debouncer().is_pending());
        assert_eq!(
            cfg.scroll_top.control().state(),
            crate::scroll::ScrollTopState::Hidden
        );
    }
}
