// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machines and configuration for browser presentation enhancements.
//!
//! `burnish_core` holds everything about the enhancement layer that can be
//! decided without a browser. It is `no_std` compatible (with `alloc`): each
//! behavior is a small state object with a pure transition function, so it can
//! be tested by feeding synthetic events.
//!
//! # Architecture
//!
//! The web crate turns DOM events into calls on these state objects and turns
//! their answers back into DOM mutations:
//!
//! ```text
//!   IntersectionObserver ──► RevealEngine::observe() ──► Firing ──► style / src swap
//!
//!   keydown ──► KeyCommand ──► focus::transition() ──► TrapAction ──► focus / hide
//!
//!   scroll ──► FrameGate ──► (next frame) ──► StickyNav::on_scroll()
//!                                        └──► ScrollTopControl::update()
//!
//!   resize ──► Debouncer ──► (quiet period) ──► resize handler
//! ```
//!
//! **[`reveal`]**: One-shot viewport triggers: reveal animations and lazy
//! image source swaps. Each watched element fires at most once.
//!
//! **[`focus`]**: Tab cycling and Escape handling inside an open dialog.
//!
//! **[`nav`]**: Scroll-direction driven navigation bar visibility.
//!
//! **[`pacing`]**: Frame gate and debouncer, both "latest request wins".
//!
//! **[`motion`]**: Pointer tilt for cards and the reduced-motion gate.
//!
//! **[`scroll`]**: Scroll-to-top control and in-page anchor targets.
//!
//! **[`links`]**: Page-transition and active-link classification.
//!
//! **[`track`]**: Analytics events and the [`TrackSink`](track::TrackSink)
//! trait.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! diagnostics, with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`config`]**: [`EnhanceConfig`](config::EnhanceConfig) with the site
//! preset.
//!
//! **[`time`]**: Microsecond host time for pacing.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod focus;
pub mod links;
pub mod motion;
pub mod nav;
pub mod pacing;
pub mod reveal;
pub mod scroll;
pub mod time;
pub mod trace;
pub mod track;

#[cfg(test)]
mod tests {
    use crate::config::EnhanceConfig;
    use crate::motion::{MotionPreference, tilt_transform};
    use crate::reveal::{IntersectionSample, RevealEngine, WatchKind};
    use kurbo::{Point, Rect};

    #[test]
    fn reduced_motion_still_reveals() {
        let cfg = EnhanceConfig::site();
        let preference = MotionPreference::Reduce;

        let card = Rect::new(0.0, 0.0, 200.0, 100.0);
        let tilt = tilt_transform(preference, Point::new(10.0, 10.0), card, &cfg.cards.tilt);
        assert_eq!(tilt, None, "pointer movement must not touch the transform");

        let mut engine = RevealEngine::new(cfg.reveal.observer);
        let id = engine.watch(WatchKind::Reveal);
        let fired = engine.observe(
            id,
            IntersectionSample {
                is_intersecting: true,
                ratio: 0.4,
            },
        );
        assert_eq!(fired.map(|f| f.kind), Some(WatchKind::Reveal));
        assert_eq!(cfg.reveal.revealed_style().0, "1");
    }
}
