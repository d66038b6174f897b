// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser glue for burnish.
//!
//! This crate wires the state machines in [`burnish_core`] to the DOM:
//!
//! - [`install`]: attaches every enabled enhancement to the current document
//! - [`FrameTask`]: `requestAnimationFrame` pacing for scroll work
//! - [`DebouncedTask`]: `setTimeout` debouncing for resize work
//! - [`ViewportWatcher`]: `IntersectionObserver`-driven reveal and lazy images
//! - [`ConsoleSink`] / [`ConsoleTrackSink`]: console output for diagnostics
//!   and analytics
//!
//! Each feature installs independently. A feature whose installation fails is
//! reported through [`Diagnostics`] and skipped; the rest still install. Event
//! handlers are contained the same way: an error in one handler is logged and
//! the handler stays registered.

#![no_std]

extern crate alloc;

mod a11y;
mod cards;
mod console;
mod diag;
mod dom;
mod focus;
mod guard;
mod links;
mod nav;
mod observer;
mod raf;
mod scroll_top;
mod timer;
mod track;

pub use console::{ConsoleSink, ConsoleTrackSink};
pub use diag::{Diagnostics, Tracking};
pub use nav::NavBars;
pub use observer::ViewportWatcher;
pub use raf::FrameTask;
pub use scroll_top::ScrollTop;
pub use timer::{DebouncedTask, after};

use alloc::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Event, Window};

use burnish_core::config::EnhanceConfig;
use burnish_core::time::HostTime;
use burnish_core::trace::{Feature, InstallEvent, ResizeSettledEvent};

/// Returns the current host time from `performance.now()`, in microsecond
/// ticks.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}

/// Handles to the installed enhancements.
///
/// Event listeners stay registered for the life of the page whether or not
/// this value is kept. Dropping it disconnects the intersection observers and
/// cancels pending frame and resize work, so a page that wants the effects to
/// keep running should hold on to it (or `mem::forget` it).
#[derive(Debug, Default)]
pub struct Enhancements {
    reveal: Option<ViewportWatcher>,
    lazy_images: Option<ViewportWatcher>,
    scroll: Option<Rc<FrameTask>>,
    resize: Option<Rc<DebouncedTask>>,
}

impl Enhancements {
    /// The reveal-on-scroll watcher, if installed.
    #[must_use]
    pub fn reveal(&self) -> Option<&ViewportWatcher> {
        self.reveal.as_ref()
    }

    /// The lazy-image watcher, if installed.
    #[must_use]
    pub fn lazy_images(&self) -> Option<&ViewportWatcher> {
        self.lazy_images.as_ref()
    }

    /// The frame-paced scroll task, if anything consumes scroll samples.
    #[must_use]
    pub fn scroll_task(&self) -> Option<&FrameTask> {
        self.scroll.as_deref()
    }

    /// The debounced resize task, if installed.
    #[must_use]
    pub fn resize_task(&self) -> Option<&DebouncedTask> {
        self.resize.as_deref()
    }
}

/// Runs one installer, reporting success with its match count or the failure
/// as a fault.
fn run<T>(
    diag: &Diagnostics,
    feature: Feature,
    install: impl FnOnce() -> Result<T, JsValue>,
    matched: impl FnOnce(&T) -> usize,
) -> Option<T> {
    match install() {
        Ok(value) => {
            let matched = matched(&value);
            diag.trace(|t| t.install(&InstallEvent { feature, matched }));
            Some(value)
        }
        Err(err) => {
            diag.fault_js(feature.name(), &err);
            None
        }
    }
}

fn count(n: &usize) -> usize {
    *n
}

/// Attaches every enabled enhancement in `config` to the current document.
///
/// Fails only when there is no window or document to attach to. Individual
/// features that fail are reported through `diag` and skipped.
pub fn install(
    config: &EnhanceConfig,
    diag: Diagnostics,
    tracking: Tracking,
) -> Result<Enhancements, JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let diag = &diag;
    let mut out = Enhancements::default();

    run(
        diag,
        Feature::ErrorReporting,
        || guard::install_error_reporting(&window, diag).map(|()| 1),
        count,
    );

    let transitions = &config.transitions;
    if transitions.smooth_scroll {
        run(
            diag,
            Feature::SmoothScroll,
            || links::install_smooth_anchors(&window, &document, diag),
            count,
        );
    }
    if transitions.page_fades {
        run(
            diag,
            Feature::PageTransitions,
            || links::install_page_fades(&window, &document, transitions, diag),
            count,
        );
    }

    if config.cards.enabled {
        run(
            diag,
            Feature::Cards,
            || cards::install_cards(&window, &document, &config.cards, diag),
            count,
        );
    }
    if config.reveal.enabled {
        out.reveal = run(
            diag,
            Feature::Reveal,
            || observer::install_reveal(&document, &config.reveal, diag),
            ViewportWatcher::len,
        );
    }

    let nav_bars = if config.nav.enabled {
        run(
            diag,
            Feature::Navigation,
            || {
                nav::mark_active_links(&window, &document, &config.nav)?;
                NavBars::find(&document, &config.nav)
            },
            NavBars::len,
        )
    } else {
        None
    };

    if config.a11y.enabled {
        run(
            diag,
            Feature::Accessibility,
            || {
                let inserted = a11y::install_skip_link(&document, &config.a11y, diag)?;
                a11y::install_focus_style(&document, &config.a11y)?;
                focus::install_focus_trap(&document, &config.a11y, diag)?;
                Ok(usize::from(inserted))
            },
            count,
        );
    }

    if config.lazy_images.enabled {
        out.lazy_images = run(
            diag,
            Feature::LazyImages,
            || observer::install_lazy_images(&document, &config.lazy_images, diag),
            ViewportWatcher::len,
        );
    }

    let scroll_top = config
        .scroll_top
        .enabled
        .then(|| ScrollTop::new(&document, &config.scroll_top));
    if let Some((scroll, resize)) = run(
        diag,
        Feature::Pacing,
        || install_pacing(&window, &document, config, nav_bars, scroll_top, diag),
        |(scroll, _)| usize::from(scroll.is_some()) + 1,
    ) {
        out.scroll = scroll;
        out.resize = Some(resize);
    }

    if config.tracking.enabled {
        run(
            diag,
            Feature::Tracking,
            || {
                track::install_tracking(&window, &document, &config.tracking, &tracking, diag)
            },
            count,
        );
    }

    Ok(out)
}

/// Per-frame scroll work: sticky nav bars and the back-to-top button.
fn on_scroll_frame(
    window: &Window,
    document: &Document,
    nav_bars: Option<&mut NavBars>,
    scroll_top: Option<&mut ScrollTop>,
    diag: &Diagnostics,
) -> Result<(), JsValue> {
    let offset = window.scroll_y()?;
    if let Some(bars) = nav_bars {
        bars.on_scroll(offset, diag);
    }
    if let Some(top) = scroll_top {
        top.on_scroll(window, document, diag)?;
    }
    Ok(())
}

/// Installs the frame-paced scroll task (when something consumes it) and the
/// debounced resize task.
fn install_pacing(
    window: &Window,
    document: &Document,
    config: &EnhanceConfig,
    mut nav_bars: Option<NavBars>,
    mut scroll_top: Option<ScrollTop>,
    diag: &Diagnostics,
) -> Result<(Option<Rc<FrameTask>>, Rc<DebouncedTask>), JsValue> {
    let scroll = if nav_bars.as_ref().is_some_and(|b| !b.is_empty()) || scroll_top.is_some() {
        let win = window.clone();
        let doc = document.clone();
        let sink = diag.clone();
        let task = Rc::new(FrameTask::new(move |_| {
            if let Err(err) =
                on_scroll_frame(&win, &doc, nav_bars.as_mut(), scroll_top.as_mut(), &sink)
            {
                sink.fault_js("scroll", &err);
            }
        }));
        let scheduled = Rc::clone(&task);
        guard::listen_passive(window, "scroll", diag, move |_: Event| {
            scheduled.schedule();
            Ok(())
        })?;
        Some(task)
    } else {
        None
    };

    let win = window.clone();
    let sink = diag.clone();
    let resize = Rc::new(DebouncedTask::new(
        config.pacing.resize_debouncer(),
        move |at| {
            let width = win
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            sink.trace(|t| t.resize_settled(&ResizeSettledEvent { width, at }));
        },
    ));
    let triggered = Rc::clone(&resize);
    guard::listen(window, "resize", diag, move |_: Event| {
        triggered.trigger();
        Ok(())
    })?;

    Ok((scroll, resize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use burnish_core::trace::{HandlerFaultEvent, TraceSink};
    use core::cell::RefCell;

    #[derive(Default)]
    struct Log(Rc<RefCell<Vec<String>>>);

    impl TraceSink for Log {
        fn on_install(&mut self, e: &InstallEvent) {
            self.0
                .borrow_mut()
                .push(alloc::format!("install {} {}", e.feature.name(), e.matched));
        }

        fn on_handler_fault(&mut self, e: &HandlerFaultEvent<'_>) {
            self.0
                .borrow_mut()
                .push(alloc::format!("fault {} {}", e.handler, e.message));
        }
    }

    fn diagnostics() -> (Diagnostics, Rc<RefCell<Vec<String>>>) {
        let log = Log::default();
        let lines = Rc::clone(&log.0);
        (Diagnostics::new(log), lines)
    }

    #[cfg(feature = "trace")]
    #[test]
    fn run_reports_match_count() {
        let (diag, lines) = diagnostics();
        let value = run(&diag, Feature::Cards, || Ok(6_usize), count);
        assert_eq!(value, Some(6));
        assert_eq!(*lines.borrow(), ["install cards 6".to_string()]);
    }

    #[test]
    fn faults_reach_the_sink() {
        let (diag, lines) = diagnostics();
        diag.fault("keydown", "boom");
        diag.fault("scroll", "again");
        assert_eq!(
            *lines.borrow(),
            ["fault keydown boom".to_string(), "fault scroll again".to_string()]
        );
    }

    #[test]
    fn faults_bypass_the_trace_gate() {
        let (diag, lines) = diagnostics();
        // `run` emits the install event only with `trace`; the fault always lands.
        run(&diag, Feature::Cards, || Ok(0_usize), count);
        diag.fault("window", "Script error.");
        assert_eq!(
            lines.borrow().last().map(String::as_str),
            Some("fault window Script error."),
            "fault must be logged"
        );
    }

    #[cfg(feature = "trace")]
    #[test]
    fn busy_sink_drops_nested_events() {
        let (diag, lines) = diagnostics();
        let nested = diag.clone();
        diag.trace(|t| {
            nested.fault("inner", "dropped");
            t.install(&InstallEvent {
                feature: Feature::Reveal,
                matched: 2,
            });
        });
        assert_eq!(*lines.borrow(), ["install reveal 2".to_string()]);
    }
}
