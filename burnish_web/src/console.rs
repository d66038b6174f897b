// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console sinks.
//!
//! [`ConsoleSink`] writes trace events with `console.log` (faults with
//! `console.error`). [`ConsoleTrackSink`] logs analytics events, standing in
//! for a real collector.

use alloc::format;

use burnish_core::trace::{
    FocusWrappedEvent, HandlerFaultEvent, InstallEvent, ModalDismissedEvent, NavChangedEvent,
    ResizeSettledEvent, ScrollTopEvent, TraceSink, WatchFiredEvent,
};
use burnish_core::track::{TrackEvent, TrackSink};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes trace events to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log per-frame events (nav changes, reveals). Off by default.
    pub verbose: bool,
}

impl ConsoleSink {
    /// A sink that logs installs, resizes and faults only.
    #[must_use]
    pub const fn quiet() -> Self {
        Self { verbose: false }
    }

    /// A sink that logs everything.
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }

    fn log(line: &str) {
        console::log_1(&JsValue::from_str(line));
    }
}

impl TraceSink for ConsoleSink {
    fn on_install(&mut self, e: &InstallEvent) {
        Self::log(&format!(
            "[install] {} matched={}",
            e.feature.name(),
            e.matched
        ));
    }

    fn on_watch_fired(&mut self, e: &WatchFiredEvent) {
        if self.verbose {
            Self::log(&format!(
                "[watch] {} #{} at={:.1}ms",
                e.kind,
                e.index,
                e.at.micros() as f64 / 1000.0
            ));
        }
    }

    fn on_nav_changed(&mut self, e: &NavChangedEvent) {
        if self.verbose {
            Self::log(&format!(
                "[nav] bar={} {:?} offset={}",
                e.bar, e.visibility, e.offset
            ));
        }
    }

    fn on_focus_wrapped(&mut self, e: &FocusWrappedEvent) {
        if self.verbose {
            Self::log(&format!(
                "[focus] wrap to {}/{} backwards={}",
                e.to, e.of, e.backwards
            ));
        }
    }

    fn on_modal_dismissed(&mut self, e: &ModalDismissedEvent) {
        if self.verbose {
            Self::log(&format!("[focus] dismissed restored={}", e.restored_focus));
        }
    }

    fn on_scroll_top_changed(&mut self, e: &ScrollTopEvent) {
        if self.verbose {
            Self::log(&format!(
                "[scroll-top] {:?} at {:.0}%",
                e.state, e.percent
            ));
        }
    }

    fn on_resize_settled(&mut self, e: &ResizeSettledEvent) {
        Self::log(&format!("[resize] width={}", e.width));
    }

    fn on_handler_fault(&mut self, e: &HandlerFaultEvent<'_>) {
        console::error_1(&JsValue::from_str(&format!(
            "[fault] {}: {}",
            e.handler, e.message
        )));
    }
}

/// Logs analytics events to the console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTrackSink;

impl TrackSink for ConsoleTrackSink {
    fn track(&mut self, event: &TrackEvent) {
        console::log_1(&JsValue::from_str(&format!(
            "[track] category={} action={} label={}",
            event.category, event.action, event.label
        )));
    }
}
