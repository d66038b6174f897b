// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the enhancement layer.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! event handlers call as they act. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::nav::NavVisibility;
use crate::scroll::ScrollTopState;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// An independently installed enhancement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Smooth scrolling for in-page anchors.
    SmoothScroll,
    /// Load fade-in and navigation dimming.
    PageTransitions,
    /// Card hover transition and tilt.
    Cards,
    /// Reveal-on-scroll for cards.
    Reveal,
    /// Active link highlighting and sticky navigation.
    Navigation,
    /// Focus trap, skip link, focus outline.
    Accessibility,
    /// Deferred image loading.
    LazyImages,
    /// Frame-paced scroll work and debounced resize work.
    Pacing,
    /// Page-view and click tracking.
    Tracking,
    /// Window-level error reporting.
    ErrorReporting,
}

impl Feature {
    /// Short lowercase name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SmoothScroll => "smooth-scroll",
            Self::PageTransitions => "page-transitions",
            Self::Cards => "cards",
            Self::Reveal => "reveal",
            Self::Navigation => "navigation",
            Self::Accessibility => "accessibility",
            Self::LazyImages => "lazy-images",
            Self::Pacing => "pacing",
            Self::Tracking => "tracking",
            Self::ErrorReporting => "error-reporting",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per feature after installation.
#[derive(Clone, Copy, Debug)]
pub struct InstallEvent {
    /// Which feature.
    pub feature: Feature,
    /// How many elements its selectors matched.
    pub matched: usize,
}

/// Emitted when a watched element fires.
#[derive(Clone, Copy, Debug)]
pub struct WatchFiredEvent {
    /// `"reveal"` or `"lazy-image"`.
    pub kind: &'static str,
    /// Slot index within its engine.
    pub index: u32,
    /// When the intersection callback ran.
    pub at: HostTime,
}

/// Emitted when a navigation bar changes visibility.
#[derive(Clone, Copy, Debug)]
pub struct NavChangedEvent {
    /// Index of the bar among all matched bars.
    pub bar: usize,
    /// New state.
    pub visibility: NavVisibility,
    /// Scroll offset that caused it.
    pub offset: f64,
}

/// Emitted when Tab wraps inside a dialog.
#[derive(Clone, Copy, Debug)]
pub struct FocusWrappedEvent {
    /// Index focus moved to.
    pub to: usize,
    /// Number of focusables in the dialog.
    pub of: usize,
    /// Shift was held.
    pub backwards: bool,
}

/// Emitted when Escape hides a dialog.
#[derive(Clone, Copy, Debug)]
pub struct ModalDismissedEvent {
    /// Whether focus was moved back to a trigger element.
    pub restored_focus: bool,
}

/// Emitted when the scroll-to-top control changes state.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTopEvent {
    /// New state.
    pub state: ScrollTopState,
    /// Scroll percentage that caused it.
    pub percent: f64,
}

/// Emitted after a resize burst settles.
#[derive(Clone, Copy, Debug)]
pub struct ResizeSettledEvent {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// When the debounced handler ran.
    pub at: HostTime,
}

/// Emitted when a handler or installer fails. The failure is contained.
#[derive(Clone, Copy, Debug)]
pub struct HandlerFaultEvent<'a> {
    /// Which handler failed, e.g. `"keydown"`.
    pub handler: &'static str,
    /// Best-effort description of the fault.
    pub message: &'a str,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the enhancement layer.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a feature is installed.
    fn on_install(&mut self, e: &InstallEvent) {
        _ = e;
    }

    /// Called when a watched element fires.
    fn on_watch_fired(&mut self, e: &WatchFiredEvent) {
        _ = e;
    }

    /// Called when a navigation bar is shown or hidden.
    fn on_nav_changed(&mut self, e: &NavChangedEvent) {
        _ = e;
    }

    /// Called when Tab wraps inside a dialog.
    fn on_focus_wrapped(&mut self, e: &FocusWrappedEvent) {
        _ = e;
    }

    /// Called when Escape dismisses a dialog.
    fn on_modal_dismissed(&mut self, e: &ModalDismissedEvent) {
        _ = e;
    }

    /// Called when the scroll-to-top control is shown or hidden.
    fn on_scroll_top_changed(&mut self, e: &ScrollTopEvent) {
        _ = e;
    }

    /// Called when a resize burst settles.
    fn on_resize_settled(&mut self, e: &ResizeSettledEvent) {
        _ = e;
    }

    /// Called when a handler or installer fails.
    fn on_handler_fault(&mut self, e: &HandlerFaultEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Generates a `Tracer` method that forwards to one `TraceSink` method.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident => $sink_method:ident($ty:ty)) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$ty) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$sink_method(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits an [`InstallEvent`].
        install => on_install(InstallEvent)
    );
    forward!(
        /// Emits a [`WatchFiredEvent`].
        watch_fired => on_watch_fired(WatchFiredEvent)
    );
    forward!(
        /// Emits a [`NavChangedEvent`].
        nav_changed => on_nav_changed(NavChangedEvent)
    );
    forward!(
        /// Emits a [`FocusWrappedEvent`].
        focus_wrapped => on_focus_wrapped(FocusWrappedEvent)
    );
    forward!(
        /// Emits a [`ModalDismissedEvent`].
        modal_dismissed => on_modal_dismissed(ModalDismissedEvent)
    );
    forward!(
        /// Emits a [`ScrollTopEvent`].
        scroll_top_changed => on_scroll_top_changed(ScrollTopEvent)
    );
    forward!(
        /// Emits a [`ResizeSettledEvent`].
        resize_settled => on_resize_settled(ResizeSettledEvent)
    );
    forward!(
        /// Emits a [`HandlerFaultEvent`].
        handler_fault => on_handler_fault(HandlerFaultEvent<'_>)
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fired() -> WatchFiredEvent {
        WatchFiredEvent {
            kind: "reveal",
            index: 3,
            at: HostTime(1_000_000),
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_watch_fired(&sample_fired());
        sink.on_handler_fault(&HandlerFaultEvent {
            handler: "scroll",
            message: "boom",
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.watch_fired(&sample_fired());
        tracer.install(&InstallEvent {
            feature: Feature::Cards,
            matched: 0,
        });
    }

    #[test]
    fn feature_names_are_distinct() {
        use alloc::vec::Vec;
        let all = [
            Feature::SmoothScroll,
            Feature::PageTransitions,
            Feature::Cards,
            Feature::Reveal,
            Feature::Navigation,
            Feature::Accessibility,
            Feature::LazyImages,
            Feature::Pacing,
            Feature::Tracking,
            Feature::ErrorReporting,
        ];
        let mut names: Vec<_> = all.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::string::{String, ToString as _};
        use alloc::vec::Vec;

        struct RecordingSink {
            fired: Vec<u32>,
            faults: Vec<String>,
        }
        impl TraceSink for RecordingSink {
            fn on_watch_fired(&mut self, e: &WatchFiredEvent) {
                self.fired.push(e.index);
            }
            fn on_handler_fault(&mut self, e: &HandlerFaultEvent<'_>) {
                self.faults.push(e.message.to_string());
            }
        }

        let mut sink = RecordingSink {
            fired: Vec::new(),
            faults: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.watch_fired(&sample_fired());
        tracer.handler_fault(&HandlerFaultEvent {
            handler: "keydown",
            message: "no document",
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.fired, &[3]);
        assert_eq!(sink.faults, ["no document"]);
    }
}
