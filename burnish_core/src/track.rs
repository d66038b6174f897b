// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-and-forget analytics events.
//!
//! A [`TrackEvent`] is a `{category, action, label}` triple. Where it goes is
//! up to the [`TrackSink`]; the enhancement layer never waits on it and never
//! learns whether delivery succeeded.

use alloc::string::String;
use alloc::vec::Vec;

/// One analytics event.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackEvent {
    /// Broad grouping, e.g. `"Page"` or `"Button"`.
    pub category: String,
    /// What happened, e.g. `"View"` or `"Click"`.
    pub action: String,
    /// Free-form detail, e.g. a path or button text.
    pub label: String,
}

impl TrackEvent {
    /// Creates an event from its three fields.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }

    /// A page view for `path`.
    #[must_use]
    pub fn page_view(path: &str) -> Self {
        Self::new("Page", "View", path)
    }

    /// A click on a button-like link whose visible text is `text`.
    ///
    /// Surrounding whitespace is trimmed from the label.
    #[must_use]
    pub fn button_click(text: &str) -> Self {
        Self::new("Button", "Click", text.trim())
    }
}

/// Receives analytics events.
pub trait TrackSink {
    /// Accepts one event. Must not block or fail.
    fn track(&mut self, event: &TrackEvent);
}

/// A [`TrackSink`] that keeps every event, for tests and offline capture.
#[derive(Clone, Debug, Default)]
pub struct MemoryTrackSink {
    events: Vec<TrackEvent>,
}

impl MemoryTrackSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<TrackEvent> {
        core::mem::take(&mut self.events)
    }
}

impl TrackSink for MemoryTrackSink {
    fn track(&mut self, event: &TrackEvent) {
        self.events.push(event.clone());
    }
}

/// A [`TrackSink`] that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTrackSink;

impl TrackSink for NoopTrackSink {
    fn track(&mut self, _event: &TrackEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let v = TrackEvent::page_view("/docs/intro.html");
        assert_eq!(v.category, "Page");
        assert_eq!(v.action, "View");
        assert_eq!(v.label, "/docs/intro.html");

        let c = TrackEvent::button_click("\n   Start process  ");
        assert_eq!(c, TrackEvent::new("Button", "Click", "Start process"));
    }

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemoryTrackSink::new();
        sink.track(&TrackEvent::page_view("/"));
        sink.track(&TrackEvent::button_click("Go"));
        assert_eq!(sink.events().len(), 2);
        let drained = sink.drain();
        assert_eq!(drained[0].category, "Page");
        assert_eq!(drained[1].label, "Go");
        assert!(sink.events().is_empty());
    }
}
