// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines export for tracked events.
//!
//! [`JsonLinesSink`] writes each [`TrackEvent`] as a single-line JSON object
//! with `category`, `action` and `label` keys.

use std::io::Write;

use serde_json::json;

use burnish_core::track::{TrackEvent, TrackSink};

/// Writes tracked events as JSON lines.
///
/// Tracking is fire-and-forget: write errors are counted, never returned.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    failed: usize,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, failed: 0 }
    }

    /// Number of events that could not be written.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TrackSink for JsonLinesSink<W> {
    fn track(&mut self, event: &TrackEvent) {
        let line = json!({
            "category": event.category,
            "action": event.action,
            "label": event.label,
        });
        if serde_json::to_writer(&mut self.writer, &line).is_err()
            || self.writer.write_all(b"\n").is_err()
        {
            self.failed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn one_object_per_line() {
        let mut sink = JsonLinesSink::new(Vec::<u8>::new());
        sink.track(&TrackEvent::page_view("/guia/index.html"));
        sink.track(&TrackEvent::button_click("  Ver proceso \n"));

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["category"], "Page");
        assert_eq!(lines[0]["action"], "View");
        assert_eq!(lines[0]["label"], "/guia/index.html");
        assert_eq!(lines[1]["category"], "Button");
        assert_eq!(lines[1]["label"], "Ver proceso");
    }

    #[test]
    fn labels_are_escaped() {
        let mut sink = JsonLinesSink::new(Vec::<u8>::new());
        sink.track(&TrackEvent::new("Form", "Submit", "say \"hi\""));
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 1);
        let v: Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(v["label"], "say \"hi\"");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_counted() {
        let mut sink = JsonLinesSink::new(Broken);
        sink.track(&TrackEvent::page_view("/"));
        sink.track(&TrackEvent::page_view("/a"));
        assert_eq!(sink.failed(), 2);
    }
}
