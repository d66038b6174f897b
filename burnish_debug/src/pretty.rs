// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in milliseconds.

use std::io::Write;

use burnish_core::time::HostTime;
use burnish_core::trace::{
    FocusWrappedEvent, HandlerFaultEvent, InstallEvent, ModalDismissedEvent, NavChangedEvent,
    ResizeSettledEvent, ScrollTopEvent, TraceSink, WatchFiredEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.micros() as f64 / 1000.0
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_install(&mut self, e: &InstallEvent) {
        let _ = writeln!(
            self.writer,
            "[install] {} matched={}",
            e.feature.name(),
            e.matched,
        );
    }

    fn on_watch_fired(&mut self, e: &WatchFiredEvent) {
        let _ = writeln!(
            self.writer,
            "[watch] {} #{} at {:.1}ms",
            e.kind,
            e.index,
            ms(e.at),
        );
    }

    fn on_nav_changed(&mut self, e: &NavChangedEvent) {
        let _ = writeln!(
            self.writer,
            "[nav] bar={} {:?} offset={}",
            e.bar, e.visibility, e.offset,
        );
    }

    fn on_focus_wrapped(&mut self, e: &FocusWrappedEvent) {
        let dir = if e.backwards { "back" } else { "forward" };
        let _ = writeln!(self.writer, "[focus] wrap {dir} to {}/{}", e.to, e.of);
    }

    fn on_modal_dismissed(&mut self, e: &ModalDismissedEvent) {
        let _ = writeln!(
            self.writer,
            "[focus] dismissed restored={}",
            e.restored_focus,
        );
    }

    fn on_scroll_top_changed(&mut self, e: &ScrollTopEvent) {
        let _ = writeln!(
            self.writer,
            "[scroll-top] {:?} at {:.1}%",
            e.state, e.percent,
        );
    }

    fn on_resize_settled(&mut self, e: &ResizeSettledEvent) {
        let _ = writeln!(
            self.writer,
            "[resize] width={} at {:.1}ms",
            e.width,
            ms(e.at),
        );
    }

    fn on_handler_fault(&mut self, e: &HandlerFaultEvent<'_>) {
        let _ = writeln!(self.writer, "[fault] {}: {}", e.handler, e.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burnish_core::nav::NavVisibility;
    use burnish_core::trace::{Feature, Tracer};

    #[test]
    fn pretty_print_install() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_install(&InstallEvent {
            feature: Feature::LazyImages,
            matched: 3,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[install] lazy-images matched=3\n");
    }

    #[test]
    fn pretty_print_through_tracer() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.nav_changed(&NavChangedEvent {
                bar: 0,
                visibility: NavVisibility::Hidden,
                offset: 150.0,
            });
            tracer.resize_settled(&ResizeSettledEvent {
                width: 1024.0,
                at: HostTime(1_340_000),
            });
        }
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[nav] bar=0 Hidden offset=150"), "got: {output}");
        assert!(
            output.contains("[resize] width=1024 at 1340.0ms"),
            "got: {output}"
        );
    }

    #[test]
    fn fault_line_names_handler() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_handler_fault(&HandlerFaultEvent {
            handler: "keydown",
            message: "focus() failed",
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[fault] keydown: focus() failed\n");
    }
}
