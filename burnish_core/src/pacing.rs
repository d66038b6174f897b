// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rate limiting for high-frequency browser events.
//!
//! Both gates follow "latest request wins": each new event hands out a fresh
//! token and silently supersedes any earlier one. When the host's timer or
//! animation-frame callback comes back with a token, the gate says whether that
//! callback is still the one that should run.
//!
//! - [`FrameGate`] collapses bursts of scroll events into one computation per
//!   rendered frame.
//! - [`Debouncer`] collapses bursts of resize events into one computation after
//!   a quiet period.

use crate::time::{Duration, HostTime};

/// Identifies one request made to a [`FrameGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// Admits at most one pending frame callback at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    generation: u64,
    pending: Option<u64>,
}

impl FrameGate {
    /// Creates an idle gate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Records a new event. Returns the token for the callback to schedule,
    /// and the token it supersedes (whose callback should be cancelled).
    pub fn request(&mut self) -> (FrameToken, Option<FrameToken>) {
        self.generation = self.generation.wrapping_add(1);
        let superseded = self.pending.replace(self.generation).map(FrameToken);
        (FrameToken(self.generation), superseded)
    }

    /// Called from the frame callback. Returns `true` exactly once, for the
    /// latest token.
    pub fn fire(&mut self, token: FrameToken) -> bool {
        if self.pending == Some(token.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drops any pending request.
    pub fn cancel(&mut self) -> Option<FrameToken> {
        self.pending.take().map(FrameToken)
    }

    /// Returns `true` while a request is waiting for its frame.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Identifies one trigger of a [`Debouncer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DebounceToken {
    generation: u64,
    deadline: HostTime,
}

impl DebounceToken {
    /// When the callback for this trigger is due.
    #[must_use]
    pub const fn deadline(&self) -> HostTime {
        self.deadline
    }
}

/// Runs once after events stop arriving for a quiet period.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    quiet: Duration,
    generation: u64,
    pending: Option<DebounceToken>,
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiet period.
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: 0,
            pending: None,
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub const fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Records an event at `now`, pushing the deadline out. Returns the new
    /// token; any earlier token is superseded.
    pub fn trigger(&mut self, now: HostTime) -> DebounceToken {
        self.generation = self.generation.wrapping_add(1);
        let token = DebounceToken {
            generation: self.generation,
            deadline: now + self.quiet,
        };
        self.pending = Some(token);
        token
    }

    /// Called from a timer that was armed for `token`'s deadline. Returns
    /// `true` only for the latest, still-pending token.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// For hosts without timers: returns `true` once when `now` has reached the
    /// pending deadline.
    pub fn poll(&mut self, now: HostTime) -> bool {
        match self.pending {
            Some(token) if now >= token.deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while a trigger is waiting out its quiet period.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const QUIET: Duration = Duration::from_millis(250);

    #[test]
    fn resize_burst_runs_once_after_settling() {
        let mut d = Debouncer::new(QUIET);
        // Ten resize events, 10ms apart, starting at t=1s.
        let tokens: Vec<_> = (0..10_u64)
            .map(|i| d.trigger(HostTime::from_millis_f64(1000.0 + 10.0 * i as f64)))
            .collect();

        // Each armed timer comes back in deadline order; only the last runs.
        let runs = tokens.iter().filter(|&&t| d.fire(t)).count();
        assert_eq!(runs, 1, "burst collapses to one execution");

        let last = tokens[9];
        assert_eq!(last.deadline(), HostTime(1_340_000), "90ms + 250ms quiet");
        assert!(!d.fire(last), "a token fires only once");
    }

    #[test]
    fn poll_waits_for_quiet_period() {
        let mut d = Debouncer::new(QUIET);
        for ms in [0_u64, 20, 40, 60, 80, 100] {
            d.trigger(HostTime(ms * 1000));
            assert!(!d.poll(HostTime(ms * 1000 + 1)));
        }
        assert!(!d.poll(HostTime(349_999)), "still inside the quiet period");
        assert!(d.poll(HostTime(350_000)));
        assert!(!d.poll(HostTime(900_000)), "nothing pending after firing");
    }

    #[test]
    fn separate_bursts_each_run() {
        let mut d = Debouncer::new(QUIET);
        let a = d.trigger(HostTime(0));
        assert!(d.fire(a));
        let b = d.trigger(HostTime(1_000_000));
        assert!(d.is_pending());
        assert!(d.fire(b));
        assert!(!d.is_pending());
    }

    #[test]
    fn frame_gate_keeps_latest_request() {
        let mut g = FrameGate::new();
        let (first, superseded) = g.request();
        assert_eq!(superseded, None);
        let (second, superseded) = g.request();
        assert_eq!(superseded, Some(first));
        let (third, superseded) = g.request();
        assert_eq!(superseded, Some(second));

        assert!(!g.fire(first), "superseded work is dropped");
        assert!(!g.fire(second));
        assert!(g.fire(third));
        assert!(!g.fire(third), "one computation per frame");
        assert!(!g.is_pending());
    }

    #[test]
    fn frame_gate_cancel() {
        let mut g = FrameGate::new();
        let (t, _) = g.request();
        assert_eq!(g.cancel(), Some(t));
        assert!(!g.fire(t));
    }
}
