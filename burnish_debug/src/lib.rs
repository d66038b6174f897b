// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native sinks for burnish diagnostics and tracking.
//!
//! These are for harnesses and tests that drive the state machines in
//! [`burnish_core`] outside a browser:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event trace
//!   output.
//! - [`jsonl::JsonLinesSink`]: one JSON object per tracked event, for piping
//!   into other tools.

pub mod jsonl;
pub mod pretty;
