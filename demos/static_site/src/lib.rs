// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static-site demo: every burnish enhancement on a plain multi-page site.
//!
//! Installs the [`EnhanceConfig::site`] preset with console sinks for
//! diagnostics and tracking, and exports `trackEvent` for page scripts.
//!
//! Build with: `wasm-pack build --target web demos/static_site`
//!
//! Then serve `demos/static_site/` and open `index.html` in a browser.

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use burnish_core::config::EnhanceConfig;
use burnish_core::track::{TrackEvent, TrackSink};
use burnish_web::{ConsoleSink, ConsoleTrackSink, Diagnostics, Tracking};

thread_local! {
    /// The tracking handle passed to `install`, shared with `trackEvent`.
    static TRACKING: RefCell<Option<Tracking>> = const { RefCell::new(None) };
}

fn remember(tracking: Tracking) {
    TRACKING.with(|slot| *slot.borrow_mut() = Some(tracking));
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let diag = Diagnostics::new(ConsoleSink::quiet());
    let tracking = Tracking::new(ConsoleTrackSink);
    remember(tracking.clone());
    let enhancements = burnish_web::install(&EnhanceConfig::site(), diag, tracking)?;

    // Observers and pacing tasks must outlive this function.
    core::mem::forget(enhancements);

    Ok(())
}

/// Records a custom analytics event from page scripts.
///
/// Events go to the same sink the enhancements track through. Before `main`
/// has run they are written to the console.
#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event(category: &str, action: &str, label: &str) {
    let event = TrackEvent::new(category, action, label);
    let installed = TRACKING.with(|slot| slot.borrow().clone());
    match installed {
        Some(tracking) => tracking.track(&event),
        None => ConsoleTrackSink.track(&event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<TrackEvent>>>);

    impl TrackSink for Recorder {
        fn track(&mut self, event: &TrackEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn page_events_reach_the_installed_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        remember(Tracking::new(Recorder(Rc::clone(&seen))));

        track_event("Dialog", "Open", "demo");

        assert_eq!(
            *seen.borrow(),
            [TrackEvent::new("Dialog", "Open", "demo")]
        );
    }
}
