// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` glue for one-shot reveal and lazy-image loading.
//!
//! A [`ViewportWatcher`] owns one observer and one [`RevealEngine`]. The
//! observer reports samples; the engine decides which of them are first
//! crossings; the watcher applies the resulting style or `src` change and
//! unobserves the element. Each watcher has its own element set, so several
//! can run side by side with different options.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use burnish_core::config::{LazyImageConfig, RevealConfig};
use burnish_core::reveal::{
    Firing, IntersectionSample, ObserverConfig, RevealEngine, WatchId, WatchKind,
};
use burnish_core::trace::WatchFiredEvent;

use crate::diag::Diagnostics;
use crate::dom;

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// How fired elements are changed.
#[derive(Clone, Copy, Debug)]
enum Effects {
    /// Apply the final `(opacity, transform)`.
    Reveal {
        opacity: &'static str,
        transform: &'static str,
    },
    /// Swap in the captured source and drop the staging attribute.
    LazyImage { source_attribute: &'static str },
}

/// One `IntersectionObserver` plus the once-only bookkeeping for its targets.
pub struct ViewportWatcher {
    inner: Rc<WatchInner>,
}

struct WatchInner {
    engine: RefCell<RevealEngine>,
    targets: RefCell<Vec<(WatchId, Element)>>,
    observer: RefCell<Option<IntersectionObserver>>,
    closure: RefCell<Option<ObserverClosure>>,
    effects: Effects,
    diag: Diagnostics,
}

impl WatchInner {
    fn on_entries(&self, entries: &Array) {
        let firings = {
            let targets = self.targets.borrow();
            let samples = entries.iter().filter_map(|raw| {
                let entry = raw.dyn_into::<IntersectionObserverEntry>().ok()?;
                let target = entry.target();
                let (id, _) = targets.iter().find(|(_, el)| dom::same_node(el, &target))?;
                Some((
                    *id,
                    IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    },
                ))
            });
            self.engine.borrow_mut().observe_batch(samples)
        };
        if firings.is_empty() {
            return;
        }

        let at = crate::now();
        for firing in firings {
            let Some(target) = self.target(firing.id) else {
                continue;
            };
            if let Err(err) = self.apply(&target, &firing) {
                self.diag.fault_js("intersection", &err);
            }
            if let Some(observer) = self.observer.borrow().as_ref() {
                observer.unobserve(&target);
            }
            self.diag.trace(|t| {
                t.watch_fired(&WatchFiredEvent {
                    kind: firing.kind.label(),
                    index: firing.id.index(),
                    at,
                });
            });
        }

        if self.engine.borrow().pending_count() == 0
            && let Some(observer) = self.observer.borrow().as_ref()
        {
            observer.disconnect();
        }
    }

    fn target(&self, id: WatchId) -> Option<Element> {
        self.targets
            .borrow()
            .iter()
            .find(|(watched, _)| *watched == id)
            .map(|(_, el)| el.clone())
    }

    fn apply(&self, target: &Element, firing: &Firing) -> Result<(), JsValue> {
        match (&firing.kind, self.effects) {
            (WatchKind::Reveal, Effects::Reveal { opacity, transform }) => {
                if let Some(el) = target.dyn_ref::<HtmlElement>() {
                    dom::set_style(el, &[("opacity", opacity), ("transform", transform)]);
                }
            }
            (WatchKind::LazyImage { source }, Effects::LazyImage { source_attribute }) => {
                target.set_attribute("src", source)?;
                target.remove_attribute(source_attribute)?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl ViewportWatcher {
    fn new(
        config: ObserverConfig,
        effects: Effects,
        diag: &Diagnostics,
    ) -> Result<Self, JsValue> {
        let inner = Rc::new(WatchInner {
            engine: RefCell::new(RevealEngine::new(config)),
            targets: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            closure: RefCell::new(None),
            effects,
            diag: diag.clone(),
        });

        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            if let Some(inner) = weak.upgrade() {
                inner.on_entries(&entries);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.clamped_threshold()));
        init.set_root_margin(&alloc::format!("{}", config.root_margin));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;

        *inner.observer.borrow_mut() = Some(observer);
        *inner.closure.borrow_mut() = Some(closure);
        Ok(Self { inner })
    }

    fn watch(&self, el: Element, kind: WatchKind) {
        let id = self.inner.engine.borrow_mut().watch(kind);
        if let Some(observer) = self.inner.observer.borrow().as_ref() {
            observer.observe(&el);
        }
        self.inner.targets.borrow_mut().push((id, el));
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.engine.borrow().len()
    }

    /// Returns `true` if no element matched at install time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.engine.borrow().is_empty()
    }

    /// Number of elements that have not fired yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner.engine.borrow().pending_count()
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        if let Some(observer) = self.inner.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for ViewportWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportWatcher")
            .field("len", &self.len())
            .field("pending", &self.pending_count())
            .finish()
    }
}

/// Stages every reveal target hidden and starts watching it.
pub(crate) fn install_reveal(
    document: &Document,
    config: &RevealConfig,
    diag: &Diagnostics,
) -> Result<ViewportWatcher, JsValue> {
    let (opacity, transform) = config.revealed_style();
    let watcher =
        ViewportWatcher::new(config.observer, Effects::Reveal { opacity, transform }, diag)?;
    let (opacity, transform) = config.staged_style();
    let transition = config.transition();
    for el in dom::select_html(document, config.selector)? {
        dom::set_style(
            &el,
            &[
                ("opacity", opacity),
                ("transform", transform.as_str()),
                ("transition", transition.as_str()),
            ],
        );
        watcher.watch(el.into(), WatchKind::Reveal);
    }
    Ok(watcher)
}

/// Captures each deferred image source and starts watching the image.
pub(crate) fn install_lazy_images(
    document: &Document,
    config: &LazyImageConfig,
    diag: &Diagnostics,
) -> Result<ViewportWatcher, JsValue> {
    let watcher = ViewportWatcher::new(
        config.observer,
        Effects::LazyImage {
            source_attribute: config.source_attribute,
        },
        diag,
    )?;
    for img in dom::select_all(document, &config.selector())? {
        if let Some(source) = img.get_attribute(config.source_attribute) {
            watcher.watch(img, WatchKind::LazyImage { source });
        }
    }
    Ok(watcher)
}
