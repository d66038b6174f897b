// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-driven one-shot triggers.
//!
//! A [`RevealEngine`] tracks a set of watched elements, each identified by a
//! [`WatchId`] handle. The host feeds it [`IntersectionSample`]s as the
//! browser's `IntersectionObserver` delivers them; the engine answers with a
//! [`Firing`] the first time a watched element crosses the configured
//! threshold. After that the slot is spent: further samples for the same id
//! are ignored, and the host is expected to stop observing the element.
//!
//! Two kinds of trigger exist, see [`WatchKind`]. An engine does not care which
//! kinds it holds, but hosts typically run one engine per kind so that each
//! observer owns a disjoint element set.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

// ---------------------------------------------------------------------------
// Observer options
// ---------------------------------------------------------------------------

/// One side of a [`RootMargin`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    /// CSS pixels.
    Px(f64),
    /// Percentage of the root's size along the same axis.
    Percent(f64),
}

impl MarginLength {
    fn parse(token: &str) -> Result<Self, ParseMarginError> {
        let (number, ctor): (&str, fn(f64) -> Self) = if let Some(n) = token.strip_suffix("px") {
            (n, Self::Px)
        } else if let Some(n) = token.strip_suffix('%') {
            (n, Self::Percent)
        } else if token == "0" {
            (token, Self::Px)
        } else {
            return Err(ParseMarginError::BadUnit);
        };
        number
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(ctor)
            .ok_or(ParseMarginError::BadNumber)
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// An `IntersectionObserver` root margin, in CSS shorthand order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    /// Top offset.
    pub top: MarginLength,
    /// Right offset.
    pub right: MarginLength,
    /// Bottom offset.
    pub bottom: MarginLength,
    /// Left offset.
    pub left: MarginLength,
}

/// Why a root-margin string could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMarginError {
    /// Empty input or more than four components.
    BadArity,
    /// A component had no `px` or `%` suffix.
    BadUnit,
    /// A component's numeric part was not a finite number.
    BadNumber,
}

impl fmt::Display for ParseMarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BadArity => "root margin needs one to four components",
            Self::BadUnit => "root margin components must be in px or %",
            Self::BadNumber => "root margin component is not a finite number",
        })
    }
}

impl core::error::Error for ParseMarginError {}

impl RootMargin {
    /// No margin on any side.
    pub const ZERO: Self = Self::uniform_px(0.0);

    /// The same pixel offset on all four sides.
    #[must_use]
    pub const fn uniform_px(v: f64) -> Self {
        Self {
            top: MarginLength::Px(v),
            right: MarginLength::Px(v),
            bottom: MarginLength::Px(v),
            left: MarginLength::Px(v),
        }
    }

    /// Pixel offsets in CSS shorthand order (top, right, bottom, left).
    #[must_use]
    pub const fn px(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: MarginLength::Px(top),
            right: MarginLength::Px(right),
            bottom: MarginLength::Px(bottom),
            left: MarginLength::Px(left),
        }
    }

    /// Parses the CSS margin shorthand accepted by `IntersectionObserver`
    /// (`"10px"`, `"0px 0px -50px 0px"`, `"5% 0px"`, ...).
    pub fn parse(s: &str) -> Result<Self, ParseMarginError> {
        let mut parts = [MarginLength::Px(0.0); 4];
        let mut n = 0;
        for token in s.split_ascii_whitespace() {
            if n == 4 {
                return Err(ParseMarginError::BadArity);
            }
            parts[n] = MarginLength::parse(token)?;
            n += 1;
        }
        let [a, b, c, d] = parts;
        match n {
            1 => Ok(Self { top: a, right: a, bottom: a, left: a }),
            2 => Ok(Self { top: a, right: b, bottom: a, left: b }),
            3 => Ok(Self { top: a, right: b, bottom: c, left: b }),
            4 => Ok(Self { top: a, right: b, bottom: c, left: d }),
            _ => Err(ParseMarginError::BadArity),
        }
    }
}

impl fmt::Display for RootMargin {
    /// Formats in the four-value form `IntersectionObserverInit.rootMargin`
    /// expects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Options for one observer instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the target (0.0–1.0) that must be visible to fire.
    pub threshold: f64,
    /// Grows or shrinks the viewport before intersection is computed.
    pub root_margin: RootMargin,
}

impl ObserverConfig {
    /// Fires as soon as any part of the target touches the viewport.
    pub const EAGER: Self = Self {
        threshold: 0.0,
        root_margin: RootMargin::ZERO,
    };

    /// Threshold clamped to the range the browser accepts.
    #[must_use]
    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            0.0
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self::EAGER
    }
}

// ---------------------------------------------------------------------------
// Watched elements
// ---------------------------------------------------------------------------

/// Handle to a watched element inside one [`RevealEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(u32);

impl WatchId {
    /// Returns the slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// What happens when a watched element first becomes visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WatchKind {
    /// Flip opacity to 1 and clear the staged transform.
    Reveal,
    /// Move the staged source into `src` and drop the staging attribute.
    LazyImage {
        /// The deferred image URL captured at registration.
        source: String,
    },
}

impl WatchKind {
    /// Short name for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::LazyImage { .. } => "lazy-image",
        }
    }
}

/// One intersection report for a watched element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    /// The browser's `isIntersecting` flag.
    pub is_intersecting: bool,
    /// The browser's `intersectionRatio`.
    pub ratio: f64,
}

/// The one-time action to apply to a watched element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Firing {
    /// Which element fired.
    pub id: WatchId,
    /// What to do with it.
    pub kind: WatchKind,
}

#[derive(Clone, Debug)]
enum Slot {
    Pending(WatchKind),
    Fired,
}

/// Tracks watched elements and fires each at most once.
#[derive(Clone, Debug)]
pub struct RevealEngine {
    config: ObserverConfig,
    slots: Vec<Slot>,
    pending: usize,
}

impl RevealEngine {
    /// Creates an empty engine with the given observer options.
    #[must_use]
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            pending: 0,
        }
    }

    /// Returns the observer options this engine was created with.
    #[must_use]
    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Registers a new pending element and returns its handle.
    pub fn watch(&mut self, kind: WatchKind) -> WatchId {
        let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot::Pending(kind));
        self.pending += 1;
        WatchId(idx)
    }

    /// Returns `true` while `id` has not fired yet.
    #[must_use]
    pub fn is_pending(&self, id: WatchId) -> bool {
        matches!(self.slots.get(id.0 as usize), Some(Slot::Pending(_)))
    }

    /// Number of elements still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    /// Total number of registered elements, fired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing was ever registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Feeds one sample. Returns the action to apply if this is the element's
    /// first qualifying intersection.
    ///
    /// Unknown ids and already-fired ids are ignored.
    pub fn observe(&mut self, id: WatchId, sample: IntersectionSample) -> Option<Firing> {
        if !self.crosses(sample) {
            return None;
        }
        let slot = self.slots.get_mut(id.0 as usize)?;
        match core::mem::replace(slot, Slot::Fired) {
            Slot::Pending(kind) => {
                self.pending -= 1;
                Some(Firing { id, kind })
            }
            Slot::Fired => None,
        }
    }

    /// Feeds a batch of samples in delivery order.
    pub fn observe_batch(
        &mut self,
        batch: impl IntoIterator<Item = (WatchId, IntersectionSample)>,
    ) -> Vec<Firing> {
        batch
            .into_iter()
            .filter_map(|(id, sample)| self.observe(id, sample))
            .collect()
    }

    fn crosses(&self, sample: IntersectionSample) -> bool {
        sample.is_intersecting && sample.ratio >= self.config.clamped_threshold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec;

    const HIT: IntersectionSample = IntersectionSample {
        is_intersecting: true,
        ratio: 0.5,
    };
    const MISS: IntersectionSample = IntersectionSample {
        is_intersecting: false,
        ratio: 0.0,
    };

    fn card_engine() -> RevealEngine {
        RevealEngine::new(ObserverConfig {
            threshold: 0.1,
            root_margin: RootMargin::px(0.0, 0.0, -50.0, 0.0),
        })
    }

    #[test]
    fn fires_at_most_once() {
        let mut engine = card_engine();
        let a = engine.watch(WatchKind::Reveal);

        assert_eq!(
            engine.observe(a, HIT),
            Some(Firing {
                id: a,
                kind: WatchKind::Reveal
            })
        );
        assert!(!engine.is_pending(a), "fired slot is spent");
        assert_eq!(engine.observe(a, HIT), None, "second crossing ignored");
        assert_eq!(engine.observe(a, MISS), None);
        assert_eq!(engine.observe(a, HIT), None, "re-entry ignored");
        assert_eq!(engine.pending_count(), 0);
    }

    #[test]
    fn below_threshold_stays_pending() {
        let mut engine = card_engine();
        let a = engine.watch(WatchKind::Reveal);
        let sliver = IntersectionSample {
            is_intersecting: true,
            ratio: 0.05,
        };
        assert_eq!(engine.observe(a, sliver), None);
        assert_eq!(engine.observe(a, MISS), None);
        assert!(engine.is_pending(a));
    }

    #[test]
    fn lazy_image_carries_its_source() {
        let mut engine = RevealEngine::new(ObserverConfig::EAGER);
        let img = engine.watch(WatchKind::LazyImage {
            source: "hero.webp".to_string(),
        });
        let edge = IntersectionSample {
            is_intersecting: true,
            ratio: 0.0,
        };
        let fired = engine.observe(img, edge).expect("eager observer fires on touch");
        assert_eq!(
            fired.kind,
            WatchKind::LazyImage {
                source: "hero.webp".to_string()
            }
        );
    }

    #[test]
    fn batch_preserves_delivery_order() {
        let mut engine = card_engine();
        let a = engine.watch(WatchKind::Reveal);
        let b = engine.watch(WatchKind::Reveal);
        let c = engine.watch(WatchKind::Reveal);

        let fired = engine.observe_batch(vec![(c, HIT), (a, MISS), (b, HIT), (c, HIT)]);
        let ids: Vec<_> = fired.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![c, b]);
        assert!(engine.is_pending(a));
        assert_eq!(engine.pending_count(), 1);
        assert_eq!(engine.len(), 3);
    }

    #[test]
    fn detached_element_never_fires() {
        // A node removed from the document reports as non-intersecting.
        let mut engine = card_engine();
        let a = engine.watch(WatchKind::Reveal);
        for _ in 0..3 {
            assert_eq!(engine.observe(a, MISS), None);
        }
        assert!(engine.is_pending(a));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut engine = card_engine();
        let mut other = card_engine();
        let _ = other.watch(WatchKind::Reveal);
        let foreign = other.watch(WatchKind::Reveal);
        assert_eq!(engine.observe(foreign, HIT), None);
    }

    #[test]
    fn independent_engines_do_not_interfere() {
        let mut reveals = card_engine();
        let mut images = RevealEngine::new(ObserverConfig::EAGER);
        let r = reveals.watch(WatchKind::Reveal);
        let i = images.watch(WatchKind::LazyImage {
            source: "a.png".to_string(),
        });
        assert_eq!(r.index(), i.index(), "handles are per engine");

        assert!(reveals.observe(r, HIT).is_some());
        assert!(images.is_pending(i), "other engine untouched");
    }

    #[test]
    fn root_margin_shorthand() {
        assert_eq!(
            RootMargin::parse("0px 0px -50px 0px"),
            Ok(RootMargin::px(0.0, 0.0, -50.0, 0.0))
        );
        assert_eq!(RootMargin::parse("10px"), Ok(RootMargin::uniform_px(10.0)));
        assert_eq!(
            RootMargin::parse("5% 0"),
            Ok(RootMargin {
                top: MarginLength::Percent(5.0),
                right: MarginLength::Px(0.0),
                bottom: MarginLength::Percent(5.0),
                left: MarginLength::Px(0.0),
            })
        );
        assert_eq!(RootMargin::parse(""), Err(ParseMarginError::BadArity));
        assert_eq!(RootMargin::parse("1px 2px 3px 4px 5px"), Err(ParseMarginError::BadArity));
        assert_eq!(RootMargin::parse("10em"), Err(ParseMarginError::BadUnit));
        assert_eq!(RootMargin::parse("xpx"), Err(ParseMarginError::BadNumber));
    }

    #[test]
    fn root_margin_formats_for_the_browser() {
        assert_eq!(
            RootMargin::px(0.0, 0.0, -50.0, 0.0).to_string(),
            "0px 0px -50px 0px"
        );
    }

    #[test]
    fn threshold_is_clamped() {
        let cfg = ObserverConfig {
            threshold: 1.7,
            root_margin: RootMargin::ZERO,
        };
        assert_eq!(cfg.clamped_threshold(), 1.0);
    }
}
