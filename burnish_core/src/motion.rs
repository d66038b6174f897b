// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven card tilt and the reduced-motion gate.
//!
//! Only the tilt is gated on [`MotionPreference`]. Reveal-on-scroll ignores it
//! on purpose: content must become visible whatever the user's preference.

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect, Vec2};

/// Media query that signals a reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// The user's motion preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MotionPreference {
    /// No preference expressed; motion effects run.
    #[default]
    NoPreference,
    /// `prefers-reduced-motion: reduce`; motion effects are skipped.
    Reduce,
}

impl MotionPreference {
    /// Maps the result of matching [`REDUCED_MOTION_QUERY`].
    #[must_use]
    pub const fn from_query_match(matches: bool) -> Self {
        if matches { Self::Reduce } else { Self::NoPreference }
    }

    /// Returns `true` if motion effects may run.
    #[must_use]
    pub const fn allows_motion(self) -> bool {
        matches!(self, Self::NoPreference)
    }
}

/// Parameters of the tilt effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Maximum rotation on each axis, in degrees.
    pub max_rotation_deg: f64,
    /// CSS perspective distance, in pixels.
    pub perspective_px: f64,
    /// Upward lift while hovered, in pixels.
    pub lift_px: f64,
}

impl TiltConfig {
    /// A gentle two-degree tilt with a small lift.
    pub const SUBTLE: Self = Self {
        max_rotation_deg: 2.0,
        perspective_px: 1000.0,
        lift_px: 4.0,
    };

    /// The transform applied when the pointer leaves the card.
    #[must_use]
    pub fn rest_transform(&self) -> String {
        format!(
            "perspective({}px) rotateY(0deg) rotateX(0deg) translateY(0)",
            self.perspective_px
        )
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self::SUBTLE
    }
}

/// Rotation to apply to a hovered card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    /// Rotation around the Y axis, in degrees (follows horizontal offset).
    pub rotate_y_deg: f64,
    /// Rotation around the X axis, in degrees (opposes vertical offset).
    pub rotate_x_deg: f64,
}

impl Tilt {
    /// Computes the tilt for a pointer at `pointer` over a card at `bounds`,
    /// both in viewport coordinates.
    ///
    /// The offset from the card's centre is normalized to `[-1, 1]` on each
    /// axis when the pointer is inside the card. Degenerate (zero-sized) cards
    /// produce no rotation.
    #[must_use]
    pub fn from_pointer(pointer: Point, bounds: Rect, config: &TiltConfig) -> Self {
        let half = Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0);
        let offset = pointer - bounds.center();
        let fraction = |d: f64, h: f64| if h > 0.0 { d / h } else { 0.0 };
        Self {
            rotate_y_deg: fraction(offset.x, half.x) * config.max_rotation_deg,
            rotate_x_deg: -fraction(offset.y, half.y) * config.max_rotation_deg,
        }
    }

    /// The CSS `transform` value for this tilt.
    #[must_use]
    pub fn to_css(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg) translateY(-{}px)",
            config.perspective_px, self.rotate_y_deg, self.rotate_x_deg, config.lift_px
        )
    }
}

/// Pointer-move handler logic: the transform to set, or `None` when motion is
/// reduced and the card must be left alone.
#[must_use]
pub fn tilt_transform(
    preference: MotionPreference,
    pointer: Point,
    bounds: Rect,
    config: &TiltConfig,
) -> Option<String> {
    preference
        .allows_motion()
        .then(|| Tilt::from_pointer(pointer, bounds, config).to_css(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect::new(100.0, 200.0, 300.0, 300.0);

    #[test]
    fn centre_is_flat() {
        let t = Tilt::from_pointer(Point::new(200.0, 250.0), CARD, &TiltConfig::SUBTLE);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert_eq!(t.rotate_x_deg, 0.0);
    }

    #[test]
    fn corners_reach_max_rotation() {
        let cfg = TiltConfig::SUBTLE;
        let top_right = Tilt::from_pointer(Point::new(300.0, 200.0), CARD, &cfg);
        assert_eq!(top_right.rotate_y_deg, 2.0);
        assert_eq!(top_right.rotate_x_deg, 2.0, "pointer above centre tips the top back");

        let bottom_left = Tilt::from_pointer(Point::new(100.0, 300.0), CARD, &cfg);
        assert_eq!(bottom_left.rotate_y_deg, -2.0);
        assert_eq!(bottom_left.rotate_x_deg, -2.0);
    }

    #[test]
    fn zero_sized_card_does_not_divide_by_zero() {
        let flat = Rect::new(10.0, 10.0, 10.0, 10.0);
        let t = Tilt::from_pointer(Point::new(50.0, 50.0), flat, &TiltConfig::SUBTLE);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert_eq!(t.rotate_x_deg, 0.0);
    }

    #[test]
    fn css_shape() {
        let cfg = TiltConfig::SUBTLE;
        let css = tilt_transform(
            MotionPreference::NoPreference,
            Point::new(300.0, 200.0),
            CARD,
            &cfg,
        );
        assert_eq!(
            css.as_deref(),
            Some("perspective(1000px) rotateY(2deg) rotateX(2deg) translateY(-4px)")
        );
        assert_eq!(
            cfg.rest_transform(),
            "perspective(1000px) rotateY(0deg) rotateX(0deg) translateY(0)"
        );
    }

    #[test]
    fn reduced_motion_leaves_transform_alone() {
        let css = tilt_transform(
            MotionPreference::Reduce,
            Point::new(300.0, 200.0),
            CARD,
            &TiltConfig::SUBTLE,
        );
        assert_eq!(css, None);
        assert_eq!(MotionPreference::from_query_match(true), MotionPreference::Reduce);
    }
}
