// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time for pacing decisions.
//!
//! [`HostTime`] is a point on the page's monotonic clock in microseconds. In
//! the browser it comes from `performance.now()` (milliseconds as `f64`),
//! converted with [`HostTime::from_millis_f64`].
//!
//! [`Duration`] is a span in the same microsecond units. Timer APIs take whole
//! milliseconds, so [`Duration::as_millis_i32`] does the saturating narrowing.

use core::fmt;
use core::ops::{Add, Sub};

/// A point in time, in microseconds since the page's time origin.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw microsecond value.
    #[inline]
    #[must_use]
    pub const fn micros(self) -> u64 {
        self.0
    }

    /// Converts a `DOMHighResTimeStamp` (milliseconds) to a [`HostTime`].
    ///
    /// Negative and non-finite inputs clamp to zero.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() is a small positive f64; µs fits in u64"
    )]
    pub fn from_millis_f64(ms: f64) -> Self {
        if ms.is_finite() && ms > 0.0 {
            Self((ms * 1000.0) as u64)
        } else {
            Self(0)
        }
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.saturating_duration_since(rhs)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}µs)", self.0)
    }
}

/// A span of time in microseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms.saturating_mul(1000))
    }

    /// Returns the raw microsecond value.
    #[inline]
    #[must_use]
    pub const fn micros(self) -> u64 {
        self.0
    }

    /// Returns whole milliseconds, saturating at `i32::MAX` (the range
    /// `setTimeout` accepts).
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is clamped to i32::MAX before the cast"
    )]
    pub const fn as_millis_i32(self) -> i32 {
        let ms = self.0 / 1000;
        if ms > i32::MAX as u64 {
            i32::MAX
        } else {
            ms as i32
        }
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}µs)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_conversion() {
        assert_eq!(HostTime::from_millis_f64(16.5), HostTime(16_500));
        assert_eq!(HostTime::from_millis_f64(-3.0), HostTime(0), "negative clamps");
        assert_eq!(HostTime::from_millis_f64(f64::NAN), HostTime(0), "NaN clamps");
    }

    #[test]
    fn duration_to_timer_millis() {
        assert_eq!(Duration::from_millis(250).as_millis_i32(), 250);
        assert_eq!(Duration(1_999).as_millis_i32(), 1, "truncates sub-millisecond");
        assert_eq!(Duration(u64::MAX).as_millis_i32(), i32::MAX);
    }

    #[test]
    fn host_time_duration_ops() {
        let t = HostTime(1000);
        assert_eq!(t + Duration(200), HostTime(1200));
        assert_eq!(t - HostTime(400), Duration(600));
        assert_eq!(t - HostTime(1500), Duration::ZERO, "saturates");
    }
}
