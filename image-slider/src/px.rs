//! Physical pixel unit used for viewport widths and scroll offsets.
//!
//! ## Usage
//!
//! Convert host-reported layout widths into [`Px`] and derive per-slide scroll
//! offsets from them.

use std::ops::{Add, Mul, Neg, Sub};

use crate::Dp;

/// A physical pixel length.
///
/// Viewport widths are whole pixels; scroll offsets reported by the host are
/// `f32` and compared against multiples of a [`Px`] width.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);
    /// Largest representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Returns the raw pixel value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the value to `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Converts an `f32` into `Px`, truncating toward zero and saturating at
    /// the `i32` bounds. `NaN` maps to zero.
    pub fn saturating_from_f32(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        let clamped = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Self(clamped as i32)
    }

    /// Multiplies by an integer count, saturating on overflow.
    pub fn saturating_mul(self, times: usize) -> Self {
        let product = i64::from(self.0).saturating_mul(times.min(i64::MAX as usize) as i64);
        Self(product.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Converts the pixel value to density-independent pixels.
    pub fn to_dp(self) -> Dp {
        Dp::from_pixels_f64(f64::from(self.0))
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Dp> for Px {
    fn from(dp: Dp) -> Self {
        dp.to_px()
    }
}

/// Rounds half away from zero, saturating into `i64`. `NaN` maps to zero.
pub fn round_half_away(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    // f64::round already rounds halfway cases away from zero.
    value.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64
}

/// Rounds a scroll offset to whole pixels for threshold comparisons.
///
/// Scroll engines report offsets like `749.99994` for a target of `750`; the
/// wrap thresholds are compared on these rounded values.
pub fn to_fixed(value: f32) -> i64 {
    round_half_away(f64::from(value))
}
