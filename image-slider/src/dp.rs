//! # Density-Independent Pixels (Dp)
//!
//! Style constants for the slider (dot size, strip margins, edge blocker
//! width) are expressed in [`Dp`] and converted to physical pixels through the
//! process-wide [`SCALE_FACTOR`].
//!
//! ## Usage
//!
//! ```
//! use image_slider::{Dp, Px};
//!
//! let dot = Dp(8.0);
//! let pixels: Px = dot.into();
//! assert!(pixels.raw() >= 0);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// Hosts set it once at startup with [`set_scale_factor`]; until then one dp
/// equals one pixel.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Updates the global scale factor. Non-finite or non-positive values are
/// ignored.
pub fn set_scale_factor(value: f64) {
    if !value.is_finite() || value <= 0.0 {
        tracing::warn!(value, "ignoring invalid scale factor");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = value;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Creates a new `Dp`. Usable in constants.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels as `f64` using the current scale factor.
    pub fn to_pixels_f64(self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts physical pixels to dp using the current scale factor.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts to whole physical pixels, truncating toward zero.
    pub fn to_px(self) -> Px {
        Px::saturating_from_f32(self.to_pixels_f64() as f32)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}
