//! Absolute value range for continuous controls.
//!
//! A control always stores its position as a normalized value in \[0, 1\].
//! [`ValueRange`] maps that position into the real-world range (decibels,
//! "0 to 11", ...) and back:
//!
//! - `absolute = min + normalized * (max - min)`
//! - `normalized = clamp01((absolute - min) / (max - min))`
//!
//! An empty range (`min == max`) has no meaningful inverse. It fails closed:
//! every normalized value maps to `min`, and every absolute value maps to
//! normalized `0.0`.

use crate::math::{clamp01, lerp};

/// Absolute endpoints of a continuous control.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    /// Absolute value at normalized `0.0`.
    pub min: f64,
    /// Absolute value at normalized `1.0`.
    pub max: f64,
}

impl ValueRange {
    /// Create a range. `min > max` is allowed and simply inverts the mapping.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Unit range (`0.0..=1.0`), where absolute and normalized values coincide.
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` when both endpoints are equal.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Map a normalized value into the absolute range.
    ///
    /// The input is clamped to \[0, 1\] first, so the result always lies
    /// between the endpoints.
    ///
    /// # Example
    /// ```rust
    /// use qknobs_core::ValueRange;
    ///
    /// let range = ValueRange::new(-48.0, 6.0);
    /// assert_eq!(range.to_absolute(0.0), -48.0);
    /// assert_eq!(range.to_absolute(1.0), 6.0);
    /// ```
    pub fn to_absolute(&self, normalized: f64) -> f64 {
        if self.is_degenerate() {
            return self.min;
        }
        lerp(self.min, self.max, clamp01(normalized))
    }

    /// Map an absolute value back to \[0, 1\], clamping out-of-range input.
    ///
    /// # Example
    /// ```rust
    /// use qknobs_core::ValueRange;
    ///
    /// let range = ValueRange::new(-48.0, 6.0);
    /// assert!((range.to_normalized(0.0) - 48.0 / 54.0).abs() < 1e-12);
    /// assert_eq!(range.to_normalized(100.0), 1.0);
    /// ```
    pub fn to_normalized(&self, absolute: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        clamp01((absolute - self.min) / self.span())
    }

    /// Clamp an absolute value into the range, whichever endpoint is larger.
    pub fn clamp(&self, absolute: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        absolute.clamp(lo, hi)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::unit()
    }
}
