//! Snap-to-detent configuration.
//!
//! A detent is a preferred resting position. When a drag ends within
//! `threshold` of the detent, the control jumps onto it.
//!
//! The comparison is strict: a distance exactly equal to the threshold does
//! **not** snap. With `value = 0.5` and `threshold = 0.05` the capture window
//! is the open interval `(0.45, 0.55)`.

use crate::math::{abs, clamp01};

/// Detent position and capture threshold, both in normalized units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapSettings {
    /// Whether snapping is applied at drag end.
    pub enabled: bool,
    /// Detent position in \[0, 1\].
    pub value: f64,
    /// Maximum distance (exclusive) from `value` that still snaps. Never negative.
    pub threshold: f64,
}

impl SnapSettings {
    /// Default capture threshold.
    pub const DEFAULT_THRESHOLD: f64 = 0.05;

    /// Enabled snapping at `value` with `threshold`.
    ///
    /// `value` is clamped to \[0, 1\]; a negative or NaN threshold becomes `0.0`,
    /// which never captures anything.
    pub fn new(value: f64, threshold: f64) -> Self {
        Self {
            enabled: true,
            value: clamp01(value),
            threshold: sanitize_threshold(threshold),
        }
    }

    /// Snapping switched off, detent kept at `value`.
    pub fn disabled(value: f64) -> Self {
        Self {
            enabled: false,
            ..Self::new(value, Self::DEFAULT_THRESHOLD)
        }
    }

    /// Returns `true` when `value` should be pulled onto the detent.
    ///
    /// # Example
    /// ```rust
    /// use qknobs_core::SnapSettings;
    ///
    /// let snap = SnapSettings::new(0.5, 0.05);
    /// assert!(snap.should_snap(0.53));
    /// assert!(!snap.should_snap(0.6));
    /// ```
    pub fn should_snap(&self, value: f64) -> bool {
        self.enabled && abs(value - self.value) < self.threshold
    }
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self::new(0.5, Self::DEFAULT_THRESHOLD)
    }
}

fn sanitize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() || threshold < 0.0 {
        0.0
    } else {
        threshold
    }
}
