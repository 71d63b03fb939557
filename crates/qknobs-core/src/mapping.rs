//! Pure geometry: normalized values to angles and pixel offsets.
//!
//! # Angle convention
//!
//! Angles are in degrees, measured from 12 o'clock, growing **clockwise**
//! (screen coordinates with y pointing down). The same angle drives every
//! element of a knob: default marker, snap marker, live pointer, and option
//! labels. Nothing is negated at render time.
//!
//! - Radial knobs sweep from `min_angle` (value 0) to `max_angle` (value 1);
//!   with the default `-135..=135` the pointer turns clockwise as the value grows.
//! - Discrete knobs place option `i` at `-i * 360 / count`, so later options
//!   are laid out counter-clockwise from the top.
//!
//! # Fader offsets
//!
//! A fader handle moves along a track of half-length `track_height` centred on
//! the widget. Offset `-track_height` is the top (value 1), `+track_height`
//! the bottom (value 0).

use crate::math::{clamp01, lerp};

/// Angular sweep of a radial knob, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleRange {
    /// Angle at normalized value `0.0`.
    pub min: f64,
    /// Angle at normalized value `1.0`.
    pub max: f64,
}

impl AngleRange {
    /// Classic 270° potentiometer sweep.
    pub const STANDARD: Self = Self::new(-135.0, 135.0);

    /// Create an angle range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Total sweep in degrees.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.max - self.min
    }

    /// Angle for a normalized value. See [`angle_for`].
    #[inline]
    pub fn angle_for(&self, value: f64) -> f64 {
        angle_for(value, self.min, self.max)
    }
}

impl Default for AngleRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Angle for a normalized value: `min_angle + value * (max_angle - min_angle)`.
///
/// Pure; the value is not clamped, so callers pass control state that is
/// already in \[0, 1\].
///
/// # Example
/// ```rust
/// use qknobs_core::angle_for;
///
/// assert_eq!(angle_for(0.0, -135.0, 135.0), -135.0);
/// assert_eq!(angle_for(0.5, -135.0, 135.0), 0.0);
/// assert_eq!(angle_for(1.0, -135.0, 135.0), 135.0);
/// ```
#[inline]
pub fn angle_for(value: f64, min_angle: f64, max_angle: f64) -> f64 {
    lerp(min_angle, max_angle, value)
}

/// Angle between neighbouring options of a discrete knob.
///
/// Zero options yield `0.0` rather than a division by zero.
#[inline]
pub fn discrete_step_angle(option_count: usize) -> f64 {
    if option_count == 0 {
        return 0.0;
    }
    360.0 / option_count as f64
}

/// Angle of option `index` on a discrete knob: `-index * 360 / count`.
///
/// # Example
/// ```rust
/// use qknobs_core::discrete_angle;
///
/// assert_eq!(discrete_angle(0, 4), 0.0);
/// assert_eq!(discrete_angle(1, 4), -90.0);
/// assert_eq!(discrete_angle(3, 4), -270.0);
/// ```
#[inline]
pub fn discrete_angle(index: usize, option_count: usize) -> f64 {
    -(index as f64) * discrete_step_angle(option_count)
}

/// Handle offset for a normalized fader value: `(1 - 2v) * track_height`.
///
/// # Example
/// ```rust
/// use qknobs_core::offset_for;
///
/// assert_eq!(offset_for(1.0, 100.0), -100.0);
/// assert_eq!(offset_for(0.5, 100.0), 0.0);
/// assert_eq!(offset_for(0.0, 100.0), 100.0);
/// ```
#[inline]
pub fn offset_for(value: f64, track_height: f64) -> f64 {
    (1.0 - 2.0 * clamp01(value)) * track_height
}

/// Normalized fader value for a handle offset.
///
/// The offset is clamped to `[-track_height, track_height]` first, then
/// `value = (track_height - offset) / (2 * track_height)`. Returns `None` for a
/// track with no length, where no position is meaningful.
///
/// # Example
/// ```rust
/// use qknobs_core::value_for_offset;
///
/// assert_eq!(value_for_offset(0.0, 100.0), Some(0.5));
/// assert_eq!(value_for_offset(-250.0, 100.0), Some(1.0));
/// assert_eq!(value_for_offset(10.0, 0.0), None);
/// ```
pub fn value_for_offset(offset: f64, track_height: f64) -> Option<f64> {
    if !(track_height.is_finite() && track_height > 0.0) {
        return None;
    }
    let offset = clamp_offset(offset, track_height);
    Some(clamp01((track_height - offset) / (2.0 * track_height)))
}

/// Clamp a handle offset onto the track.
#[inline]
pub(crate) fn clamp_offset(offset: f64, track_height: f64) -> f64 {
    if offset.is_nan() || track_height.is_nan() || track_height <= 0.0 {
        return 0.0;
    }
    offset.clamp(-track_height, track_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_sweep() {
        let range = AngleRange::default();
        assert_eq!(range.sweep(), 270.0);
        assert_eq!(range.angle_for(0.5), 0.0);
    }

    #[test]
    fn discrete_angles_for_zero_options() {
        assert_eq!(discrete_step_angle(0), 0.0);
        assert_eq!(discrete_angle(3, 0), 0.0);
    }

    #[test]
    fn discrete_single_option_stays_at_top() {
        assert_eq!(discrete_angle(0, 1), 0.0);
    }

    #[test]
    fn offset_round_trip() {
        for &v in &[0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            let offset = offset_for(v, 120.0);
            let back = value_for_offset(offset, 120.0).unwrap();
            assert!((back - v).abs() < 1e-12, "v={v} back={back}");
        }
    }

    #[test]
    fn offset_clamped_to_track() {
        assert_eq!(value_for_offset(1000.0, 50.0), Some(0.0));
        assert_eq!(value_for_offset(f64::NAN, 50.0), Some(0.5));
    }

    #[test]
    fn degenerate_track_has_no_value() {
        assert_eq!(value_for_offset(0.0, -1.0), None);
        assert_eq!(value_for_offset(0.0, f64::INFINITY), None);
    }
}
