//! Rotary knob: a continuous control drawn as an angle.
//!
//! Vertical drag turns the knob: dragging **up** (negative screen-y
//! translation) increases the value, and [`RADIAL_DRAG_SENSITIVITY`] pixels
//! sweep the full range.

use crate::continuous::{ContinuousControl, DragOutcome};
use crate::mapping::AngleRange;
use crate::range::ValueRange;
use crate::snap::SnapSettings;

/// Vertical pixels for a full 0 → 1 sweep.
pub const RADIAL_DRAG_SENSITIVITY: f64 = 150.0;

/// Rotary knob state.
///
/// # Example
///
/// ```rust
/// use qknobs_core::{AngleRange, RadialKnobControl, ValueRange};
///
/// let knob = RadialKnobControl::new(ValueRange::new(0.0, 11.0), 0.5)
///     .with_angles(AngleRange::new(-135.0, 135.0));
/// assert_eq!(knob.angle(), 0.0);
/// assert_eq!(knob.control().absolute_value(), 5.5);
/// ```
#[derive(Debug, Clone)]
pub struct RadialKnobControl {
    control: ContinuousControl,
    angles: AngleRange,
    sensitivity: f64,
}

impl RadialKnobControl {
    /// Create a knob over `range` with a normalized default.
    pub fn new(range: ValueRange, default_value: f64) -> Self {
        Self::from_control(ContinuousControl::new(range, default_value))
    }

    /// Wrap an existing continuous control.
    pub fn from_control(control: ContinuousControl) -> Self {
        Self {
            control,
            angles: AngleRange::STANDARD,
            sensitivity: RADIAL_DRAG_SENSITIVITY,
        }
    }

    /// Set the angular sweep.
    pub fn with_angles(mut self, angles: AngleRange) -> Self {
        self.angles = angles;
        self
    }

    /// Set the detent.
    pub fn with_snap(mut self, snap: SnapSettings) -> Self {
        self.control = self.control.with_snap(snap);
        self
    }

    /// Set the pixels needed for a full sweep.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Underlying continuous state.
    #[inline]
    pub fn control(&self) -> &ContinuousControl {
        &self.control
    }

    /// Mutable access to the underlying continuous state.
    #[inline]
    pub fn control_mut(&mut self) -> &mut ContinuousControl {
        &mut self.control
    }

    /// Angular sweep.
    #[inline]
    pub fn angles(&self) -> AngleRange {
        self.angles
    }

    /// Pixels per full sweep.
    #[inline]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Pointer angle for the current value.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angles.angle_for(self.control.value())
    }

    /// Marker angle for the default value.
    #[inline]
    pub fn default_angle(&self) -> f64 {
        self.angles.angle_for(self.control.default_value())
    }

    /// Marker angle for the detent.
    #[inline]
    pub fn snap_angle(&self) -> f64 {
        self.angles.angle_for(self.control.snap().value)
    }

    /// Apply a vertical drag translation (screen pixels, down positive)
    /// measured from the gesture start.
    pub fn on_drag_changed(&mut self, translation_y: f64) -> f64 {
        self.control
            .on_drag_changed(-translation_y, self.sensitivity)
    }

    /// Finish the drag, applying the detent.
    pub fn on_drag_ended(&mut self) -> DragOutcome {
        self.control.on_drag_ended()
    }

    /// Double-tap: back to the default value.
    pub fn reset(&mut self) {
        self.control.reset();
    }
}

impl Default for RadialKnobControl {
    /// "Goes to eleven": range 0..11, centred.
    fn default() -> Self {
        Self::new(ValueRange::new(0.0, 11.0), 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_points_up() {
        let knob = RadialKnobControl::default();
        assert_eq!(knob.angle(), 0.0);
        assert_eq!(knob.default_angle(), 0.0);
    }

    #[test]
    fn drag_up_increases() {
        let mut knob = RadialKnobControl::default().with_snap(SnapSettings::disabled(0.5));
        knob.on_drag_changed(-30.0);
        assert!((knob.control().value() - 0.7).abs() < 1e-12);
        knob.on_drag_changed(30.0);
        assert!((knob.control().value() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn full_throw_reaches_end_stops() {
        let mut knob = RadialKnobControl::default();
        knob.on_drag_changed(-RADIAL_DRAG_SENSITIVITY);
        assert_eq!(knob.angle(), 135.0);
        knob.on_drag_changed(RADIAL_DRAG_SENSITIVITY * 2.0);
        assert_eq!(knob.angle(), -135.0);
    }

    #[test]
    fn snap_angle_tracks_detent() {
        let knob = RadialKnobControl::default().with_snap(SnapSettings::new(0.0, 0.05));
        assert_eq!(knob.snap_angle(), -135.0);
    }

    #[test]
    fn custom_sensitivity() {
        let mut knob = RadialKnobControl::default()
            .with_sensitivity(300.0)
            .with_snap(SnapSettings::disabled(0.5));
        knob.on_drag_changed(-150.0);
        assert_eq!(knob.control().value(), 1.0);
        knob.on_drag_changed(-75.0);
        assert_eq!(knob.control().value(), 0.75);
    }

    #[test]
    fn reset_after_drag() {
        let mut knob = RadialKnobControl::default();
        knob.on_drag_changed(-60.0);
        knob.on_drag_ended();
        knob.reset();
        assert_eq!(knob.control().value(), 0.5);
    }
}
