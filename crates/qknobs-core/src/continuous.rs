//! Continuous control state shared by radial knobs and faders.
//!
//! [`ContinuousControl`] owns the normalized value (always in \[0, 1\]), the
//! default and snap configuration, and the drag anchor of the gesture in
//! progress.
//!
//! ## Drag model
//!
//! The host delivers the translation **since the gesture started**, not the
//! per-frame delta. The first drag-changed event captures the current value
//! as the anchor; every later event of the same gesture recomputes
//!
//! ```text
//! value = clamp01(anchor + delta_from_start / sensitivity)
//! ```
//!
//! so the final value depends only on the final delta, no matter how many
//! intermediate events the host produced. Drag-end applies the detent and
//! clears the anchor.
//!
//! ```rust
//! use qknobs_core::{ContinuousControl, SnapSettings, ValueRange};
//!
//! let mut control = ContinuousControl::new(ValueRange::new(0.0, 11.0), 0.5)
//!     .with_snap(SnapSettings::new(0.5, 0.05));
//!
//! control.on_drag_changed(20.0, 150.0);
//! control.on_drag_changed(5.0, 150.0); // still relative to the same anchor
//! control.on_drag_ended();             // 0.533 is inside the detent window
//!
//! assert_eq!(control.value(), 0.5);
//! assert_eq!(control.absolute_value(), 5.5);
//! ```

use crate::event::{ControlEvent, EventQueue, Feedback};
use crate::math::clamp01;
use crate::range::ValueRange;
use crate::snap::SnapSettings;

/// Result of finishing a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The value landed on the detent.
    Snapped {
        /// Detent position now held by the control.
        value: f64,
    },
    /// The value stayed where the drag left it.
    Released {
        /// Final normalized value.
        value: f64,
    },
    /// The control is inactive and ignored the gesture.
    Ignored,
}

/// Normalized continuous control value with drag tracking and snapping.
#[derive(Debug, Clone)]
pub struct ContinuousControl {
    /// Current position in \[0, 1\].
    value: f64,
    /// Position restored by [`reset`](Self::reset).
    default_value: f64,
    range: ValueRange,
    snap: SnapSettings,
    /// Value captured when the current gesture began.
    drag_anchor: Option<f64>,
    /// Inactive controls ignore gestures but still accept programmatic writes.
    active: bool,
    feedback_enabled: bool,
    events: EventQueue,
}

impl ContinuousControl {
    /// Create a control over `range`, starting at the normalized `default_value`.
    ///
    /// The detent starts enabled at the default position with
    /// [`SnapSettings::DEFAULT_THRESHOLD`].
    pub fn new(range: ValueRange, default_value: f64) -> Self {
        let default_value = clamp01(default_value);
        Self {
            value: default_value,
            default_value,
            range,
            snap: SnapSettings::new(default_value, SnapSettings::DEFAULT_THRESHOLD),
            drag_anchor: None,
            active: true,
            feedback_enabled: true,
            events: EventQueue::new(),
        }
    }

    /// Create a control whose default is given in absolute units.
    ///
    /// ```rust
    /// use qknobs_core::{ContinuousControl, ValueRange};
    ///
    /// let fader = ContinuousControl::with_absolute_default(ValueRange::new(-48.0, 6.0), 0.0);
    /// assert!((fader.value() - 48.0 / 54.0).abs() < 1e-12);
    /// ```
    pub fn with_absolute_default(range: ValueRange, default_absolute: f64) -> Self {
        Self::new(range, range.to_normalized(default_absolute))
    }

    /// Replace the snap configuration.
    pub fn with_snap(mut self, snap: SnapSettings) -> Self {
        self.snap = SnapSettings {
            value: clamp01(snap.value),
            ..snap
        };
        self
    }

    /// Set whether the control reacts to gestures.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set whether events produce haptic feedback.
    pub fn with_feedback(mut self, enabled: bool) -> Self {
        self.feedback_enabled = enabled;
        self
    }

    // -- Value -------------------------------------------------------------

    /// Current normalized value in \[0, 1\].
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the normalized value, clamping into \[0, 1\].
    pub fn set_value(&mut self, value: f64) {
        self.write_value(clamp01(value));
    }

    /// Default normalized value.
    #[inline]
    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    /// Change the default normalized value (clamped). Does not move the control.
    pub fn set_default_value(&mut self, value: f64) {
        self.default_value = clamp01(value);
    }

    /// Absolute range of the control.
    #[inline]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Change the absolute range. The normalized position is kept.
    pub fn set_range(&mut self, range: ValueRange) {
        self.range = range;
    }

    /// Current value mapped into the absolute range.
    ///
    /// An empty range always reports its single endpoint.
    #[inline]
    pub fn absolute_value(&self) -> f64 {
        self.range.to_absolute(self.value)
    }

    /// Default value mapped into the absolute range.
    #[inline]
    pub fn default_absolute_value(&self) -> f64 {
        self.range.to_absolute(self.default_value)
    }

    /// Set the value from absolute units, clamping into the range.
    ///
    /// ```rust
    /// use qknobs_core::{ContinuousControl, ValueRange};
    ///
    /// let mut control = ContinuousControl::new(ValueRange::new(-48.0, 6.0), 0.5);
    /// control.set_absolute_value(100.0);
    /// assert_eq!(control.absolute_value(), 6.0);
    /// ```
    pub fn set_absolute_value(&mut self, absolute: f64) {
        let normalized = self.range.to_normalized(absolute);
        self.write_value(normalized);
    }

    /// Move back to the default value.
    ///
    /// Works on inactive controls too and ends any gesture in progress, so a
    /// later drag event anchors at the default instead of the old position.
    pub fn reset(&mut self) {
        self.drag_anchor = None;
        self.value = self.default_value;
        self.events.push(ControlEvent::Reset {
            value: self.default_value,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(value = self.default_value, "control reset");
    }

    // -- Snapping ----------------------------------------------------------

    /// Snap configuration.
    #[inline]
    pub fn snap(&self) -> SnapSettings {
        self.snap
    }

    /// Whether drag-end snapping is on.
    #[inline]
    pub fn snap_enabled(&self) -> bool {
        self.snap.enabled
    }

    /// Switch drag-end snapping on or off.
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        if self.snap.enabled == enabled {
            return;
        }
        self.snap.enabled = enabled;
        self.events.push(ControlEvent::SnapToggled { enabled });
    }

    /// Flip the snapping switch and return the new state.
    pub fn toggle_snapping(&mut self) -> bool {
        self.set_snap_enabled(!self.snap.enabled);
        self.snap.enabled
    }

    /// Jump onto the detent regardless of distance or the snapping switch.
    pub fn return_to_snap_point(&mut self) {
        self.drag_anchor = None;
        self.value = self.snap.value;
        self.events.push(ControlEvent::Snapped {
            value: self.snap.value,
        });
    }

    // -- Gestures ----------------------------------------------------------

    /// Whether a drag gesture is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Value captured at gesture start, present only while dragging.
    #[inline]
    pub fn drag_anchor(&self) -> Option<f64> {
        self.drag_anchor
    }

    /// Apply a drag translation measured from the gesture start.
    ///
    /// `sensitivity` is the translation (in pixels) that sweeps the full
    /// range. A zero, negative, or non-finite sensitivity, or a non-finite
    /// delta, leaves the value at the anchor. Returns the resulting normalized
    /// value.
    pub fn on_drag_changed(&mut self, delta_from_start: f64, sensitivity: f64) -> f64 {
        if !self.active {
            return self.value;
        }
        let anchor = self.begin_drag();
        let usable = delta_from_start.is_finite() && sensitivity.is_finite() && sensitivity > 0.0;
        let target = if usable {
            clamp01(anchor + delta_from_start / sensitivity)
        } else {
            anchor
        };
        self.write_value(target);
        self.value
    }

    /// Finish the gesture: apply the detent if within range, clear the anchor.
    pub fn on_drag_ended(&mut self) -> DragOutcome {
        if !self.active {
            self.drag_anchor = None;
            return DragOutcome::Ignored;
        }

        let outcome = if self.snap.should_snap(self.value) {
            self.value = self.snap.value;
            self.events.push(ControlEvent::Snapped {
                value: self.snap.value,
            });
            #[cfg(feature = "tracing")]
            tracing::debug!(value = self.snap.value, "control snapped to detent");
            DragOutcome::Snapped {
                value: self.snap.value,
            }
        } else {
            DragOutcome::Released { value: self.value }
        };

        if self.drag_anchor.take().is_some() {
            self.events.push(ControlEvent::DragEnded);
        }
        outcome
    }

    /// Capture the anchor on the first event of a gesture and return it.
    pub(crate) fn begin_drag(&mut self) -> f64 {
        if let Some(anchor) = self.drag_anchor {
            return anchor;
        }
        let anchor = self.value;
        self.drag_anchor = Some(anchor);
        self.events.push(ControlEvent::DragBegan { anchor });
        #[cfg(feature = "tracing")]
        tracing::debug!(anchor, "drag began");
        anchor
    }

    /// Write an already clamped value during a gesture.
    pub(crate) fn write_value(&mut self, value: f64) {
        if value == self.value {
            return;
        }
        self.value = value;
        self.events.push(ControlEvent::ValueChanged { value });
    }

    // -- Activity & feedback -----------------------------------------------

    /// Whether the control reacts to gestures.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable or disable gesture handling. Disabling drops any pending anchor.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.drag_anchor = None;
        }
    }

    /// Whether events should trigger haptic feedback.
    #[inline]
    pub fn feedback_enabled(&self) -> bool {
        self.feedback_enabled
    }

    /// Enable or disable haptic feedback.
    pub fn set_feedback_enabled(&mut self, enabled: bool) {
        self.feedback_enabled = enabled;
    }

    /// Feedback for `event`, honouring [`feedback_enabled`](Self::feedback_enabled).
    pub fn feedback_for(&self, event: &ControlEvent) -> Option<Feedback> {
        if self.feedback_enabled {
            event.feedback()
        } else {
            None
        }
    }

    // -- Events ------------------------------------------------------------

    /// Pending change notifications.
    #[inline]
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Remove and yield pending change notifications in order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ControlEvent> + '_ {
        self.events.drain()
    }
}

impl Default for ContinuousControl {
    fn default() -> Self {
        Self::new(ValueRange::unit(), 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn knob() -> ContinuousControl {
        ContinuousControl::new(ValueRange::new(0.0, 11.0), 0.5)
    }

    #[test]
    fn new_starts_at_default_with_detent_there() {
        let control = knob();
        assert_eq!(control.value(), 0.5);
        assert_eq!(control.snap().value, 0.5);
        assert!(control.snap_enabled());
        assert!(!control.is_dragging());
    }

    #[test]
    fn default_is_clamped() {
        let control = ContinuousControl::new(ValueRange::unit(), 4.0);
        assert_eq!(control.value(), 1.0);
        assert_eq!(control.default_value(), 1.0);
    }

    #[test]
    fn drag_uses_anchor_from_gesture_start() {
        let mut control = knob().with_snap(SnapSettings::disabled(0.5));
        control.on_drag_changed(15.0, 150.0);
        assert_eq!(control.drag_anchor(), Some(0.5));
        control.on_drag_changed(30.0, 150.0);
        assert!((control.value() - 0.7).abs() < 1e-12);
        assert_eq!(control.drag_anchor(), Some(0.5));
    }

    #[test]
    fn drag_clamps_to_unit_interval() {
        let mut control = knob();
        control.on_drag_changed(10_000.0, 150.0);
        assert_eq!(control.value(), 1.0);
        control.on_drag_changed(-10_000.0, 150.0);
        assert_eq!(control.value(), 0.0);
    }

    #[test]
    fn zero_sensitivity_holds_anchor() {
        let mut control = knob();
        control.on_drag_changed(40.0, 0.0);
        assert_eq!(control.value(), 0.5);
        control.on_drag_changed(40.0, f64::NAN);
        assert_eq!(control.value(), 0.5);
    }

    #[test]
    fn non_finite_delta_holds_anchor() {
        let mut control = knob().with_snap(SnapSettings::disabled(0.5));
        control.set_value(0.7);
        control.on_drag_changed(30.0, 150.0);
        control.on_drag_changed(f64::NAN, 150.0);
        assert_eq!(control.value(), 0.7);
        control.on_drag_changed(f64::NEG_INFINITY, 150.0);
        assert_eq!(control.value(), 0.7);
        assert_eq!(control.drag_anchor(), Some(0.7));
    }

    #[test]
    fn drag_end_clears_anchor() {
        let mut control = knob().with_snap(SnapSettings::disabled(0.5));
        control.on_drag_changed(30.0, 150.0);
        let outcome = control.on_drag_ended();
        assert!(matches!(outcome, DragOutcome::Released { .. }));
        assert!(!control.is_dragging());

        // Next gesture anchors at the new value.
        control.on_drag_changed(0.0, 150.0);
        assert!((control.drag_anchor().unwrap() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn snap_within_threshold() {
        let mut control = knob();
        control.on_drag_changed(6.0, 150.0); // 0.54
        assert_eq!(
            control.on_drag_ended(),
            DragOutcome::Snapped { value: 0.5 }
        );
        assert_eq!(control.value(), 0.5);
    }

    #[test]
    fn no_snap_outside_threshold() {
        let mut control = knob();
        control.on_drag_changed(15.0, 150.0); // 0.6
        control.on_drag_ended();
        assert!((control.value() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn no_snap_exactly_at_threshold() {
        let mut control = ContinuousControl::new(ValueRange::unit(), 0.5)
            .with_snap(SnapSettings::new(0.5, 0.25));
        control.set_value(0.75);
        control.on_drag_ended();
        assert_eq!(control.value(), 0.75);
    }

    #[test]
    fn no_snap_when_disabled() {
        let mut control = knob();
        control.set_snap_enabled(false);
        control.on_drag_changed(3.0, 150.0); // 0.52
        control.on_drag_ended();
        assert!((control.value() - 0.52).abs() < 1e-12);
    }

    #[test]
    fn reset_restores_default() {
        let mut control = knob();
        control.set_value(0.9);
        control.reset();
        assert_eq!(control.value(), 0.5);
    }

    #[test]
    fn absolute_round_trip() {
        let mut control = knob();
        control.set_absolute_value(8.25);
        assert!((control.absolute_value() - 8.25).abs() < 1e-12);
        control.set_absolute_value(-3.0);
        assert_eq!(control.absolute_value(), 0.0);
    }

    #[test]
    fn degenerate_range_reports_min() {
        let mut control = ContinuousControl::new(ValueRange::new(2.0, 2.0), 0.3);
        assert_eq!(control.absolute_value(), 2.0);
        control.set_absolute_value(50.0);
        assert_eq!(control.value(), 0.0);
        assert_eq!(control.absolute_value(), 2.0);
    }

    #[test]
    fn toggle_snapping_flips_and_reports() {
        let mut control = knob();
        assert!(!control.toggle_snapping());
        assert!(control.toggle_snapping());
        let events: Vec<_> = control.drain_events().collect();
        assert_eq!(
            events,
            [
                ControlEvent::SnapToggled { enabled: false },
                ControlEvent::SnapToggled { enabled: true },
            ]
        );
    }

    #[test]
    fn return_to_snap_point_ignores_distance() {
        let mut control = knob();
        control.set_snap_enabled(false);
        control.set_value(0.0);
        control.return_to_snap_point();
        assert_eq!(control.value(), 0.5);
    }

    #[test]
    fn inactive_control_ignores_gestures() {
        let mut control = knob().with_active(false);
        control.on_drag_changed(75.0, 150.0);
        assert_eq!(control.value(), 0.5);
        assert_eq!(control.on_drag_ended(), DragOutcome::Ignored);
        assert!(control.events().is_empty());

        // Programmatic writes still work.
        control.set_value(0.2);
        assert_eq!(control.value(), 0.2);
        control.reset();
        assert_eq!(control.value(), 0.5);
    }

    #[test]
    fn reset_mid_gesture_reanchors_next_drag() {
        let mut control = knob().with_snap(SnapSettings::disabled(0.5));
        control.on_drag_changed(-60.0, 150.0); // 0.1
        control.reset();
        assert!(!control.is_dragging());
        assert_eq!(control.value(), 0.5);

        control.on_drag_changed(-75.0, 150.0);
        assert_eq!(control.drag_anchor(), Some(0.5));
        assert_eq!(control.value(), 0.0);
    }

    #[test]
    fn return_to_snap_point_ends_gesture() {
        let mut control = ContinuousControl::new(ValueRange::unit(), 0.2)
            .with_snap(SnapSettings::new(0.8, 0.05));
        control.on_drag_changed(30.0, 150.0);
        assert!(control.is_dragging());
        control.return_to_snap_point();
        assert!(!control.is_dragging());
        assert_eq!(control.value(), 0.8);
    }

    #[test]
    fn gesture_event_sequence() {
        let mut control = knob();
        control.on_drag_changed(4.5, 150.0); // 0.53
        control.on_drag_ended();

        let events: Vec<_> = control.drain_events().collect();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], ControlEvent::DragBegan { anchor: 0.5 });
        assert!(matches!(events[1], ControlEvent::ValueChanged { .. }));
        assert_eq!(events[2], ControlEvent::Snapped { value: 0.5 });
        assert_eq!(events[3], ControlEvent::DragEnded);
    }

    #[test]
    fn feedback_respects_switch() {
        let control = knob().with_feedback(false);
        assert_eq!(
            control.feedback_for(&ControlEvent::Snapped { value: 0.5 }),
            None
        );
        let control = knob();
        assert!(
            control
                .feedback_for(&ControlEvent::Snapped { value: 0.5 })
                .is_some()
        );
    }

    #[test]
    fn unchanged_value_emits_nothing() {
        let mut control = knob();
        control.set_value(0.5);
        assert!(control.events().is_empty());
    }
}
