//! Discrete selector knob: a fixed, ordered list of options.
//!
//! Options sit evenly around a circle (see [`discrete_angle`]). A drag moves
//! the selection one option per `step_threshold` pixels of travel, measured
//! from the gesture start, and wraps around both ends:
//!
//! ```text
//! steps = round(delta / step_threshold)
//! index = positive_mod(anchor_index - steps, option_count)
//! ```
//!
//! Dragging down (positive delta) walks towards lower indices.
//!
//! ```rust
//! use qknobs_core::DiscreteControl;
//!
//! let mut selector = DiscreteControl::new(["delay", "reverb", "chorus", "fuzz"]).unwrap();
//! selector.on_drag_changed_by(50.0, 10.0); // five steps down from index 0
//! selector.on_drag_ended();
//! assert_eq!(*selector.current(), "fuzz");
//! assert_eq!(selector.angle_for(&"reverb"), -90.0);
//! ```
//!
//! [`discrete_angle`]: crate::mapping::discrete_angle

use alloc::vec::Vec;

use crate::error::ControlError;
use crate::event::{ControlEvent, EventQueue, Feedback};
use crate::mapping::{discrete_angle, discrete_step_angle};
use crate::math::{positive_modulo, round};

/// Selector state over options of type `T`.
#[derive(Debug, Clone)]
pub struct DiscreteControl<T> {
    options: Vec<T>,
    /// Index into `options`; always valid because `options` is never empty.
    selected: usize,
    /// Pixels of drag travel per option step.
    step_threshold: f64,
    drag_anchor_index: Option<usize>,
    drag_anchor_position: Option<f64>,
    active: bool,
    feedback_enabled: bool,
    events: EventQueue,
}

impl<T: PartialEq> DiscreteControl<T> {
    /// Default drag travel per step, in pixels.
    pub const DEFAULT_STEP_THRESHOLD: f64 = 10.0;

    /// Create a selector over `options`, selecting the first one.
    ///
    /// Returns [`ControlError::NoOptions`] for an empty list.
    pub fn new(options: impl IntoIterator<Item = T>) -> Result<Self, ControlError> {
        let options: Vec<T> = options.into_iter().collect();
        if options.is_empty() {
            return Err(ControlError::NoOptions);
        }
        Ok(Self {
            options,
            selected: 0,
            step_threshold: Self::DEFAULT_STEP_THRESHOLD,
            drag_anchor_index: None,
            drag_anchor_position: None,
            active: true,
            feedback_enabled: true,
            events: EventQueue::new(),
        })
    }

    /// Start at `index` instead of the first option.
    pub fn with_selected_index(mut self, index: usize) -> Result<Self, ControlError> {
        self.check_index(index)?;
        self.selected = index;
        Ok(self)
    }

    /// Set drag travel per step.
    pub fn with_step_threshold(mut self, step_threshold: f64) -> Self {
        self.step_threshold = step_threshold;
        self
    }

    /// Set whether the control reacts to gestures.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set whether selection changes produce haptic feedback.
    pub fn with_feedback(mut self, enabled: bool) -> Self {
        self.feedback_enabled = enabled;
        self
    }

    // -- Options & selection -------------------------------------------------

    /// All options in their fixed order.
    #[inline]
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Number of options (never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false`; construction rejects empty option lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Currently selected option.
    #[inline]
    pub fn current(&self) -> &T {
        &self.options[self.selected]
    }

    /// Index of the current selection.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.selected
    }

    /// Selection index as a plain number, for code that treats every control
    /// as a value source.
    #[inline]
    pub fn value(&self) -> f64 {
        self.selected as f64
    }

    /// Position of `option` in the list.
    pub fn index_of(&self, option: &T) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }

    /// Select `option`. Returns `false` (and changes nothing) if it is not in the list.
    pub fn select(&mut self, option: &T) -> bool {
        match self.index_of(option) {
            Some(index) => {
                self.write_index(index);
                true
            }
            None => false,
        }
    }

    /// Select by index.
    pub fn select_index(&mut self, index: usize) -> Result<(), ControlError> {
        self.check_index(index)?;
        self.write_index(index);
        Ok(())
    }

    // -- Geometry ------------------------------------------------------------

    /// Angle between neighbouring options.
    #[inline]
    pub fn step_angle(&self) -> f64 {
        discrete_step_angle(self.options.len())
    }

    /// Angle of `option`; `0.0` if it is not in the list.
    pub fn angle_for(&self, option: &T) -> f64 {
        self.index_of(option)
            .map_or(0.0, |index| self.angle_for_index(index))
    }

    /// Angle of the option at `index`.
    #[inline]
    pub fn angle_for_index(&self, index: usize) -> f64 {
        discrete_angle(index, self.options.len())
    }

    /// Pointer angle for the current selection.
    #[inline]
    pub fn current_angle(&self) -> f64 {
        self.angle_for_index(self.selected)
    }

    // -- Gestures ------------------------------------------------------------

    /// Drag travel per step.
    #[inline]
    pub fn step_threshold(&self) -> f64 {
        self.step_threshold
    }

    /// Whether a drag gesture is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor_index.is_some()
    }

    /// Index captured at gesture start.
    #[inline]
    pub fn drag_anchor_index(&self) -> Option<usize> {
        self.drag_anchor_index
    }

    /// Pointer position captured at gesture start by [`on_drag_moved_to`](Self::on_drag_moved_to).
    #[inline]
    pub fn drag_anchor_position(&self) -> Option<f64> {
        self.drag_anchor_position
    }

    /// Apply a drag translation from the gesture start using the configured
    /// step threshold. Returns the selected index.
    pub fn on_drag_changed(&mut self, pixel_delta_from_start: f64) -> usize {
        self.on_drag_changed_by(pixel_delta_from_start, self.step_threshold)
    }

    /// Apply a drag translation from the gesture start with an explicit step
    /// threshold. A zero, negative, or non-finite threshold never steps.
    pub fn on_drag_changed_by(&mut self, pixel_delta_from_start: f64, step_threshold: f64) -> usize {
        if !self.active {
            return self.selected;
        }
        let anchor = self.begin_drag();
        let steps = steps_moved(pixel_delta_from_start, step_threshold);
        let index = positive_modulo((anchor as i64).saturating_sub(steps), self.options.len());
        self.write_index(index);
        self.selected
    }

    /// Apply an absolute pointer position (screen pixels). The first call of a
    /// gesture records the position as the anchor.
    pub fn on_drag_moved_to(&mut self, position: f64) -> usize {
        if !self.active {
            return self.selected;
        }
        let origin = *self.drag_anchor_position.get_or_insert(position);
        self.on_drag_changed(position - origin)
    }

    /// Finish the gesture. Selection is already quantized, so this only
    /// clears the anchors.
    pub fn on_drag_ended(&mut self) {
        self.drag_anchor_position = None;
        if self.drag_anchor_index.take().is_some() {
            self.events.push(ControlEvent::DragEnded);
        }
    }

    fn begin_drag(&mut self) -> usize {
        if let Some(anchor) = self.drag_anchor_index {
            return anchor;
        }
        let anchor = self.selected;
        self.drag_anchor_index = Some(anchor);
        self.events.push(ControlEvent::DragBegan {
            anchor: anchor as f64,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(anchor, "selector drag began");
        anchor
    }

    fn write_index(&mut self, index: usize) {
        if index == self.selected {
            return;
        }
        self.selected = index;
        self.events.push(ControlEvent::SelectionChanged { index });
        #[cfg(feature = "tracing")]
        tracing::debug!(index, "selection changed");
    }

    fn check_index(&self, index: usize) -> Result<(), ControlError> {
        if index < self.options.len() {
            Ok(())
        } else {
            Err(ControlError::IndexOutOfRange {
                index,
                len: self.options.len(),
            })
        }
    }

    // -- Activity, feedback, events -----------------------------------------

    /// Whether the control reacts to gestures.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable or disable gesture handling. Disabling drops any pending anchors.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.drag_anchor_index = None;
            self.drag_anchor_position = None;
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

/// `round(delta / threshold)`, or zero when the threshold cannot divide.
fn steps_moved(delta: f64, threshold: f64) -> i64 {
    if !(threshold.is_finite() && threshold > 0.0) || delta.is_nan() {
        return 0;
    }
    round(delta / threshold) as i64
}
