//! Change notification for control state.
//!
//! Controls never call out to observers directly. Each mutation appends a
//! [`ControlEvent`] to the control's [`EventQueue`]; the owner drains the
//! queue once per input event (or once per frame) and reacts: updating an
//! aggregate, redrawing, or forwarding [`Feedback`] to the platform haptics.
//!
//! ```rust
//! use qknobs_core::{ContinuousControl, ControlEvent, ValueRange};
//!
//! let mut control = ContinuousControl::new(ValueRange::unit(), 0.5);
//! control.set_value(0.8);
//!
//! let events: Vec<ControlEvent> = control.drain_events().collect();
//! assert_eq!(events, vec![ControlEvent::ValueChanged { value: 0.8 }]);
//! ```

use alloc::collections::VecDeque;

/// Something that happened to a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// A drag gesture started; carries the anchor captured at gesture start.
    DragBegan {
        /// Normalized value (continuous) or index (discrete) at gesture start.
        anchor: f64,
    },
    /// The normalized value changed.
    ValueChanged {
        /// New normalized value.
        value: f64,
    },
    /// The value was pulled onto the detent at drag end.
    Snapped {
        /// Detent position the control now rests at.
        value: f64,
    },
    /// The value was set back to the control's default.
    Reset {
        /// Default normalized value.
        value: f64,
    },
    /// Snapping was switched on or off.
    SnapToggled {
        /// New `snap.enabled` state.
        enabled: bool,
    },
    /// A discrete control moved to another option.
    SelectionChanged {
        /// Index of the new selection.
        index: usize,
    },
    /// The drag gesture finished.
    DragEnded,
}

/// Strength of an impact feedback pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImpactStrength {
    /// Barely noticeable tap.
    #[default]
    Light,
    /// Regular tap.
    Medium,
    /// Strong tap.
    Heavy,
}

/// Haptic/visual feedback request derived from a [`ControlEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// A physical "tap", e.g. landing on a detent.
    Impact(ImpactStrength),
    /// A subtle tick for moving between discrete options.
    Selection,
    /// Confirmation, e.g. a reset to default.
    Success,
}

impl ControlEvent {
    /// Feedback the platform should play for this event, if any.
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            Self::Snapped { .. } => Some(Feedback::Impact(ImpactStrength::Light)),
            Self::SelectionChanged { .. } => Some(Feedback::Selection),
            Self::Reset { .. } => Some(Feedback::Success),
            Self::DragBegan { .. }
            | Self::ValueChanged { .. }
            | Self::SnapToggled { .. }
            | Self::DragEnded => None,
        }
    }

    /// Returns `true` when the event moved the control's position.
    pub fn is_value_change(&self) -> bool {
        matches!(
            self,
            Self::ValueChanged { .. }
                | Self::Snapped { .. }
                | Self::Reset { .. }
                | Self::SelectionChanged { .. }
        )
    }
}

/// Bounded FIFO of pending events.
///
/// When nobody drains the queue, the oldest events are dropped once
/// [`capacity`](Self::capacity) is reached, so an undrained control never
/// grows without bound.
#[derive(Debug, Clone)]
pub struct EventQueue {
    events: VecDeque<ControlEvent>,
    capacity: usize,
}

impl EventQueue {
    /// Default number of retained events.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create an empty queue with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty queue keeping at most `capacity` events (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of retained events.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pending events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append an event, evicting the oldest one when full.
    pub fn push(&mut self, event: ControlEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &ControlEvent> {
        self.events.iter()
    }

    /// Remove and yield all pending events in delivery order.
    pub fn drain(&mut self) -> impl Iterator<Item = ControlEvent> + '_ {
        self.events.drain(..)
    }

    /// Discard all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
