//! Forwarding control events to a feedback device.
//!
//! Controls queue [`ControlEvent`]s; the panel that owns them drains each
//! queue once per frame with [`drain_with_feedback`], which hands the
//! events back for state synchronization and plays the matching
//! [`Feedback`] on a [`FeedbackSink`] (when the control has feedback
//! enabled).

use qknobs_core::{
    ContinuousControl, ControlEvent, DiscreteControl, FaderControl, Feedback, RadialKnobControl,
};

/// Receiver for haptic or visual feedback requests.
pub trait FeedbackSink {
    /// Play one feedback request.
    fn emit(&mut self, feedback: Feedback);
}

/// Logs feedback with `tracing` instead of driving hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFeedback;

impl FeedbackSink for TracingFeedback {
    fn emit(&mut self, feedback: Feedback) {
        tracing::debug!(?feedback, "control feedback");
    }
}

/// Collects feedback, mostly useful in tests.
impl FeedbackSink for Vec<Feedback> {
    fn emit(&mut self, feedback: Feedback) {
        self.push(feedback);
    }
}

/// A control that queues events and decides which of them produce feedback.
pub trait EventSource {
    /// Remove and return all pending events, oldest first.
    fn take_events(&mut self) -> Vec<ControlEvent>;

    /// Feedback for `event`, honoring the control's feedback switch.
    fn feedback_for(&self, event: &ControlEvent) -> Option<Feedback>;
}

impl EventSource for ContinuousControl {
    fn take_events(&mut self) -> Vec<ControlEvent> {
        self.drain_events().collect()
    }

    fn feedback_for(&self, event: &ControlEvent) -> Option<Feedback> {
        ContinuousControl::feedback_for(self, event)
    }
}

impl EventSource for RadialKnobControl {
    fn take_events(&mut self) -> Vec<ControlEvent> {
        self.control_mut().take_events()
    }

    fn feedback_for(&self, event: &ControlEvent) -> Option<Feedback> {
        self.control().feedback_for(event)
    }
}

impl EventSource for FaderControl {
    fn take_events(&mut self) -> Vec<ControlEvent> {
        self.control_mut().take_events()
    }

    fn feedback_for(&self, event: &ControlEvent) -> Option<Feedback> {
        self.control().feedback_for(event)
    }
}

impl<T: PartialEq> EventSource for DiscreteControl<T> {
    fn take_events(&mut self) -> Vec<ControlEvent> {
        self.drain_events().collect()
    }

    fn feedback_for(&self, event: &ControlEvent) -> Option<Feedback> {
        DiscreteControl::feedback_for(self, event)
    }
}

/// Drain `source`, play its feedback on `sink`, and return the events.
pub fn drain_with_feedback<S: EventSource + ?Sized>(
    source: &mut S,
    sink: &mut dyn FeedbackSink,
) -> Vec<ControlEvent> {
    let events = source.take_events();
    for event in &events {
        if let Some(feedback) = source.feedback_for(event) {
            sink.emit(feedback);
        }
    }
    events
}
