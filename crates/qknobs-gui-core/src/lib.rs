//! egui front end for QKnobs controls.
//!
//! This crate renders the control state from [`qknobs_core`] and feeds
//! pointer gestures back into it. The widgets hold no state of their own:
//! each frame they borrow a control, translate the pointer into the
//! control's drag operations, and paint through a pluggable style.
//!
//! # Modules
//!
//! - [`widgets`] - [`RadialKnob`], [`DiscreteKnob`] and [`Fader`] egui widgets
//! - [`style`] - Basic, Modern and Wood painters behind style traits
//! - [`theme`] - Colors and egui theme application
//! - [`feedback`] - Draining control events into a [`FeedbackSink`]
//! - [`format`] - Value label formatting
//! - [`paint`] - Angle-based painting helpers

pub mod feedback;
pub mod format;
pub mod paint;
pub mod style;
pub mod theme;
pub mod widgets;

pub use feedback::{EventSource, FeedbackSink, TracingFeedback, drain_with_feedback};
pub use format::{ValueFormat, option_label};
pub use style::{
    Basic, DiscreteKnobStyle, DiscreteKnobVisual, FaderStyle, FaderVisual, Modern,
    ParseStyleError, RadialKnobStyle, RadialKnobVisual, StyleKind, Wood,
};
pub use theme::Theme;
pub use widgets::{DiscreteKnob, Fader, RadialKnob};
