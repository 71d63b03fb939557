//! QKnobs Core - normalized control value model for audio-style controls
//!
//! This crate holds the state and gesture arithmetic behind rotary knobs,
//! discrete selector knobs, and vertical faders. It has no rendering code:
//! a host UI framework feeds it drag translations, double-taps, and container
//! sizes, and reads back normalized values, angles, and pixel offsets.
//!
//! # Core Abstractions
//!
//! ## Continuous Controls
//!
//! - [`ContinuousControl`] - Normalized value in \[0, 1\] with drag anchor and snap-to-detent
//! - [`RadialKnobControl`] - Continuous control mapped onto an [`AngleRange`]
//! - [`FaderControl`] - Continuous control mapped onto a vertical track ([`FaderGeometry`])
//!
//! ## Discrete Controls
//!
//! - [`DiscreteControl`] - Selection from a fixed option list, stepped by drag distance
//!
//! ## Mapping
//!
//! - [`ValueRange`] - Normalized ↔ absolute conversion (guarded for empty ranges)
//! - [`SnapSettings`] - Detent position and capture threshold
//! - [`angle_for`], [`discrete_angle`], [`offset_for`], [`value_for_offset`] - Pure geometry
//!
//! ## Change Notification
//!
//! Every control records what happened to it as [`ControlEvent`]s in an
//! [`EventQueue`]. The owning presentation layer drains the queue after
//! delivering input, forwards [`Feedback`] to a haptics collaborator, and
//! pushes absolute values into whatever aggregates the controls.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for option lists and
//! the event queue). Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qknobs-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use qknobs_core::{RadialKnobControl, ValueRange};
//!
//! let mut gain = RadialKnobControl::new(ValueRange::new(0.0, 11.0), 0.5);
//!
//! // Drag up by 75 px: half of the 150 px full-scale throw.
//! gain.on_drag_changed(-75.0);
//! gain.on_drag_ended();
//!
//! assert_eq!(gain.control().value(), 1.0);
//! assert_eq!(gain.angle(), 135.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod continuous;
pub mod discrete;
pub mod error;
pub mod event;
pub mod fader;
pub mod mapping;
pub mod math;
pub mod radial;
pub mod range;
pub mod snap;

pub use continuous::{ContinuousControl, DragOutcome};
pub use discrete::DiscreteControl;
pub use error::ControlError;
pub use event::{ControlEvent, EventQueue, Feedback, ImpactStrength};
pub use fader::{FaderControl, FaderGeometry};
pub use mapping::{
    AngleRange, angle_for, discrete_angle, discrete_step_angle, offset_for, value_for_offset,
};
pub use math::{clamp01, lerp, positive_modulo};
pub use radial::{RADIAL_DRAG_SENSITIVITY, RadialKnobControl};
pub use range::ValueRange;
pub use snap::SnapSettings;
