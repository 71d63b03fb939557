//! QKnobs demo: amplifier and mixer panels driven by the QKnobs controls.
//!
//! The binary is a thin shell around [`QKnobsApp`]; everything that does not
//! need a window ([`Panel`], [`DemoState`], [`Settings`]) lives here so it can
//! be tested headless.

pub mod app;
pub mod error;
pub mod panel;
pub mod settings;

pub use app::{DemoState, QKnobsApp, View};
pub use error::DemoError;
pub use panel::{Panel, PanelEvent};
pub use settings::{AmplifierSettings, MixerChannelSettings, Settings};
