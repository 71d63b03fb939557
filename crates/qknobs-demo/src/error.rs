//! Errors raised while setting up the demo.

use qknobs_config::{ConfigError, ValidationError};
use qknobs_gui_core::ParseStyleError;
use thiserror::Error;

/// Anything that can stop the demo from starting.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Layout could not be found or loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Layout loaded but its controls could not be built.
    #[error("invalid layout: {0}")]
    Layout(#[from] ValidationError),

    /// Style name not recognized.
    #[error(transparent)]
    Style(#[from] ParseStyleError),

    /// Settings could not be serialized.
    #[error("settings serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
