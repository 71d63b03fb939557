//! Control and panel layout configuration for QKnobs.
//!
//! This crate describes knobs, faders and selectors in TOML, validates the
//! numbers, and builds the matching [`qknobs_core`] controls.
//!
//! # Features
//!
//! - **Control configs**: [`KnobConfig`], [`FaderConfig`], [`SelectorConfig`]
//! - **Layouts**: load and save [`PanelLayout`] files
//! - **Validation**: range, threshold, option and id checks
//! - **Paths**: platform-specific user layout directory
//! - **Factory layouts**: built-in amplifier and mixer-channel panels
//!
//! # Example
//!
//! ```rust
//! use qknobs_config::{FaderConfig, KnobConfig, PanelLayout};
//!
//! let layout = PanelLayout::new("Channel")
//!     .with_knob(KnobConfig::new("gain", 0.0, 11.0, 5.5).with_label("Gain"))
//!     .with_fader(FaderConfig::new("volume", -48.0, 6.0, 0.0));
//! layout.validate().unwrap();
//!
//! let volume = layout.fader("volume").unwrap().build().unwrap();
//! assert_eq!(volume.control().absolute_value(), 0.0);
//! ```

mod control_config;
mod error;
mod layout;

/// Platform-specific paths for layouts and configuration.
pub mod paths;

/// Control and layout validation.
pub mod validation;

/// Factory layouts bundled with the library.
pub mod factory_layouts;

pub use control_config::{FaderConfig, KnobConfig, SelectorConfig, SnapConfig};
pub use error::ConfigError;
pub use factory_layouts::{
    FACTORY_LAYOUT_NAMES, factory_layout_names, factory_layouts, get_factory_layout,
    is_factory_layout,
};
pub use layout::PanelLayout;
pub use paths::{
    ensure_user_layouts_dir, find_layout, layout_name_from_path, list_user_layouts,
    user_config_dir, user_layouts_dir,
};
pub use validation::{
    STYLE_NAMES, ValidationError, ValidationResult, validate_fader, validate_knob,
    validate_layout, validate_selector, validate_style,
};

/// Resolve a layout by path or name and validate it.
///
/// Looks for a file first (a path, then the user layouts directory), then
/// falls back to the factory layouts.
///
/// # Errors
///
/// [`ConfigError::LayoutNotFound`] when nothing matches, or the load or
/// validation error of the layout that was found.
pub fn resolve_layout(name: &str) -> Result<PanelLayout, ConfigError> {
    if let Some(path) = find_layout(name) {
        return PanelLayout::load_validated(path);
    }
    let layout =
        get_factory_layout(name).ok_or_else(|| ConfigError::LayoutNotFound(name.to_string()))?;
    layout.validate()?;
    Ok(layout)
}
