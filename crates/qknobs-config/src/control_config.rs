//! Construction-time configuration for individual controls.
//!
//! Configs describe a control in absolute units (the values a user reads on
//! a label) and are turned into core controls with `build()`, which validates
//! first. Only the snap threshold is normalized, since it measures distance
//! along the control's travel.

use qknobs_core::{
    AngleRange, ContinuousControl, DiscreteControl, FaderControl, FaderGeometry,
    RADIAL_DRAG_SENSITIVITY, RadialKnobControl, SnapSettings, ValueRange,
};
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError, ValidationResult};

/// Snap-to-detent configuration.
///
/// ```toml
/// [knobs.snap]
/// enabled = true
/// value = 5.5       # absolute; omitted means "the default value"
/// threshold = 0.05  # normalized
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SnapConfig {
    /// Whether the control snaps at drag end.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Detent position in absolute units. `None` snaps to the default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Capture distance in normalized units.
    #[serde(default = "default_snap_threshold")]
    pub threshold: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            value: None,
            threshold: SnapSettings::DEFAULT_THRESHOLD,
        }
    }
}

impl SnapConfig {
    /// Resolve to normalized snap settings for `range`.
    pub fn to_settings(&self, range: ValueRange, default_absolute: f64) -> SnapSettings {
        let value = range.to_normalized(self.value.unwrap_or(default_absolute));
        SnapSettings {
            enabled: self.enabled,
            ..SnapSettings::new(value, self.threshold)
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_snap_threshold() -> f64 {
    SnapSettings::DEFAULT_THRESHOLD
}

fn default_knob_max() -> f64 {
    11.0
}

fn default_knob_value() -> f64 {
    5.5
}

fn default_min_angle() -> f64 {
    AngleRange::STANDARD.min
}

fn default_max_angle() -> f64 {
    AngleRange::STANDARD.max
}

fn default_sensitivity() -> f64 {
    RADIAL_DRAG_SENSITIVITY
}

fn default_fader_min() -> f64 {
    -48.0
}

fn default_fader_max() -> f64 {
    6.0
}

fn default_handle_width() -> f64 {
    FaderGeometry::default().handle_width
}

fn default_handle_height() -> f64 {
    FaderGeometry::default().handle_height
}

fn default_step_threshold() -> f64 {
    DiscreteControl::<String>::DEFAULT_STEP_THRESHOLD
}

/// Radial knob configuration.
///
/// # TOML Format
///
/// ```toml
/// [[knobs]]
/// id = "gain"
/// label = "Gain"
/// min_value = 0.0
/// max_value = 11.0
/// default_value = 5.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnobConfig {
    /// Identifier, unique within a layout.
    pub id: String,

    /// Display label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    /// Absolute value at the counter-clockwise end stop.
    #[serde(default)]
    pub min_value: f64,

    /// Absolute value at the clockwise end stop.
    #[serde(default = "default_knob_max")]
    pub max_value: f64,

    /// Absolute default (restored on double-tap).
    #[serde(default = "default_knob_value")]
    pub default_value: f64,

    /// Snap configuration.
    #[serde(default)]
    pub snap: SnapConfig,

    /// Pointer angle at the minimum, in degrees.
    #[serde(default = "default_min_angle")]
    pub min_angle: f64,

    /// Pointer angle at the maximum, in degrees.
    #[serde(default = "default_max_angle")]
    pub max_angle: f64,

    /// Pixels of vertical drag for full travel.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
}

impl KnobConfig {
    /// Create a knob config with the standard sweep and sensitivity.
    pub fn new(id: impl Into<String>, min_value: f64, max_value: f64, default_value: f64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            min_value,
            max_value,
            default_value,
            snap: SnapConfig::default(),
            min_angle: default_min_angle(),
            max_angle: default_max_angle(),
            sensitivity: default_sensitivity(),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the pointer sweep.
    pub fn with_angles(mut self, min_angle: f64, max_angle: f64) -> Self {
        self.min_angle = min_angle;
        self.max_angle = max_angle;
        self
    }

    /// Set the drag sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Replace the snap configuration.
    pub fn with_snap(mut self, snap: SnapConfig) -> Self {
        self.snap = snap;
        self
    }

    /// Set the snap detent (absolute).
    pub fn with_snap_value(mut self, value: f64) -> Self {
        self.snap.value = Some(value);
        self
    }

    /// Set the snap threshold (normalized).
    pub fn with_snap_threshold(mut self, threshold: f64) -> Self {
        self.snap.threshold = threshold;
        self
    }

    /// Enable or disable snapping.
    pub fn with_snap_enabled(mut self, enabled: bool) -> Self {
        self.snap.enabled = enabled;
        self
    }

    /// The label, falling back to the id.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() { &self.id } else { &self.label }
    }

    /// Absolute value range.
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.min_value, self.max_value)
    }

    /// Validate this config.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_knob(self)
    }

    /// Validate and build the knob control.
    pub fn build(&self) -> Result<RadialKnobControl, ValidationError> {
        self.validate()?;
        let range = self.range();
        let control = ContinuousControl::with_absolute_default(range, self.default_value)
            .with_snap(self.snap.to_settings(range, self.default_value));
        Ok(RadialKnobControl::from_control(control)
            .with_angles(AngleRange::new(self.min_angle, self.max_angle))
            .with_sensitivity(self.sensitivity))
    }
}

/// Vertical fader configuration.
///
/// ```toml
/// [[faders]]
/// id = "volume"
/// min_value = -48.0
/// max_value = 6.0
/// default_value = 0.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaderConfig {
    /// Identifier, unique within a layout.
    pub id: String,

    /// Display label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    /// Absolute value at the bottom of the track.
    #[serde(default = "default_fader_min")]
    pub min_value: f64,

    /// Absolute value at the top of the track.
    #[serde(default = "default_fader_max")]
    pub max_value: f64,

    /// Absolute default.
    #[serde(default)]
    pub default_value: f64,

    /// Snap configuration.
    #[serde(default)]
    pub snap: SnapConfig,

    /// Handle width in pixels.
    #[serde(default = "default_handle_width")]
    pub handle_width: f64,

    /// Handle height in pixels.
    #[serde(default = "default_handle_height")]
    pub handle_height: f64,
}

impl FaderConfig {
    /// Create a fader config with the default handle size.
    pub fn new(id: impl Into<String>, min_value: f64, max_value: f64, default_value: f64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            min_value,
            max_value,
            default_value,
            snap: SnapConfig::default(),
            handle_width: default_handle_width(),
            handle_height: default_handle_height(),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the handle size.
    pub fn with_handle(mut self, width: f64, height: f64) -> Self {
        self.handle_width = width;
        self.handle_height = height;
        self
    }

    /// Replace the snap configuration.
    pub fn with_snap(mut self, snap: SnapConfig) -> Self {
        self.snap = snap;
        self
    }

    /// Set the snap detent (absolute).
    pub fn with_snap_value(mut self, value: f64) -> Self {
        self.snap.value = Some(value);
        self
    }

    /// Set the snap threshold (normalized).
    pub fn with_snap_threshold(mut self, threshold: f64) -> Self {
        self.snap.threshold = threshold;
        self
    }

    /// Enable or disable snapping.
    pub fn with_snap_enabled(mut self, enabled: bool) -> Self {
        self.snap.enabled = enabled;
        self
    }

    /// The label, falling back to the id.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() { &self.id } else { &self.label }
    }

    /// Absolute value range.
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.min_value, self.max_value)
    }

    /// Validate this config.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_fader(self)
    }

    /// Validate and build the fader control.
    ///
    /// The track height starts at the default geometry and is replaced once
    /// the host reports its container height.
    pub fn build(&self) -> Result<FaderControl, ValidationError> {
        self.validate()?;
        let range = self.range();
        let control = ContinuousControl::with_absolute_default(range, self.default_value)
            .with_snap(self.snap.to_settings(range, self.default_value));
        let geometry = FaderGeometry {
            handle_width: self.handle_width,
            handle_height: self.handle_height,
            ..FaderGeometry::default()
        };
        Ok(FaderControl::from_control(control).with_geometry(geometry))
    }
}

/// Discrete selector configuration with string options.
///
/// ```toml
/// [[selectors]]
/// id = "effect"
/// options = ["delay", "reverb", "chorus", "fuzz"]
/// default_option = "delay"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectorConfig {
    /// Identifier, unique within a layout.
    pub id: String,

    /// Display label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    /// Options in clockwise-from-top order of index.
    #[serde(default)]
    pub options: Vec<String>,

    /// Initially selected option. `None` selects the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_option: Option<String>,

    /// Pixels of drag per option step.
    #[serde(default = "default_step_threshold")]
    pub step_threshold: f64,
}

impl SelectorConfig {
    /// Create a selector config.
    pub fn new<S: Into<String>>(id: impl Into<String>, options: impl IntoIterator<Item = S>) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            options: options.into_iter().map(Into::into).collect(),
            default_option: None,
            step_threshold: default_step_threshold(),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the initially selected option.
    pub fn with_default_option(mut self, option: impl Into<String>) -> Self {
        self.default_option = Some(option.into());
        self
    }

    /// Set the pixel step threshold.
    pub fn with_step_threshold(mut self, step_threshold: f64) -> Self {
        self.step_threshold = step_threshold;
        self
    }

    /// The label, falling back to the id.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() { &self.id } else { &self.label }
    }

    /// Validate this config.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_selector(self)
    }

    /// Validate and build the selector control.
    pub fn build(&self) -> Result<DiscreteControl<String>, ValidationError> {
        self.validate()?;
        let no_options = || ValidationError::NoOptions {
            control: self.id.clone(),
        };
        let index = self
            .default_option
            .as_ref()
            .and_then(|d| self.options.iter().position(|o| o == d))
            .unwrap_or(0);
        let control = DiscreteControl::new(self.options.iter().cloned())
            .and_then(|c| c.with_selected_index(index))
            .map_err(|_| no_options())?;
        Ok(control.with_step_threshold(self.step_threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knob_build_uses_absolute_default() {
        let knob = KnobConfig::new("gain", 0.0, 10.0, 2.5).build().unwrap();
        assert_eq!(knob.control().value(), 0.25);
        assert_eq!(knob.control().default_value(), 0.25);
        assert_eq!(knob.control().snap().value, 0.25);
        assert_eq!(knob.sensitivity(), RADIAL_DRAG_SENSITIVITY);
        assert_eq!(knob.angles(), AngleRange::STANDARD);
    }

    #[test]
    fn test_knob_snap_value_is_absolute() {
        let knob = KnobConfig::new("pan", -1.0, 1.0, -1.0)
            .with_snap_value(0.0)
            .with_snap_threshold(0.1)
            .build()
            .unwrap();
        let snap = knob.control().snap();
        assert_eq!(snap.value, 0.5);
        assert_eq!(snap.threshold, 0.1);
        assert!(snap.enabled);
    }

    #[test]
    fn test_knob_build_rejects_invalid() {
        let err = KnobConfig::new("gain", 0.0, 11.0, 5.0)
            .with_sensitivity(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotPositive { .. }));
    }

    #[test]
    fn test_fader_build_geometry() {
        let fader = FaderConfig::new("volume", -48.0, 6.0, 0.0)
            .with_handle(24.0, 40.0)
            .with_snap_enabled(false)
            .build()
            .unwrap();
        assert_eq!(fader.geometry().handle_width, 24.0);
        assert_eq!(fader.geometry().handle_height, 40.0);
        assert!(!fader.control().snap_enabled());
        assert!((fader.control().absolute_value() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_selector_build_default_option() {
        let selector = SelectorConfig::new("fx", ["delay", "reverb", "chorus"])
            .with_default_option("chorus")
            .with_step_threshold(20.0)
            .build()
            .unwrap();
        assert_eq!(selector.current(), "chorus");
        assert_eq!(selector.current_index(), 2);
        assert_eq!(selector.step_threshold(), 20.0);
    }

    #[test]
    fn test_selector_build_defaults_to_first() {
        let selector = SelectorConfig::new("fx", ["delay", "reverb"]).build().unwrap();
        assert_eq!(selector.current(), "delay");
    }

    #[test]
    fn test_display_label_falls_back_to_id() {
        let knob = KnobConfig::new("bass", 0.0, 11.0, 5.5);
        assert_eq!(knob.display_label(), "bass");
        assert_eq!(knob.with_label("Bass").display_label(), "Bass");
    }

    #[test]
    fn test_minimal_knob_toml_uses_defaults() {
        let knob: KnobConfig = toml::from_str("id = \"mid\"").unwrap();
        assert_eq!(knob.min_value, 0.0);
        assert_eq!(knob.max_value, 11.0);
        assert_eq!(knob.default_value, 5.5);
        assert_eq!(knob.snap, SnapConfig::default());
        assert_eq!(knob.min_angle, -135.0);
        assert_eq!(knob.max_angle, 135.0);
        assert_eq!(knob.sensitivity, 150.0);
    }

    #[test]
    fn test_minimal_fader_toml_uses_defaults() {
        let fader: FaderConfig = toml::from_str("id = \"volume\"").unwrap();
        assert_eq!(fader.min_value, -48.0);
        assert_eq!(fader.max_value, 6.0);
        assert_eq!(fader.default_value, 0.0);
        assert_eq!(fader.handle_width, 30.0);
        assert_eq!(fader.handle_height, 50.0);
    }
}
