//! Panel layout file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::control_config::{FaderConfig, KnobConfig, SelectorConfig};
use crate::error::ConfigError;
use crate::validation::{self, ValidationResult};

fn default_style() -> String {
    "modern".to_string()
}

/// A named set of controls shown together on one panel.
///
/// # TOML Format
///
/// ```toml
/// name = "Amplifier"
/// description = "Guitar amp head"
/// style = "wood"
///
/// [[knobs]]
/// id = "gain"
/// label = "Gain"
///
/// [[faders]]
/// id = "volume"
///
/// [[selectors]]
/// id = "effect"
/// options = ["delay", "reverb", "chorus", "fuzz"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelLayout {
    /// Name of the layout.
    pub name: String,

    /// Optional description of the layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Visual style name (`basic`, `modern` or `wood`).
    #[serde(default = "default_style")]
    pub style: String,

    /// Radial knobs, left to right.
    #[serde(default)]
    pub knobs: Vec<KnobConfig>,

    /// Faders, left to right.
    #[serde(default)]
    pub faders: Vec<FaderConfig>,

    /// Discrete selectors, left to right.
    #[serde(default)]
    pub selectors: Vec<SelectorConfig>,
}

impl PanelLayout {
    /// Create a new empty layout.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            style: default_style(),
            knobs: Vec::new(),
            faders: Vec::new(),
            selectors: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the style name.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Add a knob.
    pub fn with_knob(mut self, knob: KnobConfig) -> Self {
        self.knobs.push(knob);
        self
    }

    /// Add a fader.
    pub fn with_fader(mut self, fader: FaderConfig) -> Self {
        self.faders.push(fader);
        self
    }

    /// Add a selector.
    pub fn with_selector(mut self, selector: SelectorConfig) -> Self {
        self.selectors.push(selector);
        self
    }

    /// Load a layout from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let layout: PanelLayout = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), name = %layout.name, "loaded layout");
        Ok(layout)
    }

    /// Load a layout from a TOML file and validate it.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let layout = Self::load(path)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the layout to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved layout");
        Ok(())
    }

    /// Convert the layout to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate every control and the layout as a whole.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_layout(self)
    }

    /// Total number of controls.
    pub fn len(&self) -> usize {
        self.knobs.len() + self.faders.len() + self.selectors.len()
    }

    /// Returns `true` if the layout has no controls.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a knob by id.
    pub fn knob(&self, id: &str) -> Option<&KnobConfig> {
        self.knobs.iter().find(|k| k.id == id)
    }

    /// Find a fader by id.
    pub fn fader(&self, id: &str) -> Option<&FaderConfig> {
        self.faders.iter().find(|f| f.id == id)
    }

    /// Find a selector by id.
    pub fn selector(&self, id: &str) -> Option<&SelectorConfig> {
        self.selectors.iter().find(|s| s.id == id)
    }

    /// Ids of all controls, knobs first, then faders, then selectors.
    pub fn control_ids(&self) -> Vec<&str> {
        self.knobs
            .iter()
            .map(|k| k.id.as_str())
            .chain(self.faders.iter().map(|f| f.id.as_str()))
            .chain(self.selectors.iter().map(|s| s.id.as_str()))
            .collect()
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
