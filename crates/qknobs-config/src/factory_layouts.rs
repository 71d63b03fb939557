//! Factory layouts bundled with the library.
//!
//! These mirror the two demo panels: a guitar amplifier head and a mixer
//! channel strip. They are embedded at compile time and always available.

use crate::PanelLayout;

/// Factory layout names for external access.
pub static FACTORY_LAYOUT_NAMES: &[&str] = &["amplifier", "mixer-channel"];

static FACTORY_LAYOUTS_TOML: &[(&str, &str)] = &[
    ("amplifier", AMPLIFIER_LAYOUT),
    ("mixer-channel", MIXER_CHANNEL_LAYOUT),
];

/// Amplifier head: five tone knobs, an effect selector and a master fader.
const AMPLIFIER_LAYOUT: &str = r#"
name = "Amplifier"
description = "Guitar amp head with tone stack, effect selector and master volume"
style = "wood"

[[knobs]]
id = "gain"
label = "Gain"

[[knobs]]
id = "bass"
label = "Bass"

[[knobs]]
id = "mid"
label = "Mid"

[[knobs]]
id = "treble"
label = "Treble"

[[knobs]]
id = "presence"
label = "Presence"

[[faders]]
id = "volume"
label = "Volume"
min_value = -48.0
max_value = 6.0
default_value = 0.0

[[selectors]]
id = "effect"
label = "Effect"
options = ["delay", "reverb", "chorus", "fuzz"]
default_option = "delay"
"#;

/// Mixer channel strip: gain and three-band EQ above a channel fader.
const MIXER_CHANNEL_LAYOUT: &str = r#"
name = "Mixer Channel"
description = "Channel strip with input gain, three-band EQ and fader"
style = "modern"

[[knobs]]
id = "gain"
label = "Gain"

[[knobs]]
id = "bass"
label = "Bass"

[[knobs]]
id = "mid"
label = "Mid"

[[knobs]]
id = "treble"
label = "Treble"

[[faders]]
id = "volume"
label = "Volume"
min_value = -48.0
max_value = 6.0
default_value = 0.0

[faders.snap]
value = 0.0
threshold = 0.03
"#;

/// Get all factory layouts.
pub fn factory_layouts() -> Vec<PanelLayout> {
    FACTORY_LAYOUTS_TOML
        .iter()
        .filter_map(|(_, toml)| PanelLayout::from_toml(toml).ok())
        .collect()
}

/// Get a factory layout by name.
///
/// Matches the internal name or the layout's display name, case-insensitively.
///
/// ```rust
/// use qknobs_config::get_factory_layout;
///
/// let amp = get_factory_layout("amplifier").unwrap();
/// assert_eq!(amp.knobs.len(), 5);
/// assert!(get_factory_layout("Mixer Channel").is_some());
/// ```
pub fn get_factory_layout(name: &str) -> Option<PanelLayout> {
    let name_lower = name.to_lowercase();

    for (layout_name, toml) in FACTORY_LAYOUTS_TOML {
        if layout_name.to_lowercase() == name_lower {
            return PanelLayout::from_toml(toml).ok();
        }
    }

    factory_layouts()
        .into_iter()
        .find(|layout| layout.name.to_lowercase() == name_lower)
}

/// Get the names of all factory layouts.
pub fn factory_layout_names() -> Vec<&'static str> {
    FACTORY_LAYOUTS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name refers to a factory layout (case-insensitive).
pub fn is_factory_layout(name: &str) -> bool {
    get_factory_layout(name).is_some()
}
