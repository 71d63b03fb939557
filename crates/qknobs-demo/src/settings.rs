//! Plain-value snapshots of a panel, the way a host application would
//! consume the controls.

use serde::{Deserialize, Serialize};

use crate::panel::Panel;

/// Amplifier head values in absolute units.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AmplifierSettings {
    /// Preamp gain, 0..11.
    pub gain: f64,
    /// Bass, 0..11.
    pub bass: f64,
    /// Mid, 0..11.
    pub mid: f64,
    /// Treble, 0..11.
    pub treble: f64,
    /// Presence, 0..11.
    pub presence: f64,
    /// Master volume in dB.
    pub volume: f64,
    /// Selected effect.
    pub effect: String,
}

/// Mixer channel strip values in absolute units.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MixerChannelSettings {
    /// Input gain.
    pub gain: f64,
    /// Low band.
    pub bass: f64,
    /// Mid band.
    pub mid: f64,
    /// High band.
    pub treble: f64,
    /// Channel fader in dB.
    pub volume: f64,
}

/// Settings for whichever panel is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum Settings {
    /// Amplifier head.
    Amplifier(AmplifierSettings),
    /// Mixer channel strip.
    MixerChannel(MixerChannelSettings),
}

fn pull(field: &mut f64, value: Option<f64>) {
    if let Some(value) = value {
        *field = value;
    }
}

impl AmplifierSettings {
    /// Copy the current control values from `panel`. Returns `true` if anything changed.
    ///
    /// Controls missing from the panel leave their field untouched.
    pub fn sync_from(&mut self, panel: &Panel) -> bool {
        let before = self.clone();
        pull(&mut self.gain, panel.knob_value("gain"));
        pull(&mut self.bass, panel.knob_value("bass"));
        pull(&mut self.mid, panel.knob_value("mid"));
        pull(&mut self.treble, panel.knob_value("treble"));
        pull(&mut self.presence, panel.knob_value("presence"));
        pull(&mut self.volume, panel.fader_value("volume"));
        if let Some(effect) = panel.selected_option("effect")
            && effect != self.effect
        {
            self.effect = effect.to_string();
        }
        *self != before
    }

    /// Push these values into `panel`'s controls.
    pub fn apply_to(&self, panel: &mut Panel) {
        panel.set_knob_value("gain", self.gain);
        panel.set_knob_value("bass", self.bass);
        panel.set_knob_value("mid", self.mid);
        panel.set_knob_value("treble", self.treble);
        panel.set_knob_value("presence", self.presence);
        panel.set_fader_value("volume", self.volume);
        panel.select_option("effect", &self.effect);
    }
}

impl MixerChannelSettings {
    /// Copy the current control values from `panel`. Returns `true` if anything changed.
    pub fn sync_from(&mut self, panel: &Panel) -> bool {
        let before = self.clone();
        pull(&mut self.gain, panel.knob_value("gain"));
        pull(&mut self.bass, panel.knob_value("bass"));
        pull(&mut self.mid, panel.knob_value("mid"));
        pull(&mut self.treble, panel.knob_value("treble"));
        pull(&mut self.volume, panel.fader_value("volume"));
        *self != before
    }

    /// Push these values into `panel`'s controls.
    pub fn apply_to(&self, panel: &mut Panel) {
        panel.set_knob_value("gain", self.gain);
        panel.set_knob_value("bass", self.bass);
        panel.set_knob_value("mid", self.mid);
        panel.set_knob_value("treble", self.treble);
        panel.set_fader_value("volume", self.volume);
    }
}

impl Settings {
    /// Sync from `panel`. Returns `true` if anything changed.
    pub fn sync_from(&mut self, panel: &Panel) -> bool {
        match self {
            Self::Amplifier(s) => s.sync_from(panel),
            Self::MixerChannel(s) => s.sync_from(panel),
        }
    }

    /// Push into `panel`.
    pub fn apply_to(&self, panel: &mut Panel) {
        match self {
            Self::Amplifier(s) => s.apply_to(panel),
            Self::MixerChannel(s) => s.apply_to(panel),
        }
    }

    /// Compact JSON for logging.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qknobs_config::get_factory_layout;
    use qknobs_gui_core::StyleKind;

    fn panel(name: &str) -> Panel {
        Panel::from_layout(&get_factory_layout(name).unwrap(), StyleKind::Basic).unwrap()
    }

    #[test]
    fn amplifier_sync_reads_absolute_values() {
        let mut panel = panel("amplifier");
        let mut settings = AmplifierSettings::default();
        assert!(settings.sync_from(&panel));
        assert_eq!(settings.gain, 5.5);
        assert_eq!(settings.volume, 0.0);
        assert_eq!(settings.effect, "delay");
        assert!(!settings.sync_from(&panel));

        let gain = panel.knob_mut("gain").unwrap();
        gain.on_drag_changed(-75.0);
        gain.on_drag_ended();
        assert!(settings.sync_from(&panel));
        assert_eq!(settings.gain, 11.0);
    }

    #[test]
    fn mixer_apply_then_sync_round_trips() {
        let mut panel = panel("mixer-channel");
        let wanted = MixerChannelSettings {
            gain: 2.0,
            bass: 7.0,
            mid: 5.5,
            treble: 4.0,
            volume: -21.0,
        };
        wanted.apply_to(&mut panel);

        let mut synced = MixerChannelSettings::default();
        synced.sync_from(&panel);
        assert!((synced.gain - 2.0).abs() < 1e-9);
        assert!((synced.bass - 7.0).abs() < 1e-9);
        assert!((synced.volume - (-21.0)).abs() < 1e-9);
    }

    #[test]
    fn missing_controls_leave_fields_alone() {
        let panel = panel("mixer-channel");
        let mut settings = AmplifierSettings {
            presence: 3.0,
            effect: "chorus".to_string(),
            ..AmplifierSettings::default()
        };
        settings.sync_from(&panel);
        assert_eq!(settings.presence, 3.0);
        assert_eq!(settings.effect, "chorus");
    }

    #[test]
    fn json_is_tagged_by_view() {
        let settings = Settings::MixerChannel(MixerChannelSettings {
            volume: -6.0,
            ..MixerChannelSettings::default()
        });
        let json = settings.to_json().unwrap();
        assert!(json.starts_with("{\"view\":\"mixer-channel\""), "got: {json}");
        assert!(json.contains("\"volume\":-6.0"));

        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}
