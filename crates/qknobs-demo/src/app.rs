//! Demo application: one panel of controls plus a header for switching
//! styles and storing settings.

use clap::ValueEnum;
use egui::{CentralPanel, Context, RichText, TopBottomPanel};
use qknobs_config::PanelLayout;
use qknobs_gui_core::{StyleKind, Theme, TracingFeedback};

use crate::error::DemoError;
use crate::panel::{Panel, PanelEvent};
use crate::settings::{AmplifierSettings, MixerChannelSettings, Settings};

/// Which bundled panel to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Guitar amplifier head with an effect selector.
    #[default]
    Amplifier,
    /// Mixer channel strip.
    Mixer,
}

impl View {
    /// Name of the factory layout backing this view.
    pub fn layout_name(self) -> &'static str {
        match self {
            Self::Amplifier => "amplifier",
            Self::Mixer => "mixer-channel",
        }
    }

    fn empty_settings(self) -> Settings {
        match self {
            Self::Amplifier => Settings::Amplifier(AmplifierSettings::default()),
            Self::Mixer => Settings::MixerChannel(MixerChannelSettings::default()),
        }
    }
}

/// Everything the demo tracks between frames, independent of the window.
#[derive(Debug)]
pub struct DemoState {
    panel: Panel,
    settings: Settings,
    saved: Option<Settings>,
    feedback: TracingFeedback,
}

impl DemoState {
    /// Build the panel for `layout` and take an initial settings snapshot.
    pub fn new(view: View, layout: &PanelLayout, style: StyleKind) -> Result<Self, DemoError> {
        let panel = Panel::from_layout(layout, style)?;
        let mut settings = view.empty_settings();
        settings.sync_from(&panel);
        tracing::info!(settings = %settings.to_json()?, "initial settings");
        Ok(Self {
            panel,
            settings,
            saved: None,
            feedback: TracingFeedback,
        })
    }

    /// The live panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// The live panel, mutably.
    pub fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    /// Latest settings snapshot.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Snapshot taken by the last [`store`](Self::store), if any.
    pub fn saved(&self) -> Option<&Settings> {
        self.saved.as_ref()
    }

    /// Drain control events and refresh the snapshot if a value moved.
    pub fn process_events(&mut self) -> Vec<PanelEvent> {
        let events = self.panel.drain_events(&mut self.feedback);
        if events.iter().any(|e| e.event.is_value_change()) && self.settings.sync_from(&self.panel)
        {
            match self.settings.to_json() {
                Ok(json) => tracing::info!(settings = %json, "settings changed"),
                Err(e) => tracing::warn!(error = %e, "could not serialize settings"),
            }
        }
        events
    }

    /// Remember the current settings.
    pub fn store(&mut self) {
        self.saved = Some(self.settings.clone());
        tracing::info!("settings stored");
    }

    /// Push the stored settings back into the panel. Returns `false` if nothing was stored.
    pub fn recall(&mut self) -> bool {
        let Some(saved) = &self.saved else {
            return false;
        };
        saved.apply_to(&mut self.panel);
        tracing::info!("settings recalled");
        true
    }

    /// Reset every control to its default.
    pub fn reset_all(&mut self) {
        self.panel.reset_all();
    }
}

/// Main eframe application.
pub struct QKnobsApp {
    state: DemoState,
    theme: Theme,
}

impl QKnobsApp {
    /// Create the application and apply the theme to the egui context.
    pub fn new(cc: &eframe::CreationContext<'_>, state: DemoState) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        Self { state, theme }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(self.state.panel().name())
                    .size(18.0)
                    .color(self.theme.accent),
            );
            ui.add_space(16.0);

            let mut style = self.state.panel().style();
            egui::ComboBox::from_id_salt("style_selector")
                .selected_text(style.to_string())
                .show_ui(ui, |ui| {
                    for kind in StyleKind::ALL {
                        ui.selectable_value(&mut style, kind, kind.to_string());
                    }
                });
            if style != self.state.panel().style() {
                tracing::info!(%style, "style changed");
                self.state.panel_mut().set_style(style);
            }

            ui.add_space(8.0);
            if ui.button("Store").clicked() {
                self.state.store();
            }
            if ui
                .add_enabled(self.state.saved().is_some(), egui::Button::new("Recall"))
                .clicked()
            {
                self.state.recall();
            }
            if ui.button("Reset").clicked() {
                self.state.reset_all();
            }
        });
    }
}

impl eframe::App for QKnobsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            self.state.panel_mut().ui(ui, self.theme);
        });

        self.state.process_events();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qknobs_config::get_factory_layout;
    use qknobs_core::ControlEvent;

    fn state(view: View) -> DemoState {
        let layout = get_factory_layout(view.layout_name()).unwrap();
        DemoState::new(view, &layout, StyleKind::Modern).unwrap()
    }

    #[test]
    fn views_map_to_factory_layouts() {
        for view in View::value_variants() {
            assert!(get_factory_layout(view.layout_name()).is_some(), "{view:?}");
        }
    }

    #[test]
    fn initial_snapshot_matches_defaults() {
        let state = state(View::Amplifier);
        let Settings::Amplifier(settings) = state.settings() else {
            panic!("expected amplifier settings");
        };
        assert_eq!(settings.gain, 5.5);
        assert_eq!(settings.effect, "delay");
        assert!(state.saved().is_none());
    }

    #[test]
    fn drag_updates_snapshot() {
        let mut state = state(View::Mixer);
        let fader = state.panel_mut().fader_mut("volume").unwrap();
        fader.on_drag_changed(-40.0);
        fader.on_drag_ended();

        let events = state.process_events();
        assert!(events.iter().any(|e| e.control == "volume"
            && matches!(e.event, ControlEvent::ValueChanged { .. })));

        let Settings::MixerChannel(settings) = state.settings() else {
            panic!("expected mixer settings");
        };
        assert_eq!(Some(settings.volume), state.panel().fader_value("volume"));
        assert!(settings.volume > 0.0);
    }

    #[test]
    fn store_and_recall() {
        let mut state = state(View::Amplifier);
        assert!(!state.recall());

        state.panel_mut().set_knob_value("treble", 8.0);
        state.panel_mut().select_option("effect", "chorus");
        state.process_events();
        state.store();

        state.reset_all();
        state.panel_mut().select_option("effect", "fuzz");
        state.process_events();
        assert_eq!(state.panel().knob_value("treble"), Some(5.5));

        assert!(state.recall());
        assert!((state.panel().knob_value("treble").unwrap() - 8.0).abs() < 1e-9);
        assert_eq!(state.panel().selected_option("effect"), Some("chorus"));
    }
}
