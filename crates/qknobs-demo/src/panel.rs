//! A panel of live controls built from a [`PanelLayout`].

use egui::Ui;
use qknobs_config::{PanelLayout, ValidationError};
use qknobs_core::{ControlEvent, DiscreteControl, FaderControl, RadialKnobControl};
use qknobs_gui_core::{
    DiscreteKnob, Fader, FeedbackSink, RadialKnob, StyleKind, Theme, ValueFormat,
    drain_with_feedback, option_label,
};

/// An event tagged with the id of the control that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelEvent {
    /// Control id from the layout.
    pub control: String,
    /// What happened.
    pub event: ControlEvent,
}

#[derive(Debug)]
struct Slot<C> {
    id: String,
    label: String,
    control: C,
}

/// Controls of one layout, in layout order.
#[derive(Debug)]
pub struct Panel {
    name: String,
    style: StyleKind,
    knobs: Vec<Slot<RadialKnobControl>>,
    selectors: Vec<Slot<DiscreteControl<String>>>,
    faders: Vec<Slot<FaderControl>>,
}

impl Panel {
    /// Build every control of `layout`.
    ///
    /// `style` overrides the layout's own style name.
    pub fn from_layout(layout: &PanelLayout, style: StyleKind) -> Result<Self, ValidationError> {
        layout.validate()?;

        let knobs = layout
            .knobs
            .iter()
            .map(|k| {
                Ok(Slot {
                    id: k.id.clone(),
                    label: k.display_label().to_string(),
                    control: k.build()?,
                })
            })
            .collect::<Result<_, ValidationError>>()?;
        let selectors = layout
            .selectors
            .iter()
            .map(|s| {
                Ok(Slot {
                    id: s.id.clone(),
                    label: s.display_label().to_string(),
                    control: s.build()?,
                })
            })
            .collect::<Result<_, ValidationError>>()?;
        let faders = layout
            .faders
            .iter()
            .map(|f| {
                Ok(Slot {
                    id: f.id.clone(),
                    label: f.display_label().to_string(),
                    control: f.build()?,
                })
            })
            .collect::<Result<_, ValidationError>>()?;

        tracing::info!(layout = %layout.name, %style, controls = layout.len(), "panel built");

        Ok(Self {
            name: layout.name.clone(),
            style,
            knobs,
            selectors,
            faders,
        })
    }

    /// Layout name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Style the panel paints with.
    pub fn style(&self) -> StyleKind {
        self.style
    }

    /// Switch the painting style.
    pub fn set_style(&mut self, style: StyleKind) {
        self.style = style;
    }

    /// Knob by id.
    pub fn knob(&self, id: &str) -> Option<&RadialKnobControl> {
        find(&self.knobs, id)
    }

    /// Knob by id, mutably.
    pub fn knob_mut(&mut self, id: &str) -> Option<&mut RadialKnobControl> {
        find_mut(&mut self.knobs, id)
    }

    /// Fader by id.
    pub fn fader(&self, id: &str) -> Option<&FaderControl> {
        find(&self.faders, id)
    }

    /// Fader by id, mutably.
    pub fn fader_mut(&mut self, id: &str) -> Option<&mut FaderControl> {
        find_mut(&mut self.faders, id)
    }

    /// Selector by id.
    pub fn selector(&self, id: &str) -> Option<&DiscreteControl<String>> {
        find(&self.selectors, id)
    }

    /// Selector by id, mutably.
    pub fn selector_mut(&mut self, id: &str) -> Option<&mut DiscreteControl<String>> {
        find_mut(&mut self.selectors, id)
    }

    /// Absolute value of a knob.
    pub fn knob_value(&self, id: &str) -> Option<f64> {
        self.knob(id).map(|k| k.control().absolute_value())
    }

    /// Set a knob's absolute value. Returns `false` for an unknown id.
    pub fn set_knob_value(&mut self, id: &str, value: f64) -> bool {
        let Some(knob) = self.knob_mut(id) else {
            return false;
        };
        knob.control_mut().set_absolute_value(value);
        true
    }

    /// Absolute value of a fader.
    pub fn fader_value(&self, id: &str) -> Option<f64> {
        self.fader(id).map(|f| f.control().absolute_value())
    }

    /// Set a fader's absolute value. Returns `false` for an unknown id.
    pub fn set_fader_value(&mut self, id: &str, value: f64) -> bool {
        let Some(fader) = self.fader_mut(id) else {
            return false;
        };
        fader.control_mut().set_absolute_value(value);
        true
    }

    /// Current option of a selector.
    pub fn selected_option(&self, id: &str) -> Option<&str> {
        self.selector(id).map(|s| s.current().as_str())
    }

    /// Select an option by name. Returns `false` if either is unknown.
    pub fn select_option(&mut self, id: &str, option: &str) -> bool {
        self.selector_mut(id)
            .is_some_and(|s| s.select(&option.to_string()))
    }

    /// Reset every knob to its default and every fader to its detent.
    pub fn reset_all(&mut self) {
        for slot in &mut self.knobs {
            slot.control.reset();
        }
        for slot in &mut self.faders {
            slot.control.return_to_snap_point();
        }
    }

    /// Drain all control queues, playing feedback on `sink`.
    pub fn drain_events(&mut self, sink: &mut dyn FeedbackSink) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        for slot in &mut self.knobs {
            collect(&slot.id, drain_with_feedback(&mut slot.control, sink), &mut events);
        }
        for slot in &mut self.selectors {
            collect(&slot.id, drain_with_feedback(&mut slot.control, sink), &mut events);
        }
        for slot in &mut self.faders {
            collect(&slot.id, drain_with_feedback(&mut slot.control, sink), &mut events);
        }
        events
    }

    /// Draw the panel: knobs and selectors left to right, faders on the right.
    pub fn ui(&mut self, ui: &mut Ui, theme: Theme) {
        let style = self.style;
        ui.horizontal_top(|ui| {
            for slot in &mut self.knobs {
                ui.vertical(|ui| {
                    ui.add(
                        RadialKnob::new(&mut slot.control, &slot.label)
                            .style_kind(style)
                            .theme(theme)
                            .diameter(72.0)
                            .show_range(true),
                    );
                    snap_toggle(ui, slot.control.control_mut());
                });
                ui.add_space(8.0);
            }

            for slot in &mut self.selectors {
                ui.vertical(|ui| {
                    ui.add(
                        DiscreteKnob::new(&mut slot.control, &slot.label)
                            .style_kind(style)
                            .theme(theme)
                            .diameter(72.0)
                            .option_label(|o: &String| option_label(o)),
                    );
                });
                ui.add_space(8.0);
            }

            for slot in &mut self.faders {
                ui.vertical(|ui| {
                    snap_toggle(ui, slot.control.control_mut());
                    ui.add(
                        Fader::new(&mut slot.control, &slot.label)
                            .style_kind(style)
                            .theme(theme)
                            .format(ValueFormat::Decibels)
                            .show_range(true),
                    );
                });
            }
        });
    }
}

fn snap_toggle(ui: &mut Ui, control: &mut qknobs_core::ContinuousControl) {
    if ui.selectable_label(control.snap_enabled(), "Snap").clicked() {
        control.toggle_snapping();
    }
}

fn collect(id: &str, drained: Vec<ControlEvent>, out: &mut Vec<PanelEvent>) {
    for event in drained {
        if !matches!(event, ControlEvent::ValueChanged { .. }) {
            tracing::debug!(control = id, ?event, "control event");
        }
        out.push(PanelEvent {
            control: id.to_string(),
            event,
        });
    }
}

fn find<'a, C>(slots: &'a [Slot<C>], id: &str) -> Option<&'a C> {
    slots.iter().find(|s| s.id == id).map(|s| &s.control)
}

fn find_mut<'a, C>(slots: &'a mut [Slot<C>], id: &str) -> Option<&'a mut C> {
    slots.iter_mut().find(|s| s.id == id).map(|s| &mut s.control)
}
