//! Control widgets.
//!
//! - [`RadialKnob`] - Continuous knob; vertical drag, double-click resets
//! - [`DiscreteKnob`] - Selector stepping through options on vertical drag
//! - [`Fader`] - Vertical fader; drag the handle, double-click returns to the detent
//!
//! All three translate the pointer the same way: the drag translation is
//! the current pointer position minus the position where the button went
//! down, so the control sees one cumulative delta per frame and never
//! accumulates per-frame rounding.

mod discrete_knob;
mod fader;
mod radial_knob;

pub use discrete_knob::DiscreteKnob;
pub use fader::Fader;
pub use radial_knob::RadialKnob;

use egui::{Align2, Color32, FontId, Painter, Pos2, Response, Ui, Vec2};

/// Pointer translation since the press that started the current drag.
pub fn drag_translation(ui: &Ui, response: &Response) -> Option<Vec2> {
    let origin = ui.input(|i| i.pointer.press_origin())?;
    let current = response.interact_pointer_pos()?;
    Some(current - origin)
}

/// Centered caption text below a control.
fn caption(painter: &Painter, pos: Pos2, text: impl ToString, size: f32, color: Color32) {
    painter.text(
        pos,
        Align2::CENTER_TOP,
        text,
        FontId::proportional(size),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleKind;
    use qknobs_core::{DiscreteControl, FaderControl, RadialKnobControl};

    fn run_frame(add: impl FnMut(&mut Ui)) {
        let ctx = egui::Context::default();
        let mut add = add;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
    }

    #[test]
    fn radial_knob_renders_in_every_style() {
        for kind in StyleKind::ALL {
            let mut knob = RadialKnobControl::default();
            run_frame(|ui| {
                let response = ui.add(
                    RadialKnob::new(&mut knob, "Gain")
                        .style_kind(kind)
                        .show_range(true),
                );
                assert!(!response.changed());
            });
            assert_eq!(knob.control().value(), 0.5);
            assert!(knob.control().events().is_empty());
        }
    }

    #[test]
    fn discrete_knob_renders_in_every_style() {
        for kind in StyleKind::ALL {
            let mut selector = DiscreteControl::new(["delay", "reverb", "chorus"]).unwrap();
            run_frame(|ui| {
                ui.add(
                    DiscreteKnob::new(&mut selector, "Effect")
                        .style_kind(kind)
                        .option_label(|o: &&str| o.to_uppercase()),
                );
            });
            assert_eq!(*selector.current(), "delay");
        }
    }

    #[test]
    fn fader_adopts_allocated_height() {
        for kind in StyleKind::ALL {
            let mut fader = FaderControl::default();
            run_frame(|ui| {
                ui.add(Fader::new(&mut fader, "Volume").style_kind(kind).height(300.0));
            });
            assert_eq!(fader.track_height(), 125.0);
            assert!((fader.control().absolute_value() - 0.0).abs() < 1e-9);
        }
    }
}
