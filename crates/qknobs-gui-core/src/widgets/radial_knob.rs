//! Continuous radial knob widget.

use egui::{Align2, FontId, Response, Sense, Ui, Widget, pos2, vec2};
use qknobs_core::RadialKnobControl;

use super::{caption, drag_translation};
use crate::format::ValueFormat;
use crate::paint::polar;
use crate::style::{RadialKnobStyle, RadialKnobVisual, StyleKind};
use crate::theme::Theme;

/// Space below the knob for label and value text.
const LABEL_SPACE: f32 = 35.0;

/// Radial knob bound to a [`RadialKnobControl`].
///
/// - Drag up/down to turn (150 px of travel by default sweeps the range)
/// - Release near the detent to snap onto it
/// - Double-click to reset to the default value
pub struct RadialKnob<'a> {
    knob: &'a mut RadialKnobControl,
    style: &'a dyn RadialKnobStyle,
    theme: Theme,
    label: &'a str,
    diameter: f32,
    format: ValueFormat,
    show_range: bool,
}

impl<'a> RadialKnob<'a> {
    /// Create a knob widget in the default style.
    pub fn new(knob: &'a mut RadialKnobControl, label: &'a str) -> Self {
        Self {
            knob,
            style: StyleKind::default().radial(),
            theme: Theme::default(),
            label,
            diameter: 64.0,
            format: ValueFormat::Plain,
            show_range: false,
        }
    }

    /// Paint with a custom style.
    pub fn style(mut self, style: &'a dyn RadialKnobStyle) -> Self {
        self.style = style;
        self
    }

    /// Paint with one of the bundled styles.
    pub fn style_kind(self, kind: StyleKind) -> Self {
        self.style(kind.radial())
    }

    /// Set the theme colors.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set knob diameter in pixels.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter.max(16.0);
        self
    }

    /// Set how the absolute value is printed.
    pub fn format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    /// Print the range minimum and maximum next to the end stops.
    pub fn show_range(mut self, show: bool) -> Self {
        self.show_range = show;
        self
    }
}

impl Widget for RadialKnob<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = vec2(self.diameter, self.diameter + LABEL_SPACE);
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let before = self.knob.control().value();

        if response.double_clicked() {
            self.knob.reset();
        } else if response.dragged()
            && let Some(translation) = drag_translation(ui, &response)
        {
            self.knob.on_drag_changed(f64::from(translation.y));
        }
        if response.drag_stopped() {
            self.knob.on_drag_ended();
        }

        if self.knob.control().value() != before {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = pos2(rect.center().x, rect.top() + self.diameter / 2.0);
            let radius = self.diameter / 2.0 - 2.0;
            let interacting = response.hovered() || response.dragged();

            let visual = RadialKnobVisual::new(self.knob, interacting);
            self.style
                .paint(painter, center, radius, &visual, &self.theme);

            if self.show_range {
                let range = self.knob.control().range();
                let font = FontId::proportional(9.0);
                if let Some(min) = ValueFormat::Plain.format(range.min) {
                    painter.text(
                        polar(center, radius, visual.min_angle),
                        Align2::RIGHT_TOP,
                        min,
                        font.clone(),
                        self.theme.text_secondary,
                    );
                }
                if let Some(max) = ValueFormat::Plain.format(range.max) {
                    painter.text(
                        polar(center, radius, visual.max_angle),
                        Align2::LEFT_TOP,
                        max,
                        font,
                        self.theme.text_secondary,
                    );
                }
            }

            let label_y = center.y + radius + 6.0;
            caption(
                painter,
                pos2(rect.center().x, label_y),
                self.label,
                12.0,
                self.theme.text_primary,
            );
            if let Some(value) = self.format.format(self.knob.control().absolute_value()) {
                caption(
                    painter,
                    pos2(rect.center().x, label_y + 14.0),
                    value,
                    11.0,
                    self.theme.text_secondary,
                );
            }
        }

        response
    }
}
