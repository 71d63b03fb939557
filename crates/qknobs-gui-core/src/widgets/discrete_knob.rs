//! Discrete selector knob widget.

use egui::{Response, Sense, Ui, Widget, pos2, vec2};
use qknobs_core::DiscreteControl;

use super::{caption, drag_translation};
use crate::style::{DiscreteKnobStyle, DiscreteKnobVisual, StyleKind};
use crate::theme::Theme;

const LABEL_SPACE: f32 = 35.0;

/// Selector knob bound to a [`DiscreteControl`].
///
/// Dragging up moves to the next option, dragging down to the previous one,
/// one option per step threshold of travel, wrapping at both ends.
pub struct DiscreteKnob<'a, T> {
    control: &'a mut DiscreteControl<T>,
    style: &'a dyn DiscreteKnobStyle,
    theme: Theme,
    label: &'a str,
    diameter: f32,
    option_label: Option<Box<dyn Fn(&T) -> String + 'a>>,
}

impl<'a, T: PartialEq> DiscreteKnob<'a, T> {
    /// Create a selector widget in the default style.
    pub fn new(control: &'a mut DiscreteControl<T>, label: &'a str) -> Self {
        Self {
            control,
            style: StyleKind::default().discrete(),
            theme: Theme::default(),
            label,
            diameter: 64.0,
            option_label: None,
        }
    }

    /// Paint with a custom style.
    pub fn style(mut self, style: &'a dyn DiscreteKnobStyle) -> Self {
        self.style = style;
        self
    }

    /// Paint with one of the bundled styles.
    pub fn style_kind(self, kind: StyleKind) -> Self {
        self.style(kind.discrete())
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

    /// Show the current option below the knob using `formatter`.
    pub fn option_label(mut self, formatter: impl Fn(&T) -> String + 'a) -> Self {
        self.option_label = Some(Box::new(formatter));
        self
    }
}

impl<T: PartialEq> Widget for DiscreteKnob<'_, T> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = vec2(self.diameter, self.diameter + LABEL_SPACE);
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let before = self.control.current_index();

        if response.dragged()
            && let Some(translation) = drag_translation(ui, &response)
        {
            self.control.on_drag_changed(f64::from(translation.y));
        }
        if response.drag_stopped() {
            self.control.on_drag_ended();
        }

        if self.control.current_index() != before {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = pos2(rect.center().x, rect.top() + self.diameter / 2.0);
            let radius = self.diameter / 2.0 - 2.0;
            let interacting = response.hovered() || response.dragged();

            let visual = DiscreteKnobVisual::new(self.control, interacting);
            self.style
                .paint(painter, center, radius, &visual, &self.theme);

            let label_y = center.y + radius + 6.0;
            caption(
                painter,
                pos2(rect.center().x, label_y),
                self.label,
                12.0,
                self.theme.text_primary,
            );
            if let Some(formatter) = &self.option_label {
                caption(
                    painter,
                    pos2(rect.center().x, label_y + 14.0),
                    formatter(self.control.current()),
                    11.0,
                    self.theme.text_secondary,
                );
            }
        }

        response
    }
}
