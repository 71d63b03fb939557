//! Dark look with white accents and a value arc.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Stroke, pos2, vec2};

use super::basic::center_line;
use super::{
    DiscreteKnobStyle, DiscreteKnobVisual, FaderStyle, FaderVisual, RadialKnobStyle,
    RadialKnobVisual,
};
use crate::paint::{draw_arc, faded, radial_dot, radial_line};
use crate::theme::Theme;

/// Dark bodies, white ring and pointer, accent value arc.
#[derive(Debug, Default, Clone, Copy)]
pub struct Modern;

impl RadialKnobStyle for Modern {
    fn paint(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        visual: &RadialKnobVisual,
        theme: &Theme,
    ) {
        let arc_radius = radius - 3.0;
        let arc_width = (radius * 0.08).max(2.0);

        draw_arc(
            painter,
            center,
            arc_radius,
            visual.min_angle,
            visual.max_angle,
            Stroke::new(arc_width, theme.track),
        );
        draw_arc(
            painter,
            center,
            arc_radius,
            visual.min_angle,
            visual.angle,
            Stroke::new(arc_width, theme.interaction_accent(visual.interacting)),
        );

        let body = radius * 0.8;
        painter.circle_filled(center, body, theme.knob_body);
        painter.circle_stroke(
            center,
            body * 0.8,
            Stroke::new(3.0, faded(Color32::WHITE, 0.3)),
        );

        radial_line(
            painter,
            center,
            body * 0.85,
            body,
            visual.default_angle,
            Stroke::new(2.0, theme.snap_marker(visual.snap_enabled)),
        );

        radial_dot(
            painter,
            center,
            body * 0.5,
            visual.angle,
            (body * 0.08).max(2.0),
            faded(Color32::WHITE, 0.9),
        );
    }
}

impl DiscreteKnobStyle for Modern {
    fn paint(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        visual: &DiscreteKnobVisual,
        theme: &Theme,
    ) {
        painter.circle_filled(center, radius, theme.knob_body);
        painter.circle_stroke(
            center,
            radius * 0.85,
            Stroke::new(4.0, faded(Color32::WHITE, 0.3)),
        );

        let tick = Stroke::new(2.0, faded(Color32::WHITE, 0.4));
        for &angle in &visual.option_angles {
            radial_line(painter, center, radius - 12.0, radius - 2.0, angle, tick);
        }

        let pointer = if visual.interacting {
            Color32::WHITE
        } else {
            faded(Color32::WHITE, 0.85)
        };
        radial_line(
            painter,
            center,
            0.0,
            radius * 0.7,
            visual.current_angle,
            Stroke::new(4.0, pointer),
        );
        painter.circle_filled(center, 11.0_f32.min(radius * 0.3), faded(Color32::WHITE, 0.8));
    }
}

impl FaderStyle for Modern {
    fn paint(&self, painter: &Painter, rect: Rect, visual: &FaderVisual, theme: &Theme) {
        let track = Rect::from_center_size(rect.center(), vec2(6.0, rect.height()));
        painter.rect_filled(track, CornerRadius::same(3), theme.track);

        let snap_y = visual.snap_y(rect);
        let marker = if visual.snap_enabled {
            faded(Color32::WHITE, 0.6)
        } else {
            faded(Color32::WHITE, 0.3)
        };
        painter.line_segment(
            [
                pos2(rect.center().x - 10.0, snap_y),
                pos2(rect.center().x + 10.0, snap_y),
            ],
            Stroke::new(3.0, marker),
        );

        let handle = visual.handle_rect(rect);
        painter.rect_filled(
            handle,
            CornerRadius::same(5),
            theme.interaction_accent(visual.interacting),
        );
        center_line(painter, handle, Color32::WHITE);
    }
}
