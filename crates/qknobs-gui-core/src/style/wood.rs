//! Wooden bodies with brass accents, for the amplifier panel.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Stroke, pos2, vec2};

use super::basic::center_line;
use super::{
    DiscreteKnobStyle, DiscreteKnobVisual, FaderStyle, FaderVisual, RadialKnobStyle,
    RadialKnobVisual,
};
use crate::paint::{faded, radial_dot, radial_line};
use crate::theme::Theme;

/// Wood grain approximated by two concentric fills.
#[derive(Debug, Default, Clone, Copy)]
pub struct Wood;

fn wood_body(painter: &Painter, center: Pos2, radius: f32, theme: &Theme) {
    painter.circle_filled(center, radius, Color32::from_rgb(40, 25, 15));
    painter.circle_filled(center, radius * 0.9, theme.wood);
    painter.circle_stroke(
        center,
        radius * 0.8,
        Stroke::new(3.0, faded(Color32::BLACK, 0.4)),
    );
}

impl RadialKnobStyle for Wood {
    fn paint(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        visual: &RadialKnobVisual,
        theme: &Theme,
    ) {
        let body = radius * 0.85;
        wood_body(painter, center, body, theme);

        let marker = if visual.snap_enabled {
            faded(theme.brass, 0.7)
        } else {
            faded(theme.brass, 0.25)
        };
        radial_line(
            painter,
            center,
            body + 2.0,
            radius,
            visual.default_angle,
            Stroke::new(2.5, marker),
        );

        let pointer = if visual.interacting {
            theme.brass
        } else {
            faded(theme.brass, 0.7)
        };
        radial_dot(
            painter,
            center,
            body * 0.55,
            visual.angle,
            (body * 0.1).max(2.0),
            pointer,
        );
    }
}

impl DiscreteKnobStyle for Wood {
    fn paint(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        visual: &DiscreteKnobVisual,
        theme: &Theme,
    ) {
        wood_body(painter, center, radius, theme);

        let tick = Stroke::new(3.0, faded(theme.brass, 0.6));
        for &angle in &visual.option_angles {
            radial_line(painter, center, radius - 12.0, radius - 1.0, angle, tick);
        }

        radial_line(
            painter,
            center,
            0.0,
            radius * 0.7,
            visual.current_angle,
            Stroke::new(4.0, faded(theme.brass, 0.9)),
        );
        painter.circle_filled(center, 12.0_f32.min(radius * 0.3), faded(theme.brass, 0.8));
    }
}

impl FaderStyle for Wood {
    fn paint(&self, painter: &Painter, rect: Rect, visual: &FaderVisual, theme: &Theme) {
        let track = Rect::from_center_size(rect.center(), vec2(5.0, rect.height()));
        painter.rect_filled(track, CornerRadius::same(2), theme.wood);

        let snap_y = visual.snap_y(rect);
        let marker = if visual.snap_enabled {
            faded(theme.brass, 0.6)
        } else {
            faded(theme.brass, 0.3)
        };
        painter.line_segment(
            [
                pos2(rect.center().x - 10.0, snap_y),
                pos2(rect.center().x + 10.0, snap_y),
            ],
            Stroke::new(2.0, marker),
        );

        let handle = visual.handle_rect(rect);
        painter.rect_filled(handle, CornerRadius::same(4), theme.brass);
        center_line(painter, handle, Color32::WHITE);
    }
}
