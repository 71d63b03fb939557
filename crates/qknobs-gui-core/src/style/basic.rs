//! Flat grey look.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Stroke, pos2, vec2};

use super::{
    DiscreteKnobStyle, DiscreteKnobVisual, FaderStyle, FaderVisual, RadialKnobStyle,
    RadialKnobVisual,
};
use crate::paint::{faded, radial_dot, radial_line};
use crate::theme::Theme;

/// Flat grey controls with a white pointer dot.
#[derive(Debug, Default, Clone, Copy)]
pub struct Basic;

impl RadialKnobStyle for Basic {
    fn paint(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        visual: &RadialKnobVisual,
        theme: &Theme,
    ) {
        let body = radius * 0.8;

        painter.circle_filled(center, body, faded(Color32::BLACK, 0.8));

        // Default marker outside the body.
        radial_line(
            painter,
            center,
            body + 2.0,
            radius,
            visual.default_angle,
            Stroke::new(radius * 0.06, theme.snap_marker(visual.snap_enabled)),
        );

        painter.circle_filled(center, body * 0.75, faded(Color32::GRAY, 0.8));

        radial_dot(
            painter,
            center,
            body * 0.5,
            visual.angle,
            (body * 0.1).max(2.0),
            Color32::WHITE,
        );
    }
}

impl DiscreteKnobStyle for Basic {
    fn paint(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        visual: &DiscreteKnobVisual,
        theme: &Theme,
    ) {
        painter.circle_filled(center, radius, faded(Color32::GRAY, 0.2));

        let tick = Stroke::new(3.0, faded(Color32::GRAY, 0.6));
        for &angle in &visual.option_angles {
            radial_line(painter, center, radius - 10.0, radius, angle, tick);
        }

        let accent = theme.interaction_accent(visual.interacting);
        radial_line(
            painter,
            center,
            0.0,
            radius * 0.65,
            visual.current_angle,
            Stroke::new(4.0, accent),
        );
        painter.circle_filled(center, 10.0_f32.min(radius * 0.3), accent);
    }
}

impl FaderStyle for Basic {
    fn paint(&self, painter: &Painter, rect: Rect, visual: &FaderVisual, theme: &Theme) {
        let track = Rect::from_center_size(rect.center(), vec2(3.0, rect.height()));
        painter.rect_filled(track, CornerRadius::ZERO, Color32::GRAY);

        let snap_y = visual.snap_y(rect);
        let half = visual.handle_size.x / 2.0;
        painter.line_segment(
            [
                pos2(rect.center().x - half, snap_y),
                pos2(rect.center().x + half, snap_y),
            ],
            Stroke::new(2.0, theme.snap_marker(visual.snap_enabled)),
        );

        let handle = visual.handle_rect(rect);
        painter.rect_filled(handle, CornerRadius::ZERO, theme.accent);
        center_line(painter, handle, Color32::WHITE);
    }
}

/// White grip line across the middle of a fader handle.
pub(super) fn center_line(painter: &Painter, handle: Rect, color: Color32) {
    let inset = 4.0_f32.min(handle.width() / 2.0);
    let y = handle.center().y;
    painter.line_segment(
        [pos2(handle.left() + inset, y), pos2(handle.right() - inset, y)],
        Stroke::new(2.0, color),
    );
}
