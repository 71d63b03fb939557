//! Painting helpers in control angle space.
//!
//! Control angles are degrees with 0 at 12 o'clock, increasing clockwise on
//! screen. Every marker, pointer and label is placed with [`polar`] so they
//! all agree.

use egui::{Color32, Painter, Pos2, Shape, Stroke, pos2};

/// Point at `radius` from `center` in direction `angle_deg`.
///
/// ```rust
/// use egui::pos2;
/// use qknobs_gui_core::paint::polar;
///
/// let top = polar(pos2(0.0, 0.0), 10.0, 0.0);
/// assert!((top.x - 0.0).abs() < 1e-5 && (top.y + 10.0).abs() < 1e-5);
/// let right = polar(pos2(0.0, 0.0), 10.0, 90.0);
/// assert!((right.x - 10.0).abs() < 1e-5 && right.y.abs() < 1e-5);
/// ```
pub fn polar(center: Pos2, radius: f32, angle_deg: f32) -> Pos2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    pos2(center.x + radius * sin, center.y - radius * cos)
}

/// Draw an arc from `start_deg` to `end_deg` as a polyline.
pub fn draw_arc(
    painter: &Painter,
    center: Pos2,
    radius: f32,
    start_deg: f32,
    end_deg: f32,
    stroke: Stroke,
) {
    let segments = 32;
    let sweep = end_deg - start_deg;
    if sweep.abs() < f32::EPSILON {
        return;
    }

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            polar(center, radius, start_deg + t * sweep)
        })
        .collect();

    painter.add(Shape::line(points, stroke));
}

/// Radial line between two radii at `angle_deg`.
pub fn radial_line(
    painter: &Painter,
    center: Pos2,
    inner: f32,
    outer: f32,
    angle_deg: f32,
    stroke: Stroke,
) {
    painter.line_segment(
        [polar(center, inner, angle_deg), polar(center, outer, angle_deg)],
        stroke,
    );
}

/// Dot at `radius` from `center` in direction `angle_deg`.
pub fn radial_dot(
    painter: &Painter,
    center: Pos2,
    radius: f32,
    angle_deg: f32,
    dot_radius: f32,
    color: Color32,
) {
    painter.circle_filled(polar(center, radius, angle_deg), dot_radius, color);
}

/// Multiply a color's alpha, keeping it premultiplied.
pub fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn polar_follows_clockwise_from_top() {
        let c = pos2(50.0, 50.0);
        assert!(approx(polar(c, 10.0, 0.0), pos2(50.0, 40.0)));
        assert!(approx(polar(c, 10.0, 90.0), pos2(60.0, 50.0)));
        assert!(approx(polar(c, 10.0, 180.0), pos2(50.0, 60.0)));
        assert!(approx(polar(c, 10.0, -90.0), pos2(40.0, 50.0)));
    }

    #[test]
    fn standard_sweep_end_stops_sit_below_centre() {
        let c = pos2(0.0, 0.0);
        let min = polar(c, 1.0, -135.0);
        let max = polar(c, 1.0, 135.0);
        assert!(min.x < 0.0 && min.y > 0.0);
        assert!(max.x > 0.0 && max.y > 0.0);
    }

    #[test]
    fn faded_clamps_opacity() {
        let c = Color32::from_rgb(200, 100, 50);
        assert_eq!(faded(c, 1.5), c);
        assert_eq!(faded(c, -1.0).a(), 0);
    }
}
