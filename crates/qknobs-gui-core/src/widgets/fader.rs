//! Vertical fader widget.

use egui::{Align2, FontId, Rect, Response, Sense, Ui, Widget, pos2, vec2};
use qknobs_core::{DragOutcome, FaderControl};

use super::{caption, drag_translation};
use crate::format::ValueFormat;
use crate::style::{FaderStyle, FaderVisual, StyleKind};
use crate::theme::Theme;

const LABEL_SPACE: f32 = 36.0;

/// Minimum track area, so a cramped layout still shows a handle.
const MIN_HEIGHT: f32 = 80.0;

/// Vertical fader bound to a [`FaderControl`].
///
/// - Press on the handle and drag to move it
/// - Release near the detent to snap onto it
/// - Double-click to jump to the detent
///
/// The allocated height is reported to the control every frame; the track
/// follows the widget when the window is resized.
pub struct Fader<'a> {
    fader: &'a mut FaderControl,
    style: &'a dyn FaderStyle,
    theme: Theme,
    label: &'a str,
    width: f32,
    height: Option<f32>,
    format: ValueFormat,
    show_range: bool,
}

impl<'a> Fader<'a> {
    /// Create a fader widget in the default style, filling the available height.
    pub fn new(fader: &'a mut FaderControl, label: &'a str) -> Self {
        Self {
            fader,
            style: StyleKind::default().fader(),
            theme: Theme::default(),
            label,
            width: 60.0,
            height: None,
            format: ValueFormat::Decibels,
            show_range: false,
        }
    }

    /// Paint with a custom style.
    pub fn style(mut self, style: &'a dyn FaderStyle) -> Self {
        self.style = style;
        self
    }

    /// Paint with one of the bundled styles.
    pub fn style_kind(self, kind: StyleKind) -> Self {
        self.style(kind.fader())
    }

    /// Set the theme colors.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Fixed track area height instead of the available height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Widget width in pixels.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set how the absolute value is printed.
    pub fn format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    /// Print the range maximum above and minimum below the track.
    pub fn show_range(mut self, show: bool) -> Self {
        self.show_range = show;
        self
    }
}

/// End the gesture if the handle was actually grabbed.
///
/// A press that missed the handle never moved the fader, so it must not
/// pull it onto the detent either.
fn release(fader: &mut FaderControl) -> Option<DragOutcome> {
    fader
        .control()
        .is_dragging()
        .then(|| fader.on_drag_ended())
}

impl Widget for Fader<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = self
            .height
            .unwrap_or_else(|| ui.available_height() - LABEL_SPACE)
            .max(MIN_HEIGHT);
        let width = self
            .width
            .max(self.fader.geometry().handle_width as f32 + 4.0);
        let (rect, mut response) =
            ui.allocate_exact_size(vec2(width, height + LABEL_SPACE), Sense::click_and_drag());
        let track_rect = Rect::from_min_size(rect.min, vec2(width, height));

        self.fader.set_container_height(f64::from(height));

        let before = self.fader.control().value();

        if response.double_clicked() {
            self.fader.return_to_snap_point();
        } else if response.dragged()
            && let Some(translation) = drag_translation(ui, &response)
        {
            let grabbed = self.fader.control().is_dragging()
                || ui
                    .input(|i| i.pointer.press_origin())
                    .is_some_and(|origin| {
                        FaderVisual::new(self.fader, true)
                            .handle_rect(track_rect)
                            .expand(4.0)
                            .contains(origin)
                    });
            if grabbed {
                self.fader.on_drag_changed(f64::from(translation.y));
            }
        }
        if response.drag_stopped() {
            release(self.fader);
        }

        if self.fader.control().value() != before {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let interacting = response.hovered() || response.dragged();
            let visual = FaderVisual::new(self.fader, interacting);
            self.style.paint(painter, track_rect, &visual, &self.theme);

            if self.show_range {
                let range = self.fader.control().range();
                let font = FontId::proportional(9.0);
                let x = track_rect.right();
                if let Some(max) = self.format.format(range.max) {
                    painter.text(
                        pos2(x, track_rect.top()),
                        Align2::RIGHT_TOP,
                        max,
                        font.clone(),
                        self.theme.text_secondary,
                    );
                }
                if let Some(min) = self.format.format(range.min) {
                    painter.text(
                        pos2(x, track_rect.bottom()),
                        Align2::RIGHT_BOTTOM,
                        min,
                        font,
                        self.theme.text_secondary,
                    );
                }
            }

            let label_y = track_rect.bottom() + 6.0;
            caption(
                painter,
                pos2(rect.center().x, label_y),
                self.label,
                12.0,
                self.theme.text_primary,
            );
            if let Some(value) = self.format.format(self.fader.control().absolute_value()) {
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
