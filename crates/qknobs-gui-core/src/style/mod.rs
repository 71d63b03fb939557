//! Pluggable painters for the control widgets.
//!
//! Each widget paints through a style trait object, so the look of a panel
//! is chosen at runtime without touching the control logic. A style only
//! reads a `*Visual` snapshot of the control; it never mutates state.
//!
//! Three looks ship with the crate: [`Basic`], [`Modern`] and [`Wood`].
//! [`StyleKind`] selects one by name.

mod basic;
mod modern;
mod wood;

pub use basic::Basic;
pub use modern::Modern;
pub use wood::Wood;

use std::fmt;
use std::str::FromStr;

use egui::{Painter, Pos2, Rect, Vec2, pos2, vec2};
use qknobs_core::{DiscreteControl, FaderControl, RadialKnobControl};

use crate::theme::Theme;

/// What a radial knob style needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialKnobVisual {
    /// Pointer angle in degrees (0 = 12 o'clock, clockwise).
    pub angle: f32,
    /// Angle of the default marker.
    pub default_angle: f32,
    /// Angle at the minimum value.
    pub min_angle: f32,
    /// Angle at the maximum value.
    pub max_angle: f32,
    /// Whether the detent is active (drawn dimmed otherwise).
    pub snap_enabled: bool,
    /// Pointer is hovering or dragging.
    pub interacting: bool,
}

impl RadialKnobVisual {
    /// Snapshot `knob`.
    pub fn new(knob: &RadialKnobControl, interacting: bool) -> Self {
        let angles = knob.angles();
        Self {
            angle: knob.angle() as f32,
            default_angle: knob.default_angle() as f32,
            min_angle: angles.min as f32,
            max_angle: angles.max as f32,
            snap_enabled: knob.control().snap_enabled(),
            interacting,
        }
    }
}

/// What a discrete knob style needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteKnobVisual {
    /// Tick angle of every option, by index.
    pub option_angles: Vec<f32>,
    /// Pointer angle of the current selection.
    pub current_angle: f32,
    /// Pointer is hovering or dragging.
    pub interacting: bool,
}

impl DiscreteKnobVisual {
    /// Snapshot `control`.
    pub fn new<T: PartialEq>(control: &DiscreteControl<T>, interacting: bool) -> Self {
        Self {
            option_angles: (0..control.len())
                .map(|i| control.angle_for_index(i) as f32)
                .collect(),
            current_angle: control.current_angle() as f32,
            interacting,
        }
    }
}

/// What a fader style needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaderVisual {
    /// Handle offset from the track centre, down positive.
    pub offset: f32,
    /// Offset of the detent marker.
    pub snap_offset: f32,
    /// Whether the detent is active.
    pub snap_enabled: bool,
    /// Handle width and height.
    pub handle_size: Vec2,
    /// Pointer is hovering or dragging.
    pub interacting: bool,
}

impl FaderVisual {
    /// Snapshot `fader`.
    pub fn new(fader: &FaderControl, interacting: bool) -> Self {
        let geometry = fader.geometry();
        Self {
            offset: fader.offset() as f32,
            snap_offset: fader.snap_offset() as f32,
            snap_enabled: fader.control().snap_enabled(),
            handle_size: vec2(geometry.handle_width as f32, geometry.handle_height as f32),
            interacting,
        }
    }

    /// Handle rectangle inside the fader's allocated `rect`.
    pub fn handle_rect(&self, rect: Rect) -> Rect {
        Rect::from_center_size(self.handle_center(rect), self.handle_size)
    }

    /// Handle centre inside `rect`.
    pub fn handle_center(&self, rect: Rect) -> Pos2 {
        pos2(rect.center().x, rect.center().y + self.offset)
    }

    /// Vertical position of the detent marker inside `rect`.
    pub fn snap_y(&self, rect: Rect) -> f32 {
        rect.center().y + self.snap_offset
    }
}

/// Painter for continuous radial knobs.
pub trait RadialKnobStyle {
    /// Paint a knob of `radius` around `center`.
    fn paint(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        visual: &RadialKnobVisual,
        theme: &Theme,
    );
}

/// Painter for discrete selector knobs.
pub trait DiscreteKnobStyle {
    /// Paint a selector of `radius` around `center`.
    fn paint(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        visual: &DiscreteKnobVisual,
        theme: &Theme,
    );
}

/// Painter for vertical faders.
pub trait FaderStyle {
    /// Paint the track and handle inside `rect`.
    fn paint(&self, painter: &Painter, rect: Rect, visual: &FaderVisual, theme: &Theme);
}

static BASIC: Basic = Basic;
static MODERN: Modern = Modern;
static WOOD: Wood = Wood;

/// One of the bundled looks, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleKind {
    /// Flat grey controls.
    Basic,
    /// Dark controls with white accents.
    #[default]
    Modern,
    /// Wooden bodies with brass accents.
    Wood,
}

impl StyleKind {
    /// All bundled styles.
    pub const ALL: [StyleKind; 3] = [StyleKind::Basic, StyleKind::Modern, StyleKind::Wood];

    /// Lowercase name, as used in layout files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Modern => "modern",
            Self::Wood => "wood",
        }
    }

    /// Radial knob painter for this style.
    pub fn radial(self) -> &'static dyn RadialKnobStyle {
        match self {
            Self::Basic => &BASIC,
            Self::Modern => &MODERN,
            Self::Wood => &WOOD,
        }
    }

    /// Discrete knob painter for this style.
    pub fn discrete(self) -> &'static dyn DiscreteKnobStyle {
        match self {
            Self::Basic => &BASIC,
            Self::Modern => &MODERN,
            Self::Wood => &WOOD,
        }
    }

    /// Fader painter for this style.
    pub fn fader(self) -> &'static dyn FaderStyle {
        match self {
            Self::Basic => &BASIC,
            Self::Modern => &MODERN,
            Self::Wood => &WOOD,
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown style name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError(pub String);

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown style '{}' (expected basic, modern or wood)", self.0)
    }
}

impl std::error::Error for ParseStyleError {}

impl FromStr for StyleKind {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}
