//! Vertical fader: a continuous control drawn as a handle on a track.
//!
//! The handle travels along a track of half-length `track_height` centred in
//! the widget. During a drag the **pixel offset** is what gets clamped:
//!
//! ```text
//! offset = clamp(anchor_offset + translation_y, -track_height, track_height)
//! value  = (track_height - offset) / (2 * track_height)
//! ```
//!
//! The handle offset is always derived from the normalized value, so a
//! programmatic write, a snap, or a resize moves the handle consistently.

use crate::continuous::{ContinuousControl, DragOutcome};
use crate::mapping::{clamp_offset, offset_for, value_for_offset};
use crate::range::ValueRange;
use crate::snap::SnapSettings;

/// Pixel dimensions of a fader.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaderGeometry {
    /// Half-length of the handle's travel.
    pub track_height: f64,
    /// Handle width in pixels.
    pub handle_width: f64,
    /// Handle height in pixels.
    pub handle_height: f64,
}

impl FaderGeometry {
    /// Track half-length that keeps the whole handle inside a container of
    /// `container_height` pixels. Never negative.
    ///
    /// ```rust
    /// use qknobs_core::FaderGeometry;
    ///
    /// let geometry = FaderGeometry::default();
    /// assert_eq!(geometry.track_height_for(300.0), 125.0);
    /// assert_eq!(geometry.track_height_for(20.0), 0.0);
    /// ```
    pub fn track_height_for(&self, container_height: f64) -> f64 {
        let height = container_height / 2.0 - self.handle_height / 2.0;
        if height.is_finite() { height.max(0.0) } else { 0.0 }
    }
}

impl Default for FaderGeometry {
    fn default() -> Self {
        Self {
            track_height: 100.0,
            handle_width: 30.0,
            handle_height: 50.0,
        }
    }
}

/// Fader state.
///
/// # Example
///
/// ```rust
/// use qknobs_core::{ContinuousControl, FaderControl, ValueRange};
///
/// let mut fader = FaderControl::from_control(
///     ContinuousControl::with_absolute_default(ValueRange::new(-48.0, 6.0), 0.0),
/// );
/// fader.set_container_height(300.0); // track half-length 125 px
///
/// fader.on_drag_changed(500.0); // far below the track
/// fader.on_drag_ended();
/// assert_eq!(fader.control().absolute_value(), -48.0);
/// assert_eq!(fader.offset(), 125.0);
/// ```
#[derive(Debug, Clone)]
pub struct FaderControl {
    control: ContinuousControl,
    geometry: FaderGeometry,
}

impl FaderControl {
    /// Create a fader over `range` with a normalized default.
    pub fn new(range: ValueRange, default_value: f64) -> Self {
        Self::from_control(ContinuousControl::new(range, default_value))
    }

    /// Wrap an existing continuous control.
    pub fn from_control(control: ContinuousControl) -> Self {
        Self {
            control,
            geometry: FaderGeometry::default(),
        }
    }

    /// Set the pixel geometry.
    pub fn with_geometry(mut self, geometry: FaderGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the detent.
    pub fn with_snap(mut self, snap: SnapSettings) -> Self {
        self.control = self.control.with_snap(snap);
        self
    }

    /// Underlying continuous state.
    #[inline]
    pub fn control(&self) -> &ContinuousControl {
        &self.control
    }

    /// Mutable access to the underlying continuous state.
    #[inline]
    pub fn control_mut(&mut self) -> &mut ContinuousControl {
        &mut self.control
    }

    /// Pixel geometry.
    #[inline]
    pub fn geometry(&self) -> FaderGeometry {
        self.geometry
    }

    /// Current track half-length.
    #[inline]
    pub fn track_height(&self) -> f64 {
        self.geometry.track_height
    }

    /// Handle offset from the track centre (down positive).
    #[inline]
    pub fn offset(&self) -> f64 {
        offset_for(self.control.value(), self.geometry.track_height)
    }

    /// Offset of the detent marker.
    #[inline]
    pub fn snap_offset(&self) -> f64 {
        offset_for(self.control.snap().value, self.geometry.track_height)
    }

    /// Offset of the default marker.
    #[inline]
    pub fn default_offset(&self) -> f64 {
        offset_for(self.control.default_value(), self.geometry.track_height)
    }

    /// Apply a vertical drag translation (screen pixels, down positive)
    /// measured from the gesture start.
    ///
    /// A track with no length leaves the value untouched; a non-finite
    /// translation holds the drag anchor.
    pub fn on_drag_changed(&mut self, translation_y: f64) -> f64 {
        if !self.control.is_active() {
            return self.control.value();
        }
        let anchor = self.control.begin_drag();
        if !translation_y.is_finite() {
            self.control.write_value(anchor);
            return self.control.value();
        }
        let track = self.geometry.track_height;
        let anchor_offset = offset_for(anchor, track);
        let offset = clamp_offset(anchor_offset + translation_y, track);
        if let Some(value) = value_for_offset(offset, track) {
            self.control.write_value(value);
        }
        self.control.value()
    }

    /// Finish the drag, applying the detent.
    pub fn on_drag_ended(&mut self) -> DragOutcome {
        self.control.on_drag_ended()
    }

    /// Double-tap: jump onto the detent.
    pub fn return_to_snap_point(&mut self) {
        self.control.return_to_snap_point();
    }

    /// Recompute the track from the available container height.
    ///
    /// The normalized value is preserved, so the handle keeps its relative
    /// position on the resized track.
    pub fn set_container_height(&mut self, container_height: f64) {
        let track_height = self.geometry.track_height_for(container_height);
        if track_height == self.geometry.track_height {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            container_height,
            track_height,
            "fader track resized"
        );
        self.geometry.track_height = track_height;
    }
}

impl Default for FaderControl {
    /// Mixer-style fader: -48..+6 dB, resting at 0 dB.
    fn default() -> Self {
        Self::from_control(ContinuousControl::with_absolute_default(
            ValueRange::new(-48.0, 6.0),
            0.0,
        ))
    }
}
