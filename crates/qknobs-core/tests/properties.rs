//! Property-based tests for the control value model.
//!
//! Covers angle monotonicity, absolute round-trips, drag idempotence, snap
//! convergence, and discrete wrap-around using proptest for randomized input.

use proptest::prelude::*;
use qknobs_core::{
    AngleRange, ContinuousControl, DiscreteControl, FaderControl, SnapSettings, ValueRange,
    angle_for, positive_modulo,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// angle_for is monotonic over [0, 1] and hits both end stops exactly.
    #[test]
    fn angle_is_monotonic(
        min_angle in -360.0f64..0.0,
        sweep in 0.0f64..360.0,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let max_angle = min_angle + sweep;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(angle_for(lo, min_angle, max_angle) <= angle_for(hi, min_angle, max_angle));
        prop_assert_eq!(angle_for(0.0, min_angle, max_angle), min_angle);
        prop_assert!((angle_for(1.0, min_angle, max_angle) - max_angle).abs() < 1e-9);
    }

    /// Writing an absolute value and reading it back returns the clamped input.
    #[test]
    fn absolute_round_trip(
        min in -100.0f64..100.0,
        span in 0.001f64..200.0,
        x in -400.0f64..400.0,
    ) {
        let max = min + span;
        let mut control = ContinuousControl::new(ValueRange::new(min, max), 0.5);
        control.set_absolute_value(x);
        let expected = x.clamp(min, max);
        prop_assert!(
            (control.absolute_value() - expected).abs() < 1e-9 * (1.0 + expected.abs()),
            "min={} max={} x={} got={}", min, max, x, control.absolute_value()
        );
        prop_assert!((0.0..=1.0).contains(&control.value()));
    }

    /// One drag event and many incremental events with the same final delta
    /// leave the control at the same value.
    #[test]
    fn drag_is_idempotent_in_event_count(
        start in 0.0f64..=1.0,
        path in prop::collection::vec(-400.0f64..400.0, 1..20),
    ) {
        let snap = SnapSettings::disabled(0.5);
        let mut single = ContinuousControl::new(ValueRange::unit(), start).with_snap(snap);
        let mut stepped = single.clone();

        let final_delta = *path.last().unwrap();
        single.on_drag_changed(final_delta, 150.0);
        for delta in &path {
            stepped.on_drag_changed(*delta, 150.0);
        }
        prop_assert_eq!(single.value(), stepped.value());
        single.on_drag_ended();
        stepped.on_drag_ended();
        prop_assert_eq!(single.value(), stepped.value());
    }

    /// The same holds for faders, where the pixel offset is clamped.
    #[test]
    fn fader_drag_is_idempotent_in_event_count(
        start in 0.0f64..=1.0,
        path in prop::collection::vec(-600.0f64..600.0, 1..20),
    ) {
        let mut single = FaderControl::new(ValueRange::unit(), start)
            .with_snap(SnapSettings::disabled(0.5));
        let mut stepped = single.clone();

        single.on_drag_changed(*path.last().unwrap());
        for delta in &path {
            stepped.on_drag_changed(*delta);
        }
        prop_assert_eq!(single.control().value(), stepped.control().value());
    }

    /// Value always stays inside [0, 1] whatever the drag.
    #[test]
    fn value_stays_normalized(
        delta in prop::num::f64::ANY,
        sensitivity in prop::num::f64::ANY,
    ) {
        let mut control = ContinuousControl::default();
        control.on_drag_changed(delta, sensitivity);
        prop_assert!((0.0..=1.0).contains(&control.value()));
        prop_assert!((0.0..=1.0).contains(&control.absolute_value()));
    }

    /// At drag end, a value within the threshold lands on the detent and
    /// anything else is left alone.
    #[test]
    fn snap_converges(
        snap_value in 0.0f64..=1.0,
        threshold in 0.0f64..0.5,
        v in 0.0f64..=1.0,
    ) {
        let mut control = ContinuousControl::new(ValueRange::unit(), 0.5)
            .with_snap(SnapSettings::new(snap_value, threshold));
        control.set_value(v);
        control.on_drag_ended();
        if (v - snap_value).abs() < threshold {
            prop_assert_eq!(control.value(), snap_value);
        } else {
            prop_assert_eq!(control.value(), v);
        }
    }

    /// Discrete drags always land on a valid index, matching the wrap formula.
    #[test]
    fn discrete_index_wraps(
        count in 1usize..12,
        start in 0usize..12,
        delta in -1000.0f64..1000.0,
    ) {
        let start = start % count;
        let mut selector = DiscreteControl::new(0..count)
            .unwrap()
            .with_selected_index(start)
            .unwrap();
        let index = selector.on_drag_changed_by(delta, 10.0);
        let steps = (delta / 10.0).round() as i64;
        prop_assert_eq!(index, positive_modulo(start as i64 - steps, count));
        prop_assert_eq!(*selector.current(), index);
    }

    /// Angle ranges map the default value the same way for marker and pointer.
    #[test]
    fn default_marker_matches_pointer_at_default(
        default_value in 0.0f64..=1.0,
    ) {
        let range = AngleRange::STANDARD;
        let control = ContinuousControl::new(ValueRange::unit(), default_value);
        prop_assert_eq!(
            range.angle_for(control.value()),
            range.angle_for(control.default_value())
        );
    }
}
