//! Scenario tests for qknobs-core.
//!
//! Each test drives a control through a full gesture the way a host UI
//! would: drag events with cumulative translation, drag end, double-tap,
//! container resize, then checks the published state and event stream.

use qknobs_core::{
    AngleRange, ContinuousControl, ControlEvent, DiscreteControl, FaderControl, Feedback,
    ImpactStrength, RadialKnobControl, SnapSettings, ValueRange,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmpEffect {
    Delay,
    Reverb,
    Chorus,
    Fuzz,
}

const AMP_EFFECTS: [AmpEffect; 4] = [
    AmpEffect::Delay,
    AmpEffect::Reverb,
    AmpEffect::Chorus,
    AmpEffect::Fuzz,
];

#[test]
fn fader_zero_db_is_not_the_midpoint() {
    let mut fader = FaderControl::new(ValueRange::new(-48.0, 6.0), 0.5);
    fader.control_mut().set_absolute_value(0.0);

    let expected = (0.0 - (-48.0)) / (6.0 - (-48.0));
    assert!((fader.control().value() - expected).abs() < 1e-12);
    assert!((fader.control().value() - 0.888_888_888_888_888_9).abs() < 1e-12);
}

#[test]
fn radial_knob_centre_angle() {
    let mut knob = RadialKnobControl::new(ValueRange::new(0.0, 11.0), 0.2)
        .with_angles(AngleRange::new(-135.0, 135.0));
    knob.control_mut().set_value(0.5);
    assert_eq!(knob.angle(), 0.0);
    assert!((knob.default_angle() - (-81.0)).abs() < 1e-12);
}

#[test]
fn discrete_knob_second_option_angle() {
    let selector = DiscreteControl::new(AMP_EFFECTS).unwrap();
    assert_eq!(*selector.current(), AmpEffect::Delay);
    assert_eq!(selector.angle_for(&AmpEffect::Reverb), -90.0);
}

#[test]
fn discrete_wrap_five_steps_over_four_options() {
    let mut selector = DiscreteControl::new(AMP_EFFECTS).unwrap();
    let threshold = selector.step_threshold();
    selector.on_drag_changed(5.0 * threshold);
    selector.on_drag_ended();
    assert_eq!(selector.current_index(), 3);
    assert_eq!(*selector.current(), AmpEffect::Fuzz);
    assert!(!selector.is_dragging());
}

#[test]
fn knob_gesture_with_many_events_then_snap() {
    let mut knob = RadialKnobControl::default();

    // Pointer wanders 40 px up, then settles 3 px above the start.
    for dy in [-5.0, -12.0, -25.0, -40.0, -20.0, -8.0, -3.0] {
        knob.on_drag_changed(dy);
    }
    assert!((knob.control().value() - 0.52).abs() < 1e-12);

    knob.on_drag_ended();
    assert_eq!(knob.control().value(), 0.5);

    let feedback: Vec<Feedback> = {
        let control = knob.control_mut();
        let events: Vec<ControlEvent> = control.drain_events().collect();
        events.iter().filter_map(|e| control.feedback_for(e)).collect()
    };
    assert_eq!(feedback, [Feedback::Impact(ImpactStrength::Light)]);
}

#[test]
fn knob_double_tap_resets_and_confirms() {
    let mut knob = RadialKnobControl::new(ValueRange::new(0.0, 10.0), 0.3);
    knob.on_drag_changed(-90.0);
    knob.on_drag_ended();
    assert!((knob.control().absolute_value() - 9.0).abs() < 1e-9);

    knob.control_mut().drain_events().for_each(drop);
    knob.reset();
    assert!((knob.control().absolute_value() - 3.0).abs() < 1e-9);

    let events: Vec<_> = knob.control_mut().drain_events().collect();
    assert_eq!(events, [ControlEvent::Reset { value: 0.3 }]);
    assert_eq!(events[0].feedback(), Some(Feedback::Success));
}

#[test]
fn fader_gesture_resize_and_double_tap() {
    let mut fader = FaderControl::from_control(
        ContinuousControl::with_absolute_default(ValueRange::new(-48.0, 6.0), 0.0)
            .with_snap(SnapSettings::new(0.5, 0.05)),
    );
    fader.set_container_height(300.0);
    assert_eq!(fader.track_height(), 125.0);

    // Drag to the very top.
    fader.on_drag_changed(-400.0);
    fader.on_drag_ended();
    assert_eq!(fader.control().absolute_value(), 6.0);
    assert_eq!(fader.offset(), -125.0);

    // Window grows; handle keeps its relative position.
    fader.set_container_height(500.0);
    assert_eq!(fader.offset(), -225.0);

    // Double-tap returns to the detent at mid-track.
    fader.return_to_snap_point();
    assert_eq!(fader.control().value(), 0.5);
    assert_eq!(fader.offset(), 0.0);
    assert!((fader.control().absolute_value() - (-21.0)).abs() < 1e-12);
}

#[test]
fn degenerate_fader_range_is_fixed() {
    let mut fader = FaderControl::new(ValueRange::new(-6.0, -6.0), 0.5);
    fader.on_drag_changed(-40.0);
    assert_eq!(fader.control().absolute_value(), -6.0);
    fader.control_mut().set_absolute_value(12.0);
    assert_eq!(fader.control().absolute_value(), -6.0);
}

#[test]
fn selector_by_pointer_position() {
    let mut selector = DiscreteControl::new(["clean", "crunch", "lead"]).unwrap();
    selector.on_drag_moved_to(100.0);
    selector.on_drag_moved_to(80.0);
    assert_eq!(*selector.current(), "lead");
    selector.on_drag_moved_to(70.0);
    assert_eq!(*selector.current(), "clean");
    selector.on_drag_ended();

    // A new gesture anchors at the new selection and position.
    selector.on_drag_moved_to(0.0);
    selector.on_drag_moved_to(10.0);
    assert_eq!(*selector.current(), "lead");
}
