//! Control and layout validation.
//!
//! Configuration files are written by hand, so every number is checked
//! before a control is built from it. Validators collect every problem they
//! find instead of stopping at the first one; a single problem is returned
//! as-is and several are wrapped in [`ValidationError::Multiple`].
//!
//! # Example
//!
//! ```rust
//! use qknobs_config::{KnobConfig, ValidationError, validate_knob};
//!
//! let knob = KnobConfig::new("gain", 0.0, 11.0, 20.0);
//! let err = validate_knob(&knob).unwrap_err();
//! assert!(matches!(err, ValidationError::OutOfRange { .. }));
//! ```

use std::collections::HashSet;
use thiserror::Error;

use crate::control_config::{FaderConfig, KnobConfig, SelectorConfig, SnapConfig};
use crate::layout::PanelLayout;

/// Style names accepted in a layout's `style` field.
pub static STYLE_NAMES: &[&str] = &["basic", "modern", "wood"];

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A control has an empty id.
    #[error("control id must not be empty")]
    EmptyId,

    /// Two controls in one layout share an id.
    #[error("duplicate control id '{0}'")]
    DuplicateId(String),

    /// A numeric field is NaN or infinite.
    #[error("'{control}': {field} must be finite, got {value}")]
    NonFinite {
        /// Id of the control.
        control: String,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The range minimum is above its maximum.
    #[error("'{control}': min_value {min} is greater than max_value {max}")]
    InvertedRange {
        /// Id of the control.
        control: String,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },

    /// A value lies outside the range it must fall in.
    #[error("'{control}': {field} {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Id of the control.
        control: String,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// A field that scales gestures or geometry is zero or negative.
    #[error("'{control}': {field} must be positive, got {value}")]
    NotPositive {
        /// Id of the control.
        control: String,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A selector has no options.
    #[error("selector '{control}' has no options")]
    NoOptions {
        /// Id of the selector.
        control: String,
    },

    /// A selector lists the same option twice.
    #[error("selector '{control}' lists option '{option}' more than once")]
    DuplicateOption {
        /// Id of the selector.
        control: String,
        /// The repeated option.
        option: String,
    },

    /// A selector's default option is not one of its options.
    #[error("selector '{control}' has no option named '{option}'")]
    UnknownOption {
        /// Id of the selector.
        control: String,
        /// The missing option.
        option: String,
    },

    /// Unknown visual style name.
    #[error("unknown style '{0}' (expected one of: basic, modern, wood)")]
    UnknownStyle(String),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a style name (case-insensitive).
pub fn validate_style(name: &str) -> ValidationResult<()> {
    if STYLE_NAMES.iter().any(|s| s.eq_ignore_ascii_case(name)) {
        Ok(())
    } else {
        Err(ValidationError::UnknownStyle(name.to_string()))
    }
}

/// Validate a radial knob configuration.
pub fn validate_knob(knob: &KnobConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();
    check_id(&knob.id, &mut errors);
    check_range(
        &knob.id,
        knob.min_value,
        knob.max_value,
        knob.default_value,
        &mut errors,
    );
    check_snap(&knob.id, &knob.snap, knob.min_value, knob.max_value, &mut errors);
    check_finite(&knob.id, "min_angle", knob.min_angle, &mut errors);
    check_finite(&knob.id, "max_angle", knob.max_angle, &mut errors);
    check_positive(&knob.id, "sensitivity", knob.sensitivity, &mut errors);
    collapse(errors)
}

/// Validate a fader configuration.
pub fn validate_fader(fader: &FaderConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();
    check_id(&fader.id, &mut errors);
    check_range(
        &fader.id,
        fader.min_value,
        fader.max_value,
        fader.default_value,
        &mut errors,
    );
    check_snap(&fader.id, &fader.snap, fader.min_value, fader.max_value, &mut errors);
    check_positive(&fader.id, "handle_width", fader.handle_width, &mut errors);
    check_positive(&fader.id, "handle_height", fader.handle_height, &mut errors);
    collapse(errors)
}

/// Validate a selector configuration.
pub fn validate_selector(selector: &SelectorConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();
    check_id(&selector.id, &mut errors);

    if selector.options.is_empty() {
        errors.push(ValidationError::NoOptions {
            control: selector.id.clone(),
        });
    }

    let mut seen = HashSet::new();
    for option in &selector.options {
        if !seen.insert(option.as_str()) {
            errors.push(ValidationError::DuplicateOption {
                control: selector.id.clone(),
                option: option.clone(),
            });
        }
    }

    if let Some(default) = &selector.default_option
        && !selector.options.contains(default)
    {
        errors.push(ValidationError::UnknownOption {
            control: selector.id.clone(),
            option: default.clone(),
        });
    }

    check_positive(&selector.id, "step_threshold", selector.step_threshold, &mut errors);
    collapse(errors)
}

/// Validate a whole panel layout.
///
/// Checks the style name, id uniqueness across all control kinds, and every
/// control individually.
pub fn validate_layout(layout: &PanelLayout) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if let Err(e) = validate_style(&layout.style) {
        errors.push(e);
    }

    let mut ids = HashSet::new();
    let all_ids = layout
        .knobs
        .iter()
        .map(|k| k.id.as_str())
        .chain(layout.faders.iter().map(|f| f.id.as_str()))
        .chain(layout.selectors.iter().map(|s| s.id.as_str()));
    for id in all_ids {
        if !id.is_empty() && !ids.insert(id) {
            errors.push(ValidationError::DuplicateId(id.to_string()));
        }
    }

    let results = layout
        .knobs
        .iter()
        .map(validate_knob)
        .chain(layout.faders.iter().map(validate_fader))
        .chain(layout.selectors.iter().map(validate_selector));
    for result in results {
        match result {
            Ok(()) => {}
            Err(ValidationError::Multiple(inner)) => errors.extend(inner),
            Err(e) => errors.push(e),
        }
    }

    collapse(errors)
}

fn collapse(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

fn check_id(id: &str, errors: &mut Vec<ValidationError>) {
    if id.trim().is_empty() {
        errors.push(ValidationError::EmptyId);
    }
}

fn check_finite(control: &str, field: &'static str, value: f64, errors: &mut Vec<ValidationError>) -> bool {
    if value.is_finite() {
        true
    } else {
        errors.push(ValidationError::NonFinite {
            control: control.to_string(),
            field,
            value,
        });
        false
    }
}

fn check_positive(control: &str, field: &'static str, value: f64, errors: &mut Vec<ValidationError>) {
    if check_finite(control, field, value, errors) && value <= 0.0 {
        errors.push(ValidationError::NotPositive {
            control: control.to_string(),
            field,
            value,
        });
    }
}

fn check_range(control: &str, min: f64, max: f64, default: f64, errors: &mut Vec<ValidationError>) {
    let min_ok = check_finite(control, "min_value", min, errors);
    let max_ok = check_finite(control, "max_value", max, errors);
    let default_ok = check_finite(control, "default_value", default, errors);
    if !(min_ok && max_ok) {
        return;
    }
    if min > max {
        errors.push(ValidationError::InvertedRange {
            control: control.to_string(),
            min,
            max,
        });
        return;
    }
    if default_ok && !(min..=max).contains(&default) {
        errors.push(ValidationError::OutOfRange {
            control: control.to_string(),
            field: "default_value",
            value: default,
            min,
            max,
        });
    }
}

fn check_snap(control: &str, snap: &SnapConfig, min: f64, max: f64, errors: &mut Vec<ValidationError>) {
    if check_finite(control, "snap.threshold", snap.threshold, errors)
        && !(0.0..=1.0).contains(&snap.threshold)
    {
        errors.push(ValidationError::OutOfRange {
            control: control.to_string(),
            field: "snap.threshold",
            value: snap.threshold,
            min: 0.0,
            max: 1.0,
        });
    }

    let Some(value) = snap.value else {
        return;
    };
    if check_finite(control, "snap.value", value, errors)
        && min.is_finite()
        && max.is_finite()
        && min <= max
        && !(min..=max).contains(&value)
    {
        errors.push(ValidationError::OutOfRange {
            control: control.to_string(),
            field: "snap.value",
            value,
            min,
            max,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_style() {
        assert!(validate_style("modern").is_ok());
        assert!(validate_style("Wood").is_ok());
        assert_eq!(
            validate_style("chrome"),
            Err(ValidationError::UnknownStyle("chrome".to_string()))
        );
    }

    #[test]
    fn test_valid_knob() {
        let knob = KnobConfig::new("gain", 0.0, 11.0, 5.5);
        assert!(validate_knob(&knob).is_ok());
    }

    #[test]
    fn test_knob_default_outside_range() {
        let knob = KnobConfig::new("gain", 0.0, 11.0, 12.0);
        assert_eq!(
            validate_knob(&knob),
            Err(ValidationError::OutOfRange {
                control: "gain".to_string(),
                field: "default_value",
                value: 12.0,
                min: 0.0,
                max: 11.0,
            })
        );
    }

    #[test]
    fn test_knob_degenerate_range_is_allowed() {
        let knob = KnobConfig::new("fixed", 3.0, 3.0, 3.0);
        assert!(validate_knob(&knob).is_ok());
    }

    #[test]
    fn test_knob_inverted_range() {
        let knob = KnobConfig::new("gain", 11.0, 0.0, 5.0);
        assert!(matches!(
            validate_knob(&knob),
            Err(ValidationError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_knob_non_finite_and_zero_sensitivity_collected() {
        let knob = KnobConfig::new("gain", 0.0, 11.0, 5.0)
            .with_angles(f64::NAN, 135.0)
            .with_sensitivity(0.0);
        let Err(ValidationError::Multiple(errors)) = validate_knob(&knob) else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::NonFinite { field: "min_angle", .. }));
        assert!(matches!(errors[1], ValidationError::NotPositive { field: "sensitivity", .. }));
    }

    #[test]
    fn test_snap_threshold_must_be_normalized() {
        let knob = KnobConfig::new("gain", 0.0, 11.0, 5.0).with_snap_threshold(1.5);
        assert!(matches!(
            validate_knob(&knob),
            Err(ValidationError::OutOfRange { field: "snap.threshold", .. })
        ));

        let knob = KnobConfig::new("gain", 0.0, 11.0, 5.0).with_snap_threshold(-0.1);
        assert!(validate_knob(&knob).is_err());
    }

    #[test]
    fn test_snap_value_outside_range() {
        let fader = FaderConfig::new("volume", -48.0, 6.0, 0.0).with_snap_value(10.0);
        assert!(matches!(
            validate_fader(&fader),
            Err(ValidationError::OutOfRange { field: "snap.value", .. })
        ));
    }

    #[test]
    fn test_fader_handle_must_be_positive() {
        let fader = FaderConfig::new("volume", -48.0, 6.0, 0.0).with_handle(30.0, 0.0);
        assert!(matches!(
            validate_fader(&fader),
            Err(ValidationError::NotPositive { field: "handle_height", .. })
        ));
    }

    #[test]
    fn test_selector_checks() {
        let empty = SelectorConfig::new("fx", Vec::<String>::new());
        assert_eq!(
            validate_selector(&empty),
            Err(ValidationError::NoOptions {
                control: "fx".to_string()
            })
        );

        let dup = SelectorConfig::new("fx", ["delay", "reverb", "delay"]);
        assert!(matches!(
            validate_selector(&dup),
            Err(ValidationError::DuplicateOption { ref option, .. }) if option == "delay"
        ));

        let unknown = SelectorConfig::new("fx", ["delay", "reverb"]).with_default_option("fuzz");
        assert!(matches!(
            validate_selector(&unknown),
            Err(ValidationError::UnknownOption { .. })
        ));

        let zero_step = SelectorConfig::new("fx", ["delay"]).with_step_threshold(0.0);
        assert!(matches!(
            validate_selector(&zero_step),
            Err(ValidationError::NotPositive { field: "step_threshold", .. })
        ));
    }

    #[test]
    fn test_empty_id() {
        let knob = KnobConfig::new("  ", 0.0, 1.0, 0.5);
        assert_eq!(validate_knob(&knob), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_layout_duplicate_ids_across_kinds() {
        let layout = PanelLayout::new("dup")
            .with_knob(KnobConfig::new("volume", 0.0, 11.0, 5.0))
            .with_fader(FaderConfig::new("volume", -48.0, 6.0, 0.0));
        assert_eq!(
            validate_layout(&layout),
            Err(ValidationError::DuplicateId("volume".to_string()))
        );
    }

    #[test]
    fn test_layout_flattens_nested_errors() {
        let layout = PanelLayout::new("bad")
            .with_style("chrome")
            .with_knob(
                KnobConfig::new("gain", 0.0, 11.0, 5.0)
                    .with_angles(f64::INFINITY, 135.0)
                    .with_sensitivity(-1.0),
            );
        let Err(ValidationError::Multiple(errors)) = validate_layout(&layout) else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| !matches!(e, ValidationError::Multiple(_))));
    }

    #[test]
    fn test_multiple_display_joins_messages() {
        let err = ValidationError::Multiple(vec![
            ValidationError::EmptyId,
            ValidationError::UnknownStyle("x".to_string()),
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("multiple validation errors: "));
        assert!(msg.contains("control id must not be empty; unknown style 'x'"));
    }
}
