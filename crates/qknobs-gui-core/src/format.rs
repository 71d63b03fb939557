//! Value label formatting.

/// How a control's absolute value is shown in its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    /// One decimal place, no unit: `"5.5"`.
    #[default]
    Plain,
    /// Signed decibels: `"+6.0 dB"`, `"-12.5 dB"`, `"0.0 dB"`.
    Decibels,
    /// Hidden.
    None,
}

impl ValueFormat {
    /// Format `value`, or `None` for [`ValueFormat::None`].
    ///
    /// ```rust
    /// use qknobs_gui_core::ValueFormat;
    ///
    /// assert_eq!(ValueFormat::Decibels.format(-48.0).as_deref(), Some("-48.0 dB"));
    /// assert_eq!(ValueFormat::Plain.format(5.5).as_deref(), Some("5.5"));
    /// ```
    pub fn format(self, value: f64) -> Option<String> {
        match self {
            Self::Plain => Some(format!("{:.1}", clean_zero(value))),
            Self::Decibels => {
                let v = clean_zero(value);
                if v > 0.0 {
                    Some(format!("+{v:.1} dB"))
                } else {
                    Some(format!("{v:.1} dB"))
                }
            }
            Self::None => None,
        }
    }
}

/// Collapse values that would print as `-0.0`.
fn clean_zero(value: f64) -> f64 {
    if value.abs() < 0.05 { 0.0 } else { value }
}

/// Capitalize the first letter of an option name for display.
///
/// ```rust
/// use qknobs_gui_core::option_label;
///
/// assert_eq!(option_label("reverb"), "Reverb");
/// ```
pub fn option_label(option: &str) -> String {
    let mut chars = option.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
