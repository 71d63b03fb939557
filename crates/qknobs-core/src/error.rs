//! Construction errors for controls.
//!
//! Control operations themselves never fail: gesture input is clamped or
//! wrapped. The only hard error is building a discrete control without any
//! option to select.

/// Errors raised while constructing a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// A discrete control needs at least one option.
    NoOptions,
    /// The requested index is not a valid option position.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of options available.
        len: usize,
    },
}

impl core::fmt::Display for ControlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoOptions => write!(f, "discrete control requires at least one option"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "option index {index} out of range for {len} options")
            }
        }
    }
}

impl core::error::Error for ControlError {}
