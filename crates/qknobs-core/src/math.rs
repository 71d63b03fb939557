//! Small numeric helpers shared by every control.
//!
//! All functions are allocation-free and `no_std` friendly.

/// Clamp a value into \[0, 1\].
///
/// NaN collapses to `0.0` so a bad gesture delta can never leak into
/// control state.
///
/// # Example
/// ```rust
/// use qknobs_core::clamp01;
///
/// assert_eq!(clamp01(-0.2), 0.0);
/// assert_eq!(clamp01(0.4), 0.4);
/// assert_eq!(clamp01(3.0), 1.0);
/// ```
#[inline]
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b`.
///
/// `t = 0` yields `a`, `t = 1` yields `b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Modulo that always lands in `0..modulus`.
///
/// Returns `0` for a zero modulus instead of panicking.
///
/// # Example
/// ```rust
/// use qknobs_core::positive_modulo;
///
/// assert_eq!(positive_modulo(-5, 4), 3);
/// assert_eq!(positive_modulo(6, 4), 2);
/// assert_eq!(positive_modulo(3, 0), 0);
/// ```
#[inline]
pub fn positive_modulo(value: i64, modulus: usize) -> usize {
    if modulus == 0 {
        return 0;
    }
    value.rem_euclid(modulus as i64) as usize
}

/// Round half away from zero.
#[inline]
pub(crate) fn round(value: f64) -> f64 {
    libm::round(value)
}

/// Absolute value.
#[inline]
pub(crate) fn abs(value: f64) -> f64 {
    libm::fabs(value)
}
