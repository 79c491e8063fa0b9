//! Scalar abstraction and the crate-wide comparison tolerance.
//!
//! Every vector, matrix and quaternion type is generic over [`Scalar`], which
//! is implemented for `f32` and `f64` only.

use core::fmt::{Debug, Display};
use core::str::FromStr;
use std::sync::OnceLock;

use num_traits::{Float, FloatConst};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point element type of all vectors, matrices and quaternions.
pub trait Scalar:
    Float
    + FloatConst
    + nalgebra::Scalar
    + Default
    + Debug
    + Display
    + FromStr
    + Send
    + Sync
    + private::Sealed
{
    /// Precision dependent epsilon for approximate equality in tests and
    /// `practically_equals` call sites.
    const DEFAULT_EPSILON: Self;

    /// Half-width of the band around `|m[1][2]| == 1` treated as gimbal lock
    /// by Euler angle extraction.
    const GIMBAL_LOCK_TOLERANCE: Self;

    /// Below this `|sin(angle / 2)|` [`axis_angle`](crate::Quaternion::axis_angle)
    /// stops dividing by the sine.
    const AXIS_ANGLE_SIN_GUARD: Self;

    /// Converts an `f64` literal into this precision.
    fn lit(value: f64) -> Self;

    /// Widens to `f64` for logging and error payloads.
    fn to_f64_lossless(self) -> f64;
}

impl Scalar for f32 {
    const DEFAULT_EPSILON: Self = 1e-6;
    const GIMBAL_LOCK_TOLERANCE: Self = 1e-4;
    const AXIS_ANGLE_SIN_GUARD: Self = 0.0005;

    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    const DEFAULT_EPSILON: Self = 1e-14;
    const GIMBAL_LOCK_TOLERANCE: Self = 1e-4;
    const AXIS_ANGLE_SIN_GUARD: Self = 0.0005;

    #[inline]
    fn lit(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self
    }
}

/// Lazily-initialized tolerance used by the approximate predicates.
/// The default can be overridden:
///  1) **Build-time**: set env var `VECMATH3D_TOLERANCE` (e.g. `VECMATH3D_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<f64> = OnceLock::new();

/// Tolerance used when neither the env var nor [`set_tolerance`] provides one.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Returns the current tolerance.
/// If not set yet, it tries `VECMATH3D_TOLERANCE` and falls back to
/// [`DEFAULT_TOLERANCE`].
pub fn tolerance() -> f64 {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("VECMATH3D_TOLERANCE") {
            if let Ok(value) = f64::from_str(environment_variable) {
                return value.max(f64::EPSILON);
            }
        }
        DEFAULT_TOLERANCE
    })
}

/// Square of [`tolerance`], compared against squared lengths.
pub fn square_tolerance() -> f64 {
    let t = tolerance();
    t * t
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `vecmath3d::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: f64) {
    if TOLERANCE_CELL.set(value.max(f64::EPSILON)).is_err() {
        log::warn!(
            "tolerance already fixed at {}, ignoring set_tolerance({value})",
            tolerance()
        );
    }
}

/// `|a - b| <= tolerance()`.
pub fn equal_epsilon<T: Scalar>(a: T, b: T) -> bool {
    (a - b).abs() <= T::lit(tolerance())
}

/// `|a - b| <= square_tolerance()`.
pub fn equal_square_epsilon<T: Scalar>(a: T, b: T) -> bool {
    (a - b).abs() <= T::lit(square_tolerance())
}

/// Degrees to radians.
pub fn deg_to_rad<T: Scalar>(degrees: T) -> T {
    degrees * T::PI() / T::lit(180.0)
}

/// Radians to degrees.
pub fn rad_to_deg<T: Scalar>(radians: T) -> T {
    radians * T::lit(180.0) / T::PI()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_stable_after_set() {
        let before = tolerance();
        set_tolerance(before * 10.0);
        assert_eq!(tolerance(), before);
        assert_eq!(square_tolerance(), before * before);
    }

    #[test]
    fn epsilon_predicates() {
        assert!(equal_epsilon(1.0_f64, 1.0 + tolerance() / 2.0));
        assert!(!equal_epsilon(1.0_f32, 1.1));
        assert!(equal_square_epsilon(0.0_f64, 0.0));
    }

    #[test]
    fn degree_conversion() {
        assert!((deg_to_rad(180.0_f64) - std::f64::consts::PI).abs() < 1e-15);
        assert!((rad_to_deg(std::f32::consts::FRAC_PI_2) - 90.0).abs() < 1e-4);
    }
}
