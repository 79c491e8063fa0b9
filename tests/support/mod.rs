//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use approx::{AbsDiffEq, assert_abs_diff_eq};
use vecmath3d::{Generic, Quaternion, Scalar, Vec3};

/// Routes `log` output through the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Element-wise comparison of two vectors or matrices of the same shape.
pub fn assert_close<T>(actual: &dyn Generic<T>, expected: &dyn Generic<T>, eps: T)
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    assert_eq!(actual.rows(), expected.rows(), "row count differs");
    assert_eq!(actual.cols(), expected.cols(), "column count differs");
    for (a, e) in actual.to_vec().into_iter().zip(expected.to_vec()) {
        assert_abs_diff_eq!(a, e, epsilon = eps);
    }
}

/// `a` and `b` describe the same rotation, i.e. `a ≈ b` or `a ≈ -b`.
pub fn same_rotation<T: Scalar>(a: &Quaternion<T>, b: &Quaternion<T>, eps: T) -> bool {
    let close = |s: T| {
        (a.x - s * b.x).abs() <= eps
            && (a.y - s * b.y).abs() <= eps
            && (a.z - s * b.z).abs() <= eps
            && (a.w - s * b.w).abs() <= eps
    };
    close(T::one()) || close(-T::one())
}

/// Euler angle triples in degrees that stay clear of gimbal lock.
pub const EULER_DEGREES: [[f64; 3]; 6] = [
    [0.0, 0.0, 0.0],
    [90.0, 20.0, 21.0],
    [-90.0, 0.0, 0.0],
    [28.0, -43.0, -38.0],
    [170.0, 45.0, -120.0],
    [-135.0, -80.0, 60.0],
];

pub const TEST_VECTORS: [[f64; 3]; 3] = [[2.0, 3.0, 4.0], [1.0, 3.0, -2.0], [-6.0, 2.0, 9.0]];

pub fn vec3d(a: [f64; 3]) -> Vec3<f64> {
    Vec3::new(a[0], a[1], a[2])
}
