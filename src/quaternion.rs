//! Rotation quaternions.
//!
//! `(x, y, z)` is the vector part and `w` the scalar part. Operations that
//! produce a rotation (construction from angles, [`Quaternion::mul`],
//! [`Quaternion::slerp`], [`Quaternion::vec3_diff`]) return unit quaternions;
//! negation, conjugation and raw construction do not normalize.
//!
//! `q` and `-q` describe the same rotation. Use
//! [`Quaternion::set_shortest_rotation`] before interpolating to pick the
//! sign that takes the short way around.

use core::fmt;
use core::ops::{Mul, Neg};
use core::str::FromStr;

use crate::errors::MathError;
use crate::float_types::Scalar;
use crate::io::{parse_scalars, write_scalars};
use crate::vec3::Vec3;
use crate::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// All components zero; not a rotation.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// The identity rotation.
    pub fn ident() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `angle` radians around `axis`.
    pub fn from_axis_angle(axis: &Vec3<T>, angle: T) -> Self {
        let (sin, cos) = (angle * T::lit(0.5)).sin_cos();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos).normalized()
    }

    pub fn from_x_axis_angle(angle: T) -> Self {
        Self::from_axis_angle(&Vec3::unit_x(), angle)
    }

    pub fn from_y_axis_angle(angle: T) -> Self {
        Self::from_axis_angle(&Vec3::unit_y(), angle)
    }

    pub fn from_z_axis_angle(angle: T) -> Self {
        Self::from_axis_angle(&Vec3::unit_z(), angle)
    }

    /// Head around Y, pitch around X and roll around Z, composed as
    /// `qy * qx * qz`.
    pub fn from_euler_angles(y_head: T, x_pitch: T, z_roll: T) -> Self {
        let qy = Self::from_y_axis_angle(y_head);
        let qx = Self::from_x_axis_angle(x_pitch);
        let qz = Self::from_z_axis_angle(z_roll);
        Self::mul3(&qy, &qx, &qz)
    }

    /// Recovers `(y_head, x_pitch, z_roll)` such that
    /// [`from_euler_angles`](Self::from_euler_angles) gives back this
    /// rotation (up to sign).
    pub fn to_euler_angles(&self) -> (T, T, T) {
        let z = self.rotated_vec3(&Vec3::unit_z());
        let y_head = z.x.atan2(z.z);
        let x_pitch = -z.y.atan2((z.x * z.x + z.z * z.z).sqrt());

        let no_roll = Self::from_euler_angles(y_head, x_pitch, T::zero());
        let x2 = no_roll.rotated_vec3(&Vec3::unit_x());
        let x = self.rotated_vec3(&Vec3::unit_x());
        let z_roll = -x.cross(&x2).dot(&z).atan2(x.dot(&x2));
        (y_head, x_pitch, z_roll)
    }

    pub fn from_vec4(v: &Vec4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    pub fn vec4(&self) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    pub fn as_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Rotation axis and angle in radians. Near the identity rotation the
    /// axis is returned unscaled.
    pub fn axis_angle(&self) -> (Vec3<T>, T) {
        let cos = self.w;
        let sin = (T::one() - cos * cos).sqrt();
        let angle = cos.acos() * T::lit(2.0);
        let oo_sin = if sin.abs() < T::AXIS_ANGLE_SIN_GUARD {
            T::one()
        } else {
            T::one() / sin
        };
        (Vec3::new(self.x * oo_sin, self.y * oo_sin, self.z * oo_sin), angle)
    }

    /// Squared magnitude `x² + y² + z² + w²`.
    pub fn norm(&self) -> T {
        self.dot(self)
    }

    /// Scales to unit norm. A norm of exactly zero or one is left untouched.
    pub fn normalize(&mut self) -> &mut Self {
        let norm = self.norm();
        if norm == T::one() || norm == T::zero() {
            return self;
        }
        let ool = T::one() / norm.sqrt();
        self.x = self.x * ool;
        self.y = self.y * ool;
        self.z = self.z * ool;
        self.w = self.w * ool;
        self
    }

    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Negates all four components; the rotation stays the same.
    pub fn negate(&mut self) -> &mut Self {
        *self = self.negated();
        self
    }

    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Conjugates, which inverts a unit quaternion.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverted();
        self
    }

    pub fn inverted(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Flips the sign of `self` if needed so that interpolating towards
    /// `other` takes the shorter arc.
    pub fn set_shortest_rotation(&mut self, other: &Self) -> &mut Self {
        if !Self::is_shortest_rotation(self, other) {
            self.negate();
        }
        self
    }

    pub fn is_shortest_rotation(a: &Self, b: &Self) -> bool {
        a.dot(b) >= T::zero()
    }

    /// True if the norm is within `tolerance` of one.
    pub fn is_unit_quat(&self, tolerance: T) -> bool {
        let norm = self.norm();
        norm >= T::one() - tolerance && norm <= T::one() + tolerance
    }

    /// Rotates `v` in place, see [`rotated_vec3`](Self::rotated_vec3).
    pub fn rotate_vec3(&self, v: &mut Vec3<T>) {
        *v = self.rotated_vec3(v);
    }

    /// Rotates `v` without building the sandwich product `q * v * q⁻¹`.
    pub fn rotated_vec3(&self, v: &Vec3<T>) -> Vec3<T> {
        let u = Vec3::new(self.x, self.y, self.z);
        let s = self.w;
        let two = T::lit(2.0);
        u.scaled(two * u.dot(v)) + v.scaled(s * s - u.dot(&u)) + u.cross(v).scaled(two * s)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Hamilton product `a * b`, normalized. Applying the result rotates by
    /// `b` first, then by `a`.
    pub fn mul(a: &Self, b: &Self) -> Self {
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
            a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
        .normalized()
    }

    /// `a * b * c`.
    pub fn mul3(a: &Self, b: &Self, c: &Self) -> Self {
        Self::mul(&Self::mul(a, b), c)
    }

    /// `a * b * c * d`.
    pub fn mul4(a: &Self, b: &Self, c: &Self, d: &Self) -> Self {
        Self::mul(&Self::mul3(a, b, c), d)
    }

    /// Spherical linear interpolation from `a` (`t = 0`) to `b` (`t = 1`).
    ///
    /// Expects unit inputs that are neither equal nor opposite; the angle
    /// between them ends up in a denominator.
    pub fn slerp(a: &Self, b: &Self, t: T) -> Self {
        let d = a.dot(b).acos();
        let sin_d = d.sin();
        let t1 = (d * (T::one() - t)).sin() / sin_d;
        let t2 = (d * t).sin() / sin_d;
        Self::new(
            a.x * t1 + b.x * t2,
            a.y * t1 + b.y * t2,
            a.z * t1 + b.z * t2,
            a.w * t1 + b.w * t2,
        )
        .normalized()
    }

    /// Shortest rotation taking the unit vector `a` onto the unit vector `b`.
    /// Undefined for `a == -b`.
    pub fn vec3_diff(a: &Vec3<T>, b: &Vec3<T>) -> Self {
        let cr = a.cross(b);
        let sr = (T::lit(2.0) * (T::one() + a.dot(b))).sqrt();
        let oo = T::one() / sr;
        Self::new(cr.x * oo, cr.y * oo, cr.z * oo, sr * T::lit(0.5)).normalized()
    }
}

impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Quaternion::mul(&self, &rhs)
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &self.as_array())
    }
}

impl<T: Scalar> FromStr for Quaternion<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z, w] = parse_scalars(s, "Quaternion")?;
        Ok(Self::new(x, y, z, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_edge_cases() {
        let mut zero = Quaternion::<f64>::zero();
        zero.normalize();
        assert_eq!(zero, Quaternion::zero());

        let mut ident = Quaternion::<f64>::ident();
        ident.normalize();
        assert_eq!(ident, Quaternion::ident());

        let q = Quaternion::new(0.0_f64, 0.0, 0.0, 2.0).normalized();
        assert_eq!(q, Quaternion::ident());

        let q = Quaternion::new(1.0_f32, 1.0, 1.0, 1.0).normalized();
        assert_eq!(q, Quaternion::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn inverted_is_conjugate() {
        let q = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
        assert_eq!(q.inverted(), Quaternion::new(-1.0, -2.0, -3.0, 4.0));
        assert_eq!(q.inverted().norm(), q.norm());
    }

    #[test]
    fn shortest_rotation() {
        let a = Quaternion::<f64>::ident();
        let mut b = Quaternion::new(0.0, 0.0, 0.6, -0.8);
        assert!(!Quaternion::is_shortest_rotation(&a, &b));
        b.set_shortest_rotation(&a);
        assert_eq!(b, Quaternion::new(-0.0, -0.0, -0.6, 0.8));
        assert!(Quaternion::is_shortest_rotation(&a, &b));
    }

    #[test]
    fn axis_angle_guard() {
        let (axis, angle) = Quaternion::<f64>::ident().axis_angle();
        assert!(axis.is_zero());
        assert_eq!(angle, 0.0);

        let q = Quaternion::from_axis_angle(&Vec3::new(0.0_f64, 1.0, 0.0), 1.2);
        let (axis, angle) = q.axis_angle();
        assert!(axis.practically_equals(&Vec3::unit_y(), 1e-12));
        assert!((angle - 1.2).abs() < 1e-12);
    }

    #[test]
    fn unit_check() {
        assert!(Quaternion::<f32>::ident().is_unit_quat(1e-6));
        assert!(!Quaternion::new(0.0_f32, 0.0, 0.0, 1.1).is_unit_quat(1e-3));
    }
}
