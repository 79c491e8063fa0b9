//! Three component vector.

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use crate::errors::MathError;
use crate::float_types::{Scalar, equal_square_epsilon};
use crate::generic::{Generic, shape};
use crate::io::{parse_scalars, write_scalars};

/// A 3D vector `(x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// `(1, 1, 1)` normalized.
    pub fn unit_xyz() -> Self {
        let c = T::one() / T::lit(3.0).sqrt();
        Self::new(c, c, c)
    }

    /// Builds a vector from any other vector by element count: two elements
    /// give `(x, y, 0)`, three or four give `(x, y, z)`.
    ///
    /// # Panics
    /// If `g` is a matrix or has an unsupported element count.
    pub fn from_generic(g: &dyn Generic<T>) -> Self {
        match (shape(g), g.size()) {
            ((1, _), 2) => Self::new(g.get(0, 0), g.get(0, 1), T::zero()),
            ((1, _), 3) | ((1, _), 4) => Self::new(g.get(0, 0), g.get(0, 1), g.get(0, 2)),
            ((cols, rows), _) => panic!("Unsupported type: cannot build Vec3 from {cols}x{rows}"),
        }
    }

    pub fn as_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }

    pub fn is_zero_eps(&self, epsilon: T) -> bool {
        self.x.abs() <= epsilon && self.y.abs() <= epsilon && self.z.abs() <= epsilon
    }

    /// Squared length within the configured square tolerance of one.
    pub fn is_normalized(&self) -> bool {
        equal_square_epsilon(self.length_sqr(), T::one())
    }

    pub fn practically_equals(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    pub fn length(&self) -> T {
        self.length_sqr().sqrt()
    }

    pub fn length_sqr(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn scale(&mut self, f: T) -> &mut Self {
        self.x = self.x * f;
        self.y = self.y * f;
        self.z = self.z * f;
        self
    }

    pub fn scaled(&self, f: T) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f)
    }

    /// Negates every component.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverted();
        self
    }

    pub fn inverted(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    pub fn abs(&mut self) -> &mut Self {
        *self = self.absed();
        self
    }

    pub fn absed(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Scales to unit length. Zero and unit vectors are left untouched.
    pub fn normalize(&mut self) -> &mut Self {
        let sl = self.length_sqr();
        if sl == T::zero() || sl == T::one() {
            return self;
        }
        self.scale(T::one() / sl.sqrt())
    }

    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// A unit vector orthogonal to `self`.
    pub fn normal(&self) -> Self {
        let n = self.cross(&Self::unit_z());
        if n.is_zero() {
            return Self::unit_x();
        }
        n.normalized()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle between `self` and `other` in radians.
    pub fn angle(&self, other: &Self) -> T {
        let cos = self.dot(other) / (self.length_sqr() * other.length_sqr()).sqrt();
        cos.max(-T::one()).min(T::one()).acos()
    }

    pub fn square_distance(&self, other: &Self) -> T {
        (*self - *other).length_sqr()
    }

    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    /// Multiplies component by component.
    pub fn mul_components(&mut self, other: &Self) -> &mut Self {
        *self = self.muled_components(other);
        self
    }

    pub fn muled_components(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Component-wise minimum.
    pub fn min(a: &Self, b: &Self) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
    }

    /// Component-wise maximum.
    pub fn max(a: &Self, b: &Self) -> Self {
        Self::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
    }

    /// Linear interpolation, `t = 0` gives `a`.
    pub fn interpolate(a: &Self, b: &Self, t: T) -> Self {
        let t1 = T::one() - t;
        Self::new(a.x * t1 + b.x * t, a.y * t1 + b.y * t, a.z * t1 + b.z * t)
    }

    pub fn clamp(&mut self, min: &Self, max: &Self) -> &mut Self {
        *self = self.clamped(min, max);
        self
    }

    pub fn clamped(&self, min: &Self, max: &Self) -> Self {
        Self::new(
            self.x.max(min.x).min(max.x),
            self.y.max(min.y).min(max.y),
            self.z.max(min.z).min(max.z),
        )
    }
}

impl<T: Scalar> Generic<T> for Vec3<T> {
    fn rows(&self) -> usize {
        3
    }

    fn cols(&self) -> usize {
        1
    }

    fn get(&self, col: usize, row: usize) -> T {
        assert_eq!(col, 0, "Vec3 has a single column");
        self[row]
    }

    fn is_zero(&self) -> bool {
        Vec3::is_zero(self)
    }
}

impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index {i} out of range"),
        }
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index {i} out of range"),
        }
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverted()
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, f: T) -> Self {
        self.scaled(f)
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, f: T) {
        self.scale(f);
    }
}

impl<T: Scalar> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &self.as_array())
    }
}

impl<T: Scalar> FromStr for Vec3<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_scalars(s, "Vec3")?;
        Ok(Self::new(x, y, z))
    }
}
