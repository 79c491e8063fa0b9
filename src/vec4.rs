//! Homogeneous four component vector.
//!
//! `(x, y, z, w)` stands for the 3D point `(x/w, y/w, z/w)`. Length, dot and
//! cross product work on that divided 3D vector; [`Vec4::dot4`] is the plain
//! four-dimensional dot product. Scaling and negation leave `w` alone.

use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use core::str::FromStr;

use crate::errors::MathError;
use crate::float_types::Scalar;
use crate::generic::{Generic, shape};
use crate::io::{parse_scalars, write_scalars};
use crate::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Vec4<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn unit_xw() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one())
    }

    pub fn unit_yw() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::one())
    }

    pub fn unit_zw() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::one())
    }

    /// The point `v`, i.e. `(v.x, v.y, v.z, 1)`.
    pub fn from_vec3(v: &Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::one())
    }

    /// Two or three elements become a point with `w = 1`, four are copied.
    ///
    /// # Panics
    /// If `g` is a matrix or has an unsupported element count.
    pub fn from_generic(g: &dyn Generic<T>) -> Self {
        match (shape(g), g.size()) {
            ((1, _), 2) => Self::new(g.get(0, 0), g.get(0, 1), T::zero(), T::one()),
            ((1, _), 3) => Self::new(g.get(0, 0), g.get(0, 1), g.get(0, 2), T::one()),
            ((1, _), 4) => Self::new(g.get(0, 0), g.get(0, 1), g.get(0, 2), g.get(0, 3)),
            ((cols, rows), _) => panic!("Unsupported type: cannot build Vec4 from {cols}x{rows}"),
        }
    }

    pub fn as_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn is_zero(&self) -> bool {
        self.as_array().iter().all(|c| *c == T::zero())
    }

    pub fn is_zero_eps(&self, epsilon: T) -> bool {
        self.as_array().iter().all(|c| c.abs() <= epsilon)
    }

    pub fn practically_equals(&self, other: &Self, epsilon: T) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .all(|(a, b)| (*a - b).abs() <= epsilon)
    }

    /// `x, y, z` without dividing by `w`.
    pub fn vec3(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Sets `x, y, z` from `v` and `w` to one.
    pub fn assign_vec3(&mut self, v: &Vec3<T>) -> &mut Self {
        *self = Self::from_vec3(v);
        self
    }

    pub fn divide_by_w(&mut self) -> &mut Self {
        let oow = T::one() / self.w;
        self.x = self.x * oow;
        self.y = self.y * oow;
        self.z = self.z * oow;
        self.w = T::one();
        self
    }

    pub fn divided_by_w(&self) -> Self {
        let mut v = *self;
        v.divide_by_w();
        v
    }

    pub fn vec3_divided_by_w(&self) -> Vec3<T> {
        let oow = T::one() / self.w;
        Vec3::new(self.x * oow, self.y * oow, self.z * oow)
    }

    pub fn length(&self) -> T {
        self.vec3_divided_by_w().length()
    }

    pub fn length_sqr(&self) -> T {
        self.vec3_divided_by_w().length_sqr()
    }

    /// Scales `x, y, z`.
    pub fn scale(&mut self, f: T) -> &mut Self {
        self.x = self.x * f;
        self.y = self.y * f;
        self.z = self.z * f;
        self
    }

    pub fn scaled(&self, f: T) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f, self.w)
    }

    /// Negates `x, y, z`.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverted();
        self
    }

    pub fn inverted(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Divides by `w`, then normalizes the 3D part. `w` ends up as one.
    pub fn normalize(&mut self) -> &mut Self {
        let mut v = self.vec3_divided_by_w();
        v.normalize();
        self.assign_vec3(&v)
    }

    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Dot product of the divided 3D vectors.
    pub fn dot(&self, other: &Self) -> T {
        self.vec3_divided_by_w().dot(&other.vec3_divided_by_w())
    }

    /// Four-dimensional dot product, `w` included.
    pub fn dot4(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product of the divided 3D vectors, as a point.
    pub fn cross(&self, other: &Self) -> Self {
        Self::from_vec3(&self.vec3_divided_by_w().cross(&other.vec3_divided_by_w()))
    }

    pub fn angle(&self, other: &Self) -> T {
        self.vec3_divided_by_w().angle(&other.vec3_divided_by_w())
    }

    /// Component-wise interpolation of all four components.
    pub fn interpolate(a: &Self, b: &Self, t: T) -> Self {
        let t1 = T::one() - t;
        Self::new(
            a.x * t1 + b.x * t,
            a.y * t1 + b.y * t,
            a.z * t1 + b.z * t,
            a.w * t1 + b.w * t,
        )
    }
}

impl<T: Scalar> Generic<T> for Vec4<T> {
    fn rows(&self) -> usize {
        4
    }

    fn cols(&self) -> usize {
        1
    }

    fn get(&self, col: usize, row: usize) -> T {
        assert_eq!(col, 0, "Vec4 has a single column");
        self[row]
    }

    fn is_zero(&self) -> bool {
        Vec4::is_zero(self)
    }
}

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index {i} out of range"),
        }
    }
}

impl<T> IndexMut<usize> for Vec4<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index {i} out of range"),
        }
    }
}

/// With equal `w` the 3D parts are added and `w` kept; otherwise both sides
/// are divided by their `w` first and the sum is a point with `w = 1`.
impl<T: Scalar> Add for Vec4<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.w == rhs.w {
            return Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w);
        }
        Self::from_vec3(&(self.vec3_divided_by_w() + rhs.vec3_divided_by_w()))
    }
}

/// Same `w` handling as addition.
impl<T: Scalar> Sub for Vec4<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        if self.w == rhs.w {
            return Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w);
        }
        Self::from_vec3(&(self.vec3_divided_by_w() - rhs.vec3_divided_by_w()))
    }
}

impl<T: Scalar> Neg for Vec4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverted()
    }
}

impl<T: Scalar> Mul<T> for Vec4<T> {
    type Output = Self;

    fn mul(self, f: T) -> Self {
        self.scaled(f)
    }
}

impl<T: Scalar> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &self.as_array())
    }
}

impl<T: Scalar> FromStr for Vec4<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z, w] = parse_scalars(s, "Vec4")?;
        Ok(Self::new(x, y, z, w))
    }
}
