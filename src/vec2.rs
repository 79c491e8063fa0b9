//! Two component vector.

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use crate::errors::MathError;
use crate::float_types::{Scalar, equal_square_epsilon};
use crate::generic::{Generic, shape};
use crate::io::{parse_scalars, write_scalars};

/// A 2D vector `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// First two elements of any vector.
    ///
    /// # Panics
    /// If `g` is a matrix or has fewer than two elements.
    pub fn from_generic(g: &dyn Generic<T>) -> Self {
        match (shape(g), g.size()) {
            ((1, _), 2..=4) => Self::new(g.get(0, 0), g.get(0, 1)),
            ((cols, rows), _) => panic!("Unsupported type: cannot build Vec2 from {cols}x{rows}"),
        }
    }

    pub fn as_array(&self) -> [T; 2] {
        [self.x, self.y]
    }

    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    pub fn is_zero_eps(&self, epsilon: T) -> bool {
        self.x.abs() <= epsilon && self.y.abs() <= epsilon
    }

    pub fn is_normalized(&self) -> bool {
        equal_square_epsilon(self.length_sqr(), T::one())
    }

    pub fn practically_equals(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    pub fn length(&self) -> T {
        self.length_sqr().sqrt()
    }

    pub fn length_sqr(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    pub fn scale(&mut self, f: T) -> &mut Self {
        self.x = self.x * f;
        self.y = self.y * f;
        self
    }

    pub fn scaled(&self, f: T) -> Self {
        Self::new(self.x * f, self.y * f)
    }

    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverted();
        self
    }

    pub fn inverted(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

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

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn angle(&self, other: &Self) -> T {
        let cos = self.dot(other) / (self.length_sqr() * other.length_sqr()).sqrt();
        cos.max(-T::one()).min(T::one()).acos()
    }

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotate(&mut self, angle: T) -> &mut Self {
        *self = self.rotated(angle);
        self
    }

    pub fn rotated(&self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn mul_components(&mut self, other: &Self) -> &mut Self {
        *self = self.muled_components(other);
        self
    }

    pub fn muled_components(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    pub fn interpolate(a: &Self, b: &Self, t: T) -> Self {
        let t1 = T::one() - t;
        Self::new(a.x * t1 + b.x * t, a.y * t1 + b.y * t)
    }
}

impl<T: Scalar> Generic<T> for Vec2<T> {
    fn rows(&self) -> usize {
        2
    }

    fn cols(&self) -> usize {
        1
    }

    fn get(&self, col: usize, row: usize) -> T {
        assert_eq!(col, 0, "Vec2 has a single column");
        self[row]
    }

    fn is_zero(&self) -> bool {
        Vec2::is_zero(self)
    }
}

impl<T> Index<usize> for Vec2<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index {i} out of range"),
        }
    }
}

impl<T> IndexMut<usize> for Vec2<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index {i} out of range"),
        }
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverted()
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, f: T) -> Self {
        self.scaled(f)
    }
}

impl<T: Scalar> MulAssign<T> for Vec2<T> {
    fn mul_assign(&mut self, f: T) {
        self.scale(f);
    }
}

impl<T: Scalar> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &self.as_array())
    }
}

impl<T: Scalar> FromStr for Vec2<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_scalars(s, "Vec2")?;
        Ok(Self::new(x, y))
    }
}
