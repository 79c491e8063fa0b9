//! 2x2 matrix.

use core::fmt;
use core::ops::{Index, IndexMut, Mul};
use core::str::FromStr;

use crate::errors::{MathError, MathResult};
use crate::float_types::Scalar;
use crate::generic::{Generic, shape};
use crate::io::{parse_scalars, write_scalars};
use crate::vec2::Vec2;

/// Column-major 2x2 matrix, indexed `m[col][row]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2<T> {
    cols: [Vec2<T>; 2],
}

impl<T: Scalar> Mat2<T> {
    pub const fn from_cols(c0: Vec2<T>, c1: Vec2<T>) -> Self {
        Self { cols: [c0, c1] }
    }

    pub fn zero() -> Self {
        Self::from_cols(Vec2::zero(), Vec2::zero())
    }

    pub fn ident() -> Self {
        Self::from_cols(Vec2::unit_x(), Vec2::unit_y())
    }

    /// Upper-left 2x2 block of any square matrix.
    ///
    /// # Panics
    /// If `g` is not a 2x2, 3x3 or 4x4 matrix.
    pub fn from_generic(g: &dyn Generic<T>) -> Self {
        match shape(g) {
            (2, 2) | (3, 3) | (4, 4) => Self::from_cols(
                Vec2::new(g.get(0, 0), g.get(0, 1)),
                Vec2::new(g.get(1, 0), g.get(1, 1)),
            ),
            (cols, rows) => panic!("Unsupported type: cannot build Mat2 from {cols}x{rows}"),
        }
    }

    pub fn as_array(&self) -> [T; 4] {
        [self[0][0], self[0][1], self[1][0], self[1][1]]
    }

    pub fn is_zero(&self) -> bool {
        self.cols.iter().all(|c| c.is_zero())
    }

    pub fn is_zero_eps(&self, epsilon: T) -> bool {
        self.cols.iter().all(|c| c.is_zero_eps(epsilon))
    }

    pub fn practically_equals(&self, other: &Self, epsilon: T) -> bool {
        self.cols
            .iter()
            .zip(&other.cols)
            .all(|(a, b)| a.practically_equals(b, epsilon))
    }

    /// Multiplies the diagonal by `f`.
    pub fn scale(&mut self, f: T) -> &mut Self {
        self[0][0] = self[0][0] * f;
        self[1][1] = self[1][1] * f;
        self
    }

    pub fn scaled(&self, f: T) -> Self {
        let mut m = *self;
        m.scale(f);
        m
    }

    /// The diagonal.
    pub fn scaling(&self) -> Vec2<T> {
        Vec2::new(self[0][0], self[1][1])
    }

    pub fn set_scaling(&mut self, s: &Vec2<T>) -> &mut Self {
        self[0][0] = s.x;
        self[1][1] = s.y;
        self
    }

    pub fn trace(&self) -> T {
        self[0][0] + self[1][1]
    }

    /// `self = a * b`.
    pub fn assign_mul(&mut self, a: &Self, b: &Self) -> &mut Self {
        for col in 0..2 {
            for row in 0..2 {
                self[col][row] = a[0][row] * b[col][0] + a[1][row] * b[col][1];
            }
        }
        self
    }

    pub fn mul_vec2(&self, v: &Vec2<T>) -> Vec2<T> {
        Vec2::new(
            self[0][0] * v.x + self[1][0] * v.y,
            self[0][1] * v.x + self[1][1] * v.y,
        )
    }

    pub fn transform_vec2(&self, v: &mut Vec2<T>) {
        *v = self.mul_vec2(v);
    }

    pub fn determinant(&self) -> T {
        self[0][0] * self[1][1] - self[1][0] * self[0][1]
    }

    pub fn transpose(&mut self) -> &mut Self {
        let t = self[0][1];
        self[0][1] = self[1][0];
        self[1][0] = t;
        self
    }

    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Inverts in place. A zero determinant leaves the matrix untouched.
    pub fn invert(&mut self) -> MathResult<&mut Self> {
        *self = self.inverted()?;
        Ok(self)
    }

    pub fn inverted(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det == T::zero() {
            log::debug!("Mat2::invert rejected singular matrix {self}");
            return Err(MathError::not_invertible("Mat2::invert", det.to_f64_lossless()));
        }
        Ok(Self::from_cols(
            Vec2::new(self[1][1] / det, -self[0][1] / det),
            Vec2::new(-self[1][0] / det, self[0][0] / det),
        ))
    }
}

impl<T: Scalar> Generic<T> for Mat2<T> {
    fn rows(&self) -> usize {
        2
    }

    fn cols(&self) -> usize {
        2
    }

    fn get(&self, col: usize, row: usize) -> T {
        self[col][row]
    }

    fn is_zero(&self) -> bool {
        Mat2::is_zero(self)
    }
}

impl<T> Index<usize> for Mat2<T> {
    type Output = Vec2<T>;

    fn index(&self, col: usize) -> &Vec2<T> {
        &self.cols[col]
    }
}

impl<T> IndexMut<usize> for Mat2<T> {
    fn index_mut(&mut self, col: usize) -> &mut Vec2<T> {
        &mut self.cols[col]
    }
}

impl<T: Scalar> Mul for Mat2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut m = Self::zero();
        m.assign_mul(&self, &rhs);
        m
    }
}

impl<T: Scalar> Mul<Vec2<T>> for Mat2<T> {
    type Output = Vec2<T>;

    fn mul(self, v: Vec2<T>) -> Vec2<T> {
        self.mul_vec2(&v)
    }
}

impl<T: Scalar> fmt::Display for Mat2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &self.as_array())
    }
}

impl<T: Scalar> FromStr for Mat2<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [a, b, c, d] = parse_scalars(s, "Mat2")?;
        Ok(Self::from_cols(Vec2::new(a, b), Vec2::new(c, d)))
    }
}
