//! 3x3 matrix: rotations, Euler angles and quaternion conversion.
//!
//! Storage is column-major, `m[col][row]`, so `m[2]` is the third column.
//! Used either as a 3D rotation/scale matrix or as a 2D homogeneous
//! transform with the translation in column 2.

use core::fmt;
use core::ops::{Index, IndexMut, Mul};
use core::str::FromStr;

use crate::errors::{MathError, MathResult};
use crate::float_types::Scalar;
use crate::generic::{Generic, shape};
use crate::io::{parse_scalars, write_scalars};
use crate::mat2::Mat2;
use crate::quaternion::Quaternion;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// Column-major 3x3 matrix, indexed `m[col][row]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<T> {
    cols: [Vec3<T>; 3],
}

impl<T: Scalar> Mat3<T> {
    pub const fn from_cols(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    pub fn zero() -> Self {
        Self::from_cols(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    pub fn ident() -> Self {
        Self::from_cols(Vec3::unit_x(), Vec3::unit_y(), Vec3::unit_z())
    }

    /// Converts from any square matrix: a 2x2 is embedded into the identity,
    /// a 3x3 is copied and a 4x4 is cut down to its upper-left block.
    ///
    /// # Panics
    /// If `g` is a vector or not square.
    pub fn from_generic(g: &dyn Generic<T>) -> Self {
        let n = match shape(g) {
            (2, 2) => 2,
            (3, 3) | (4, 4) => 3,
            (cols, rows) => panic!("Unsupported type: cannot build Mat3 from {cols}x{rows}"),
        };
        let mut m = Self::ident();
        for col in 0..n {
            for row in 0..n {
                m[col][row] = g.get(col, row);
            }
        }
        m
    }

    /// Elements in memory order.
    pub fn as_array(&self) -> [T; 9] {
        let mut out = [T::zero(); 9];
        for (i, v) in out.iter_mut().enumerate() {
            *v = self[i / 3][i % 3];
        }
        out
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
        self[2][2] = self[2][2] * f;
        self
    }

    pub fn scaled(&self, f: T) -> Self {
        let mut m = *self;
        m.scale(f);
        m
    }

    /// Multiplies the 2D scaling part by `s`.
    pub fn scale_vec2(&mut self, s: &Vec2<T>) -> &mut Self {
        self[0][0] = self[0][0] * s.x;
        self[1][1] = self[1][1] * s.y;
        self
    }

    /// The diagonal.
    pub fn scaling(&self) -> Vec3<T> {
        Vec3::new(self[0][0], self[1][1], self[2][2])
    }

    pub fn set_scaling(&mut self, s: &Vec3<T>) -> &mut Self {
        self[0][0] = s.x;
        self[1][1] = s.y;
        self[2][2] = s.z;
        self
    }

    /// 2D translation of a homogeneous 2D transform.
    pub fn translation(&self) -> Vec2<T> {
        Vec2::new(self[2][0], self[2][1])
    }

    pub fn set_translation(&mut self, v: &Vec2<T>) -> &mut Self {
        self[2][0] = v.x;
        self[2][1] = v.y;
        self
    }

    pub fn translate(&mut self, v: &Vec2<T>) -> &mut Self {
        self[2][0] = self[2][0] + v.x;
        self[2][1] = self[2][1] + v.y;
        self
    }

    pub fn translate_x(&mut self, dx: T) -> &mut Self {
        self[2][0] = self[2][0] + dx;
        self
    }

    pub fn translate_y(&mut self, dy: T) -> &mut Self {
        self[2][1] = self[2][1] + dy;
        self
    }

    pub fn trace(&self) -> T {
        self[0][0] + self[1][1] + self[2][2]
    }

    /// Overwrites with `m` embedded into the identity.
    pub fn assign_mat2x2(&mut self, m: &Mat2<T>) -> &mut Self {
        *self = Self::ident();
        for col in 0..2 {
            for row in 0..2 {
                self[col][row] = m[col][row];
            }
        }
        self
    }

    /// `self = a * b`.
    pub fn assign_mul(&mut self, a: &Self, b: &Self) -> &mut Self {
        for col in 0..3 {
            for row in 0..3 {
                self[col][row] =
                    a[0][row] * b[col][0] + a[1][row] * b[col][1] + a[2][row] * b[col][2];
            }
        }
        self
    }

    /// `M * v`.
    pub fn mul_vec3(&self, v: &Vec3<T>) -> Vec3<T> {
        Vec3::new(
            self[0][0] * v.x + self[1][0] * v.y + self[2][0] * v.z,
            self[0][1] * v.x + self[1][1] * v.y + self[2][1] * v.z,
            self[0][2] * v.x + self[1][2] * v.y + self[2][2] * v.z,
        )
    }

    /// `v = M * v`.
    pub fn transform_vec3(&self, v: &mut Vec3<T>) {
        *v = self.mul_vec3(v);
    }

    pub fn determinant(&self) -> T {
        let m = self;
        m[0][0] * m[1][1] * m[2][2] + m[1][0] * m[2][1] * m[0][2] + m[2][0] * m[0][1] * m[1][2]
            - m[2][0] * m[1][1] * m[0][2]
            - m[1][0] * m[0][1] * m[2][2]
            - m[0][0] * m[2][1] * m[1][2]
    }

    /// A negative determinant means the matrix mirrors.
    pub fn is_reflective(&self) -> bool {
        self.determinant() < T::zero()
    }

    pub fn transpose(&mut self) -> &mut Self {
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let t = self[a][b];
            self[a][b] = self[b][a];
            self[b][a] = t;
        }
        self
    }

    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// The 2x2 matrix left after removing column `col` and row `row`.
    pub fn masked_block(&self, col: usize, row: usize) -> Mat2<T> {
        let mut out = Mat2::zero();
        let mut oc = 0;
        for c in (0..3).filter(|c| *c != col) {
            let mut or = 0;
            for r in (0..3).filter(|r| *r != row) {
                out[oc][or] = self[c][r];
                or += 1;
            }
            oc += 1;
        }
        out
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&mut self) -> &mut Self {
        *self = self.adjugated();
        self
    }

    pub fn adjugated(&self) -> Self {
        let mut out = Self::zero();
        for col in 0..3 {
            for row in 0..3 {
                let minor = self.masked_block(row, col).determinant();
                out[col][row] = if (col + row) % 2 == 0 { minor } else { -minor };
            }
        }
        out
    }

    /// Inverts in place via the adjugate. Only an exactly zero determinant
    /// fails, and then the matrix is left untouched.
    pub fn invert(&mut self) -> MathResult<&mut Self> {
        *self = self.inverted()?;
        Ok(self)
    }

    pub fn inverted(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det == T::zero() {
            log::debug!("Mat3::invert rejected singular matrix {self}");
            return Err(MathError::not_invertible("Mat3::invert", det.to_f64_lossless()));
        }
        let mut adj = self.adjugated();
        let oo_det = T::one() / det;
        for col in 0..3 {
            adj[col].scale(oo_det);
        }
        Ok(adj)
    }

    /// Uses `x`, `y` and `z` as the rows, i.e. the matrix that maps world
    /// coordinates into the given basis.
    pub fn assign_coordinate_system(&mut self, x: &Vec3<T>, y: &Vec3<T>, z: &Vec3<T>) -> &mut Self {
        *self = Self::from_cols(
            Vec3::new(x.x, y.x, z.x),
            Vec3::new(x.y, y.y, z.y),
            Vec3::new(x.z, y.z, z.z),
        );
        self
    }

    /// Rotation of `angle` radians around the X axis.
    pub fn assign_x_rotation(&mut self, angle: T) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        *self = Self::ident();
        self[1][1] = cos;
        self[2][1] = -sin;
        self[1][2] = sin;
        self[2][2] = cos;
        self
    }

    /// Rotation of `angle` radians around the Y axis.
    pub fn assign_y_rotation(&mut self, angle: T) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        *self = Self::ident();
        self[0][0] = cos;
        self[2][0] = sin;
        self[0][2] = -sin;
        self[2][2] = cos;
        self
    }

    /// Rotation of `angle` radians around the Z axis.
    pub fn assign_z_rotation(&mut self, angle: T) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        *self = Self::ident();
        self[0][0] = cos;
        self[1][0] = -sin;
        self[0][1] = sin;
        self[1][1] = cos;
        self
    }

    /// `Rz(z_roll) * Rx(x_pitch) * Ry(y_head)`.
    ///
    /// Note that [`Quaternion::from_euler_angles`] composes the same three
    /// angles as `Ry * Rx * Rz`; both agree only when at most one angle is
    /// non-zero.
    pub fn assign_euler_rotation(&mut self, y_head: T, x_pitch: T, z_roll: T) -> &mut Self {
        let (sin_h, cos_h) = y_head.sin_cos();
        let (sin_p, cos_p) = x_pitch.sin_cos();
        let (sin_r, cos_r) = z_roll.sin_cos();

        self[0][0] = cos_r * cos_h - sin_r * sin_p * sin_h;
        self[1][0] = -sin_r * cos_p;
        self[2][0] = cos_r * sin_h + sin_r * sin_p * cos_h;

        self[0][1] = sin_r * cos_h + cos_r * sin_p * sin_h;
        self[1][1] = cos_r * cos_p;
        self[2][1] = sin_r * sin_h - cos_r * sin_p * cos_h;

        self[0][2] = -cos_p * sin_h;
        self[1][2] = sin_p;
        self[2][2] = cos_p * cos_h;
        self
    }

    /// Inverse of [`assign_euler_rotation`](Self::assign_euler_rotation),
    /// returns `(y_head, x_pitch, z_roll)`.
    ///
    /// Within [`Scalar::GIMBAL_LOCK_TOLERANCE`] of `|m[1][2]| == 1` head and
    /// roll are indistinguishable; head is then reported as zero.
    pub fn extract_euler_angles(&self) -> (T, T, T) {
        let sin_p = self[1][2];
        let x_pitch = sin_p.asin();
        let band = T::GIMBAL_LOCK_TOLERANCE;
        if sin_p.abs() > T::one() - band && sin_p.abs() < T::one() + band {
            log::trace!("extract_euler_angles: gimbal lock, m[1][2] = {sin_p}");
            return (T::zero(), x_pitch, self[0][1].atan2(self[0][0]));
        }
        let y_head = (-self[0][2]).atan2(self[2][2]);
        let z_roll = (-self[1][0]).atan2(self[1][1]);
        (y_head, x_pitch, z_roll)
    }

    /// Rotation matrix of the (assumed unit) quaternion `q`.
    pub fn assign_quaternion(&mut self, q: &Quaternion<T>) -> &mut Self {
        let two = T::lit(2.0);
        let (xx, yy, zz) = (q.x * q.x * two, q.y * q.y * two, q.z * q.z * two);
        let (xy, xz, yz) = (q.x * q.y * two, q.x * q.z * two, q.y * q.z * two);
        let (wx, wy, wz) = (q.w * q.x * two, q.w * q.y * two, q.w * q.z * two);

        self[0][0] = T::one() - (yy + zz);
        self[1][0] = xy - wz;
        self[2][0] = xz + wy;

        self[0][1] = xy + wz;
        self[1][1] = T::one() - (xx + zz);
        self[2][1] = yz - wx;

        self[0][2] = xz - wy;
        self[1][2] = yz + wx;
        self[2][2] = T::one() - (xx + yy);
        self
    }

    /// Unit quaternion of this rotation matrix.
    ///
    /// Always pivots on `w`, so it loses precision as the rotation approaches
    /// 180 degrees (`trace -> -1`). [`Mat4::quaternion`](crate::Mat4::quaternion)
    /// picks the best-conditioned pivot instead.
    pub fn quaternion(&self) -> Quaternion<T> {
        let tr1 = self.trace() + T::one();
        if tr1 <= T::zero() {
            log::trace!("Mat3::quaternion: trace + 1 = {tr1}, result is unreliable");
        }
        let s = tr1.sqrt();
        let w = s * T::lit(0.5);
        let s = T::lit(0.5) / s;
        Quaternion::new(
            (self[1][2] - self[2][1]) * s,
            (self[2][0] - self[0][2]) * s,
            (self[0][1] - self[1][0]) * s,
            w,
        )
        .normalized()
    }
}

impl<T: Scalar> Generic<T> for Mat3<T> {
    fn rows(&self) -> usize {
        3
    }

    fn cols(&self) -> usize {
        3
    }

    fn get(&self, col: usize, row: usize) -> T {
        self[col][row]
    }

    fn is_zero(&self) -> bool {
        Mat3::is_zero(self)
    }
}

impl<T> Index<usize> for Mat3<T> {
    type Output = Vec3<T>;

    fn index(&self, col: usize) -> &Vec3<T> {
        &self.cols[col]
    }
}

impl<T> IndexMut<usize> for Mat3<T> {
    fn index_mut(&mut self, col: usize) -> &mut Vec3<T> {
        &mut self.cols[col]
    }
}

impl<T: Scalar> Mul for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut m = Self::zero();
        m.assign_mul(&self, &rhs);
        m
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        self.mul_vec3(&v)
    }
}

impl<T: Scalar> fmt::Display for Mat3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &self.as_array())
    }
}

impl<T: Scalar> FromStr for Mat3<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let a: [T; 9] = parse_scalars(s, "Mat3")?;
        Ok(Self::from_cols(
            Vec3::new(a[0], a[1], a[2]),
            Vec3::new(a[3], a[4], a[5]),
            Vec3::new(a[6], a[7], a[8]),
        ))
    }
}
