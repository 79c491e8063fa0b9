//! 4x4 homogeneous transform and projection matrix.
//!
//! Column-major, `m[col][row]`: the translation lives in `m[3]` and the
//! rotation/scale in the upper-left 3x3 block. Projection matrices follow the
//! OpenGL conventions (right-handed eye space looking down -Z, clip-space
//! depth in `[-1, 1]`).

use core::fmt;
use core::ops::{Index, IndexMut, Mul};
use core::str::FromStr;

use crate::errors::{MathError, MathResult};
use crate::float_types::Scalar;
use crate::generic::{Generic, shape};
use crate::io::{parse_scalars, write_scalars};
use crate::mat2::Mat2;
use crate::mat3::Mat3;
use crate::quaternion::Quaternion;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// Column-major 4x4 matrix, indexed `m[col][row]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<T> {
    cols: [Vec4<T>; 4],
}

impl<T: Scalar> Mat4<T> {
    pub const fn from_cols(c0: Vec4<T>, c1: Vec4<T>, c2: Vec4<T>, c3: Vec4<T>) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    pub fn zero() -> Self {
        Self::from_cols(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }

    pub fn ident() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::from_cols(
            Vec4::new(o, z, z, z),
            Vec4::new(z, o, z, z),
            Vec4::new(z, z, o, z),
            Vec4::new(z, z, z, o),
        )
    }

    /// Converts from any square matrix; 2x2 and 3x3 are embedded into the
    /// identity.
    ///
    /// # Panics
    /// If `g` is a vector or not square.
    pub fn from_generic(g: &dyn Generic<T>) -> Self {
        let n = match shape(g) {
            (2, 2) => 2,
            (3, 3) => 3,
            (4, 4) => 4,
            (cols, rows) => panic!("Unsupported type: cannot build Mat4 from {cols}x{rows}"),
        };
        let mut m = Self::ident();
        for col in 0..n {
            for row in 0..n {
                m[col][row] = g.get(col, row);
            }
        }
        m
    }

    pub fn as_array(&self) -> [T; 16] {
        let mut out = [T::zero(); 16];
        for (i, v) in out.iter_mut().enumerate() {
            *v = self[i / 4][i % 4];
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

    /// Upper-left 3x3 block.
    pub fn mat3x3(&self) -> Mat3<T> {
        Mat3::from_cols(self[0].vec3(), self[1].vec3(), self[2].vec3())
    }

    /// Overwrites with `m` embedded into the identity.
    pub fn assign_mat2x2(&mut self, m: &Mat2<T>) -> &mut Self {
        self.assign_mat3x3(Mat3::ident().assign_mat2x2(m))
    }

    /// Overwrites with `m` embedded into the identity.
    pub fn assign_mat3x3(&mut self, m: &Mat3<T>) -> &mut Self {
        *self = Self::ident();
        for col in 0..3 {
            for row in 0..3 {
                self[col][row] = m[col][row];
            }
        }
        self
    }

    /// Multiplies the diagonal of the 3x3 block by `f`.
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

    pub fn scale_vec3(&mut self, s: &Vec3<T>) -> &mut Self {
        self[0][0] = self[0][0] * s.x;
        self[1][1] = self[1][1] * s.y;
        self[2][2] = self[2][2] * s.z;
        self
    }

    /// The full diagonal.
    pub fn scaling(&self) -> Vec4<T> {
        Vec4::new(self[0][0], self[1][1], self[2][2], self[3][3])
    }

    pub fn set_scaling(&mut self, s: &Vec4<T>) -> &mut Self {
        self[0][0] = s.x;
        self[1][1] = s.y;
        self[2][2] = s.z;
        self[3][3] = s.w;
        self
    }

    pub fn translation(&self) -> Vec3<T> {
        self[3].vec3()
    }

    pub fn set_translation(&mut self, v: &Vec3<T>) -> &mut Self {
        self[3][0] = v.x;
        self[3][1] = v.y;
        self[3][2] = v.z;
        self
    }

    pub fn translate(&mut self, v: &Vec3<T>) -> &mut Self {
        self[3][0] = self[3][0] + v.x;
        self[3][1] = self[3][1] + v.y;
        self[3][2] = self[3][2] + v.z;
        self
    }

    pub fn translate_x(&mut self, dx: T) -> &mut Self {
        self[3][0] = self[3][0] + dx;
        self
    }

    pub fn translate_y(&mut self, dy: T) -> &mut Self {
        self[3][1] = self[3][1] + dy;
        self
    }

    pub fn translate_z(&mut self, dz: T) -> &mut Self {
        self[3][2] = self[3][2] + dz;
        self
    }

    pub fn trace(&self) -> T {
        self[0][0] + self[1][1] + self[2][2] + self[3][3]
    }

    /// Trace of the 3x3 block.
    pub fn trace3(&self) -> T {
        self[0][0] + self[1][1] + self[2][2]
    }

    /// `self = a * b`.
    pub fn assign_mul(&mut self, a: &Self, b: &Self) -> &mut Self {
        for col in 0..4 {
            for row in 0..4 {
                self[col][row] = a[0][row] * b[col][0]
                    + a[1][row] * b[col][1]
                    + a[2][row] * b[col][2]
                    + a[3][row] * b[col][3];
            }
        }
        self
    }

    /// `M * v`.
    pub fn mul_vec4(&self, v: &Vec4<T>) -> Vec4<T> {
        let mut out = Vec4::zero();
        for row in 0..4 {
            out[row] = self[0][row] * v.x + self[1][row] * v.y + self[2][row] * v.z + self[3][row] * v.w;
        }
        out
    }

    pub fn transform_vec4(&self, v: &mut Vec4<T>) {
        *v = self.mul_vec4(v);
    }

    /// Transforms the point `v` (`w = 1`) and divides by the resulting `w`.
    pub fn mul_vec3(&self, v: &Vec3<T>) -> Vec3<T> {
        self.mul_vec4(&Vec4::from_vec3(v)).vec3_divided_by_w()
    }

    pub fn transform_vec3(&self, v: &mut Vec3<T>) {
        *v = self.mul_vec3(v);
    }

    /// Transforms `(v, w)` without the perspective divide. `w = 0` applies
    /// only the 3x3 block, as for directions.
    pub fn mul_vec3w(&self, v: &Vec3<T>, w: T) -> Vec3<T> {
        self.mul_vec4(&Vec4::new(v.x, v.y, v.z, w)).vec3()
    }

    pub fn transform_vec3w(&self, v: &mut Vec3<T>, w: T) {
        *v = self.mul_vec3w(v, w);
    }

    /// Determinant of the 3x3 block.
    pub fn determinant3x3(&self) -> T {
        self.mat3x3().determinant()
    }

    /// True if the 3x3 block mirrors.
    pub fn is_reflective(&self) -> bool {
        self.determinant3x3() < T::zero()
    }

    pub fn determinant(&self) -> T {
        (0..4).fold(T::zero(), |acc, row| {
            let term = self[0][row] * self.masked_block(0, row).determinant();
            if row % 2 == 0 { acc + term } else { acc - term }
        })
    }

    /// Transposes the 3x3 block only.
    pub fn transpose3x3(&mut self) -> &mut Self {
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let t = self[a][b];
            self[a][b] = self[b][a];
            self[b][a] = t;
        }
        self
    }

    pub fn transpose(&mut self) -> &mut Self {
        for i in 0..3 {
            let t = self[3][i];
            self[3][i] = self[i][3];
            self[i][3] = t;
        }
        self.transpose3x3()
    }

    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// The 3x3 matrix left after removing column `col` and row `row`.
    pub fn masked_block(&self, col: usize, row: usize) -> Mat3<T> {
        let mut out = Mat3::zero();
        let mut oc = 0;
        for c in (0..4).filter(|c| *c != col) {
            let mut or = 0;
            for r in (0..4).filter(|r| *r != row) {
                out[oc][or] = self[c][r];
                or += 1;
            }
            oc += 1;
        }
        out
    }

    pub fn adjugate(&mut self) -> &mut Self {
        *self = self.adjugated();
        self
    }

    pub fn adjugated(&self) -> Self {
        let mut out = Self::zero();
        for col in 0..4 {
            for row in 0..4 {
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
            log::debug!("Mat4::invert rejected singular matrix {self}");
            return Err(MathError::not_invertible("Mat4::invert", det.to_f64_lossless()));
        }
        let mut adj = self.adjugated();
        let oo_det = T::one() / det;
        for col in 0..4 {
            for row in 0..4 {
                adj[col][row] = adj[col][row] * oo_det;
            }
        }
        Ok(adj)
    }

    pub fn assign_x_rotation(&mut self, angle: T) -> &mut Self {
        self.assign_mat3x3(Mat3::ident().assign_x_rotation(angle))
    }

    pub fn assign_y_rotation(&mut self, angle: T) -> &mut Self {
        self.assign_mat3x3(Mat3::ident().assign_y_rotation(angle))
    }

    pub fn assign_z_rotation(&mut self, angle: T) -> &mut Self {
        self.assign_mat3x3(Mat3::ident().assign_z_rotation(angle))
    }

    /// See [`Mat3::assign_euler_rotation`].
    pub fn assign_euler_rotation(&mut self, y_head: T, x_pitch: T, z_roll: T) -> &mut Self {
        self.assign_mat3x3(Mat3::ident().assign_euler_rotation(y_head, x_pitch, z_roll))
    }

    /// See [`Mat3::extract_euler_angles`].
    pub fn extract_euler_angles(&self) -> (T, T, T) {
        self.mat3x3().extract_euler_angles()
    }

    pub fn assign_coordinate_system(&mut self, x: &Vec3<T>, y: &Vec3<T>, z: &Vec3<T>) -> &mut Self {
        self.assign_mat3x3(Mat3::zero().assign_coordinate_system(x, y, z))
    }

    /// Rotation matrix of the (assumed unit) quaternion `q`, no translation.
    pub fn assign_quaternion(&mut self, q: &Quaternion<T>) -> &mut Self {
        self.assign_mat3x3(Mat3::ident().assign_quaternion(q))
    }

    /// Unit quaternion of the 3x3 block.
    ///
    /// Pivots on whichever of `w, x, y, z` is largest (Shepperd's method), so
    /// it stays accurate close to 180 degree rotations.
    pub fn quaternion(&self) -> Quaternion<T> {
        let m = self;
        let one = T::one();
        let two = T::lit(2.0);
        let quarter = T::lit(0.25);
        let tr = self.trace3();

        let q = if tr > T::zero() {
            let s = (tr + one).sqrt() * two;
            Quaternion::new(
                (m[1][2] - m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
                (m[0][1] - m[1][0]) / s,
                quarter * s,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = (one + m[0][0] - m[1][1] - m[2][2]).sqrt() * two;
            Quaternion::new(
                quarter * s,
                (m[1][0] + m[0][1]) / s,
                (m[2][0] + m[0][2]) / s,
                (m[1][2] - m[2][1]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = (one + m[1][1] - m[0][0] - m[2][2]).sqrt() * two;
            Quaternion::new(
                (m[1][0] + m[0][1]) / s,
                quarter * s,
                (m[2][1] + m[1][2]) / s,
                (m[2][0] - m[0][2]) / s,
            )
        } else {
            let s = (one + m[2][2] - m[0][0] - m[1][1]).sqrt() * two;
            Quaternion::new(
                (m[2][0] + m[0][2]) / s,
                (m[2][1] + m[1][2]) / s,
                quarter * s,
                (m[0][1] - m[1][0]) / s,
            )
        };
        q.normalized()
    }

    /// Perspective projection for the view frustum bounded by `left`,
    /// `right`, `bottom`, `top` on the near plane.
    pub fn assign_frustum(&mut self, left: T, right: T, bottom: T, top: T, near: T, far: T) -> &mut Self {
        let two = T::lit(2.0);
        let (rl, tb, fn_) = (right - left, top - bottom, far - near);
        *self = Self::zero();
        self[0][0] = two * near / rl;
        self[1][1] = two * near / tb;
        self[2][0] = (right + left) / rl;
        self[2][1] = (top + bottom) / tb;
        self[2][2] = -(far + near) / fn_;
        self[2][3] = -T::one();
        self[3][2] = -two * far * near / fn_;
        self
    }

    /// Symmetric perspective projection; `fovy` is the full vertical field of
    /// view in radians and `aspect` is width over height.
    pub fn assign_perspective(&mut self, fovy: T, aspect: T, near: T, far: T) -> &mut Self {
        let two = T::lit(2.0);
        let f = T::one() / (fovy / two).tan();
        let fn_ = far - near;
        *self = Self::zero();
        self[0][0] = f / aspect;
        self[1][1] = f;
        self[2][2] = -(far + near) / fn_;
        self[2][3] = -T::one();
        self[3][2] = -two * far * near / fn_;
        self
    }

    pub fn assign_orthogonal_projection(
        &mut self,
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> &mut Self {
        let two = T::lit(2.0);
        let (rl, tb, fn_) = (right - left, top - bottom, far - near);
        *self = Self::ident();
        self[0][0] = two / rl;
        self[1][1] = two / tb;
        self[2][2] = -two / fn_;
        self[3][0] = -(right + left) / rl;
        self[3][1] = -(top + bottom) / tb;
        self[3][2] = -(far + near) / fn_;
        self
    }
}

impl<T: Scalar> Generic<T> for Mat4<T> {
    fn rows(&self) -> usize {
        4
    }

    fn cols(&self) -> usize {
        4
    }

    fn get(&self, col: usize, row: usize) -> T {
        self[col][row]
    }

    fn is_zero(&self) -> bool {
        Mat4::is_zero(self)
    }
}

impl<T> Index<usize> for Mat4<T> {
    type Output = Vec4<T>;

    fn index(&self, col: usize) -> &Vec4<T> {
        &self.cols[col]
    }
}

impl<T> IndexMut<usize> for Mat4<T> {
    fn index_mut(&mut self, col: usize) -> &mut Vec4<T> {
        &mut self.cols[col]
    }
}

impl<T: Scalar> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut m = Self::zero();
        m.assign_mul(&self, &rhs);
        m
    }
}

impl<T: Scalar> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        self.mul_vec4(&v)
    }
}

impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &self.as_array())
    }
}

impl<T: Scalar> FromStr for Mat4<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let a: [T; 16] = parse_scalars(s, "Mat4")?;
        Ok(Self::from_cols(
            Vec4::new(a[0], a[1], a[2], a[3]),
            Vec4::new(a[4], a[5], a[6], a[7]),
            Vec4::new(a[8], a[9], a[10], a[11]),
            Vec4::new(a[12], a[13], a[14], a[15]),
        ))
    }
}
