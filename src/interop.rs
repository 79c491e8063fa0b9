//! Conversions to and from [`nalgebra`] types.
//!
//! Both sides store matrices column-major, so element order is preserved.
//! nalgebra keeps quaternions as `(i, j, k, w)`, matching `(x, y, z, w)`.

use nalgebra::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

use crate::float_types::Scalar;
use crate::mat2::Mat2;
use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::quaternion::Quaternion;
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

impl<T: Scalar> From<Vec2<T>> for Vector2<T> {
    fn from(v: Vec2<T>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl<T: Scalar> From<Vector2<T>> for Vec2<T> {
    fn from(v: Vector2<T>) -> Self {
        Vec2::new(v[0], v[1])
    }
}

impl<T: Scalar> From<Vec3<T>> for Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<Vector3<T>> for Vec3<T> {
    fn from(v: Vector3<T>) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl<T: Scalar> From<Vec4<T>> for Vector4<T> {
    fn from(v: Vec4<T>) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl<T: Scalar> From<Vector4<T>> for Vec4<T> {
    fn from(v: Vector4<T>) -> Self {
        Vec4::new(v[0], v[1], v[2], v[3])
    }
}

impl<T: Scalar> From<Mat2<T>> for Matrix2<T> {
    fn from(m: Mat2<T>) -> Self {
        Matrix2::from_column_slice(&m.as_array())
    }
}

impl<T: Scalar> From<Matrix2<T>> for Mat2<T> {
    fn from(m: Matrix2<T>) -> Self {
        Mat2::from_cols(
            Vec2::new(m[(0, 0)], m[(1, 0)]),
            Vec2::new(m[(0, 1)], m[(1, 1)]),
        )
    }
}

impl<T: Scalar> From<Mat3<T>> for Matrix3<T> {
    fn from(m: Mat3<T>) -> Self {
        Matrix3::from_column_slice(&m.as_array())
    }
}

impl<T: Scalar> From<Matrix3<T>> for Mat3<T> {
    fn from(m: Matrix3<T>) -> Self {
        let col = |c: usize| Vec3::new(m[(0, c)], m[(1, c)], m[(2, c)]);
        Mat3::from_cols(col(0), col(1), col(2))
    }
}

impl<T: Scalar> From<Mat4<T>> for Matrix4<T> {
    fn from(m: Mat4<T>) -> Self {
        Matrix4::from_column_slice(&m.as_array())
    }
}

impl<T: Scalar> From<Matrix4<T>> for Mat4<T> {
    fn from(m: Matrix4<T>) -> Self {
        let col = |c: usize| Vec4::new(m[(0, c)], m[(1, c)], m[(2, c)], m[(3, c)]);
        Mat4::from_cols(col(0), col(1), col(2), col(3))
    }
}

impl<T: Scalar> From<Quaternion<T>> for nalgebra::Quaternion<T> {
    fn from(q: Quaternion<T>) -> Self {
        nalgebra::Quaternion::from(Vector4::new(q.x, q.y, q.z, q.w))
    }
}

impl<T: Scalar> From<nalgebra::Quaternion<T>> for Quaternion<T> {
    fn from(q: nalgebra::Quaternion<T>) -> Self {
        Quaternion::new(q.coords[0], q.coords[1], q.coords[2], q.coords[3])
    }
}
