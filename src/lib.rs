//! Vectors, square matrices and quaternions for **2D/3D graphics**, in both
//! `f32` and `f64`.
//!
//! The heart of the crate is the rotation toolkit shared by [`Mat3`], [`Mat4`]
//! and [`Quaternion`]: axis and Euler rotations, matrix ↔ quaternion
//! conversion, [`Quaternion::slerp`], inversion via the adjugate and the
//! OpenGL style projection matrices.
//!
//! ```
//! use vecmath3d::{Mat4d, Quatd, Vec3d};
//!
//! let mut m = Mat4d::ident();
//! m.assign_quaternion(&Quatd::from_z_axis_angle(std::f64::consts::FRAC_PI_2));
//! let p = m.mul_vec3(&Vec3d::unit_x());
//! assert!(p.practically_equals(&Vec3d::unit_y(), 1e-12));
//! ```
//!
//! # Conventions
//! - Matrices are column-major and indexed `m[col][row]`.
//! - `scale`, `normalize`, `transpose`, `invert`... modify in place and return
//!   `&mut Self`; `scaled`, `normalized`, `transposed`, `inverted`... return a
//!   new value.
//! - [`Display`](core::fmt::Display) and [`FromStr`](core::str::FromStr) use
//!   whitespace separated numbers in memory order.
//!
//! # Features
//! #### Optional
//! - **serde**: `Serialize`/`Deserialize` for every type

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod generic;
pub mod interop;
pub mod io;
pub mod mat2;
pub mod mat3;
pub mod mat4;
pub mod quaternion;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use errors::{MathError, MathResult};
pub use float_types::Scalar;
pub use generic::Generic;
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quaternion::Quaternion;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;
pub type Mat2f = Mat2<f32>;
pub type Mat2d = Mat2<f64>;
pub type Mat3f = Mat3<f32>;
pub type Mat3d = Mat3<f64>;
pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;
pub type Quatf = Quaternion<f32>;
pub type Quatd = Quaternion<f64>;
