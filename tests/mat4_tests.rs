mod support;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use nalgebra::{Matrix4, Orthographic3, Perspective3};
use support::{EULER_DEGREES, assert_close, init_logging, same_rotation};
use vecmath3d::{Mat3d, Mat4, Mat4d, Mat4f, MathError, Quatd, Vec3, Vec3d, Vec4d, float_types::deg_to_rad};

const ROW_123_CHANGED: &str = "3 1 0.5 0 2 5 2 0 1 6 7 0 2 100 1 1";

#[test]
fn adjugate_fixture() {
    let m: Mat4d = ROW_123_CHANGED.parse().unwrap();
    assert_eq!(m.determinant(), 60.5);
    assert_eq!(m.determinant3x3(), 60.5);
    let expected: Mat4d = "23 -4 -0.5 0 -12 20.5 -5 0 7 -17 13 0 1147 -2025 488 60.5"
        .parse()
        .unwrap();
    assert_eq!(m.adjugated(), expected);
}

#[test]
fn inverse_matches_nalgebra() {
    init_logging();
    let m: Mat4d = ROW_123_CHANGED.parse().unwrap();
    let ours = m.inverted().unwrap();
    let reference = Matrix4::from(m).try_inverse().unwrap();
    assert_close(&ours, &Mat4::from(reference), 1e-12);
    assert_close(&(m * ours), &Mat4d::ident(), 1e-12);
}

#[test]
fn inverse_of_rigid_transform() {
    let mut m = Mat4d::ident();
    m.assign_euler_rotation(0.7, -0.2, 1.4);
    m.set_translation(&Vec3::new(3.0, -4.0, 5.0));

    let inv = m.inverted().unwrap();
    let p = Vec3d::new(1.0, 2.0, 3.0);
    assert_close(&inv.mul_vec3(&m.mul_vec3(&p)), &p, 1e-12);
}

#[test]
fn invert_singular_keeps_matrix() {
    init_logging();
    let mut m = Mat4f::ident();
    m[2][2] = 0.0;
    let before = m;
    assert!(matches!(m.invert(), Err(MathError::NotInvertible { .. })));
    assert_eq!(m, before);
}

#[test]
fn assign_mul_composes_translations() {
    let a: Mat4d = "1 0 0 0 0 1 0 0 0 0 1 0 3 5 7 1".parse().unwrap();
    let b: Mat4d = "1 0 0 0 0 1 0 0 0 0 1 0 2 4 8 1".parse().unwrap();
    let mut c = Mat4d::zero();
    c.assign_mul(&a, &b);
    assert_eq!(c.to_string(), "1 0 0 0 0 1 0 0 0 0 1 0 5 9 15 1");
    assert_eq!(a * b, c);
}

#[test]
fn mul_vec4_is_column_combination() {
    let m: Mat4d = "2 0 0 0 0 3 0 0 0 0 4 0 1 2 3 1".parse().unwrap();
    let mut v = Vec4d::new(1.0, 1.0, 1.0, 2.0);
    m.transform_vec4(&mut v);
    assert_eq!(v, Vec4d::new(4.0, 7.0, 10.0, 2.0));
    assert_eq!(m * Vec4d::new(0.0, 0.0, 0.0, 1.0), m[3]);
}

#[test]
fn perspective_matches_nalgebra() {
    let (fovy, aspect, near, far) = (FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);
    let mut m = Mat4d::ident();
    m.assign_perspective(fovy, aspect, near, far);
    let reference = Perspective3::new(aspect, fovy, near, far).to_homogeneous();
    assert_close(&m, &Mat4::from(reference), 1e-12);
    assert_eq!(m[2][3], -1.0);
    assert_eq!(m[3][3], 0.0);
}

#[test]
fn perspective_maps_depth_range() {
    let (near, far) = (0.5, 50.0);
    let mut m = Mat4d::ident();
    m.assign_perspective(FRAC_PI_2, 1.0, near, far);
    assert!((m.mul_vec3(&Vec3::new(0.0, 0.0, -near)).z + 1.0).abs() < 1e-12);
    assert!((m.mul_vec3(&Vec3::new(0.0, 0.0, -far)).z - 1.0).abs() < 1e-12);
}

#[test]
fn symmetric_frustum_equals_perspective() {
    let (fovy, aspect, near, far) = (1.1, 1.5, 1.0, 20.0);
    let top = near * (fovy / 2.0_f64).tan();
    let right = top * aspect;

    let mut frustum = Mat4d::ident();
    frustum.assign_frustum(-right, right, -top, top, near, far);
    let mut perspective = Mat4d::ident();
    perspective.assign_perspective(fovy, aspect, near, far);
    assert_close(&frustum, &perspective, 1e-12);
}

#[test]
fn off_center_frustum() {
    let mut m = Mat4d::ident();
    m.assign_frustum(-1.0, 3.0, -2.0, 2.0, 1.0, 10.0);
    assert_eq!(m[0][0], 0.5);
    assert_eq!(m[2][0], 0.5);
    assert_eq!(m[1][1], 0.5);
    assert_eq!(m[2][1], 0.0);
    // the frustum corner on the near plane lands on the NDC corner
    let corner = m.mul_vec3(&Vec3::new(3.0, 2.0, -1.0));
    assert_close(&corner, &Vec3::new(1.0, 1.0, -1.0), 1e-12);
}

#[test]
fn orthogonal_projection_matches_nalgebra() {
    let (l, r, b, t, n, f) = (-2.0, 4.0, -1.0, 3.0, 0.5, 30.0);
    let mut m = Mat4d::ident();
    m.assign_orthogonal_projection(l, r, b, t, n, f);
    let reference = Orthographic3::new(l, r, b, t, n, f).to_homogeneous();
    assert_close(&m, &Mat4::from(reference), 1e-12);

    assert_close(&m.mul_vec3(&Vec3::new(l, b, -n)), &Vec3::new(-1.0, -1.0, -1.0), 1e-12);
    assert_close(&m.mul_vec3(&Vec3::new(r, t, -f)), &Vec3::new(1.0, 1.0, 1.0), 1e-12);
}

#[test]
fn euler_round_trip() {
    for [head, pitch, roll] in EULER_DEGREES {
        let (h, p, r) = (deg_to_rad(head), deg_to_rad(pitch), deg_to_rad(roll));
        let mut m = Mat4d::ident();
        m.assign_euler_rotation(h, p, r);
        assert_eq!(m[3], Vec4d::new(0.0, 0.0, 0.0, 1.0));
        let (eh, ep, er) = m.extract_euler_angles();
        assert!((eh - h).abs() < 1e-12 && (ep - p).abs() < 1e-12 && (er - r).abs() < 1e-12);
    }
}

#[test]
fn single_axis_euler_matches_quaternion() {
    let point = Vec3d::new(2.0, -1.0, 0.5);
    for (head, pitch, roll) in [(0.8, 0.0, 0.0), (0.0, 0.6, 0.0), (0.0, 0.0, -1.1)] {
        let mut from_euler = Mat4d::ident();
        from_euler.assign_euler_rotation(head, pitch, roll);
        let mut from_quat = Mat4d::ident();
        from_quat.assign_quaternion(&Quatd::from_euler_angles(head, pitch, roll));
        assert_close(&from_euler.mul_vec3(&point), &from_quat.mul_vec3(&point), 1e-14);
    }
}

#[test]
fn mixed_euler_conventions_differ() {
    // matrix composes Rz * Rx * Ry, the quaternion Ry * Rx * Rz
    let (head, pitch, roll) = (0.4, 0.3, 0.2);
    let mut from_euler = Mat4d::ident();
    from_euler.assign_euler_rotation(head, pitch, roll);
    let mut from_quat = Mat4d::ident();
    from_quat.assign_quaternion(&Quatd::from_euler_angles(head, pitch, roll));
    assert!(!from_euler.practically_equals(&from_quat, 1e-3));
}

#[test]
fn quaternion_round_trip() {
    for [head, pitch, roll] in EULER_DEGREES {
        let q = Quatd::from_euler_angles(deg_to_rad(head), deg_to_rad(pitch), deg_to_rad(roll));
        let mut m = Mat4d::ident();
        m.assign_quaternion(&q);
        let mut again = Mat4d::ident();
        again.assign_quaternion(&m.quaternion());
        assert_close(&again, &m, 1e-12);
    }
}

#[test]
fn quaternion_pivots_on_largest_component() {
    let axes = [
        Vec3d::unit_x(),
        Vec3d::unit_y(),
        Vec3d::unit_z(),
        Vec3d::new(1.0, 1.0, 0.0).normalized(),
        Vec3d::new(-1.0, 2.0, 3.0).normalized(),
    ];
    for axis in axes {
        for angle in [PI, PI - 1e-9, 0.5] {
            let q = Quatd::from_axis_angle(&axis, angle);
            let mut m = Mat4d::ident();
            m.assign_quaternion(&q);
            let extracted = m.quaternion();
            assert!(extracted.is_unit_quat(1e-12));
            assert!(
                same_rotation(&extracted, &q, 1e-12),
                "axis {axis} angle {angle}: {extracted} vs {q}"
            );
        }
    }
}

#[test]
fn assign_mat3x3_resets_homogeneous_part() {
    let mut m: Mat4d = ROW_123_CHANGED.parse().unwrap();
    let block = m.mat3x3();
    m.assign_mat3x3(&block);
    assert_eq!(m.translation(), Vec3::zero());
    assert_eq!(m.mat3x3(), block);
    assert_eq!(Mat3d::from_generic(&m), block);
}

#[test]
fn scaling_accessors() {
    let mut m = Mat4d::ident();
    m.scale_vec3(&Vec3::new(2.0, 3.0, 4.0)).scale(0.5);
    assert_eq!(m.scaling(), Vec4d::new(1.0, 1.5, 2.0, 1.0));
    assert_eq!(m.trace3(), 4.5);
    assert_eq!(m.trace(), 5.5);
    m.set_scaling(&Vec4d::new(1.0, 1.0, 1.0, 1.0));
    assert_eq!(m, Mat4d::ident());
}

#[test]
fn transpose_round_trip() {
    let m: Mat4d = ROW_123_CHANGED.parse().unwrap();
    assert_eq!(m.transposed().transposed(), m);
    assert_eq!(m.transposed()[1][3], m[3][1]);

    let mut t = m;
    t.transpose3x3();
    assert_eq!(t[3], m[3]);
    assert_eq!(t[0][1], m[1][0]);
}
