mod support;

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Unit, UnitQuaternion, Vector3};
use support::{TEST_VECTORS, assert_close, same_rotation, vec3d};
use vecmath3d::{Quaternion, Quatd, Quatf, Vec3, Vec3d, Vec3f, float_types::deg_to_rad};

/// `(x_pitch, y_head, z_roll)` in degrees; large angles wrap around.
const ROTATE_DEGREES: [[f64; 3]; 3] = [[90.0, 20.0, 21.0], [-90.0, 0.0, 0.0], [28.0, 1043.0, -38.0]];

fn sandwich(q: &Quatd, v: &Vec3d) -> Vec3d {
    let p = Quatd::mul3(q, &Quaternion::new(v.x, v.y, v.z, 0.0), &q.inverted());
    Vec3::new(p.x, p.y, p.z)
}

#[test]
fn rotate_vec3_matches_sandwich_product() {
    for v in TEST_VECTORS.map(vec3d) {
        for [pitch, head, roll] in ROTATE_DEGREES {
            let q = Quatd::from_euler_angles(deg_to_rad(head), deg_to_rad(pitch), deg_to_rad(roll));

            let rotated = q.rotated_vec3(&v);
            let mut in_place = v;
            q.rotate_vec3(&mut in_place);
            assert_eq!(in_place, rotated);

            // mul normalizes, so only the direction of the sandwich survives
            assert_close(&rotated.normalized(), &sandwich(&q, &v).normalized(), 1e-14);
            assert!((rotated.length_sqr() - v.length_sqr()).abs() < 1e-12);
        }
    }
}

#[test]
fn rotate_vec3_single_precision() {
    for [x, y, z] in TEST_VECTORS {
        let v = Vec3f::new(x as f32, y as f32, z as f32);
        let q = Quatf::from_euler_angles(0.3, -1.1, 2.0);
        let p = Quatf::mul3(&q, &Quaternion::new(v.x, v.y, v.z, 0.0), &q.inverted());
        let sandwiched = Vec3::new(p.x, p.y, p.z);
        assert_close(&q.rotated_vec3(&v).normalized(), &sandwiched.normalized(), 1e-6);
    }
}

#[test]
fn quarter_turn_around_z() {
    let q = Quatd::from_axis_angle(&Vec3::unit_z(), FRAC_PI_2);
    assert_close(&q.rotated_vec3(&Vec3::unit_x()), &Vec3::unit_y(), 1e-15);

    let q = Quatf::from_z_axis_angle(std::f32::consts::FRAC_PI_2);
    assert_close(&q.rotated_vec3(&Vec3::unit_x()), &Vec3::unit_y(), 1e-6);
}

#[test]
fn rotation_matches_nalgebra() {
    let axis = Vec3d::new(1.0, -2.0, 0.5).normalized();
    let angle = 2.3;
    let ours = Quatd::from_axis_angle(&axis, angle);
    let reference = UnitQuaternion::from_axis_angle(&Unit::new_normalize(Vector3::from(axis)), angle);

    assert!(same_rotation(&ours, &Quaternion::from(*reference.quaternion()), 1e-14));
    for v in TEST_VECTORS.map(vec3d) {
        let expected = reference.transform_vector(&Vector3::from(v));
        assert_close(&ours.rotated_vec3(&v), &Vec3::from(expected), 1e-13);
    }
}

#[test]
fn hamilton_product_matches_nalgebra() {
    let a = Quatd::from_euler_angles(0.2, 0.4, -0.9);
    let b = Quatd::from_axis_angle(&Vec3::new(0.0, 0.6, 0.8), -1.3);
    let expected = nalgebra::Quaternion::from(a) * nalgebra::Quaternion::from(b);
    assert!(same_rotation(&(a * b), &Quaternion::from(expected), 1e-14));
    assert_eq!(a * b, Quatd::mul(&a, &b));
}

#[test]
fn composition_adds_angles() {
    let q = Quatd::mul4(
        &Quatd::from_x_axis_angle(0.1),
        &Quatd::from_x_axis_angle(0.2),
        &Quatd::from_x_axis_angle(0.3),
        &Quatd::from_x_axis_angle(0.4),
    );
    assert!(same_rotation(&q, &Quatd::from_x_axis_angle(1.0), 1e-14));
}

#[test]
fn euler_angles_round_trip() {
    for head in [-3.0, -1.5, 0.0, 0.7, 2.5, PI] {
        for pitch in [-1.2, -0.5, 0.0, 0.9, 1.4] {
            for roll in [-2.9, 0.0, 1.0, 3.0] {
                let q = Quatd::from_euler_angles(head, pitch, roll);
                let (h, p, r) = q.to_euler_angles();
                let again = Quatd::from_euler_angles(h, p, r);
                assert!(
                    same_rotation(&q, &again, 1e-14),
                    "({head}, {pitch}, {roll}) -> ({h}, {p}, {r})"
                );
            }
        }
    }
}

#[test]
fn slerp_stays_unit_and_hits_endpoints() {
    let a = Quatd::from_euler_angles(0.3, 0.2, 0.0);
    let mut b = Quatd::from_z_axis_angle(2.5);
    b.set_shortest_rotation(&a);

    assert!(same_rotation(&Quatd::slerp(&a, &b, 0.0), &a, 1e-12));
    assert!(same_rotation(&Quatd::slerp(&a, &b, 1.0), &b, 1e-12));
    for i in 1..10 {
        let q = Quatd::slerp(&a, &b, f64::from(i) / 10.0);
        assert!((q.norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn slerp_halfway_halves_the_angle() {
    let a = Quatd::ident();
    let b = Quatd::from_y_axis_angle(1.6);
    let half = Quatd::slerp(&a, &b, 0.5);
    assert!(same_rotation(&half, &Quatd::from_y_axis_angle(0.8), 1e-14));

    let a = Quatf::ident();
    let b = Quatf::from_y_axis_angle(1.6);
    assert!(same_rotation(&Quatf::slerp(&a, &b, 0.25), &Quatf::from_y_axis_angle(0.4), 1e-6));
}

#[test]
fn vec3_diff_rotates_a_onto_b() {
    let pairs = [
        (Vec3d::unit_x(), Vec3d::unit_y()),
        (Vec3d::new(1.0, 2.0, 3.0).normalized(), Vec3d::new(-3.0, 0.5, 1.0).normalized()),
        (Vec3d::unit_z(), Vec3d::unit_z()),
    ];
    for (a, b) in pairs {
        let q = Quatd::vec3_diff(&a, &b);
        assert!(q.is_unit_quat(1e-12));
        assert_close(&q.rotated_vec3(&a), &b, 1e-14);
    }
}

#[test]
fn negation_keeps_rotation() {
    let q = Quatd::from_euler_angles(1.0, -0.4, 0.3);
    let v = Vec3d::new(1.0, 2.0, 3.0);
    assert_close(&(-q).rotated_vec3(&v), &q.rotated_vec3(&v), 1e-14);

    let mut n = q;
    n.negate();
    assert_eq!(n, q.negated());
    assert!(!Quatd::is_shortest_rotation(&n, &q));
}

#[test]
fn vec4_conversion() {
    let q = Quatd::new(0.1, 0.2, 0.3, 0.9);
    assert_eq!(Quatd::from_vec4(&q.vec4()), q);
    assert_eq!(q.vec4().w, 0.9);
}

#[test]
fn axis_angle_round_trip() {
    let axis = Vec3d::new(2.0, 0.0, -1.0).normalized();
    let (a, angle) = Quatd::from_axis_angle(&axis, 0.75).axis_angle();
    assert_close(&a, &axis, 1e-14);
    assert!((angle - 0.75).abs() < 1e-14);
}

#[test]
fn slerp_between_equal_rotations_is_nan() {
    // acos(1) == 0 lands in the denominator
    let a = Quatd::ident();
    let q = Quatd::slerp(&a, &a, 0.5);
    assert!(q.x.is_nan() && q.y.is_nan() && q.z.is_nan() && q.w.is_nan(), "{q}");
}

#[test]
fn vec3_diff_of_opposite_vectors_is_nan() {
    let a = Vec3d::unit_x();
    let q = Quatd::vec3_diff(&a, &-a);
    assert!(q.x.is_nan() && q.y.is_nan() && q.z.is_nan() && q.w.is_nan(), "{q}");
}
