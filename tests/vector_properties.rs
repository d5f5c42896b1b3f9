//! Algebraic properties of the vector types across the built-in scalars.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use common::{assert_type, init_tracing};
use geom::math::{Vector2, Vector3, Vector4};

#[test]
fn addition_commutes_for_every_scalar() {
    init_tracing();
    let a = Vector3::new(1_i32, -2, 3);
    let b = Vector3::new(4_i32, 5, -6);
    assert_eq!(a + b, b + a);

    let a = Vector3::new(1_u64, 2, 3);
    let b = Vector3::new(4_u64, 5, 6);
    assert_eq!(a + b, b + a);

    let a = Vector2::new(0.25_f32, 1.5);
    let b = Vector2::new(2.0_f64, -1.0);
    assert_eq!(a + b, b + a);
}

#[test]
fn mixed_addition_promotes_statically() {
    let sum = Vector2::new(1_i32, 2) + Vector2::new(3_u32, 4);
    assert_type::<Vector2<u32>>(&sum);
    assert_eq!(sum, Vector2::new(4_u32, 6));

    let sum = Vector3::new(1_u32, 2, 3) + Vector3::new(1_i64, 1, 1);
    assert_type::<Vector3<i64>>(&sum);

    let sum = Vector3::new(1_i64, 2, 3) + Vector3::new(0.5_f32, 0.5, 0.5);
    assert_type::<Vector3<f32>>(&sum);
    assert_eq!(sum, Vector3::new(1.5_f32, 2.5, 3.5));

    let sum = Vector4::new(1_f32, 2.0, 3.0, 4.0) + Vector4::new(1_f64, 1.0, 1.0, 1.0);
    assert_type::<Vector4<f64>>(&sum);
}

#[test]
fn scalar_multiplication_from_either_side() {
    let v = Vector3::new(1_i32, 2, 3);
    let left = 2.5_f64 * v;
    let right = v * 2.5_f64;
    assert_type::<Vector3<f64>>(&left);
    assert_eq!(left, right);
    assert_eq!(left, Vector3::new(2.5, 5.0, 7.5));
}

#[test]
fn elementwise_multiplication_and_division() {
    let v = Vector3::new(2_i32, 4, 6) * Vector3::new(3_i32, 2, 1);
    assert_eq!(v, Vector3::new(6, 8, 6));

    let q = Vector2::new(7_i32, 9) / Vector2::new(2.0_f32, 3.0);
    assert_type::<Vector2<f32>>(&q);
    assert_eq!(q, Vector2::new(3.5, 3.0));
}

#[test]
fn subtraction_is_inverse_of_addition() {
    let a = Vector4::new(1.5_f64, -2.0, 3.25, 0.0);
    let b = Vector4::new(0.5_f64, 4.0, -1.0, 9.0);
    assert_eq!((a + b) - b, a);
}

#[test]
fn double_negation_is_identity() {
    let v = Vector3::new(1_i64, -7, 0);
    assert_eq!(-(-v), v);
    let v = Vector2::new(-0.5_f32, 2.0);
    assert_eq!(-(-v), v);
}

#[test]
fn dot_is_symmetric_and_promotes() {
    let a = Vector3::new(1_i32, 2, 3);
    let b = Vector3::new(0.5_f64, 0.5, 0.5);
    let d = a.dot(b);
    assert_type::<f64>(&d);
    assert_eq!(d, b.dot(a));
    assert_eq!(d, 3.0);
}

#[test]
fn cross_product_is_orthogonal_and_anticommutative() {
    let a = Vector3::new(1.0_f64, 2.0, 3.0);
    let b = Vector3::new(-4.0_f64, 0.5, 2.0);
    let c = a.cross(b);
    assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-12);
    assert_eq!(c, -b.cross(a));

    assert_eq!(
        Vector3::new(1_i32, 0, 0).cross(Vector3::new(0_i32, 1, 0)),
        Vector3::new(0, 0, 1)
    );
}

#[test]
fn length_precision_follows_the_scalar() {
    let v = Vector2::new(3_i32, 4);
    let len = v.length();
    assert_type::<f64>(&len);
    assert_eq!(len, 5.0);

    let v = Vector2::new(3.0_f32, 4.0);
    let len = v.length();
    assert_type::<f32>(&len);
    assert_eq!(len, 5.0);
}

#[test]
fn normalized_vectors_have_unit_length() {
    for v in [
        Vector3::new(1.0_f64, 1.0, 1.0),
        Vector3::new(-3.0, 0.0, 4.0),
        Vector3::new(1e-3, 2e3, -7.0),
    ] {
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
    }
    let n = Vector3::new(0_u32, 0, 9).normalize();
    assert_type::<Vector3<f64>>(&n);
    assert_eq!(n, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn zero_vector_normalizes_to_nan() {
    let n = Vector2::new(0.0_f64, 0.0).normalize();
    assert!(n.x.is_nan() && n.y.is_nan());
}

#[test]
fn reflection_preserves_length() {
    let normal = Vector3::new(0.0_f64, 1.0, 0.0);
    let v = Vector3::new(1.0_f64, -2.0, 0.5);
    let r = v.reflect(normal);
    assert_eq!(r, Vector3::new(1.0, 2.0, 0.5));
    assert_relative_eq!(r.length(), v.length());

    let r = Vector2::new(3_i32, -4).reflect(Vector2::new(0_i32, 1));
    assert_eq!(r, Vector2::new(3, 4));
}

#[test]
fn refraction_follows_snell() {
    init_tracing();
    let eta = 1.0_f64 / 1.5;
    let normal = Vector3::new(0.0_f64, 1.0, 0.0);
    let incident = Vector3::new(1.0_f64, -1.0, 0.0).normalize();
    let t = incident.refract(normal, eta);

    let sin_in = incident.x.abs();
    let sin_out = t.normalize().x.abs();
    assert_relative_eq!(sin_in * eta, sin_out, epsilon = 1e-12);
    assert_relative_eq!(t.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn refraction_total_internal_reflection_gives_zero() {
    init_tracing();
    let normal = Vector3::new(0.0_f64, 1.0, 0.0);
    let grazing = Vector3::new(1.0_f64, -0.1, 0.0).normalize();
    assert_eq!(grazing.refract(normal, 1.5_f64), Vector3::<f64>::zeros());
}

#[test]
fn refraction_result_type_includes_eta() {
    let t = Vector3::new(0_i32, -1, 0).refract(Vector3::new(0_i32, 1, 0), 1.0_f32);
    assert_type::<Vector3<f32>>(&t);
}

#[test]
fn comparisons_are_conjunctive() {
    let a = Vector3::new(1_i32, 2, 3);
    let b = Vector3::new(2_i32, 3, 4);
    let c = Vector3::new(0_i32, 5, 0);
    assert!(a < b);
    assert!(b > a);
    assert!(!(a < c) && !(a > c) && !(a <= c) && !(a >= c));
    assert!(a != c);
    let same = a;
    assert!(a <= same && a >= same);
    assert!(Vector2::new(1_i32, 2) == Vector2::new(1.0_f64, 2.0));
}

#[test]
fn compound_assignment_keeps_the_left_type() {
    let mut v = Vector2::new(1_i32, 2);
    v += Vector2::new(0.75_f64, 0.75);
    assert_type::<Vector2<i32>>(&v);
    assert_eq!(v, Vector2::new(1, 2));

    let mut v = Vector3::new(2.0_f32, 4.0, 8.0);
    v /= 2_i32;
    assert_eq!(v, Vector3::new(1.0, 2.0, 4.0));
}
