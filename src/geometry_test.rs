#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_new_stores_coordinates() {
    let p = Point::new(3.0, -4.5);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, -4.5);
}

#[test]
fn point_clone_and_copy() {
    let a = Point::new(1.0, 2.0);
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance_to(b), 5.0);
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(7.0, 7.0);
    assert_eq!(p.distance_to(p), 0.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-1.0, 2.0);
    let b = Point::new(4.0, -10.0);
    assert_eq!(a.distance_to(b), b.distance_to(a));
}

#[test]
fn angle_along_positive_x_axis_is_zero() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert_eq!(a.angle_to(b), 0.0);
}

#[test]
fn angle_of_diagonal_is_quarter_pi() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(5.0, 5.0);
    assert!((a.angle_to(b) - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn point_serde_roundtrip() {
    let p = Point::new(1.5, 2.5);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":2.5}"#);
    let back: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
