use super::*;

#[test]
fn test_vector3f64_from_array() {
    let v = Vector3f64::from([0.5, 0.25, -1.0]);
    assert_eq!(v, Vector3f64::new(0.5, 0.25, -1.0));
    assert_eq!(v.to_array(), [0.5, 0.25, -1.0]);
    assert_eq!(v.as_slice(), &[0.5, 0.25, -1.0]);
}

#[test]
fn test_vector3f64_zeros_and_set_zeros() {
    let mut v = Vector3f64::new(1.0, 2.0, 3.0);
    v.set_zeros();
    assert_eq!(v, Vector3f64::zeros());
}

#[test]
fn test_vector3f64_dot_and_norm() {
    let v1 = Vector3f64::new(1.0, 2.0, 3.0);
    let v2 = Vector3f64::new(4.0, 5.0, 6.0);

    assert_eq!(v1.dot_product(&v2), 32.0);
    assert_eq!(v1 * v2, 32.0);

    let v = Vector3f64::new(3.0, 4.0, 0.0);
    assert_eq!(v.norm_squared(), 25.0);
    assert_eq!(v.norm2(), 5.0);
}

#[test]
fn test_vector3f64_cross_product_is_orthogonal() {
    let v1 = Vector3f64::new(1.0, 2.0, 0.5);
    let v2 = Vector3f64::new(-0.3, 1.0, 2.0);
    let c = v1.cross_product(&v2);

    assert!(v1.dot_product(&c).abs() < 1e-12);
    assert!(v2.dot_product(&c).abs() < 1e-12);
}

#[test]
fn test_vector3f64_arithmetic() {
    let k = Vector3f64::new(0.5, 0.5, 0.5);
    let g = Vector3f64::new(1.0, -1.0, 1.0);

    assert_eq!(k + g, Vector3f64::new(1.5, -0.5, 1.5));
    assert_eq!(k - g, Vector3f64::new(-0.5, 1.5, -0.5));
    assert_eq!(-k, Vector3f64::new(-0.5, -0.5, -0.5));
    assert_eq!(k * 2.0, Vector3f64::new(1.0, 1.0, 1.0));
    assert_eq!(2.0 * k, Vector3f64::new(1.0, 1.0, 1.0));
    assert_eq!(g / 2.0, Vector3f64::new(0.5, -0.5, 0.5));

    let mut s = k;
    s += g;
    assert_eq!(s, k + g);
}

#[test]
fn test_vector3f64_is_finite() {
    assert!(Vector3f64::new(1.0, 0.0, -2.0).is_finite());
    assert!(!Vector3f64::new(f64::NAN, 0.0, 0.0).is_finite());
    assert!(!Vector3f64::new(0.0, f64::INFINITY, 0.0).is_finite());
}

#[test]
fn test_vector3i32_shell_magnitudes() {
    // first shells of the fcc reciprocal lattice in units of 2pi/a
    assert_eq!(Vector3i32::new(1, 1, 1).norm_squared(), 3);
    assert_eq!(Vector3i32::new(2, 0, 0).norm_squared(), 4);
    assert_eq!(Vector3i32::new(2, 2, 0).norm_squared(), 8);
    assert_eq!(Vector3i32::new(3, 1, 1).norm_squared(), 11);
}

#[test]
fn test_vector3i32_arithmetic() {
    let g1 = Vector3i32::new(1, 1, 1);
    let g2 = Vector3i32::new(-1, 1, -1);

    assert_eq!(g1 + g2, Vector3i32::new(0, 2, 0));
    assert_eq!(g1 - g2, Vector3i32::new(2, 0, 2));
    assert_eq!(-g1, Vector3i32::new(-1, -1, -1));
    assert_eq!(g1.dot_product(&g2), -1);
    assert_eq!(g1.to_f64(), Vector3f64::new(1.0, 1.0, 1.0));
}

#[test]
fn test_vector3_display() {
    assert_eq!(format!("{}", Vector3i32::new(3, -1, 1)), "3 -1 1");
    assert_eq!(format!("{}", Vector3f64::new(0.5, 0.0, 1.0)), "0.5 0 1");
}
