// Concrete arithmetic scenarios, including the boundary-law witnesses.

use super::element;
use crate::{CayleyDickson, Complex, Octonion, Quaternion, Real, Sedenion};

#[test]
fn test_quaternion_i_times_j_is_k() {
    let i = Quaternion::<f64>::basis(1).expect("basis index 1 exists");
    let j = Quaternion::<f64>::basis(2).expect("basis index 2 exists");
    let k = Quaternion::<f64>::basis(3).expect("basis index 3 exists");
    assert_eq!(i * j, k);
}

#[test]
fn test_quaternion_j_times_i_is_minus_k() {
    let i = Quaternion::<f64>::basis(1).expect("basis index 1 exists");
    let j = Quaternion::<f64>::basis(2).expect("basis index 2 exists");
    let k = Quaternion::<f64>::basis(3).expect("basis index 3 exists");
    assert_eq!(j * i, -k);
}

#[test]
fn test_complex_norm_is_exact() {
    let z = Complex::<f64>::from_coefficients(&[3.0, 4.0]).expect("two coefficients fit");
    assert_eq!(z.norm(), 5.0);
    assert_eq!(z.squared_norm(), 25.0);
}

#[test]
fn test_octonion_non_associativity_witness() {
    let e1 = Octonion::<f64>::basis(1).expect("basis index 1 exists");
    let e2 = Octonion::<f64>::basis(2).expect("basis index 2 exists");
    let e4 = Octonion::<f64>::basis(4).expect("basis index 4 exists");
    let e7 = Octonion::<f64>::basis(7).expect("basis index 7 exists");

    // e1 * (e2 * e4) = -e7 but (e1 * e2) * e4 = e7
    assert_eq!(e1 * (e2 * e4), -e7);
    assert_eq!((e1 * e2) * e4, e7);
    assert_ne!(e1 * (e2 * e4), (e1 * e2) * e4);
}

#[test]
fn test_sedenion_zero_divisors() {
    let e3 = Sedenion::<f64>::basis(3).expect("basis index 3 exists");
    let e10 = Sedenion::<f64>::basis(10).expect("basis index 10 exists");
    let e6 = Sedenion::<f64>::basis(6).expect("basis index 6 exists");
    let e15 = Sedenion::<f64>::basis(15).expect("basis index 15 exists");

    let x = e3 + e10;
    let y = e6 - e15;
    assert!(!x.is_zero());
    assert!(!y.is_zero());
    assert!((x * y).is_zero());

    // Norm multiplicativity breaks with them: |x*y| = 0 but |x|*|y| = 2
    assert_eq!(x.squared_norm() * y.squared_norm(), 4.0);
}

#[test]
fn test_sedenion_alternativity_failure_witness() {
    let x: Sedenion = element(&[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1]); // e1 + e10
    let y = Sedenion::<f64>::basis(4).expect("basis index 4 exists");
    assert_ne!(x * (x * y), (x * x) * y);
}

#[test]
fn test_inverse_round_trip() {
    let x: Octonion = element(&[2, -1, 3, 0, 1, -2, 0, 5]);
    let residue = (x * x.inverse() - Octonion::one()).norm();
    let tolerance = 256.0 * f64::EPSILON;
    assert!(residue < tolerance, "residue {} over {}", residue, tolerance);
}

#[test]
fn test_powi() {
    let i = Quaternion::<f64>::basis(1).expect("basis index 1 exists");
    assert_eq!(i.powi(0), Quaternion::one());
    assert_eq!(i.powi(2), -Quaternion::one());
    assert_eq!(i.powi(3), -i);
    assert_eq!(i.powi(4), Quaternion::one());
    // Negative exponents run through the inverse: i^-1 = -i
    assert_eq!(i.powi(-1), -i);
    assert_eq!(i.powi(-2), -Quaternion::one());
}

#[test]
fn test_division() {
    let x: Quaternion = element(&[1, 2, 3, 4]);
    let y: Quaternion = element(&[0, 1, -1, 2]);
    let quotient = x / y;
    let residue = (quotient * y - x).norm();
    assert!(residue < 1e-12, "residue {}", residue);
}

#[test]
fn test_scalar_operators() {
    let z = Complex::<f64>::from_coefficients(&[1.0, -2.0]).expect("two coefficients fit");
    assert_eq!(z * 2.0, Complex::from_coefficients(&[2.0, -4.0]).expect("fits"));
    assert_eq!(z / 2.0, Complex::from_coefficients(&[0.5, -1.0]).expect("fits"));
    assert_eq!(z + 1.0, Complex::from_coefficients(&[2.0, -2.0]).expect("fits"));
    assert_eq!(z - 1.0, Complex::from_coefficients(&[0.0, -2.0]).expect("fits"));
}

#[test]
fn test_reference_operators() {
    let x: Quaternion = element(&[1, 2, 3, 4]);
    let y: Quaternion = element(&[4, 3, 2, 1]);
    assert_eq!(&x + &y, x + y);
    assert_eq!(&x - &y, x - y);
    assert_eq!(&x * &y, x * y);
    assert_eq!(-&x, -x);
}

#[test]
fn test_conjugate_negates_imaginaries() {
    let x: Quaternion = element(&[1, 2, 3, 4]);
    assert_eq!(x.conjugate().coefficients(), vec![1.0, -2.0, -3.0, -4.0]);
}

#[test]
fn test_real_adapter() {
    let x = Real::new(-3.0);
    assert_eq!(x.dimensions(), 1);
    assert_eq!(x.level(), 0);
    assert_eq!(x.coefficients(), vec![-3.0]);
    assert_eq!(x.conjugate(), x);
    assert_eq!(x.imag(), Vec::<f64>::new());
    assert_eq!((x * x).value(), 9.0);
    assert_eq!(x.squared_norm(), 9.0);
}

#[test]
fn test_nan_propagates() {
    let z = Complex::<f64>::from_coefficients(&[f64::NAN, 1.0]).expect("fits");
    let w = Complex::<f64>::one();
    assert!((z * w).real().is_nan());
    // Zero inverse is not trapped either
    assert!(Complex::<f64>::zero().inverse().real().is_nan());
}

#[test]
fn test_from_coefficients_pads_with_zeros() {
    let q = Quaternion::<f64>::from_coefficients(&[1.0, 2.0]).expect("two of four");
    assert_eq!(q.coefficients(), vec![1.0, 2.0, 0.0, 0.0]);
}

#[test]
fn test_from_coefficients_rejects_too_many() {
    let result = Complex::<f64>::from_coefficients(&[1.0, 2.0, 3.0]);
    assert_eq!(
        result,
        Err(crate::AlgebraError::too_many_coefficients(3, 2))
    );
}

#[test]
fn test_from_algebra_pads_lower_levels() {
    let z = Complex::<f64>::from_coefficients(&[1.0, 2.0]).expect("fits");
    let q = Quaternion::<f64>::from_algebra(&z).expect("widening always fits");
    assert_eq!(q.coefficients(), vec![1.0, 2.0, 0.0, 0.0]);

    let back = Quaternion::<f64>::from_algebra(&q).expect("same level fits");
    assert_eq!(back, q);

    assert!(Complex::<f64>::from_algebra(&q).is_err());
}

#[test]
fn test_basis_out_of_range() {
    assert_eq!(
        Quaternion::<f64>::basis(4),
        Err(crate::AlgebraError::basis_out_of_range(4, 4))
    );
}

#[test]
fn test_pair_construction() {
    let a = Complex::<f64>::from_coefficients(&[1.0, 2.0]).expect("fits");
    let b = Complex::<f64>::from_coefficients(&[3.0, 4.0]).expect("fits");
    let q = Quaternion::pair(a, b);
    assert_eq!(q.coefficients(), vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(q.a(), &a);
    assert_eq!(q.b(), &b);
    assert_eq!(q.into_pair(), (a, b));
}
