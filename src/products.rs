//! Inner, outer and Hadamard products.
//!
//! All three share the term formatter of the basis module so their output
//! shape matches the multiplication tables.

use num_traits::Zero;

use crate::basis::{BasisFormat, named_string, term_string};
use crate::core::CayleyDickson;

/// The scalar inner product `real(conj(x) * y)`.
///
/// # Example
/// ```
/// use hypercomplex::{CayleyDickson, Complex, inner_product};
/// let x = Complex::<f64>::from_coefficients(&[1.0, 2.0]).unwrap();
/// let y = Complex::<f64>::from_coefficients(&[3.0, 4.0]).unwrap();
/// assert_eq!(inner_product(&x, &y), 11.0);
/// ```
pub fn inner_product<A: CayleyDickson>(x: &A, y: &A) -> A::Scalar {
    (x.conjugate() * y.clone()).real()
}

/// The `d x d` tensor outer product table: entry `(i, j)` is the named term
/// of `x_i * conj(y)_j`, where `x_i` keeps only coefficient `i` of `x`.
pub fn outer_product_strings<A: CayleyDickson>(
    x: &A,
    y: &A,
    format: &BasisFormat,
) -> Vec<Vec<String>> {
    let conjugate = y.conjugate();
    let left: Vec<A> = (0..A::DIMENSIONS)
        .map(|i| x.value_at(i).expect("index is within the algebra's dimensions"))
        .collect();
    let right: Vec<A> = (0..A::DIMENSIONS)
        .map(|j| {
            conjugate
                .value_at(j)
                .expect("index is within the algebra's dimensions")
        })
        .collect();

    left.iter()
        .map(|a| {
            right
                .iter()
                .map(|b| named_string(&(a.clone() * b.clone()), format))
                .collect()
        })
        .collect()
}

/// The componentwise Hadamard product as an element: coefficient `i` is the
/// scalar product `x_i * y_i`.
pub fn hadamard_product<A: CayleyDickson>(x: &A, y: &A) -> A {
    let coefficients: Vec<A::Scalar> = x
        .coefficients()
        .iter()
        .zip(y.coefficients().iter())
        .map(|(&a, &b)| a * b)
        .collect();
    A::read_coefficients(&coefficients)
}

/// The componentwise Hadamard product rendered as named terms, one per
/// basis position; zero components render `"0"`.
pub fn hadamard_strings<A: CayleyDickson>(x: &A, y: &A, format: &BasisFormat) -> Vec<String> {
    x.coefficients()
        .iter()
        .zip(y.coefficients().iter())
        .enumerate()
        .map(|(index, (&a, &b))| {
            let product = a * b;
            if product == A::Scalar::zero() {
                "0".to_owned()
            } else {
                term_string::<A::Scalar>(A::DIMENSIONS, index, product, format)
            }
        })
        .collect()
}
