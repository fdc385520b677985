//! Test suite.

mod algebra_laws;
mod arithmetic_tests;
mod rotation_tests;

use crate::CayleyDickson;

/// Build an element from small integer coefficients, truncating to the
/// algebra's dimension. Integer inputs keep every law exact in f64.
pub(crate) fn element<A: CayleyDickson<Scalar = f64>>(data: &[i8]) -> A {
    let coefficients: Vec<f64> = data
        .iter()
        .take(A::DIMENSIONS)
        .map(|&v| f64::from(v))
        .collect();
    A::read_coefficients(&coefficients)
}
