//! Narrowing conversions between doubling levels.
//!
//! An element narrows to a lower-dimension type only when every coefficient
//! beyond the target dimension is zero; anything else is a
//! [`AlgebraError::NarrowingLoss`]. Widening goes through
//! [`CayleyDickson::from_algebra`], which pads with zeros instead.

use num_traits::Zero;

use crate::core::error::AlgebraError;
use crate::core::traits::CayleyDickson;

fn check_narrowing<A: CayleyDickson>(
    value: &A,
    target: usize,
) -> Result<Vec<A::Scalar>, AlgebraError> {
    let coefficients = value.coefficients();
    if coefficients[target.min(coefficients.len())..]
        .iter()
        .any(|c| *c != A::Scalar::zero())
    {
        return Err(AlgebraError::narrowing_loss(A::DIMENSIONS, target));
    }
    Ok(coefficients)
}

/// Narrow `value` to a lower-or-equal-dimension algebra over the same base
/// field.
///
/// # Errors
/// [`AlgebraError::NarrowingLoss`] when a coefficient at or beyond the
/// target dimension is non-zero.
///
/// # Example
/// ```
/// use hypercomplex::{CayleyDickson, Complex, Quaternion, try_narrow};
/// let q = Quaternion::<f64>::from_coefficients(&[1.0, 2.0]).unwrap();
/// let z: Complex = try_narrow(&q).unwrap();
/// assert_eq!(z.coefficients(), vec![1.0, 2.0]);
/// ```
pub fn try_narrow<A, B>(value: &A) -> Result<B, AlgebraError>
where
    A: CayleyDickson,
    B: CayleyDickson<Scalar = A::Scalar>,
{
    let coefficients = check_narrowing(value, B::DIMENSIONS)?;
    B::from_coefficients(&coefficients[..B::DIMENSIONS.min(coefficients.len())])
}

/// Narrow `value` to its bare real part.
///
/// # Errors
/// [`AlgebraError::NarrowingLoss`] when any imaginary coefficient is
/// non-zero.
pub fn try_real<A: CayleyDickson>(value: &A) -> Result<A::Scalar, AlgebraError> {
    check_narrowing(value, 1)?;
    Ok(value.real())
}

/// Narrow `value` to the `(real, imaginary)` pair of a complex number.
///
/// Level-0 elements widen their missing imaginary part to zero.
///
/// # Errors
/// [`AlgebraError::NarrowingLoss`] when a coefficient beyond the first two
/// is non-zero.
pub fn try_complex_pair<A: CayleyDickson>(
    value: &A,
) -> Result<(A::Scalar, A::Scalar), AlgebraError> {
    let coefficients = check_narrowing(value, 2)?;
    let imaginary = coefficients
        .get(1)
        .copied()
        .unwrap_or_else(A::Scalar::zero);
    Ok((coefficients[0], imaginary))
}
