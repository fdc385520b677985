//! Capability traits for the base field and the doubling levels.
//!
//! `Scalar` is the field-like capability set required of the level-0 base
//! type. `CayleyDickson` is the capability set every doubling level
//! satisfies: flat coefficient access, conjugation, and the arithmetic
//! operators, with the derived operations (norms, inverses, powers, basis
//! vectors) provided once on top of them.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Float, One, Zero};

use crate::core::error::AlgebraError;

/// Capability set of the base field.
///
/// Satisfied by `f64` and `f32` out of the box. `Float` supplies the
/// arithmetic, absolute value and square root the construction needs; IEEE
/// NaN and infinity semantics pass through untouched.
pub trait Scalar: Float + Default + fmt::Debug + fmt::Display {}

impl<T> Scalar for T where T: Float + Default + fmt::Debug + fmt::Display {}

/// Capability set of a Cayley-Dickson algebra at any doubling level.
///
/// Level 0 is [`Real`](crate::Real); level `n > 0` is
/// [`Construction<P>`](crate::Construction) over the level `n-1` algebra
/// `P`. Arithmetic is defined once, generically, in terms of the parent's
/// arithmetic, and monomorphized per level.
///
/// Elements are immutable values: every operation returns a fresh element
/// and coefficients are never shared.
pub trait CayleyDickson:
    Clone
    + PartialEq
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sized
{
    /// The base field type.
    type Scalar: Scalar;

    /// Number of coefficients, `2^LEVEL`.
    const DIMENSIONS: usize;

    /// Doubling level; dimension is `2^LEVEL`.
    const LEVEL: u32;

    /// The element whose only non-zero coefficient is the real part `value`.
    fn from_real(value: Self::Scalar) -> Self;

    /// The conjugate: real part kept, imaginary coefficients negated.
    fn conjugate(&self) -> Self;

    /// The real part (first coefficient).
    fn real(&self) -> Self::Scalar;

    /// Append the flat coefficient vector to `out`.
    fn write_coefficients(&self, out: &mut Vec<Self::Scalar>);

    /// Build an element from a flat coefficient slice.
    ///
    /// Short slices pad with zeros; coefficients beyond
    /// [`DIMENSIONS`](Self::DIMENSIONS) are ignored. Use
    /// [`from_coefficients`](Self::from_coefficients) for checked
    /// construction.
    fn read_coefficients(coefficients: &[Self::Scalar]) -> Self;

    /// The additive identity.
    fn zero() -> Self {
        Self::read_coefficients(&[])
    }

    /// The multiplicative identity.
    fn one() -> Self {
        Self::from_real(Self::Scalar::one())
    }

    /// The flat coefficient vector, parent's `a` coefficients first.
    fn coefficients(&self) -> Vec<Self::Scalar> {
        let mut out = Vec::with_capacity(Self::DIMENSIONS);
        self.write_coefficients(&mut out);
        out
    }

    /// The imaginary coefficients (everything after the real part).
    fn imag(&self) -> Vec<Self::Scalar> {
        let mut out = self.coefficients();
        out.remove(0);
        out
    }

    /// Instance view of [`DIMENSIONS`](Self::DIMENSIONS).
    fn dimensions(&self) -> usize {
        Self::DIMENSIONS
    }

    /// Instance view of [`LEVEL`](Self::LEVEL).
    fn level(&self) -> u32 {
        Self::LEVEL
    }

    /// Build an element from at most [`DIMENSIONS`](Self::DIMENSIONS)
    /// coefficients, padding missing ones with zeros.
    ///
    /// # Errors
    /// [`AlgebraError::TooManyCoefficients`] when the slice is longer than
    /// the algebra's dimension.
    fn from_coefficients(coefficients: &[Self::Scalar]) -> Result<Self, AlgebraError> {
        if coefficients.len() > Self::DIMENSIONS {
            return Err(AlgebraError::too_many_coefficients(
                coefficients.len(),
                Self::DIMENSIONS,
            ));
        }
        Ok(Self::read_coefficients(coefficients))
    }

    /// Build an element from one of equal or lower level, padding the
    /// missing high-order coefficients with zeros.
    ///
    /// # Errors
    /// [`AlgebraError::TooManyCoefficients`] when `value` comes from a
    /// higher-dimensional algebra.
    fn from_algebra<A>(value: &A) -> Result<Self, AlgebraError>
    where
        A: CayleyDickson<Scalar = Self::Scalar>,
    {
        if A::DIMENSIONS > Self::DIMENSIONS {
            return Err(AlgebraError::too_many_coefficients(
                A::DIMENSIONS,
                Self::DIMENSIONS,
            ));
        }
        Ok(Self::read_coefficients(&value.coefficients()))
    }

    /// The basis vector `e_index`: coefficient `1` at `index`, `0`
    /// elsewhere.
    ///
    /// # Errors
    /// [`AlgebraError::BasisOutOfRange`] when `index >= DIMENSIONS`.
    fn basis(index: usize) -> Result<Self, AlgebraError> {
        if index >= Self::DIMENSIONS {
            return Err(AlgebraError::basis_out_of_range(index, Self::DIMENSIONS));
        }
        let mut coefficients = vec![Self::Scalar::zero(); Self::DIMENSIONS];
        coefficients[index] = Self::Scalar::one();
        Ok(Self::read_coefficients(&coefficients))
    }

    /// A copy of `self` with every coefficient other than `index` zeroed.
    ///
    /// # Errors
    /// [`AlgebraError::BasisOutOfRange`] when `index >= DIMENSIONS`.
    fn value_at(&self, index: usize) -> Result<Self, AlgebraError> {
        if index >= Self::DIMENSIONS {
            return Err(AlgebraError::basis_out_of_range(index, Self::DIMENSIONS));
        }
        let mut coefficients = vec![Self::Scalar::zero(); Self::DIMENSIONS];
        coefficients[index] = self.coefficients()[index];
        Ok(Self::read_coefficients(&coefficients))
    }

    /// Coefficient-wise multiplication by a bare scalar.
    ///
    /// Identical to right-multiplication by `from_real(factor)`, without the
    /// recursive product.
    fn scale(&self, factor: Self::Scalar) -> Self {
        let coefficients: Vec<Self::Scalar> =
            self.coefficients().iter().map(|&c| c * factor).collect();
        Self::read_coefficients(&coefficients)
    }

    /// The squared norm `real(conj(x) * x)`, equal to the sum of squared
    /// coefficients.
    fn squared_norm(&self) -> Self::Scalar {
        (self.conjugate() * self.clone()).real()
    }

    /// The Euclidean norm `sqrt(squared_norm)`.
    fn norm(&self) -> Self::Scalar {
        self.squared_norm().sqrt()
    }

    /// The multiplicative inverse `conj(x) / squared_norm(x)`.
    ///
    /// A zero element yields IEEE NaN coefficients; division by zero is not
    /// trapped.
    fn inverse(&self) -> Self {
        self.conjugate()
            .scale(Self::Scalar::one() / self.squared_norm())
    }

    /// Integer power by repeated multiplication.
    ///
    /// `powi(0)` is `one()`; negative exponents multiply by the inverse.
    fn powi(&self, exponent: i32) -> Self {
        let mut value = Self::one();
        if exponent != 0 {
            let multiplier = if exponent > 0 {
                self.clone()
            } else {
                self.inverse()
            };
            for _ in 0..exponent.unsigned_abs() {
                value = value * multiplier.clone();
            }
        }
        value
    }

    /// Whether every coefficient is zero; the boolean coercion of an
    /// element is `!is_zero()`.
    fn is_zero(&self) -> bool {
        self.coefficients().iter().all(|c| *c == Self::Scalar::zero())
    }
}
