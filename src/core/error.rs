//! Error types for construction, conversion and analysis
//!
//! This module provides `AlgebraError`, the error enum for every fallible
//! operation in the crate. Division by zero is deliberately not represented:
//! it propagates through the base field as IEEE infinities or NaN.

use std::fmt;

/// Errors that can occur while constructing, converting or analyzing
/// hypercomplex elements.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgebraError {
    // Shape errors
    /// A constructor received more coefficients than the algebra holds.
    TooManyCoefficients {
        /// Number of coefficients provided.
        got: usize,
        /// Dimension of the target algebra.
        capacity: usize,
    },
    /// A basis index was outside `0..dimensions`.
    BasisOutOfRange {
        /// The offending index.
        index: usize,
        /// Dimension of the algebra.
        dimensions: usize,
    },

    // Narrowing errors
    /// A conversion to a lower-dimension type would discard non-zero
    /// coefficients.
    NarrowingLoss {
        /// Dimension of the source element.
        dimensions: usize,
        /// Dimension of the requested target.
        target: usize,
    },

    // Bound errors
    /// An operation was requested beyond its supported doubling level.
    UnsupportedLevel {
        /// The requested level.
        level: u32,
        /// The highest supported level for the operation.
        max: u32,
    },

    // Type errors
    /// A name did not resolve to a registered algebra.
    UnknownAlgebra {
        /// The unresolved name.
        name: String,
    },
    /// A rotation layer selector could not be parsed.
    InvalidLayer {
        /// The unparseable selector.
        selector: String,
    },
}

impl AlgebraError {
    // Convenience constructors

    /// Create a shape error for an over-long coefficient sequence.
    pub fn too_many_coefficients(got: usize, capacity: usize) -> Self {
        AlgebraError::TooManyCoefficients { got, capacity }
    }

    /// Create a shape error for an out-of-range basis index.
    pub fn basis_out_of_range(index: usize, dimensions: usize) -> Self {
        AlgebraError::BasisOutOfRange { index, dimensions }
    }

    /// Create a narrowing error.
    pub fn narrowing_loss(dimensions: usize, target: usize) -> Self {
        AlgebraError::NarrowingLoss { dimensions, target }
    }

    /// Create a not-supported error for an out-of-bounds doubling level.
    pub fn unsupported_level(level: u32, max: u32) -> Self {
        AlgebraError::UnsupportedLevel { level, max }
    }

    /// Create a type error for an unknown algebra name.
    pub fn unknown_algebra(name: impl Into<String>) -> Self {
        AlgebraError::UnknownAlgebra { name: name.into() }
    }

    /// Create a type error for an unparseable layer selector.
    pub fn invalid_layer(selector: impl Into<String>) -> Self {
        AlgebraError::InvalidLayer {
            selector: selector.into(),
        }
    }
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::TooManyCoefficients { got, capacity } => {
                write!(
                    f,
                    "Too many coefficients: got {}, expecting at most {}",
                    got, capacity
                )
            }
            AlgebraError::BasisOutOfRange { index, dimensions } => {
                write!(
                    f,
                    "Basis index {} is out of range for a {}-dimensional algebra",
                    index, dimensions
                )
            }
            AlgebraError::NarrowingLoss { dimensions, target } => {
                write!(
                    f,
                    "Cannot narrow a {}-dimensional element to {} dimension(s) \
                     when higher coefficients are non-zero",
                    dimensions, target
                )
            }
            AlgebraError::UnsupportedLevel { level, max } => {
                write!(
                    f,
                    "Doubling level {} is not supported here (maximum is {})",
                    level, max
                )
            }
            AlgebraError::UnknownAlgebra { name } => {
                write!(f, "Unknown algebra name: '{}'", name)
            }
            AlgebraError::InvalidLayer { selector } => {
                write!(f, "Invalid rotation layer selector: '{}'", selector)
            }
        }
    }
}

impl std::error::Error for AlgebraError {}
