//! Core types for hypercomplex arithmetic
//!
//! This module contains the fundamental types:
//! - `Scalar` - Capability set required of the base field
//! - `CayleyDickson` - Capability set shared by every doubling level
//! - `Real` - The level-0 base-field adapter
//! - `Construction` - The doubling constructor
//! - `AlgebraError` - Error types
//! - Norm-based ordering and narrowing conversions

mod arithmetic; // Operator implementations for Real and Construction
mod construction; // The doubling constructor
mod convert; // Narrowing conversions
pub(crate) mod error; // Error types (AlgebraError)
mod ordering; // Norm-based pre-order
mod real; // Level-0 base-field adapter
pub(crate) mod traits; // Scalar and CayleyDickson capability traits

// Public re-exports (for external API)
pub use construction::Construction;
pub use convert::{try_complex_pair, try_narrow, try_real};
pub use error::AlgebraError;
pub use real::Real;
pub use traits::{CayleyDickson, Scalar};
