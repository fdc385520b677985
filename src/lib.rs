#![forbid(unsafe_code)]
//! Cayley-Dickson Hypercomplex Numbers
//!
//! A Rust library for the Cayley-Dickson construction: starting from a real
//! base field, each doubling level produces the next hypercomplex algebra:
//! complex numbers (2D), quaternions (4D), octonions (8D), sedenions (16D),
//! pathions (32D), chingons (64D), routons (128D) and voudons (256D).
//!
//! # Features
//! - One generic doubling type, monomorphized per level
//! - Full arithmetic: `+ - * /`, conjugation, norms, inverses, integer powers
//! - Basis introspection: named basis terms, Cayley multiplication tables
//! - Inner, outer and Hadamard products
//! - Basis-rotation analysis (signed permutation group, loops, layout export)
//! - Optional memoization of multiplication and division
//!
//! # Usage Examples
//!
//! ## Quaternion arithmetic
//! ```
//! use hypercomplex::{CayleyDickson, Quaternion};
//! let i = Quaternion::<f64>::basis(1).unwrap();
//! let j = Quaternion::<f64>::basis(2).unwrap();
//! let k = i * j;
//! assert_eq!(k, Quaternion::<f64>::basis(3).unwrap());
//! ```
//!
//! ## Multiplication tables
//! ```
//! use hypercomplex::{Complex, multiplication_table_indexes};
//! let table = multiplication_table_indexes::<Complex>();
//! assert_eq!(table, vec![vec![1, 2], vec![2, -1]]);
//! ```

// Module structure
mod basis; // Basis naming, translation tables, Cayley tables
mod core; // Core types: Scalar, CayleyDickson, Real, Construction, errors
mod display; // Display implementations and term rendering
pub mod memo; // Optional memoization of binary operations
mod products; // Inner, outer and Hadamard products
mod registry; // Algebra registry: level/name lookup and level dispatch
mod rotation; // Basis rotation analyzer

#[cfg(test)]
mod tests;

// Re-export core types
pub use crate::core::{AlgebraError, CayleyDickson, Construction, Real, Scalar};
pub use crate::core::{try_complex_pair, try_narrow, try_real};

// Re-export the basis introspection surface
pub use basis::{
    BasisFormat, TRANSLATIONS, basis_label, multiplication_table_indexes,
    multiplication_table_strings, named_index, named_string, table_display,
};

// Re-export products
pub use products::{hadamard_product, hadamard_strings, inner_product, outer_product_strings};

// Re-export the rotation analyzer
pub use rotation::{
    RotationDiagram, RotationEdge, RotationLayer, RotationOptions, RotationVertex, analyze,
    edge_matrix, group_table, signed_index, signed_members,
};

// Re-export the registry
pub use registry::{AlgebraDescriptor, MAX_LEVEL, by_level, by_name, descriptors};

// Re-export element rendering
pub use display::terms_string;

/// Maximum doubling level supported by the rotation analyzer (32 dimensions).
pub const MAX_ROTATION_LEVEL: u32 = 5;

/// Complex numbers: doubling level 1, two coefficients.
pub type Complex<S = f64> = Construction<Real<S>>;
/// Quaternions: doubling level 2, four coefficients.
pub type Quaternion<S = f64> = Construction<Complex<S>>;
/// Octonions: doubling level 3, eight coefficients.
pub type Octonion<S = f64> = Construction<Quaternion<S>>;
/// Sedenions: doubling level 4, sixteen coefficients.
pub type Sedenion<S = f64> = Construction<Octonion<S>>;
/// Pathions: doubling level 5, thirty-two coefficients.
pub type Pathion<S = f64> = Construction<Sedenion<S>>;
/// Chingons: doubling level 6, sixty-four coefficients.
pub type Chingon<S = f64> = Construction<Pathion<S>>;
/// Routons: doubling level 7, one hundred twenty-eight coefficients.
pub type Routon<S = f64> = Construction<Chingon<S>>;
/// Voudons: doubling level 8, two hundred fifty-six coefficients.
pub type Voudon<S = f64> = Construction<Routon<S>>;

/// The signed-index Cayley multiplication table of the algebra at `level`.
///
/// The `(i, j)` entry is the signed 1-based basis index of `e_i * e_j`,
/// i.e. an integer in `±(1..=d)` where `d = 2^level`. This is the input the
/// heatmap renderer consumes.
///
/// # Errors
/// [`AlgebraError::UnsupportedLevel`] when `level` exceeds [`MAX_LEVEL`].
///
/// # Example
/// ```
/// let table = hypercomplex::multiplication_table(1).unwrap();
/// assert_eq!(table, vec![vec![1, 2], vec![2, -1]]);
/// ```
pub fn multiplication_table(level: u32) -> Result<Vec<Vec<isize>>, AlgebraError> {
    registry::table_for_level(level)
}

/// The multiplication table at `level` rendered as aligned text through the
/// term formatter, the text an order-driven front-end prints.
///
/// # Errors
/// [`AlgebraError::UnsupportedLevel`] when `level` exceeds [`MAX_LEVEL`].
///
/// # Example
/// ```
/// use hypercomplex::{BasisFormat, multiplication_table_display};
/// let text = multiplication_table_display(1, &BasisFormat::new().translate(true)).unwrap();
/// assert_eq!(text, "1  i\ni -1");
/// ```
pub fn multiplication_table_display(
    level: u32,
    format: &BasisFormat,
) -> Result<String, AlgebraError> {
    let rows = registry::table_strings_for_level(level, format)?;
    Ok(table_display(&rows))
}

/// The rotation diagram of the algebra at `level` with default options.
///
/// Convenience wrapper over [`analyze`] for order-driven front-ends; see
/// [`RotationOptions`] for the full option surface.
///
/// # Errors
/// [`AlgebraError::UnsupportedLevel`] when `level` exceeds
/// [`MAX_ROTATION_LEVEL`].
pub fn rotation_diagram(level: u32) -> Result<RotationDiagram, AlgebraError> {
    registry::rotation_for_level(level, &RotationOptions::new())
}
