//! Single-term naming: the shared formatter behind every table surface.
//!
//! A term is identified by its first non-zero coefficient. The sign comes
//! from that coefficient, the magnitude is omitted when it equals one, and
//! the basis position renders either symbolically (`e3`) or as a translated
//! letter (`k`).


use num_traits::Zero;

use crate::basis::format::BasisFormat;
use crate::core::{CayleyDickson, Scalar};

/// The first non-zero coefficient of `value` with its position, or `None`
/// for the zero element.
pub(crate) fn leading_term<A: CayleyDickson>(value: &A) -> Option<(usize, A::Scalar)> {
    value
        .coefficients()
        .into_iter()
        .enumerate()
        .find(|(_, coefficient)| *coefficient != A::Scalar::zero())
}

/// The signed 1-based basis index of `value`: `k + 1` when the leading
/// coefficient sits at position `k` and is positive, negated when it is
/// negative, `0` for the zero element.
///
/// This is the `asindex` cell format of the multiplication table, the
/// heatmap renderer contract.
pub fn named_index<A: CayleyDickson>(value: &A) -> isize {
    match leading_term(value) {
        None => 0,
        Some((index, coefficient)) => {
            let signed = (index + 1) as isize;
            if coefficient < A::Scalar::zero() {
                -signed
            } else {
                signed
            }
        }
    }
}

/// Format a single term at a known basis position.
///
/// Shared by element naming, hadamard components and rotation labels; a
/// zero `value` renders `"0"`.
pub(crate) fn term_string<S: Scalar>(
    dimensions: usize,
    index: usize,
    value: S,
    format: &BasisFormat,
) -> String {
    if value == S::zero() {
        return "0".to_owned();
    }

    let sign = if value < S::zero() {
        "-"
    } else if format.show_plus {
        "+"
    } else {
        ""
    };

    let magnitude = value.abs();
    let magnitude = if magnitude == S::one() {
        String::new()
    } else {
        format!("{}", magnitude)
    };

    if format.translate && dimensions <= format.indices.len() {
        if index == 0 {
            // The unit renders as a bare (signed) magnitude
            let magnitude = if magnitude.is_empty() {
                "1".to_owned()
            } else {
                magnitude
            };
            format!("{}{}", sign, magnitude)
        } else {
            format!("{}{}{}", sign, magnitude, format.indices[index])
        }
    } else {
        format!("{}{}{}{}", sign, magnitude, format.element, index)
    }
}

/// Render `value` as a single named term: `"0"` for the zero element,
/// otherwise the term of the first non-zero coefficient.
///
/// # Example
/// ```
/// use hypercomplex::{BasisFormat, CayleyDickson, Quaternion, named_string};
/// let k = Quaternion::<f64>::basis(3).unwrap();
/// assert_eq!(named_string(&k, &BasisFormat::new()), "e3");
/// assert_eq!(named_string(&k, &BasisFormat::new().translate(true)), "k");
/// ```
pub fn named_string<A: CayleyDickson>(value: &A, format: &BasisFormat) -> String {
    match leading_term(value) {
        None => "0".to_owned(),
        Some((index, coefficient)) => {
            term_string::<A::Scalar>(A::DIMENSIONS, index, coefficient, format)
        }
    }
}

/// Label for a signed basis index in `0..2d`: indexes at or beyond
/// `dimensions` denote the negated basis vector.
///
/// Used for the rotation diagram's vertex labels.
pub fn basis_label(dimensions: usize, signed_index: usize, format: &BasisFormat) -> String {
    let negative = signed_index >= dimensions;
    let index = if negative {
        signed_index - dimensions
    } else {
        signed_index
    };
    let unit = if negative { -1.0_f64 } else { 1.0_f64 };
    term_string(dimensions, index, unit, format)
}
