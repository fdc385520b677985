// Display formatting for hypercomplex elements
use std::fmt;

use crate::basis::{BasisFormat, named_string};
use crate::core::{CayleyDickson, Construction, Real, Scalar};

fn write_coefficients<A: CayleyDickson>(value: &A, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "(")?;
    for (position, coefficient) in value.coefficients().iter().enumerate() {
        if position > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", coefficient)?;
    }
    write!(f, ")")
}

impl<S: Scalar> fmt::Display for Real<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coefficients(self, f)
    }
}

impl<P: CayleyDickson> fmt::Display for Construction<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coefficients(self, f)
    }
}

/// Render an element as a sum of named terms, one per basis position.
///
/// Zero coefficients render as `0` terms, matching the coefficient count:
///
/// ```
/// use hypercomplex::{BasisFormat, CayleyDickson, Quaternion, terms_string};
/// let q = Quaternion::<f64>::from_coefficients(&[1.0, 0.0, 2.0, -3.0]).unwrap();
/// let format = BasisFormat::new().translate(true);
/// assert_eq!(terms_string(&q, &format), "1 + 0 + 2j - 3k");
/// ```
pub fn terms_string<A: CayleyDickson>(value: &A, format: &BasisFormat) -> String {
    let terms: Vec<String> = (0..A::DIMENSIONS)
        .map(|index| {
            let term = value
                .value_at(index)
                .expect("index is within the algebra's dimensions");
            named_string(&term, format)
        })
        .collect();

    let mut result = String::new();
    for (position, term) in terms.iter().enumerate() {
        if position == 0 {
            result.push_str(term);
        } else if let Some(rest) = term.strip_prefix('-') {
            result.push_str(" - ");
            result.push_str(rest);
        } else if let Some(rest) = term.strip_prefix('+') {
            result.push_str(" + ");
            result.push_str(rest);
        } else {
            result.push_str(" + ");
            result.push_str(term);
        }
    }
    result
}
