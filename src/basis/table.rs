//! Cayley multiplication table builders.
//!
//! The `(i, j)` entry of the table is `e_i * e_j`, rendered either as a
//! signed 1-based index (the heatmap contract) or through the term
//! formatter.

use crate::basis::format::BasisFormat;
use crate::basis::named::{named_index, named_string};
use crate::core::CayleyDickson;

fn basis_vectors<A: CayleyDickson>() -> Vec<A> {
    (0..A::DIMENSIONS)
        .map(|k| A::basis(k).expect("basis index is within the algebra's dimensions"))
        .collect()
}

/// The `d x d` signed-index multiplication table of `A`.
///
/// Entries are non-zero integers in `±(1..=d)`; the sign is the orientation
/// of the resulting basis vector.
///
/// # Example
/// ```
/// use hypercomplex::{Quaternion, multiplication_table_indexes};
/// let table = multiplication_table_indexes::<Quaternion>();
/// assert_eq!(table[1][2], 4); // i * j = k
/// assert_eq!(table[2][1], -4); // j * i = -k
/// ```
pub fn multiplication_table_indexes<A: CayleyDickson>() -> Vec<Vec<isize>> {
    let basis = basis_vectors::<A>();
    basis
        .iter()
        .map(|left| {
            basis
                .iter()
                .map(|right| named_index(&(left.clone() * right.clone())))
                .collect()
        })
        .collect()
}

/// The `d x d` multiplication table of `A` rendered through the term
/// formatter.
pub fn multiplication_table_strings<A: CayleyDickson>(format: &BasisFormat) -> Vec<Vec<String>> {
    let basis = basis_vectors::<A>();
    basis
        .iter()
        .map(|left| {
            basis
                .iter()
                .map(|right| named_string(&(left.clone() * right.clone()), format))
                .collect()
        })
        .collect()
}

/// Render a table of cells as aligned text: right-justified columns joined
/// by single spaces, with the first column flush against the margin.
pub fn table_display(rows: &[Vec<String>]) -> String {
    let width = rows
        .iter()
        .flat_map(|row| row.iter().map(String::len))
        .max()
        .unwrap_or(0);
    let first = rows
        .iter()
        .filter_map(|row| row.first().map(String::len))
        .max()
        .unwrap_or(0);
    let offset = width - first;

    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .map(|cell| format!("{:>width$}", cell))
                .collect::<Vec<_>>()
                .join(" ");
            line.get(offset..).unwrap_or("").to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
