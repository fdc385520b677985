//! Signed basis members and the group table.
//!
//! The signed basis set of a `d`-dimensional algebra has `N = 2d` members:
//! `e_0 .. e_{d-1}` at indexes `0..d` and their negations at `d..2d`. The
//! group table records, for every ordered pair, the signed index of their
//! product: a signed permutation group of order `2 * 2^n` acting on the
//! basis.

use num_traits::Zero;

use crate::basis::leading_term;
use crate::core::CayleyDickson;

/// The `2d` signed basis elements of `A`, positives first.
pub fn signed_members<A: CayleyDickson>() -> Vec<A> {
    let dimensions = A::DIMENSIONS;
    let mut members: Vec<A> = (0..dimensions)
        .map(|k| A::basis(k).expect("basis index is within the algebra's dimensions"))
        .collect();
    let negatives: Vec<A> = members.iter().map(|member| -member.clone()).collect();
    members.extend(negatives);
    members
}

/// The canonical signed index of a pure signed basis element: the position
/// `k` of its unique non-zero coefficient, shifted by `d` when the
/// coefficient is negative. The zero element maps to `0`.
pub fn signed_index<A: CayleyDickson>(value: &A) -> usize {
    match leading_term(value) {
        None => 0,
        Some((index, coefficient)) => {
            if coefficient < A::Scalar::zero() {
                index + A::DIMENSIONS
            } else {
                index
            }
        }
    }
}

/// The `N x N` group table: entry `(p, q)` is the signed index of the
/// product of the `p`-th and `q`-th signed basis members.
///
/// Rebuilt on every call; the analyzer keeps no state.
pub fn group_table<A: CayleyDickson>() -> Vec<Vec<usize>> {
    let members = signed_members::<A>();
    members
        .iter()
        .map(|p| {
            members
                .iter()
                .map(|q| signed_index(&(p.clone() * q.clone())))
                .collect()
        })
        .collect()
}
