//! Norm-based ordering for hypercomplex elements.
//!
//! Elements order by squared norm, which is only a pre-order: two distinct
//! elements can share a magnitude. When norms tie but the elements differ
//! the comparison is `None`, so `<`, `>` and `==` all report false and the
//! `PartialOrd`/`PartialEq` contract holds. NaN coefficients make the norm
//! NaN and the comparison `None`, as in the base field.

use std::cmp::Ordering;

use crate::core::construction::Construction;
use crate::core::real::Real;
use crate::core::traits::{CayleyDickson, Scalar};

fn norm_cmp<A: CayleyDickson>(lhs: &A, rhs: &A) -> Option<Ordering> {
    match lhs.squared_norm().partial_cmp(&rhs.squared_norm()) {
        Some(Ordering::Equal) => (lhs == rhs).then_some(Ordering::Equal),
        ordering => ordering,
    }
}

impl<S: Scalar> PartialOrd for Real<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        norm_cmp(self, other)
    }
}

impl<P: CayleyDickson> PartialOrd for Construction<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        norm_cmp(self, other)
    }
}
