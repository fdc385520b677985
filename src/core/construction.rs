//! The doubling constructor.
//!
//! `Construction<P>` turns a parent algebra of dimension `d` into the child
//! algebra of dimension `2d` by forming ordered pairs `(a, b)` of parent
//! elements. Applying it repeatedly to [`Real`](crate::Real) yields the
//! whole named family: `Construction<Real<S>>` is `Complex<S>`,
//! `Construction<Complex<S>>` is `Quaternion<S>`, and so on up to
//! `Voudon<S>` at level 8.

use crate::core::traits::CayleyDickson;

/// One Cayley-Dickson doubling of the parent algebra `P`.
///
/// An element is the ordered pair `(a, b)`; its flat coefficient vector is
/// `a`'s coefficients followed by `b`'s. The arithmetic (defined in terms
/// of `P`'s arithmetic) lives on the operator impls; see the crate-level
/// docs for the product formula.
///
/// # Example
/// ```
/// use hypercomplex::{CayleyDickson, Complex};
/// let z = Complex::<f64>::from_coefficients(&[3.0, 4.0]).unwrap();
/// assert_eq!(z.norm(), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Construction<P> {
    pub(crate) a: P,
    pub(crate) b: P,
}

impl<P: CayleyDickson> Construction<P> {
    /// Build an element from its two parent-level halves, the recursive
    /// primitive every other factory reduces to.
    pub fn pair(a: P, b: P) -> Self {
        Construction { a, b }
    }

    /// The first half of the pair (carries the real part).
    pub fn a(&self) -> &P {
        &self.a
    }

    /// The second half of the pair.
    pub fn b(&self) -> &P {
        &self.b
    }

    /// Consume the element into its two halves.
    pub fn into_pair(self) -> (P, P) {
        (self.a, self.b)
    }
}

impl<P: CayleyDickson> CayleyDickson for Construction<P> {
    type Scalar = P::Scalar;

    const DIMENSIONS: usize = 2 * P::DIMENSIONS;
    const LEVEL: u32 = P::LEVEL + 1;

    fn from_real(value: P::Scalar) -> Self {
        Construction::pair(P::from_real(value), P::zero())
    }

    fn conjugate(&self) -> Self {
        Construction::pair(self.a.conjugate(), -self.b.clone())
    }

    fn real(&self) -> P::Scalar {
        self.a.real()
    }

    fn write_coefficients(&self, out: &mut Vec<P::Scalar>) {
        self.a.write_coefficients(out);
        self.b.write_coefficients(out);
    }

    fn read_coefficients(coefficients: &[P::Scalar]) -> Self {
        let split = P::DIMENSIONS.min(coefficients.len());
        Construction::pair(
            P::read_coefficients(&coefficients[..split]),
            P::read_coefficients(&coefficients[split..]),
        )
    }
}

impl<P: CayleyDickson + Default> Default for Construction<P> {
    fn default() -> Self {
        Construction::pair(P::default(), P::default())
    }
}
