//! Operator overloading for Real and Construction.
//!
//! Contains the `Add`, `Sub`, `Mul`, `Div`, `Neg` implementations: the
//! level-0 delegation to the base field, the canonical doubling formulas,
//! the bare-scalar mixed-mode variants, and reference forwarding.
//!
//! The product is fixed as
//! `(a, b) * (c, d) = (a*c - conj(d)*b, d*a + b*conj(c))`
//! with conjugation on the right operand of the second term. Swapping the
//! conjugation yields a non-equivalent algebra from level 2 upward.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::core::construction::Construction;
use crate::core::real::Real;
use crate::core::traits::{CayleyDickson, Scalar};

// ============================================================================
// Level 0: delegate to the base field
// ============================================================================

impl<S: Scalar> Add for Real<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Real::new(self.value() + rhs.value())
    }
}

impl<S: Scalar> Sub for Real<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Real::new(self.value() - rhs.value())
    }
}

impl<S: Scalar> Mul for Real<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Real::new(self.value() * rhs.value())
    }
}

impl<S: Scalar> Div for Real<S> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Real::new(self.value() / rhs.value())
    }
}

impl<S: Scalar> Neg for Real<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Real::new(-self.value())
    }
}

// ============================================================================
// Doubled levels: pairwise sums, canonical product
// ============================================================================

impl<P: CayleyDickson> Add for Construction<P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Construction::pair(self.a + rhs.a, self.b + rhs.b)
    }
}

impl<P: CayleyDickson> Sub for Construction<P> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Construction::pair(self.a - rhs.a, self.b - rhs.b)
    }
}

impl<P: CayleyDickson> Mul for Construction<P> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = self.into_pair();
        let (c, d) = rhs.into_pair();
        Construction::pair(
            a.clone() * c.clone() - d.conjugate() * b.clone(),
            d * a + b * c.conjugate(),
        )
    }
}

impl<P: CayleyDickson> Div for Construction<P> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<P: CayleyDickson> Neg for Construction<P> {
    type Output = Self;
    fn neg(self) -> Self {
        Construction::pair(-self.a, -self.b)
    }
}

// ============================================================================
// Bare-scalar mixed mode (f64 base)
// ============================================================================

impl<P: CayleyDickson<Scalar = f64>> Add<f64> for Construction<P> {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        self + Self::from_real(rhs)
    }
}

impl<P: CayleyDickson<Scalar = f64>> Sub<f64> for Construction<P> {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        self - Self::from_real(rhs)
    }
}

impl<P: CayleyDickson<Scalar = f64>> Mul<f64> for Construction<P> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl<P: CayleyDickson<Scalar = f64>> Div<f64> for Construction<P> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.scale(1.0 / rhs)
    }
}

impl Add<f64> for Real<f64> {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Real::new(self.value() + rhs)
    }
}

impl Sub<f64> for Real<f64> {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Real::new(self.value() - rhs)
    }
}

impl Mul<f64> for Real<f64> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Real::new(self.value() * rhs)
    }
}

impl Div<f64> for Real<f64> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Real::new(self.value() / rhs)
    }
}

// ============================================================================
// Reference forwarding
// ============================================================================

// &x op &y for the Copy level-0 adapter derefs straight to the value impls.
macro_rules! forward_real_ref_ops {
    ($($imp:ident :: $method:ident),*) => {
        $(
            impl<S: Scalar> $imp<&Real<S>> for &Real<S> {
                type Output = Real<S>;
                fn $method(self, rhs: &Real<S>) -> Real<S> {
                    $imp::$method(*self, *rhs)
                }
            }
        )*
    };
}

forward_real_ref_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

impl<S: Scalar> Neg for &Real<S> {
    type Output = Real<S>;
    fn neg(self) -> Real<S> {
        -*self
    }
}

// &x op &y clones through to the value impls so callers can keep operands.
macro_rules! forward_ref_ops {
    ($type_:ident, $param:ident, $bound:ident) => {
        impl<$param: $bound> Add<&$type_<$param>> for &$type_<$param> {
            type Output = $type_<$param>;
            fn add(self, rhs: &$type_<$param>) -> $type_<$param> {
                self.clone() + rhs.clone()
            }
        }

        impl<$param: $bound> Sub<&$type_<$param>> for &$type_<$param> {
            type Output = $type_<$param>;
            fn sub(self, rhs: &$type_<$param>) -> $type_<$param> {
                self.clone() - rhs.clone()
            }
        }

        impl<$param: $bound> Mul<&$type_<$param>> for &$type_<$param> {
            type Output = $type_<$param>;
            fn mul(self, rhs: &$type_<$param>) -> $type_<$param> {
                self.clone() * rhs.clone()
            }
        }

        impl<$param: $bound> Div<&$type_<$param>> for &$type_<$param> {
            type Output = $type_<$param>;
            fn div(self, rhs: &$type_<$param>) -> $type_<$param> {
                self.clone() / rhs.clone()
            }
        }

        impl<$param: $bound> Neg for &$type_<$param> {
            type Output = $type_<$param>;
            fn neg(self) -> $type_<$param> {
                -self.clone()
            }
        }
    };
}

forward_ref_ops!(Construction, P, CayleyDickson);
