// Universal algebraic laws, checked over exact small-integer coefficients.
//
// Integer coefficients keep sums and products exact in IEEE doubles, so the
// laws that hold mathematically hold bit-for-bit here. The boundary laws
// (associativity, norm multiplicativity, alternativity) are checked on both
// sides: they pass at their highest valid level and have failure witnesses
// one level up in `arithmetic_tests`.

use quickcheck::{TestResult, quickcheck};

use super::element;
use crate::{CayleyDickson, Complex, Octonion, Quaternion, Sedenion, Voudon};

quickcheck! {
    fn prop_addition_commutes(a: Vec<i8>, b: Vec<i8>) -> bool {
        let x: Sedenion = element(&a);
        let y: Sedenion = element(&b);
        x + y == y + x
    }

    fn prop_addition_associates(a: Vec<i8>, b: Vec<i8>, c: Vec<i8>) -> bool {
        let x: Voudon = element(&a);
        let y: Voudon = element(&b);
        let z: Voudon = element(&c);
        (x + y) + z == x + (y + z)
    }

    fn prop_additive_identity(a: Vec<i8>) -> bool {
        let x: Octonion = element(&a);
        x + Octonion::zero() == x
    }

    fn prop_additive_inverse(a: Vec<i8>) -> bool {
        let x: Octonion = element(&a);
        x + (-x) == Octonion::zero()
    }

    fn prop_conjugation_involution(a: Vec<i8>) -> bool {
        let x: Sedenion = element(&a);
        x.conjugate().conjugate() == x
    }

    fn prop_conjugation_additive(a: Vec<i8>, b: Vec<i8>) -> bool {
        let x: Sedenion = element(&a);
        let y: Sedenion = element(&b);
        (x + y).conjugate() == x.conjugate() + y.conjugate()
    }

    fn prop_conjugation_antihomomorphism(a: Vec<i8>, b: Vec<i8>) -> bool {
        let x: Sedenion = element(&a);
        let y: Sedenion = element(&b);
        (x * y).conjugate() == y.conjugate() * x.conjugate()
    }

    fn prop_distributivity(a: Vec<i8>, b: Vec<i8>, c: Vec<i8>) -> bool {
        let x: Sedenion = element(&a);
        let y: Sedenion = element(&b);
        let z: Sedenion = element(&c);
        x * (y + z) == x * y + x * z
    }

    fn prop_norm_multiplicative_octonions(a: Vec<i8>, b: Vec<i8>) -> bool {
        // |x * y| = |x| * |y| holds up to the octonions
        let x: Octonion = element(&a);
        let y: Octonion = element(&b);
        (x * y).squared_norm() == x.squared_norm() * y.squared_norm()
    }

    fn prop_associativity_quaternions(a: Vec<i8>, b: Vec<i8>, c: Vec<i8>) -> bool {
        // Associativity holds up to the quaternions
        let x: Quaternion = element(&a);
        let y: Quaternion = element(&b);
        let z: Quaternion = element(&c);
        (x * y) * z == x * (y * z)
    }

    fn prop_commutativity_complex(a: Vec<i8>, b: Vec<i8>) -> bool {
        // Commutativity holds up to the complex numbers
        let x: Complex = element(&a);
        let y: Complex = element(&b);
        x * y == y * x
    }

    fn prop_alternativity_octonions(a: Vec<i8>, b: Vec<i8>) -> bool {
        // x * (x * y) = (x * x) * y holds up to the octonions
        let x: Octonion = element(&a);
        let y: Octonion = element(&b);
        x * (x * y) == (x * x) * y
    }

    fn prop_squared_norm_is_coefficient_sum(a: Vec<i8>) -> bool {
        let x: Sedenion = element(&a);
        let sum: f64 = x.coefficients().iter().map(|c| c * c).sum();
        x.squared_norm() == sum
    }

    fn prop_inverse_law(a: Vec<i8>) -> TestResult {
        let x: Quaternion = element(&a);
        if x.squared_norm() == 0.0 {
            return TestResult::discard();
        }
        let residue = (x * x.inverse() - Quaternion::one()).norm();
        TestResult::from_bool(residue < 1e-9)
    }

    fn prop_coefficient_round_trip(a: Vec<i8>) -> bool {
        let x: Sedenion = element(&a);
        Sedenion::from_coefficients(&x.coefficients()) == Ok(x)
    }

    fn prop_scale_matches_scalar_product(a: Vec<i8>, s: i8) -> bool {
        // Coefficient scaling agrees with right-multiplication by a real
        let x: Sedenion = element(&a);
        let factor = f64::from(s);
        x.scale(factor) == x * Sedenion::from_real(factor)
    }
}
