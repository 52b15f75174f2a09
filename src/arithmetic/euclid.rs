//! Extended Euclidean algorithm and modular inverses.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Runs the extended Euclidean algorithm on `a` and `b`.
///
/// Returns `(gcd, x, y)` satisfying `a·x + b·y = gcd`. The reduction is
/// iterative: each step divides `a` by `b` and rotates the Bézout
/// coefficient pairs `(x2, x1)` and `(y2, y1)` by `x = x2 − q·x1`,
/// `y = y2 − q·y1`. Callers pass a non-negative `b` (here always a curve
/// modulus or group order).
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut a, mut b) = (a.clone(), b.clone());
    let (mut x2, mut x1) = (BigInt::one(), BigInt::zero());
    let (mut y2, mut y1) = (BigInt::zero(), BigInt::one());

    while !b.is_zero() {
        let (q, r) = a.div_mod_floor(&b);
        let x = &x2 - &q * &x1;
        let y = &y2 - &q * &y1;
        x2 = x1;
        x1 = x;
        y2 = y1;
        y1 = y;
        a = core::mem::replace(&mut b, r);
    }

    (a, x2, y2)
}

/// Computes the inverse of `value` modulo `modulus`.
///
/// `value` is canonicalized into `[0, modulus)` first, so chord and
/// tangent denominators may be passed without prior reduction. Returns
/// [`Error::NotInvertible`] when `value` and `modulus` are not coprime;
/// with a prime modulus that can only happen for a zero residue, which
/// callers rule out before dividing.
pub fn mod_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    let value = value.mod_floor(modulus);
    let (gcd, coefficient, _) = extended_gcd(&value, modulus);

    if !gcd.is_one() {
        return Err(Error::NotInvertible);
    }

    Ok(coefficient.mod_floor(modulus))
}

#[cfg(test)]
mod tests {
    use super::{extended_gcd, mod_inverse};
    use crate::Error;
    use hex_literal::hex;
    use num_bigint::{BigInt, Sign};
    use num_integer::Integer;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    /// Group order of the RFC 4357 test parameter set.
    const ORDER: [u8; 32] =
        hex!("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3");

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn gcd_and_bezout_coefficients() {
        let (gcd, x, y) = extended_gcd(&int(240), &int(46));
        assert_eq!(gcd, int(2));
        assert_eq!(int(240) * x + int(46) * y, int(2));
    }

    #[test]
    fn gcd_with_zero() {
        let (gcd, x, _) = extended_gcd(&int(17), &int(0));
        assert_eq!(gcd, int(17));
        assert_eq!(x, int(1));
    }

    #[test]
    fn inverse_of_one_is_one() {
        let modulus = BigInt::from_bytes_be(Sign::Plus, &ORDER);
        assert_eq!(mod_inverse(&BigInt::one(), &modulus).unwrap(), BigInt::one());
    }

    #[test]
    fn inverse_accepts_unreduced_and_negative_values() {
        let modulus = int(17);
        // -5 ≡ 12 (mod 17), and 12·10 = 120 ≡ 1 (mod 17)
        let inverse = mod_inverse(&int(-5), &modulus).unwrap();
        assert_eq!((int(12) * &inverse).mod_floor(&modulus), BigInt::one());
    }

    #[test]
    fn non_coprime_value_is_rejected() {
        assert_eq!(mod_inverse(&int(6), &int(9)), Err(Error::NotInvertible));
        assert_eq!(mod_inverse(&int(0), &int(9)), Err(Error::NotInvertible));
    }

    prop_compose! {
        fn scalar()(bytes in any::<[u8; 32]>()) -> BigInt {
            BigInt::from_bytes_be(Sign::Plus, &bytes)
        }
    }

    proptest! {
        #[test]
        fn bezout_identity(a in scalar(), b in scalar()) {
            let (gcd, x, y) = extended_gcd(&a, &b);
            prop_assert_eq!(&a * x + &b * y, gcd);
        }

        #[test]
        fn inverse_roundtrip(value in scalar()) {
            let modulus = BigInt::from_bytes_be(Sign::Plus, &ORDER);
            let value = value.mod_floor(&modulus);
            prop_assume!(!value.is_zero());

            let inverse = mod_inverse(&value, &modulus).unwrap();
            prop_assert_eq!((value * inverse).mod_floor(&modulus), BigInt::one());
        }
    }
}
