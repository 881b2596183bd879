//! Square roots modulo a rational prime.

use num_bigint::Sign::{Minus, Plus};
use num_bigint::{BigInt, BigUint, IntoBigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Legendre symbol `(a/p)` for an odd prime `p`, computed with Euler's criterion
/// as `a^((p - 1) / 2) mod p`.
///
/// Returns `1` for quadratic residues, `-1` for non-residues and `0` when `p`
/// divides `a`.
pub fn legendre_symbol(a: &BigUint, p: &BigUint) -> i8 {
    let exp = (p - 1u32) >> 1usize;
    let s = a.modpow(&exp, p);

    if s.is_one() {
        1
    } else if s.is_zero() {
        0
    } else {
        -1
    }
}

/// Tonelli-Shanks: finds `r` with `r² ≡ n (mod p)` for a prime `p`.
///
/// Returns `None` when `n` is not a quadratic residue modulo `p`, or when `p`
/// turns out not to be prime.
pub fn tonelli_shanks(n: &BigInt, p: &BigUint) -> Option<BigUint> {
    if p <= &BigUint::one() {
        return None;
    }

    let p_int = BigInt::from_biguint(Plus, p.clone());
    let n = n.mod_floor(&p_int).into_biguint()?;

    // every residue is its own square root modulo 2
    if p == &BigUint::from(2u32) {
        return Some(n);
    }

    if legendre_symbol(&n, p) != 1 {
        return None;
    }

    // p - 1 = q·2^s with q odd
    let p_minus_one = p - 1u32;
    let mut q = p_minus_one.clone();
    let mut s = 0usize;
    while q.is_even() {
        q >>= 1usize;
        s += 1;
    }

    // an even p other than 2 is not prime
    if s == 0 {
        return None;
    }

    if s == 1 {
        let exp = (p + 1u32) >> 2usize;
        return Some(n.modpow(&exp, p));
    }

    // any quadratic non-residue works, take the smallest
    let mut z = BigUint::from(2u32);
    while legendre_symbol(&z, p) != -1 {
        z += 1u32;
        if &z >= p {
            return None;
        }
    }

    let mut c = z.modpow(&q, p);
    let mut r = n.modpow(&((&q + 1u32) >> 1usize), p);
    let mut t = n.modpow(&q, p);
    let mut m = s;

    while !t.is_one() {
        // least i in (0, m) with t^(2^i) = 1
        let mut i = 0;
        let mut t2 = t.clone();
        while !t2.is_one() {
            t2 = (&t2 * &t2) % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let b = c.modpow(&(BigUint::one() << (m - i - 1)), p);
        r = (&r * &b) % p;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        m = i;
    }

    Some(r)
}

/// Finds `r` with `r² ≡ -1 (mod p)`, which exists exactly when `p = 2` or `p ≡ 1 (mod 4)`.
pub fn sqrt_minus_one(p: &BigUint) -> Option<BigUint> {
    tonelli_shanks(&BigInt::from_biguint(Minus, BigUint::one()), p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    use crate::algorithms::generate::decompose_prime;
    use crate::errors::Error;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn is_small_prime(n: u64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_legendre_symbol() {
        let cases = [
            (0, 5, 0),
            (1, 5, 1),
            (2, 5, -1),
            (3, 5, -1),
            (4, 5, 1),
            (10, 13, 1),
            (2, 13, -1),
            (26, 13, 0),
        ];

        for (a, p, want) in cases {
            assert_eq!(legendre_symbol(&big(a), &big(p)), want, "({}/{})", a, p);
        }
    }

    #[test]
    fn test_sqrt_minus_one() {
        for p in (5..5000u64).filter(|p| p % 4 == 1 && is_small_prime(*p)) {
            let r = sqrt_minus_one(&big(p)).unwrap();
            assert!(r < big(p));
            assert!(((&r * &r) + 1u32) % p == BigUint::zero(), "p = {}, r = {}", p, r);
        }
    }

    #[test]
    fn test_sqrt_minus_one_known() {
        // p - 1 = 2^16, the longest order-reduction loop for this size
        assert_eq!(sqrt_minus_one(&big(65537)), Some(big(256)));
        assert_eq!(sqrt_minus_one(&big(4294967197)), Some(big(983270775)));
        assert_eq!(sqrt_minus_one(&big(5)), Some(big(3)));
        assert_eq!(sqrt_minus_one(&big(2)), Some(big(1)));
    }

    #[test]
    fn test_no_solution() {
        for p in [3u64, 7, 11, 19, 65519] {
            assert_eq!(sqrt_minus_one(&big(p)), None, "p = {}", p);
        }
        assert_eq!(tonelli_shanks(&BigInt::from(2), &big(13)), None);
        assert_eq!(tonelli_shanks(&BigInt::from(5), &big(1)), None);
        assert_eq!(tonelli_shanks(&BigInt::from(5), &big(0)), None);

        // even composite moduli
        for p in [4u64, 6, 10, 1 << 20] {
            assert_eq!(tonelli_shanks(&BigInt::from(5), &big(p)), None, "p = {}", p);
            assert_eq!(sqrt_minus_one(&big(p)), None, "p = {}", p);
            assert_eq!(decompose_prime(&big(p)), Err(Error::NonResidue), "p = {}", p);
        }
    }

    #[test]
    fn test_tonelli_shanks_general() {
        for p in [13u64, 17, 41, 97, 193, 65537] {
            for n in 1..p.min(200) {
                let n_int = BigInt::from(n);
                match tonelli_shanks(&n_int, &big(p)) {
                    Some(r) => {
                        assert_eq!(((&r * &r) % p).to_u64(), Some(n % p), "sqrt({}) mod {}", n, p)
                    }
                    None => assert_eq!(legendre_symbol(&big(n), &big(p)), -1),
                }
            }
        }

        // negative inputs are reduced first: -4 ≡ 9 (mod 13)
        let r = tonelli_shanks(&BigInt::from(-4), &big(13)).unwrap();
        assert_eq!((&r * &r) % 13u32, big(9));
    }
}
