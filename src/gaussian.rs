//! Arithmetic in the ring of Gaussian integers Z\[i\].

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint, IntoBigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::errors::{Error, Result};
use crate::math;

/// A Gaussian integer `re + im·i` with arbitrary-precision components.
///
/// Values are never normalized: `-1 + 2i` and `2 + i` are distinct values even
/// though they are associates in Z\[i\].
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaussianInt {
    re: BigInt,
    im: BigInt,
}

impl GaussianInt {
    /// Creates `re + im·i`.
    pub fn new(re: impl Into<BigInt>, im: impl Into<BigInt>) -> Self {
        GaussianInt {
            re: re.into(),
            im: im.into(),
        }
    }

    /// The imaginary unit `i`.
    pub fn i() -> Self {
        GaussianInt {
            re: BigInt::zero(),
            im: BigInt::one(),
        }
    }

    /// Returns the real component.
    pub fn re(&self) -> &BigInt {
        &self.re
    }

    /// Returns the imaginary component.
    pub fn im(&self) -> &BigInt {
        &self.im
    }

    /// Returns the complex conjugate `re - im·i`.
    pub fn conj(&self) -> Self {
        GaussianInt {
            re: self.re.clone(),
            im: -&self.im,
        }
    }

    /// Returns the norm `re² + im²`, which is multiplicative and zero only for zero.
    pub fn norm(&self) -> BigUint {
        let norm = &self.re * &self.re + &self.im * &self.im;
        // a sum of squares is never negative
        norm.into_biguint().unwrap_or_default()
    }

    /// Returns true for the units `1, -1, i, -i`.
    pub fn is_unit(&self) -> bool {
        self.norm().is_one()
    }

    /// Euclidean division in Z\[i\].
    ///
    /// Returns `(q, r)` with `self = divisor·q + r` and `N(r) <= N(divisor) / 2`.
    /// The quotient is `self·conj(divisor) / N(divisor)` with each component
    /// rounded to the nearest integer, ties rounding up. Rounding is done in
    /// integer arithmetic only, so the result is exact at any magnitude.
    ///
    /// Because the quotient is a rounding of the exact rational quotient, two
    /// dividends congruent modulo `divisor` always produce the same remainder.
    pub fn div_rem(&self, divisor: &GaussianInt) -> Result<(GaussianInt, GaussianInt)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let denom = BigInt::from_biguint(Plus, divisor.norm());
        let num = self * &divisor.conj();
        let quotient = GaussianInt {
            re: round_div(&num.re, &denom),
            im: round_div(&num.im, &denom),
        };
        let remainder = self - &(divisor * &quotient);

        Ok((quotient, remainder))
    }

    /// Returns the remainder of [`div_rem`](Self::div_rem).
    pub fn checked_rem(&self, modulus: &GaussianInt) -> Result<GaussianInt> {
        self.div_rem(modulus).map(|(_, r)| r)
    }

    /// Returns `self^exp mod modulus`.
    pub fn mod_pow(&self, exp: &BigUint, modulus: &GaussianInt) -> Result<GaussianInt> {
        math::mod_pow(self, exp, modulus)
    }

    /// Returns the inverse of `self` modulo `modulus`.
    pub fn mod_inverse(&self, modulus: &GaussianInt) -> Result<GaussianInt> {
        math::mod_inverse(self, modulus)
    }
}

/// Rounds `n / d` to the nearest integer as `floor((2n + d) / 2d)`, `d > 0`.
fn round_div(n: &BigInt, d: &BigInt) -> BigInt {
    let two_d: BigInt = d << 1usize;
    (&(n << 1usize) + d).div_floor(&two_d)
}

impl Zero for GaussianInt {
    fn zero() -> Self {
        GaussianInt {
            re: BigInt::zero(),
            im: BigInt::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl One for GaussianInt {
    fn one() -> Self {
        GaussianInt {
            re: BigInt::one(),
            im: BigInt::zero(),
        }
    }
}

impl<'a, 'b> Add<&'b GaussianInt> for &'a GaussianInt {
    type Output = GaussianInt;

    fn add(self, other: &GaussianInt) -> GaussianInt {
        GaussianInt {
            re: &self.re + &other.re,
            im: &self.im + &other.im,
        }
    }
}

impl<'a, 'b> Sub<&'b GaussianInt> for &'a GaussianInt {
    type Output = GaussianInt;

    fn sub(self, other: &GaussianInt) -> GaussianInt {
        GaussianInt {
            re: &self.re - &other.re,
            im: &self.im - &other.im,
        }
    }
}

impl<'a, 'b> Mul<&'b GaussianInt> for &'a GaussianInt {
    type Output = GaussianInt;

    fn mul(self, other: &GaussianInt) -> GaussianInt {
        GaussianInt {
            re: &self.re * &other.re - &self.im * &other.im,
            im: &self.re * &other.im + &self.im * &other.re,
        }
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<GaussianInt> for GaussianInt {
            type Output = GaussianInt;

            #[inline]
            fn $method(self, other: GaussianInt) -> GaussianInt {
                (&self).$method(&other)
            }
        }

        impl<'a> $imp<&'a GaussianInt> for GaussianInt {
            type Output = GaussianInt;

            #[inline]
            fn $method(self, other: &GaussianInt) -> GaussianInt {
                (&self).$method(other)
            }
        }

        impl<'a> $imp<GaussianInt> for &'a GaussianInt {
            type Output = GaussianInt;

            #[inline]
            fn $method(self, other: GaussianInt) -> GaussianInt {
                self.$method(&other)
            }
        }
    };
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_binop!(impl Mul, mul);

impl<'a> Neg for &'a GaussianInt {
    type Output = GaussianInt;

    fn neg(self) -> GaussianInt {
        GaussianInt {
            re: -&self.re,
            im: -&self.im,
        }
    }
}

impl Neg for GaussianInt {
    type Output = GaussianInt;

    fn neg(self) -> GaussianInt {
        -&self
    }
}

impl From<BigInt> for GaussianInt {
    fn from(re: BigInt) -> Self {
        GaussianInt {
            re,
            im: BigInt::zero(),
        }
    }
}

impl From<BigUint> for GaussianInt {
    fn from(re: BigUint) -> Self {
        BigInt::from_biguint(Plus, re).into()
    }
}

impl From<i64> for GaussianInt {
    fn from(re: i64) -> Self {
        BigInt::from(re).into()
    }
}

impl From<u64> for GaussianInt {
    fn from(re: u64) -> Self {
        BigInt::from(re).into()
    }
}

/// A rational integer `n` compares equal to `n + 0i`.
impl PartialEq<BigInt> for GaussianInt {
    fn eq(&self, other: &BigInt) -> bool {
        self.im.is_zero() && &self.re == other
    }
}

impl PartialEq<i64> for GaussianInt {
    fn eq(&self, other: &i64) -> bool {
        *self == BigInt::from(*other)
    }
}

/// Renders as `re + im i` or `re - |im|i`.
impl fmt::Display for GaussianInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_negative() {
            write!(f, "{} - {}i", self.re, self.im.abs())
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

impl Zeroize for GaussianInt {
    fn zeroize(&mut self) {
        self.re.zeroize();
        self.im.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn g(re: i64, im: i64) -> GaussianInt {
        GaussianInt::new(re, im)
    }

    #[test]
    fn test_arithmetic() {
        let a = g(3, -4);
        let b = g(-2, 7);

        assert_eq!(&a + &b, g(1, 3));
        assert_eq!(&a - &b, g(5, -11));
        // (3 - 4i)(-2 + 7i) = -6 + 21i + 8i + 28
        assert_eq!(&a * &b, g(22, 29));
        assert_eq!(-a.clone(), g(-3, 4));
        assert_eq!(a.conj(), g(3, 4));
        assert_eq!(GaussianInt::i() * GaussianInt::i(), g(-1, 0));
    }

    #[test]
    fn test_norm() {
        assert_eq!(g(3, 4).norm(), BigUint::from(25u32));
        assert_eq!(g(-3, -4).norm(), BigUint::from(25u32));
        assert!(GaussianInt::zero().norm().is_zero());
        assert_eq!((g(2, 1) * g(3, -5)).norm(), g(2, 1).norm() * g(3, -5).norm());

        for unit in [g(1, 0), g(-1, 0), g(0, 1), g(0, -1)] {
            assert!(unit.is_unit());
        }
        assert!(!g(1, 1).is_unit());
    }

    #[test]
    fn test_integer_equality() {
        assert_eq!(g(5, 0), 5i64);
        assert_ne!(g(5, 1), 5i64);
        assert_eq!(GaussianInt::from(-7i64), BigInt::from(-7));
        assert_eq!(GaussianInt::from(BigUint::from(9u32)), g(9, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(g(3, 4).to_string(), "3 + 4i");
        assert_eq!(g(3, -4).to_string(), "3 - 4i");
        assert_eq!(g(-3, 0).to_string(), "-3 + 0i");
    }

    #[test]
    fn test_div_rem() {
        let cases = [
            ((7, 3), (2, 1), (3, 0), (1, 0)),
            ((27, -4), (3, 5), (2, -4), (1, -2)),
            ((-11, 9), (4, -2), (-3, 1), (-1, -1)),
            ((10, 0), (1, 0), (10, 0), (0, 0)),
        ];

        for (a, b, q, r) in cases {
            let (a, b) = (g(a.0, a.1), g(b.0, b.1));
            let (quotient, remainder) = a.div_rem(&b).unwrap();
            assert_eq!(quotient, g(q.0, q.1), "{} / {}", a, b);
            assert_eq!(remainder, g(r.0, r.1), "{} mod {}", a, b);
            assert_eq!(&b * &quotient + &remainder, a);
        }
    }

    #[test]
    fn test_div_rem_exhaustive_small() {
        for ar in -12..12 {
            for ai in -12..12 {
                for br in -5..5 {
                    for bi in -5..5 {
                        let (a, b) = (g(ar, ai), g(br, bi));
                        if b.is_zero() {
                            continue;
                        }
                        let (q, r) = a.div_rem(&b).unwrap();
                        assert_eq!(&b * &q + &r, a);
                        assert!(r.norm() * 2u32 <= b.norm(), "{} mod {} = {}", a, b, r);
                    }
                }
            }
        }
    }

    #[test]
    fn test_div_rem_large() {
        let a = GaussianInt::new(
            BigInt::parse_bytes(b"-98920366548084643601728869055592650835572950932266967461790948584315647051443", 10).unwrap(),
            BigInt::parse_bytes(b"94560208308847015747498523884063394671606671904944666360068158221458669711639", 10).unwrap(),
        );
        let b = GaussianInt::new(
            BigInt::parse_bytes(b"13756265695458089029", 10).unwrap(),
            BigInt::parse_bytes(b"-13496181268022124907", 10).unwrap(),
        );

        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&b * &q + &r, a);
        assert!(r.norm() < b.norm());
    }

    #[test]
    fn test_congruent_dividends_share_remainder() {
        let m = g(7, -3);
        let a = g(19, 40);
        let shifted = &a + &(&m * &g(-13, 6));
        assert_eq!(a.checked_rem(&m).unwrap(), shifted.checked_rem(&m).unwrap());
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(g(3, 4).div_rem(&GaussianInt::zero()), Err(Error::DivisionByZero));
        assert_eq!(g(3, 4).checked_rem(&GaussianInt::zero()), Err(Error::DivisionByZero));
    }
}
