//! Euclidean algorithms and modular arithmetic over Z\[i\].

use core::mem;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};
use crate::gaussian::GaussianInt;

/// Greatest common divisor of `a` and `b`, unique up to a unit factor.
pub fn gcd(a: &GaussianInt, b: &GaussianInt) -> GaussianInt {
    let mut a = a.clone();
    let mut b = b.clone();

    // div_rem only fails once b has reached zero
    while let Ok((_, r)) = a.div_rem(&b) {
        a = mem::replace(&mut b, r);
    }

    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a·x + b·y = g` where `g` is a greatest common
/// divisor of `a` and `b`.
pub fn xgcd(a: &GaussianInt, b: &GaussianInt) -> (GaussianInt, GaussianInt, GaussianInt) {
    let mut a = a.clone();
    let mut b = b.clone();
    let (mut x0, mut x1) = (GaussianInt::one(), GaussianInt::zero());
    let (mut y0, mut y1) = (GaussianInt::zero(), GaussianInt::one());

    while let Ok((q, r)) = a.div_rem(&b) {
        a = mem::replace(&mut b, r);

        let x2 = &x0 - &(&q * &x1);
        x0 = mem::replace(&mut x1, x2);

        let y2 = &y0 - &(&q * &y1);
        y0 = mem::replace(&mut y1, y2);
    }

    (a, x0, y0)
}

/// Calculates the inverse of `a` modulo `m`.
///
/// The Bézout relation only yields `a·x ≡ g` for some unit `g`, so the result is
/// corrected by `conj(g)`, which is the inverse of every unit. Returns
/// [`Error::NoInverse`] when `a` and `m` share a non-unit factor.
pub fn mod_inverse(a: &GaussianInt, m: &GaussianInt) -> Result<GaussianInt> {
    let (g, x, _) = xgcd(a, m);
    if !g.is_unit() {
        return Err(Error::NoInverse);
    }

    (&x * &g.conj()).checked_rem(m)
}

/// Square-and-multiply exponentiation, reducing modulo `modulus` after every step.
pub fn mod_pow(base: &GaussianInt, exp: &BigUint, modulus: &GaussianInt) -> Result<GaussianInt> {
    let mut result = GaussianInt::one().checked_rem(modulus)?;
    let mut base = base.checked_rem(modulus)?;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base).checked_rem(modulus)?;
        }
        base = (&base * &base).checked_rem(modulus)?;
        exp >>= 1usize;
    }

    Ok(result)
}
