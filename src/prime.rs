//! Probabilistic primality testing over the rational integers.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use rand_core::CryptoRngCore;

/// Number of Miller-Rabin rounds used when searching for primes.
pub const MILLER_RABIN_ROUNDS: usize = 40;

/// Reports whether `n` passes `rounds` rounds of the Miller-Rabin test with
/// witnesses drawn uniformly from `[2, n - 2]`.
///
/// A prime always passes. A composite passes a single round with probability at
/// most ¼, so at [`MILLER_RABIN_ROUNDS`] the false positive rate is negligible.
///
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
pub fn is_probable_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    n: &BigUint,
    rounds: usize,
) -> bool {
    match n.to_u8() {
        Some(0) | Some(1) => return false,
        Some(2) | Some(3) => return true,
        _ => {}
    }

    if n.is_even() {
        return false;
    }

    let n_minus_one = n - 1u32;
    // n - 1 = d·2^s with d odd
    let mut d = n_minus_one.clone();
    let mut s = 0usize;
    while d.is_even() {
        d >>= 1usize;
        s += 1;
    }

    let two = BigUint::from(2u32);

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);

        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}
