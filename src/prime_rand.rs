//! Generation of random primes.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};
use crate::prime::{is_probable_prime, MILLER_RABIN_ROUNDS};

/// A generic trait for generating random primes.
///
/// *Warning*: This is highly dependent on the provided random number generator,
/// to provide actually random primes.
///
/// # Example
/// ```
/// use gaussian_rsa::RandPrime;
///
/// let mut rng = rand::thread_rng(); // rand@0.8
/// let p = rng.gen_prime(64).unwrap();
/// assert_eq!(p.bits(), 64);
/// ```
pub trait RandPrime {
    /// Generate a random prime number with exactly `bit_size` bits.
    ///
    /// Candidates are resampled until one passes [`is_probable_prime`]; the
    /// number of attempts is unbounded. Fails with
    /// [`Error::InvalidBitLength`] for `bit_size < 2`.
    fn gen_prime(&mut self, bit_size: usize) -> Result<BigUint>;
}

impl<R: CryptoRngCore + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_size: usize) -> Result<BigUint> {
        if bit_size < 2 {
            return Err(Error::InvalidBitLength);
        }

        let top_bit = BigUint::one() << (bit_size - 1);

        loop {
            let mut candidate = self.gen_biguint(bit_size);
            // Force the requested length and make the value odd, since an even
            // number of two or more bits is never prime.
            candidate |= &top_bit;
            candidate |= BigUint::one();

            if is_probable_prime(self, &candidate, MILLER_RABIN_ROUNDS) {
                return Ok(candidate);
            }
        }
    }
}

/// Generate a random prime number with exactly `bit_size` bits.
pub fn generate_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<BigUint> {
    rng.gen_prime(bit_size)
}
