//! Generate Gaussian primes and the components of a Gaussian RSA key pair

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint, IntoBigUint, ModInverse};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::algorithms::residue::sqrt_minus_one;
use crate::errors::{Error, Result};
use crate::gaussian::GaussianInt;
use crate::prime_rand::RandPrime;

/// Smallest norm size, in bits, for which both Gaussian prime families exist.
pub const MIN_GAUSSIAN_PRIME_BITS: usize = 3;

/// Everything produced while generating a key pair, including the secret
/// factorization of the modulus.
pub(crate) struct GaussianKeyComponents {
    pub n: GaussianInt,
    pub e: BigUint,
    pub d: BigUint,
    pub primes: [GaussianInt; 2],
    pub phi: BigUint,
}

impl Zeroize for GaussianKeyComponents {
    fn zeroize(&mut self) {
        self.d.zeroize();
        for prime in self.primes.iter_mut() {
            prime.zeroize();
        }
        self.phi.zeroize();
    }
}

impl Drop for GaussianKeyComponents {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Generates a Gaussian prime whose norm is roughly `2^bits`.
///
/// A fair coin picks between an inert prime `(p, 0)` and a split prime
/// `(a, b)`, so moduli are not biased towards either family.
pub fn generate_gaussian_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> Result<GaussianInt> {
    if bits < MIN_GAUSSIAN_PRIME_BITS {
        return Err(Error::InvalidBitLength);
    }

    if rng.next_u32() & 1 == 0 {
        generate_inert_prime(rng, bits)
    } else {
        generate_split_prime(rng, bits)
    }
}

/// Generates `(p, 0)` for a rational prime `p ≡ 3 (mod 4)` of `bits / 2` bits,
/// so that its norm `p²` has about `bits` bits.
pub fn generate_inert_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> Result<GaussianInt> {
    let prime_bits = core::cmp::max(bits / 2, 2);
    let three = BigUint::from(3u32);

    loop {
        let p = rng.gen_prime(prime_bits)?;
        if &p % 4u32 == three {
            return Ok(GaussianInt::from(p));
        }
        trace!(prime_bits, "rational prime is not 3 mod 4, resampling");
    }
}

/// Generates `(a, b)` with `a² + b² = p` for a rational prime `p ≡ 1 (mod 4)`
/// of `bits` bits.
pub fn generate_split_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> Result<GaussianInt> {
    if bits < MIN_GAUSSIAN_PRIME_BITS {
        return Err(Error::InvalidBitLength);
    }

    loop {
        let p = rng.gen_prime(bits)?;
        if (&p % 4u32).is_one() {
            return decompose_prime(&p);
        }
        trace!(bits, "rational prime is not 1 mod 4, resampling");
    }
}

/// Writes a rational prime `p = 2` or `p ≡ 1 (mod 4)` as `a² + b²` and returns `a + bi`.
///
/// Starting from `r² ≡ -1 (mod p)`, the Euclidean algorithm on `(p, r)` is run
/// until the remainder drops to at most `√p`; that remainder is `a` and
/// `p - a²` is a perfect square `b²` (Hermite-Serret).
///
/// Fails with [`Error::NonResidue`] when `-1` has no square root modulo `p`, and
/// with [`Error::Generation`] when `p - a²` is not a perfect square, which can
/// only happen if `p` was not prime.
pub fn decompose_prime(p: &BigUint) -> Result<GaussianInt> {
    let r = sqrt_minus_one(p).ok_or(Error::NonResidue)?;
    let root = p.sqrt();

    let mut a = p.clone();
    let mut b = r;
    while b > root {
        let rem = &a % &b;
        a = core::mem::replace(&mut b, rem);
    }

    let rest = p - &(&b * &b);
    let c = rest.sqrt();
    if &c * &c != rest {
        return Err(Error::Generation);
    }

    Ok(GaussianInt::new(
        BigInt::from_biguint(Plus, b),
        BigInt::from_biguint(Plus, c),
    ))
}

/// Generates the components of a key pair whose modulus norm has about
/// `bit_size` bits, starting the public exponent search at `exp`.
pub(crate) fn generate_key_components<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
    exp: BigUint,
) -> Result<GaussianKeyComponents> {
    check_public_exponent(&exp)?;

    let prime_bits = bit_size / 2;
    let pi = generate_gaussian_prime(rng, prime_bits)?;
    let mut rho = generate_gaussian_prime(rng, prime_bits)?;

    // Distinct primes of the same norm cannot come out of this factory, so
    // value equality is enough to keep pi and rho coprime.
    while rho == pi {
        debug!(prime_bits, "second gaussian prime equals the first, resampling");
        rho = generate_gaussian_prime(rng, prime_bits)?;
    }

    let components = key_components_from_primes(pi, rho, exp)?;
    debug!(
        bit_size,
        modulus_bits = components.n.norm().bits(),
        "generated gaussian key pair"
    );

    Ok(components)
}

/// Derives the modulus and both exponents from two distinct Gaussian primes.
pub(crate) fn key_components_from_primes(
    pi: GaussianInt,
    rho: GaussianInt,
    exp: BigUint,
) -> Result<GaussianKeyComponents> {
    check_public_exponent(&exp)?;

    let two = BigUint::from(2u32);
    if pi.norm() <= two || rho.norm() <= two {
        return Err(Error::InvalidModulus);
    }

    let n = &pi * &rho;
    let phi = compute_phi(&pi, &rho);
    let e = select_public_exponent(exp, &phi);
    let d = compute_private_exponent(&e, &phi)?;

    Ok(GaussianKeyComponents {
        n,
        e,
        d,
        primes: [pi, rho],
        phi,
    })
}

/// The Euler phi analogue `(N(pi) - 1)·(N(rho) - 1)`.
pub(crate) fn compute_phi(pi: &GaussianInt, rho: &GaussianInt) -> BigUint {
    (pi.norm() - 1u32) * (rho.norm() - 1u32)
}

/// Bumps `exp` by two until it is coprime with `phi`.
///
/// `exp` must be odd since `phi` is always even. Terminates because
/// infinitely many primes exceed `exp`, but the number of steps is unbounded.
fn select_public_exponent(mut exp: BigUint, phi: &BigUint) -> BigUint {
    while !exp.gcd(phi).is_one() {
        debug!("public exponent shares a factor with phi, bumping");
        exp += 2u32;
    }
    exp
}

/// `d = e⁻¹ mod phi`, computed over the rational integers.
pub(crate) fn compute_private_exponent(e: &BigUint, phi: &BigUint) -> Result<BigUint> {
    let phi_int = BigInt::from_biguint(Plus, phi.clone());
    let d = (e % phi).mod_inverse(phi).ok_or(Error::NoInverse)?;
    d.mod_floor(&phi_int).into_biguint().ok_or(Error::NoInverse)
}

pub(crate) fn check_public_exponent(e: &BigUint) -> Result<()> {
    if *e < BigUint::from(3u32) || e.is_even() {
        return Err(Error::InvalidExponent);
    }
    Ok(())
}
