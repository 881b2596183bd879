use alloc::string::String;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithms::cipher::{gaussian_decrypt, gaussian_encrypt};
use crate::algorithms::generate::{check_public_exponent, generate_key_components};
use crate::codec::{decode_message, encode_message};
use crate::errors::{Error, Result};
use crate::gaussian::GaussianInt;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Public exponent used by [`GaussianPrivateKey::new`] and [`generate_key_pair`].
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Represents the public part of a Gaussian RSA key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaussianPublicKey {
    /// Modulus: product of two distinct Gaussian primes.
    n: GaussianInt,
    /// Public exponent: power to which a block is raised to encrypt it.
    e: BigUint,
}

/// Represents a whole Gaussian RSA key, public and private parts.
///
/// The factorization of the modulus is discarded once the exponents are
/// known; only `N`, `e` and `d` are retained.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaussianPrivateKey {
    /// Public components of the private key.
    pubkey_components: GaussianPublicKey,
    /// Private exponent
    pub(crate) d: BigUint,
}

impl Eq for GaussianPrivateKey {}
impl PartialEq for GaussianPrivateKey {
    #[inline]
    fn eq(&self, other: &GaussianPrivateKey) -> bool {
        self.pubkey_components == other.pubkey_components && self.d == other.d
    }
}

impl AsRef<GaussianPublicKey> for GaussianPrivateKey {
    fn as_ref(&self) -> &GaussianPublicKey {
        &self.pubkey_components
    }
}

impl Zeroize for GaussianPrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for GaussianPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for GaussianPrivateKey {}

impl From<GaussianPrivateKey> for GaussianPublicKey {
    fn from(private_key: GaussianPrivateKey) -> Self {
        (&private_key).into()
    }
}

impl From<&GaussianPrivateKey> for GaussianPublicKey {
    fn from(private_key: &GaussianPrivateKey) -> Self {
        private_key.to_public_key()
    }
}

impl PublicKeyParts for GaussianPublicKey {
    fn n(&self) -> &GaussianInt {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl GaussianPublicKey {
    /// Create a new public key from its components.
    ///
    /// The modulus must have a norm greater than one and the exponent must be
    /// odd and at least 3.
    pub fn new(n: GaussianInt, e: BigUint) -> Result<Self> {
        let k = Self { n, e };
        check_public(&k)?;
        Ok(k)
    }

    /// Encrypt a single block.
    ///
    /// The block must be reduced modulo `N`, otherwise
    /// [`Error::MessageTooLong`] is returned.
    pub fn encrypt(&self, block: &GaussianInt) -> Result<GaussianInt> {
        gaussian_encrypt(self, block)
    }

    /// Encode `message` with [`encode_message`] and encrypt every block.
    pub fn encrypt_message(&self, message: &str) -> Result<Vec<GaussianInt>> {
        encode_message(message, &self.n.norm())
            .iter()
            .map(|block| self.encrypt(block))
            .collect()
    }
}

impl PublicKeyParts for GaussianPrivateKey {
    fn n(&self) -> &GaussianInt {
        &self.pubkey_components.n
    }

    fn e(&self) -> &BigUint {
        &self.pubkey_components.e
    }
}

impl PrivateKeyParts for GaussianPrivateKey {
    fn d(&self) -> &BigUint {
        &self.d
    }
}

impl GaussianPrivateKey {
    /// Generate a new key pair whose modulus norm has about `bit_size` bits,
    /// using [`DEFAULT_PUBLIC_EXPONENT`].
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<Self> {
        Self::new_with_exp(rng, bit_size, BigUint::from(DEFAULT_PUBLIC_EXPONENT))
    }

    /// Generate a new key pair with a caller-chosen starting public exponent.
    ///
    /// `exp` is bumped by two until it is coprime with phi, so the exponent of
    /// the resulting key may be larger than `exp`. Fails with
    /// [`Error::InvalidExponent`] if `exp` is even or below 3 and with
    /// [`Error::InvalidBitLength`] if `bit_size` is too small to hold two
    /// Gaussian primes.
    pub fn new_with_exp<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        bit_size: usize,
        exp: BigUint,
    ) -> Result<Self> {
        let components = generate_key_components(rng, bit_size, exp)?;
        Self::from_components(
            components.n.clone(),
            components.e.clone(),
            components.d.clone(),
        )
    }

    /// Constructs a private key from its components.
    pub fn from_components(n: GaussianInt, e: BigUint, d: BigUint) -> Result<Self> {
        let k = Self {
            pubkey_components: GaussianPublicKey { n, e },
            d,
        };
        k.validate()?;
        Ok(k)
    }

    /// Get the public key from the private key, cloning `n` and `e`.
    ///
    /// Generally this is not needed since `GaussianPrivateKey` implements the
    /// `PublicKeyParts` trait, but it can occasionally be useful to discard
    /// the private information entirely.
    pub fn to_public_key(&self) -> GaussianPublicKey {
        self.pubkey_components.clone()
    }

    /// Performs basic sanity checks on the key.
    /// Returns `Ok(())` if everything is good, otherwise an appropriate error.
    pub fn validate(&self) -> Result<()> {
        check_public(self)?;

        if self.d.is_zero() {
            return Err(Error::InvalidExponent);
        }

        Ok(())
    }

    /// Decrypt a single block.
    pub fn decrypt(&self, block: &GaussianInt) -> Result<GaussianInt> {
        gaussian_decrypt(self, block)
    }

    /// Decrypt every block and decode the result with [`decode_message`].
    pub fn decrypt_message(&self, blocks: &[GaussianInt]) -> Result<String> {
        let plain = blocks
            .iter()
            .map(|block| self.decrypt(block))
            .collect::<Result<Vec<_>>>()?;

        Ok(decode_message(&plain))
    }
}

/// Generate a fresh key pair whose modulus norm has about `bit_size` bits.
///
/// Uses [`DEFAULT_PUBLIC_EXPONENT`] as the starting public exponent. A failed
/// attempt is not retried; callers may simply call this again.
pub fn generate_key_pair<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<(GaussianPublicKey, GaussianPrivateKey)> {
    let private_key = GaussianPrivateKey::new(rng, bit_size)?;
    Ok((private_key.to_public_key(), private_key))
}

/// Check that the public key is well formed.
#[inline]
fn check_public(public_key: &impl PublicKeyParts) -> Result<()> {
    if public_key.n().norm() <= BigUint::one() {
        return Err(Error::InvalidModulus);
    }

    check_public_exponent(public_key.e())
}
