//! Traits related to the key components

use num_bigint::BigUint;

use crate::gaussian::GaussianInt;

/// Components of a Gaussian RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &GaussianInt;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the size of the key in bits, i.e. the bit length of the norm of
    /// the modulus.
    fn size(&self) -> usize {
        self.n().norm().bits()
    }
}

/// Components of a Gaussian RSA private key.
pub trait PrivateKeyParts: PublicKeyParts {
    /// Returns the private exponent of the key.
    fn d(&self) -> &BigUint;
}
