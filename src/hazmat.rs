//! ⚠️ Low-level "hazmat" Gaussian RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds the raw encryption and decryption primitives, which
//! exponentiate a single block without any padding, along with the building
//! blocks of key generation: the Gaussian prime factory and square roots
//! modulo a prime. Textbook Gaussian RSA is deterministic and malleable, so
//! there are very few valid uses for this API outside of experimentation and
//! implementing higher-level constructions.

pub use crate::algorithms::cipher::{gaussian_decrypt, gaussian_encrypt};
pub use crate::algorithms::generate::{
    decompose_prime, generate_gaussian_prime, generate_inert_prime, generate_split_prime,
    MIN_GAUSSIAN_PRIME_BITS,
};
pub use crate::algorithms::residue::{legendre_symbol, sqrt_minus_one, tonelli_shanks};
