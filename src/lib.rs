#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Overview
//!
//! Keys and ciphertexts live in the ring of Gaussian integers Z\[i\], numbers
//! of the form `a + bi` with `a` and `b` ordinary integers. A modulus is the
//! product `N = π·ρ` of two distinct Gaussian primes, drawn either from rational
//! primes `p ≡ 3 (mod 4)` (inert primes `(p, 0)`) or from the two-square
//! decomposition `a² + b²` of rational primes `p ≡ 1 (mod 4)` (split primes).
//! The totient analogue is `φ = (N(π) - 1)(N(ρ) - 1)` and the exponents satisfy
//! `e·d ≡ 1 (mod φ)`.
//!
//! # Usage
//!
//! ## Single blocks
//!
//! ```
//! use gaussian_rsa::{GaussianInt, GaussianPrivateKey, GaussianPublicKey};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let private_key = GaussianPrivateKey::new(&mut rng, 128).expect("failed to generate a key");
//! let public_key = GaussianPublicKey::from(&private_key);
//!
//! let block = GaussianInt::new(123, 45);
//! let ciphertext = public_key.encrypt(&block).expect("failed to encrypt");
//! assert_ne!(ciphertext, block);
//!
//! let plaintext = private_key.decrypt(&ciphertext).expect("failed to decrypt");
//! assert_eq!(plaintext, block);
//! ```
//!
//! A block round-trips when it is reduced modulo `N`, that is when
//! `block.checked_rem(n) == block`. Every block with a norm below `N(N) / 4`
//! qualifies. Encryption of any other block fails with
//! [`Error::MessageTooLong`].
//!
//! ## Text
//!
//! The [`codec`] module splits UTF-8 text into blocks small enough to be
//! encrypted under a given modulus.
//!
//! ```
//! use gaussian_rsa::generate_key_pair;
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//! let (public_key, private_key) = generate_key_pair(&mut rng, 256).expect("failed to generate a key");
//!
//! let ciphertext = public_key.encrypt_message("hello world").expect("failed to encrypt");
//! let message = private_key.decrypt_message(&ciphertext).expect("failed to decrypt");
//! assert_eq!(message, "hello world");
//! ```
//!
//! # Logging
//!
//! Key generation emits [`tracing`](https://docs.rs/tracing) events at the
//! `debug` and `trace` levels. The crate never installs a subscriber.

#[cfg(doctest)]
pub struct ReadmeDoctests;

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::{BigInt, BigUint};
pub use rand_core;

mod algorithms;
pub mod codec;
pub mod errors;
mod gaussian;
mod key;
pub mod math;
pub mod prime;
mod prime_rand;
pub mod traits;

pub use crate::{
    errors::{Error, Result},
    gaussian::GaussianInt,
    key::{generate_key_pair, GaussianPrivateKey, GaussianPublicKey, DEFAULT_PUBLIC_EXPONENT},
    prime_rand::{generate_prime, RandPrime},
    traits::{PrivateKeyParts, PublicKeyParts},
};

#[cfg(feature = "hazmat")]
pub mod hazmat;
