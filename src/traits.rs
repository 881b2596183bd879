//! Gaussian RSA trait definitions.

pub(crate) mod keys;

pub use keys::{PrivateKeyParts, PublicKeyParts};
