//! Useful algorithms related to Gaussian RSA.

pub(crate) mod cipher;
pub(crate) mod generate;
pub(crate) mod residue;
