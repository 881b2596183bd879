//! Error types.

/// Alias for [`core::result::Result`] with the `gaussian-rsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Division by the zero element of Z\[i\].
    DivisionByZero,

    /// Requested bit length is too small to produce the requested value.
    InvalidBitLength,

    /// Invalid public exponent.
    InvalidExponent,

    /// Invalid modulus.
    InvalidModulus,

    /// Value is not a quadratic residue modulo the given prime.
    NonResidue,

    /// Modular inverse does not exist.
    NoInverse,

    /// Internal consistency failure while decomposing a split prime.
    Generation,

    /// Block is not a reduced residue modulo the key's modulus.
    MessageTooLong,

    /// Decoded bytes are not valid UTF-8.
    Decoding,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "invalid argument: division by zero"),
            Error::InvalidBitLength => write!(f, "invalid argument: bit length too small"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::NonResidue => write!(f, "value is not a quadratic residue"),
            Error::NoInverse => write!(f, "modular inverse does not exist"),
            Error::Generation => write!(f, "gaussian prime decomposition failed"),
            Error::MessageTooLong => write!(f, "message too long"),
            Error::Decoding => write!(f, "decoded message is not valid utf-8"),
        }
    }
}
