//! Error types.

use core::fmt;

/// Result type with the `gost3410` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by this crate.
///
/// An invalid signature is not an error: verification reports it as a
/// `false` outcome. `Error` covers malformed inputs, misconfiguration and
/// failures of the underlying random source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The requested curve parameter-set name is not in the catalog.
    UnknownParamSet,
    /// The secret key scalar is zero or negative.
    InvalidSecretKey,
    /// The public key is not a usable curve point.
    InvalidPublicKey,
    /// Malformed decimal serialization of a key or signature.
    DecimalFormat,
    /// A serialized signature has the wrong length for the security mode.
    SignatureSize {
        /// Expected length in bytes.
        expected: usize,
        /// Length of the rejected input in bytes.
        actual: usize,
    },
    /// The digest output width does not match the security mode.
    DigestSize {
        /// Digest width in bytes required by the mode.
        expected: usize,
        /// Output width in bytes of the supplied digest type.
        actual: usize,
    },
    /// A modular inverse was requested for a value that is not coprime to
    /// the modulus.
    NotInvertible,
    /// The cryptographically secure random source failed.
    Random,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownParamSet => f.write_str("unknown curve parameter set"),
            Error::InvalidSecretKey => f.write_str("invalid secret key scalar"),
            Error::InvalidPublicKey => f.write_str("invalid public key point"),
            Error::DecimalFormat => f.write_str("malformed decimal serialization"),
            Error::SignatureSize { expected, actual } => write!(
                f,
                "invalid signature length: {actual} bytes, expected {expected}"
            ),
            Error::DigestSize { expected, actual } => write!(
                f,
                "digest output is {actual} bytes, the security mode requires {expected}"
            ),
            Error::NotInvertible => f.write_str("value is not invertible modulo the modulus"),
            Error::Random => f.write_str("random number generator failure"),
        }
    }
}

impl core::error::Error for Error {}
