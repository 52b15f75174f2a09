//! Secret signing keys.

use crate::{Error, Result};
use alloc::string::String;
use core::fmt::{self, Debug};
use num_bigint::BigInt;
use num_traits::Signed;

/// Secret signing key: the scalar `d` with `0 < d < q`.
///
/// Produced by key generation or parsed from its decimal serialization;
/// immutable afterwards. The scalar is only reachable through
/// [`SecretKey::as_scalar`], and `Debug` output is redacted.
#[derive(Clone)]
pub struct SecretKey {
    d: BigInt,
}

impl SecretKey {
    /// Creates a secret key from the scalar `d`.
    ///
    /// Zero and negative scalars are rejected with
    /// [`Error::InvalidSecretKey`].
    pub fn new(d: BigInt) -> Result<Self> {
        if d.is_positive() {
            Ok(Self { d })
        } else {
            Err(Error::InvalidSecretKey)
        }
    }

    /// Parses a secret key from the decimal string of its scalar.
    pub fn from_decimal(text: &str) -> Result<Self> {
        let d = BigInt::parse_bytes(text.as_bytes(), 10).ok_or(Error::DecimalFormat)?;
        Self::new(d)
    }

    /// Serializes the scalar as a decimal string.
    pub fn to_decimal(&self) -> String {
        self.d.to_str_radix(10)
    }

    /// Borrows the secret scalar value of this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigInt {
        &self.d
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}
