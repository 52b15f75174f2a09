//! GOST R 34.10-2012 digital signature algorithm.
//!
//! ## Signing
//!
//! ```text
//! 1. e = h(M) as an integer mod q; e = 1 if the reduction is zero.
//! 2. Draw a random nonce k, 0 < k < q.
//! 3. C = k·G; r = C.x mod q; back to 2 if r = 0.
//! 4. s = (r·d + k·e) mod q; back to 2 if s = 0.
//! 5. The signature is r ‖ s.
//! ```
//!
//! ## Verification
//!
//! ```text
//! 1. Reject unless 0 < r < q and 0 < s < q.
//! 2. e = h(M) as an integer mod q; e = 1 if the reduction is zero.
//! 3. v = e⁻¹ mod q; z1 = s·v mod q; z2 = −r·v mod q.
//! 4. C = z1·G + z2·Q; the signature is valid iff C.x mod q = r.
//! ```
//!
//! Nonces are single-use: reusing `k` across two signatures leaks the
//! secret key.

mod signing;
mod verifying;

use crate::{Curve, Error, Mode, Result};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;
use digest::Digest;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Signing engine over Streebog-256 for the 256-bit mode.
#[cfg(feature = "streebog")]
pub type Signer256<'c> = Signer<'c, streebog::Streebog256>;

/// Signing engine over Streebog-512 for the 512-bit mode.
#[cfg(feature = "streebog")]
pub type Signer512<'c> = Signer<'c, streebog::Streebog512>;

/// GOST R 34.10-2012 signature: the scalar pair `(r, s)`.
///
/// Serialized as `r ‖ s` with each component zero-padded big-endian to
/// `mode/8` bytes, which keeps the encoding unambiguous when a component
/// has leading zero bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
    mode: Mode,
}

impl Signature {
    /// Creates a signature from scalar components.
    ///
    /// Both scalars must be non-negative and fit the mode's scalar width;
    /// values produced by signing are always reduced modulo `q` and
    /// satisfy this.
    pub fn from_scalars(r: BigInt, s: BigInt, mode: Mode) -> Result<Self> {
        let width = mode.scalar_size() as u64;
        if r.sign() == Sign::Minus
            || s.sign() == Sign::Minus
            || r.bits() > 8 * width
            || s.bits() > 8 * width
        {
            return Err(Error::SignatureSize {
                expected: mode.signature_size(),
                actual: (r.bits().div_ceil(8) + s.bits().div_ceil(8)) as usize,
            });
        }

        Ok(Self { r, s, mode })
    }

    /// Parses a signature from its fixed-width `r ‖ s` serialization.
    pub fn from_slice(bytes: &[u8], mode: Mode) -> Result<Self> {
        let expected = mode.signature_size();
        if bytes.len() != expected {
            return Err(Error::SignatureSize {
                expected,
                actual: bytes.len(),
            });
        }

        let (r_bytes, s_bytes) = bytes.split_at(mode.scalar_size());
        Ok(Self {
            r: BigInt::from_bytes_be(Sign::Plus, r_bytes),
            s: BigInt::from_bytes_be(Sign::Plus, s_bytes),
            mode,
        })
    }

    /// Serializes the signature as `r ‖ s`, each component zero-padded
    /// big-endian to `mode/8` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let width = self.mode.scalar_size();
        let mut out = vec![0u8; 2 * width];

        let r = self.r.to_bytes_be().1;
        let s = self.s.to_bytes_be().1;
        out[width - r.len()..width].copy_from_slice(&r);
        out[2 * width - s.len()..].copy_from_slice(&s);

        out
    }

    /// Parses the decimal serialization: the decimal string of `r ‖ s`
    /// read as a single big-endian integer.
    pub fn from_decimal(text: &str, mode: Mode) -> Result<Self> {
        let value = BigInt::parse_bytes(text.as_bytes(), 10).ok_or(Error::DecimalFormat)?;
        if value.sign() == Sign::Minus {
            return Err(Error::DecimalFormat);
        }

        let expected = mode.signature_size();
        let bytes = value.to_bytes_be().1;
        if bytes.len() > expected {
            return Err(Error::SignatureSize {
                expected,
                actual: bytes.len(),
            });
        }

        let mut padded = vec![0u8; expected];
        padded[expected - bytes.len()..].copy_from_slice(&bytes);
        Self::from_slice(&padded, mode)
    }

    /// Decimal serialization of `r ‖ s` as a single big-endian integer.
    pub fn to_decimal(&self) -> String {
        BigInt::from_bytes_be(Sign::Plus, &self.to_bytes()).to_str_radix(10)
    }

    /// The scalar `r`.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// The scalar `s`.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// The security mode this signature was produced under.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// Signature engine: one curve, one security mode, one digest algorithm.
///
/// The engine holds no other state; every operation is a pure function of
/// its inputs plus fresh randomness, so one engine can back concurrent
/// signing and verification calls.
pub struct Signer<'c, D> {
    curve: &'c Curve,
    mode: Mode,
    digest: PhantomData<D>,
}

impl<'c, D: Digest> Signer<'c, D> {
    /// Creates an engine for `curve` at security level `mode`.
    ///
    /// The digest type `D` must produce exactly `mode/8` bytes. The GOST
    /// pairing is Streebog-256 for [`Mode::Bits256`] and Streebog-512 for
    /// [`Mode::Bits512`] (see [`Signer256`] / [`Signer512`]), but any
    /// [`Digest`] implementation of matching width is accepted.
    pub fn new(curve: &'c Curve, mode: Mode) -> Result<Self> {
        let expected = mode.digest_size();
        let actual = <D as Digest>::output_size();
        if actual != expected {
            return Err(Error::DigestSize { expected, actual });
        }

        Ok(Self {
            curve,
            mode,
            digest: PhantomData,
        })
    }

    /// The engine's curve.
    pub fn curve(&self) -> &Curve {
        self.curve
    }

    /// The engine's security mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Folds a digest into the scalar `e`: the digest as a big-endian
    /// integer reduced mod `q`, with a zero residue replaced by one.
    fn digest_scalar(&self, prehash: &[u8]) -> BigInt {
        let e = BigInt::from_bytes_be(Sign::Plus, prehash).mod_floor(self.curve.q());
        if e.is_zero() { BigInt::one() } else { e }
    }

    fn check_prehash_len(&self, prehash: &[u8]) -> Result<()> {
        let expected = self.mode.digest_size();
        if prehash.len() != expected {
            return Err(Error::DigestSize {
                expected,
                actual: prehash.len(),
            });
        }
        Ok(())
    }
}
