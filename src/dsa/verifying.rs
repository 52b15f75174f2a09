//! Signature verification.

use super::{Signature, Signer};
use crate::{Error, Point, PublicKey, Result, arithmetic::euclid};
use digest::Digest;
use num_integer::Integer;
use num_traits::Zero;

impl<D: Digest> Signer<'_, D> {
    /// Verifies `signature` over `msg` against `public_key`.
    ///
    /// A cryptographically invalid signature is an `Ok(false)` outcome;
    /// `Err` is reserved for malformed inputs (wrong signature mode or
    /// digest width).
    pub fn verify(
        &self,
        msg: &[u8],
        signature: &Signature,
        public_key: &PublicKey,
    ) -> Result<bool> {
        self.verify_prehash(D::digest(msg).as_slice(), signature, public_key)
    }

    /// Verifies a signature over a precomputed `mode/8`-byte digest.
    pub fn verify_prehash(
        &self,
        prehash: &[u8],
        signature: &Signature,
        public_key: &PublicKey,
    ) -> Result<bool> {
        self.check_prehash_len(prehash)?;

        if signature.mode() != self.mode {
            return Err(Error::SignatureSize {
                expected: self.mode.signature_size(),
                actual: signature.mode().signature_size(),
            });
        }

        let q = self.curve.q();
        let (r, s) = (signature.r(), signature.s());

        // 0 < r < q and 0 < s < q, checked before any curve arithmetic.
        // Parsed components are never negative, so zero is the only low
        // boundary.
        if r.is_zero() || s.is_zero() || r >= q || s >= q {
            return Ok(false);
        }

        let e = self.digest_scalar(prehash);
        let v = euclid::mod_inverse(&e, q)?;

        let z1 = (s * &v).mod_floor(q);
        let z2 = (-(r * &v)).mod_floor(q);

        let c = self.curve.add(
            &self.curve.mul(&z1, &self.curve.generator())?,
            &self.curve.mul(&z2, &public_key.to_point())?,
        )?;

        Ok(match c {
            Point::Affine { x, .. } => x.mod_floor(q) == *r,
            Point::Infinity => false,
        })
    }
}
