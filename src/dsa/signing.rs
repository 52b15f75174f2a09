//! Key generation and signing.

use super::{Signature, Signer};
use crate::{Error, PublicKey, Result, SecretKey};
use alloc::vec;
use digest::Digest;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;
use rand_core::TryCryptoRng;

impl<D: Digest> Signer<'_, D> {
    /// Generates a fresh key pair.
    ///
    /// `mode/8` bytes of key material are drawn from `rng`, interpreted as
    /// a little-endian integer and reduced modulo the group order; a zero
    /// residue is redrawn. The public key is `d·G`. Entropy failure aborts
    /// with [`Error::Random`].
    pub fn generate_key_pair<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(PublicKey, SecretKey)> {
        let mut raw = vec![0u8; self.mode.scalar_size()];

        let d = loop {
            rng.try_fill_bytes(&mut raw).map_err(|_| Error::Random)?;

            let d = BigInt::from_bytes_le(Sign::Plus, &raw).mod_floor(self.curve.q());
            if !d.is_zero() {
                break d;
            }
        };

        let public_point = self.curve.mul(&d, &self.curve.generator())?;
        Ok((PublicKey::from_point(public_point)?, SecretKey::new(d)?))
    }

    /// Signs `msg` with `secret_key`, digesting it at the engine's mode.
    pub fn sign<R: TryCryptoRng + ?Sized>(
        &self,
        msg: &[u8],
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> Result<Signature> {
        self.sign_prehash(D::digest(msg).as_slice(), secret_key, rng)
    }

    /// Signs a precomputed `mode/8`-byte digest.
    ///
    /// Degenerate draws (`k = 0`, `r = 0`, `s = 0`) are retried with fresh
    /// randomness and never surface to the caller; entropy failure aborts
    /// with [`Error::Random`].
    pub fn sign_prehash<R: TryCryptoRng + ?Sized>(
        &self,
        prehash: &[u8],
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> Result<Signature> {
        self.check_prehash_len(prehash)?;

        let q = self.curve.q();
        let d = secret_key.as_scalar();
        let e = self.digest_scalar(prehash);
        let generator = self.curve.generator();

        // The nonce is drawn from a 64-byte pool regardless of mode and
        // reduced modulo q.
        let mut nonce_bytes = [0u8; 64];

        let (r, s) = loop {
            rng.try_fill_bytes(&mut nonce_bytes).map_err(|_| Error::Random)?;

            let k = BigInt::from_bytes_be(Sign::Plus, &nonce_bytes).mod_floor(q);
            if k.is_zero() {
                continue;
            }

            // r = (k·G).x mod q; k·G is affine for any 0 < k < q, the
            // branch only guards the group identity.
            let c = self.curve.mul(&k, &generator)?;
            let Some(x) = c.x() else { continue };

            let r = x.mod_floor(q);
            if r.is_zero() {
                continue;
            }

            let s = (&r * d + &k * &e).mod_floor(q);
            if s.is_zero() {
                continue;
            }

            break (r, s);
        };

        Signature::from_scalars(r, s, self.mode)
    }
}
