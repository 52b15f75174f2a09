#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

pub mod arithmetic;
pub mod dsa;
pub mod params;

mod error;
mod public_key;
mod secret_key;

pub use digest;
pub use num_bigint;
pub use rand_core;

pub use crate::{
    arithmetic::curve::{Curve, Point},
    error::{Error, Result},
    params::ParamSet,
    public_key::PublicKey,
    secret_key::SecretKey,
};

/// Security level of the signature scheme.
///
/// GOST R 34.10-2012 defines two variants which differ in the widths of
/// keys, message digests and signature components.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// 256-bit keys with 32-byte digests.
    Bits256,
    /// 512-bit keys with 64-byte digests.
    Bits512,
}

impl Mode {
    /// Width in bytes of a serialized scalar (secret key, `r`, `s`).
    pub const fn scalar_size(self) -> usize {
        match self {
            Mode::Bits256 => 32,
            Mode::Bits512 => 64,
        }
    }

    /// Width in bytes of a message digest at this security level.
    pub const fn digest_size(self) -> usize {
        self.scalar_size()
    }

    /// Width in bytes of a serialized signature (`r ‖ s`).
    pub const fn signature_size(self) -> usize {
        2 * self.scalar_size()
    }
}
