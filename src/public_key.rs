//! Public signature-verification keys.

use crate::{Error, Point, Result};
use alloc::string::String;
use num_bigint::BigInt;

/// Public key: the affine curve point `d·G` matching a signer's secret
/// scalar `d`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    x: BigInt,
    y: BigInt,
}

impl PublicKey {
    /// Creates a public key from affine coordinates.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Creates a public key from a curve point.
    ///
    /// Returns [`Error::InvalidPublicKey`] for the point at infinity,
    /// which cannot serve as a verification key.
    pub fn from_point(point: Point) -> Result<Self> {
        match point {
            Point::Affine { x, y } => Ok(Self { x, y }),
            Point::Infinity => Err(Error::InvalidPublicKey),
        }
    }

    /// The x coordinate.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The y coordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// The key as a curve point.
    pub fn to_point(&self) -> Point {
        Point::affine(self.x.clone(), self.y.clone())
    }

    /// Parses the two-line decimal serialization: `X` on the first line,
    /// `Y` on the second.
    pub fn from_decimal(text: &str) -> Result<Self> {
        let (x_line, y_line) = text.split_once('\n').ok_or(Error::InvalidPublicKey)?;
        if y_line.contains('\n') {
            return Err(Error::InvalidPublicKey);
        }

        let x = BigInt::parse_bytes(x_line.as_bytes(), 10).ok_or(Error::DecimalFormat)?;
        let y = BigInt::parse_bytes(y_line.as_bytes(), 10).ok_or(Error::DecimalFormat)?;
        Ok(Self::new(x, y))
    }

    /// Serializes the key as two decimal lines, `X` then `Y`.
    pub fn to_decimal(&self) -> String {
        let mut out = self.x.to_str_radix(10);
        out.push('\n');
        out.push_str(&self.y.to_str_radix(10));
        out
    }
}
