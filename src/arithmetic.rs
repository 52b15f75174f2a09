//! Big-integer modular arithmetic and elliptic curve group operations.

pub mod curve;
pub mod euclid;
