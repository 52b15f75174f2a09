//! Curve group properties across the parameter catalog.

#![cfg(feature = "streebog")]

use gost3410::{
    Mode, ParamSet, Point, PublicKey,
    dsa::{Signer256, Signer512},
    num_bigint::BigInt,
};
use rand_core::OsRng;

#[test]
fn generated_public_keys_satisfy_the_curve_equation() {
    for set in ParamSet::ALL {
        let curve = set.curve();

        let public_key = match set.mode() {
            Mode::Bits256 => {
                let signer = Signer256::new(&curve, set.mode()).unwrap();
                let (public_key, secret_key) = signer.generate_key_pair(&mut OsRng).unwrap();
                let derived = curve
                    .mul(secret_key.as_scalar(), &curve.generator())
                    .unwrap();
                assert_eq!(PublicKey::from_point(derived).unwrap(), public_key, "{set}");
                public_key
            }
            Mode::Bits512 => {
                let signer = Signer512::new(&curve, set.mode()).unwrap();
                let (public_key, secret_key) = signer.generate_key_pair(&mut OsRng).unwrap();
                let derived = curve
                    .mul(secret_key.as_scalar(), &curve.generator())
                    .unwrap();
                assert_eq!(PublicKey::from_point(derived).unwrap(), public_key, "{set}");
                public_key
            }
        };

        assert!(curve.contains(&public_key.to_point()), "{set}");
    }
}

#[test]
fn small_multiples_commute_and_associate() {
    let curve = ParamSet::CryptoProA.curve();
    let generator = curve.generator();

    let p1 = curve.mul(&BigInt::from(3), &generator).unwrap();
    let p2 = curve.mul(&BigInt::from(5), &generator).unwrap();
    let p3 = curve.mul(&BigInt::from(7), &generator).unwrap();

    let left = curve.add(&p1, &p2).unwrap();
    let right = curve.add(&p2, &p1).unwrap();
    assert_eq!(left, right);

    let assoc_left = curve.add(&curve.add(&p1, &p2).unwrap(), &p3).unwrap();
    let assoc_right = curve.add(&p1, &curve.add(&p2, &p3).unwrap()).unwrap();
    assert_eq!(assoc_left, assoc_right);

    // 3·G + 5·G is 8·G whichever way it is computed.
    assert_eq!(left, curve.mul(&BigInt::from(8), &generator).unwrap());
}

#[test]
fn doubling_agrees_with_scalar_multiplication() {
    let curve = ParamSet::CryptoProA.curve();
    let generator = curve.generator();

    let doubled = curve.add(&generator, &generator).unwrap();
    assert_eq!(doubled, curve.mul(&BigInt::from(2), &generator).unwrap());
    assert!(curve.contains(&doubled));
}

#[test]
fn base_point_order_annihilates_the_generator() {
    let curve = ParamSet::CryptoProB.curve();
    let identity = curve.mul(curve.q(), &curve.generator()).unwrap();
    assert_eq!(identity, Point::Infinity);
}
