//! Signing and verification benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use gost3410::{
    ParamSet,
    dsa::{Signer256, Signer512},
};
use rand_core::OsRng;

fn bench_256(c: &mut Criterion) {
    let params = ParamSet::CryptoProA;
    let curve = params.curve();
    let signer = Signer256::new(&curve, params.mode()).unwrap();
    let (public_key, secret_key) = signer.generate_key_pair(&mut OsRng).unwrap();
    let msg = b"benchmark payload";
    let signature = signer.sign(msg, &secret_key, &mut OsRng).unwrap();

    let mut group = c.benchmark_group("cryptopro-a-256");
    group.bench_function("sign", |b| {
        b.iter(|| signer.sign(msg, &secret_key, &mut OsRng).unwrap())
    });
    group.bench_function("verify", |b| {
        b.iter(|| signer.verify(msg, &signature, &public_key).unwrap())
    });
    group.finish();
}

fn bench_512(c: &mut Criterion) {
    let params = ParamSet::Tc26Gost512A;
    let curve = params.curve();
    let signer = Signer512::new(&curve, params.mode()).unwrap();
    let (public_key, secret_key) = signer.generate_key_pair(&mut OsRng).unwrap();
    let msg = b"benchmark payload";
    let signature = signer.sign(msg, &secret_key, &mut OsRng).unwrap();

    let mut group = c.benchmark_group("tc26-512-a");
    group.bench_function("sign", |b| {
        b.iter(|| signer.sign(msg, &secret_key, &mut OsRng).unwrap())
    });
    group.bench_function("verify", |b| {
        b.iter(|| signer.verify(msg, &signature, &public_key).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_256, bench_512);
criterion_main!(benches);
