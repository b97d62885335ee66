// -*- mode: rust; -*-
//
// This file is part of ed25519-donna.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Signing and verification timings.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::OsRng;

use ed25519_donna::{Signer, SigningKey, Verifier};

fn signatures(c: &mut Criterion) {
    let key = SigningKey::generate(&mut OsRng);
    let public = key.verifying_key();
    let message = [0x5au8; 64];
    let signature = key.sign(&message);

    let mut group = c.benchmark_group("ed25519");
    group.bench_function("keygen", |b| b.iter(|| SigningKey::generate(&mut OsRng)));
    group.bench_function("sign", |b| b.iter(|| key.sign(black_box(&message))));
    group.bench_function("verify", |b| {
        b.iter(|| public.verify(black_box(&message), &signature))
    });
    group.bench_function("verify strict", |b| {
        b.iter(|| public.verify_strict(black_box(&message), &signature))
    });
    group.finish();
}

criterion_group!(benches, signatures);
criterion_main!(benches);
