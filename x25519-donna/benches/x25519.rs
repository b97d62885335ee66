// -*- mode: rust; -*-
//
// This file is part of x25519-donna.
// Copyright (c) 2026 The x25519-donna developers
// Portions adapted from x25519-dalek:
// Copyright (c) 2017-2021 isis lovecruft
// Copyright (c) 2019-2021 DebugSteven
// See LICENSE for licensing information.
//
// Authors:
// - The x25519-donna developers

//! Key agreement timings.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_core::OsRng;

use x25519_donna::{x25519, PublicKey, StaticSecret, X25519_BASEPOINT_BYTES};

fn agreement(c: &mut Criterion) {
    let ours = StaticSecret::random_from_rng(&mut OsRng);
    let theirs = PublicKey::from(&StaticSecret::random_from_rng(&mut OsRng));
    let mut group = c.benchmark_group("x25519");

    group.bench_function("public key", |b| b.iter(|| PublicKey::from(black_box(&ours))));
    group.bench_function("shared secret", |b| b.iter(|| ours.diffie_hellman(black_box(&theirs))));

    let k = ours.to_bytes();
    group.bench_function("raw function", |b| {
        b.iter(|| x25519(black_box(k), X25519_BASEPOINT_BYTES))
    });
    group.finish();
}

criterion_group!(benches, agreement);
criterion_main!(benches);
