// -*- mode: rust; -*-
//
// This file is part of curve25519-sigs.
// Copyright (c) 2026 The curve25519-sigs developers
// See LICENSE for licensing information.
//
// Authors:
// - The curve25519-sigs developers

use criterion::{criterion_group, criterion_main, Criterion};

use rand::rngs::OsRng;

use curve25519_sigs::{calculate_agreement, verify_signature, KeyPair};

fn key_generation(c: &mut Criterion) {
    c.bench_function("KeyPair generation", |b| {
        b.iter(|| KeyPair::generate(&mut OsRng))
    });
}

fn agreement(c: &mut Criterion) {
    let alice = KeyPair::generate(&mut OsRng);
    let bob = KeyPair::generate(&mut OsRng);

    c.bench_function("calculate_agreement", move |b| {
        b.iter(|| calculate_agreement(bob.public_key(), alice.private_key()))
    });
}

fn signing(c: &mut Criterion) {
    let pair = KeyPair::generate(&mut OsRng);
    let message = [0x5au8; 128];

    c.bench_function("calculate_signature", |b| {
        b.iter(|| pair.calculate_signature(&message))
    });

    let signature = pair.calculate_signature(&message);
    c.bench_function("verify_signature", |b| {
        b.iter(|| verify_signature(pair.public_key(), &message, &signature))
    });
}

criterion_group! {
    name = curve25519_sigs_benches;
    config = Criterion::default();
    targets =
        key_generation,
        agreement,
        signing,
}
criterion_main!(curve25519_sigs_benches);
