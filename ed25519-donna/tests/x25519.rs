// -*- mode: rust; -*-
//
// This file is part of ed25519-donna.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Ed25519 keys reused for X25519 agreement.

use curve25519_donna::scalar::{clamp_integer, Scalar};
use ed25519_donna::SigningKey;
use hex_literal::hex;
use sha2::{Digest, Sha512};

/// The RFC 8032 test 1 and test 2 secret keys.
const ALICE: [u8; 32] = hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
const BOB: [u8; 32] = hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");

const ALICE_X25519: [u8; 32] =
    hex!("d85e07ec22b0ad881537c2f44d662d1a143cf830c57aca4305d85c7a90f6b62e");
const BOB_X25519: [u8; 32] =
    hex!("25c704c594b88afc00a76b69d1ed2b984d7e22550f3ed0802d04fbcd07d38d47");
const SHARED: [u8; 32] = hex!("5166f24a6918368e2af831a4affadd97af0ac326bdf143596c045967cc00230e");

#[test]
fn signing_scalar_is_the_clamped_hash_prefix() {
    for secret in [ALICE, BOB] {
        let mut prefix = [0u8; 32];
        prefix.copy_from_slice(&Sha512::digest(secret)[..32]);
        let clamped = clamp_integer(prefix);

        let key = SigningKey::from_bytes(&secret);
        assert_eq!(key.to_scalar_bytes(), clamped);
        assert_eq!(key.to_scalar(), Scalar::from_bytes_mod_order(clamped));
    }
}

#[test]
fn converted_keys_agree_on_a_secret() {
    let alice = SigningKey::from_bytes(&ALICE);
    let bob = SigningKey::from_bytes(&BOB);

    let alice_public = alice.verifying_key().to_montgomery();
    let bob_public = bob.verifying_key().to_montgomery();
    assert_eq!(alice_public.to_bytes(), ALICE_X25519);
    assert_eq!(bob_public.to_bytes(), BOB_X25519);

    assert_eq!((alice_public * bob.to_scalar()).to_bytes(), SHARED);
    assert_eq!((bob_public * alice.to_scalar()).to_bytes(), SHARED);

    // The unreduced clamped integer lands on the same point.
    assert_eq!(alice_public.mul_clamped(bob.to_scalar_bytes()).to_bytes(), SHARED);
    assert_eq!(bob_public.mul_clamped(alice.to_scalar_bytes()).to_bytes(), SHARED);
}
