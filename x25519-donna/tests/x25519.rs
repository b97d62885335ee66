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

use hex_literal::hex;

use rand_core::OsRng;

use x25519_donna::*;

fn do_rfc7748_ladder_test1(input_scalar: [u8; 32], input_point: [u8; 32], expected: [u8; 32]) {
    let result = x25519(input_scalar, input_point);

    assert_eq!(result, expected);
}

#[test]
fn rfc7748_ladder_test1_vectorset1() {
    let input_scalar = hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let input_point = hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
    let expected = hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");

    do_rfc7748_ladder_test1(input_scalar, input_point, expected);
}

#[test]
fn rfc7748_ladder_test1_vectorset2() {
    // The top bit of this u-coordinate is set and must be ignored.
    let input_scalar = hex!("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d");
    let input_point = hex!("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493");
    let expected = hex!("95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957");

    do_rfc7748_ladder_test1(input_scalar, input_point, expected);
}

#[test]
fn rfc7748_ladder_test2() {
    let mut k: [u8; 32] = X25519_BASEPOINT_BYTES;
    let mut u: [u8; 32] = X25519_BASEPOINT_BYTES;
    let mut result: [u8; 32];

    macro_rules! do_iterations {
        ($n:expr) => {
            for _ in 0..$n {
                result = x25519(k, u);
                // Treating the previous scalar as a point is only sound for this test.
                u = k;
                k = result;
            }
        };
    }

    // After one iteration:
    //     422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079
    // After 1,000 iterations:
    //     684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51

    do_iterations!(1);
    assert_eq!(
        k,
        hex!("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079")
    );
    do_iterations!(999);
    assert_eq!(
        k,
        hex!("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51")
    );
}

#[test]
fn rfc7748_diffie_hellman() {
    let alice_secret = StaticSecret::from(hex!(
        "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a"
    ));
    let bob_secret = StaticSecret::from(hex!(
        "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb"
    ));

    let alice_public = PublicKey::from(&alice_secret);
    let bob_public = PublicKey::from(&bob_secret);
    assert_eq!(
        alice_public.to_bytes(),
        hex!("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
    );
    assert_eq!(
        bob_public.to_bytes(),
        hex!("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f")
    );

    let expected = hex!("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742");
    assert_eq!(alice_secret.diffie_hellman(&bob_public).to_bytes(), expected);
    assert_eq!(bob_secret.diffie_hellman(&alice_public).to_bytes(), expected);
}

#[test]
fn public_key_matches_ladder_on_basepoint() {
    let secret = StaticSecret::random_from_rng(&mut OsRng);
    let public = PublicKey::from(&secret);

    assert_eq!(
        public.to_bytes(),
        x25519(secret.to_bytes(), X25519_BASEPOINT_BYTES)
    );
}

#[test]
fn agreement_is_symmetric() {
    for _ in 0..16 {
        let a = StaticSecret::random_from_rng(&mut OsRng);
        let b = StaticSecret::random_from_rng(&mut OsRng);

        let ab = a.diffie_hellman(&PublicKey::from(&b));
        let ba = b.diffie_hellman(&PublicKey::from(&a));
        assert_eq!(ab.as_bytes(), ba.as_bytes());
        assert!(ab.was_contributory());
    }
}

#[test]
fn static_secret_keeps_unclamped_bytes() {
    let bytes = [0xffu8; 32];
    let secret = StaticSecret::from(bytes);
    assert_eq!(secret.to_bytes(), bytes);

    // Only the clamped scalar takes part in the multiplication.
    let mut clamped = bytes;
    clamped[0] &= 248;
    clamped[31] &= 127;
    clamped[31] |= 64;
    assert_eq!(
        PublicKey::from(&secret),
        PublicKey::from(&StaticSecret::from(clamped))
    );
}

#[test]
fn low_order_public_keys_are_not_contributory() {
    let secret = StaticSecret::random_from_rng(&mut OsRng);

    let mut one = [0u8; 32];
    one[0] = 1;
    let low_order = [
        [0u8; 32],
        one,
        hex!("e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800"),
        hex!("5f9c95bca3508c24b1d0b1559c83ef5b04445cc4581c8e86d8224eddd09f1157"),
    ];

    for point in low_order.iter() {
        let shared = secret.diffie_hellman(&PublicKey::from(*point));
        assert_eq!(shared.to_bytes(), [0u8; 32]);
        assert!(!shared.was_contributory());
        assert_eq!(x25519(secret.to_bytes(), *point), [0u8; 32]);
    }
}

#[test]
#[cfg(feature = "serde")]
fn serde_bincode_public_key_roundtrip() {
    let public_key = PublicKey::from(X25519_BASEPOINT_BYTES);

    let encoded = bincode::serialize(&public_key).unwrap();
    let decoded: PublicKey = bincode::deserialize(&encoded).unwrap();

    assert_eq!(encoded.len(), 32);
    assert_eq!(decoded.as_bytes(), public_key.as_bytes());
}
