// -*- mode: rust; -*-
//
// This file is part of ed25519-donna.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Signing and verification against published vectors and forgeries.

use curve25519_donna::constants::{BASEPOINT_ORDER_BYTES, EIGHT_TORSION};
use curve25519_donna::edwards::EdwardsPoint;
use curve25519_donna::scalar::Scalar;
use curve25519_donna::traits::IsIdentity;

use ed25519_donna::*;

use hex_literal::hex;
use sha2::{Digest, Sha512};

struct Vector {
    secret: [u8; 32],
    public: [u8; 32],
    message: &'static [u8],
    signature: [u8; 64],
}

/// RFC 8032, section 7.1, tests 1 to 3.
const RFC8032: [Vector; 3] = [
    Vector {
        secret: hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"),
        public: hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
        message: b"",
        signature: hex!(
            "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155"
            "5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
        ),
    },
    Vector {
        secret: hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb"),
        public: hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c"),
        message: &hex!("72"),
        signature: hex!(
            "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da"
            "085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"
        ),
    },
    Vector {
        secret: hex!("c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7"),
        public: hex!("fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025"),
        message: &hex!("af82"),
        signature: hex!(
            "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac"
            "18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a"
        ),
    },
];

#[test]
fn rfc8032_vectors() {
    for (n, v) in RFC8032.iter().enumerate() {
        let signing_key = SigningKey::from_bytes(&v.secret);
        let public = VerifyingKey::from_bytes(&v.public).unwrap();
        assert_eq!(signing_key.verifying_key(), public, "test {}", n + 1);

        let signature = signing_key.sign(v.message);
        assert_eq!(signature.to_bytes(), v.signature, "test {}", n + 1);

        let published = Signature::from_bytes(&v.signature);
        assert!(public.verify(v.message, &published).is_ok(), "test {}", n + 1);
        assert!(public.verify_strict(v.message, &published).is_ok(), "test {}", n + 1);
    }
}

#[test]
fn s_plus_l_is_rejected() {
    let v = &RFC8032[1];
    let public = VerifyingKey::from_bytes(&v.public).unwrap();

    // s + l names the same residue but is not below l.
    let mut malleated = v.signature;
    let mut carry = 0u16;
    for (byte, l) in malleated[32..].iter_mut().zip(BASEPOINT_ORDER_BYTES) {
        let sum = *byte as u16 + l as u16 + carry;
        *byte = sum as u8;
        carry = sum >> 8;
    }
    assert_eq!(carry, 0);

    let malleated = Signature::from_bytes(&malleated);
    assert!(public.verify(v.message, &malleated).is_err());
    assert!(public.verify_strict(v.message, &malleated).is_err());
}

#[test]
fn unreduced_r_is_rejected() {
    let v = &RFC8032[0];
    let public = VerifyingKey::from_bytes(&v.public).unwrap();

    let mut bad = v.signature;
    bad[..32].copy_from_slice(&hex!(
        "edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"
    ));
    assert!(public.verify(v.message, &Signature::from_bytes(&bad)).is_err());
}

/// A weak key \\(A\\) of order 2 accepts \\((R, s) = (sB, s)\\) for every
/// message whose challenge \\(k\\) is even.  Search small \\(s\\) for one
/// signature that covers two different messages.
#[test]
fn weak_key_signature_covers_two_messages() {
    let first: &[u8] = b"Send 100 USD to Alice";
    let second: &[u8] = b"Send 100000 USD to Alice";

    let a = EIGHT_TORSION[4];
    let public = VerifyingKey::from_bytes(a.compress().as_bytes()).unwrap();
    assert!(public.is_weak());

    let kills_a = |r: &EdwardsPoint, message: &[u8]| {
        let hash = Sha512::new()
            .chain_update(r.compress().as_bytes())
            .chain_update(public.as_bytes())
            .chain_update(message);
        (Scalar::from_hash(hash) * a).is_identity()
    };

    let (r, s) = (1u64..)
        .map(|n| {
            let s = Scalar::from(n);
            (EdwardsPoint::mul_base(&s), s)
        })
        .find(|(r, _)| kills_a(r, first) && kills_a(r, second))
        .unwrap();

    let mut bytes = [0u8; 64];
    bytes[..32].copy_from_slice(r.compress().as_bytes());
    bytes[32..].copy_from_slice(s.as_bytes());
    let forged = Signature::from_bytes(&bytes);

    for message in [first, second] {
        assert!(public.verify(message, &forged).is_ok());
        assert!(public.verify_strict(message, &forged).is_err());
    }
}

#[test]
fn keypair_bytes_hold_secret_then_public() {
    let v = &RFC8032[2];
    let signing_key = SigningKey::from_bytes(&v.secret);
    let keypair = signing_key.to_keypair_bytes();
    assert_eq!(keypair[..32], v.secret);
    assert_eq!(keypair[32..], v.public);
    assert_eq!(SigningKey::from_keypair_bytes(&keypair).unwrap().to_bytes(), v.secret);

    let mut mismatched = keypair;
    mismatched[32..].copy_from_slice(&RFC8032[0].public);
    assert!(SigningKey::from_keypair_bytes(&mismatched).is_err());
}

#[cfg(feature = "rand_core")]
mod generated_keys {
    use super::*;

    use rand::rngs::OsRng;
    use std::collections::HashSet;

    #[test]
    fn signatures_bind_the_message() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let public = signing_key.verifying_key();
        assert!(!public.is_weak());

        let (good, bad): (&[u8], &[u8]) = (b"test message", b"wrong message");
        let good_sig = signing_key.sign(good);
        let bad_sig = signing_key.sign(bad);

        assert!(signing_key.verify(good, &good_sig).is_ok());
        assert!(public.verify_strict(good, &good_sig).is_ok());
        assert!(public.verify(good, &bad_sig).is_err());
        assert!(public.verify_strict(bad, &good_sig).is_err());
    }

    #[test]
    fn any_single_bit_flip_is_rejected() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let public = signing_key.verifying_key();
        let message = *b"flip one bit anywhere";
        let signature = signing_key.sign(&message);

        for bit in 0..message.len() * 8 {
            let mut tampered = message;
            tampered[bit / 8] ^= 1 << (bit % 8);
            assert!(public.verify(&tampered, &signature).is_err());
        }

        for bit in 0..SIGNATURE_LENGTH * 8 {
            let mut tampered = signature.to_bytes();
            tampered[bit / 8] ^= 1 << (bit % 8);
            assert!(public.verify(&message, &Signature::from_bytes(&tampered)).is_err());
        }

        for bit in 0..PUBLIC_KEY_LENGTH * 8 {
            let mut tampered = public.to_bytes();
            tampered[bit / 8] ^= 1 << (bit % 8);
            if let Ok(key) = VerifyingKey::from_bytes(&tampered) {
                assert!(key.verify(&message, &signature).is_err());
            }
        }
    }

    #[test]
    fn verifying_keys_hash_by_encoding() {
        let first = SigningKey::generate(&mut OsRng).verifying_key();
        let second = SigningKey::generate(&mut OsRng).verifying_key();

        let mut keys = HashSet::new();
        assert!(keys.insert(first));
        assert!(!keys.insert(VerifyingKey::from_bytes(first.as_bytes()).unwrap()));
        assert!(keys.insert(second));
        assert_eq!(keys.len(), 2);
    }
}
