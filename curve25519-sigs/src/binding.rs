// -*- mode: rust; -*-
//
// This file is part of curve25519-sigs.
// Copyright (c) 2026 The curve25519-sigs developers
// See LICENSE for licensing information.
//
// Authors:
// - The curve25519-sigs developers

//! The buffer-in, buffer-out surface.
//!
//! These three functions mirror a native extension's calling convention:
//! outputs are written into caller-owned buffers and status is an integer.
//! Buffer lengths are fixed by the types, so the only failure left is a
//! signature that does not verify.

use ed25519_donna::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use log::debug;

/// Status returned by [`verify`] for a valid signature.
pub const VERIFY_OK: i32 = 0;

/// Status returned by [`verify`] for anything else.
pub const VERIFY_FAILED: i32 = 1;

/// Write the X25519 product of `scalar` and the point `base` into `out`.
///
/// `scalar` is clamped first.  Low-order and degenerate inputs are not
/// rejected; the all-zero result is written as-is.  Always returns `0`.
pub fn donna(out: &mut [u8; 32], scalar: &[u8; 32], base: &[u8; 32]) -> i32 {
    *out = x25519_donna::x25519(*scalar, *base);
    0
}

/// Write the Ed25519 signature of `message` under the key expanded from
/// `seed` into `signature_out`.
///
/// Deterministic: the same seed and message always give the same bytes.
pub fn sign(signature_out: &mut [u8; 64], message: &[u8], seed: &[u8; 32]) {
    let signing_key = SigningKey::from_bytes(seed);
    *signature_out = signing_key.sign(message).to_bytes();
}

/// Check an Ed25519 `signature` on `message` under `public_key`.
///
/// Returns [`VERIFY_OK`] when the signature is valid and
/// [`VERIFY_FAILED`] otherwise, including for a public key or `R` that
/// does not decode and for a non-canonical `S`.
pub fn verify(signature: &[u8; 64], message: &[u8], public_key: &[u8; 32]) -> i32 {
    let verifying_key = match VerifyingKey::from_bytes(public_key) {
        Ok(key) => key,
        Err(err) => {
            debug!("rejecting signature: public key does not decode: {}", err);
            return VERIFY_FAILED;
        }
    };

    match verifying_key.verify(message, &Signature::from_bytes(signature)) {
        Ok(()) => VERIFY_OK,
        Err(err) => {
            debug!("rejecting signature: {}", err);
            VERIFY_FAILED
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use hex_literal::hex;

    const SEED: [u8; 32] = hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");
    const PUBLIC: [u8; 32] = hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c");
    const MESSAGE: [u8; 1] = [0x72];
    const SIGNATURE: [u8; 64] = hex!(
        "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da"
        "085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"
    );

    #[test]
    fn donna_returns_zero_and_writes_the_product() {
        let mut out = [0xaau8; 32];
        let scalar = hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
        let base = hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");

        assert_eq!(donna(&mut out, &scalar, &base), 0);
        assert_eq!(
            out,
            hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552")
        );
    }

    #[test]
    fn donna_writes_zero_for_a_zero_base() {
        let mut out = [0xaau8; 32];
        assert_eq!(donna(&mut out, &[0x42; 32], &[0u8; 32]), 0);
        assert_eq!(out, [0u8; 32]);
    }

    #[test]
    fn sign_matches_rfc8032_test_2() {
        let mut signature = [0u8; 64];
        sign(&mut signature, &MESSAGE, &SEED);
        assert_eq!(signature, SIGNATURE);
    }

    #[test]
    fn verify_accepts_rfc8032_test_2() {
        assert_eq!(verify(&SIGNATURE, &MESSAGE, &PUBLIC), VERIFY_OK);
    }

    #[test]
    fn verify_rejects_a_different_message() {
        assert_eq!(verify(&SIGNATURE, b"s", &PUBLIC), VERIFY_FAILED);
    }

    #[test]
    fn verify_rejects_an_undecodable_public_key() {
        // y = p is not a canonical encoding.
        let public = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
        assert_eq!(verify(&SIGNATURE, &MESSAGE, &public), VERIFY_FAILED);
    }

    #[test]
    fn verify_rejects_an_unreduced_s() {
        let mut signature = SIGNATURE;
        signature[63] |= 0x80;
        assert_eq!(verify(&signature, &MESSAGE, &PUBLIC), VERIFY_FAILED);
    }
}
