// -*- mode: rust; -*-
//
// This file is part of curve25519-sigs.
// Copyright (c) 2026 The curve25519-sigs developers
// See LICENSE for licensing information.
//
// Authors:
// - The curve25519-sigs developers

//! EdDSA signatures made and checked with X25519 keys.
//!
//! An X25519 private key \\(a\\) (clamped) is also a valid Ed25519 signing
//! scalar, and its Edwards public key \\(A = [a]B\\) maps to the X25519
//! public key \\(u\\) under the birational map.  The map loses the sign of
//! \\(A\\)'s \\(x\\)-coordinate, so the signer stores that bit in the
//! otherwise unused top bit of the signature's last byte, where the
//! verifier picks it up again.
//!
//! The nonce is \\(r = H(\mathtt{0xFE} \| \mathtt{0xFF}^{31} \| a \| M)\\),
//! keyed on the private scalar itself since there is no seed to expand.

use curve25519_donna::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_donna::montgomery::MontgomeryPoint;
use curve25519_donna::scalar::{clamp_integer, Scalar};

use ed25519_donna::{Signature, Verifier, VerifyingKey};

use log::debug;

use sha2::{Digest, Sha512};

use zeroize::{Zeroize, Zeroizing};

use crate::errors::{CurveError, Result};

/// Domain separator hashed in front of the private scalar when deriving nonces.
const NONCE_PREFIX: [u8; 32] = {
    let mut prefix = [0xffu8; 32];
    prefix[0] = 0xfe;
    prefix
};

const SIGN_BIT: u8 = 0x80;

/// Sign `message` with the X25519 private key `private_key`.
///
/// The key is clamped before use, so raw and clamped private keys produce
/// the same signature.  Deterministic: no randomness is consumed.
#[allow(non_snake_case)]
pub fn curve25519_sign(private_key: &[u8; 32], message: &[u8]) -> [u8; 64] {
    let a_bytes = Zeroizing::new(clamp_integer(*private_key));
    let mut a = Scalar::from_bytes_mod_order(*a_bytes);

    let A: CompressedEdwardsY = EdwardsPoint::mul_base(&a).compress();
    let sign_bit = A.as_bytes()[31] & SIGN_BIT;

    let mut h = Sha512::new();
    h.update(NONCE_PREFIX);
    h.update(a_bytes.as_slice());
    h.update(message);

    let mut r = Scalar::from_hash(h);
    let R: CompressedEdwardsY = EdwardsPoint::mul_base(&r).compress();

    h = Sha512::new();
    h.update(R.as_bytes());
    h.update(A.as_bytes());
    h.update(message);

    let k = Scalar::from_hash(h);
    let s = (k * a) + r;

    a.zeroize();
    r.zeroize();

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(R.as_bytes());
    signature[32..].copy_from_slice(s.as_bytes());
    // s < 2^253, so its top bit is free.
    signature[63] |= sign_bit;
    signature
}

/// Verify a [`curve25519_sign`] signature against the X25519 public key
/// `public_key`.
///
/// # Errors
///
/// Returns [`CurveError::InvalidSignature`] when `public_key` is not the
/// \\(u\\)-coordinate of a point on the curve, when the recovered Edwards
/// key does not decode, or when the signature does not verify.
pub fn curve25519_verify(public_key: &[u8; 32], message: &[u8], signature: &[u8; 64]) -> Result<()> {
    let sign = signature[63] >> 7;

    let point = match MontgomeryPoint(*public_key).to_edwards(sign) {
        Some(point) => point,
        None => {
            debug!("rejecting signature: public key has no Edwards form");
            return Err(CurveError::InvalidSignature);
        }
    };
    let verifying_key = VerifyingKey::from(point);

    let mut bytes = *signature;
    bytes[63] &= !SIGN_BIT;

    verifying_key
        .verify(message, &Signature::from_bytes(&bytes))
        .map_err(|err| {
            debug!("rejecting signature: {}", err);
            CurveError::InvalidSignature
        })
}
