// -*- mode: rust; -*-
//
// This file is part of curve25519-sigs.
// Copyright (c) 2026 The curve25519-sigs developers
// See LICENSE for licensing information.
//
// Authors:
// - The curve25519-sigs developers

//! Version-byte public keys and X25519 key pairs.
//!
//! Public keys travel as 33 bytes: the [`DJB_TYPE`] byte followed by the
//! 32-byte X25519 \\(u\\)-coordinate.  Every function that takes a public
//! key also accepts the bare 32 bytes.

use core::fmt::Debug;

use curve25519_donna::scalar::clamp_integer;

use log::debug;

use rand_core::CryptoRngCore;

use x25519_donna::{PublicKey, StaticSecret};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve_sigs::{curve25519_sign, curve25519_verify};
use crate::errors::{CurveError, Result};

/// Type byte prefixed to serialized Curve25519 public keys.
pub const DJB_TYPE: u8 = 0x05;

/// Length of a private key.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length of a bare public key.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of a public key with its type byte.
pub const SERIALIZED_PUBLIC_KEY_LENGTH: usize = 33;

/// Length of a signature.
pub const SIGNATURE_LENGTH: usize = 64;

/// Clamp an X25519 private key: clear the low three bits and the top bit,
/// and set bit 254.
///
/// Clamping is idempotent.
pub fn clamp_private_key(private_key: [u8; PRIVATE_KEY_LENGTH]) -> [u8; PRIVATE_KEY_LENGTH] {
    clamp_integer(private_key)
}

fn private_key_from_slice(private_key: &[u8]) -> Result<[u8; PRIVATE_KEY_LENGTH]> {
    private_key.try_into().map_err(|_| {
        debug!("rejecting private key of {} bytes", private_key.len());
        CurveError::InvalidPrivateKeyLength(private_key.len())
    })
}

/// Strip the type byte from a public key.
///
/// Accepts 33 bytes starting with [`DJB_TYPE`], or 32 bare bytes, and
/// returns the bare key.
///
/// # Errors
///
/// [`CurveError::UnknownKeyType`] for a 33-byte key with another prefix,
/// [`CurveError::InvalidPublicKeyLength`] for any other length.
pub fn validate_public_key_format(public_key: &[u8]) -> Result<[u8; PUBLIC_KEY_LENGTH]> {
    match public_key.len() {
        SERIALIZED_PUBLIC_KEY_LENGTH if public_key[0] == DJB_TYPE => {
            let mut bare = [0u8; PUBLIC_KEY_LENGTH];
            bare.copy_from_slice(&public_key[1..]);
            Ok(bare)
        }
        SERIALIZED_PUBLIC_KEY_LENGTH => {
            debug!("rejecting public key with type byte {:#04x}", public_key[0]);
            Err(CurveError::UnknownKeyType(public_key[0]))
        }
        PUBLIC_KEY_LENGTH => {
            let mut bare = [0u8; PUBLIC_KEY_LENGTH];
            bare.copy_from_slice(public_key);
            Ok(bare)
        }
        length => {
            debug!("rejecting public key of {} bytes", length);
            Err(CurveError::InvalidPublicKeyLength(length))
        }
    }
}

/// Compute the X25519 shared secret of `private_key` and `public_key`.
///
/// Low-order public keys are not rejected and yield the all-zero secret.
pub fn calculate_agreement(public_key: &[u8], private_key: &[u8]) -> Result<[u8; 32]> {
    let their_public = PublicKey::from(validate_public_key_format(public_key)?);
    let secret = StaticSecret::from(private_key_from_slice(private_key)?);

    let shared = secret.diffie_hellman(&their_public);
    if !shared.was_contributory() {
        debug!("key agreement with a low-order public key");
    }
    Ok(shared.to_bytes())
}

/// Sign `message` with an X25519 private key.
///
/// See [`curve25519_sign`](crate::curve25519_sign).
pub fn calculate_signature(private_key: &[u8], message: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
    let mut private_key = private_key_from_slice(private_key)?;
    let signature = curve25519_sign(&private_key, message);
    private_key.zeroize();
    Ok(signature)
}

/// Check `signature` on `message` against an X25519 public key.
///
/// Returns `Ok(true)` for a valid signature and `Ok(false)` for one that
/// does not verify.
///
/// # Errors
///
/// Malformed public keys and signatures of the wrong length are errors.
pub fn verify_signature(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let public_key = validate_public_key_format(public_key)?;
    let signature: &[u8; SIGNATURE_LENGTH] = signature.try_into().map_err(|_| {
        debug!("rejecting signature of {} bytes", signature.len());
        CurveError::InvalidSignatureLength(signature.len())
    })?;

    Ok(curve25519_verify(&public_key, message, signature).is_ok())
}

/// An X25519 key pair whose public half carries the [`DJB_TYPE`] byte.
///
/// The private key is stored clamped and wiped on drop.
#[derive(Clone)]
pub struct KeyPair {
    private_key: [u8; PRIVATE_KEY_LENGTH],
    public_key: [u8; SERIALIZED_PUBLIC_KEY_LENGTH],
}

impl KeyPair {
    /// Build a key pair from a 32-byte private key, clamping it.
    pub fn from_private_key(private_key: &[u8]) -> Result<KeyPair> {
        let mut private_key = private_key_from_slice(private_key)?;
        let pair = KeyPair::from_clamped(clamp_private_key(private_key));
        private_key.zeroize();
        Ok(pair)
    }

    /// Generate a key pair from 32 bytes of `csprng` output.
    pub fn generate<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> KeyPair {
        let secret = StaticSecret::random_from_rng(csprng);
        KeyPair::from_clamped(clamp_private_key(secret.to_bytes()))
    }

    fn from_clamped(private_key: [u8; PRIVATE_KEY_LENGTH]) -> KeyPair {
        let public = PublicKey::from(&StaticSecret::from(private_key));

        let mut public_key = [0u8; SERIALIZED_PUBLIC_KEY_LENGTH];
        public_key[0] = DJB_TYPE;
        public_key[1..].copy_from_slice(public.as_bytes());

        KeyPair {
            private_key,
            public_key,
        }
    }

    /// The clamped private key.
    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.private_key
    }

    /// The public key, prefixed with [`DJB_TYPE`].
    pub fn public_key(&self) -> &[u8; SERIALIZED_PUBLIC_KEY_LENGTH] {
        &self.public_key
    }

    /// Agree on a shared secret with `their_public_key`.
    pub fn calculate_agreement(&self, their_public_key: &[u8]) -> Result<[u8; 32]> {
        calculate_agreement(their_public_key, &self.private_key)
    }

    /// Sign `message` with this key pair.
    pub fn calculate_signature(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        curve25519_sign(&self.private_key, message)
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl ZeroizeOnDrop for KeyPair {}

#[cfg(test)]
mod test {
    use super::*;

    use hex_literal::hex;

    #[test]
    fn clamping_is_idempotent() {
        let once = clamp_private_key([0xff; 32]);
        assert_eq!(clamp_private_key(once), once);
        assert_eq!(once[0] & 7, 0);
        assert_eq!(once[31] & 0xc0, 0x40);
    }

    #[test]
    fn public_key_format() {
        let bare = [7u8; 32];
        let mut prefixed = [7u8; 33];
        prefixed[0] = DJB_TYPE;

        assert_eq!(validate_public_key_format(&bare), Ok(bare));
        assert_eq!(validate_public_key_format(&prefixed), Ok(bare));

        prefixed[0] = 0x06;
        assert_eq!(
            validate_public_key_format(&prefixed),
            Err(CurveError::UnknownKeyType(0x06))
        );
        assert_eq!(
            validate_public_key_format(&bare[..31]),
            Err(CurveError::InvalidPublicKeyLength(31))
        );
        assert_eq!(
            validate_public_key_format(&[]),
            Err(CurveError::InvalidPublicKeyLength(0))
        );
    }

    #[test]
    fn key_pair_from_rfc7748_private_key() {
        let private = hex!("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
        let pair = KeyPair::from_private_key(&private).unwrap();

        assert_eq!(pair.private_key(), &clamp_private_key(private));
        assert_eq!(pair.public_key()[0], DJB_TYPE);
        assert_eq!(
            pair.public_key()[1..],
            hex!("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
        );
    }

    #[test]
    fn key_pair_rejects_short_private_key() {
        assert_eq!(
            KeyPair::from_private_key(&[0u8; 31]).unwrap_err(),
            CurveError::InvalidPrivateKeyLength(31)
        );
    }

    #[test]
    fn debug_hides_the_private_key() {
        let pair = KeyPair::from_private_key(&[0x42; 32]).unwrap();
        let debug = format!("{:?}", pair);
        assert!(debug.starts_with("KeyPair"));
        assert!(!debug.contains("private"));
    }

    #[test]
    fn verify_signature_rejects_wrong_signature_length() {
        let pair = KeyPair::from_private_key(&[0x42; 32]).unwrap();
        assert_eq!(
            verify_signature(pair.public_key(), b"m", &[0u8; 63]),
            Err(CurveError::InvalidSignatureLength(63))
        );
    }
}
