// -*- mode: rust; -*-
//
// This file is part of ed25519-donna.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! ed25519 signing keys.

use core::fmt::Debug;

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

use sha2::{Digest, Sha512};

use curve25519_donna::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_donna::scalar::{clamp_integer, Scalar};

use ed25519::signature::{Error, Signer, Verifier};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::*;
use crate::errors::*;
use crate::signature::*;
use crate::verifying::*;
use crate::Signature;

/// ed25519 secret key as defined in [RFC8032 § 5.1.5]:
///
/// > The private key is 32 octets (256 bits, corresponding to b) of
/// > cryptographically secure random data.
///
/// [RFC8032 § 5.1.5]: https://www.rfc-editor.org/rfc/rfc8032#section-5.1.5
pub type SecretKey = [u8; SECRET_KEY_LENGTH];

/// ed25519 signing key which can be used to produce signatures.
// Invariant: `verifying_key` is always the public key of
// `secret_key`. This prevents the signing function oracle attack
// described in https://github.com/MystenLabs/ed25519-unsafe-libs
#[derive(Clone)]
pub struct SigningKey {
    /// The secret half of this signing key.
    pub(crate) secret_key: SecretKey,
    /// The public half of this signing key.
    pub(crate) verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Construct a [`SigningKey`] from a [`SecretKey`]
    #[inline]
    pub fn from_bytes(secret_key: &SecretKey) -> Self {
        let verifying_key = VerifyingKey::from(&ExpandedSecretKey::from(secret_key));
        Self {
            secret_key: *secret_key,
            verifying_key,
        }
    }

    /// Convert this [`SigningKey`] into a [`SecretKey`]
    #[inline]
    pub fn to_bytes(&self) -> SecretKey {
        self.secret_key
    }

    /// Convert this [`SigningKey`] into a [`SecretKey`] reference
    #[inline]
    pub fn as_bytes(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Construct a [`SigningKey`] from the bytes of a `VerifyingKey` and `SecretKey`.
    ///
    /// # Inputs
    ///
    /// * `bytes`: an `&[u8]` of length [`KEYPAIR_LENGTH`], representing the
    ///   scalar for the secret key, and a compressed Edwards-Y coordinate of a
    ///   point on curve25519, both as bytes. (As obtained from
    ///   [`SigningKey::to_keypair_bytes`].)
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is an EdDSA [`SigningKey`] or whose error value
    /// is a `SignatureError` describing the error that occurred, namely that the
    /// two keys in the keypair do not correspond.
    #[inline]
    pub fn from_keypair_bytes(bytes: &[u8; KEYPAIR_LENGTH]) -> Result<SigningKey, SignatureError> {
        let mut secret_key = [0u8; SECRET_KEY_LENGTH];
        let mut verifying_key = [0u8; PUBLIC_KEY_LENGTH];
        secret_key.copy_from_slice(&bytes[..SECRET_KEY_LENGTH]);
        verifying_key.copy_from_slice(&bytes[SECRET_KEY_LENGTH..]);

        let signing_key = SigningKey::from_bytes(&secret_key);
        let verifying_key = VerifyingKey::from_bytes(&verifying_key)?;

        if signing_key.verifying_key() != verifying_key {
            return Err(InternalError::MismatchedKeypair.into());
        }

        Ok(signing_key)
    }

    /// Convert this signing key to a 64-byte keypair.
    ///
    /// # Returns
    ///
    /// An array of bytes, `[u8; KEYPAIR_LENGTH]`.  The first
    /// `SECRET_KEY_LENGTH` of bytes is the `SecretKey`, and the next
    /// `PUBLIC_KEY_LENGTH` bytes is the `VerifyingKey` (the same as other
    /// libraries, such as [Adam Langley's ed25519 Golang
    /// implementation](https://github.com/agl/ed25519/)).
    pub fn to_keypair_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        let mut bytes: [u8; KEYPAIR_LENGTH] = [0u8; KEYPAIR_LENGTH];

        bytes[..SECRET_KEY_LENGTH].copy_from_slice(&self.secret_key);
        bytes[SECRET_KEY_LENGTH..].copy_from_slice(self.verifying_key.as_bytes());
        bytes
    }

    /// Get the [`VerifyingKey`] for this [`SigningKey`].
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }

    /// Generate an ed25519 signing key.
    ///
    /// # Input
    ///
    /// A CSPRNG with a `fill_bytes()` method, e.g. `rand_core::OsRng`.
    #[cfg(feature = "rand_core")]
    pub fn generate<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> SigningKey {
        let mut secret = SecretKey::default();
        csprng.fill_bytes(&mut secret);
        Self::from_bytes(&secret)
    }

    /// Strictly verify a signature on a message with this signing key's public key.
    ///
    /// See [`VerifyingKey::verify_strict`] for what "strict" means here.
    pub fn verify_strict(
        &self,
        message: &[u8],
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        self.verifying_key.verify_strict(message, signature)
    }

    /// Returns the first half of the SHA-512 hash of the secret key, clamped.
    ///
    /// This is the scalar used as the X25519 private key when the Ed25519 key
    /// is also used for Diffie-Hellman.
    pub fn to_scalar_bytes(&self) -> [u8; 32] {
        let mut buf = [0u8; 32];
        let scalar_and_hash_prefix = Sha512::default().chain_update(self.secret_key).finalize();
        buf.copy_from_slice(&scalar_and_hash_prefix[..32]);
        clamp_integer(buf)
    }

    /// Returns the signing scalar \\(a\\), reduced mod \\( \ell \\).
    ///
    /// Multiplying this by the basepoint gives the point of this key's
    /// [`VerifyingKey`].
    pub fn to_scalar(&self) -> Scalar {
        // Per the invariant on ExpandedSecretKey, the scalar is already
        // reduced.
        ExpandedSecretKey::from(&self.secret_key).scalar
    }
}

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive() // avoids printing `secret_key`
    }
}

impl From<SecretKey> for SigningKey {
    #[inline]
    fn from(secret: SecretKey) -> Self {
        Self::from_bytes(&secret)
    }
}

impl From<&SecretKey> for SigningKey {
    #[inline]
    fn from(secret: &SecretKey) -> Self {
        Self::from_bytes(secret)
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<SigningKey, SignatureError> {
        SecretKey::try_from(bytes)
            .map(|bytes| Self::from_bytes(&bytes))
            .map_err(|_| {
                InternalError::BytesLength {
                    name: "SecretKey",
                    length: SECRET_KEY_LENGTH,
                }
                .into()
            })
    }
}

#[cfg(feature = "zeroize")]
impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SigningKey {}

impl Signer<Signature> for SigningKey {
    /// Sign a message with this signing key's secret key.
    fn try_sign(&self, message: &[u8]) -> Result<Signature, Error> {
        let expanded: ExpandedSecretKey = (&self.secret_key).into();
        Ok(raw_sign(&expanded, message, &self.verifying_key))
    }
}

impl Verifier<Signature> for SigningKey {
    /// Verify a signature on a message with this signing key's public key.
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), Error> {
        self.verifying_key.verify(message, signature)
    }
}

/// An "expanded" secret key.
///
/// SHA-512 of the `SecretKey`, split in half.  The lower half is clamped
/// (low three bits cleared, bit 254 set, bit 255 cleared) and becomes the
/// signing scalar.  The upper half is the prefix hashed together with each
/// message to derive the signature nonce.
///
/// It is recomputed for every signature and, with the `zeroize` feature,
/// overwritten with zeroes when dropped.
// Invariant: `scalar` MUST be reduced mod ℓ.
pub struct ExpandedSecretKey {
    /// The secret scalar used for signing
    pub scalar: Scalar,
    /// The domain separator used when hashing the message to generate the pseudorandom `r` value
    pub hash_prefix: [u8; 32],
}

#[cfg(feature = "zeroize")]
impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.hash_prefix.zeroize()
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for ExpandedSecretKey {}

impl From<&SecretKey> for ExpandedSecretKey {
    fn from(secret_key: &SecretKey) -> ExpandedSecretKey {
        let hash = Sha512::default().chain_update(secret_key).finalize();
        let mut lower: [u8; 32] = [0u8; 32];
        let mut upper: [u8; 32] = [0u8; 32];

        lower.copy_from_slice(&hash.as_slice()[00..32]);
        upper.copy_from_slice(&hash.as_slice()[32..64]);

        // [a]B only depends on a mod ℓ.
        let scalar = Scalar::from_bytes_mod_order(clamp_integer(lower));

        ExpandedSecretKey {
            scalar,
            hash_prefix: upper,
        }
    }
}

impl ExpandedSecretKey {
    /// Convert this `ExpandedSecretKey` into an array of 64 bytes: the
    /// reduced scalar followed by the hash prefix.
    pub fn to_bytes(&self) -> [u8; EXPANDED_SECRET_KEY_LENGTH] {
        let mut bytes: [u8; 64] = [0u8; 64];

        bytes[..32].copy_from_slice(self.scalar.as_bytes());
        bytes[32..].copy_from_slice(&self.hash_prefix[..]);
        bytes
    }
}

/// The plain, non-prehashed, signing function for Ed25519 (RFC 8032 §5.1.6).
///
/// `r = H(prefix ‖ M)`, `R = [r]B`, `k = H(R ‖ A ‖ M)`, `s = r + k·a`.
#[allow(non_snake_case)]
#[inline(always)]
pub(crate) fn raw_sign(
    expanded_secret_key: &ExpandedSecretKey,
    message: &[u8],
    verifying_key: &VerifyingKey,
) -> Signature {
    let mut h = Sha512::new();
    h.update(expanded_secret_key.hash_prefix);
    h.update(message);

    let r = Scalar::from_hash(h);
    let R: CompressedEdwardsY = EdwardsPoint::mul_base(&r).compress();

    h = Sha512::new();
    h.update(R.as_bytes());
    h.update(verifying_key.as_bytes());
    h.update(message);

    let k = Scalar::from_hash(h);
    let s: Scalar = (k * expanded_secret_key.scalar) + r;

    InternalSignature { R, s }.into()
}
