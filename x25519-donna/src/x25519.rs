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

//! X25519 key agreement over the Montgomery \\(u\\)-line, per RFC 7748.
//!
//! Public keys are never rejected.  A low-order peer key drives the shared
//! secret to all zeros; [`SharedSecret::was_contributory`] reports that case
//! for protocols that care.

use curve25519_donna::{edwards::EdwardsPoint, montgomery::MontgomeryPoint, traits::IsIdentity};

use rand_core::CryptoRngCore;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The \\(u\\)-coordinate of the X25519 basepoint, \\(u = 9\\).
pub const X25519_BASEPOINT_BYTES: [u8; 32] = {
    let mut bytes = [0u8; 32];
    bytes[0] = 9;
    bytes
};

/// Compute \\(\mathrm{X25519}(k, u)\\).
///
/// The scalar is clamped, bit 255 of `u` is masked, and the output is the
/// canonical encoding of the resulting \\(u\\)-coordinate.  Every input is
/// accepted.
///
/// # Example
///
/// ```
/// use rand_core::OsRng;
/// use x25519_donna::{x25519, PublicKey, StaticSecret, X25519_BASEPOINT_BYTES};
///
/// let ours = StaticSecret::random_from_rng(&mut OsRng);
/// let theirs = StaticSecret::random_from_rng(&mut OsRng);
///
/// // The bare function on the basepoint agrees with the typed public key.
/// let our_public = x25519(ours.to_bytes(), X25519_BASEPOINT_BYTES);
/// assert_eq!(our_public, PublicKey::from(&ours).to_bytes());
///
/// let their_public = PublicKey::from(&theirs).to_bytes();
/// assert_eq!(
///     x25519(ours.to_bytes(), their_public),
///     x25519(theirs.to_bytes(), our_public),
/// );
/// ```
pub fn x25519(k: [u8; 32], u: [u8; 32]) -> [u8; 32] {
    MontgomeryPoint(u).mul_clamped(k).to_bytes()
}

/// A peer's X25519 public key: 32 bytes holding a \\(u\\)-coordinate.
///
/// Public keys are not wiped on drop, but `Zeroize` is available for
/// callers who want it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct PublicKey(pub(crate) MontgomeryPoint);

impl PublicKey {
    /// The key's 32 bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Borrow the key's 32 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> PublicKey {
        PublicKey(MontgomeryPoint(bytes))
    }
}

impl<'a> From<&'a StaticSecret> for PublicKey {
    /// Derive the public key \\([k]B\\) of a secret \\(k\\).
    ///
    /// Goes through the Edwards basepoint table, then maps to Montgomery
    /// form, which is faster than running the ladder from \\(u = 9\\).
    fn from(secret: &'a StaticSecret) -> PublicKey {
        PublicKey(EdwardsPoint::mul_base_clamped(secret.0).to_montgomery())
    }
}

impl AsRef<[u8]> for PublicKey {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for PublicKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// A long-lived X25519 secret, reusable across any number of agreements.
///
/// Holds the bytes exactly as given.  Clamping is applied on each use, so
/// [`StaticSecret::to_bytes`] hands back the unclamped input.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone)]
pub struct StaticSecret([u8; 32]);

impl StaticSecret {
    /// Fill a new secret with 32 bytes from `csprng`.
    pub fn random_from_rng<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> Self {
        let mut secret = StaticSecret([0u8; 32]);
        csprng.fill_bytes(&mut secret.0);
        secret
    }

    /// Fill a new secret from the operating system's RNG.
    #[cfg(feature = "getrandom")]
    pub fn random() -> Self {
        Self::random_from_rng(&mut rand_core::OsRng)
    }

    /// Agree on a [`SharedSecret`] with the holder of `their_public`.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(their_public.0.mul_clamped(self.0))
    }

    /// Copy out the secret's bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Borrow the secret's bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for StaticSecret {
    fn from(bytes: [u8; 32]) -> StaticSecret {
        StaticSecret(bytes)
    }
}

impl AsRef<[u8]> for StaticSecret {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for StaticSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for StaticSecret {}

/// The 32-byte output of an agreement between a [`StaticSecret`] and a
/// [`PublicKey`].
///
/// Use it as input keying material; it is not uniformly random.
pub struct SharedSecret(pub(crate) MontgomeryPoint);

impl SharedSecret {
    /// Copy out the secret's bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Borrow the secret's bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    /// Whether the peer's key contributed to this secret.
    ///
    /// `false` exactly when the secret is all zeros, which is what any
    /// low-order public key (such as \\(u = 0\\)) produces regardless of our
    /// own secret.  The comparison runs in constant time.
    #[must_use]
    pub fn was_contributory(&self) -> bool {
        !self.0.is_identity()
    }
}

impl AsRef<[u8]> for SharedSecret {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SharedSecret {}
