// -*- mode: rust; -*-
//
// This file is part of ed25519-donna.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Ed25519 public keys and signature verification.

use core::fmt;
use core::hash::{Hash, Hasher};

use curve25519_donna::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_donna::montgomery::MontgomeryPoint;
use curve25519_donna::scalar::Scalar;

use ed25519::signature::Verifier;

use sha2::{Digest, Sha512};

use crate::constants::PUBLIC_KEY_LENGTH;
use crate::errors::{InternalError, SignatureError};
use crate::signature::InternalSignature;
use crate::signing::{ExpandedSecretKey, SigningKey};

/// An Ed25519 public key \\(A = aB\\).
///
/// Keys compare and hash by their encoding.  Decoding only accepts
/// canonical encodings, so this agrees with equality of points.
#[derive(Copy, Clone, Default, Eq)]
pub struct VerifyingKey {
    // `point` always decompresses from `compressed`.
    pub(crate) compressed: CompressedEdwardsY,
    pub(crate) point: EdwardsPoint,
}

impl VerifyingKey {
    /// Decode a public key.
    ///
    /// # Errors
    ///
    /// The bytes are not the canonical encoding of a curve point.
    ///
    /// # Example
    ///
    /// ```
    /// use ed25519_donna::{SignatureError, VerifyingKey};
    ///
    /// # fn main() -> Result<(), SignatureError> {
    /// let bytes = [
    ///     0xd7, 0x5a, 0x98, 0x01, 0x82, 0xb1, 0x0a, 0xb7, 0xd5, 0x4b, 0xfe, 0xd3, 0xc9, 0x64,
    ///     0x07, 0x3a, 0x0e, 0xe1, 0x72, 0xf3, 0xda, 0xa6, 0x23, 0x25, 0xaf, 0x02, 0x1a, 0x68,
    ///     0xf7, 0x07, 0x51, 0x1a,
    /// ];
    /// let key = VerifyingKey::from_bytes(&bytes)?;
    /// assert_eq!(key.to_bytes(), bytes);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<VerifyingKey, SignatureError> {
        let compressed = CompressedEdwardsY(*bytes);
        let point = compressed
            .decompress()
            .ok_or(InternalError::PointDecompression)?;
        Ok(VerifyingKey { compressed, point })
    }

    /// The 32-byte encoding.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    /// The 32-byte encoding, borrowed.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.compressed.as_bytes()
    }

    /// Whether \\(A\\) has small order.  Anyone can forge signatures that
    /// such a key accepts for many messages; [`Self::verify_strict`]
    /// refuses them.
    pub fn is_weak(&self) -> bool {
        self.point.is_small_order()
    }

    /// The X25519 public key \\(u(A)\\) for the same secret scalar.
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        self.point.to_montgomery()
    }

    /// \\(k = H(R \| A \| M) \bmod \ell\\).
    fn challenge(&self, r: &CompressedEdwardsY, message: &[u8]) -> Scalar {
        let hash = Sha512::new()
            .chain_update(r.as_bytes())
            .chain_update(self.compressed.as_bytes())
            .chain_update(message);
        Scalar::from_hash(hash)
    }

    /// Decode `signature`, then compare \\([s]B - [k]A\\) with its \\(R\\)
    /// byte for byte.  `R` itself must decode; the decoded point is
    /// handed to `check_r` before the equation is evaluated.
    fn verify_with(
        &self,
        message: &[u8],
        signature: &ed25519::Signature,
        check_r: impl FnOnce(&EdwardsPoint) -> Result<(), InternalError>,
    ) -> Result<(), SignatureError> {
        let signature = InternalSignature::try_from(signature)?;
        let r = signature
            .R
            .decompress()
            .ok_or(InternalError::PointDecompression)?;
        check_r(&r)?;

        let k = self.challenge(&signature.R, message);
        let minus_a = -self.point;
        let expected_r =
            EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &minus_a, &signature.s);

        if expected_r.compress() == signature.R {
            Ok(())
        } else {
            Err(InternalError::Verify.into())
        }
    }

    /// Verify as [`Verifier::verify`] does, and also refuse a small-order
    /// \\(R\\) or a weak key.
    pub fn verify_strict(
        &self,
        message: &[u8],
        signature: &ed25519::Signature,
    ) -> Result<(), SignatureError> {
        self.verify_with(message, signature, |r| {
            if r.is_small_order() || self.is_weak() {
                Err(InternalError::Verify)
            } else {
                Ok(())
            }
        })
    }
}

impl Verifier<ed25519::Signature> for VerifyingKey {
    /// Accept the signature when \\(R\\) decodes, \\(s < \ell\\) and
    /// \\([s]B = R + [k]A\\).
    fn verify(&self, message: &[u8], signature: &ed25519::Signature) -> Result<(), SignatureError> {
        self.verify_with(message, signature, |_| Ok(()))
    }
}

impl From<EdwardsPoint> for VerifyingKey {
    fn from(point: EdwardsPoint) -> VerifyingKey {
        VerifyingKey {
            compressed: point.compress(),
            point,
        }
    }
}

impl From<&ExpandedSecretKey> for VerifyingKey {
    fn from(expanded: &ExpandedSecretKey) -> VerifyingKey {
        VerifyingKey::from(EdwardsPoint::mul_base(&expanded.scalar))
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key()
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<VerifyingKey, SignatureError> {
        let bytes = bytes.try_into().map_err(|_| InternalError::BytesLength {
            name: "VerifyingKey",
            length: PUBLIC_KEY_LENGTH,
        })?;
        VerifyingKey::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &VerifyingKey) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for VerifyingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VerifyingKey").field(&self.compressed).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use curve25519_donna::constants::{ED25519_BASEPOINT_POINT, EIGHT_TORSION};
    use ed25519::signature::Signer;

    #[test]
    fn from_bytes_rejects_unreduced_y() {
        // y = p aliases y = 0.
        let mut p = [0xffu8; 32];
        p[0] = 0xed;
        p[31] = 0x7f;
        assert!(VerifyingKey::from_bytes(&p).is_err());
    }

    #[test]
    fn try_from_checks_the_length() {
        let bytes = ED25519_BASEPOINT_POINT.compress().to_bytes();
        assert!(VerifyingKey::try_from(&bytes[..31]).is_err());
        assert_eq!(
            VerifyingKey::try_from(&bytes[..]).unwrap(),
            VerifyingKey::from(ED25519_BASEPOINT_POINT)
        );
    }

    #[test]
    fn torsion_points_are_weak() {
        assert!(EIGHT_TORSION.iter().all(|t| VerifyingKey::from(*t).is_weak()));
        assert!(!VerifyingKey::from(ED25519_BASEPOINT_POINT).is_weak());
    }

    #[test]
    fn undecodable_r_is_refused_before_the_equation() {
        let signing_key = SigningKey::from_bytes(&[7u8; 32]);
        let key = signing_key.verifying_key();
        let mut bytes = signing_key.sign(b"msg").to_bytes();

        // y = 2 has no matching x.
        bytes[..32].copy_from_slice(&[0u8; 32]);
        bytes[0] = 2;
        let forged = ed25519::Signature::from_bytes(&bytes);
        assert!(key.verify(b"msg", &forged).is_err());
        assert!(key.verify_strict(b"msg", &forged).is_err());
    }

    #[test]
    fn strict_verification_refuses_small_order_r() {
        // With A of small order and R = -kA, s = 0 satisfies the equation.
        let key = VerifyingKey::from(EIGHT_TORSION[0]);
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(EIGHT_TORSION[0].compress().as_bytes());
        let forged = ed25519::Signature::from_bytes(&bytes);

        assert!(key.verify(b"anything", &forged).is_ok());
        assert!(key.verify_strict(b"anything", &forged).is_err());
    }
}
