// -*- mode: rust; -*-
//
// This file is part of ed25519-donna.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Failure reasons for parsing keys and signatures and for verification.

use core::fmt;

/// Why an operation failed.  Callers see these only as the source of a
/// [`SignatureError`], and only with the `std` feature.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum InternalError {
    /// Bytes that should encode a curve point do not.
    PointDecompression,
    /// The `s` half of a signature is not below the group order.
    ScalarFormat,
    /// A constructor was handed a slice of the wrong length.
    BytesLength { name: &'static str, length: usize },
    /// \\([s]B \ne R + [k]A\\), or a strict check refused a small-order point.
    Verify,
    /// The public half of a keypair is not derived from its secret half.
    MismatchedKeypair,
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointDecompression => f.write_str("bytes are not a canonical curve point"),
            Self::ScalarFormat => f.write_str("signature scalar is not reduced"),
            Self::BytesLength { name, length } => write!(f, "{name} takes exactly {length} bytes"),
            Self::Verify => f.write_str("signature does not verify"),
            Self::MismatchedKeypair => f.write_str("public key does not match secret key"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InternalError {}

/// The opaque error returned by every fallible operation in this crate.
///
/// It is raised for a byte slice of the wrong length, a point that fails
/// to decode, a signature scalar that is not below \\(\ell\\), and a
/// signature that fails the verification equation.  Which one occurred
/// is available through [`std::error::Error::source`] when `std` is on.
pub type SignatureError = ed25519::signature::Error;

impl From<InternalError> for SignatureError {
    fn from(err: InternalError) -> SignatureError {
        #[cfg(feature = "std")]
        {
            SignatureError::from_source(err)
        }

        #[cfg(not(feature = "std"))]
        {
            let _ = err;
            SignatureError::new()
        }
    }
}
