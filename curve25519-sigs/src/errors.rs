// -*- mode: rust; -*-
//
// This file is part of curve25519-sigs.
// Copyright (c) 2026 The curve25519-sigs developers
// See LICENSE for licensing information.
//
// Authors:
// - The curve25519-sigs developers

//! Errors returned by the key-handling layer.
//!
//! Messages never carry key or message bytes.

/// Everything that can go wrong before a curve operation runs.
///
/// Signature *mismatches* are not errors: [`crate::verify_signature`]
/// reports them as `Ok(false)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// A private key was not exactly 32 bytes long.
    #[error("private key must be 32 bytes, got {0}")]
    InvalidPrivateKeyLength(usize),

    /// A public key was neither 32 raw bytes nor 33 prefixed bytes.
    #[error("public key must be 32 bytes or 33 bytes with a type prefix, got {0}")]
    InvalidPublicKeyLength(usize),

    /// A 33-byte public key carried an unknown type byte.
    #[error("unknown public key type {0:#04x}")]
    UnknownKeyType(u8),

    /// A signature was not exactly 64 bytes long.
    #[error("signature must be 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// The signature did not verify under the given key.
    #[error("signature verification failed")]
    InvalidSignature,
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, CurveError>;
