// -*- mode: rust; -*-
//
// This file is part of ed25519-donna.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Ed25519 key generation, signing, and verification (RFC 8032 §5.1).
//!
//! # Example
//!
//! ```
//! use ed25519_donna::{Signature, Signer, SigningKey, Verifier};
//!
//! let signing_key = SigningKey::from_bytes(&[0x5a; 32]);
//! let message: &[u8] = b"This is a test of the tsunami alert system.";
//! let signature: Signature = signing_key.sign(message);
//!
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify(message, &signature).is_ok());
//! assert!(verifying_key.verify(b"another message", &signature).is_err());
//! ```
//!
//! Signing is deterministic: the nonce is derived by hashing the secret
//! prefix together with the message, so no randomness is consumed.

#![no_std]
#![warn(future_incompatible, rust_2018_idioms)]
#![deny(missing_docs)] // refuse to compile if documentation is missing
#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub use ed25519;

mod constants;
mod errors;
mod signature;
mod signing;
mod verifying;

pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::signing::*;
pub use crate::verifying::*;

// Re-export the `Signer` and `Verifier` traits from the `signature` crate
pub use ed25519::signature::{Signer, Verifier};
pub use ed25519::Signature;
