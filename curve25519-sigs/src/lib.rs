// -*- mode: rust; -*-
//
// This file is part of curve25519-sigs.
// Copyright (c) 2026 The curve25519-sigs developers
// See LICENSE for licensing information.
//
// Authors:
// - The curve25519-sigs developers

//! Curve25519 key agreement and signatures over plain byte buffers.
//!
//! Two layers sit on top of `x25519-donna` and `ed25519-donna`:
//!
//! * [`donna`], [`sign`] and [`verify`] take fixed-size buffers and return
//!   integer status codes, for callers that bind native code.
//! * [`KeyPair`], [`calculate_agreement`], [`calculate_signature`] and
//!   [`verify_signature`] work with X25519 keys only, with public keys
//!   carrying the [`DJB_TYPE`] prefix byte.  Signatures under these keys
//!   come from [`curve25519_sign`].
//!
//! Rejections are logged at `debug` level through the `log` facade.
//! Key and message bytes are never logged.
//!
//! ```
//! use curve25519_sigs::{calculate_agreement, verify_signature, KeyPair};
//!
//! let mut csprng = rand_core::OsRng;
//! let alice = KeyPair::generate(&mut csprng);
//! let bob = KeyPair::generate(&mut csprng);
//!
//! let shared = alice.calculate_agreement(bob.public_key())?;
//! assert_eq!(shared, calculate_agreement(alice.public_key(), bob.private_key())?);
//!
//! let signature = alice.calculate_signature(b"hello");
//! assert!(verify_signature(alice.public_key(), b"hello", &signature)?);
//! assert!(!verify_signature(bob.public_key(), b"hello", &signature)?);
//! # Ok::<(), curve25519_sigs::CurveError>(())
//! ```

#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

mod binding;
mod curve_sigs;
mod errors;
mod keys;

pub use crate::binding::*;
pub use crate::curve_sigs::*;
pub use crate::errors::*;
pub use crate::keys::*;
