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

//! x25519 Diffie-Hellman key agreement over the Montgomery ladder in
//! `curve25519-donna`.
//!
//! The byte-oriented [`x25519`] function is the RFC 7748 primitive.  The
//! typed API wraps it: a [`StaticSecret`] derives its [`PublicKey`] with a
//! fixed-base Edwards multiplication and agrees on a [`SharedSecret`] with
//! the ladder.
//!
//! ```
//! use x25519_donna::{PublicKey, StaticSecret};
//!
//! let alice = StaticSecret::from([0x11; 32]);
//! let bob = StaticSecret::from([0x22; 32]);
//!
//! let alice_shared = alice.diffie_hellman(&PublicKey::from(&bob));
//! let bob_shared = bob.diffie_hellman(&PublicKey::from(&alice));
//!
//! assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());
//! assert!(alice_shared.was_contributory());
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

mod x25519;

pub use crate::x25519::*;
