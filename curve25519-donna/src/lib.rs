// -*- mode: rust; -*-
//
// This file is part of curve25519-donna.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Field, scalar, Montgomery and Edwards arithmetic over Curve25519.
//!
//! This crate is the arithmetic core shared by `x25519-donna` (key
//! agreement on the Montgomery form) and `ed25519-donna` (signatures on
//! the twisted Edwards form).  It provides:
//!
//! * [`MontgomeryPoint`]: the \\(u\\)-coordinate of a point on
//!   Curve25519 or its twist, with a constant-time x-only ladder;
//! * [`EdwardsPoint`]: a point on edwards25519 in extended coordinates,
//!   with compression, strict decompression, constant-time variable-base
//!   and fixed-base multiplication, and a variable-time double-base
//!   multiplication for verification;
//! * [`Scalar`]: integers modulo the basepoint order \\( \ell \\).
//!
//! # Features
//!
//! * `precomputed-tables` (default): build the Ed25519 basepoint table
//!   once per process and use it for fixed-base multiplication;
//! * `zeroize` (default): wipe scalars and points on request;
//! * `rand_core`: `Scalar::random`;
//! * `digest`: `Scalar::from_hash` and `Scalar::hash_from_bytes`;
//! * `serde`: fixed-length tuple encodings of scalars and points.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::unwrap_used, missing_docs, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "digest")]
pub use digest;

// Operator variant macros, needed by every module below.
#[macro_use]
pub(crate) mod macros;

pub mod constants;
pub mod edwards;
pub mod montgomery;
pub mod scalar;
pub mod traits;

// GF(2^255 - 19)
pub(crate) mod field;

// Limb representations and the point models built on them.
pub(crate) mod backend;

pub(crate) mod window;

pub use crate::edwards::EdwardsPoint;
pub use crate::montgomery::MontgomeryPoint;
pub use crate::scalar::{clamp_integer, Scalar};
