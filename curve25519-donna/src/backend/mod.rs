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
//! **INTERNALS:** arithmetic backends.
//!
//! There is a single portable backend, [`serial`].  Point types reach
//! scalar multiplication through the two entry points here.

use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;

pub mod serial;

/// \\(sP\\) in constant time.
pub(crate) fn variable_base_mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    serial::scalar_mul::variable_base::mul(point, scalar)
}

/// \\(aA + bB\\) in variable time, \\(B\\) the Ed25519 basepoint.
#[allow(non_snake_case)]
pub(crate) fn vartime_double_base_mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> EdwardsPoint {
    serial::scalar_mul::vartime_double_base::mul(a, A, b)
}
