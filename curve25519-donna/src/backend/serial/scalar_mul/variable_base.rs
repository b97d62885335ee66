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

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

/// Compute \\([s]P\\) in constant time with a fixed 4-bit signed window.
///
/// Any \\(s < 2\^{255}\\) works, including clamped integers that were
/// never reduced modulo \\(\ell\\).
pub(crate) fn mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    let table = LookupTable::<ProjectiveNielsPoint>::from(point);
    #[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
    let mut digits = scalar.as_radix_16();

    // Horner's rule, top digit first: acc <- 16 acc + d_i P.
    let mut acc = (&EdwardsPoint::identity() + &table.select(digits[63])).as_extended();
    for digit in digits[..63].iter().rev() {
        acc = acc.mul_by_pow_2(4);
        acc = (&acc + &table.select(*digit)).as_extended();
    }

    #[cfg(feature = "zeroize")]
    digits.zeroize();

    acc
}
