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

use crate::backend::serial::curve_models::{CompletedPoint, ProjectiveNielsPoint, ProjectivePoint};
use crate::backend::serial::u64::constants::AFFINE_ODD_MULTIPLES_OF_BASEPOINT;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::NafLookupTable5;

/// Compute \\([a]A + [b]B\\) in variable time, \\(B\\) the Ed25519 basepoint.
///
/// Both scalars are recoded in width-5 NAF and processed together, one
/// doubling per bit.  \\(A\\)'s odd multiples are computed here; \\(B\\)'s
/// are a hardcoded affine table.
#[allow(non_snake_case)]
pub(crate) fn mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> EdwardsPoint {
    let a_naf = a.non_adjacent_form(5);
    let b_naf = b.non_adjacent_form(5);

    let Some(top) = (0..256).rev().find(|&i| a_naf[i] != 0 || b_naf[i] != 0) else {
        return EdwardsPoint::identity();
    };

    let table_A = NafLookupTable5::<ProjectiveNielsPoint>::from(A);
    let table_B = &AFFINE_ODD_MULTIPLES_OF_BASEPOINT;

    let mut acc = ProjectivePoint::identity();
    for i in (0..=top).rev() {
        let mut t: CompletedPoint = acc.double();

        let digit = a_naf[i];
        if digit > 0 {
            t = &t.as_extended() + &table_A.select(digit as usize);
        } else if digit < 0 {
            t = &t.as_extended() - &table_A.select(digit.unsigned_abs() as usize);
        }

        let digit = b_naf[i];
        if digit > 0 {
            t = &t.as_extended() + &table_B.select(digit as usize);
        } else if digit < 0 {
            t = &t.as_extended() - &table_B.select(digit.unsigned_abs() as usize);
        }

        acc = t.as_projective();
    }

    acc.as_extended()
}
