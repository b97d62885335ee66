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

//! Tables of small multiples of a point, for windowed multiplication.

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use crate::backend::serial::curve_models::{AffineNielsPoint, ProjectiveNielsPoint};
use crate::edwards::EdwardsPoint;
use crate::traits::Identity;

/// The eight points `first`, `first + step`, ..., `first + 7 step`,
/// each converted with `convert`.
fn progression<T>(
    first: &EdwardsPoint,
    step: &EdwardsPoint,
    convert: impl Fn(&EdwardsPoint) -> T,
) -> [T; 8] {
    let mut current = *first;
    core::array::from_fn(|_| {
        let entry = convert(&current);
        current = &current + step;
        entry
    })
}

/// \\(P, 2P, \ldots, 8P\\) for a point \\(P\\), read back in constant time.
///
/// There is deliberately no `Index` impl: entries come out through
/// [`LookupTable::select`] only.
#[derive(Copy, Clone, Debug, Default)]
pub struct LookupTable<T>(pub(crate) [T; 8]);

impl<T> LookupTable<T>
where
    T: Identity + ConditionallySelectable + ConditionallyNegatable,
{
    /// Return \\(xP\\) for \\(-8 \le x \le 8\\), touching every entry.
    pub fn select(&self, x: i8) -> T {
        debug_assert!((-8..=8).contains(&x));

        // Sign-extend, then |x| = (x ^ s) - s.
        let sign = x >> 7;
        let magnitude = ((x ^ sign) - sign) as u8;

        let mut chosen = T::identity();
        for (multiple, entry) in (1u8..).zip(self.0.iter()) {
            chosen.conditional_assign(entry, magnitude.ct_eq(&multiple));
        }
        chosen.conditional_negate(Choice::from((sign & 1) as u8));
        chosen
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<ProjectiveNielsPoint> {
    fn from(point: &'a EdwardsPoint) -> Self {
        LookupTable(progression(point, point, EdwardsPoint::as_projective_niels))
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<AffineNielsPoint> {
    fn from(point: &'a EdwardsPoint) -> Self {
        LookupTable(progression(point, point, EdwardsPoint::as_affine_niels))
    }
}

/// The odd multiples \\(A, 3A, \ldots, 15A\\), for width-5 NAF digits.
///
/// Lookups are by public digit and run in variable time.
#[derive(Copy, Clone, Debug)]
pub(crate) struct NafLookupTable5<T>(pub(crate) [T; 8]);

impl<T: Copy> NafLookupTable5<T> {
    /// Return \\(xA\\) for odd \\(0 < x < 16\\).
    pub fn select(&self, x: usize) -> T {
        debug_assert!(x % 2 == 1 && x < 16);
        self.0[x / 2]
    }
}

impl<'a> From<&'a EdwardsPoint> for NafLookupTable5<ProjectiveNielsPoint> {
    fn from(point: &'a EdwardsPoint) -> Self {
        NafLookupTable5(progression(point, &point.double(), EdwardsPoint::as_projective_niels))
    }
}

impl<'a> From<&'a EdwardsPoint> for NafLookupTable5<AffineNielsPoint> {
    fn from(point: &'a EdwardsPoint) -> Self {
        NafLookupTable5(progression(point, &point.double(), EdwardsPoint::as_affine_niels))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::backend::serial::u64::constants::AFFINE_ODD_MULTIPLES_OF_BASEPOINT;
    use crate::constants::ED25519_BASEPOINT_POINT;

    fn lift(entry: &ProjectiveNielsPoint) -> EdwardsPoint {
        (&EdwardsPoint::identity() + entry).as_extended()
    }

    #[test]
    fn select_returns_signed_multiples() {
        let b = ED25519_BASEPOINT_POINT;
        let table = LookupTable::<ProjectiveNielsPoint>::from(&b);

        let mut multiple = EdwardsPoint::identity();
        for x in 0..=8i8 {
            assert_eq!(lift(&table.select(x)), multiple);
            assert_eq!(lift(&table.select(-x)), -&multiple);
            multiple = &multiple + &b;
        }
    }

    #[test]
    fn naf_table_holds_odd_multiples() {
        let b = ED25519_BASEPOINT_POINT;
        let table = NafLookupTable5::<ProjectiveNielsPoint>::from(&b);
        for x in (1..16).step_by(2) {
            assert_eq!(lift(&table.select(x)), &b * &crate::scalar::Scalar::from(x as u64));
        }
    }

    #[test]
    fn hardcoded_basepoint_table_matches_computed() {
        let computed = NafLookupTable5::<AffineNielsPoint>::from(&ED25519_BASEPOINT_POINT);
        assert_eq!(computed.0, AFFINE_ODD_MULTIPLES_OF_BASEPOINT.0);
    }
}
