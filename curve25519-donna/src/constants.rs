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

//! Curve constants: basepoints, the group order and the torsion points.

use crate::edwards::CompressedEdwardsY;
use crate::montgomery::MontgomeryPoint;

#[cfg(feature = "precomputed-tables")]
use crate::edwards::EdwardsBasepointTable;

pub use crate::backend::serial::u64::constants::{ED25519_BASEPOINT_POINT, EIGHT_TORSION};

pub(crate) use crate::backend::serial::u64::constants::{APLUS2_OVER_FOUR, EDWARDS_D, EDWARDS_D2};

/// The encoded Ed25519 basepoint: \\(y = 4/5\\) with non-negative \\(x\\).
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
]);

/// The X25519 basepoint, \\(u = 9\\).
pub const X25519_BASEPOINT: MontgomeryPoint = MontgomeryPoint([
    0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// The order of the Ed25519 basepoint, little-endian:
/// $$
/// \ell = 2^\{252\} + 27742317777372353535851937790883648493.
/// $$
///
/// This is not a reduced `Scalar` (it reduces to zero), so it is kept as bytes.
pub const BASEPOINT_ORDER_BYTES: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// The basepoint table for [`ED25519_BASEPOINT_POINT`].
///
/// Built on first use, then shared read-only by all threads.
#[cfg(feature = "precomputed-tables")]
pub fn ed25519_basepoint_table() -> &'static EdwardsBasepointTable {
    static TABLE: std::sync::OnceLock<EdwardsBasepointTable> = std::sync::OnceLock::new();
    TABLE.get_or_init(|| EdwardsBasepointTable::create(&ED25519_BASEPOINT_POINT))
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::backend::serial::u64::constants::{MONTGOMERY_A, SQRT_M1};
    use crate::edwards::EdwardsPoint;
    use crate::field::FieldElement;
    use crate::scalar::Scalar;
    use crate::traits::{IsIdentity, ValidityCheck};

    fn small(n: u64) -> FieldElement {
        FieldElement::from_limbs([n, 0, 0, 0, 0])
    }

    /// Smallest k with 2^k P = O.
    fn log2_order(point: &EdwardsPoint) -> u32 {
        let mut k = 0;
        let mut q = *point;
        while !q.is_identity() {
            q = q.double();
            k += 1;
        }
        k
    }

    #[test]
    fn torsion_points_have_the_orders_of_their_index() {
        // Entry i is iP for a generator P of order 8.
        let expected = [0, 3, 2, 3, 1, 3, 2, 3];
        for (point, log2) in EIGHT_TORSION.iter().zip(expected) {
            assert!(point.is_valid());
            assert_eq!(log2_order(point), log2);
        }
    }

    #[test]
    fn curve_parameters() {
        assert_eq!(&EDWARDS_D * &small(121666), -&small(121665));
        assert_eq!(&EDWARDS_D + &EDWARDS_D, EDWARDS_D2);
        assert_eq!(&APLUS2_OVER_FOUR * &small(4), &MONTGOMERY_A + &small(2));

        assert_eq!(SQRT_M1.square(), FieldElement::MINUS_ONE);
        assert!(!bool::from(SQRT_M1.is_negative()));
    }

    #[test]
    fn basepoints_agree() {
        let b = ED25519_BASEPOINT_COMPRESSED.decompress().unwrap();
        assert_eq!(b, ED25519_BASEPOINT_POINT);
        assert!(b.is_valid());
        assert_eq!(b.to_montgomery(), X25519_BASEPOINT);
    }

    #[test]
    fn basepoint_order_is_l() {
        assert_eq!(Scalar::from_bytes_mod_order(BASEPOINT_ORDER_BYTES), Scalar::ZERO);

        let mut l_minus_one = BASEPOINT_ORDER_BYTES;
        l_minus_one[0] -= 1;
        assert_eq!((-Scalar::ONE).to_bytes(), l_minus_one);
    }

    #[test]
    #[cfg(feature = "precomputed-tables")]
    fn shared_table_is_built_once() {
        let table = ed25519_basepoint_table();
        assert!(core::ptr::eq(table, ed25519_basepoint_table()));
        assert_eq!(table.basepoint(), ED25519_BASEPOINT_POINT);
    }
}
