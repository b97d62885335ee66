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

//! Field operations built on top of the limb arithmetic.
//!
//! The backend supplies addition, multiplication, squaring and the byte
//! encoding.  This module adds what is expressed through those: equality,
//! the sign and zero tests, inversion, and the combined
//! inverse-square-root used by point decompression.

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use crate::backend::serial::u64::constants::SQRT_M1;

/// An element of \\(\mathbb Z / (2\^{255} - 19)\\).
pub(crate) type FieldElement = crate::backend::serial::u64::field::FieldElement51;

impl ConstantTimeEq for FieldElement {
    /// Limbs are not canonical, so compare encodings.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for FieldElement {}

impl FieldElement {
    /// `Choice(1)` when the canonical encoding is odd.
    ///
    /// This is the sign convention of Ed25519 point compression.
    pub(crate) fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// `Choice(1)` when `self` is \\(0 \bmod p\\).
    pub(crate) fn is_zero(&self) -> Choice {
        self.to_bytes().ct_eq(&[0u8; 32])
    }

    /// Return \\((x\^{2\^{250} - 1}, x\^{11})\\), the shared prefix of the
    /// exponentiations below.
    ///
    /// Each `x_n` holds \\(x\^{2\^n - 1}\\): squaring it \\(m\\) times and
    /// multiplying by `x_m` gives `x_{n+m}`.
    fn pow_2_250_minus_1(&self) -> (FieldElement, FieldElement) {
        let x2 = self.square();
        let x9 = self * &x2.pow2k(2);
        let x11 = &x9 * &x2;

        let x_5 = &x11.square() * &x9;
        let x_10 = &x_5.pow2k(5) * &x_5;
        let x_20 = &x_10.pow2k(10) * &x_10;
        let x_40 = &x_20.pow2k(20) * &x_20;
        let x_50 = &x_40.pow2k(10) * &x_10;
        let x_100 = &x_50.pow2k(50) * &x_50;
        let x_200 = &x_100.pow2k(100) * &x_100;
        let x_250 = &x_200.pow2k(50) * &x_50;

        (x_250, x11)
    }

    /// Compute \\(x\^{-1} = x\^{p-2}\\).  Zero maps to zero.
    pub(crate) fn invert(&self) -> FieldElement {
        // p - 2 = 2^255 - 21 = (2^250 - 1) * 2^5 + 11
        let (x_250, x11) = self.pow_2_250_minus_1();
        &x_250.pow2k(5) * &x11
    }

    /// Compute \\(x\^{(p-5)/8} = x\^{2\^{252} - 3}\\).
    fn pow_p58(&self) -> FieldElement {
        // 2^252 - 3 = (2^250 - 1) * 2^2 + 1
        let (x_250, _) = self.pow_2_250_minus_1();
        self * &x_250.pow2k(2)
    }

    /// Compute \\(\sqrt{u/v}\\) with a single exponentiation.
    ///
    /// Returns `(Choice(1), r)` with \\(v r\^2 = u\\) when \\(u/v\\) is a
    /// square (including \\(u = 0\\)), and `(Choice(0), r)` otherwise: then
    /// \\(r = \sqrt{i u / v}\\) when \\(v \ne 0\\), and \\(r = 0\\) when
    /// \\(v = 0\\).  The returned root is always non-negative.
    pub(crate) fn sqrt_ratio_i(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        // r = u v^3 (u v^7)^((p-5)/8) satisfies v r^2 = ±u or ±iu,
        // so one multiplication by sqrt(-1) repairs the wrong sign.
        let v3 = &v.square() * v;
        let v7 = &v3.square() * v;
        let mut r = &(u * &v3) * &(u * &v7).pow_p58();
        let v_r2 = v * &r.square();

        let minus_u = -u;
        let exact = v_r2.ct_eq(u);
        let flipped = v_r2.ct_eq(&minus_u);
        let flipped_i = v_r2.ct_eq(&(&minus_u * &SQRT_M1));

        let r_i = &SQRT_M1 * &r;
        r.conditional_assign(&r_i, flipped | flipped_i);

        let negative = r.is_negative();
        r.conditional_negate(negative);

        (exact | flipped, r)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use hex_literal::hex;

    const A: [u8; 32] = hex!("04fedf98a7fa0a688492bd590807a7039ed1f6f2e1d9e2a4a4514736f3c3a917");

    fn small(n: u64) -> FieldElement {
        FieldElement::from_limbs([n, 0, 0, 0, 0])
    }

    #[test]
    fn inverse_multiplies_to_one() {
        let a = FieldElement::from_bytes(&A);
        assert_eq!(&a * &a.invert(), FieldElement::ONE);
        assert_eq!(small(2).invert(), &small(2).invert().square() * &small(2));
        assert_eq!(FieldElement::MINUS_ONE.invert(), FieldElement::MINUS_ONE);
    }

    #[test]
    fn zero_has_no_inverse() {
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn pow_p58_to_the_eighth_is_inverse_fourth_power() {
        // (a^((p-5)/8))^8 = a^(p-5) = a^-4
        let a = FieldElement::from_bytes(&A);
        let a4 = a.pow2k(2);
        assert_eq!(&a.pow_p58().pow2k(3) * &a4, FieldElement::ONE);
    }

    #[test]
    fn square2_doubles_the_square() {
        let a = FieldElement::from_bytes(&A);
        let sq = a.square();
        assert_eq!(a.square2(), &sq + &sq);
    }

    #[test]
    fn bit_255_is_ignored_on_decode() {
        let mut high = A;
        high[31] |= 0x80;
        assert_eq!(FieldElement::from_bytes(&high), FieldElement::from_bytes(&A));
    }

    #[test]
    fn sign_and_zero() {
        assert!(bool::from(FieldElement::ZERO.is_zero()));
        assert!(!bool::from(FieldElement::MINUS_ONE.is_zero()));
        assert!(bool::from(small(3).is_negative()));
        // p - 1 is even, p - 2 is odd.
        assert!(!bool::from(FieldElement::MINUS_ONE.is_negative()));
        assert!(bool::from((-&small(2)).is_negative()));
    }

    #[test]
    fn sqrt_of_squares() {
        for n in [1u64, 4, 9, 25, 121] {
            let (was_square, r) = FieldElement::sqrt_ratio_i(&small(n), &FieldElement::ONE);
            assert!(bool::from(was_square));
            assert_eq!(r.square(), small(n));
            assert!(!bool::from(r.is_negative()));
        }

        let (was_square, r) = FieldElement::sqrt_ratio_i(&FieldElement::ONE, &small(9));
        assert!(bool::from(was_square));
        assert_eq!(&r.square() * &small(9), FieldElement::ONE);
    }

    #[test]
    fn sqrt_of_nonsquare_is_sqrt_of_i_times_it() {
        // 2 is not a square mod p.
        let (was_square, r) = FieldElement::sqrt_ratio_i(&small(2), &FieldElement::ONE);
        assert!(!bool::from(was_square));
        assert_eq!(r.square(), &small(2) * &SQRT_M1);
    }

    #[test]
    fn sqrt_with_zero_inputs() {
        let (was_square, r) = FieldElement::sqrt_ratio_i(&FieldElement::ZERO, &small(5));
        assert!(bool::from(was_square));
        assert_eq!(r, FieldElement::ZERO);

        let (was_square, r) = FieldElement::sqrt_ratio_i(&small(5), &FieldElement::ZERO);
        assert!(!bool::from(was_square));
        assert_eq!(r, FieldElement::ZERO);
    }

    #[test]
    fn conditional_negate_and_swap() {
        let mut x = FieldElement::ONE;
        x.conditional_negate(Choice::from(1));
        assert_eq!(x, FieldElement::MINUS_ONE);
        x.conditional_negate(Choice::from(0));
        assert_eq!(x, FieldElement::MINUS_ONE);

        let (mut p, mut q) = (small(7), small(8));
        FieldElement::conditional_swap(&mut p, &mut q, Choice::from(1));
        assert_eq!((p, q), (small(8), small(7)));
    }
}
