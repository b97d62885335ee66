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

//! Arithmetic modulo \\(p = 2\^{255} - 19\\) on five 51-bit limbs.
//!
//! An element is \\(\sum\_i l\_i 2\^{51i}\\).  Limbs may grow past 51
//! bits between operations; every operation accepts limbs below
//! \\(2\^{54}\\) and returns limbs below \\(2\^{51 + \epsilon}\\).  Only
//! [`FieldElement51::to_bytes`] produces the canonical residue.
//!
//! Products reduce with \\(2\^{255} \equiv 19\\): a limb product that
//! lands at weight \\(2\^{51k}\\) with \\(k \ge 5\\) is folded back to
//! \\(2\^{51(k-5)}\\) times 19.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

const LOW_51_BITS: u64 = (1u64 << 51) - 1;

/// \\(16p\\) in limb form.  Adding it before a subtraction keeps every
/// limb non-negative for subtrahends below \\(2\^{54}\\).
const SIXTEEN_P: [u64; 5] = [
    16 * (LOW_51_BITS - 18),
    16 * LOW_51_BITS,
    16 * LOW_51_BITS,
    16 * LOW_51_BITS,
    16 * LOW_51_BITS,
];

/// An element of \\(\mathbb Z / (2\^{255} - 19)\\), in radix \\(2\^{51}\\).
///
/// Aliased as `crate::field::FieldElement`.
#[derive(Copy, Clone, Debug)]
pub struct FieldElement51(pub(crate) [u64; 5]);

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement51 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[inline(always)]
fn wide(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

impl<'b> AddAssign<&'b FieldElement51> for FieldElement51 {
    fn add_assign(&mut self, rhs: &'b FieldElement51) {
        for (l, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            *l += *r;
        }
    }
}

impl<'a, 'b> Add<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;

    fn add(self, rhs: &'b FieldElement51) -> FieldElement51 {
        let mut sum = *self;
        sum += rhs;
        sum
    }
}

impl<'a, 'b> Sub<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;

    fn sub(self, rhs: &'b FieldElement51) -> FieldElement51 {
        FieldElement51::weak_reduce(core::array::from_fn(|i| {
            (self.0[i] + SIXTEEN_P[i]) - rhs.0[i]
        }))
    }
}

impl<'b> SubAssign<&'b FieldElement51> for FieldElement51 {
    fn sub_assign(&mut self, rhs: &'b FieldElement51) {
        *self = &*self - rhs;
    }
}

impl<'a, 'b> Mul<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;

    fn mul(self, rhs: &'b FieldElement51) -> FieldElement51 {
        let a = &self.0;
        let b = &rhs.0;
        debug_assert!(a.iter().chain(b.iter()).all(|&l| l < (1 << 54)));

        // With limbs below 2^54, each column is below 2^114.3, so the
        // carry out of it fits a u64.
        let mut columns = [0u128; 5];
        for i in 0..5 {
            for j in 0..5 {
                if i + j < 5 {
                    columns[i + j] += wide(a[i], b[j]);
                } else {
                    columns[i + j - 5] += wide(a[i], 19 * b[j]);
                }
            }
        }

        FieldElement51::carry_columns(columns)
    }
}

impl<'b> MulAssign<&'b FieldElement51> for FieldElement51 {
    fn mul_assign(&mut self, rhs: &'b FieldElement51) {
        *self = &*self * rhs;
    }
}

impl<'a> Neg for &'a FieldElement51 {
    type Output = FieldElement51;

    fn neg(self) -> FieldElement51 {
        let mut negated = *self;
        negated.negate();
        negated
    }
}

impl ConditionallySelectable for FieldElement51 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement51(core::array::from_fn(|i| {
            u64::conditional_select(&a.0[i], &b.0[i], choice)
        }))
    }

    fn conditional_assign(&mut self, other: &Self, choice: Choice) {
        for (l, r) in self.0.iter_mut().zip(other.0.iter()) {
            l.conditional_assign(r, choice);
        }
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        for (l, r) in a.0.iter_mut().zip(b.0.iter_mut()) {
            u64::conditional_swap(l, r, choice);
        }
    }
}

impl FieldElement51 {
    pub(crate) const fn from_limbs(limbs: [u64; 5]) -> FieldElement51 {
        FieldElement51(limbs)
    }

    /// The element \\( 0 \\).
    pub const ZERO: FieldElement51 = FieldElement51::from_limbs([0, 0, 0, 0, 0]);
    /// The element \\( 1 \\).
    pub const ONE: FieldElement51 = FieldElement51::from_limbs([1, 0, 0, 0, 0]);
    /// The element \\( -1 = p - 1 \\).
    pub const MINUS_ONE: FieldElement51 = FieldElement51::from_limbs([
        LOW_51_BITS - 19,
        LOW_51_BITS,
        LOW_51_BITS,
        LOW_51_BITS,
        LOW_51_BITS,
    ]);

    /// Replace `self` with \\(-\mathtt{self}\\).
    pub fn negate(&mut self) {
        *self = FieldElement51::weak_reduce(core::array::from_fn(|i| SIXTEEN_P[i] - self.0[i]));
    }

    /// Bring arbitrary `u64` limbs under \\(2\^{51 + \epsilon}\\).
    ///
    /// Carries are taken from every limb at once rather than rippled; the
    /// result is small but not canonical.
    #[inline(always)]
    fn weak_reduce(mut limbs: [u64; 5]) -> FieldElement51 {
        let carries: [u64; 5] = core::array::from_fn(|i| limbs[i] >> 51);
        for limb in limbs.iter_mut() {
            *limb &= LOW_51_BITS;
        }
        limbs[0] += 19 * carries[4];
        for i in 1..5 {
            limbs[i] += carries[i - 1];
        }
        FieldElement51(limbs)
    }

    /// Ripple the carries of five product columns into limbs.
    #[inline(always)]
    fn carry_columns(columns: [u128; 5]) -> FieldElement51 {
        let mut limbs = [0u64; 5];
        let mut carry = 0u64;
        for (limb, column) in limbs.iter_mut().zip(columns.iter()) {
            let value = *column + (carry as u128);
            *limb = (value as u64) & LOW_51_BITS;
            carry = (value >> 51) as u64;
        }

        // The last carry is below 2^59.4, so 19 times it still fits.
        limbs[0] += 19 * carry;
        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BITS;

        FieldElement51(limbs)
    }

    /// Decode the low 255 bits of `bytes`, little-endian.
    ///
    /// The top bit is ignored and the value is not reduced: the bytes of
    /// \\(p + 1\\) decode to an element equal to \\(1\\).
    pub const fn from_bytes(bytes: &[u8; 32]) -> FieldElement51 {
        const fn word(bytes: &[u8; 32], index: usize) -> u64 {
            let mut value = 0u64;
            let mut i = 0;
            while i < 8 {
                value |= (bytes[8 * index + i] as u64) << (8 * i);
                i += 1;
            }
            value
        }

        let w = [word(bytes, 0), word(bytes, 1), word(bytes, 2), word(bytes, 3)];

        FieldElement51([
            w[0] & LOW_51_BITS,
            ((w[0] >> 51) | (w[1] << 13)) & LOW_51_BITS,
            ((w[1] >> 38) | (w[2] << 26)) & LOW_51_BITS,
            ((w[2] >> 25) | (w[3] << 39)) & LOW_51_BITS,
            (w[3] >> 12) & LOW_51_BITS,
        ])
    }

    /// Encode the canonical residue in \\([0, p)\\) as 32 little-endian
    /// bytes.  The top bit of the output is always clear.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut l = FieldElement51::weak_reduce(self.0).0;

        // Now the value h is below 2p, so h mod p = h - q p with q in
        // {0, 1}, and q = 1 exactly when h + 19 carries into bit 255.
        let mut q = (l[0] + 19) >> 51;
        for limb in l.iter().skip(1) {
            q = (limb + q) >> 51;
        }

        // h - q p = h + 19 q - 2^255 q; the 2^255 q is the carry out of
        // the top limb, which is dropped.
        l[0] += 19 * q;
        for i in 0..4 {
            l[i + 1] += l[i] >> 51;
            l[i] &= LOW_51_BITS;
        }
        l[4] &= LOW_51_BITS;

        let words = [
            l[0] | (l[1] << 51),
            (l[1] >> 13) | (l[2] << 38),
            (l[2] >> 26) | (l[3] << 25),
            (l[3] >> 39) | (l[4] << 12),
        ];

        let mut bytes = [0u8; 32];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        debug_assert!(bytes[31] & 0x80 == 0);
        bytes
    }

    /// One squaring on raw limbs.  Cross terms \\(a\_i a\_j\\), \\(i < j\\),
    /// appear twice in the square and are computed once.
    #[inline(always)]
    fn square_limbs(a: &[u64; 5]) -> [u64; 5] {
        debug_assert!(a.iter().all(|&l| l < (1 << 54)));

        let mut columns = [0u128; 5];
        for i in 0..5 {
            for j in i..5 {
                let mut term = if i + j < 5 {
                    wide(a[i], a[j])
                } else {
                    wide(a[i], 19 * a[j])
                };
                if i != j {
                    term <<= 1;
                }
                columns[(i + j) % 5] += term;
            }
        }

        FieldElement51::carry_columns(columns).0
    }

    /// Compute \\(\mathtt{self}\^{2\^k}\\) for `k > 0`.
    pub fn pow2k(&self, k: u32) -> FieldElement51 {
        debug_assert!(k > 0);

        let mut limbs = self.0;
        for _ in 0..k {
            limbs = FieldElement51::square_limbs(&limbs);
        }
        FieldElement51(limbs)
    }

    /// Compute \\(\mathtt{self}\^2\\).
    pub fn square(&self) -> FieldElement51 {
        self.pow2k(1)
    }

    /// Compute \\(2 \cdot \mathtt{self}\^2\\).
    pub fn square2(&self) -> FieldElement51 {
        let mut doubled = self.square();
        for limb in doubled.0.iter_mut() {
            *limb <<= 1;
        }
        doubled
    }
}
