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

//! Integers modulo the group order \\(\ell\\) on five 52-bit limbs.
//!
//! Multiplication is Montgomery multiplication with \\(R = 2\^{260}\\).
//! 52-bit limbs are one bit wider than \\(\ell\\) strictly needs, which
//! leaves room to reduce a full 512-bit hash output.  A column of the
//! \\(5 \times 5\\) schoolbook product is at most
//! \\(5 (2\^{52} - 1)\^2 < 2\^{107}\\), well inside a `u128`.

use super::constants::{L, LFACTOR, R, RR};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

const LOW_52_BITS: u64 = (1u64 << 52) - 1;

/// An element of \\(\mathbb Z / \ell \mathbb Z\\) as five 52-bit limbs.
#[derive(Copy, Clone, Debug)]
pub struct Scalar52(pub [u64; 5]);

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar52 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[inline(always)]
fn wide(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Read little-endian `u64` words from `bytes`, which must hold `N * 8` bytes.
fn le_words<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), N * 8);
    let mut words = [0u64; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *word = u64::from_le_bytes(buf);
    }
    words
}

/// The 52 bits of the integer `words` starting at bit `start`, truncated at
/// the end of the last word.
fn limb_at(words: &[u64], start: usize) -> u64 {
    let (index, shift) = (start / 64, start % 64);
    let mut limb = words[index] >> shift;
    if shift > 12 && index + 1 < words.len() {
        limb |= words[index + 1] << (64 - shift);
    }
    limb & LOW_52_BITS
}

impl Scalar52 {
    /// The scalar \\( 0 \\).
    pub const ZERO: Scalar52 = Scalar52([0, 0, 0, 0, 0]);

    /// Split a 256-bit integer into limbs.  Bits 256 and up of the limb
    /// form are zero, so the result is not reduced.
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar52 {
        let words: [u64; 4] = le_words(bytes);
        Scalar52(core::array::from_fn(|i| limb_at(&words, 52 * i)))
    }

    /// Reduce a 512-bit integer modulo \\(\ell\\).
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar52 {
        let words: [u64; 8] = le_words(bytes);

        // bytes = lo + 2^260 hi, with both halves below 2^260.
        let lo = Scalar52(core::array::from_fn(|i| limb_at(&words, 52 * i)));
        let hi = Scalar52(core::array::from_fn(|i| limb_at(&words, 260 + 52 * i)));

        // lo R / R = lo and hi R^2 / R = hi R, both reduced.
        let lo = Scalar52::montgomery_mul(&lo, &R);
        let hi = Scalar52::montgomery_mul(&hi, &RR);

        Scalar52::add(&hi, &lo)
    }

    /// Encode as 32 little-endian bytes.  The limbs must each be below
    /// \\(2\^{52}\\) and the value below \\(2\^{256}\\).
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut words = [0u64; 4];
        for (i, &limb) in self.0.iter().enumerate() {
            let (index, shift) = ((52 * i) / 64, (52 * i) % 64);
            words[index] |= limb << shift;
            if shift > 12 && index + 1 < words.len() {
                words[index + 1] |= limb >> (64 - shift);
            }
        }

        let mut bytes = [0u8; 32];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    /// Compute `a + b mod l` for reduced `a` and `b`.
    pub fn add(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut sum = [0u64; 5];
        let mut carry = 0u64;
        for i in 0..5 {
            let t = a.0[i] + b.0[i] + carry;
            sum[i] = t & LOW_52_BITS;
            carry = t >> 52;
        }

        // a + b < 2l, so one conditional subtraction finishes the job.
        Scalar52::sub(&Scalar52(sum), &L)
    }

    /// Compute `a - b mod l` for `a, b < l`, or for `a < 2l` when `b = l`.
    pub fn sub(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut difference = [0u64; 5];
        let mut borrow = 0u64;
        for i in 0..5 {
            let t = a.0[i].wrapping_sub(b.0[i] + borrow);
            difference[i] = t & LOW_52_BITS;
            borrow = t >> 63;
        }

        // All ones when the difference went negative, in which case add l back.
        let add_back = 0u64.wrapping_sub(borrow);
        let mut carry = 0u64;
        for (limb, l) in difference.iter_mut().zip(L.0.iter()) {
            let t = *limb + (l & add_back) + carry;
            *limb = t & LOW_52_BITS;
            carry = t >> 52;
        }

        Scalar52(difference)
    }

    /// The nine product columns of `a * b`, unreduced.
    #[inline(always)]
    pub(crate) fn mul_internal(a: &Scalar52, b: &Scalar52) -> [u128; 9] {
        let mut columns = [0u128; 9];
        for i in 0..5 {
            for j in 0..5 {
                columns[i + j] += wide(a.0[i], b.0[j]);
            }
        }
        columns
    }

    /// The nine product columns of `a * a`, unreduced.
    #[inline(always)]
    fn square_internal(a: &Scalar52) -> [u128; 9] {
        let mut columns = [0u128; 9];
        for i in 0..5 {
            columns[2 * i] += wide(a.0[i], a.0[i]);
            for j in (i + 1)..5 {
                columns[i + j] += wide(2 * a.0[i], a.0[j]);
            }
        }
        columns
    }

    /// Montgomery reduction: compute `columns / R mod l`.
    ///
    /// Picks \\(n < R\\) so that `columns + n l` is divisible by \\(R\\),
    /// one 52-bit digit of \\(n\\) per low column, then keeps the high
    /// columns.
    #[inline(always)]
    pub(crate) fn montgomery_reduce(columns: &[u128; 9]) -> Scalar52 {
        let l = &L.0;
        let mut n = [0u64; 5];
        let mut carry = 0u128;

        for i in 0..5 {
            let mut sum = carry + columns[i];
            for j in 0..i {
                sum += wide(n[j], l[i - j]);
            }
            n[i] = (sum as u64).wrapping_mul(LFACTOR) & LOW_52_BITS;
            sum += wide(n[i], l[0]);
            debug_assert_eq!(sum as u64 & LOW_52_BITS, 0);
            carry = sum >> 52;
        }

        let mut quotient = [0u64; 5];
        for i in 5..9 {
            let mut sum = carry + columns[i];
            for j in (i - 4)..5 {
                sum += wide(n[j], l[i - j]);
            }
            quotient[i - 5] = (sum as u64) & LOW_52_BITS;
            carry = sum >> 52;
        }
        quotient[4] = carry as u64;

        // The quotient is below 2l.
        Scalar52::sub(&Scalar52(quotient), &L)
    }

    /// Compute `a * b mod l`.
    #[inline(never)]
    pub fn mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let ab_over_r = Scalar52::montgomery_mul(a, b);
        Scalar52::montgomery_mul(&ab_over_r, &RR)
    }

    /// Compute `a * b / R mod l`.
    #[inline(never)]
    pub fn montgomery_mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        Scalar52::montgomery_reduce(&Scalar52::mul_internal(a, b))
    }

    /// Compute `a^2 / R mod l`.
    #[inline(never)]
    pub fn montgomery_square(&self) -> Scalar52 {
        Scalar52::montgomery_reduce(&Scalar52::square_internal(self))
    }

    /// Move into Montgomery form: `a R mod l`.
    #[inline(never)]
    pub fn as_montgomery(&self) -> Scalar52 {
        Scalar52::montgomery_mul(self, &RR)
    }

    /// Move out of Montgomery form: `a / R mod l`.
    #[allow(clippy::wrong_self_convention)]
    #[inline(never)]
    pub fn from_montgomery(&self) -> Scalar52 {
        let mut columns = [0u128; 9];
        for (column, &limb) in columns.iter_mut().zip(self.0.iter()) {
            *column = limb as u128;
        }
        Scalar52::montgomery_reduce(&columns)
    }
}
