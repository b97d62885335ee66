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

//! Integers modulo the group order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! The Ed25519 and X25519 basepoints both generate the subgroup of order
//! \\(\ell\\), so a [`Scalar`] is the natural multiplier for either.
//!
//! There are three ways in from bytes:
//!
//! * [`Scalar::from_bytes_mod_order`] reduces a 256-bit integer;
//! * [`Scalar::from_bytes_mod_order_wide`] reduces a 512-bit integer, such
//!   as a SHA-512 digest;
//! * [`Scalar::from_canonical_bytes`] accepts only integers already below
//!   \\(\ell\\), which is what signature verification needs.
//!
//! X25519 private keys are different: they are [clamped](clamp_integer)
//! and multiplied into points *without* reduction, since reducing would
//! change the product for points outside the prime-order subgroup.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "digest")]
use digest::generic_array::typenum::U64;
#[cfg(feature = "digest")]
use digest::Digest;

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::constants;
use crate::backend::serial::u64::scalar::Scalar52;

/// Limb form of a scalar, used for arithmetic.
type UnpackedScalar = Scalar52;

/// An integer modulo \\(\ell\\), stored as 32 little-endian bytes.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// Little-endian bytes of the integer.
    ///
    /// Bit 255 is always clear.  Every `Scalar` a caller can construct is
    /// reduced modulo \\(\ell\\); the crate builds unreduced ones only for
    /// clamped multiplication.
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// The scalar \\( 0 \\).
    pub const ZERO: Self = Self { bytes: [0u8; 32] };

    /// The scalar \\( 1 \\).
    pub const ONE: Self = {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        Self { bytes }
    };

    /// Reduce a 256-bit little-endian integer modulo \\(\ell\\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        let reduced = Scalar { bytes }.reduce();
        debug_assert_eq!(reduced.bytes[31] >> 7, 0);
        reduced
    }

    /// Reduce a 512-bit little-endian integer modulo \\(\ell\\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        UnpackedScalar::from_bytes_wide(input).pack()
    }

    /// Accept `bytes` only if they encode an integer below \\(\ell\\).
    ///
    /// An encoding with bit 255 set is rejected outright rather than masked.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> CtOption<Scalar> {
        let top_bit_clear = (bytes[31] >> 7).ct_eq(&0);
        let candidate = Scalar { bytes };
        CtOption::new(candidate, top_bit_clear & candidate.is_canonical())
    }

    /// A uniformly random scalar, from 64 bytes of `rng` output reduced
    /// modulo \\(\ell\\).
    #[cfg(feature = "rand_core")]
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    /// Hash `input` with `D` and reduce the 64-byte digest modulo \\(\ell\\).
    #[cfg(feature = "digest")]
    pub fn hash_from_bytes<D>(input: &[u8]) -> Scalar
    where
        D: Digest<OutputSize = U64> + Default,
    {
        let mut hash = D::default();
        hash.update(input);
        Scalar::from_hash(hash)
    }

    /// Finish a hash that was fed incrementally and reduce its 64-byte
    /// digest modulo \\(\ell\\).
    ///
    /// ```
    /// # use curve25519_donna::scalar::Scalar;
    /// use sha2::{Digest, Sha512};
    ///
    /// let mut h = Sha512::new();
    /// h.update(b"R");
    /// h.update(b"A");
    /// h.update(b"message");
    ///
    /// assert_eq!(
    ///     Scalar::from_hash(h),
    ///     Scalar::hash_from_bytes::<Sha512>(b"RAmessage"),
    /// );
    /// ```
    #[cfg(feature = "digest")]
    pub fn from_hash<D>(hash: D) -> Scalar
    where
        D: Digest<OutputSize = U64>,
    {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(hash.finalize().as_slice());
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    /// The scalar's 32 bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Borrow the scalar's 32 bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Compute \\(s\^{-1} \bmod \ell\\) as \\(s\^{\ell - 2}\\).
    ///
    /// `self` must be nonzero; zero maps to zero.
    pub fn invert(&self) -> Scalar {
        self.unpack().invert().pack()
    }

    /// The 256 bits of the scalar, least significant first.
    pub(crate) fn bits_le(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        (0..256).map(move |i| (self.bytes[i / 8] >> (i % 8)) & 1 == 1)
    }

    /// Recode into width-`w` non-adjacent form.
    ///
    /// Returns digits \\(n\_i\\) with \\(\sum n\_i 2\^i\\) equal to the
    /// scalar, where every nonzero digit is odd with
    /// \\(|n\_i| < 2\^{w-1}\\) and any \\(w\\) consecutive digits hold at
    /// most one nonzero.  Runs in variable time.  Requires
    /// \\(2 \le w \le 8\\) and bit 255 clear.
    pub(crate) fn non_adjacent_form(&self, w: usize) -> [i8; 256] {
        debug_assert!((2..=8).contains(&w));
        debug_assert_eq!(self.bytes[31] >> 7, 0);

        // A zero fifth word lets a window at the top read past bit 255.
        let mut words = [0u64; 5];
        for (word, chunk) in words.iter_mut().zip(self.bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }

        let window_mask = (1u64 << w) - 1;
        let window_at = |pos: usize| -> u64 {
            let (index, shift) = (pos / 64, pos % 64);
            let mut bits = words[index] >> shift;
            if shift > 64 - w {
                bits |= words[index + 1] << (64 - shift);
            }
            bits & window_mask
        };

        let mut naf = [0i8; 256];
        let half = 1u64 << (w - 1);
        let mut carry = 0u64;
        let mut pos = 0;
        while pos < 256 {
            let window = carry + window_at(pos);

            // An even window contributes a zero digit here; any carry moves
            // up with it.
            if window & 1 == 0 {
                pos += 1;
                continue;
            }

            if window < half {
                naf[pos] = window as i8;
                carry = 0;
            } else {
                naf[pos] = (window as i16 - (1i16 << w)) as i8;
                carry = 1;
            }
            pos += w;
        }

        naf
    }

    /// Recode into 64 signed radix-16 digits.
    ///
    /// Digits \\(a\_0, \ldots, a\_{62}\\) lie in \\([-8, 8)\\) and
    /// \\(a\_{63}\\) in \\([-8, 8]\\).  Requires bit 255 clear, which also
    /// holds for clamped integers.
    pub(crate) fn as_radix_16(&self) -> [i8; 64] {
        debug_assert!(self.bytes[31] <= 127);

        let mut digits = [0i8; 64];
        for (pair, byte) in digits.chunks_exact_mut(2).zip(self.bytes.iter()) {
            pair[0] = (byte & 0x0f) as i8;
            pair[1] = (byte >> 4) as i8;
        }

        // Move each digit from [0, 16) to [-8, 8), pushing the carry up.
        // The top digit starts at most 7 and absorbs a carry of at most 1.
        for i in 0..63 {
            let carry = (digits[i] + 8) >> 4;
            digits[i] -= carry << 4;
            digits[i + 1] += carry;
        }

        digits
    }

    /// Convert to limb form for arithmetic.
    pub(crate) fn unpack(&self) -> UnpackedScalar {
        UnpackedScalar::from_bytes(&self.bytes)
    }

    /// Reduce modulo \\(\ell\\): multiplying by \\(R\\) and Montgomery
    /// reducing leaves the value unchanged but in range.
    fn reduce(&self) -> Scalar {
        let times_r = UnpackedScalar::mul_internal(&self.unpack(), &constants::R);
        UnpackedScalar::montgomery_reduce(&times_r).pack()
    }

    fn is_canonical(&self) -> Choice {
        self.ct_eq(&self.reduce())
    }
}

/// Little-endian bytes of \\( \ell - 2 \\).
const L_MINUS_2: [u8; 32] = [
    0xeb, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

impl UnpackedScalar {
    fn pack(&self) -> Scalar {
        Scalar {
            bytes: self.to_bytes(),
        }
    }

    /// Left-to-right square-and-multiply in Montgomery form.  The exponent
    /// is public, so branching on its bits is fine.
    fn invert(&self) -> UnpackedScalar {
        let base = self.as_montgomery();
        let mut acc = constants::R;

        let exponent_bits = L_MINUS_2
            .iter()
            .rev()
            .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1));
        for bit in exponent_bits {
            acc = acc.montgomery_square();
            if bit {
                acc = UnpackedScalar::montgomery_mul(&acc, &base);
            }
        }

        acc.from_montgomery()
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scalar").field("bytes", &self.bytes).finish()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Scalar {}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Read-only access to byte `index` of the encoding.
    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Scalar {
            bytes: core::array::from_fn(|i| u8::conditional_select(&a.bytes[i], &b.bytes[i], choice)),
        }
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::mul(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> MulAssign<&'b Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self * rhs;
    }
}

define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    /// Both operands are reduced, so the limb addition's single
    /// conditional subtraction of \\(\ell\\) is enough.
    fn add(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::add(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> AddAssign<&'b Scalar> for Scalar {
    fn add_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::sub(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> SubAssign<&'b Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        UnpackedScalar::sub(&UnpackedScalar::ZERO, &self.unpack()).pack()
    }
}

define_neg_variant!(Scalar);

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

impl From<u8> for Scalar {
    fn from(x: u8) -> Scalar {
        Scalar::from(x as u64)
    }
}

impl From<u64> for Scalar {
    fn from(x: u64) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(32)?;
        for byte in self.bytes.iter() {
            tuple.serialize_element(byte)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CanonicalScalar;

        impl<'de> Visitor<'de> for CanonicalScalar {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("32 bytes encoding an integer below the group order")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Option::from(Scalar::from_canonical_bytes(bytes))
                    .ok_or_else(|| serde::de::Error::custom("scalar is not reduced"))
            }
        }

        deserializer.deserialize_tuple(32, CanonicalScalar)
    }
}

/// Clamp a 32-byte little-endian integer for use as an X25519 scalar.
///
/// Clears the low three bits, clears bit 255 and sets bit 254, giving a
/// value in \\(2\^{254} + 8 \cdot \\{0, 1, \ldots, 2\^{251} - 1\\}\\).  The
/// multiple of 8 kills any small-order component of the point it
/// multiplies, and the fixed top bit fixes the ladder's length.
#[must_use]
pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}
