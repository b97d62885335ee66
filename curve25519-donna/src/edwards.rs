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

//! Points on edwards25519, \\(-x\^2 + y\^2 = 1 + dx\^2y\^2\\).
//!
//! Points travel as a [`CompressedEdwardsY`]: the little-endian
//! \\(y\\)-coordinate in the low 255 bits and the sign of \\(x\\) in bit
//! 255.  [`CompressedEdwardsY::decompress`] is strict.  It refuses a
//! \\(y\\) that is not reduced modulo \\(p\\), a sign bit set on
//! \\(x = 0\\), and any \\(y\\) with no matching \\(x\\).  So every point
//! has exactly one accepted encoding.
//!
//! An [`EdwardsPoint`] keeps extended coordinates \\((X:Y:Z:T)\\).
//! Equality compares cross products in constant time and never inverts.
//!
//! # Multiplication
//!
//! * `scalar * point`: constant time, any point;
//! * [`EdwardsPoint::mul_base`]: constant time, the Ed25519 basepoint,
//!   served from a process-wide table under `precomputed-tables`;
//! * [`EdwardsBasepointTable::mul_base`]: constant time, a table built
//!   for any fixed point;
//! * [`EdwardsPoint::vartime_double_scalar_mul_basepoint`]: \\(aA + bB\\)
//!   in variable time.  Only use it on public inputs.
//!
//! # Torsion
//!
//! The curve has \\(8\ell\\) points.  [`EdwardsPoint::is_small_order`]
//! tests membership in the eight-point torsion subgroup and
//! [`EdwardsPoint::is_torsion_free`] tests membership in the subgroup of
//! order \\(\ell\\).

#![allow(non_snake_case)]

use core::array::TryFromSliceError;
use core::fmt::{self, Debug};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::de::{SeqAccess, Visitor};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend;
use crate::backend::serial::curve_models::{AffineNielsPoint, ProjectiveNielsPoint, ProjectivePoint};
use crate::constants;
use crate::field::FieldElement;
use crate::montgomery::MontgomeryPoint;
use crate::scalar::{clamp_integer, Scalar};
use crate::traits::{Identity, IsIdentity, ValidityCheck};
use crate::window::LookupTable;

/// The 32-byte wire form of an edwards25519 point.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl CompressedEdwardsY {
    /// The encoded bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// A copy of the encoded bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Decode to an [`EdwardsPoint`], or `None` unless these bytes are the
    /// canonical encoding of a curve point.
    pub fn decompress(&self) -> Option<EdwardsPoint> {
        let sign = Choice::from(self.0[31] >> 7);
        let mut y_bytes = self.0;
        y_bytes[31] &= 0x7f;

        let y = FieldElement::from_bytes(&y_bytes);
        let y_is_canonical = y.to_bytes().ct_eq(&y_bytes);

        // x^2 = (y^2 - 1) / (d y^2 + 1); the denominator never vanishes.
        let yy = y.square();
        let numerator = &yy - &FieldElement::ONE;
        let denominator = &(&yy * &constants::EDWARDS_D) + &FieldElement::ONE;
        let (is_square, mut x) = FieldElement::sqrt_ratio_i(&numerator, &denominator);

        // The root is non-negative, and x = 0 has no negative encoding.
        let negative_zero = x.is_zero() & sign;
        if !bool::from(y_is_canonical & is_square & !negative_zero) {
            return None;
        }
        x.conditional_negate(sign);

        Some(EdwardsPoint {
            X: x,
            Y: y,
            Z: FieldElement::ONE,
            T: &x * &y,
        })
    }

    /// Wrap a 32-byte slice.
    ///
    /// # Errors
    ///
    /// [`TryFromSliceError`] when `bytes` is not exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        bytes.try_into().map(CompressedEdwardsY)
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        CompressedEdwardsY::from_slice(bytes)
    }
}

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &CompressedEdwardsY) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for CompressedEdwardsY {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for CompressedEdwardsY {}

impl Debug for CompressedEdwardsY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompressedEdwardsY").field(&self.0).finish()
    }
}

impl Identity for CompressedEdwardsY {
    fn identity() -> CompressedEdwardsY {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        CompressedEdwardsY(bytes)
    }
}

impl Default for CompressedEdwardsY {
    fn default() -> CompressedEdwardsY {
        CompressedEdwardsY::identity()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for CompressedEdwardsY {
    /// Overwrite with the encoding of the identity.
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.0[0] = 1;
    }
}

// Both types serialize as a bare 32-byte tuple; a point decompresses on the way in.

#[cfg(feature = "serde")]
fn serialize_bytes<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeTuple;

    let mut tuple = serializer.serialize_tuple(32)?;
    for byte in bytes {
        tuple.serialize_element(byte)?;
    }
    tuple.end()
}

#[cfg(feature = "serde")]
fn read_32_bytes<'de, A: SeqAccess<'de>>(
    mut seq: A,
    expected: &dyn serde::de::Expected,
) -> Result<[u8; 32], A::Error> {
    let mut bytes = [0u8; 32];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(i, expected))?;
    }
    Ok(bytes)
}

#[cfg(feature = "serde")]
impl Serialize for CompressedEdwardsY {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_bytes(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl Serialize for EdwardsPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_bytes(&self.compress().0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CompressedVisitor;

        impl<'de> Visitor<'de> for CompressedVisitor {
            type Value = CompressedEdwardsY;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("32 bytes")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
                read_32_bytes(seq, &self).map(CompressedEdwardsY)
            }
        }

        deserializer.deserialize_tuple(32, CompressedVisitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EdwardsPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PointVisitor;

        impl<'de> Visitor<'de> for PointVisitor {
            type Value = EdwardsPoint;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("the canonical 32-byte encoding of an edwards25519 point")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
                let bytes = read_32_bytes(seq, &self)?;
                CompressedEdwardsY(bytes)
                    .decompress()
                    .ok_or_else(|| serde::de::Error::custom("not a canonical point encoding"))
            }
        }

        deserializer.deserialize_tuple(32, PointVisitor)
    }
}

/// A point on edwards25519 in extended coordinates: \\(x = X/Z\\),
/// \\(y = Y/Z\\), \\(xy = T/Z\\).
#[derive(Copy, Clone)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    /// Overwrite with the identity.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
        self.T.zeroize();
    }
}

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        self.as_projective().is_valid() && &self.X * &self.Y == &self.Z * &self.T
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        let pick = |p: &FieldElement, q: &FieldElement| FieldElement::conditional_select(p, q, choice);
        EdwardsPoint {
            X: pick(&a.X, &b.X),
            Y: pick(&a.Y, &b.Y),
            Z: pick(&a.Z, &b.Z),
            T: pick(&a.T, &b.T),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // X/Z = X'/Z' iff XZ' = X'Z, and likewise for Y.
        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdwardsPoint")
            .field("X", &self.X)
            .field("Y", &self.Y)
            .field("Z", &self.Z)
            .field("T", &self.T)
            .finish()
    }
}

impl EdwardsPoint {
    /// Cache \\((Y+X, Y-X, Z, 2dT)\\) for use as the right operand of additions.
    pub(crate) fn as_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: &self.Y + &self.X,
            Y_minus_X: &self.Y - &self.X,
            Z: self.Z,
            T2d: &self.T * &constants::EDWARDS_D2,
        }
    }

    /// Drop \\(T\\).
    pub(crate) const fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Normalize to \\((y+x, y-x, 2dxy)\\).  Costs an inversion.
    pub(crate) fn as_affine_niels(&self) -> AffineNielsPoint {
        let (x, y) = self.to_affine();
        AffineNielsPoint {
            y_plus_x: &y + &x,
            y_minus_x: &y - &x,
            xy2d: &(&x * &y) * &constants::EDWARDS_D2,
        }
    }

    fn to_affine(&self) -> (FieldElement, FieldElement) {
        let z_inv = self.Z.invert();
        (&self.X * &z_inv, &self.Y * &z_inv)
    }

    /// The Montgomery \\(u\\)-coordinate of this point, \\(u = (1+y)/(1-y)\\).
    ///
    /// The sign of \\(x\\) is lost.  The identity, where \\(1 - y = 0\\),
    /// goes to \\(u = 0\\) because inverting zero yields zero.
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        let numerator = &self.Z + &self.Y;
        let denominator = &self.Z - &self.Y;
        MontgomeryPoint((&numerator * &denominator.invert()).to_bytes())
    }

    /// Encode as \\(y\\) with the sign of \\(x\\) in the top bit.
    pub fn compress(&self) -> CompressedEdwardsY {
        let (x, y) = self.to_affine();
        let mut bytes = y.to_bytes();
        bytes[31] |= x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(bytes)
    }

    /// \\(2P\\).
    pub fn double(&self) -> EdwardsPoint {
        self.as_projective().double().as_extended()
    }

    /// \\(2\^k P\\) for \\(k \ge 1\\), staying projective between doublings.
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut p = self.as_projective();
        for _ in 1..k {
            p = p.double().as_projective();
        }
        p.double().as_extended()
    }

    /// \\(8P\\).
    pub fn mul_by_cofactor(&self) -> EdwardsPoint {
        self.mul_by_pow_2(3)
    }

    /// Whether \\(8P\\) is the identity, i.e. \\(P\\) is one of the eight
    /// torsion points.
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Whether \\(\ell P\\) is the identity, i.e. \\(P\\) has no torsion
    /// component.
    pub fn is_torsion_free(&self) -> bool {
        // l itself reduces to zero, but the ladder only needs it below 2^255.
        let order = Scalar {
            bytes: constants::BASEPOINT_ORDER_BYTES,
        };
        (self * order).is_identity()
    }
}

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &other.as_projective_niels()).as_extended()
    }
}

define_add_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> AddAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, rhs: &'b EdwardsPoint) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self - &other.as_projective_niels()).as_extended()
    }
}

define_sub_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> SubAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, rhs: &'b EdwardsPoint) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -&self.X,
            Y: self.Y,
            Z: self.Z,
            T: -&self.T,
        }
    }
}

define_neg_variant!(EdwardsPoint);

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    /// Constant-time \\(sP\\).  Prefer a basepoint table for fixed points.
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        backend::variable_base_mul(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;

    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

define_mul_variants!(LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_mul_variants!(LHS = Scalar, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> MulAssign<&'b Scalar> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        *self = &*self * scalar;
    }
}

define_mul_assign_variants!(LHS = EdwardsPoint, RHS = Scalar);

impl EdwardsPoint {
    /// \\(sB\\) for the Ed25519 basepoint \\(B\\), in constant time.
    pub fn mul_base(scalar: &Scalar) -> EdwardsPoint {
        #[cfg(feature = "precomputed-tables")]
        {
            constants::ed25519_basepoint_table().mul_base(scalar)
        }

        #[cfg(not(feature = "precomputed-tables"))]
        {
            &constants::ED25519_BASEPOINT_POINT * scalar
        }
    }

    /// \\(cP\\) where \\(c\\) is `bytes` after [`clamp_integer`].
    pub fn mul_clamped(self, bytes: [u8; 32]) -> EdwardsPoint {
        // A clamped integer sits below 2^255, which is all the windowed
        // multiplication needs; it is never reduced.
        let clamped = Scalar {
            bytes: clamp_integer(bytes),
        };
        &self * &clamped
    }

    /// \\(cB\\) where \\(c\\) is `bytes` after [`clamp_integer`].
    pub fn mul_base_clamped(bytes: [u8; 32]) -> EdwardsPoint {
        let clamped = Scalar {
            bytes: clamp_integer(bytes),
        };
        EdwardsPoint::mul_base(&clamped)
    }

    /// \\(aA + bB\\) for the Ed25519 basepoint \\(B\\).
    ///
    /// Runs in variable time.  The scalars and `A` must be public.
    pub fn vartime_double_scalar_mul_basepoint(
        a: &Scalar,
        A: &EdwardsPoint,
        b: &Scalar,
    ) -> EdwardsPoint {
        backend::vartime_double_base_mul(a, A, b)
    }
}

/// Precomputed multiples of a fixed point \\(P\\) for constant-time
/// fixed-base multiplication.
///
/// Entry \\(i\\) holds \\(P, 2P, \ldots, 8P\\) scaled by \\(16\^{2i}\\).  The
/// whole table is about 30 KiB; [`constants::ed25519_basepoint_table`]
/// keeps one for the Ed25519 basepoint.
#[derive(Clone)]
#[repr(transparent)]
pub struct EdwardsBasepointTable(pub(crate) [LookupTable<AffineNielsPoint>; 32]);

impl EdwardsBasepointTable {
    /// Build the table for `basepoint`.
    pub fn create(basepoint: &EdwardsPoint) -> EdwardsBasepointTable {
        let mut step = *basepoint;
        EdwardsBasepointTable(core::array::from_fn(|_| {
            let entry = LookupTable::from(&step);
            step = step.mul_by_pow_2(8);
            entry
        }))
    }

    /// The point this table was built for.
    pub fn basepoint(&self) -> EdwardsPoint {
        (&EdwardsPoint::identity() + &self.0[0].select(1)).as_extended()
    }

    /// \\(sP\\) in constant time.
    ///
    /// With signed radix-16 digits \\(s = \sum_{j<64} s_j 16\^j\\), the odd
    /// digits are summed first against the \\(16\^{2i}P\\) tables, the
    /// total is multiplied by 16, and the even digits are added on top:
    /// $$
    /// sP = 16 \sum_i s_{2i+1} 16\^{2i} P + \sum_i s_{2i} 16\^{2i} P.
    /// $$
    /// One table per pair of digits, four doublings in all.
    pub fn mul_base(&self, scalar: &Scalar) -> EdwardsPoint {
        let digits = scalar.as_radix_16();
        let pairs = || digits.chunks_exact(2).zip(self.0.iter());

        let mut acc = EdwardsPoint::identity();
        for (pair, table) in pairs() {
            acc = (&acc + &table.select(pair[1])).as_extended();
        }
        acc = acc.mul_by_pow_2(4);
        for (pair, table) in pairs() {
            acc = (&acc + &table.select(pair[0])).as_extended();
        }
        acc
    }

    /// \\(cP\\) where \\(c\\) is `bytes` after [`clamp_integer`].
    pub fn mul_base_clamped(&self, bytes: [u8; 32]) -> EdwardsPoint {
        let clamped = Scalar {
            bytes: clamp_integer(bytes),
        };
        self.mul_base(&clamped)
    }
}

impl Debug for EdwardsBasepointTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdwardsBasepointTable")
            .field(&self.basepoint().compress())
            .finish()
    }
}
