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

//! The x-only Montgomery form, \\(v\^2 = u\^3 + 486662 u\^2 + u\\).
//!
//! A [`MontgomeryPoint`] is just the 32-byte little-endian
//! \\(u\\)-coordinate.  The sign of \\(v\\) is gone, and a \\(u\\) with no
//! \\(v\\) on the curve names a point on the quadratic twist instead; the
//! ladder handles both the same way.  The point at infinity has no
//! \\(u\\) and is written as \\(u = 0\\).
//!
//! Multiplication is the Montgomery ladder from RFC 7748, section 5:
//! one conditional swap and one combined differential addition and
//! doubling per scalar bit, with no branch on secret data.  Inputs of
//! small order are accepted and give \\(u = 0\\); deciding whether that
//! is acceptable belongs to the caller.

use core::hash::{Hash, Hasher};
use core::ops::{Mul, MulAssign};

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants::APLUS2_OVER_FOUR;
use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::field::FieldElement;
use crate::scalar::{clamp_integer, Scalar};
use crate::traits::Identity;

/// The \\(u\\)-coordinate of a point on Curve25519 or its twist.
///
/// Bit 255 is ignored and \\(u\\) need not be reduced, so several byte
/// strings name the same point.  Equality and hashing compare modulo
/// \\(p\\).
#[derive(Copy, Clone, Debug, Default)]
pub struct MontgomeryPoint(pub [u8; 32]);

impl MontgomeryPoint {
    fn u(&self) -> FieldElement {
        FieldElement::from_bytes(&self.0)
    }

    /// The bytes as given.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// A copy of the bytes as given.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// \\(u(sB)\\) for the basepoint \\(u = 9\\), computed on the Edwards
    /// side with the basepoint table.
    pub fn mul_base(scalar: &Scalar) -> MontgomeryPoint {
        EdwardsPoint::mul_base(scalar).to_montgomery()
    }

    /// \\(u(cP)\\) with \\(c\\) = [`clamp_integer`]`(bytes)`.  This is the
    /// X25519 function.
    pub fn mul_clamped(self, bytes: [u8; 32]) -> MontgomeryPoint {
        // Clamped integers are below 2^255 and are used unreduced.
        let clamped = Scalar {
            bytes: clamp_integer(bytes),
        };
        &self * &clamped
    }

    /// \\(u(cB)\\) with \\(c\\) = [`clamp_integer`]`(bytes)`.
    pub fn mul_base_clamped(bytes: [u8; 32]) -> MontgomeryPoint {
        let clamped = Scalar {
            bytes: clamp_integer(bytes),
        };
        MontgomeryPoint::mul_base(&clamped)
    }

    /// \\(u(nP)\\) for the integer \\(n\\) given most significant bit first.
    ///
    /// Runs one ladder step per bit, so the time depends on the number of
    /// bits but not their values.  Most callers want
    /// [`MontgomeryPoint::mul_clamped`] instead.
    pub fn mul_bits_be(&self, bits: impl Iterator<Item = bool>) -> MontgomeryPoint {
        let u = self.u();
        // x2 tracks nP and x3 tracks (n+1)P.
        let mut x2 = KummerPoint::identity();
        let mut x3 = KummerPoint {
            U: u,
            W: FieldElement::ONE,
        };

        let mut swap = Choice::from(0);
        for bit in bits {
            let bit = Choice::from(bit as u8);
            KummerPoint::conditional_swap(&mut x2, &mut x3, swap ^ bit);
            ladder_step(&mut x2, &mut x3, &u);
            swap = bit;
        }
        KummerPoint::conditional_swap(&mut x2, &mut x3, swap);

        x2.to_affine()
    }

    /// Lift to the Edwards point with this \\(u\\) and the given sign of
    /// \\(x\\) (0 positive, 1 negative).
    ///
    /// Returns `None` for a \\(u\\) on the twist, including \\(u = -1\\)
    /// where the map \\(y = (u-1)/(u+1)\\) has no value.
    pub fn to_edwards(&self, sign: u8) -> Option<EdwardsPoint> {
        let u = self.u();
        if u == FieldElement::MINUS_ONE {
            return None;
        }

        let y = &(&u - &FieldElement::ONE) * &(&u + &FieldElement::ONE).invert();
        let mut bytes = y.to_bytes();
        bytes[31] ^= sign << 7;

        CompressedEdwardsY(bytes).decompress()
    }
}

impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        self.u().ct_eq(&other.u())
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

impl Hash for MontgomeryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.u().to_bytes().hash(state);
    }
}

impl ConditionallySelectable for MontgomeryPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        MontgomeryPoint(<[u8; 32]>::conditional_select(&a.0, &b.0, choice))
    }
}

impl Identity for MontgomeryPoint {
    /// \\(u = 0\\), which stands in for the point at infinity.
    fn identity() -> MontgomeryPoint {
        MontgomeryPoint([0u8; 32])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for MontgomeryPoint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a MontgomeryPoint {
    type Output = MontgomeryPoint;

    /// \\(u(sP)\\) with a fixed 255-step ladder.
    fn mul(self, scalar: &'b Scalar) -> MontgomeryPoint {
        // Bit 255 of a scalar is always clear.
        self.mul_bits_be(scalar.bits_le().rev().skip(1))
    }
}

impl<'a, 'b> Mul<&'b MontgomeryPoint> for &'a Scalar {
    type Output = MontgomeryPoint;

    fn mul(self, point: &'b MontgomeryPoint) -> MontgomeryPoint {
        point * self
    }
}

define_mul_variants!(LHS = MontgomeryPoint, RHS = Scalar, Output = MontgomeryPoint);
define_mul_variants!(LHS = Scalar, RHS = MontgomeryPoint, Output = MontgomeryPoint);

impl<'b> MulAssign<&'b Scalar> for MontgomeryPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        *self = &*self * scalar;
    }
}

define_mul_assign_variants!(LHS = MontgomeryPoint, RHS = Scalar);

#[cfg(feature = "serde")]
impl Serialize for MontgomeryPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(32)?;
        for byte in &self.0 {
            tuple.serialize_element(byte)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MontgomeryPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UCoordinate;

        impl<'de> Visitor<'de> for UCoordinate {
            type Value = MontgomeryPoint;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a 32-byte u-coordinate")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<MontgomeryPoint, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(MontgomeryPoint(bytes))
            }
        }

        deserializer.deserialize_tuple(32, UCoordinate)
    }
}

/// A point \\((U:W)\\) on the projective line, \\(u = U/W\\).
#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug)]
struct KummerPoint {
    U: FieldElement,
    W: FieldElement,
}

impl Identity for KummerPoint {
    fn identity() -> KummerPoint {
        KummerPoint {
            U: FieldElement::ONE,
            W: FieldElement::ZERO,
        }
    }
}

impl ConditionallySelectable for KummerPoint {
    fn conditional_select(a: &KummerPoint, b: &KummerPoint, choice: Choice) -> KummerPoint {
        KummerPoint {
            U: FieldElement::conditional_select(&a.U, &b.U, choice),
            W: FieldElement::conditional_select(&a.W, &b.W, choice),
        }
    }
}

impl KummerPoint {
    /// \\(U/W\\), or \\(0\\) for the point at infinity.
    fn to_affine(self) -> MontgomeryPoint {
        MontgomeryPoint((&self.U * &self.W.invert()).to_bytes())
    }
}

/// One ladder step: `x2 <- 2 x2` and `x3 <- x2 + x3`, where `u` is the
/// affine coordinate of their difference.
///
/// Five multiplications, four squarings and one multiplication by
/// \\((A+2)/4\\).
fn ladder_step(x2: &mut KummerPoint, x3: &mut KummerPoint, u: &FieldElement) {
    let a = &x2.U + &x2.W;
    let b = &x2.U - &x2.W;
    let c = &x3.U + &x3.W;
    let d = &x3.U - &x3.W;

    let aa = a.square();
    let bb = b.square();
    // e = 4 U2 W2
    let e = &aa - &bb;

    let da = &d * &a;
    let cb = &c * &b;

    x3.U = (&da + &cb).square();
    x3.W = u * &(&da - &cb).square();

    x2.U = &aa * &bb;
    x2.W = &e * &(&bb + &(&APLUS2_OVER_FOUR * &e));
}

#[cfg(test)]
mod test {
    use super::*;

    use hex_literal::hex;
    use rand::RngCore;

    use crate::constants::{ED25519_BASEPOINT_POINT, X25519_BASEPOINT};

    fn random_scalar(rng: &mut impl RngCore) -> Scalar {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    fn bits_be(bytes: &[u8]) -> impl Iterator<Item = bool> + Clone + '_ {
        (0..bytes.len() * 8)
            .rev()
            .map(move |i| (bytes[i / 8] >> (i % 8)) & 1 == 1)
    }

    #[test]
    fn rfc7748_single_multiplication() {
        let k = hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
        let u = MontgomeryPoint(hex!(
            "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c"
        ));
        assert_eq!(
            u.mul_clamped(k).to_bytes(),
            hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552")
        );
    }

    #[test]
    fn ladder_agrees_with_edwards_multiplication() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let p = ED25519_BASEPOINT_POINT * random_scalar(&mut rng);
            let s = random_scalar(&mut rng);
            assert_eq!(p.to_montgomery() * s, (p * s).to_montgomery());
        }
    }

    #[test]
    fn bit_ladder_agrees_with_reduced_scalar() {
        let mut rng = rand::thread_rng();
        let p = EdwardsPoint::mul_base(&random_scalar(&mut rng));
        let mut n = [0u8; 64];
        rng.fill_bytes(&mut n);

        let expected = (p * Scalar::from_bytes_mod_order_wide(&n)).to_montgomery();
        assert_eq!(p.to_montgomery().mul_bits_be(bits_be(&n)), expected);
    }

    #[test]
    fn bit_ladder_commutes_on_the_twist() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let mut u = [0u8; 32];
            let (mut m, mut n) = ([0u8; 32], [0u8; 32]);
            rng.fill_bytes(&mut u);
            rng.fill_bytes(&mut m);
            rng.fill_bytes(&mut n);

            let p = MontgomeryPoint(u);
            let mn = p.mul_bits_be(bits_be(&m)).mul_bits_be(bits_be(&n));
            let nm = p.mul_bits_be(bits_be(&n)).mul_bits_be(bits_be(&m));
            assert_eq!(mn, nm);
        }
    }

    #[test]
    fn fixed_base_matches_ladder() {
        let mut rng = rand::thread_rng();
        let mut k = [0xffu8; 32];
        for _ in 0..32 {
            let expected = X25519_BASEPOINT.mul_clamped(k);
            assert_eq!(MontgomeryPoint::mul_base_clamped(k), expected);
            assert_eq!(EdwardsPoint::mul_base_clamped(k).to_montgomery(), expected);
            rng.fill_bytes(&mut k);
        }
    }

    #[test]
    fn clamped_bits_do_not_matter() {
        let k = [0x42u8; 32];
        let mut k_flipped = k;
        k_flipped[0] ^= 0b0000_0111;
        k_flipped[31] ^= 0b1100_0000;
        assert_eq!(
            X25519_BASEPOINT.mul_clamped(k),
            X25519_BASEPOINT.mul_clamped(k_flipped)
        );
    }

    #[test]
    fn small_order_inputs_collapse_to_zero() {
        // u = 0 has order 2 and u = 1 has order 4.
        let mut one = [0u8; 32];
        one[0] = 1;
        for u in [[0u8; 32], one] {
            assert_eq!(MontgomeryPoint(u).mul_clamped([0x37; 32]), MontgomeryPoint::identity());
        }
        assert_eq!(
            X25519_BASEPOINT.mul_bits_be(core::iter::empty()),
            MontgomeryPoint::identity()
        );
    }

    #[test]
    fn equality_and_hashing_are_mod_p() {
        use std::collections::hash_map::DefaultHasher;

        fn digest(point: MontgomeryPoint) -> u64 {
            let mut hasher = DefaultHasher::new();
            point.hash(&mut hasher);
            hasher.finish()
        }

        // 2^255 - 1 with bit 255 dropped is p + 18.
        let mut eighteen = [0u8; 32];
        eighteen[0] = 18;
        let unreduced = MontgomeryPoint([0xff; 32]);
        assert_eq!(MontgomeryPoint(eighteen), unreduced);

        assert_eq!(digest(MontgomeryPoint(eighteen)), digest(unreduced));
    }

    #[test]
    fn edwards_lift_uses_the_sign() {
        assert_eq!(X25519_BASEPOINT.to_edwards(0), Some(ED25519_BASEPOINT_POINT));
        assert_eq!(X25519_BASEPOINT.to_edwards(1), Some(-ED25519_BASEPOINT_POINT));
    }

    #[test]
    fn edwards_lift_rejects_the_twist() {
        let mut two = [0u8; 32];
        two[0] = 2;
        assert!(MontgomeryPoint(two).to_edwards(0).is_none());
        assert!(MontgomeryPoint(FieldElement::MINUS_ONE.to_bytes())
            .to_edwards(0)
            .is_none());
    }

    #[test]
    fn infinity_is_u_zero() {
        assert_eq!(KummerPoint::identity().to_affine(), MontgomeryPoint::identity());
        assert_eq!(EdwardsPoint::identity().to_montgomery(), MontgomeryPoint::identity());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_bytes_verbatim() {
        let unreduced = MontgomeryPoint([0xff; 32]);
        let encoded = bincode::serialize(&unreduced).unwrap();
        assert_eq!(encoded, [0xffu8; 32]);
        let decoded: MontgomeryPoint = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded.to_bytes(), [0xff; 32]);
    }
}
