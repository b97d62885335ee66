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

//! Working coordinates for Edwards arithmetic.
//!
//! The public [`EdwardsPoint`] uses extended coordinates \\((X:Y:Z:T)\\)
//! with \\(x = X/Z\\), \\(y = Y/Z\\), \\(xy = T/Z\\), from Hisil, Wong,
//! Carter and Dawson, [_Twisted Edwards Curves Revisited_][hwcd08].
//! Scalar multiplication moves through three more shapes, in the manner
//! of the `ref10` Ed25519 code:
//!
//! | type                   | holds                         | produced by          |
//! |------------------------|-------------------------------|----------------------|
//! | `CompletedPoint`       | \\(((X:Z),(Y:T))\\)           | every add and double |
//! | `ProjectivePoint`      | \\((X:Y:Z)\\)                 | between doublings    |
//! | `ProjectiveNielsPoint` | \\((Y+X, Y-X, Z, 2dT)\\)      | lookup tables        |
//! | `AffineNielsPoint`     | \\((y+x, y-x, 2dxy)\\)        | basepoint tables     |
//!
//! Additions and doublings both land in the completed model.  From there
//! a chain of doublings only needs the cheaper projective form (3M),
//! while a doubling followed by an addition needs the extended form (4M).
//! The two Niels forms cache the sums and the \\(2d\\) product that the
//! addition formula wants from its second operand.
//!
//! All formulas are for the twist \\(a = -1\\),
//! \\(-x\^2 + y\^2 = 1 + dx\^2y\^2\\).
//!
//! [hwcd08]: https://www.iacr.org/archive/asiacrypt2008/53500329/53500329.pdf

#![allow(non_snake_case)]

use core::ops::{Add, Neg, Sub};

use subtle::{Choice, ConditionallySelectable};

use crate::constants::EDWARDS_D;
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;
use crate::traits::{Identity, ValidityCheck};

/// A point \\((X:Y:Z)\\) with \\(x = X/Z\\), \\(y = Y/Z\\).
#[derive(Copy, Clone, Debug)]
pub struct ProjectivePoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
}

/// A point \\(((X:Z),(Y:T))\\) with \\(x = X/Z\\), \\(y = Y/T\\).
#[derive(Copy, Clone, Debug)]
pub struct CompletedPoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
    pub T: FieldElement,
}

/// An affine point cached as \\((y+x, y-x, 2dxy)\\).
// Affine coordinates are unique, so structural equality is point equality.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AffineNielsPoint {
    pub y_plus_x: FieldElement,
    pub y_minus_x: FieldElement,
    pub xy2d: FieldElement,
}

/// An extended point cached as \\((Y+X, Y-X, Z, 2dT)\\).
#[derive(Copy, Clone, Debug)]
pub struct ProjectiveNielsPoint {
    pub Y_plus_X: FieldElement,
    pub Y_minus_X: FieldElement,
    pub Z: FieldElement,
    pub T2d: FieldElement,
}

impl Identity for ProjectivePoint {
    fn identity() -> Self {
        ProjectivePoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
        }
    }
}

impl Identity for AffineNielsPoint {
    fn identity() -> Self {
        AffineNielsPoint {
            y_plus_x: FieldElement::ONE,
            y_minus_x: FieldElement::ONE,
            xy2d: FieldElement::ZERO,
        }
    }
}

impl Identity for ProjectiveNielsPoint {
    fn identity() -> Self {
        ProjectiveNielsPoint {
            Y_plus_X: FieldElement::ONE,
            Y_minus_X: FieldElement::ONE,
            Z: FieldElement::ONE,
            T2d: FieldElement::ZERO,
        }
    }
}

impl Default for AffineNielsPoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl Default for ProjectiveNielsPoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl ValidityCheck for ProjectivePoint {
    fn is_valid(&self) -> bool {
        // Multiply the curve equation through by Z^4:
        // (Y^2 - X^2) Z^2 = Z^4 + d X^2 Y^2
        let x2 = self.X.square();
        let y2 = self.Y.square();
        let z2 = self.Z.square();

        &(&y2 - &x2) * &z2 == &z2.square() + &(&EDWARDS_D * &(&x2 * &y2))
    }
}

impl ConditionallySelectable for AffineNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let pick = |p: &FieldElement, q: &FieldElement| FieldElement::conditional_select(p, q, choice);
        AffineNielsPoint {
            y_plus_x: pick(&a.y_plus_x, &b.y_plus_x),
            y_minus_x: pick(&a.y_minus_x, &b.y_minus_x),
            xy2d: pick(&a.xy2d, &b.xy2d),
        }
    }
}

impl ConditionallySelectable for ProjectiveNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let pick = |p: &FieldElement, q: &FieldElement| FieldElement::conditional_select(p, q, choice);
        ProjectiveNielsPoint {
            Y_plus_X: pick(&a.Y_plus_X, &b.Y_plus_X),
            Y_minus_X: pick(&a.Y_minus_X, &b.Y_minus_X),
            Z: pick(&a.Z, &b.Z),
            T2d: pick(&a.T2d, &b.T2d),
        }
    }
}

impl ProjectivePoint {
    /// Lift to extended coordinates.  Costs 3M + 1S.
    pub fn as_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * &self.Z,
            Y: &self.Y * &self.Z,
            Z: self.Z.square(),
            T: &self.X * &self.Y,
        }
    }

    /// Compute \\([2]P\\) with the `dbl-2008-bbjlp` formula.
    pub fn double(&self) -> CompletedPoint {
        let xx = self.X.square();
        let yy = self.Y.square();
        let sum_sq = (&self.X + &self.Y).square();

        // For a = -1: y^2 - x^2 and y^2 + x^2.
        let diff = &yy - &xx;
        let sum = &yy + &xx;

        CompletedPoint {
            X: &sum_sq - &sum,
            Y: sum,
            Z: diff,
            T: &self.Z.square2() - &diff,
        }
    }
}

impl CompletedPoint {
    /// Drop to projective coordinates.  Costs 3M.
    pub fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
        }
    }

    /// Move to extended coordinates.  Costs 4M.
    pub fn as_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
            T: &self.X * &self.Y,
        }
    }

    /// Assemble the `add-2008-hwcd-3` output from its four products
    /// `a = (Y1-X1)(Y2-X2)`, `b = (Y1+X1)(Y2+X2)`, `c = 2d T1 T2`,
    /// `d = 2 Z1 Z2`.
    ///
    /// Subtraction reuses this with the roles of `Y2+X2` and `Y2-X2`
    /// exchanged and `c` negated, which is what negating the second
    /// operand does in Niels form.
    #[inline]
    fn from_hwcd(a: &FieldElement, b: &FieldElement, c: &FieldElement, d: &FieldElement) -> Self {
        CompletedPoint {
            X: b - a,
            Y: b + a,
            Z: d + c,
            T: d - c,
        }
    }

    #[inline]
    fn from_hwcd_negated(a: &FieldElement, b: &FieldElement, c: &FieldElement, d: &FieldElement) -> Self {
        CompletedPoint {
            X: b - a,
            Y: b + a,
            Z: d - c,
            T: d + c,
        }
    }
}

impl EdwardsPoint {
    #[inline]
    fn sum_and_difference(&self) -> (FieldElement, FieldElement) {
        (&self.Y + &self.X, &self.Y - &self.X)
    }
}

impl<'a, 'b> Add<&'b ProjectiveNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn add(self, q: &'b ProjectiveNielsPoint) -> CompletedPoint {
        let (sum, diff) = self.sum_and_difference();
        let zz = &self.Z * &q.Z;
        CompletedPoint::from_hwcd(
            &(&diff * &q.Y_minus_X),
            &(&sum * &q.Y_plus_X),
            &(&self.T * &q.T2d),
            &(&zz + &zz),
        )
    }
}

impl<'a, 'b> Sub<&'b ProjectiveNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn sub(self, q: &'b ProjectiveNielsPoint) -> CompletedPoint {
        let (sum, diff) = self.sum_and_difference();
        let zz = &self.Z * &q.Z;
        CompletedPoint::from_hwcd_negated(
            &(&diff * &q.Y_plus_X),
            &(&sum * &q.Y_minus_X),
            &(&self.T * &q.T2d),
            &(&zz + &zz),
        )
    }
}

impl<'a, 'b> Add<&'b AffineNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    // Mixed addition: Z2 = 1 saves a multiplication.
    fn add(self, q: &'b AffineNielsPoint) -> CompletedPoint {
        let (sum, diff) = self.sum_and_difference();
        CompletedPoint::from_hwcd(
            &(&diff * &q.y_minus_x),
            &(&sum * &q.y_plus_x),
            &(&self.T * &q.xy2d),
            &(&self.Z + &self.Z),
        )
    }
}

impl<'a, 'b> Sub<&'b AffineNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn sub(self, q: &'b AffineNielsPoint) -> CompletedPoint {
        let (sum, diff) = self.sum_and_difference();
        CompletedPoint::from_hwcd_negated(
            &(&diff * &q.y_plus_x),
            &(&sum * &q.y_minus_x),
            &(&self.T * &q.xy2d),
            &(&self.Z + &self.Z),
        )
    }
}

impl<'a> Neg for &'a ProjectiveNielsPoint {
    type Output = ProjectiveNielsPoint;

    fn neg(self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: self.Y_minus_X,
            Y_minus_X: self.Y_plus_X,
            Z: self.Z,
            T2d: -&self.T2d,
        }
    }
}

impl<'a> Neg for &'a AffineNielsPoint {
    type Output = AffineNielsPoint;

    fn neg(self) -> AffineNielsPoint {
        AffineNielsPoint {
            y_plus_x: self.y_minus_x,
            y_minus_x: self.y_plus_x,
            xy2d: -&self.xy2d,
        }
    }
}
