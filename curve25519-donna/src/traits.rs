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

//! Traits shared by the point types.

use subtle::ConstantTimeEq;

/// Point types with a neutral element.
pub trait Identity {
    /// The neutral element of the group.
    fn identity() -> Self;
}

/// Constant-time comparison against the neutral element.
///
/// Implemented for every type that has both an [`Identity`] and a
/// constant-time equality.
pub trait IsIdentity {
    /// `true` when `self` is the neutral element.
    fn is_identity(&self) -> bool;
}

impl<T> IsIdentity for T
where
    T: ConstantTimeEq + Identity,
{
    fn is_identity(&self) -> bool {
        bool::from(self.ct_eq(&T::identity()))
    }
}

/// On-curve check for internal point models, used by debug assertions
/// and tests.  Variable time.
#[allow(dead_code)]
pub(crate) trait ValidityCheck {
    fn is_valid(&self) -> bool;
}
