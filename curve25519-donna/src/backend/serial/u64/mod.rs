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
//! Limb representations: 51-bit limbs for \\(\mathbb F\_p\\) and 52-bit
//! limbs for scalars, with curve constants precomputed in that form.

pub mod constants;
pub mod field;
pub mod scalar;
