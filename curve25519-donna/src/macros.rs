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

//! Internal macros.
//!
//! Operators are implemented once, on `&LHS op &RHS`.  These macros derive
//! the by-value forms from that implementation.  The operator traits must
//! be in scope where they are invoked.

/// `LHS op &RHS`, `&LHS op RHS` and `LHS op RHS` from `&LHS op &RHS`.
macro_rules! define_op_variants {
    ($op:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty) => {
        impl<'b> $op<&'b $rhs> for $lhs {
            type Output = $out;
            fn $method(self, rhs: &'b $rhs) -> $out {
                $op::$method(&self, rhs)
            }
        }

        impl<'a> $op<$rhs> for &'a $lhs {
            type Output = $out;
            fn $method(self, rhs: $rhs) -> $out {
                $op::$method(self, &rhs)
            }
        }

        impl $op<$rhs> for $lhs {
            type Output = $out;
            fn $method(self, rhs: $rhs) -> $out {
                $op::$method(&self, &rhs)
            }
        }
    };
}

/// `LHS op= RHS` from `LHS op= &RHS`.
macro_rules! define_op_assign_variant {
    ($op:ident, $method:ident, $lhs:ty, $rhs:ty) => {
        impl $op<$rhs> for $lhs {
            fn $method(&mut self, rhs: $rhs) {
                $op::$method(self, &rhs)
            }
        }
    };
}

macro_rules! define_add_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_op_variants!(Add, add, $lhs, $rhs, $out);
    };
}

macro_rules! define_add_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_op_assign_variant!(AddAssign, add_assign, $lhs, $rhs);
    };
}

macro_rules! define_sub_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_op_variants!(Sub, sub, $lhs, $rhs, $out);
    };
}

macro_rules! define_sub_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_op_assign_variant!(SubAssign, sub_assign, $lhs, $rhs);
    };
}

macro_rules! define_mul_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_op_variants!(Mul, mul, $lhs, $rhs, $out);
    };
}

macro_rules! define_mul_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_op_assign_variant!(MulAssign, mul_assign, $lhs, $rhs);
    };
}

/// By-value `-x` from `-&x`.
macro_rules! define_neg_variant {
    ($t:ty) => {
        impl Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                -&self
            }
        }
    };
}
