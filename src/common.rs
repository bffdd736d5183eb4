// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float math shared by the smoothing algorithms.

#![allow(missing_docs, reason = "the shim mirrors inherent float methods")]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("inkspline requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn floor(self) -> Self => floor;
    fn hypot(self, other: Self) -> Self => hypot;
    fn round(self) -> Self => round;
}

/// Round `value` to `digits` decimal places, folding `-0.0` into `0.0`.
///
/// Values too large to scale are returned unchanged.
///
/// Used when serializing coordinates into text formats, where long binary
/// expansions only add bytes.
pub(crate) fn round_to_digits(value: f64, digits: i32) -> f64 {
    let scale = [1.0, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0]
        [digits.clamp(0, 6) as usize];
    let scaled = value * scale;
    if !scaled.is_finite() {
        // Too large to have a fractional part anyway.
        return value;
    }
    let rounded = scaled.round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::round_to_digits;

    #[test]
    fn rounds_and_drops_negative_zero() {
        assert_eq!(round_to_digits(2.50004, 4), 2.5);
        assert_eq!(round_to_digits(-0.00001, 4).to_bits(), 0.0_f64.to_bits());
        assert_eq!(round_to_digits(1.0 / 3.0, 2), 0.33);
    }

    #[test]
    fn huge_values_pass_through() {
        assert_eq!(round_to_digits(1e306, 4), 1e306);
        assert_eq!(round_to_digits(-f64::MAX, 4), -f64::MAX);
    }
}
