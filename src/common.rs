// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float math that works with or without the standard library.

#[cfg(not(feature = "std"))]
mod sealed {
    /// Stops [`super::FloatFuncs`] from being implemented outside this crate.
    pub trait FloatFuncsSealed {}
}

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {

        /// Since core doesn't depend upon libm, this provides libm implementations
        /// of the float functions the arc construction needs, when the `std`
        /// feature is not enabled.
        ///
        /// For documentation see the respective functions in the std library.
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs: Sized + sealed::FloatFuncsSealed {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl sealed::FloatFuncsSealed for f64 {}

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(
                #[inline]
                fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                    libm::$lname(self $(,$arg as _)*)
                }
            )+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn ceil(self) -> Self => ceil;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
    fn tan(self) -> Self => tan;
}
