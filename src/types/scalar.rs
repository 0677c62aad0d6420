//! Scalar abstraction for compile-time precision selection.
//!
//! Test cases are generic over a `Scalar` type so the same analytic
//! formulas can be evaluated in single or double precision. Parameter
//! values are authoritative in f64 and converted once at construction;
//! evaluation then runs entirely in the selected precision.
//!
//! The trait is sealed: only `f32` and `f64` implement it.

use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, FromPrimitive, NumAssign};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point scalar used for test case evaluation.
///
/// Math operations (`sqrt`, `sin`, `powf`, ...) come from the
/// [`Float`] bound; this trait only adds lossless-enough conversion
/// to and from the f64 parameter layer.
///
/// # Example
///
/// ```
/// use atmos_testcases::types::Scalar;
///
/// fn wave_speed<F: Scalar>(gh: F) -> F {
///     gh.sqrt()
/// }
///
/// assert!((wave_speed(1.0e5_f64) - 316.227766).abs() < 1e-6);
/// let _ = wave_speed(1.0e5_f32);
/// ```
pub trait Scalar:
    private::Sealed
    + Float
    + FromPrimitive
    + NumAssign
    + Sum
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Convert a configuration value (always f64) into this precision.
    fn from_config(value: f64) -> Self;

    /// Widen back to f64, e.g. for display or comparison against
    /// reference values.
    fn to_f64(self) -> f64;

    /// The constant π in this precision.
    #[inline]
    fn pi() -> Self {
        Self::from_config(std::f64::consts::PI)
    }

    /// Half of a full circle in this precision, π/2.
    #[inline]
    fn half_pi() -> Self {
        Self::from_config(std::f64::consts::FRAC_PI_2)
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_config(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_config(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}
