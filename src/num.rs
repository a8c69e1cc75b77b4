//! Element types supported by the engine.
//!
//! The transform is generic over [`Float`], implemented for `f32` and `f64`.
//! Trigonometry goes through `libm` so the crate builds without `std`.

use core::f64::consts::PI;

// Minimal float trait for the generic engine (no_std, libm-backed)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn two() -> Self;
    /// `sqrt(2) / 2`, the only irrational constant the coefficient-free
    /// passes need.
    fn sqrt2_2() -> Self;
    /// Machine epsilon of the type, widened to `f64`.
    fn epsilon() -> f64;
    /// Convert an `f64` into the element type, rounding to nearest.
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl Float for f32 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn two() -> Self {
        2.0
    }
    #[inline(always)]
    fn sqrt2_2() -> Self {
        core::f32::consts::FRAC_1_SQRT_2
    }
    fn epsilon() -> f64 {
        f32::EPSILON as f64
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Float for f64 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn two() -> Self {
        2.0
    }
    #[inline(always)]
    fn sqrt2_2() -> Self {
        core::f64::consts::FRAC_1_SQRT_2
    }
    fn epsilon() -> f64 {
        f64::EPSILON
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
}

/// `cos(angle)` and `sin(angle)` evaluated in double precision and rounded
/// to `T`. Only used while building tables, never on the transform path.
#[inline]
pub fn cos_sin<T: Float>(angle: f64) -> (T, T) {
    (T::from_f64(libm::cos(angle)), T::from_f64(libm::sin(angle)))
}

/// `PI / 2^shift` without going through an integer power that could
/// overflow for deep passes.
#[inline]
pub fn pi_over_pow2(shift: u32) -> f64 {
    PI / libm::exp2(shift as f64)
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> Default for Complex<T> {
    fn default() -> Self {
        Self::zero()
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;
