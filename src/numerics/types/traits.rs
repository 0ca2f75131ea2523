// src/numerics/types/traits.rs
// FloatingPoint trait shared by the numerics types.

use core::fmt::{Debug, Display};
use core::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};
use core::str::FromStr;

/// FloatingPoint is the scalar bound for the numerics types.
///
/// Only `f32` and `f64` implement it. Besides the arithmetic operators it
/// exposes the handful of transcendental functions the vector type needs,
/// since `core` does not provide a trait for them.
pub trait FloatingPoint:
Copy + PartialOrd + Debug + Display + FromStr
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ Neg<Output = Self>
+ AddAssign + SubAssign + MulAssign + DivAssign
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self { Self::one() + Self::one() }
    fn half() -> Self { Self::one() / Self::two() }
    fn epsilon() -> Self;
    fn pi() -> Self;
    fn from_f64(value: f64) -> Self;

    fn sqrt(self) -> Self;
    /// `sqrt(self² + other²)` without intermediate overflow or underflow.
    fn hypot(self, other: Self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn sin_cos(self) -> (Self, Self) { (self.sin(), self.cos()) }
    fn atan2(self, other: Self) -> Self;
    fn to_degrees(self) -> Self;
    fn to_radians(self) -> Self;
    fn is_finite(self) -> bool;
    fn max(self, other: Self) -> Self;
    fn min(self, other: Self) -> Self;
}

macro_rules! impl_floating_point {
    ($t:ident) => {
        impl FloatingPoint for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn epsilon() -> Self { $t::EPSILON }
            fn pi() -> Self { core::$t::consts::PI }
            fn from_f64(value: f64) -> Self { value as $t }

            fn sqrt(self) -> Self { $t::sqrt(self) }
            fn hypot(self, other: Self) -> Self { $t::hypot(self, other) }
            fn abs(self) -> Self { $t::abs(self) }
            fn sin(self) -> Self { $t::sin(self) }
            fn cos(self) -> Self { $t::cos(self) }
            fn sin_cos(self) -> (Self, Self) { $t::sin_cos(self) }
            fn atan2(self, other: Self) -> Self { $t::atan2(self, other) }
            fn to_degrees(self) -> Self { $t::to_degrees(self) }
            fn to_radians(self) -> Self { $t::to_radians(self) }
            fn is_finite(self) -> bool { $t::is_finite(self) }
            fn max(self, other: Self) -> Self { $t::max(self, other) }
            fn min(self, other: Self) -> Self { $t::min(self, other) }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);
