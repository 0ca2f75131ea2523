// src/numerics/types/vector.rs
// Vector2 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::fmt;
use core::iter::Sum;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use core::str::FromStr;
use serde::{Serialize, Deserialize};

use super::traits::FloatingPoint;
use crate::error::VectorError;

/// Vector2 is a 2D vector value type, generic over its float precision.
///
/// Besides the stored `x`/`y` components it exposes two polar "virtual
/// properties", `length` and `angle`, each with a getter and a setter that
/// rewrite the components. Angles are in radians, measured counter-clockwise
/// from the positive x axis in a y-up frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector2<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
}

// Serialized as a plain (x, y) tuple
impl<T> Serialize for Vector2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Vector2 { x, y })
    }
}

impl<T: FloatingPoint> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> Vector2<T> {
    /// Construct a new Vector2
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Vector of all ones
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Both components set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    /// Build a vector from polar coordinates.
    pub fn from_polar(length: T, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(length * cos, length * sin)
    }

    /// Unit vector pointing at `angle`.
    pub fn from_angle(angle: T) -> Self {
        Self::from_polar(T::one(), angle)
    }

    /// Component by index, `None` past `y`.
    pub fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Mutable component by index.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            _ => Err(VectorError::IndexOutOfRange(index)),
        }
    }

    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    // ---- polar virtual properties ----

    /// Return the squared length (avoids sqrt)
    #[inline]
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Return the Euclidean length. Stays accurate where `length_squared`
    /// would overflow or underflow.
    #[inline]
    pub fn length(&self) -> T {
        self.x.hypot(self.y)
    }

    /// Rescale to `length`, keeping the direction.
    ///
    /// The zero vector has no direction and is left untouched. A negative
    /// `length` points the vector the opposite way.
    pub fn set_length(&mut self, length: T) {
        if let Some(unit) = self.unit() {
            *self = unit * length;
        }
    }

    /// Copy of `self` rescaled to `length`.
    pub fn with_length(mut self, length: T) -> Self {
        self.set_length(length);
        self
    }

    /// Heading in radians, as returned by `atan2(y, x)`. The zero vector
    /// reports 0.
    pub fn angle(&self) -> T {
        if self.is_zero() {
            return T::zero();
        }
        self.y.atan2(self.x)
    }

    /// Point the vector at `angle` (radians), keeping its length.
    pub fn set_angle(&mut self, angle: T) {
        *self = Self::from_polar(self.length(), angle);
    }

    pub fn angle_degrees(&self) -> T {
        self.angle().to_degrees()
    }

    pub fn set_angle_degrees(&mut self, degrees: T) {
        self.set_angle(degrees.to_radians());
    }

    // ---- products and distances ----

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product (the "perp dot" product).
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    pub fn distance_squared(&self, other: &Self) -> T {
        (*other - *self).length_squared()
    }

    // ---- normalization ----

    // Divides by the largest component first so tiny and huge vectors
    // still come out at unit length.
    fn unit(&self) -> Option<Self> {
        let largest = self.x.abs().max(self.y.abs());
        if largest == T::zero() {
            return None;
        }
        let scaled = *self / largest;
        Some(scaled / scaled.length())
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(&self) -> Self {
        self.unit().unwrap_or(*self)
    }

    /// Normalize in place and return the length before normalization.
    pub fn normalize(&mut self) -> T {
        let length = self.length();
        if let Some(unit) = self.unit() {
            *self = unit;
        }
        length
    }

    /// Checked normalization for callers that must not get a zero vector back.
    pub fn try_normalized(&self) -> Result<Self, VectorError> {
        if !self.is_finite() {
            return Err(VectorError::NonFinite);
        }
        self.unit().ok_or(VectorError::ZeroLength)
    }

    // ---- perpendiculars and rotation ----

    /// `self` rotated by +90 degrees.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Unit-length perpendicular; zero for the zero vector.
    pub fn perpendicular_normal(&self) -> Self {
        self.perpendicular().normalized()
    }

    /// Rotate in place by `angle` radians.
    pub fn rotate(&mut self, angle: T) {
        *self = self.rotated(angle);
    }

    pub fn rotated(&self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    pub fn rotate_degrees(&mut self, degrees: T) {
        self.rotate(degrees.to_radians());
    }

    pub fn rotated_degrees(&self, degrees: T) -> Self {
        self.rotated(degrees.to_radians())
    }

    /// Rotate the point `self` around `pivot`.
    pub fn rotated_about(&self, pivot: &Self, angle: T) -> Self {
        *pivot + (*self - *pivot).rotated(angle)
    }

    /// Signed angle in radians that rotates `self` onto `other`.
    ///
    /// Returns 0 when either vector is zero.
    pub fn angle_between(&self, other: &Self) -> T {
        if self.is_zero() || other.is_zero() {
            return T::zero();
        }
        self.cross(other).atan2(self.dot(other))
    }

    pub fn angle_between_degrees(&self, other: &Self) -> T {
        self.angle_between(other).to_degrees()
    }

    // ---- interpolation and bases ----

    /// Projection of `self` onto `onto`. Projecting onto zero gives zero.
    pub fn projection(&self, onto: &Self) -> Self {
        let denominator = onto.length_squared();
        if denominator == T::zero() {
            return Self::zero();
        }
        *onto * (self.dot(onto) / denominator)
    }

    /// Linear interpolation towards `other`; `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    /// Coordinates of `self` expressed in the basis (`x_axis`, `y_axis`).
    ///
    /// Exact for orthogonal axes. Fails if either axis has zero length.
    pub fn convert_to_basis(&self, x_axis: &Self, y_axis: &Self) -> Result<Self, VectorError> {
        let x_len_sq = x_axis.length_squared();
        let y_len_sq = y_axis.length_squared();
        if x_len_sq == T::zero() || y_len_sq == T::zero() {
            return Err(VectorError::ZeroLength);
        }
        Ok(Self::new(
            self.dot(x_axis) / x_len_sq,
            self.dot(y_axis) / y_len_sq,
        ))
    }
}

// Vector-vector operators

impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Hadamard product and quotient
impl<T: FloatingPoint> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl<T: FloatingPoint> Div for Vector2<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }
}

impl<T: FloatingPoint> AddAssign for Vector2<T> {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T: FloatingPoint> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

// Scalar operators

impl<T: FloatingPoint> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: FloatingPoint> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<T: FloatingPoint> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl<T: FloatingPoint> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

impl Mul<Vector2<f32>> for f32 {
    type Output = Vector2<f32>;

    fn mul(self, vector: Vector2<f32>) -> Vector2<f32> {
        vector * self
    }
}

impl Mul<Vector2<f64>> for f64 {
    type Output = Vector2<f64>;

    fn mul(self, vector: Vector2<f64>) -> Vector2<f64> {
        vector * self
    }
}

// Indexing: 0 is x, 1 is y

impl<T: FloatingPoint> Index<usize> for Vector2<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index {} out of range for Vector2", index),
        }
    }
}

impl<T: FloatingPoint> IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index {} out of range for Vector2", index),
        }
    }
}

impl<T: FloatingPoint> Sum for Vector2<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<'a, T: FloatingPoint> Sum<&'a Vector2<T>> for Vector2<T> {
    fn sum<I: Iterator<Item = &'a Vector2<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + *v)
    }
}

impl<T: FloatingPoint> IntoIterator for Vector2<T> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

// Conversions between Vector2<T> and tuples

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

// Conversions between Vector2<T> and arrays [T; 2]

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

// Conversions from references to Vector2<T>

impl<T: FloatingPoint> From<&(T, T)> for Vector2<T> {
    fn from(tuple: &(T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<&[T; 2]> for Vector2<T> {
    fn from(array: &[T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<&Vector2<T>> for (T, T) {
    fn from(v: &Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<&Vector2<T>> for [T; 2] {
    fn from(v: &Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: FloatingPoint> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "({:.*}, {:.*})",
                precision, self.x, precision, self.y
            ),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Accepts `(x, y)`, `x, y` and `x y`.
impl<T: FloatingPoint> FromStr for Vector2<T> {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || VectorError::Parse(s.to_string());

        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(parse_error)?,
            None => trimmed,
        };

        let parts: Vec<&str> = if inner.contains(',') {
            inner.split(',').map(str::trim).collect()
        } else {
            inner.split_whitespace().collect()
        };

        match parts.as_slice() {
            [x, y] => {
                let x = x.parse::<T>().map_err(|_| parse_error())?;
                let y = y.parse::<T>().map_err(|_| parse_error())?;
                Ok(Self::new(x, y))
            }
            _ => Err(parse_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    #[test]
    fn test_vector_add_sub() {
        let a = Vector2::new(1.0_f32, 2.0_f32);
        let b = Vector2::new(4.0_f32, 5.0_f32);

        let sum = a + b;
        assert_eq!(sum, Vector2::new(5.0, 7.0));

        let diff = sum - a;
        assert_eq!(diff, b);

        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vector2::new(1.0_f32, 1.0);
        v += Vector2::new(2.0, 3.0);
        assert_eq!(v, Vector2::new(3.0, 4.0));
        v -= Vector2::new(1.0, 1.0);
        assert_eq!(v, Vector2::new(2.0, 3.0));
        v *= 2.0;
        assert_eq!(v, Vector2::new(4.0, 6.0));
        v /= 4.0;
        assert_eq!(v, Vector2::new(1.0, 1.5));
    }

    #[test]
    fn test_scalar_and_hadamard_products() {
        let v = Vector2::new(2.0_f32, -3.0);
        assert_eq!(v * 2.0, Vector2::new(4.0, -6.0));
        assert_eq!(2.0_f32 * v, Vector2::new(4.0, -6.0));
        assert_eq!(v / 2.0, Vector2::new(1.0, -1.5));
        assert_eq!(v * Vector2::new(3.0, 2.0), Vector2::new(6.0, -6.0));
        assert_eq!(v / Vector2::new(4.0, -3.0), Vector2::new(0.5, 1.0));

        let w = 0.5_f64 * Vector2::new(4.0_f64, 8.0);
        assert_eq!(w, Vector2::new(2.0, 4.0));
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let v = Vector2::new(1.0_f32, 0.0) / 0.0;
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
        assert!(!v.is_finite());
    }

    #[test]
    fn test_vector_alias_and_generic_type() {
        let v_default: Vector2 = Vector2::new(0.0, 1.0);
        assert_eq!(v_default.y, 1.0_f32);

        let v64: Vector2<f64> = Vector2::new(1.0_f64, 2.0_f64);
        let w64: Vector2<f64> = Vector2::new(3.0_f64, 2.0_f64);
        assert_eq!(v64 + w64, Vector2::new(4.0, 4.0));
    }

    #[test]
    fn test_length_and_set_length() {
        let mut v = Vector2::new(3.0_f32, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);

        v.set_length(10.0);
        assert!(v.approx_eq(&Vector2::new(6.0, 8.0), EPS));

        v.set_length(-5.0);
        assert!(v.approx_eq(&Vector2::new(-3.0, -4.0), EPS));

        let mut z = Vector2::<f32>::zero();
        z.set_length(3.0);
        assert_eq!(z, Vector2::zero());
    }

    #[test]
    fn test_angle_property() {
        assert_eq!(Vector2::<f32>::zero().angle(), 0.0);
        assert!((Vector2::new(0.0_f32, 2.0).angle() - FRAC_PI_2).abs() < EPS);
        assert!((Vector2::new(-1.0_f32, 0.0).angle() - PI).abs() < EPS);
        assert!((Vector2::new(1.0_f32, 1.0).angle_degrees() - 45.0).abs() < 1e-4);

        let mut v = Vector2::new(2.0_f32, 0.0);
        v.set_angle(FRAC_PI_2);
        assert!(v.approx_eq(&Vector2::new(0.0, 2.0), EPS));

        v.set_angle_degrees(180.0);
        assert!(v.approx_eq(&Vector2::new(-2.0, 0.0), EPS));

        let mut z = Vector2::<f32>::zero();
        z.set_angle(1.0);
        assert!(z.approx_eq(&Vector2::zero(), EPS));
    }

    #[test]
    fn test_polar_construction() {
        let v = Vector2::from_polar(2.0_f32, FRAC_PI_2);
        assert!(v.approx_eq(&Vector2::new(0.0, 2.0), EPS));
        assert!((Vector2::from_angle(0.3_f32).length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_dot_cross_distance() {
        let a = Vector2::new(1.0_f32, 0.0);
        let b = Vector2::new(0.0_f32, 1.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), 1.0);
        assert_eq!(b.cross(&a), -1.0);

        let p = Vector2::new(1.0_f32, 1.0);
        let q = Vector2::new(4.0_f32, 5.0);
        assert_eq!(p.distance(&q), 5.0);
        assert_eq!(p.distance_squared(&q), 25.0);
    }

    #[test]
    fn test_normalization() {
        let v = Vector2::new(3.0_f32, 4.0);
        let n = v.normalized();
        assert!((n.length() - 1.0).abs() < EPS);
        assert!(n.approx_eq(&Vector2::new(0.6, 0.8), EPS));

        assert_eq!(Vector2::<f32>::zero().normalized(), Vector2::zero());

        let mut m = v;
        let previous = m.normalize();
        assert_eq!(previous, 5.0);
        assert!(m.approx_eq(&n, EPS));

        assert_eq!(Vector2::<f32>::zero().try_normalized(), Err(VectorError::ZeroLength));
        assert_eq!(
            Vector2::new(f32::NAN, 1.0).try_normalized(),
            Err(VectorError::NonFinite)
        );
        assert!(v.try_normalized().is_ok());
    }

    #[test]
    fn test_normalization_extreme_magnitudes() {
        // Squares of these components underflow or overflow f32
        for v in [
            Vector2::new(1e-30_f32, 0.0),
            Vector2::new(3e-25_f32, 4e-25),
            Vector2::new(3e19_f32, 4e19),
            Vector2::new(3e38_f32, 3e38),
        ] {
            let n = v.normalized();
            assert!((n.length() - 1.0).abs() < EPS, "{:?} normalized to {:?}", v, n);
            assert!(v.try_normalized().is_ok());

            let mut m = v;
            m.normalize();
            assert!(m.approx_eq(&n, EPS));

            let mut r = v;
            r.set_length(2.0);
            assert!((r.length() - 2.0).abs() < EPS);
        }

        assert!((Vector2::new(3e19_f32, 4e19).length() / 5e19 - 1.0).abs() < EPS);
        assert!(Vector2::new(1e-30_f32, 0.0).normalized().approx_eq(&Vector2::unit_x(), EPS));
        assert!(Vector2::new(3e38_f32, 3e38).length().is_finite());
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector2::new(2.0_f32, 1.0);
        let p = v.perpendicular();
        assert_eq!(p, Vector2::new(-1.0, 2.0));
        assert_eq!(v.dot(&p), 0.0);

        let pn = v.perpendicular_normal();
        assert!((pn.length() - 1.0).abs() < EPS);
        assert_eq!(Vector2::<f32>::zero().perpendicular_normal(), Vector2::zero());
    }

    #[test]
    fn test_rotation() {
        let v = Vector2::new(1.0_f32, 0.0);
        assert!(v.rotated(FRAC_PI_2).approx_eq(&Vector2::new(0.0, 1.0), EPS));
        assert!(v.rotated_degrees(-90.0).approx_eq(&Vector2::new(0.0, -1.0), EPS));

        let mut w = Vector2::new(3.0_f32, 4.0);
        for _ in 0..360 {
            w.rotate_degrees(1.0);
        }
        assert!(w.approx_eq(&Vector2::new(3.0, 4.0), 1e-3));
        assert!((w.length() - 5.0).abs() < 1e-4);

        let pivot = Vector2::new(1.0_f32, 1.0);
        let p = Vector2::new(2.0_f32, 1.0);
        assert!(p.rotated_about(&pivot, PI).approx_eq(&Vector2::new(0.0, 1.0), EPS));
    }

    #[test]
    fn test_angle_between() {
        let a = Vector2::new(1.0_f32, 0.0);
        let b = Vector2::new(0.0_f32, 3.0);
        assert!((a.angle_between(&b) - FRAC_PI_2).abs() < EPS);
        assert!((b.angle_between(&a) + FRAC_PI_2).abs() < EPS);
        assert!((a.angle_between_degrees(&-a).abs() - 180.0).abs() < 1e-4);
        assert_eq!(a.angle_between(&Vector2::zero()), 0.0);
    }

    #[test]
    fn test_projection_lerp_and_basis() {
        let v = Vector2::new(2.0_f32, 3.0);
        assert_eq!(v.projection(&Vector2::new(5.0, 0.0)), Vector2::new(2.0, 0.0));
        assert_eq!(v.projection(&Vector2::zero()), Vector2::zero());

        let a = Vector2::new(0.0_f32, 0.0);
        let b = Vector2::new(10.0_f32, -10.0);
        assert_eq!(a.lerp(&b, 0.25), Vector2::new(2.5, -2.5));
        assert_eq!(a.lerp(&b, 1.5), Vector2::new(15.0, -15.0));

        let x_axis = Vector2::new(2.0_f32, 0.0);
        let y_axis = Vector2::new(0.0_f32, 0.5);
        let in_basis = v.convert_to_basis(&x_axis, &y_axis).unwrap();
        assert_eq!(in_basis, Vector2::new(1.0, 6.0));
        assert_eq!(
            v.convert_to_basis(&Vector2::zero(), &y_axis),
            Err(VectorError::ZeroLength)
        );
    }

    #[test]
    fn test_indexing() {
        let mut v = Vector2::new(7.0_f32, 8.0);
        assert_eq!(v[0], 7.0);
        assert_eq!(v[1], 8.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);

        assert_eq!(v.get(1), Some(9.0));
        assert_eq!(v.get(2), None);
        *v.get_mut(0).unwrap() = 1.0;
        assert_eq!(v.x, 1.0);
        assert_eq!(v.get_mut(5), Err(VectorError::IndexOutOfRange(5)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let v = Vector2::new(1.0_f32, 2.0);
        let _ = v[2];
    }

    #[test]
    fn test_sum_and_iteration() {
        let points = [
            Vector2::new(1.0_f32, 2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(-1.0, 0.5),
        ];
        let total: Vector2 = points.iter().sum();
        assert_eq!(total, Vector2::new(3.0, 6.5));

        let owned: Vector2 = points.into_iter().sum();
        assert_eq!(owned, total);

        let components: Vec<f32> = Vector2::new(5.0_f32, 6.0).into_iter().collect();
        assert_eq!(components, vec![5.0, 6.0]);
    }

    #[test]
    fn test_tuple_conversions() {
        let tup = (1.0f32, 2.0f32);

        let v: Vector2<f32> = tup.into();
        assert_eq!(v, Vector2::new(1.0, 2.0));

        let back: (f32, f32) = v.into();
        assert_eq!(back, tup);
    }

    #[test]
    fn test_array_conversions() {
        let arr = [1.0f32, 2.0f32];

        let v: Vector2<f32> = arr.into();
        assert_eq!(v, Vector2::new(1.0, 2.0));

        let back: [f32; 2] = v.into();
        assert_eq!(back, arr);
    }

    #[test]
    fn test_reference_conversions() {
        let tup = (1.0f32, 2.0f32);
        assert_eq!(Vector2::from(&tup), Vector2::new(1.0, 2.0));

        let arr = [3.0f32, 4.0f32];
        assert_eq!(Vector2::from(&arr), Vector2::new(3.0, 4.0));

        let v = Vector2::new(7.0f32, 8.0f32);
        let tup: (f32, f32) = (&v).into();
        assert_eq!(tup, (7.0, 8.0));
        let arr: [f32; 2] = (&v).into();
        assert_eq!(arr, [7.0, 8.0]);
    }

    #[test]
    fn test_display_and_parse() {
        let v = Vector2::new(1.5_f32, -2.0);
        assert_eq!(v.to_string(), "(1.5, -2)");
        assert_eq!(format!("{:.2}", v), "(1.50, -2.00)");

        assert_eq!("(1.5, -2)".parse::<Vector2>(), Ok(v));
        assert_eq!(" 1.5,-2 ".parse::<Vector2>(), Ok(v));
        assert_eq!("1.5 -2".parse::<Vector2>(), Ok(v));
        assert_eq!(v.to_string().parse::<Vector2>(), Ok(v));

        for bad in ["", "(1, 2", "1, 2, 3", "x, 2", "1,"] {
            assert_eq!(
                bad.parse::<Vector2>(),
                Err(VectorError::Parse(bad.to_string())),
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let v = Vector2::new(1.0f32, 2.0f32);

        let encoded = bincode::serde::encode_to_vec(v, config).expect("serialize failed");
        assert_eq!(encoded.len(), 8);

        let (decoded, _): (Vector2<f32>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).expect("deserialize failed");
        assert_eq!(v, decoded);

        let v_f64 = Vector2::new(10.0f64, 20.0f64);
        let enc_f64 = bincode::serde::encode_to_vec(v_f64, config).unwrap();
        let (dec_f64, _): (Vector2<f64>, usize) =
            bincode::serde::decode_from_slice(&enc_f64, config).unwrap();
        assert_eq!(v_f64, dec_f64);
    }

    #[test]
    fn test_vector_zero_one_units() {
        assert_eq!(Vector2::<f32>::zero(), Vector2::new(0.0, 0.0));
        assert_eq!(Vector2::<f32>::default(), Vector2::zero());
        assert_eq!(Vector2::<f32>::one(), Vector2::new(1.0, 1.0));
        assert_eq!(Vector2::<f64>::unit_x(), Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::<f64>::unit_y(), Vector2::new(0.0, 1.0));
        assert_eq!(Vector2::splat(2.5_f32), Vector2::new(2.5, 2.5));
    }
}
