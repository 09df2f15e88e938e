use crate::error::{Error, Result};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2-D vector of `f64` components.
///
/// Arithmetic operators return new values; the `*Assign` operators and
/// [`Vector2::try_div_assign`] mutate the receiver only. Equality is exact
/// component-wise comparison with no tolerance.
///
/// The `+`, `-`, `*` operators are unchecked shorthands for inputs whose results stay
/// in the finite range; near `f64::MAX` they can overflow to infinity. The `try_*`
/// methods perform the same arithmetic and fail with `Error::InvalidParam` instead.
///
/// Division is fallible and therefore not exposed through `std::ops::Div`:
/// use [`Vector2::try_div`], [`Vector2::try_div_assign`] or [`Vector2::scalar_div`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a vector after checking that both components are finite.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if either component is NaN or infinite.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidParam(format!(
                "vector components must be finite, got ({x}, {y})"
            )));
        }
        Ok(Self { x, y })
    }

    /// Build a vector from polar form: `(magnitude * cos(angle), magnitude * sin(angle))`.
    pub fn from_magnitude_angle(magnitude: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
    }

    /// Checked form of [`Vector2::from_magnitude_angle`].
    ///
    /// Errors:
    /// - `Error::InvalidParam` if either resulting component is not finite.
    pub fn try_from_magnitude_angle(magnitude: f64, angle: f64) -> Result<Self> {
        finite(Self::from_magnitude_angle(magnitude, angle))
    }

    /// Checked `self + rhs`.
    pub fn try_add(&self, rhs: Vector2) -> Result<Self> {
        finite(*self + rhs)
    }

    /// Checked `self - rhs`.
    pub fn try_sub(&self, rhs: Vector2) -> Result<Self> {
        finite(*self - rhs)
    }

    /// Checked `self * k`.
    pub fn try_scale(&self, k: f64) -> Result<Self> {
        finite(*self * k)
    }

    /// In-place [`Vector2::try_add`]; the receiver is unchanged on error.
    pub fn try_add_assign(&mut self, rhs: Vector2) -> Result<&mut Self> {
        *self = self.try_add(rhs)?;
        Ok(self)
    }

    /// In-place [`Vector2::try_sub`]; the receiver is unchanged on error.
    pub fn try_sub_assign(&mut self, rhs: Vector2) -> Result<&mut Self> {
        *self = self.try_sub(rhs)?;
        Ok(self)
    }

    /// In-place [`Vector2::try_scale`]; the receiver is unchanged on error.
    pub fn try_scale_assign(&mut self, k: f64) -> Result<&mut Self> {
        *self = self.try_scale(k)?;
        Ok(self)
    }

    /// Squared length `x^2 + y^2`.
    ///
    /// This is deliberately *not* the Euclidean norm; [`Vector2::unit`] divides by
    /// this value, so the two must stay consistent.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// `self / self.magnitude()`.
    ///
    /// Errors:
    /// - `Error::DivisionByZero` for the zero vector.
    pub fn unit(&self) -> Result<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            log::debug!("unit() of zero vector {}", self);
            return Err(Error::DivisionByZero("unit vector of the zero vector"));
        }
        self.try_div(mag)
    }

    /// Angle from the positive x axis, `atan2(y, x)`, in `(-pi, pi]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        // atan2 yields -pi for a negative x with y == -0.0
        let ang = self.y.atan2(self.x);
        if ang == -PI {
            PI
        } else {
            ang
        }
    }

    /// Component-wise division by a scalar.
    ///
    /// Errors:
    /// - `Error::DivisionByZero` if `k == 0`.
    /// - `Error::InvalidParam` if the quotient is not finite.
    pub fn try_div(&self, k: f64) -> Result<Self> {
        if k == 0.0 {
            log::debug!("division of {} by zero scalar", self);
            return Err(Error::DivisionByZero("vector divided by zero scalar"));
        }
        finite(Self::new(self.x / k, self.y / k))
    }

    /// In-place form of [`Vector2::try_div`]. On error the receiver is left unchanged.
    pub fn try_div_assign(&mut self, k: f64) -> Result<&mut Self> {
        *self = self.try_div(k)?;
        Ok(self)
    }

    /// Reflected division `k / v`, applied to each component of `v`.
    ///
    /// Errors:
    /// - `Error::DivisionByZero` if either component of `v` is zero, even when `k` is zero.
    /// - `Error::InvalidParam` if the quotient is not finite.
    pub fn scalar_div(k: f64, v: Vector2) -> Result<Self> {
        if v.x == 0.0 || v.y == 0.0 {
            log::debug!("scalar {k} divided by vector with zero component {v}");
            return Err(Error::DivisionByZero("scalar divided by a zero vector component"));
        }
        finite(Self::new(k / v.x, k / v.y))
    }
}

#[inline]
fn finite(v: Vector2) -> Result<Vector2> {
    if v.x.is_finite() && v.y.is_finite() {
        Ok(v)
    } else {
        Err(Error::InvalidParam(format!("non-finite vector result {v}")))
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} Y: {}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self * rhs.x, self * rhs.y)
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}
