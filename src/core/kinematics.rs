//! One-dimensional motion under constant acceleration.
//!
//! Units are the caller's; the equations assume a consistent set (e.g. m, s, m/s, m/s^2).

use crate::error::{Error, Result};

/// Magnitude below which an acceleration or velocity is treated as zero.
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// Position after time `t`: `x0 + v0*t + 0.5*a*t^2`.
#[inline]
pub fn position(x0: f64, v0: f64, t: f64, a: f64) -> f64 {
    x0 + v0 * t + 0.5 * a * t * t
}

/// Velocity after time `t`: `v0 + a*t`.
#[inline]
pub fn velocity_at_time(v0: f64, t: f64, a: f64) -> f64 {
    v0 + a * t
}

/// Speed on reaching `x` from `x0`, from `v^2 = v0^2 + 2*a*(x - x0)`.
///
/// Only the non-negative root is returned; the direction of travel is not recovered.
///
/// Errors:
/// - `Error::InvalidParam` if any input is NaN or infinite.
/// - `Error::NoRealSolution` if `v^2 < 0` (the motion reverses before reaching `x`).
pub fn velocity_from_position(v0: f64, x: f64, x0: f64, a: f64) -> Result<f64> {
    check_finite(&[("v0", v0), ("x", x), ("x0", x0), ("a", a)])?;

    let v_sq = v0 * v0 + 2.0 * a * (x - x0);
    if v_sq < 0.0 {
        log::debug!("velocity_from_position: v^2 = {v_sq} < 0 (v0={v0}, x={x}, x0={x0}, a={a})");
        return Err(Error::NoRealSolution(format!(
            "negative squared velocity {v_sq}"
        )));
    }
    finite_result("velocity", v_sq.sqrt())
}

/// Earliest non-negative time at which the position reaches `x`.
///
/// Solves `0.5*a*t^2 + v0*t - (x - x0) = 0`. With `|a| < ZERO_TOLERANCE` the motion is
/// linear and `(x - x0) / v0` is returned as-is, which is negative when the target lies
/// behind the direction of travel.
///
/// Errors:
/// - `Error::InvalidParam` if any input is NaN or infinite.
/// - `Error::DegenerateMotion` if both `a` and `v0` are numerically zero.
/// - `Error::NoRealSolution` if the discriminant is negative.
/// - `Error::NoPositiveTimeSolution` if both roots are negative.
pub fn time_to_position(x0: f64, x: f64, v0: f64, a: f64) -> Result<f64> {
    check_finite(&[("x0", x0), ("x", x), ("v0", v0), ("a", a)])?;

    let displacement = x - x0;

    if a.abs() < ZERO_TOLERANCE {
        if v0.abs() < ZERO_TOLERANCE {
            log::debug!("time_to_position: degenerate motion (x0={x0}, x={x})");
            return Err(Error::DegenerateMotion);
        }
        return finite_result("time", displacement / v0);
    }

    let disc = v0 * v0 - 2.0 * a * (x0 - x);
    if disc < 0.0 {
        log::debug!("time_to_position: discriminant {disc} < 0 (x0={x0}, x={x}, v0={v0}, a={a})");
        return Err(Error::NoRealSolution(format!(
            "negative discriminant {disc}, position unreachable"
        )));
    }
    let sqrt_disc = disc.sqrt();

    let t1 = (-v0 + sqrt_disc) / a;
    let t2 = (-v0 - sqrt_disc) / a;
    log::trace!("time_to_position: roots t1={t1}, t2={t2}");

    let t = match (t1 >= 0.0, t2 >= 0.0) {
        // + 0.0 turns a -0.0 root into +0.0
        (true, true) => t1.min(t2) + 0.0,
        (true, false) => t1,
        (false, true) => t2,
        (false, false) => {
            log::debug!("time_to_position: both roots negative (t1={t1}, t2={t2})");
            return Err(Error::NoPositiveTimeSolution { t1, t2 });
        }
    };
    finite_result("time", t)
}

fn check_finite(inputs: &[(&str, f64)]) -> Result<()> {
    match inputs.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, v)) => Err(Error::InvalidParam(format!("{name} must be finite, got {v}"))),
        None => Ok(()),
    }
}

#[inline]
fn finite_result(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidParam(format!("{what} result is not finite")))
    }
}
