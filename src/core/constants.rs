//! Mathematical constants and angle conversions.

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// Convert an angle in degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Convert an angle in radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}
