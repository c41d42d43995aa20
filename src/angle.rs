//! Degree/radian conversion.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::f64::consts::PI;

/// Convert degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
