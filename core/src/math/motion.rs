use std::f64::consts::PI;

/// Gravitational acceleration in m/s^2.
pub const G: f64 = 9.8;

/// Acceleration of a body released on an incline of `theta_deg` degrees.
pub fn incline_acceleration(theta_deg: f64) -> f64 {
    G * (theta_deg * PI / 180.0).sin()
}

/// Distance covered from rest under constant acceleration after `time` seconds.
pub fn travel_distance(acceleration: f64, time: f64) -> f64 {
    0.5 * acceleration * time * time
}

/// Wheel revolutions needed to cover `distance` with the given radius.
///
/// The division is deliberately unguarded: a zero radius yields a
/// non-finite quotient that flows through to the caller as a sentinel.
pub fn revolutions(distance: f64, radius: f64) -> f64 {
    distance / (2.0 * PI * radius)
}
