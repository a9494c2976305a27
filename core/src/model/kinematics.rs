use serde::{Deserialize, Serialize};

use crate::math::motion;
use crate::model::reading::Reading;

/// Raw incline-run inputs, kept exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinematicInputs {
    pub theta: Reading,
    pub time: Reading,
    pub radius: Reading,
}

impl KinematicInputs {
    /// Derives the result triple from the current inputs. Malformed inputs
    /// read as zero; a zero radius passes its non-finite quotient through.
    pub fn compute(&self) -> KinematicsResult {
        let acceleration = motion::incline_acceleration(self.theta.value());
        let distance = motion::travel_distance(acceleration, self.time.value());
        let revolutions = motion::revolutions(distance, self.radius.value());
        KinematicsResult {
            acceleration,
            distance,
            revolutions,
        }
    }

    pub fn reset(&mut self) {
        self.theta.clear();
        self.time.clear();
        self.radius.clear();
    }
}

/// Derived triple; zero until a computation is explicitly triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicsResult {
    pub acceleration: f64,
    pub distance: f64,
    pub revolutions: f64,
}

impl KinematicsResult {
    pub fn is_finite(&self) -> bool {
        self.acceleration.is_finite() && self.distance.is_finite() && self.revolutions.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(theta: &str, time: &str, radius: &str) -> KinematicInputs {
        KinematicInputs {
            theta: Reading::new(theta),
            time: Reading::new(time),
            radius: Reading::new(radius),
        }
    }

    #[test]
    fn vertical_run_matches_reference_values() {
        let result = inputs("90", "1", "1").compute();
        assert!((result.acceleration - 9.8).abs() < 1e-9);
        assert!((result.distance - 4.9).abs() < 1e-9);
        assert!((result.revolutions - 0.7799).abs() < 1e-3);
    }

    #[test]
    fn flat_run_yields_all_zeroes() {
        let result = inputs("0", "10", "1").compute();
        assert_eq!(result.acceleration, 0.0);
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.revolutions, 0.0);
    }

    #[test]
    fn malformed_inputs_read_as_zero() {
        let result = inputs("ninety", "1", "1").compute();
        assert_eq!(result.acceleration, 0.0);
    }

    #[test]
    fn zero_radius_is_not_finite() {
        let result = inputs("30", "2", "0").compute();
        assert!(!result.is_finite());
    }
}
