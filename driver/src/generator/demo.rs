use crate::workflow::config::{KinematicSection, ReadingRows, SessionConfig, TerrainRow};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Configuration for generating a synthetic bench session.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub seed: u64,
    pub noise: f64,
    pub trials: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            noise: 0.05,
            trials: 5,
        }
    }
}

impl DemoConfig {
    fn normalized_noise(&self) -> f64 {
        self.noise.abs().max(1e-3)
    }
}

fn cell(rng: &mut StdRng, noise: f64, terrain: usize, material: usize) -> String {
    // Friction-style baseline rising with both axes, plus entry jitter.
    let base = 0.25 + 0.10 * terrain as f64 + 0.07 * material as f64;
    format!("{:.3}", base + rng.gen_range(-noise..noise))
}

fn row(rng: &mut StdRng, noise: f64, terrain: usize) -> TerrainRow {
    TerrainRow {
        material1: cell(rng, noise, terrain, 0),
        material2: cell(rng, noise, terrain, 1),
        material3: cell(rng, noise, terrain, 2),
    }
}

/// Builds a plausible hand-entered session: per-cell readings around a
/// per-pair baseline, a moderate incline run, and a repeated-trial series.
pub fn demo_session(config: &DemoConfig) -> SessionConfig {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise = config.normalized_noise();

    let readings = ReadingRows {
        terrain1: row(&mut rng, noise, 0),
        terrain2: row(&mut rng, noise, 1),
        terrain3: row(&mut rng, noise, 2),
    };

    let kinematics = KinematicSection {
        theta: format!("{:.1}", rng.gen_range(10.0..40.0)),
        time: format!("{:.2}", rng.gen_range(1.0..4.0)),
        radius: format!("{:.3}", rng.gen_range(0.02..0.08)),
    };

    let trial_base: f64 = rng.gen_range(2.0..6.0);
    let trials = (0..config.trials)
        .map(|_| format!("{:.2}", trial_base + rng.gen_range(-noise..noise) * 10.0))
        .collect();

    SessionConfig {
        readings,
        kinematics,
        trials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labcore::math::lenient_f64;

    #[test]
    fn demo_session_is_deterministic_per_seed() {
        let config = DemoConfig::default();
        let first = demo_session(&config);
        let second = demo_session(&config);
        assert_eq!(first.readings.terrain1.material1, second.readings.terrain1.material1);
        assert_eq!(first.trials, second.trials);
    }

    #[test]
    fn demo_session_declares_the_requested_trials() {
        let config = DemoConfig {
            trials: 3,
            ..Default::default()
        };
        let session = demo_session(&config);
        assert_eq!(session.trials.len(), 3);
    }

    #[test]
    fn demo_readings_parse_as_finite_numbers() {
        let session = demo_session(&DemoConfig::default());
        let value = lenient_f64(&session.readings.terrain2.material2);
        assert!(value > 0.0);
        assert!(lenient_f64(&session.kinematics.theta) >= 10.0);
    }
}
