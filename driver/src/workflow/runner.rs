use crate::workflow::config::SessionConfig;
use anyhow::Context;
use labcore::model::{AverageMatrix, KinematicsResult, Material, Terrain};
use labcore::session::{Action, KinematicField, SessionState};
use labcore::telemetry::ActionStats;
use serde::Serialize;

/// Computed outcome of one replayed session.
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub averages: AverageMatrix,
    pub results: KinematicsResult,
    pub trial_count: usize,
    pub trial_average: f64,
}

/// Replays a configured session through the reducer, exactly the way the
/// page would: edits first, then the three explicit computations.
pub struct Runner {
    config: SessionConfig,
    stats: ActionStats,
}

impl Runner {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            stats: ActionStats::new(),
        }
    }

    pub fn stats(&self) -> &ActionStats {
        &self.stats
    }

    pub fn execute(&self) -> anyhow::Result<SessionSummary> {
        let mut state = SessionState::new();

        for terrain in Terrain::ALL {
            let row = self.config.terrain_row(terrain);
            for material in Material::ALL {
                self.dispatch(
                    &mut state,
                    Action::EditCell {
                        terrain,
                        material,
                        value: row.material(material).to_string(),
                    },
                )?;
            }
        }

        for (field, value) in [
            (KinematicField::Theta, &self.config.kinematics.theta),
            (KinematicField::Time, &self.config.kinematics.time),
            (KinematicField::Radius, &self.config.kinematics.radius),
        ] {
            self.dispatch(
                &mut state,
                Action::EditKinematic {
                    field,
                    value: value.clone(),
                },
            )?;
        }

        self.dispatch(
            &mut state,
            Action::SetTrialCount(self.config.trials.len().to_string()),
        )?;
        for (index, value) in self.config.trials.iter().enumerate() {
            self.dispatch(
                &mut state,
                Action::EditTrial {
                    index,
                    value: value.clone(),
                },
            )?;
        }

        self.dispatch(&mut state, Action::ComputeAverages)?;
        // Press Calculate only for a run the user actually entered; a
        // blank section keeps its zero default instead of dividing 0 by 0.
        if !self.config.kinematics.is_empty() {
            self.dispatch(&mut state, Action::ComputeKinematics)?;
        }
        self.dispatch(&mut state, Action::ComputeTrialAverage)?;

        log::info!(
            "session replayed: {} trials, acceleration {:.4}",
            state.trials.len(),
            state.results.acceleration
        );

        Ok(SessionSummary {
            averages: state.averages,
            results: state.results,
            trial_count: state.trials.len(),
            trial_average: state.trials.average(),
        })
    }

    fn dispatch(&self, state: &mut SessionState, action: Action) -> anyhow::Result<()> {
        self.stats.record(&action);
        state
            .apply(action)
            .context("applying session action")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::KinematicSection;

    #[test]
    fn runner_replays_a_full_session() {
        let mut config = SessionConfig::default();
        config.readings.terrain1.material1 = "0.42".into();
        config.readings.terrain2.material3 = "junk".into();
        config.kinematics = KinematicSection {
            theta: "90".into(),
            time: "1".into(),
            radius: "1".into(),
        };
        config.trials = vec!["2".into(), "4".into(), "6".into()];

        let runner = Runner::new(config);
        let summary = runner.execute().unwrap();

        assert!((summary.averages.get(Terrain::One, Material::One) - 0.42).abs() < 1e-9);
        assert_eq!(summary.averages.get(Terrain::Two, Material::Three), 0.0);
        assert!((summary.results.acceleration - 9.8).abs() < 1e-9);
        assert!((summary.results.distance - 4.9).abs() < 1e-9);
        assert_eq!(summary.trial_count, 3);
        assert!((summary.trial_average - 4.0).abs() < 1e-9);

        let (_, computes, resets) = runner.stats().snapshot();
        assert_eq!(computes, 3);
        assert_eq!(resets, 0);
    }

    #[test]
    fn untouched_run_section_keeps_the_zero_default() {
        let mut config = SessionConfig::default();
        config.readings.terrain1.material1 = "0.3".into();
        config.trials = vec!["1".into(), "3".into()];

        let summary = Runner::new(config).execute().unwrap();
        assert_eq!(summary.results, KinematicsResult::default());
        assert_eq!(summary.results.revolutions, 0.0);
    }

    #[test]
    fn empty_config_reports_the_all_zero_page() {
        let runner = Runner::new(SessionConfig::default());
        let summary = runner.execute().unwrap();
        assert_eq!(summary.averages, AverageMatrix::default());
        assert_eq!(summary.results, KinematicsResult::default());
        assert_eq!(summary.trial_count, 0);
        assert_eq!(summary.trial_average, 0.0);
    }
}
