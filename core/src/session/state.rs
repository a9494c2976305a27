use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::model::{AverageMatrix, KinematicInputs, KinematicsResult, ReadingMatrix, TrialSet};
use crate::prelude::SessionResult;
use crate::session::action::{Action, KinematicField};

/// The entire bench state: four independent slices, created empty for each
/// session and mutated only through [`SessionState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub readings: ReadingMatrix,
    pub averages: AverageMatrix,
    pub kinematics: KinematicInputs,
    pub results: KinematicsResult,
    pub trials: TrialSet,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one transition to completion. Transitions are strictly
    /// sequential; averages and results change only on their compute and
    /// reset actions, never as a side effect of an edit.
    pub fn apply(&mut self, action: Action) -> SessionResult<()> {
        match action {
            Action::EditCell {
                terrain,
                material,
                value,
            } => {
                self.readings.set(terrain, material, value);
            }
            Action::ComputeAverages => {
                self.averages = AverageMatrix::from_readings(&self.readings);
                debug!("averages recomputed");
            }
            Action::ResetReadings => self.readings.reset(),
            Action::ResetAverages => self.averages.reset(),
            Action::EditKinematic { field, value } => match field {
                KinematicField::Theta => self.kinematics.theta.set(value),
                KinematicField::Time => self.kinematics.time.set(value),
                KinematicField::Radius => self.kinematics.radius.set(value),
            },
            Action::ComputeKinematics => {
                self.results = self.kinematics.compute();
                if !self.results.is_finite() {
                    warn!(
                        "non-finite kinematics result for radius {:?}",
                        self.kinematics.radius.raw()
                    );
                }
                debug!(
                    "kinematics recomputed: a {:.4} d {:.4} rev {:.4}",
                    self.results.acceleration, self.results.distance, self.results.revolutions
                );
            }
            Action::ResetKinematics => {
                self.kinematics.reset();
                self.results = KinematicsResult::default();
            }
            Action::SetTrialCount(raw) => self.trials.set_count(raw),
            Action::EditTrial { index, value } => self.trials.set_value(index, value)?,
            Action::ComputeTrialAverage => self.trials.compute_average(),
            Action::ResetTrials => self.trials.reset(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Material, Terrain};
    use crate::prelude::SessionError;

    #[test]
    fn edits_do_not_move_derived_slices() {
        let mut state = SessionState::new();
        state
            .apply(Action::EditCell {
                terrain: Terrain::One,
                material: Material::One,
                value: "0.4".into(),
            })
            .unwrap();
        assert_eq!(state.averages, AverageMatrix::default());

        state.apply(Action::ComputeAverages).unwrap();
        assert_eq!(state.averages.get(Terrain::One, Material::One), 0.4);
    }

    #[test]
    fn kinematics_only_move_on_explicit_compute() {
        let mut state = SessionState::new();
        for (field, value) in [
            (KinematicField::Theta, "90"),
            (KinematicField::Time, "1"),
            (KinematicField::Radius, "1"),
        ] {
            state
                .apply(Action::EditKinematic {
                    field,
                    value: value.into(),
                })
                .unwrap();
        }
        assert_eq!(state.results, KinematicsResult::default());

        state.apply(Action::ComputeKinematics).unwrap();
        assert!((state.results.acceleration - 9.8).abs() < 1e-9);
        assert!((state.results.distance - 4.9).abs() < 1e-9);
    }

    #[test]
    fn trial_flow_matches_the_page() {
        let mut state = SessionState::new();
        state.apply(Action::SetTrialCount("3".into())).unwrap();
        state.apply(Action::ComputeTrialAverage).unwrap();
        assert_eq!(state.trials.average(), 0.0);

        for (index, value) in ["2", "4", "6"].into_iter().enumerate() {
            state
                .apply(Action::EditTrial {
                    index,
                    value: value.into(),
                })
                .unwrap();
        }
        state.apply(Action::ComputeTrialAverage).unwrap();
        assert_eq!(state.trials.average(), 4.0);
    }

    #[test]
    fn stale_trial_slot_surfaces_an_error() {
        let mut state = SessionState::new();
        state.apply(Action::SetTrialCount("1".into())).unwrap();
        let result = state.apply(Action::EditTrial {
            index: 5,
            value: "2".into(),
        });
        assert_eq!(
            result,
            Err(SessionError::TrialIndexOutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn double_reset_equals_single_reset() {
        let mut state = SessionState::new();
        state
            .apply(Action::EditCell {
                terrain: Terrain::Three,
                material: Material::Two,
                value: "0.9".into(),
            })
            .unwrap();
        state.apply(Action::ComputeAverages).unwrap();
        state.apply(Action::SetTrialCount("2".into())).unwrap();

        for action in [
            Action::ResetReadings,
            Action::ResetAverages,
            Action::ResetKinematics,
            Action::ResetTrials,
        ] {
            state.apply(action.clone()).unwrap();
            let once = state.clone();
            state.apply(action).unwrap();
            assert_eq!(state, once);
        }
        assert_eq!(state, SessionState::default());
    }
}
