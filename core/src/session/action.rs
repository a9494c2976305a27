use crate::model::{Material, Terrain};

/// Which of the three incline-run inputs a form edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicField {
    Theta,
    Time,
    Radius,
}

/// Every user-triggerable transition of the bench.
///
/// Edits replace stored text verbatim; the derived slices move only on the
/// explicit `Compute*` and `Reset*` variants.
#[derive(Debug, Clone)]
pub enum Action {
    EditCell {
        terrain: Terrain,
        material: Material,
        value: String,
    },
    ComputeAverages,
    ResetReadings,
    ResetAverages,
    EditKinematic {
        field: KinematicField,
        value: String,
    },
    ComputeKinematics,
    ResetKinematics,
    SetTrialCount(String),
    EditTrial {
        index: usize,
        value: String,
    },
    ComputeTrialAverage,
    ResetTrials,
}
