use std::sync::Mutex;

use crate::session::Action;

/// Counts session activity for end-of-run summaries and the activity panel.
#[derive(Debug)]
pub struct ActionStats {
    inner: Mutex<Counters>,
}

#[derive(Debug)]
struct Counters {
    edits: usize,
    computes: usize,
    resets: usize,
}

impl ActionStats {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                edits: 0,
                computes: 0,
                resets: 0,
            }),
        }
    }

    /// Classifies and counts one dispatched action.
    pub fn record(&self, action: &Action) {
        if let Ok(mut counters) = self.inner.lock() {
            match action {
                Action::EditCell { .. }
                | Action::EditKinematic { .. }
                | Action::EditTrial { .. }
                | Action::SetTrialCount(_) => counters.edits += 1,
                Action::ComputeAverages
                | Action::ComputeKinematics
                | Action::ComputeTrialAverage => counters.computes += 1,
                Action::ResetReadings
                | Action::ResetAverages
                | Action::ResetKinematics
                | Action::ResetTrials => counters.resets += 1,
            }
        }
    }

    /// Returns `(edits, computes, resets)`.
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.edits, counters.computes, counters.resets)
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for ActionStats {
    fn default() -> Self {
        Self::new()
    }
}
