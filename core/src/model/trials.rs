use serde::{Deserialize, Serialize};

use crate::math::{parse::lenient_count, stats};
use crate::model::reading::Reading;
use crate::prelude::{SessionError, SessionResult};

/// Repeated-trial section: a declared count, one reading per trial, and
/// the last explicitly computed average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialSet {
    declared: Reading,
    values: Vec<Reading>,
    average: f64,
}

impl TrialSet {
    /// Re-declares the number of trials. The resize is destructive: every
    /// previously entered value is discarded and the sequence restarts as
    /// `count` empty slots, even when the count is unchanged.
    pub fn set_count(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        let count = lenient_count(&raw);
        self.declared = Reading::new(raw);
        self.values = vec![Reading::default(); count];
    }

    /// Replaces the reading of one existing trial slot.
    pub fn set_value(&mut self, index: usize, raw: impl Into<String>) -> SessionResult<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(SessionError::TrialIndexOutOfRange { index, len })?;
        slot.set(raw);
        Ok(())
    }

    pub fn declared_raw(&self) -> &str {
        self.declared.raw()
    }

    pub fn values(&self) -> &[Reading] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    /// Averages the entered trials: lenient parse per slot, and an empty
    /// set deliberately reports zero rather than NaN.
    pub fn compute_average(&mut self) {
        let parsed: Vec<f64> = self.values.iter().map(Reading::value).collect();
        self.average = stats::mean(&parsed);
    }

    pub fn reset(&mut self) {
        self.declared.clear();
        self.values.clear();
        self.average = 0.0;
    }
}
