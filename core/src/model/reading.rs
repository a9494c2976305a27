use serde::{Deserialize, Serialize};

use crate::math::parse::lenient_f64;

/// A single user-entered value, stored verbatim until computation time.
///
/// An empty string means "unset". No validation happens at write time; the
/// text is only parsed when a derived value is explicitly requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reading(String);

impl Reading {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn set(&mut self, raw: impl Into<String>) {
        self.0 = raw.into();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lenient numeric view: empty or malformed text reads as zero.
    pub fn value(&self) -> f64 {
        lenient_f64(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_stores_text_verbatim() {
        let mut reading = Reading::new("not a number");
        assert_eq!(reading.raw(), "not a number");
        assert_eq!(reading.value(), 0.0);

        reading.set("0.42");
        assert_eq!(reading.value(), 0.42);

        reading.clear();
        assert!(reading.is_empty());
        assert_eq!(reading.value(), 0.0);
    }
}
