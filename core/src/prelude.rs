use thiserror::Error;

/// Common error type for session transitions.
///
/// Unparseable numeric input is never an error here: every parse on the
/// bench substitutes zero and continues. The only way a transition can
/// fail is a trial index that no longer names an existing slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("trial index {index} out of range ({len} slots declared)")]
    TrialIndexOutOfRange { index: usize, len: usize },
}

pub type SessionResult<T> = Result<T, SessionError>;
