//! Aggregation and kinematics core for the incline-lab measurement bench.
//!
//! The modules mirror the original data-entry page while providing an
//! explicit session state, reducer-style transitions, and pure helpers.

pub mod math;
pub mod model;
pub mod prelude;
pub mod session;
pub mod telemetry;

pub use prelude::{SessionError, SessionResult};
pub use session::{Action, KinematicField, SessionState};
