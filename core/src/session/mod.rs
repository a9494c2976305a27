pub mod action;
pub mod state;

pub use action::{Action, KinematicField};
pub use state::SessionState;
