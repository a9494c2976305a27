pub mod kinematics;
pub mod matrix;
pub mod reading;
pub mod trials;

pub use kinematics::{KinematicInputs, KinematicsResult};
pub use matrix::{AverageMatrix, Material, ReadingMatrix, Terrain};
pub use reading::Reading;
pub use trials::TrialSet;
