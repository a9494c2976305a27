pub mod motion;
pub mod parse;
pub mod stats;

pub use motion::{incline_acceleration, revolutions, travel_distance, G};
pub use parse::{lenient_count, lenient_f64};
pub use stats::mean;
