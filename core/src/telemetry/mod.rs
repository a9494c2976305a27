pub mod metrics;

pub use metrics::ActionStats;
