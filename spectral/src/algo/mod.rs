//! Numeric building blocks: min/max scanning, streaming means and
//! best-candidate point generation.

pub mod best_candidate;
pub mod min_max_scan;
pub mod streaming_mean;

pub use best_candidate::{
    euler_exit_index, eulers_best_candidate, mitchells_best_candidate, CandidateStrategy,
    SamplePoint, Sampling,
};
pub use min_max_scan::{MinMaxError, MinMaxScan};
pub use streaming_mean::{RunningStats, StreamingMean};
