pub mod common;
pub mod degree;
pub mod stats;
pub mod walk;

pub use common::GraphView;
pub use degree::{average_degree, count_above_thresholds, ranked_by_degree, ThresholdCount};
pub use stats::{Mode, SampleStatistics};
pub use walk::{
    eligible_nodes, prune_path, random_walk, sample_endpoints, sample_walks, WalkConfig,
    WalkOutcome, WalkResult,
};
