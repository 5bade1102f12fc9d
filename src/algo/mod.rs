//! Graph algorithms module
//!
//! Algorithms are implemented in the `contactgraph-algorithms` crate over dense
//! indices. This module provides the integration/adapter layer that maps between
//! identities and indices.

pub mod degree;
pub mod sampler;

use crate::graph::{AdjacencyGraph, Identity};
use contactgraph_algorithms::GraphView;

// Re-export algorithms
pub use contactgraph_algorithms::{
    prune_path, Mode, SampleStatistics, ThresholdCount, WalkOutcome,
};
pub use degree::{DegreeAnalyzer, DegreeEntry, DegreeReport};
pub use sampler::{PathSampler, SamplingError, SamplingReport, SamplingResult, TrialRecord};

/// Build a GraphView from the adjacency graph for algorithm execution.
///
/// Node indices follow the graph's node order.
pub fn build_view(graph: &AdjacencyGraph) -> GraphView<Identity> {
    GraphView::from_adjacency(
        graph
            .iter()
            .map(|(node, neighbors)| (node.clone(), neighbors.to_vec())),
    )
}
