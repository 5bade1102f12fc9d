//! Degree analysis over identities

use super::build_view;
use crate::graph::{AdjacencyGraph, Identity};
use contactgraph_algorithms::{
    average_degree, count_above_thresholds, ranked_by_degree, GraphView, ThresholdCount,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub identity: Identity,
    pub degree: usize,
}

/// Everything the degree stage reports
#[derive(Debug, Clone, Serialize)]
pub struct DegreeReport {
    pub node_count: usize,
    pub average_degree: f64,
    pub ranking: Vec<DegreeEntry>,
    pub thresholds: Vec<ThresholdCount>,
}

/// Degree queries over a finished graph.
///
/// Degree is the neighbour-list length; each relationship counts once per endpoint.
pub struct DegreeAnalyzer {
    view: GraphView<Identity>,
}

impl DegreeAnalyzer {
    pub fn new(graph: &AdjacencyGraph) -> Self {
        DegreeAnalyzer {
            view: build_view(graph),
        }
    }

    /// Degree of a node, or `None` if it has no adjacency entry
    pub fn degree_of(&self, node: &str) -> Option<usize> {
        self.view
            .node_to_index
            .get(node)
            .copied()
            .filter(|&idx| idx < self.view.node_count)
            .map(|idx| self.view.degree(idx))
    }

    /// Mean degree; 0.0 for an empty graph
    pub fn average_degree(&self) -> f64 {
        average_degree(&self.view)
    }

    /// Highest degree first; ties keep node insertion order
    pub fn ranked_by_degree(&self) -> Vec<DegreeEntry> {
        ranked_by_degree(&self.view)
            .into_iter()
            .map(|(idx, degree)| DegreeEntry {
                identity: self.view.node(idx).clone(),
                degree,
            })
            .collect()
    }

    pub fn count_above_thresholds(&self, thresholds: &[usize]) -> Vec<ThresholdCount> {
        count_above_thresholds(&self.view, thresholds)
    }

    pub fn report(&self, thresholds: &[usize]) -> DegreeReport {
        DegreeReport {
            node_count: self.view.node_count,
            average_degree: self.average_degree(),
            ranking: self.ranked_by_degree(),
            thresholds: self.count_above_thresholds(thresholds),
        }
    }
}
