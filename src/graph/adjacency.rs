//! Read-only adjacency structure
//!
//! Maps every node to its ordered list of distinct neighbours. Nodes iterate in
//! first-insertion order.

use super::types::Identity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Undirected contact graph as an adjacency mapping.
///
/// Graphs produced by [`GraphBuilder`](super::GraphBuilder) are symmetric, free of
/// self-loops and free of duplicate neighbours. Graphs decoded from a snapshot are
/// taken as written; use [`is_symmetric`](Self::is_symmetric) to check them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyGraph {
    adjacency: IndexMap<Identity, Vec<Identity>>,
}

impl AdjacencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(adjacency: IndexMap<Identity, Vec<Identity>>) -> Self {
        AdjacencyGraph { adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected relationships, assuming symmetry
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbours of a node, or `None` if the node has no entry
    pub fn neighbors(&self, node: &str) -> Option<&[Identity]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Identity> {
        self.adjacency.keys()
    }

    /// `(node, neighbours)` pairs in node insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Identity, &[Identity])> {
        self.adjacency.iter().map(|(node, neighbors)| (node, neighbors.as_slice()))
    }

    /// True when every edge u -> v has a matching v -> u
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(node, neighbors)| {
            neighbors.iter().all(|neighbor| {
                self.adjacency
                    .get(neighbor)
                    .map_or(false, |back| back.contains(node))
            })
        })
    }

    /// Nodes that list themselves as a neighbour
    pub fn self_loops(&self) -> Vec<&Identity> {
        self.adjacency
            .iter()
            .filter(|(node, neighbors)| neighbors.contains(node))
            .map(|(node, _)| node)
            .collect()
    }
}
