//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::collections::HashMap;
use std::hash::Hash;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Indices `0..node_count` belong to nodes that own an adjacency entry. A node that is
/// only ever referenced as a neighbour gets an index past `node_count` and an empty
/// neighbour list, so walks that step onto it stop there.
pub struct GraphView<K> {
    /// Number of nodes with their own adjacency entry
    pub node_count: usize,
    /// Mapping from dense index back to the node key
    pub index_to_node: Vec<K>,
    /// Mapping from node key to dense index
    pub node_to_index: HashMap<K, usize>,

    /// Offsets into `targets`. Size = index_to_node.len() + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbour indices
    pub targets: Vec<usize>,
}

impl<K> GraphView<K> {
    /// Total number of indexed nodes, including referenced-only nodes
    pub fn len(&self) -> usize {
        self.index_to_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_node.is_empty()
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbours of a node, in adjacency order
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Key of the node at `idx`
    pub fn node(&self, idx: usize) -> &K {
        &self.index_to_node[idx]
    }
}

impl<K: Clone + Eq + Hash> GraphView<K> {
    /// Build a view from `(node, neighbours)` entries.
    ///
    /// Entry order fixes the dense index order. Repeated entries for one node are
    /// merged into a single neighbour list.
    pub fn from_adjacency<I>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<K>)>,
    {
        let entries: Vec<(K, Vec<K>)> = adjacency.into_iter().collect();

        // 1. Index the nodes that own an entry
        let mut index_to_node = Vec::with_capacity(entries.len());
        let mut node_to_index = HashMap::with_capacity(entries.len());
        for (node, _) in &entries {
            if !node_to_index.contains_key(node) {
                node_to_index.insert(node.clone(), index_to_node.len());
                index_to_node.push(node.clone());
            }
        }
        let node_count = index_to_node.len();

        // 2. Resolve neighbours, indexing referenced-only nodes on the way
        let mut temp_neighbors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (node, adjacent) in entries {
            let u_idx = node_to_index[&node];
            for target in adjacent {
                let v_idx = match node_to_index.get(&target) {
                    Some(&idx) => idx,
                    None => {
                        let idx = index_to_node.len();
                        node_to_index.insert(target.clone(), idx);
                        index_to_node.push(target);
                        temp_neighbors.push(Vec::new());
                        idx
                    }
                };
                temp_neighbors[u_idx].push(v_idx);
            }
        }

        // 3. Convert to CSR
        let mut offsets = Vec::with_capacity(temp_neighbors.len() + 1);
        let mut targets = Vec::new();
        offsets.push(0);
        for neighbors in temp_neighbors {
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
        }
    }

    /// Dense index of a node key
    pub fn index_of(&self, node: &K) -> Option<usize> {
        self.node_to_index.get(node).copied()
    }
}
