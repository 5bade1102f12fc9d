//! Incremental construction of a symmetric contact graph
//!
//! Each export only lists the owner's contacts. The builder inserts every
//! relationship on both sides, so the finished graph is symmetric even when a
//! contact never lists the owner back.

use super::adjacency::AdjacencyGraph;
use super::types::Identity;
use crate::ingest::ContactRecord;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Accumulates contact records into an adjacency structure.
///
/// `add_record` and `finalize` are the only mutators. The resulting edge set does
/// not depend on the order records are added, and repeating a contact is a no-op.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: IndexMap<Identity, IndexSet<Identity>>,
    edge_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` and connect it to every contact.
    ///
    /// A contact equal to the owner is skipped.
    pub fn add_record<O, I>(&mut self, owner: O, contacts: I)
    where
        O: Into<Identity>,
        I: IntoIterator,
        I::Item: Into<Identity>,
    {
        let owner = owner.into();
        self.adjacency.entry(owner.clone()).or_default();

        let mut added = 0;
        for contact in contacts {
            if self.insert_edge(&owner, contact.into()) {
                added += 1;
            }
        }
        debug!("Record for {} added {} new relationship(s)", owner, added);
    }

    pub fn add_contact_record(&mut self, record: &ContactRecord) {
        self.add_record(&record.owner, &record.contacts);
    }

    /// Insert the undirected edge `owner` - `contact` on both sides.
    ///
    /// Returns false for self edges and for edges that already exist.
    fn insert_edge(&mut self, owner: &Identity, contact: Identity) -> bool {
        if *owner == contact {
            return false;
        }

        let added = self
            .adjacency
            .entry(owner.clone())
            .or_default()
            .insert(contact.clone());
        self.adjacency.entry(contact).or_default().insert(owner.clone());

        if added {
            self.edge_count += 1;
        }
        added
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected relationships
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sort every neighbour list and freeze the graph
    pub fn finalize(self) -> AdjacencyGraph {
        let adjacency = self
            .adjacency
            .into_iter()
            .map(|(node, neighbors)| {
                let mut neighbors: Vec<Identity> = neighbors.into_iter().collect();
                neighbors.sort();
                (node, neighbors)
            })
            .collect();
        AdjacencyGraph::from_map(adjacency)
    }
}
