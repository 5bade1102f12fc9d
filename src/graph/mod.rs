//! Contact graph data model
//!
//! This module implements the undirected contact graph with:
//! - String identities for owners and contacts
//! - A symmetric adjacency mapping without self-loops or duplicate neighbours
//! - An incremental builder that inserts each relationship on both sides

pub mod adjacency;
pub mod builder;
pub mod types;

// Re-export main types
pub use adjacency::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use types::Identity;
