//! Contact Graph
//!
//! Builds an undirected social graph from per-person contact-list exports and
//! describes its connectivity and reachability.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! - `ingest`: CSV exports → normalized contact records
//! - `graph`: contact records → symmetric [`AdjacencyGraph`] via [`GraphBuilder`]
//! - `algo`: degree analysis and bounded random-walk sampling over the graph
//! - `snapshot`: JSON load/save of a graph, an alternative source for sampling
//! - `pipeline`: runs every stage, degrading stage by stage on errors
//!
//! The index-based algorithms live in the `contactgraph-algorithms` crate;
//! `algo` adapts them to identities.
//!
//! ## Example Usage
//!
//! ```rust
//! use contactgraph::{DegreeAnalyzer, GraphBuilder, PathSampler, SamplingConfig, WalkOutcome};
//!
//! // Each owner lists only their own contacts
//! let mut builder = GraphBuilder::new();
//! builder.add_record("alice", ["Bob Smith", "Carol Jones"]);
//! builder.add_record("Bob Smith", ["Carol Jones"]);
//! let graph = builder.finalize();
//!
//! // Relationships are mutual once built
//! assert!(graph.is_symmetric());
//! assert_eq!(graph.node_count(), 3);
//!
//! let degrees = DegreeAnalyzer::new(&graph);
//! assert_eq!(degrees.degree_of("Carol Jones"), Some(2));
//!
//! // Seeded sampling is reproducible
//! let mut sampler = PathSampler::with_seed(&graph, SamplingConfig::default(), 7);
//! let trial = sampler.walk("alice", "Carol Jones").unwrap();
//! assert_eq!(trial.pruned[0], "alice");
//! assert_ne!(trial.outcome, WalkOutcome::DeadEnd);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod pipeline;
pub mod snapshot;

// Re-export main types for convenience
pub use graph::{AdjacencyGraph, GraphBuilder, Identity};

pub use ingest::{
    load_directory, normalize_record, top_companies, CompanyCount, ContactRecord, IngestError,
    IngestResult, OwnerExport, RawContact,
};

pub use algo::{
    DegreeAnalyzer, DegreeEntry, DegreeReport, Mode, PathSampler, SampleStatistics,
    SamplingError, SamplingReport, SamplingResult, ThresholdCount, TrialRecord, WalkOutcome,
};

pub use snapshot::{load_snapshot, save_snapshot, SnapshotError, SnapshotResult};

pub use config::{AnalysisConfig, ConfigError, ConfigResult, SamplingConfig};

pub use pipeline::{build_graph, AnalysisPipeline, AnalysisReport, IngestSummary, StageOutcome};

pub use error::{Error, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
