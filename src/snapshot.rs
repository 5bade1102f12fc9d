//! Adjacency snapshots
//!
//! A snapshot is a JSON object mapping each identity to the array of its
//! neighbours. Loading one lets walk sampling skip graph construction.

use crate::graph::AdjacencyGraph;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Snapshot errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// No file at the snapshot path
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file is not a JSON object of string arrays
    #[error("JSON decode error in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Load a snapshot. Asymmetric snapshots are accepted with a warning.
pub fn load_snapshot(path: impl AsRef<Path>) -> SnapshotResult<AdjacencyGraph> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SnapshotError::NotFound(path.to_path_buf()),
        _ => SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let graph: AdjacencyGraph =
        serde_json::from_str(&json).map_err(|source| SnapshotError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    if !graph.is_symmetric() {
        warn!("Snapshot {:?} is not symmetric; sampling it as written", path);
    }
    info!("Loaded snapshot {:?} with {} node(s)", path, graph.node_count());
    Ok(graph)
}

/// Write `graph` as pretty-printed JSON, keeping node order.
pub fn save_snapshot(graph: &AdjacencyGraph, path: impl AsRef<Path>) -> SnapshotResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(graph).map_err(SnapshotError::Encode)?;
    fs::write(path, json).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote snapshot {:?} with {} node(s)", path, graph.node_count());
    Ok(())
}
