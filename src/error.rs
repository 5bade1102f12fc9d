//! Crate-level error type

use crate::algo::SamplingError;
use crate::config::ConfigError;
use crate::ingest::IngestError;
use crate::snapshot::SnapshotError;
use thiserror::Error;

/// Any error raised by a pipeline stage
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
