//! Stage-by-stage analysis pipeline
//!
//! Stages run in order: ingest, graph construction, degree analysis, company
//! ranking, snapshot output and walk sampling. A stage that fails or is skipped
//! never discards what earlier stages produced.

use crate::algo::{DegreeAnalyzer, DegreeReport, PathSampler, SamplingReport};
use crate::config::AnalysisConfig;
use crate::graph::{AdjacencyGraph, GraphBuilder};
use crate::ingest::{load_directory, top_companies, CompanyCount, OwnerExport};
use crate::snapshot::{load_snapshot, save_snapshot, SnapshotError};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of one pipeline stage
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum StageOutcome<T> {
    Completed(T),
    /// The stage did not run; the reason says why
    Skipped(String),
    Failed(String),
}

impl<T> StageOutcome<T> {
    pub fn completed(&self) -> Option<&T> {
        match self {
            StageOutcome::Completed(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, StageOutcome::Completed(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    pub exports: usize,
    pub rows: usize,
}

/// Everything a run produced, stage by stage
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub ingest: StageOutcome<IngestSummary>,
    pub graph: StageOutcome<AdjacencyGraph>,
    pub degrees: StageOutcome<DegreeReport>,
    pub companies: StageOutcome<Vec<CompanyCount>>,
    pub snapshot: StageOutcome<PathBuf>,
    pub sampling: StageOutcome<SamplingReport>,
    /// Non-fatal problems, such as an undecodable snapshot
    pub warnings: Vec<String>,
}

/// Normalize every export and merge it into one symmetric graph
pub fn build_graph(exports: &[OwnerExport]) -> AdjacencyGraph {
    let mut builder = GraphBuilder::new();
    for export in exports {
        builder.add_contact_record(&export.normalize());
    }
    info!(
        "Built graph with {} node(s) and {} relationship(s)",
        builder.node_count(),
        builder.edge_count()
    );
    builder.finalize()
}

pub struct AnalysisPipeline {
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        AnalysisPipeline { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn run(&self) -> AnalysisReport {
        let mut warnings = Vec::new();

        let (ingest, graph, degrees, companies) = match load_directory(&self.config.input_dir) {
            Ok(exports) => {
                let summary = IngestSummary {
                    exports: exports.len(),
                    rows: exports.iter().map(|e| e.entries.len()).sum(),
                };
                let graph = build_graph(&exports);
                let degrees = DegreeAnalyzer::new(&graph).report(&self.config.thresholds);
                let companies = top_companies(&exports, self.config.top_companies);
                (
                    StageOutcome::Completed(summary),
                    StageOutcome::Completed(graph),
                    StageOutcome::Completed(degrees),
                    StageOutcome::Completed(companies),
                )
            }
            Err(e) => {
                warn!("Ingest failed: {}", e);
                let reason = format!("ingest failed: {}", e);
                (
                    StageOutcome::Failed(e.to_string()),
                    StageOutcome::Skipped(reason.clone()),
                    StageOutcome::Skipped(reason.clone()),
                    StageOutcome::Skipped(reason),
                )
            }
        };

        let snapshot = self.emit_snapshot(graph.completed());
        let sampling = self.sample(graph.completed(), &mut warnings);

        AnalysisReport {
            ingest,
            graph,
            degrees,
            companies,
            snapshot,
            sampling,
            warnings,
        }
    }

    /// Write the built graph if `emit_snapshot` is configured
    pub fn emit_snapshot(&self, graph: Option<&AdjacencyGraph>) -> StageOutcome<PathBuf> {
        let Some(path) = &self.config.emit_snapshot else {
            return StageOutcome::Skipped("no snapshot output configured".to_string());
        };
        let Some(graph) = graph else {
            return StageOutcome::Skipped("no graph was built".to_string());
        };

        match save_snapshot(graph, path) {
            Ok(()) => StageOutcome::Completed(path.clone()),
            Err(e) => {
                warn!("Snapshot output failed: {}", e);
                StageOutcome::Failed(e.to_string())
            }
        }
    }

    /// Sample walks from the configured snapshot, or from `built` when no
    /// snapshot is configured.
    ///
    /// A missing snapshot skips the stage. An undecodable one is reported in
    /// `warnings` and sampled as an empty graph.
    pub fn sample(
        &self,
        built: Option<&AdjacencyGraph>,
        warnings: &mut Vec<String>,
    ) -> StageOutcome<SamplingReport> {
        let loaded;
        let graph = match &self.config.snapshot_path {
            Some(path) => match load_snapshot(path) {
                Ok(graph) => {
                    loaded = graph;
                    &loaded
                }
                Err(e @ SnapshotError::NotFound(_)) => {
                    warn!("{}; skipping sampling", e);
                    return StageOutcome::Skipped(e.to_string());
                }
                Err(e @ SnapshotError::Decode { .. }) => {
                    warn!("{}; sampling an empty graph", e);
                    warnings.push(e.to_string());
                    loaded = AdjacencyGraph::new();
                    &loaded
                }
                Err(e) => return StageOutcome::Failed(e.to_string()),
            },
            None => match built {
                Some(graph) => graph,
                None => return StageOutcome::Skipped("no graph was built".to_string()),
            },
        };

        match PathSampler::new(graph, self.config.sampling.clone()).run() {
            Ok(report) => StageOutcome::Completed(report),
            Err(e) => {
                warn!("Sampling failed: {}", e);
                StageOutcome::Failed(e.to_string())
            }
        }
    }
}
