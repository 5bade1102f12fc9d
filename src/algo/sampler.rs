//! Random-walk path sampling over identities
//!
//! Each trial draws two distinct connected nodes, walks from one towards the
//! other for at most `max_steps` steps and prunes repeat visits from the walk.
//! Lengths of the walks and pruned paths are summarized per batch.

use super::build_view;
use crate::config::SamplingConfig;
use crate::graph::{AdjacencyGraph, Identity};
use contactgraph_algorithms::{
    eligible_nodes, random_walk, sample_walks, GraphView, SampleStatistics, WalkConfig,
    WalkOutcome, WalkResult,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Sampling errors
#[derive(Error, Debug, PartialEq)]
pub enum SamplingError {
    /// Fewer than two nodes have neighbours
    #[error("Not enough connected nodes to sample: {eligible} found, at least 2 required")]
    InsufficientGraphData { eligible: usize },

    #[error("Node {0} not found")]
    NodeNotFound(Identity),
}

pub type SamplingResult<T> = Result<T, SamplingError>;

/// One walk and its pruned path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialRecord {
    pub start: Identity,
    pub end: Identity,
    pub walk: Vec<Identity>,
    pub pruned: Vec<Identity>,
    pub outcome: WalkOutcome,
}

/// A batch of trials with statistics over both length series
#[derive(Debug, Clone, Serialize)]
pub struct SamplingReport {
    pub max_steps: usize,
    pub trials: Vec<TrialRecord>,
    /// `None` when the batch is empty
    pub walk_statistics: Option<SampleStatistics>,
    pub pruned_statistics: Option<SampleStatistics>,
}

impl SamplingReport {
    fn from_trials(max_steps: usize, trials: Vec<TrialRecord>) -> Self {
        let walk_lengths: Vec<usize> = trials.iter().map(|t| t.walk.len()).collect();
        let pruned_lengths: Vec<usize> = trials.iter().map(|t| t.pruned.len()).collect();

        SamplingReport {
            max_steps,
            walk_statistics: SampleStatistics::from_lengths(&walk_lengths),
            pruned_statistics: SampleStatistics::from_lengths(&pruned_lengths),
            trials,
        }
    }

    /// Number of trials that ended with `outcome`
    pub fn outcome_count(&self, outcome: WalkOutcome) -> usize {
        self.trials.iter().filter(|t| t.outcome == outcome).count()
    }
}

/// Bounded random-walk sampler over a read-only graph.
///
/// Seeded samplers are reproducible: the same graph, config and seed give the
/// same trials.
pub struct PathSampler {
    view: GraphView<Identity>,
    config: SamplingConfig,
    rng: StdRng,
}

impl PathSampler {
    /// Create a sampler; uses `config.seed` when set, entropy otherwise.
    pub fn new(graph: &AdjacencyGraph, config: SamplingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PathSampler {
            view: build_view(graph),
            config,
            rng,
        }
    }

    pub fn with_seed(graph: &AdjacencyGraph, config: SamplingConfig, seed: u64) -> Self {
        Self::new(
            graph,
            SamplingConfig {
                seed: Some(seed),
                ..config
            },
        )
    }

    /// Number of nodes that can be drawn as walk endpoints
    pub fn eligible_count(&self) -> usize {
        eligible_nodes(&self.view).len()
    }

    /// Walk from `start` towards `end` with caller-chosen endpoints.
    pub fn walk(&mut self, start: &str, end: &str) -> SamplingResult<TrialRecord> {
        let source = self.index_of(start)?;
        let target = self.index_of(end)?;

        let walk = random_walk(&self.view, source, target, self.config.max_steps, &mut self.rng);
        Ok(self.record(&walk))
    }

    /// Run `num_examples` trials between randomly drawn endpoints.
    pub fn run(&mut self) -> SamplingResult<SamplingReport> {
        let walk_config = WalkConfig {
            max_steps: self.config.max_steps,
            num_examples: self.config.num_examples,
        };

        let walks = sample_walks(&self.view, &walk_config, &mut self.rng).ok_or_else(|| {
            SamplingError::InsufficientGraphData {
                eligible: self.eligible_count(),
            }
        })?;

        let trials: Vec<TrialRecord> = walks.iter().map(|walk| self.record(walk)).collect();
        let report = SamplingReport::from_trials(self.config.max_steps, trials);

        info!(
            "Sampled {} walk(s), {} reached their target",
            report.trials.len(),
            report.outcome_count(WalkOutcome::ReachedTarget)
        );
        Ok(report)
    }

    fn index_of(&self, node: &str) -> SamplingResult<usize> {
        self.view
            .node_to_index
            .get(node)
            .copied()
            .ok_or_else(|| SamplingError::NodeNotFound(Identity::from(node)))
    }

    fn record(&self, walk: &WalkResult) -> TrialRecord {
        let to_identities = |path: &[usize]| -> Vec<Identity> {
            path.iter().map(|&idx| self.view.node(idx).clone()).collect()
        };

        let record = TrialRecord {
            start: self.view.node(walk.source).clone(),
            end: self.view.node(walk.target).clone(),
            walk: to_identities(&walk.path),
            pruned: to_identities(&walk.pruned()),
            outcome: walk.outcome,
        };
        debug!(
            "Trial {} -> {}: {:?} after {} step(s)",
            record.start,
            record.end,
            record.outcome,
            record.walk.len() - 1
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use contactgraph_algorithms::Mode;

    fn line_graph() -> AdjacencyGraph {
        // A - B - C
        let mut builder = GraphBuilder::new();
        builder.add_record("A", ["B"]);
        builder.add_record("B", ["C"]);
        builder.finalize()
    }

    fn names(path: &[Identity]) -> Vec<&str> {
        path.iter().map(Identity::as_str).collect()
    }

    #[test]
    fn test_zero_steps() {
        let config = SamplingConfig { max_steps: 0, ..SamplingConfig::default() };
        let mut sampler = PathSampler::with_seed(&line_graph(), config, 1);

        let trial = sampler.walk("A", "C").unwrap();
        assert_eq!(names(&trial.walk), vec!["A"]);
        assert_eq!(names(&trial.pruned), vec!["A"]);
        assert_eq!(trial.outcome, WalkOutcome::MaxStepsExhausted);
    }

    #[test]
    fn test_line_graph_walk_to_target() {
        let mut reached = 0;
        for seed in 0..20 {
            let mut sampler = PathSampler::with_seed(&line_graph(), SamplingConfig::default(), seed);
            let trial = sampler.walk("A", "C").unwrap();

            assert_eq!(trial.walk[0], "A");
            assert_eq!(trial.pruned[0], "A");
            match trial.outcome {
                WalkOutcome::ReachedTarget => {
                    reached += 1;
                    assert_eq!(trial.walk.last().map(Identity::as_str), Some("C"));
                    assert_eq!(names(&trial.pruned), vec!["A", "B", "C"]);
                }
                WalkOutcome::MaxStepsExhausted => {
                    assert_eq!(trial.walk.len(), 16);
                    assert_eq!(names(&trial.pruned), vec!["A", "B"]);
                }
                WalkOutcome::DeadEnd => panic!("line graph has no dead ends"),
            }
        }
        assert!(reached > 0);
    }

    #[test]
    fn test_seeded_walks_are_reproducible() {
        let graph = line_graph();
        let mut first = PathSampler::with_seed(&graph, SamplingConfig::default(), 42);
        let mut second = PathSampler::with_seed(&graph, SamplingConfig::default(), 42);

        assert_eq!(first.walk("A", "C").unwrap(), second.walk("A", "C").unwrap());
        let a = first.run().unwrap();
        let b = second.run().unwrap();
        assert_eq!(a.trials, b.trials);
    }

    #[test]
    fn test_dead_end_in_one_way_snapshot() {
        let graph: AdjacencyGraph = serde_json::from_str(r#"{"A": ["B"], "B": [], "C": ["A"]}"#).unwrap();
        let mut sampler = PathSampler::with_seed(&graph, SamplingConfig::default(), 3);

        let trial = sampler.walk("A", "C").unwrap();
        assert_eq!(names(&trial.walk), vec!["A", "B"]);
        assert_eq!(trial.outcome, WalkOutcome::DeadEnd);
    }

    #[test]
    fn test_unknown_node() {
        let mut sampler = PathSampler::with_seed(&line_graph(), SamplingConfig::default(), 0);
        assert_eq!(
            sampler.walk("A", "Zed"),
            Err(SamplingError::NodeNotFound(Identity::from("Zed")))
        );
    }

    #[test]
    fn test_insufficient_graph_data() {
        let mut builder = GraphBuilder::new();
        builder.add_record("loner", Vec::<Identity>::new());
        builder.add_record("hermit", Vec::<Identity>::new());
        let mut sampler = PathSampler::with_seed(&builder.finalize(), SamplingConfig::default(), 0);

        assert_eq!(sampler.eligible_count(), 0);
        assert_eq!(
            sampler.run().unwrap_err(),
            SamplingError::InsufficientGraphData { eligible: 0 }
        );

        let mut empty = PathSampler::with_seed(&AdjacencyGraph::new(), SamplingConfig::default(), 0);
        assert!(empty.run().is_err());
    }

    #[test]
    fn test_isolated_nodes_are_never_endpoints() {
        let mut builder = GraphBuilder::new();
        builder.add_record("A", ["B"]);
        builder.add_record("island", Vec::<Identity>::new());
        let graph = builder.finalize();

        let config = SamplingConfig { num_examples: 30, ..SamplingConfig::default() };
        let report = PathSampler::with_seed(&graph, config, 8).run().unwrap();
        for trial in &report.trials {
            assert_ne!(trial.start, "island");
            assert_ne!(trial.end, "island");
            assert_ne!(trial.start, trial.end);
        }
    }

    #[test]
    fn test_report_statistics() {
        let config = SamplingConfig { num_examples: 25, ..SamplingConfig::default() };
        let report = PathSampler::with_seed(&line_graph(), config, 5).run().unwrap();

        assert_eq!(report.trials.len(), 25);
        assert_eq!(report.max_steps, 15);
        let walk_stats = report.walk_statistics.as_ref().unwrap();
        let pruned_stats = report.pruned_statistics.as_ref().unwrap();
        assert_eq!(walk_stats.count, 25);
        assert!(walk_stats.min >= 2);
        assert!(walk_stats.max <= 16);
        assert!(pruned_stats.max <= 3);
        assert!(pruned_stats.mean <= walk_stats.mean);
        if let Mode::Unique(value) = pruned_stats.mode {
            assert!((2..=3).contains(&value));
        }
        assert_eq!(
            report.outcome_count(WalkOutcome::ReachedTarget)
                + report.outcome_count(WalkOutcome::MaxStepsExhausted)
                + report.outcome_count(WalkOutcome::DeadEnd),
            25
        );
    }

    #[test]
    fn test_empty_batch_has_no_statistics() {
        let config = SamplingConfig { num_examples: 0, ..SamplingConfig::default() };
        let report = PathSampler::with_seed(&line_graph(), config, 5).run().unwrap();
        assert!(report.trials.is_empty());
        assert!(report.walk_statistics.is_none());
    }
}
