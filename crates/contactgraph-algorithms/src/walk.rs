//! Bounded random walks
//!
//! Walks approximate reachability between two nodes. They are unbiased: every step
//! picks a neighbour uniformly, nodes may be revisited and a walk may stop without
//! reaching its target even when a path exists. `max_steps` bounds every walk.

use super::common::GraphView;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// How a walk terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WalkOutcome {
    /// The last step landed on the target
    ReachedTarget,
    /// `max_steps` steps were taken without reaching the target
    MaxStepsExhausted,
    /// The current node had no neighbours
    DeadEnd,
}

/// Walk configuration
#[derive(Debug, Clone, Copy)]
pub struct WalkConfig {
    /// Upper bound on steps per walk
    pub max_steps: usize,
    /// Number of walks in a sampling batch
    pub num_examples: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_steps: 15,
            num_examples: 50,
        }
    }
}

/// Result of a single walk, as dense indices
#[derive(Debug, Clone)]
pub struct WalkResult {
    pub source: usize,
    pub target: usize,
    pub path: Vec<usize>,
    pub outcome: WalkOutcome,
}

impl WalkResult {
    /// The walk with repeat visits removed
    pub fn pruned(&self) -> Vec<usize> {
        prune_path(&self.path)
    }
}

/// Random walk from `source` towards `target`, taking at most `max_steps` steps.
///
/// Panics if `source` is not an index of `view`.
pub fn random_walk<K, R>(
    view: &GraphView<K>,
    source: usize,
    target: usize,
    max_steps: usize,
    rng: &mut R,
) -> WalkResult
where
    R: Rng + ?Sized,
{
    let mut path = vec![source];
    let mut current = source;

    for _ in 0..max_steps {
        let next = match view.neighbors(current).choose(rng) {
            Some(&next) => next,
            None => {
                return WalkResult {
                    source,
                    target,
                    path,
                    outcome: WalkOutcome::DeadEnd,
                }
            }
        };

        path.push(next);
        if next == target {
            return WalkResult {
                source,
                target,
                path,
                outcome: WalkOutcome::ReachedTarget,
            };
        }
        current = next;
    }

    WalkResult {
        source,
        target,
        path,
        outcome: WalkOutcome::MaxStepsExhausted,
    }
}

/// Keep the first visit to every node, preserving order.
pub fn prune_path<T: Clone + Eq + Hash>(path: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().filter(|node| seen.insert(*node)).cloned().collect()
}

/// Nodes that can start or end a sampled walk: those with at least one neighbour.
pub fn eligible_nodes<K>(view: &GraphView<K>) -> Vec<usize> {
    (0..view.node_count)
        .filter(|&idx| view.degree(idx) > 0)
        .collect()
}

/// Draw two distinct endpoints uniformly from `candidates`.
pub fn sample_endpoints<R>(candidates: &[usize], rng: &mut R) -> Option<(usize, usize)>
where
    R: Rng + ?Sized,
{
    let picked: Vec<usize> = candidates.choose_multiple(rng, 2).copied().collect();
    match picked.as_slice() {
        [source, target] => Some((*source, *target)),
        _ => None,
    }
}

/// Run `config.num_examples` walks between randomly drawn endpoints.
///
/// Returns `None` when fewer than two nodes have neighbours.
pub fn sample_walks<K, R>(
    view: &GraphView<K>,
    config: &WalkConfig,
    rng: &mut R,
) -> Option<Vec<WalkResult>>
where
    R: Rng + ?Sized,
{
    let candidates = eligible_nodes(view);
    if candidates.len() < 2 {
        return None;
    }

    let mut walks = Vec::with_capacity(config.num_examples);
    for _ in 0..config.num_examples {
        let (source, target) = sample_endpoints(&candidates, rng)?;
        walks.push(random_walk(view, source, target, config.max_steps, rng));
    }
    Some(walks)
}
