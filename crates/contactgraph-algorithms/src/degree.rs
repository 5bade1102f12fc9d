//! Degree analysis
//!
//! Degree is the length of a node's neighbour list. On a symmetric graph this is
//! the number of distinct contacts, and in-degree equals out-degree.

use super::common::GraphView;

/// Number of nodes whose degree is strictly greater than `threshold`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdCount {
    pub threshold: usize,
    pub count: usize,
}

/// Average degree over the nodes that own an adjacency entry.
///
/// Returns 0.0 for an empty graph.
pub fn average_degree<K>(view: &GraphView<K>) -> f64 {
    if view.node_count == 0 {
        return 0.0;
    }

    let total: usize = (0..view.node_count).map(|idx| view.degree(idx)).sum();
    total as f64 / view.node_count as f64
}

/// Nodes as `(index, degree)` pairs, highest degree first.
///
/// The sort is stable, so equal degrees keep index order.
pub fn ranked_by_degree<K>(view: &GraphView<K>) -> Vec<(usize, usize)> {
    let mut ranked: Vec<(usize, usize)> = (0..view.node_count)
        .map(|idx| (idx, view.degree(idx)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// For each threshold, count the nodes with degree strictly above it.
///
/// Thresholds are independent of each other and the output keeps their order.
pub fn count_above_thresholds<K>(view: &GraphView<K>, thresholds: &[usize]) -> Vec<ThresholdCount> {
    thresholds
        .iter()
        .map(|&threshold| ThresholdCount {
            threshold,
            count: (0..view.node_count)
                .filter(|&idx| view.degree(idx) > threshold)
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> GraphView<&'static str> {
        // hub connected to three leaves
        GraphView::from_adjacency(vec![
            ("leaf1", vec!["hub"]),
            ("hub", vec!["leaf1", "leaf2", "leaf3"]),
            ("leaf2", vec!["hub"]),
            ("leaf3", vec!["hub"]),
        ])
    }

    #[test]
    fn test_average_degree() {
        let view = star();
        assert_eq!(average_degree(&view), 1.5);
    }

    #[test]
    fn test_average_degree_empty() {
        let view: GraphView<&str> = GraphView::from_adjacency(Vec::new());
        assert_eq!(average_degree(&view), 0.0);
    }

    #[test]
    fn test_ranking_is_stable() {
        let view = star();
        let ranked = ranked_by_degree(&view);
        assert_eq!(ranked, vec![(1, 3), (0, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_threshold_counts() {
        let view = star();
        let counts = count_above_thresholds(&view, &[2, 0, 5]);
        let counts: Vec<usize> = counts.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![1, 4, 0]);
    }

    #[test]
    fn test_threshold_counts_uniform_degree() {
        // K6: every node has degree 5
        let names = ["a", "b", "c", "d", "e", "f"];
        let view = GraphView::from_adjacency(names.iter().map(|&n| {
            let others: Vec<&str> = names.iter().copied().filter(|&m| m != n).collect();
            (n, others)
        }));

        let counts = count_above_thresholds(&view, &[3, 10]);
        assert_eq!(
            counts,
            vec![
                ThresholdCount { threshold: 3, count: 6 },
                ThresholdCount { threshold: 10, count: 0 },
            ]
        );
    }
}
