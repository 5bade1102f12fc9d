use contactgraph_algorithms::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ring(size: usize) -> GraphView<String> {
    GraphView::from_adjacency((0..size).map(|i| {
        let prev = format!("n{}", (i + size - 1) % size);
        let next = format!("n{}", (i + 1) % size);
        (format!("n{}", i), vec![prev, next])
    }))
}

#[test]
fn test_pruned_paths_are_duplicate_free_subsequences() {
    let view = ring(12);
    let mut rng = StdRng::seed_from_u64(2024);
    let config = WalkConfig { max_steps: 15, num_examples: 200 };
    let walks = sample_walks(&view, &config, &mut rng).expect("ring has eligible nodes");

    for walk in &walks {
        let pruned = walk.pruned();
        assert_eq!(pruned[0], walk.source);
        assert!(pruned.len() <= walk.path.len());

        let mut unique = pruned.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), pruned.len(), "pruned path repeats a node");

        // subsequence check
        let mut cursor = walk.path.iter();
        for node in &pruned {
            assert!(cursor.any(|n| n == node), "pruned path is not a subsequence of the walk");
        }
    }
}

#[test]
fn test_same_seed_same_walks() {
    let view = ring(8);
    let config = WalkConfig::default();

    let first = sample_walks(&view, &config, &mut StdRng::seed_from_u64(9)).unwrap();
    let second = sample_walks(&view, &config, &mut StdRng::seed_from_u64(9)).unwrap();

    let paths = |walks: &[WalkResult]| walks.iter().map(|w| w.path.clone()).collect::<Vec<_>>();
    assert_eq!(paths(&first), paths(&second));
}

#[test]
fn test_statistics_over_sampled_batch() {
    let view = ring(6);
    let config = WalkConfig { max_steps: 10, num_examples: 50 };
    let walks = sample_walks(&view, &config, &mut StdRng::seed_from_u64(77)).unwrap();

    let walk_lengths: Vec<usize> = walks.iter().map(|w| w.path.len()).collect();
    let pruned_lengths: Vec<usize> = walks.iter().map(|w| w.pruned().len()).collect();

    let walk_stats = SampleStatistics::from_lengths(&walk_lengths).unwrap();
    let pruned_stats = SampleStatistics::from_lengths(&pruned_lengths).unwrap();

    assert_eq!(walk_stats.count, 50);
    assert!(walk_stats.min >= 2);
    assert!(walk_stats.max <= 11);
    assert!(pruned_stats.max <= 6);
    assert!(pruned_stats.mean <= walk_stats.mean);
}
