//! PageRank algorithm implementation
//!
//! Weighted power iteration with dangling-node redistribution. Runs a fixed
//! number of rounds; there is no early exit on convergence.

use super::common::GraphView;
use rayon::prelude::*;

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of iterations
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 20,
        }
    }
}

/// Per-node outgoing weight normalization.
///
/// Weights are divided by the node's largest outgoing weight before summing,
/// so every scaled weight is at most one and the sum stays finite even when
/// the raw weights would overflow.
#[derive(Debug, Clone)]
pub struct OutWeights {
    /// Largest outgoing weight per node
    scale: Vec<f64>,
    /// Sum of scaled outgoing weights per node
    total: Vec<f64>,
}

impl OutWeights {
    /// Whether the node has no outgoing weight to distribute
    pub fn is_dangling(&self, idx: usize) -> bool {
        self.total[idx] <= 0.0
    }

    /// Fraction of the node's score carried by an arc of weight `w`
    pub fn share(&self, idx: usize, w: f64) -> f64 {
        (w / self.scale[idx]) / self.total[idx]
    }
}

/// Outgoing weight normalization for every node (unit weights when the view
/// is unweighted)
pub fn out_weights(view: &GraphView) -> OutWeights {
    let (scale, total): (Vec<f64>, Vec<f64>) = (0..view.node_count)
        .map(|i| match view.weights(i) {
            Some(w) => {
                let max = w.iter().copied().fold(0.0, f64::max);
                if max > 0.0 {
                    (max, w.iter().map(|x| x / max).sum())
                } else {
                    (1.0, 0.0)
                }
            }
            None => (1.0, view.out_degree(i) as f64),
        })
        .unzip();

    OutWeights { scale, total }
}

/// Compute one round of PageRank from `scores` into `next`.
///
/// A node whose outgoing weight sums to zero is dangling: its whole score is
/// spread uniformly over all nodes, so the total mass stays at one.
pub fn pagerank_step(
    view: &GraphView,
    out: &OutWeights,
    scores: &[f64],
    next: &mut [f64],
    damping_factor: f64,
) {
    let n = view.node_count;
    if n == 0 {
        return;
    }

    let dangling_mass: f64 = scores
        .iter()
        .enumerate()
        .filter(|(idx, _)| out.is_dangling(*idx))
        .map(|(_, &s)| s)
        .sum();

    let base_score = (1.0 - damping_factor) / n as f64;
    let dangling_share = dangling_mass / n as f64;

    next.par_iter_mut().enumerate().for_each(|(i, slot)| {
        let mut sum_incoming = 0.0;

        // Iterate over incoming edges
        let weights = view.in_weights(i);
        for (k, &source_idx) in view.predecessors(i).iter().enumerate() {
            if out.is_dangling(source_idx) {
                continue;
            }
            let w = weights.map_or(1.0, |w| w[k]);
            sum_incoming += scores[source_idx] * out.share(source_idx, w);
        }

        *slot = base_score + damping_factor * (sum_incoming + dangling_share);
    });
}

/// Calculate PageRank scores indexed by dense node index
pub fn page_rank_scores(view: &GraphView, config: &PageRankConfig) -> Vec<f64> {
    let n = view.node_count;

    if n == 0 {
        return Vec::new();
    }

    let out = out_weights(view);
    let mut scores = vec![1.0 / n as f64; n];
    let mut next_scores = vec![0.0; n];

    for _ in 0..config.iterations {
        pagerank_step(view, &out, &scores, &mut next_scores, config.damping_factor);
        // Swap buffers
        std::mem::swap(&mut scores, &mut next_scores);
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const EPS: f64 = 1e-9;

    fn trip_view() -> GraphView {
        // 1 -> 2 (5), 2 -> 3 (2), 1 -> 3 (100)
        GraphView::from_adjacency_list(
            vec![1, 2, 3],
            vec![vec![1, 2], vec![2], vec![]],
            Some(vec![vec![5.0, 100.0], vec![2.0], vec![]]),
        )
    }

    #[test]
    fn test_weighted_pagerank_reference_values() {
        let scores = page_rank_scores(&trip_view(), &PageRankConfig::default());

        assert!((scores[0] - 0.2112204642092297).abs() < EPS);
        assert!((scores[1] - 0.21976978714325185).abs() < EPS);
        assert!((scores[2] - 0.5690097486475184).abs() < EPS);
    }

    #[test]
    fn test_zero_iterations_keeps_uniform_scores() {
        let config = PageRankConfig { damping_factor: 0.85, iterations: 0 };
        let scores = page_rank_scores(&trip_view(), &config);
        assert!(scores.iter().all(|&s| (s - 1.0 / 3.0).abs() < EPS));
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::from_adjacency_list(vec![], vec![], None);
        assert!(page_rank_scores(&view, &PageRankConfig::default()).is_empty());
    }

    #[test]
    fn test_symmetric_cycle_is_uniform() {
        let view =
            GraphView::from_adjacency_list(vec![1, 2, 3], vec![vec![1], vec![2], vec![0]], None);
        let scores = page_rank_scores(&view, &PageRankConfig::default());
        for s in scores {
            assert!((s - 1.0 / 3.0).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_weight_node_counts_as_dangling() {
        // Node 0 only has a zero-weight arc, so it redistributes uniformly
        let view = GraphView::from_adjacency_list(
            vec![1, 2],
            vec![vec![1], vec![]],
            Some(vec![vec![0.0], vec![]]),
        );
        let scores = page_rank_scores(&view, &PageRankConfig::default());
        assert!((scores[0] - 0.5).abs() < EPS);
        assert!((scores[1] - 0.5).abs() < EPS);
    }

    #[test]
    fn test_mass_conserved_every_round() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 40;
        let mut outgoing = vec![Vec::new(); n];
        let mut weights = vec![Vec::new(); n];
        for u in 0..n {
            // Leave roughly a fifth of the nodes dangling
            if rng.gen_bool(0.2) {
                continue;
            }
            for _ in 0..rng.gen_range(1..5) {
                outgoing[u].push(rng.gen_range(0..n));
                weights[u].push(rng.gen_range(0.1..10.0));
            }
        }
        let view =
            GraphView::from_adjacency_list((0..n as u64).collect(), outgoing, Some(weights));

        let out = out_weights(&view);
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        for _ in 0..30 {
            pagerank_step(&view, &out, &scores, &mut next, 0.85);
            std::mem::swap(&mut scores, &mut next);
            let total: f64 = scores.iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "mass drifted to {}", total);
        }
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        // 0 -> 1, 0 -> 2 at f64::MAX; 1 -> 0, 2 -> 0 at 1.0
        let huge = GraphView::from_adjacency_list(
            vec![0, 1, 2],
            vec![vec![1, 2], vec![0], vec![0]],
            Some(vec![vec![f64::MAX, f64::MAX], vec![1.0], vec![1.0]]),
        );
        let unit = GraphView::from_adjacency_list(
            vec![0, 1, 2],
            vec![vec![1, 2], vec![0], vec![0]],
            None,
        );

        let out = out_weights(&huge);
        assert!(!out.is_dangling(0));
        assert!((out.share(0, f64::MAX) - 0.5).abs() < EPS);

        let scores = page_rank_scores(&huge, &PageRankConfig::default());
        let expected = page_rank_scores(&unit, &PageRankConfig::default());
        let total: f64 = scores.iter().sum();
        assert!((total - 1.0).abs() < EPS, "mass drifted to {}", total);
        for (s, e) in scores.iter().zip(&expected) {
            assert!((s - e).abs() < EPS);
        }
    }
}
