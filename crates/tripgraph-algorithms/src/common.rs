//! Shared utilities for graph algorithms
//!
//! Provides the traversal capability trait and a read-only, dense view of the
//! graph topology for iterative algorithms.

use std::collections::HashMap;
use std::hash::Hash;

/// Node Identifier type (u64) used by dense views
pub type NodeId = u64;

/// Which incident edges a neighbor lookup follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Follow edges away from the node
    #[default]
    Outgoing,
    /// Follow edges into the node
    Incoming,
    /// Ignore edge orientation (undirected reachability)
    #[cfg_attr(feature = "serde", serde(alias = "undirected"))]
    Both,
}

impl Direction {
    /// Undirected reachability, an alias for [`Direction::Both`]
    pub const UNDIRECTED: Direction = Direction::Both;
}

/// Traversal capability over a graph.
///
/// Algorithms that walk the graph one hop at a time (BFS) only need name
/// resolution and ordered neighbor lookups, so they stay agnostic to whether
/// the graph is held in memory or backed by a persisted structure.
pub trait Topology {
    /// Node handle
    type Node: Copy + Eq + Hash;
    /// Edge payload returned alongside each neighbor
    type Edge;

    /// Resolve a node by its unique name
    fn lookup_by_name(&self, name: &str) -> Option<Self::Node>;

    /// Neighbors of `node` in edge insertion order
    fn neighbors(&self, node: Self::Node, direction: Direction) -> Vec<(Self::Node, &Self::Edge)>;
}

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Edge weights: aligned with `out_targets`
    pub weights: Option<Vec<f64>>,
    /// Edge weights: aligned with `in_sources`
    pub in_weights: Option<Vec<f64>>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| {
            let start = self.out_offsets[idx];
            let end = self.out_offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Get weights for incoming edges of a node, aligned with `predecessors`
    pub fn in_weights(&self, idx: usize) -> Option<&[f64]> {
        self.in_weights.as_ref().map(|w| {
            let start = self.in_offsets[idx];
            let end = self.in_offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Build a view from per-node outgoing adjacency lists.
    ///
    /// The incoming side is derived from `outgoing`, so predecessors of a node
    /// are ordered by source index and then by arc order within the source.
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        outgoing: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<f64>>>,
    ) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut incoming: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];
        for (u, targets) in outgoing.iter().enumerate() {
            for (k, &v) in targets.iter().enumerate() {
                let w = weights.as_ref().map_or(1.0, |w| w[u][k]);
                incoming[v].push((u, w));
            }
        }

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut flat_weights = weights.as_ref().map(|_| Vec::new());

        out_offsets.push(0);
        for (i, neighbors) in outgoing.into_iter().enumerate() {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());

            if let (Some(w_flat), Some(w)) = (flat_weights.as_mut(), weights.as_ref()) {
                w_flat.extend(w[i].iter());
            }
        }

        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();
        let mut flat_in_weights = weights.as_ref().map(|_| Vec::new());

        in_offsets.push(0);
        for sources in incoming {
            for (u, w) in sources {
                in_sources.push(u);
                if let Some(w_flat) = flat_in_weights.as_mut() {
                    w_flat.push(w);
                }
            }
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            weights: flat_weights,
            in_weights: flat_in_weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_from_adjacency() {
        // 10 -> 20 (2.0), 10 -> 30 (3.0), 20 -> 30 (4.0)
        let view = GraphView::from_adjacency_list(
            vec![10, 20, 30],
            vec![vec![1, 2], vec![2], vec![]],
            Some(vec![vec![2.0, 3.0], vec![4.0], vec![]]),
        );

        assert_eq!(view.node_count, 3);
        assert_eq!(view.node_to_index[&20], 1);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.weights(0), Some(&[2.0, 3.0][..]));
        assert_eq!(view.predecessors(2), &[0, 1]);
        assert_eq!(view.in_weights(2), Some(&[3.0, 4.0][..]));
        assert_eq!(view.out_degree(2), 0);
        assert_eq!(view.in_degree(0), 0);
    }

    #[test]
    fn test_unweighted_view() {
        let view = GraphView::from_adjacency_list(vec![1, 2], vec![vec![1], vec![0]], None);
        assert!(view.weights(0).is_none());
        assert!(view.in_weights(1).is_none());
        assert_eq!(view.predecessors(0), &[1]);
    }
}
