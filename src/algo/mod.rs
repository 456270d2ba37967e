//! Graph algorithms module
//!
//! Algorithms are implemented in the `tripgraph-algorithms` crate.
//! This module provides the integration/adapter layer: it builds dense views
//! from the store and maps kernel results back to location names.

pub mod path;
pub mod rank;

use crate::graph::{GraphStore, Topology};
use tripgraph_algorithms::{Direction, GraphView, NodeId as AlgoNodeId};

pub use path::{shortest_path, ShortestPath};
pub use rank::{rank, RankedNode};

// Re-export kernels
pub use tripgraph_algorithms::{bfs, PageRankConfig, PathResult};

/// Build a GraphView from the store for algorithm execution
///
/// Node order follows store insertion order. Every edge walkable away from a
/// node becomes one arc weighted by `weight_property`, so an undirected edge
/// yields an arc in each direction. Edges lacking the property weigh 1.0.
pub fn build_view(store: &GraphStore, weight_property: &str) -> GraphView {
    // 1. Index mapping is the identity over insertion order
    let index_to_node: Vec<AlgoNodeId> = store.nodes().iter().map(|n| n.id.as_u64()).collect();
    let node_count = index_to_node.len();

    // 2. Build adjacency lists
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut weights: Vec<Vec<f64>> = vec![Vec::new(); node_count];

    for (u_idx, node) in store.nodes().iter().enumerate() {
        for (target, edge) in store.neighbors(node.id, Direction::Outgoing) {
            outgoing[u_idx].push(target.as_u64() as usize);
            weights[u_idx].push(edge.weight(weight_property).unwrap_or(1.0));
        }
    }

    // 3. Convert to CSR
    GraphView::from_adjacency_list(index_to_node, outgoing, Some(weights))
}
