//! Hop-count shortest path between named locations

use crate::error::EngineResult;
use crate::graph::{GraphStore, NodeId};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tripgraph_algorithms::{bfs, Direction};

/// A route between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Location names from start to target, both inclusive
    pub path: Vec<String>,
    /// Number of edges traversed (`path.len() - 1`)
    pub hops: usize,
}

/// Shortest path by hop count; edge weights are ignored.
///
/// `Ok(None)` means the target is unreachable under `direction`. Unknown
/// start or target names fail with `NodeNotFound`.
pub fn shortest_path(
    store: &GraphStore,
    start: &str,
    target: &str,
    direction: Direction,
) -> EngineResult<Option<ShortestPath>> {
    let source_id = store.lookup(start)?;
    let target_id = store.lookup(target)?;

    let Some(result) = bfs(store, source_id, target_id, direction) else {
        debug!("No {:?} route from '{}' to '{}'", direction, start, target);
        return Ok(None);
    };

    let path = result
        .path
        .iter()
        .map(|&id| name_of(store, id))
        .collect::<EngineResult<Vec<_>>>()?;

    debug!("Route '{}' -> '{}' in {} hops", start, target, result.hops);
    Ok(Some(ShortestPath {
        path,
        hops: result.hops,
    }))
}

fn name_of(store: &GraphStore, id: NodeId) -> EngineResult<String> {
    store
        .node_name(id)
        .map(str::to_string)
        .ok_or_else(|| crate::graph::GraphError::NodeNotFound(id.to_string()).into())
}
