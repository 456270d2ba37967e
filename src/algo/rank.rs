//! Weighted PageRank over a projection, ordered for presentation

use crate::config::validate_page_rank;
use crate::error::{EngineError, EngineResult};
use crate::graph::{GraphError, GraphStore, NodeId};
use crate::projection::Projection;
use serde::{Deserialize, Serialize};
use tracing::info;
use tripgraph_algorithms::{page_rank_scores, PageRankConfig};

/// A location and its PageRank score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    pub name: String,
    pub score: f64,
}

/// Run PageRank over `projection` and order the result by descending score,
/// ties broken by ascending name.
///
/// Runs exactly `config.iterations` rounds starting from `1/N` per node.
pub fn rank(
    store: &GraphStore,
    projection: &Projection,
    config: &PageRankConfig,
) -> EngineResult<Vec<RankedNode>> {
    validate_page_rank(config)?;
    if projection.node_count() == 0 {
        return Err(EngineError::EmptyGraph);
    }

    info!(
        "Running PageRank on '{}' ({} nodes, {} iterations, damping {})",
        projection.name(),
        projection.node_count(),
        config.iterations,
        config.damping_factor
    );

    let view = projection.view();
    let scores = page_rank_scores(view, config);

    let mut ranking = scores
        .into_iter()
        .enumerate()
        .map(|(idx, score)| -> EngineResult<RankedNode> {
            let id = NodeId::new(view.index_to_node[idx]);
            let name = store
                .node_name(id)
                .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
            Ok(RankedNode {
                name: name.to_string(),
                score,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    ranking.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    Ok(ranking)
}
