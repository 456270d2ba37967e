pub mod common;
pub mod pagerank;
pub mod pathfinding;

pub use common::{Direction, GraphView, NodeId, Topology};
pub use pagerank::{out_weights, page_rank_scores, pagerank_step, OutWeights, PageRankConfig};
pub use pathfinding::{bfs, PathResult};
