//! Tripgraph
//!
//! In-process analytics over a graph of locations connected by trips:
//!
//! - hop-count shortest path between two named locations (BFS, caller-chosen
//!   direction)
//! - weighted PageRank over an ephemeral, named projection that pins one edge
//!   property as the weight
//!
//! The graph is handed over once by a storage collaborator and is read-only
//! afterwards. Algorithm kernels live in the `tripgraph-algorithms` crate;
//! this crate owns the data model, projection lifecycle and the facade.
//!
//! ## Example Usage
//!
//! ```rust
//! use tripgraph::{Direction, EdgeInput, Engine, EngineConfig, GraphInput};
//!
//! let input = GraphInput::default()
//!     .node("1")
//!     .node("2")
//!     .node("3")
//!     .edge(EdgeInput::new("1", "2").with_property("distance", 5.0))
//!     .edge(EdgeInput::new("2", "3").with_property("distance", 2.0))
//!     .edge(EdgeInput::new("1", "3").with_property("distance", 100.0));
//!
//! let engine = Engine::from_input(&input, EngineConfig::default()).unwrap();
//!
//! let route = engine.shortest_path("1", "3", Direction::Outgoing).unwrap().unwrap();
//! assert_eq!(route.hops, 1);
//!
//! let summary = engine.page_rank(20, "distance").unwrap();
//! assert_eq!(summary.top().unwrap().name, "3");
//! assert_eq!(summary.bottom().unwrap().name, "1");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod projection;

// Re-export main types for convenience
pub use graph::{
    Direction, Edge, EdgeId, EdgeInput, GraphError, GraphInput, GraphResult, GraphStore, Node,
    NodeId, PropertyMap, Topology,
};

pub use algo::{RankedNode, ShortestPath};
pub use config::EngineConfig;
pub use engine::{Engine, PageRankSummary};
pub use error::{EngineError, EngineResult};
pub use projection::{
    Projection, ProjectionError, ProjectionGuard, ProjectionManager, ProjectionResult,
};
pub use tripgraph_algorithms::PageRankConfig;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
