//! Core trip graph implementation
//!
//! This module implements the location/trip data model with:
//! - Location nodes with unique names
//! - Directed or undirected trip edges carrying named numeric weights
//! - Multiple edges between the same pair of locations
//! - In-memory storage with an adjacency index in both directions

pub mod edge;
pub mod input;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use input::{EdgeInput, GraphInput};
pub use node::Node;
pub use property::PropertyMap;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, NodeId};
pub use tripgraph_algorithms::{Direction, Topology};
