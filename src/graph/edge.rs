//! Trip edge between two locations
//!
//! Edges are directed unless flagged otherwise; an undirected edge can be
//! walked from either endpoint. Multiple edges between the same pair of
//! locations are allowed.

use super::property::PropertyMap;
use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// A weighted connection between two locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Whether the edge only runs from source to target
    pub directed: bool,

    /// Named weights associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new edge with properties
    pub fn new(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        directed: bool,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            id,
            source,
            target,
            directed,
            properties,
        }
    }

    /// Get a weight property
    pub fn weight(&self, key: &str) -> Option<f64> {
        self.properties.get(key).copied()
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}
