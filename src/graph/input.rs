//! Graph hand-off from the storage collaborator
//!
//! The backing store supplies node names and edges once, before any query
//! runs. Assembly is all-or-nothing: the first bad node or edge aborts it and
//! no partially built store escapes.

use super::property::PropertyMap;
use super::store::{GraphResult, GraphStore};
use serde::{Deserialize, Serialize};
use tracing::info;

fn default_directed() -> bool {
    true
}

/// Edge as supplied by the storage collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeInput {
    pub source: String,
    pub target: String,
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub properties: PropertyMap,
}

impl EdgeInput {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            directed: true,
            properties: PropertyMap::new(),
        }
    }

    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: f64) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

/// Complete graph description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
}

impl GraphInput {
    /// Parse a graph description from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn node(mut self, name: impl Into<String>) -> Self {
        self.nodes.push(name.into());
        self
    }

    pub fn edge(mut self, edge: EdgeInput) -> Self {
        self.edges.push(edge);
        self
    }
}

impl GraphStore {
    /// Assemble a store from a complete graph description
    pub fn from_input(input: &GraphInput) -> GraphResult<GraphStore> {
        let mut store = GraphStore::new();

        for name in &input.nodes {
            store.add_node(name.as_str())?;
        }
        for edge in &input.edges {
            store.add_edge_by_name(
                &edge.source,
                &edge.target,
                edge.directed,
                edge.properties.clone(),
            )?;
        }

        info!(
            "Assembled trip graph: {} nodes, {} edges",
            store.node_count(),
            store.edge_count()
        );
        Ok(store)
    }
}
