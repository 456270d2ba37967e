//! In-memory graph storage implementation
//!
//! Nodes and edges live in arenas indexed by their ids. Two adjacency lists per
//! node (edges leaving it, edges entering it) hold edge ids in insertion
//! order, which is what makes neighbor iteration deterministic.
//!
//! The store is built by a single writer and is read-only afterwards; shared
//! references can be handed to any number of threads.

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyMap;
use super::types::{EdgeId, NodeId};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;
use tripgraph_algorithms::{Direction, Topology};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid edge: endpoint {0} does not exist")]
    UnknownNode(String),

    #[error("Node '{0}' not found")]
    NodeNotFound(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - nodes: NodeId -> Node
/// - edges: EdgeId -> Edge
/// - outgoing: NodeId -> Vec<EdgeId> (edges whose source is the node)
/// - incoming: NodeId -> Vec<EdgeId> (edges whose target is the node)
/// - name_index: name -> NodeId
#[derive(Debug, Default)]
pub struct GraphStore {
    /// Node storage, indexed by NodeId
    nodes: Vec<Node>,

    /// Edge storage, indexed by EdgeId
    edges: Vec<Edge>,

    /// Outgoing edges for each node (adjacency list)
    outgoing: Vec<Vec<EdgeId>>,

    /// Incoming edges for each node (adjacency list)
    incoming: Vec<Vec<EdgeId>>,

    /// Name index for lookups
    name_index: FxHashMap<String, NodeId>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location node. Fails if the name is already taken.
    pub fn add_node(&mut self, name: impl Into<String>) -> GraphResult<NodeId> {
        let name = name.into();
        if self.name_index.contains_key(&name) {
            return Err(GraphError::DuplicateName(name));
        }

        let id = NodeId::new(self.nodes.len() as u64);
        self.name_index.insert(name.clone(), id);
        self.nodes.push(Node::new(id, name));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());

        Ok(id)
    }

    /// Add a trip edge between two existing nodes
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        directed: bool,
        properties: PropertyMap,
    ) -> GraphResult<EdgeId> {
        if !self.has_node(source) {
            return Err(GraphError::UnknownNode(source.to_string()));
        }
        if !self.has_node(target) {
            return Err(GraphError::UnknownNode(target.to_string()));
        }

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Edge::new(id, source, target, directed, properties));
        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);

        debug!("Added edge {} from {} to {} (directed: {})", id, source, target, directed);
        Ok(id)
    }

    /// Add a trip edge, resolving endpoints by name
    pub fn add_edge_by_name(
        &mut self,
        source: &str,
        target: &str,
        directed: bool,
        properties: PropertyMap,
    ) -> GraphResult<EdgeId> {
        let source_id = self
            .lookup_by_name(source)
            .ok_or_else(|| GraphError::UnknownNode(source.to_string()))?;
        let target_id = self
            .lookup_by_name(target)
            .ok_or_else(|| GraphError::UnknownNode(target.to_string()))?;
        self.add_edge(source_id, target_id, directed, properties)
    }

    /// Resolve a node name, failing with `NodeNotFound`
    pub fn lookup(&self, name: &str) -> GraphResult<NodeId> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Get a node by ID
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a node's name by ID
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    /// Get an edge by ID
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges incident to `node`, merged from both adjacency lists in
    /// insertion order. A self loop sits in both lists and is yielded once.
    fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        let (out, inc) = match (self.outgoing.get(node.index()), self.incoming.get(node.index())) {
            (Some(out), Some(inc)) => (out.as_slice(), inc.as_slice()),
            _ => (&[] as &[EdgeId], &[] as &[EdgeId]),
        };

        let (mut i, mut j) = (0, 0);
        std::iter::from_fn(move || {
            let next = match (out.get(i), inc.get(j)) {
                (Some(a), Some(b)) if a == b => {
                    i += 1;
                    j += 1;
                    *a
                }
                (Some(a), Some(b)) if a < b => {
                    i += 1;
                    *a
                }
                (_, Some(b)) => {
                    j += 1;
                    *b
                }
                (Some(a), None) => {
                    i += 1;
                    *a
                }
                (None, None) => return None,
            };
            Some(&self.edges[next.index()])
        })
    }
}

impl Topology for GraphStore {
    type Node = NodeId;
    type Edge = Edge;

    fn lookup_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Undirected edges are walkable from both endpoints in every direction
    fn neighbors(&self, node: NodeId, direction: Direction) -> Vec<(NodeId, &Edge)> {
        self.incident_edges(node)
            .filter(|edge| match direction {
                Direction::Outgoing => edge.source == node || !edge.directed,
                Direction::Incoming => edge.target == node || !edge.directed,
                Direction::Both => true,
            })
            .filter_map(|edge| edge.other_end(node).map(|neighbor| (neighbor, edge)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(distance: f64) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("distance".to_string(), distance);
        map
    }

    fn names(store: &GraphStore, neighbors: Vec<(NodeId, &Edge)>) -> Vec<String> {
        neighbors
            .into_iter()
            .map(|(id, _)| store.node_name(id).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_add_nodes_and_lookup() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").unwrap();
        let b = store.add_node("B").unwrap();

        assert_ne!(a, b);
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.lookup("B").unwrap(), b);
        assert_eq!(store.lookup_by_name("A"), Some(a));
        assert_eq!(store.lookup("Z"), Err(GraphError::NodeNotFound("Z".to_string())));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut store = GraphStore::new();
        store.add_node("A").unwrap();
        assert_eq!(store.add_node("A"), Err(GraphError::DuplicateName("A".to_string())));
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_edge_requires_existing_endpoints() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").unwrap();
        let ghost = NodeId::new(7);

        let err = store.add_edge(a, ghost, true, props(1.0)).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode(_)));
        assert_eq!(store.edge_count(), 0);

        let err = store.add_edge_by_name("Nowhere", "A", true, props(1.0)).unwrap_err();
        assert_eq!(err, GraphError::UnknownNode("Nowhere".to_string()));
    }

    #[test]
    fn test_neighbors_by_direction() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").unwrap();
        let b = store.add_node("B").unwrap();
        let c = store.add_node("C").unwrap();
        let d = store.add_node("D").unwrap();

        store.add_edge(a, b, true, props(1.0)).unwrap();
        store.add_edge(c, a, true, props(2.0)).unwrap();
        store.add_edge(a, d, true, props(3.0)).unwrap();
        store.add_edge(d, a, false, props(4.0)).unwrap();

        assert_eq!(names(&store, store.neighbors(a, Direction::Outgoing)), vec!["B", "D", "D"]);
        assert_eq!(names(&store, store.neighbors(a, Direction::Incoming)), vec!["C", "D"]);
        assert_eq!(names(&store, store.neighbors(a, Direction::Both)), vec!["B", "C", "D", "D"]);

        // The undirected edge is walkable from its target as well
        assert_eq!(names(&store, store.neighbors(d, Direction::Outgoing)), vec!["A"]);
        assert_eq!(names(&store, store.neighbors(d, Direction::Incoming)), vec!["A", "A"]);
    }

    #[test]
    fn test_neighbors_preserve_insertion_order() {
        let mut store = GraphStore::new();
        let hub = store.add_node("Hub").unwrap();
        let spokes: Vec<NodeId> = ["S3", "S1", "S2"]
            .iter()
            .map(|n| store.add_node(*n).unwrap())
            .collect();
        for &s in &spokes {
            store.add_edge(hub, s, true, props(1.0)).unwrap();
        }

        let out = store.neighbors(hub, Direction::Outgoing);
        let ids: Vec<NodeId> = out.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, spokes);
        assert_eq!(out[1].1.id, EdgeId::new(1));
    }

    #[test]
    fn test_self_loop_listed_once() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").unwrap();
        store.add_edge(a, a, true, props(1.0)).unwrap();
        store.add_edge(a, a, false, props(1.0)).unwrap();

        assert_eq!(store.neighbors(a, Direction::Outgoing).len(), 2);
        assert_eq!(store.neighbors(a, Direction::Both).len(), 2);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let store = GraphStore::new();
        assert!(store.neighbors(NodeId::new(3), Direction::Both).is_empty());
        assert!(store.is_empty());
    }
}
