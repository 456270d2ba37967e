//! Pathfinding algorithms
//!
//! Unweighted shortest path by hop count (BFS).

use super::common::{Direction, Topology};
use std::collections::{HashMap, VecDeque};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<N> {
    /// Nodes from source to target, both included
    pub path: Vec<N>,
    /// Number of edges traversed
    pub hops: usize,
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Neighbors are expanded in the order the topology returns them, so among
/// several shortest paths the first one discovered wins. A node is marked
/// visited when it is enqueued and never enqueued twice.
pub fn bfs<G>(
    graph: &G,
    source: G::Node,
    target: G::Node,
    direction: Direction,
) -> Option<PathResult<G::Node>>
where
    G: Topology + ?Sized,
{
    let mut queue = VecDeque::new();
    let mut visited = HashMap::new(); // node -> parent

    queue.push_back(source);
    visited.insert(source, None);

    while let Some(current) = queue.pop_front() {
        if current == target {
            // Reconstruct path
            let mut path = Vec::new();
            let mut curr = Some(target);
            while let Some(node) = curr {
                path.push(node);
                curr = visited.get(&node).copied().flatten();
            }
            path.reverse();
            return Some(PathResult {
                hops: path.len() - 1,
                path,
            });
        }

        for (next, _) in graph.neighbors(current, direction) {
            if !visited.contains_key(&next) {
                visited.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directed adjacency list keyed by position; names are "n{idx}"
    struct Adjacency {
        edges: Vec<(usize, usize)>,
        names: Vec<String>,
    }

    impl Adjacency {
        fn new(n: usize, edges: &[(usize, usize)]) -> Self {
            Self {
                edges: edges.to_vec(),
                names: (0..n).map(|i| format!("n{}", i)).collect(),
            }
        }
    }

    impl Topology for Adjacency {
        type Node = usize;
        type Edge = (usize, usize);

        fn lookup_by_name(&self, name: &str) -> Option<usize> {
            self.names.iter().position(|n| n == name)
        }

        fn neighbors(&self, node: usize, direction: Direction) -> Vec<(usize, &(usize, usize))> {
            self.edges
                .iter()
                .filter_map(|e| match direction {
                    Direction::Outgoing if e.0 == node => Some((e.1, e)),
                    Direction::Incoming if e.1 == node => Some((e.0, e)),
                    Direction::Both if e.0 == node => Some((e.1, e)),
                    Direction::Both if e.1 == node => Some((e.0, e)),
                    _ => None,
                })
                .collect()
        }
    }

    #[test]
    fn test_bfs() {
        // 0 -> 1 -> 2
        let graph = Adjacency::new(3, &[(0, 1), (1, 2)]);

        let result = bfs(&graph, 0, 2, Direction::Outgoing).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.hops, 2);
    }

    #[test]
    fn test_bfs_source_is_target() {
        let graph = Adjacency::new(2, &[(0, 1)]);
        let result = bfs(&graph, 1, 1, Direction::Outgoing).unwrap();
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.hops, 0);
    }

    #[test]
    fn test_bfs_respects_direction() {
        // 0 -> 1 <- 2
        let graph = Adjacency::new(3, &[(0, 1), (2, 1)]);

        assert!(bfs(&graph, 0, 2, Direction::Outgoing).is_none());
        let undirected = bfs(&graph, 0, 2, Direction::Both).unwrap();
        assert_eq!(undirected.path, vec![0, 1, 2]);

        let reverse = bfs(&graph, 1, 0, Direction::Incoming).unwrap();
        assert_eq!(reverse.path, vec![1, 0]);
    }

    #[test]
    fn test_bfs_first_discovered_tie_wins() {
        // Two shortest routes 0->1->3 and 0->2->3; edge 0->1 inserted first
        let graph = Adjacency::new(4, &[(0, 1), (0, 2), (2, 3), (1, 3)]);
        let result = bfs(&graph, 0, 3, Direction::Outgoing).unwrap();
        assert_eq!(result.path, vec![0, 1, 3]);
    }

    #[test]
    fn test_bfs_handles_cycles() {
        let graph = Adjacency::new(4, &[(0, 1), (1, 0), (1, 2), (2, 1)]);
        assert!(bfs(&graph, 0, 3, Direction::Both).is_none());
        assert_eq!(graph.lookup_by_name("n2"), Some(2));
    }
}
