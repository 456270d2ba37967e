//! Analytics engine facade
//!
//! Owns the assembled graph (the explicit context handed over by the storage
//! collaborator), the engine configuration and the projection manager. Path
//! queries read the store directly; ranking runs open a projection under the
//! configured name, rank it and close it again on every exit path.

use crate::algo::{rank, shortest_path, RankedNode, ShortestPath};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::graph::{GraphInput, GraphStore};
use crate::projection::ProjectionManager;
use serde::{Deserialize, Serialize};
use tripgraph_algorithms::{Direction, PageRankConfig};

/// Full PageRank ordering with convenience accessors for the extremes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankSummary {
    /// Descending by score, ties by ascending name
    pub ranking: Vec<RankedNode>,
}

impl PageRankSummary {
    pub fn new(ranking: Vec<RankedNode>) -> Self {
        Self { ranking }
    }

    /// Highest ranked location
    pub fn top(&self) -> Option<&RankedNode> {
        self.ranking.first()
    }

    /// Lowest ranked location
    pub fn bottom(&self) -> Option<&RankedNode> {
        self.ranking.last()
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedNode> {
        self.ranking.iter()
    }
}

impl IntoIterator for PageRankSummary {
    type Item = RankedNode;
    type IntoIter = std::vec::IntoIter<RankedNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranking.into_iter()
    }
}

/// Entry point for the two analytics operations
#[derive(Debug)]
pub struct Engine {
    store: GraphStore,
    config: EngineConfig,
    projections: ProjectionManager,
}

impl Engine {
    /// Create an engine over a fully built store
    pub fn new(store: GraphStore, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            projections: ProjectionManager::new(),
        })
    }

    /// Create an engine with the default configuration
    pub fn with_store(store: GraphStore) -> Self {
        Self {
            store,
            config: EngineConfig::default(),
            projections: ProjectionManager::new(),
        }
    }

    /// Assemble the graph from a description and create an engine over it
    pub fn from_input(input: &GraphInput, config: EngineConfig) -> EngineResult<Self> {
        let store = GraphStore::from_input(input)?;
        Self::new(store, config)
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn projections(&self) -> &ProjectionManager {
        &self.projections
    }

    /// Hand the graph back to the caller
    pub fn into_store(self) -> GraphStore {
        self.store
    }

    /// Shortest path by hop count; `Ok(None)` when there is no route
    pub fn shortest_path(
        &self,
        start: &str,
        target: &str,
        direction: Direction,
    ) -> EngineResult<Option<ShortestPath>> {
        shortest_path(&self.store, start, target, direction)
    }

    /// Shortest path using the configured default direction
    pub fn shortest_path_default(
        &self,
        start: &str,
        target: &str,
    ) -> EngineResult<Option<ShortestPath>> {
        self.shortest_path(start, target, self.config.default_direction)
    }

    /// PageRank weighted by `weight_property`, with the configured damping factor
    pub fn page_rank(
        &self,
        max_iterations: usize,
        weight_property: &str,
    ) -> EngineResult<PageRankSummary> {
        self.page_rank_with(weight_property, self.config.page_rank_config(max_iterations))
    }

    /// PageRank with the configured round count and damping factor
    pub fn page_rank_default(&self, weight_property: &str) -> EngineResult<PageRankSummary> {
        self.page_rank(self.config.max_iterations, weight_property)
    }

    /// PageRank with explicit kernel parameters.
    ///
    /// The projection is closed before this returns, whether ranking
    /// succeeded or not.
    pub fn page_rank_with(
        &self,
        weight_property: &str,
        config: PageRankConfig,
    ) -> EngineResult<PageRankSummary> {
        let projection = self
            .projections
            .open(&self.store, &self.config.projection_name, weight_property)?;

        let result = rank(&self.store, &projection, &config);
        projection.close();

        result.map(PageRankSummary::new)
    }
}
