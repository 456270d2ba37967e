//! Engine configuration
//!
//! Loaded from YAML or JSON; every field has a default so a partial document
//! (or none at all) is valid.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use tripgraph_algorithms::{Direction, PageRankConfig};

/// Name under which the facade opens its ranking projection
pub const DEFAULT_PROJECTION_NAME: &str = "TripGraph";

/// Configuration for the analytics engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Projection name used by `Engine::page_rank`
    pub projection_name: String,
    /// PageRank damping factor, in (0, 1]
    pub damping_factor: f64,
    /// PageRank rounds used by `Engine::page_rank_default`
    pub max_iterations: usize,
    /// Traversal direction for `Engine::shortest_path_default`
    pub default_direction: Direction,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            projection_name: DEFAULT_PROJECTION_NAME.to_string(),
            damping_factor: 0.85,
            max_iterations: 20,
            default_direction: Direction::Outgoing,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.projection_name.is_empty() {
            return Err(EngineError::InvalidConfig(
                "projection name must not be empty".to_string(),
            ));
        }
        validate_page_rank(&self.page_rank_config(self.max_iterations))
    }

    /// PageRank parameters with the configured damping factor
    pub fn page_rank_config(&self, iterations: usize) -> PageRankConfig {
        PageRankConfig {
            damping_factor: self.damping_factor,
            iterations,
        }
    }
}

/// Reject parameters outside `iterations > 0` and `damping in (0, 1]`
pub fn validate_page_rank(config: &PageRankConfig) -> EngineResult<()> {
    if config.iterations == 0 {
        return Err(EngineError::InvalidConfig(
            "max iterations must be greater than 0".to_string(),
        ));
    }
    if !(config.damping_factor > 0.0 && config.damping_factor <= 1.0) {
        return Err(EngineError::InvalidConfig(format!(
            "damping factor {} is outside (0, 1]",
            config.damping_factor
        )));
    }
    Ok(())
}
