//! Error types for the analytics engine

use crate::graph::GraphError;
use crate::projection::ProjectionError;
use thiserror::Error;

/// Errors surfaced by the engine facade and the algorithm adapters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Graph assembly or name resolution error
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Projection lifecycle or validation error
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Ranking requested over a graph with no nodes
    #[error("Cannot rank an empty graph")]
    EmptyGraph,

    /// Invalid configuration or algorithm parameter
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration or graph description could not be parsed
    #[error("Input error: {0}")]
    Input(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Input(e.to_string())
    }
}

impl From<serde_yaml::Error> for EngineError {
    fn from(e: serde_yaml::Error) -> Self {
        EngineError::Input(e.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
