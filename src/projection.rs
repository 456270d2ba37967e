//! Named, ephemeral projections of the trip graph
//!
//! A projection pins one edge property as the weight for a ranking run and
//! carries the dense weighted view the ranking kernel consumes. Names are
//! exclusive while a projection is active. `open` hands back a guard that
//! releases the name when dropped, so an early return or a panic in the
//! ranking run cannot leave the name held.

use crate::algo::build_view;
use crate::graph::property::is_usable_weight;
use crate::graph::GraphStore;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};
use tripgraph_algorithms::GraphView;

/// Projection errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A projection with this name is already active
    #[error("Projection '{0}' is already active")]
    Conflict(String),

    /// A covered edge lacks a usable value for the weight property
    #[error("Projection '{projection}': edge {edge} has no usable '{property}' weight")]
    InvalidWeightProperty {
        projection: String,
        property: String,
        edge: String,
    },
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Weighted view of the graph scoped to one ranking run
#[derive(Debug)]
pub struct Projection {
    name: String,
    weight_property: String,
    view: GraphView,
}

impl Projection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight_property(&self) -> &str {
        &self.weight_property
    }

    /// Dense view; node order follows store insertion order
    pub fn view(&self) -> &GraphView {
        &self.view
    }

    pub fn node_count(&self) -> usize {
        self.view.node_count
    }
}

/// Tracks which projection names are active
#[derive(Debug, Default)]
pub struct ProjectionManager {
    /// name -> token of the guard currently holding it
    active: Mutex<HashMap<String, u64>>,
    next_token: AtomicU64,
}

impl ProjectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_active(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open a projection over every node and edge of `store`.
    ///
    /// Fails with `Conflict` while `name` is held, and with
    /// `InvalidWeightProperty` if any edge lacks a finite, non-negative
    /// `weight_property`. On validation failure the name is released again
    /// before the error is returned.
    pub fn open(
        &self,
        store: &GraphStore,
        name: &str,
        weight_property: &str,
    ) -> ProjectionResult<ProjectionGuard<'_>> {
        let token = self.reserve(name)?;
        let release = ReleaseOnDrop {
            manager: self,
            name: name.to_string(),
            token,
            armed: true,
        };

        if let Some(edge) = store
            .edges()
            .iter()
            .find(|e| !e.weight(weight_property).is_some_and(is_usable_weight))
        {
            warn!(
                "Rolling back projection '{}': edge {} lacks weight '{}'",
                name, edge.id, weight_property
            );
            return Err(ProjectionError::InvalidWeightProperty {
                projection: name.to_string(),
                property: weight_property.to_string(),
                edge: edge.id.to_string(),
            });
        }

        let view = build_view(store, weight_property);
        info!(
            "Opened projection '{}' on '{}' ({} nodes, {} arcs)",
            name,
            weight_property,
            view.node_count,
            view.out_targets.len()
        );

        Ok(ProjectionGuard {
            release,
            projection: Projection {
                name: name.to_string(),
                weight_property: weight_property.to_string(),
                view,
            },
        })
    }

    fn reserve(&self, name: &str) -> ProjectionResult<u64> {
        let mut active = self.lock_active();
        if active.contains_key(name) {
            return Err(ProjectionError::Conflict(name.to_string()));
        }

        let token = self.next_token.fetch_add(1, Ordering::Relaxed) + 1;
        active.insert(name.to_string(), token);
        Ok(token)
    }

    /// Release `name`. Closing an inactive or already closed name is a no-op.
    pub fn close(&self, name: &str) {
        if self.lock_active().remove(name).is_some() {
            debug!("Closed projection '{}'", name);
        }
    }

    /// Release `name` only if it is still held by `token`
    fn release(&self, name: &str, token: u64) {
        let mut active = self.lock_active();
        if active.get(name) == Some(&token) {
            active.remove(name);
            debug!("Released projection '{}'", name);
        }
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.lock_active().contains_key(name)
    }

    /// Names of active projections, sorted
    pub fn active(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock_active().keys().cloned().collect();
        names.sort();
        names
    }
}

/// Releases a reserved name when dropped unless disarmed
#[derive(Debug)]
struct ReleaseOnDrop<'m> {
    manager: &'m ProjectionManager,
    name: String,
    token: u64,
    armed: bool,
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.manager.release(&self.name, self.token);
        }
    }
}

/// Scoped ownership of an open projection; closes it on drop.
///
/// If the name was closed explicitly through the manager and then reopened by
/// someone else, dropping this guard leaves the newer projection alone.
#[derive(Debug)]
pub struct ProjectionGuard<'m> {
    release: ReleaseOnDrop<'m>,
    projection: Projection,
}

impl ProjectionGuard<'_> {
    /// Close the projection now
    pub fn close(mut self) {
        self.release.armed = false;
        self.release.manager.release(&self.release.name, self.release.token);
    }
}

impl Deref for ProjectionGuard<'_> {
    type Target = Projection;

    fn deref(&self) -> &Projection {
        &self.projection
    }
}
