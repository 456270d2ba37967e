//! Numeric edge properties
//!
//! Trip edges carry named weights (e.g. `distance`). Insertion order of the
//! keys is preserved so serialized edges round-trip deterministically.

use indexmap::IndexMap;

/// Property map for an edge: property name -> weight
pub type PropertyMap = IndexMap<String, f64>;

/// Whether a value can act as a PageRank weight
pub fn is_usable_weight(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
