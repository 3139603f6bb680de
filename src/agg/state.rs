//! Control State Module
//! Current values of the two user-facing controls.

use crate::agg::ALL_SITES;

/// The control values the aggregation functions are evaluated against.
/// Initialized from the dataset's derived facts, mutated only by user
/// interaction, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    /// Either [`ALL_SITES`] or a value from the dataset's site list.
    pub selected_site: String,
    /// (low, high) payload mass bounds, inclusive.
    pub payload_range: (f64, f64),
}

impl ControlState {
    /// Initial state: all sites, full payload range.
    pub fn new(payload_bounds: (f64, f64)) -> Self {
        Self {
            selected_site: ALL_SITES.to_string(),
            payload_range: payload_bounds,
        }
    }
}
