//! Aggregation engine - pure filtering and aggregation over the dataset

mod callbacks;
mod engine;
mod state;

pub use callbacks::{Callback, CallbackRegistry, ControlId, OutputId};
pub use engine::{Aggregator, PieSlice, ScatterPoint, ALL_SITES};
pub use state::ControlState;
