//! Charts module - chart specs and rendering

mod plotter;
mod spec;

pub use plotter::ChartPlotter;
pub use spec::{update_pie_chart, update_scatter_chart, ChartSpec, PieChartSpec, ScatterChartSpec};
