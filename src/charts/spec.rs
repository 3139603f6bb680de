//! Chart Spec Module
//! Wraps the aggregation results into renderable chart specifications.

use crate::agg::{Aggregator, PieSlice, ScatterPoint, ALL_SITES};
use crate::data::LaunchDataset;

/// Proportional chart: category labels, values, and a title describing
/// the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// Scatter chart: payload mass on x, outcome on y, colored by booster.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChartSpec {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// A fully prepared chart, ready for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Pie(PieChartSpec),
    Scatter(ScatterChartSpec),
}

/// Build the success-rate pie chart for the current site selection.
pub fn update_pie_chart(dataset: &LaunchDataset, selected_site: &str) -> PieChartSpec {
    let title = if selected_site == ALL_SITES {
        "Total Successful Launches by Site".to_string()
    } else {
        format!("Success vs Failure for site {selected_site}")
    };

    PieChartSpec {
        title,
        slices: Aggregator::success_counts(dataset, selected_site),
    }
}

/// Build the payload-vs-outcome scatter chart for the current selection.
pub fn update_scatter_chart(
    dataset: &LaunchDataset,
    selected_site: &str,
    payload_range: (f64, f64),
) -> ScatterChartSpec {
    ScatterChartSpec {
        title: "Correlation between Payload and Success".to_string(),
        points: Aggregator::payload_outcome(dataset, selected_site, payload_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LaunchDataset, LaunchRecord};

    fn record(site: &str, payload_mass: Option<f64>, outcome: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass,
            outcome,
            booster: booster.to_string(),
        }
    }

    fn scenario_dataset() -> LaunchDataset {
        LaunchDataset::new(vec![
            record("A", Some(500.0), 1, "v1"),
            record("A", Some(1500.0), 0, "v1"),
            record("B", Some(800.0), 1, "v2"),
        ])
    }

    #[test]
    fn pie_title_describes_the_selection() {
        let dataset = scenario_dataset();
        assert_eq!(
            update_pie_chart(&dataset, ALL_SITES).title,
            "Total Successful Launches by Site"
        );
        assert_eq!(
            update_pie_chart(&dataset, "A").title,
            "Success vs Failure for site A"
        );
    }

    #[test]
    fn scatter_title_is_fixed() {
        let dataset = scenario_dataset();
        let spec = update_scatter_chart(&dataset, ALL_SITES, (0.0, 1000.0));
        assert_eq!(spec.title, "Correlation between Payload and Success");
        assert_eq!(spec.points.len(), 2);
    }

    #[test]
    fn empty_selection_still_produces_a_spec() {
        let dataset = scenario_dataset();
        let spec = update_pie_chart(&dataset, "Nowhere");
        assert!(spec.slices.is_empty());

        let spec = update_scatter_chart(&dataset, ALL_SITES, (2000.0, 3000.0));
        assert!(spec.points.is_empty());
    }
}
