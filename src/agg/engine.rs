//! Aggregation Engine Module
//! Pure functions deriving chart data from the dataset and control values.

use crate::data::LaunchDataset;

/// Sentinel value for the site selector meaning "no site filter".
pub const ALL_SITES: &str = "All Sites";

/// One labeled value for proportional (pie) rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
}

/// One filtered record for scatter rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass: f64,
    pub outcome: u8,
    pub booster: String,
}

/// Stateless filtering and aggregation over a loaded dataset. Given
/// identical inputs these functions always return identical output,
/// which is what keeps the charts consistent with the visible controls.
pub struct Aggregator;

impl Aggregator {
    /// Success counts for the pie chart.
    ///
    /// For [`ALL_SITES`], one slice per distinct site (first-seen order)
    /// valued by its success count; sites with no successes still appear
    /// with value 0. For a specific site, "Success" and "Failure" slices
    /// counting that site's outcomes, with only observed categories
    /// emitted. An unknown site yields an empty result.
    pub fn success_counts(dataset: &LaunchDataset, selected_site: &str) -> Vec<PieSlice> {
        if selected_site == ALL_SITES {
            let sites = dataset.sites();
            let mut counts = vec![0u32; sites.len()];
            for record in dataset.records() {
                if record.outcome == 1 {
                    if let Some(idx) = sites.iter().position(|s| *s == record.site) {
                        counts[idx] += 1;
                    }
                }
            }
            sites
                .iter()
                .zip(counts)
                .map(|(site, value)| PieSlice {
                    label: site.clone(),
                    value,
                })
                .collect()
        } else {
            let mut successes = 0u32;
            let mut failures = 0u32;
            for record in dataset.records() {
                if record.site != selected_site {
                    continue;
                }
                if record.outcome == 1 {
                    successes += 1;
                } else {
                    failures += 1;
                }
            }

            let mut slices = Vec::new();
            if successes > 0 {
                slices.push(PieSlice {
                    label: "Success".to_string(),
                    value: successes,
                });
            }
            if failures > 0 {
                slices.push(PieSlice {
                    label: "Failure".to_string(),
                    value: failures,
                });
            }
            slices
        }
    }

    /// Records for the scatter chart: payload mass within `[low, high]`
    /// (inclusive), optionally restricted to one site, in source order.
    /// Records without a payload mass never match; an inverted range
    /// yields an empty result rather than an error.
    pub fn payload_outcome(
        dataset: &LaunchDataset,
        selected_site: &str,
        payload_range: (f64, f64),
    ) -> Vec<ScatterPoint> {
        let (low, high) = payload_range;
        if low > high {
            return Vec::new();
        }

        dataset
            .records()
            .iter()
            .filter_map(|record| {
                let payload_mass = record.payload_mass?;
                if payload_mass < low || payload_mass > high {
                    return None;
                }
                if selected_site != ALL_SITES && record.site != selected_site {
                    return None;
                }
                Some(ScatterPoint {
                    payload_mass,
                    outcome: record.outcome,
                    booster: record.booster.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LaunchRecord;

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

    fn slices(pairs: &[(&str, u32)]) -> Vec<PieSlice> {
        pairs
            .iter()
            .map(|(label, value)| PieSlice {
                label: label.to_string(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let dataset = scenario_dataset();
        assert_eq!(
            Aggregator::success_counts(&dataset, ALL_SITES),
            slices(&[("A", 1), ("B", 1)])
        );
    }

    #[test]
    fn all_sites_keeps_zero_success_sites() {
        let dataset = LaunchDataset::new(vec![
            record("A", Some(500.0), 1, "v1"),
            record("B", Some(800.0), 0, "v2"),
        ]);
        assert_eq!(
            Aggregator::success_counts(&dataset, ALL_SITES),
            slices(&[("A", 1), ("B", 0)])
        );
    }

    #[test]
    fn all_sites_counts_sum_to_total_successes() {
        let dataset = LaunchDataset::new(vec![
            record("A", Some(500.0), 1, "v1"),
            record("B", Some(800.0), 1, "v2"),
            record("A", Some(300.0), 1, "v1"),
            record("C", None, 0, "v3"),
            record("B", Some(1200.0), 0, "v2"),
        ]);
        let total_successes = dataset
            .records()
            .iter()
            .filter(|r| r.outcome == 1)
            .count() as u32;

        let sum: u32 = Aggregator::success_counts(&dataset, ALL_SITES)
            .iter()
            .map(|s| s.value)
            .sum();
        assert_eq!(sum, total_successes);
    }

    #[test]
    fn single_site_splits_success_and_failure() {
        let dataset = scenario_dataset();
        assert_eq!(
            Aggregator::success_counts(&dataset, "A"),
            slices(&[("Success", 1), ("Failure", 1)])
        );
    }

    #[test]
    fn single_site_counts_sum_to_site_records() {
        let dataset = LaunchDataset::new(vec![
            record("A", Some(500.0), 1, "v1"),
            record("A", Some(700.0), 0, "v1"),
            record("A", None, 1, "v2"),
            record("B", Some(800.0), 1, "v2"),
        ]);
        let site_records = dataset.records().iter().filter(|r| r.site == "A").count() as u32;

        let sum: u32 = Aggregator::success_counts(&dataset, "A")
            .iter()
            .map(|s| s.value)
            .sum();
        assert_eq!(sum, site_records);
    }

    #[test]
    fn single_site_omits_unobserved_category() {
        let dataset = scenario_dataset();
        assert_eq!(
            Aggregator::success_counts(&dataset, "B"),
            slices(&[("Success", 1)])
        );
    }

    #[test]
    fn unknown_site_yields_empty_pie() {
        let dataset = scenario_dataset();
        assert!(Aggregator::success_counts(&dataset, "Nowhere").is_empty());
    }

    #[test]
    fn scatter_bounds_are_inclusive() {
        let dataset = scenario_dataset();
        let points = Aggregator::payload_outcome(&dataset, ALL_SITES, (0.0, 1000.0));
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].payload_mass, 500.0);
        assert_eq!(points[1].payload_mass, 800.0);

        // Endpoints exactly on the bounds are kept
        let points = Aggregator::payload_outcome(&dataset, ALL_SITES, (500.0, 800.0));
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn scatter_keeps_source_order_within_bounds() {
        let dataset = LaunchDataset::new(vec![
            record("A", Some(900.0), 1, "v1"),
            record("B", Some(100.0), 0, "v2"),
            record("A", Some(400.0), 1, "v1"),
        ]);
        let points = Aggregator::payload_outcome(&dataset, ALL_SITES, (0.0, 1000.0));
        let masses: Vec<f64> = points.iter().map(|p| p.payload_mass).collect();
        assert_eq!(masses, [900.0, 100.0, 400.0]);
    }

    #[test]
    fn scatter_site_filter_restricts_rows() {
        let dataset = scenario_dataset();
        let points = Aggregator::payload_outcome(&dataset, "A", (0.0, 2000.0));
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.booster == "v1"));
    }

    #[test]
    fn full_range_matches_unfiltered_rows() {
        let dataset = scenario_dataset();
        let (min_payload, max_payload) = dataset.payload_bounds();
        let points = Aggregator::payload_outcome(&dataset, ALL_SITES, (min_payload, max_payload));
        assert_eq!(points.len(), dataset.len());
    }

    #[test]
    fn inverted_range_yields_empty_scatter() {
        let dataset = scenario_dataset();
        assert!(Aggregator::payload_outcome(&dataset, ALL_SITES, (1000.0, 0.0)).is_empty());
    }

    #[test]
    fn missing_payload_never_matches_a_range() {
        let dataset = LaunchDataset::new(vec![
            record("A", None, 1, "v1"),
            record("A", Some(500.0), 1, "v1"),
        ]);
        let points = Aggregator::payload_outcome(&dataset, ALL_SITES, (0.0, 10000.0));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].payload_mass, 500.0);
    }

    #[test]
    fn aggregations_are_idempotent() {
        let dataset = scenario_dataset();
        assert_eq!(
            Aggregator::success_counts(&dataset, "A"),
            Aggregator::success_counts(&dataset, "A")
        );
        assert_eq!(
            Aggregator::payload_outcome(&dataset, "A", (0.0, 1000.0)),
            Aggregator::payload_outcome(&dataset, "A", (0.0, 1000.0))
        );
    }
}
