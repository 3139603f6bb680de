//! Launch Dataset Module
//! Typed launch records and the derived facts cached at load time.

/// A single launch record from the CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kilograms. Missing in some rows of the source data.
    pub payload_mass: Option<f64>,
    /// 1 = success, 0 = failure.
    pub outcome: u8,
    pub booster: String,
}

/// Ordered, immutable collection of launch records.
///
/// Derived facts are computed once at construction: the distinct launch
/// sites in first-seen order, and the min/max payload mass used to seed
/// the payload range control.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: (f64, f64),
}

impl LaunchDataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.site) {
                sites.push(record.site.clone());
            }
        }

        let mut bounds: Option<(f64, f64)> = None;
        for mass in records.iter().filter_map(|r| r.payload_mass) {
            bounds = Some(match bounds {
                None => (mass, mass),
                Some((low, high)) => (low.min(mass), high.max(mass)),
            });
        }

        Self {
            records,
            sites,
            payload_bounds: bounds.unwrap_or((0.0, 0.0)),
        }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// (min, max) payload mass across records that carry one.
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.payload_bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload_mass: Option<f64>, outcome: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass,
            outcome,
            booster: booster.to_string(),
        }
    }

    #[test]
    fn sites_keep_first_seen_order() {
        let dataset = LaunchDataset::new(vec![
            record("KSC LC-39A", Some(500.0), 1, "F9 FT"),
            record("CCAFS LC-40", Some(1500.0), 0, "F9 v1.0"),
            record("KSC LC-39A", Some(800.0), 1, "F9 FT"),
            record("VAFB SLC-4E", None, 0, "F9 v1.1"),
        ]);
        assert_eq!(dataset.sites(), ["KSC LC-39A", "CCAFS LC-40", "VAFB SLC-4E"]);
    }

    #[test]
    fn payload_bounds_span_present_masses() {
        let dataset = LaunchDataset::new(vec![
            record("A", Some(500.0), 1, "v1"),
            record("A", None, 0, "v1"),
            record("B", Some(9600.0), 1, "v2"),
        ]);
        assert_eq!(dataset.payload_bounds(), (500.0, 9600.0));
    }

    #[test]
    fn payload_bounds_default_to_zero_without_masses() {
        let dataset = LaunchDataset::new(vec![record("A", None, 1, "v1")]);
        assert_eq!(dataset.payload_bounds(), (0.0, 0.0));
    }

    #[test]
    fn empty_dataset_is_empty() {
        let dataset = LaunchDataset::new(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.sites().is_empty());
    }
}
