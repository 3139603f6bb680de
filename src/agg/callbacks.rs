//! Callback Registry Module
//! Explicit lookup table from output charts to the controls they depend on.

use crate::agg::ControlState;
use crate::charts::{update_pie_chart, update_scatter_chart, ChartSpec};
use crate::data::LaunchDataset;

/// User-facing controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    SiteSelect,
    PayloadRange,
}

/// Chart outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputId {
    SuccessPie,
    PayloadScatter,
}

/// One entry of the data-dependency table: which output is recomputed,
/// from which inputs, by which function.
pub struct Callback {
    pub output: OutputId,
    pub inputs: &'static [ControlId],
    pub run: fn(&LaunchDataset, &ControlState) -> ChartSpec,
}

fn run_success_pie(dataset: &LaunchDataset, state: &ControlState) -> ChartSpec {
    ChartSpec::Pie(update_pie_chart(dataset, &state.selected_site))
}

fn run_payload_scatter(dataset: &LaunchDataset, state: &ControlState) -> ChartSpec {
    ChartSpec::Scatter(update_scatter_chart(
        dataset,
        &state.selected_site,
        state.payload_range,
    ))
}

/// The registered callbacks, in render order. The app re-runs exactly the
/// entries whose inputs include a changed control.
pub struct CallbackRegistry {
    entries: Vec<Callback>,
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self {
            entries: vec![
                Callback {
                    output: OutputId::SuccessPie,
                    inputs: &[ControlId::SiteSelect],
                    run: run_success_pie,
                },
                Callback {
                    output: OutputId::PayloadScatter,
                    inputs: &[ControlId::SiteSelect, ControlId::PayloadRange],
                    run: run_payload_scatter,
                },
            ],
        }
    }

    /// Every registered callback, in render order.
    pub fn all(&self) -> &[Callback] {
        &self.entries
    }

    /// Callbacks whose inputs include `control`.
    pub fn depending_on(&self, control: ControlId) -> impl Iterator<Item = &Callback> {
        self.entries
            .iter()
            .filter(move |cb| cb.inputs.contains(&control))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LaunchRecord;

    fn scenario_dataset() -> LaunchDataset {
        LaunchDataset::new(vec![
            LaunchRecord {
                site: "A".to_string(),
                payload_mass: Some(500.0),
                outcome: 1,
                booster: "v1".to_string(),
            },
            LaunchRecord {
                site: "B".to_string(),
                payload_mass: Some(800.0),
                outcome: 0,
                booster: "v2".to_string(),
            },
        ])
    }

    #[test]
    fn pie_depends_only_on_the_site_control() {
        let registry = CallbackRegistry::new();
        let outputs: Vec<OutputId> = registry
            .depending_on(ControlId::PayloadRange)
            .map(|cb| cb.output)
            .collect();
        assert_eq!(outputs, [OutputId::PayloadScatter]);
    }

    #[test]
    fn both_outputs_depend_on_the_site_control() {
        let registry = CallbackRegistry::new();
        let outputs: Vec<OutputId> = registry
            .depending_on(ControlId::SiteSelect)
            .map(|cb| cb.output)
            .collect();
        assert_eq!(outputs, [OutputId::SuccessPie, OutputId::PayloadScatter]);
    }

    #[test]
    fn callbacks_produce_their_chart_kind() {
        let dataset = scenario_dataset();
        let state = ControlState::new(dataset.payload_bounds());
        let registry = CallbackRegistry::new();

        let specs: Vec<ChartSpec> = registry
            .all()
            .iter()
            .map(|cb| (cb.run)(&dataset, &state))
            .collect();

        assert!(matches!(specs[0], ChartSpec::Pie(_)));
        assert!(matches!(specs[1], ChartSpec::Scatter(_)));
    }
}
