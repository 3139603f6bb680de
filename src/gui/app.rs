//! Dashboard Application
//! Main window wiring the controls to the chart outputs through the
//! callback registry.

use crate::agg::{CallbackRegistry, ControlId};
use crate::data::LaunchDataset;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;

/// Main application window. Owns the immutable dataset, the control
/// panel, and the chart viewer; re-runs callbacks when controls change.
pub struct DashboardApp {
    dataset: LaunchDataset,
    registry: CallbackRegistry,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dataset: LaunchDataset) -> Self {
        let registry = CallbackRegistry::new();
        let control_panel = ControlPanel::new(&dataset);
        let mut chart_viewer = ChartViewer::new();

        // Initial render: every output is computed once from the default
        // control state.
        for callback in registry.all() {
            chart_viewer.set_chart(
                callback.output,
                (callback.run)(&dataset, &control_panel.state),
            );
        }

        Self {
            dataset,
            registry,
            control_panel,
            chart_viewer,
        }
    }

    /// Recompute the outputs that depend on the changed control.
    fn refresh_outputs(&mut self, control: ControlId) {
        for callback in self.registry.depending_on(control) {
            self.chart_viewer.set_chart(
                callback.output,
                (callback.run)(&self.dataset, &self.control_panel.state),
            );
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed = None;

        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let ControlPanelAction::ControlChanged(id) = self.control_panel.show(ui) {
                        changed = Some(id);
                    }
                });
            });

        if let Some(id) = changed {
            self.refresh_outputs(id);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
