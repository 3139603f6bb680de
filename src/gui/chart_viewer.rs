//! Chart Viewer Widget
//! Central scrollable panel showing the pie and scatter charts.

use crate::agg::OutputId;
use crate::charts::{ChartPlotter, ChartSpec};
use egui::{Color32, RichText, ScrollArea};

const CHART_SPACING: f32 = 15.0;

/// Holds the most recent chart spec per output, in render order.
pub struct ChartViewer {
    charts: Vec<(OutputId, ChartSpec)>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self { charts: Vec::new() }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the spec for an output, keeping the original render order.
    pub fn set_chart(&mut self, output: OutputId, spec: ChartSpec) {
        if let Some(slot) = self.charts.iter_mut().find(|(o, _)| *o == output) {
            slot.1 = spec;
        } else {
            self.charts.push((output, spec));
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.charts.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (_, spec) in &self.charts {
                    Self::draw_chart_card(ui, spec);
                    ui.add_space(CHART_SPACING);
                }
            });
    }

    fn draw_chart_card(ui: &mut egui::Ui, spec: &ChartSpec) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(70)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width() - 20.0);
                match spec {
                    ChartSpec::Pie(pie) => ChartPlotter::draw_pie_chart(ui, pie),
                    ChartSpec::Scatter(scatter) => ChartPlotter::draw_scatter_chart(ui, scatter),
                }
            });
    }
}
