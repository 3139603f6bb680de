//! Chart Plotter Module
//! Draws the prepared chart specs with egui and egui_plot.

use crate::charts::{PieChartSpec, ScatterChartSpec};
use egui::{Color32, RichText};
use egui_plot::{Legend, Plot, PlotPoints, Points};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Color palette for pie slices and booster series
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const PIE_DIAMETER: f32 = 260.0;
const SCATTER_HEIGHT: f32 = 320.0;

/// Creates the dashboard visualizations.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a category by position.
    pub fn category_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw a proportional pie chart with a legend below it.
    pub fn draw_pie_chart(ui: &mut egui::Ui, spec: &PieChartSpec) {
        ui.label(RichText::new(&spec.title).size(15.0).strong());
        ui.add_space(6.0);

        let total: u64 = spec.slices.iter().map(|s| u64::from(s.value)).sum();
        if total == 0 {
            ui.allocate_ui(egui::vec2(ui.available_width(), 60.0), |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("No launches match the current selection")
                            .color(Color32::GRAY),
                    );
                });
            });
            return;
        }

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width().max(PIE_DIAMETER), PIE_DIAMETER),
            egui::Sense::hover(),
        );
        let center = rect.center();
        let radius = PIE_DIAMETER * 0.48;
        let painter = ui.painter();

        // One triangle-fan sector per slice, starting at 12 o'clock
        let mut start_angle = -FRAC_PI_2;
        for (i, slice) in spec.slices.iter().enumerate() {
            if slice.value == 0 {
                continue;
            }
            let sweep = (slice.value as f32 / total as f32) * TAU;
            let color = Self::category_color(i);

            let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as u32;
            let mut mesh = egui::Mesh::default();
            mesh.colored_vertex(center, color);
            for step in 0..=steps {
                let angle = start_angle + sweep * step as f32 / steps as f32;
                let point = center + radius * egui::vec2(angle.cos(), angle.sin());
                mesh.colored_vertex(point, color);
            }
            for step in 0..steps {
                mesh.add_triangle(0, step + 1, step + 2);
            }
            painter.add(egui::Shape::mesh(mesh));

            start_angle += sweep;
        }

        ui.add_space(8.0);

        // Legend with value and share per slice
        ui.horizontal_wrapped(|ui| {
            for (i, slice) in spec.slices.iter().enumerate() {
                let color = Self::category_color(i);
                let (swatch, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(swatch, 3.0, color);

                let share = slice.value as f64 / total as f64 * 100.0;
                ui.label(
                    RichText::new(format!("{} — {} ({:.1}%)", slice.label, slice.value, share))
                        .size(12.0),
                );
                ui.add_space(10.0);
            }
        });
    }

    /// Draw the payload-vs-outcome scatter chart, one series per booster
    /// version in first-seen order.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, spec: &ScatterChartSpec) {
        ui.label(RichText::new(&spec.title).size(15.0).strong());
        ui.add_space(6.0);

        let mut boosters: Vec<&str> = Vec::new();
        for point in &spec.points {
            if !boosters.iter().any(|b| *b == point.booster) {
                boosters.push(&point.booster);
            }
        }

        Plot::new("payload_scatter")
            .height(SCATTER_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Payload Mass (kg)")
            .y_axis_label("Outcome")
            .include_y(-0.2)
            .include_y(1.2)
            .y_axis_formatter(|mark, _range| {
                if (mark.value - 1.0).abs() < 1e-9 {
                    "Success".to_string()
                } else if mark.value.abs() < 1e-9 {
                    "Failure".to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, booster) in boosters.iter().enumerate() {
                    let points: PlotPoints = spec
                        .points
                        .iter()
                        .filter(|p| p.booster == *booster)
                        .map(|p| [p.payload_mass, f64::from(p.outcome)])
                        .collect();

                    plot_ui.points(
                        Points::new(points)
                            .radius(3.5)
                            .color(Self::category_color(i))
                            .name(*booster),
                    );
                }
            });
    }
}
