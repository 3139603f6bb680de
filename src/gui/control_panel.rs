//! Control Panel Widget
//! Left side panel with the site selector and payload range controls.

use crate::agg::{ControlId, ControlState, ALL_SITES};
use crate::data::LaunchDataset;
use egui::{Color32, ComboBox, RichText, Slider};

/// Slider step for the payload range, in kilograms.
const PAYLOAD_STEP: f64 = 100.0;

/// Left side control panel seeded from the dataset's derived facts.
pub struct ControlPanel {
    pub state: ControlState,
    sites: Vec<String>,
    payload_bounds: (f64, f64),
    record_count: usize,
}

impl ControlPanel {
    pub fn new(dataset: &LaunchDataset) -> Self {
        Self {
            state: ControlState::new(dataset.payload_bounds()),
            sites: dataset.sites().to_vec(),
            payload_bounds: dataset.payload_bounds(),
            record_count: dataset.len(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🚀 Launch Records")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new(format!("{} launches · {} sites", self.record_count, self.sites.len()))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Site Selection =====
        ui.label(RichText::new("📍 Launch Site").size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("site_select")
            .width(220.0)
            .selected_text(&self.state.selected_site)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(self.state.selected_site == ALL_SITES, ALL_SITES)
                    .clicked()
                {
                    self.state.selected_site = ALL_SITES.to_string();
                    action = ControlPanelAction::ControlChanged(ControlId::SiteSelect);
                }
                for site in &self.sites {
                    if ui
                        .selectable_label(self.state.selected_site == *site, site)
                        .clicked()
                    {
                        self.state.selected_site = site.clone();
                        action = ControlPanelAction::ControlChanged(ControlId::SiteSelect);
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Payload Range =====
        ui.label(RichText::new("⚖ Payload Range (kg)").size(14.0).strong());
        ui.add_space(8.0);

        let (min_payload, max_payload) = self.payload_bounds;

        ui.horizontal(|ui| {
            ui.add_sized([40.0, 20.0], egui::Label::new("Min:"));
            if ui
                .add(
                    Slider::new(&mut self.state.payload_range.0, min_payload..=max_payload)
                        .step_by(PAYLOAD_STEP)
                        .suffix(" kg"),
                )
                .changed()
            {
                // Keep low <= high
                self.state.payload_range.0 =
                    self.state.payload_range.0.min(self.state.payload_range.1);
                action = ControlPanelAction::ControlChanged(ControlId::PayloadRange);
            }
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([40.0, 20.0], egui::Label::new("Max:"));
            if ui
                .add(
                    Slider::new(&mut self.state.payload_range.1, min_payload..=max_payload)
                        .step_by(PAYLOAD_STEP)
                        .suffix(" kg"),
                )
                .changed()
            {
                self.state.payload_range.1 =
                    self.state.payload_range.1.max(self.state.payload_range.0);
                action = ControlPanelAction::ControlChanged(ControlId::PayloadRange);
            }
        });

        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "Selected: {:.0} – {:.0} kg",
                self.state.payload_range.0, self.state.payload_range.1
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    ControlChanged(ControlId),
}
