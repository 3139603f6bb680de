//! Launchboard - Rocket Launch Records Dashboard
//!
//! Downloads a CSV of rocket launch records and shows a site selector, a
//! payload range control, and two reactive charts built from them.

mod agg;
mod charts;
mod data;
mod gui;

use anyhow::Context;
use data::{DataLoader, DATA_URL};
use eframe::egui;
use gui::DashboardApp;

fn main() -> anyhow::Result<()> {
    // One-time blocking fetch; without data there is no dashboard.
    let dataset = DataLoader::fetch(DATA_URL).context("failed to load launch records")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Launch Records Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
