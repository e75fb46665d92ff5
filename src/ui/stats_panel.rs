use eframe::egui;
use std::path::PathBuf;

use crate::ui::data::DatasetSummary;

pub struct StatsPanel;

impl StatsPanel {
    pub fn render(ui: &mut egui::Ui, summary: &DatasetSummary) {
        ui.group(|ui| {
            ui.heading("📊 Dataset");
            ui.separator();

            egui::Grid::new("dataset_grid")
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Raw records:");
                    ui.label(format!("{}", summary.total_raw));
                    ui.end_row();

                    ui.label("Cleaned records:");
                    ui.label(
                        egui::RichText::new(format!("{}", summary.cleaned)).strong(),
                    );
                    ui.end_row();

                    ui.label("Excluded (LPG/CNG):");
                    ui.label(format!("{}", summary.excluded_fuel));
                    ui.end_row();

                    ui.label("Excluded (test drive):");
                    ui.label(format!("{}", summary.excluded_owner));
                    ui.end_row();

                    ui.label("Dropped (malformed):");
                    ui.label(format!("{}", summary.dropped_malformed));
                    ui.end_row();
                });

            ui.separator();
            ui.label(egui::RichText::new("Fallback statistics").strong());

            egui::Grid::new("fallback_grid")
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Median max power:");
                    ui.label(format!("{:.3} bhp", summary.stats.median_max_power));
                    ui.end_row();

                    ui.label("Mean mileage:");
                    ui.label(format!("{:.3} km/l", summary.stats.mean_mileage));
                    ui.end_row();

                    ui.label("Median km driven:");
                    ui.label(format!("{:.0} km", summary.stats.median_km_driven));
                    ui.end_row();

                    ui.label("Price range:");
                    ui.label(format!("{:.0} – {:.0}", summary.min_price, summary.max_price));
                    ui.end_row();
                });

            ui.separator();

            // Source file listing
            if summary.source_files.is_empty() {
                ui.label(egui::RichText::new("No source files recorded").italics().weak());
            } else {
                ui.group(|ui| {
                    for (idx, file_path) in summary.source_files.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(format!("{}.", idx + 1));
                            ui.label(
                                egui::RichText::new(
                                    PathBuf::from(file_path)
                                        .file_name()
                                        .and_then(|n| n.to_str())
                                        .unwrap_or(file_path),
                                )
                                .small()
                                .monospace(),
                            );
                        });
                    }
                    ui.label(
                        egui::RichText::new(format!(
                            "Total: {} file(s)",
                            summary.source_files.len()
                        ))
                        .small()
                        .weak(),
                    );
                });
            }
        });
    }
}
