use eframe::egui;
use crossbeam_channel::{Receiver, Sender};

use crate::controller::{EstimatorCommand, EstimatorResponse};
use crate::estimator::Estimate;
use super::charts::ChartRenderer;
use super::data::DatasetSummary;
use super::input_panel::InputPanel;
use super::stats_panel::StatsPanel;

/// Top-level GUI state: the input form, the latest prediction and the
/// dataset summary panels
pub struct EstimatorApp {
    command_tx: Sender<EstimatorCommand>,
    response_rx: Receiver<EstimatorResponse>,
    input_panel: InputPanel,
    summary: DatasetSummary,
    last_estimate: Option<Estimate>,
    last_error: Option<String>,
    waiting: bool,
    status_line: Option<String>,
}

impl EstimatorApp {
    pub fn new(
        command_tx: Sender<EstimatorCommand>,
        response_rx: Receiver<EstimatorResponse>,
        summary: DatasetSummary,
    ) -> Self {
        Self {
            input_panel: InputPanel::new(command_tx.clone()),
            command_tx,
            response_rx,
            summary,
            last_estimate: None,
            last_error: None,
            waiting: false,
            status_line: None,
        }
    }

    fn drain_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.waiting = false;
            match response {
                EstimatorResponse::Estimated(estimate) => {
                    self.last_error = None;
                    self.last_estimate = Some(estimate);
                }
                EstimatorResponse::DatasetChanged(summary) => {
                    self.status_line =
                        Some(format!("Dataset reloaded: {} records", summary.cleaned));
                    self.summary = summary;
                    // old estimates were computed against the previous fallbacks
                    self.last_estimate = None;
                }
                EstimatorResponse::ModelChanged(path) => {
                    self.status_line = Some(format!("Model reloaded: {}", path.display()));
                    self.last_estimate = None;
                }
                EstimatorResponse::Error(message) => {
                    self.last_estimate = None;
                    self.last_error = Some(message);
                }
                EstimatorResponse::Stopped => {}
            }
        }
    }

    fn format_feature(value: f64, from_fallback: bool) -> String {
        if from_fallback {
            format!("{:.3} (dataset fallback)", value)
        } else {
            format!("{:.3}", value)
        }
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("💰 Prediction");
            ui.separator();

            if self.waiting {
                ui.label("Estimating...");
            } else if let Some(error) = &self.last_error {
                ui.label(
                    egui::RichText::new(format!("⚠ {}", error)).color(egui::Color32::RED),
                );
            } else if let Some(estimate) = &self.last_estimate {
                ui.label(
                    egui::RichText::new(estimate.message())
                        .size(18.0)
                        .color(egui::Color32::GREEN)
                        .strong(),
                );
                ui.add_space(4.0);

                egui::Grid::new("estimate_grid")
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Max power:");
                        ui.label(Self::format_feature(
                            estimate.features[0],
                            estimate.used_fallback[0],
                        ));
                        ui.end_row();

                        ui.label("Mileage:");
                        ui.label(Self::format_feature(
                            estimate.features[1],
                            estimate.used_fallback[1],
                        ));
                        ui.end_row();

                        ui.label("ln(km driven):");
                        ui.label(Self::format_feature(
                            estimate.features[2],
                            estimate.used_fallback[2],
                        ));
                        ui.end_row();

                        ui.label("Log-price:");
                        ui.label(format!("{:.4}", estimate.log_price));
                        ui.end_row();
                    });
            } else {
                ui.label("Fill in the parameters above and press Estimate.");
            }
        });
    }
}

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_responses();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🚗 Car Price Estimator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(status) = &self.status_line {
                        ui.label(egui::RichText::new(status).small().weak());
                    }
                });
            });
        });

        egui::SidePanel::right("stats_panel")
            .default_width(340.0)
            .min_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    StatsPanel::render(ui, &self.summary);
                    ui.add_space(10.0);
                    ChartRenderer::render_price_histogram(
                        ui,
                        "price_histogram",
                        &self.summary.price_histogram,
                    );
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                if self.input_panel.render(ui) {
                    self.waiting = true;
                }
                ui.add_space(15.0);
                self.render_result(ui);
                ui.add_space(20.0);
            });
        });

        if self.waiting {
            ctx.request_repaint();
        }
    }
}

impl Drop for EstimatorApp {
    fn drop(&mut self) {
        let _ = self.command_tx.send(EstimatorCommand::Stop);
    }
}
