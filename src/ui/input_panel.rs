use eframe::egui;
use crossbeam_channel::Sender;

use crate::controller::EstimatorCommand;
use crate::estimator::EstimateQuery;

/// The three optional numeric fields, the file pickers and the submit button
pub struct InputPanel {
    command_tx: Sender<EstimatorCommand>,
    max_power_text: String,
    mileage_text: String,
    km_driven_text: String,
    input_error: Option<String>,
}

impl InputPanel {
    pub fn new(command_tx: Sender<EstimatorCommand>) -> Self {
        Self {
            command_tx,
            max_power_text: String::new(),
            mileage_text: String::new(),
            km_driven_text: String::new(),
            input_error: None,
        }
    }

    /// Parse one field; empty text means "not supplied"
    fn parse_field(text: &str, label: &str) -> Result<Option<f64>, String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("{} must be a number (got {:?})", label, trimmed))
    }

    fn build_query(&self) -> Result<EstimateQuery, String> {
        Ok(EstimateQuery {
            max_power: Self::parse_field(&self.max_power_text, "Maximum power")?,
            mileage: Self::parse_field(&self.mileage_text, "Mileage")?,
            km_driven: Self::parse_field(&self.km_driven_text, "Kilometers driven")?,
        })
    }

    fn render_field(ui: &mut egui::Ui, label: &str, hint: &str, text: &mut String) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(
                egui::TextEdit::singleline(text)
                    .hint_text("empty = dataset fallback")
                    .desired_width(160.0),
            );
        });
        ui.label(egui::RichText::new(hint).small().weak());
        ui.add_space(4.0);
    }

    fn select_dataset(&mut self) {
        if let Some(files) = rfd::FileDialog::new()
            .add_filter("CSV Data Files", &["csv"])
            .add_filter("All Files", &["*"])
            .set_title("Select Historical Sales Data")
            .pick_files()
        {
            if !files.is_empty() {
                let _ = self.command_tx.send(EstimatorCommand::ChangeDataset(files));
            }
        }
    }

    fn select_model(&mut self) {
        if let Some(file) = rfd::FileDialog::new()
            .add_filter("Safetensors Model", &["safetensors"])
            .add_filter("All Files", &["*"])
            .set_title("Select Model Artifact")
            .pick_file()
        {
            let _ = self.command_tx.send(EstimatorCommand::ChangeModel(file));
        }
    }

    /// Returns true when an estimate was requested this frame
    pub fn render(&mut self, ui: &mut egui::Ui) -> bool {
        let mut submitted = false;

        ui.group(|ui| {
            ui.heading("📝 Car Parameters");
            ui.label("Fill in at least one input; empty fields are substituted with the dataset median or mean.");
            ui.label(
                egui::RichText::new("Please do not put negative numbers.")
                    .small()
                    .weak(),
            );
            ui.separator();

            Self::render_field(
                ui,
                "Maximum power:",
                "Maximum power of the car in bhp",
                &mut self.max_power_text,
            );
            Self::render_field(
                ui,
                "Mileage:",
                "Fuel efficiency of the car in km/l",
                &mut self.mileage_text,
            );
            Self::render_field(
                ui,
                "Kilometers driven:",
                "Total distance driven by previous owners in km",
                &mut self.km_driven_text,
            );

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("🚀 Estimate").clicked() {
                    match self.build_query() {
                        Ok(query) => {
                            self.input_error = None;
                            let _ = self.command_tx.send(EstimatorCommand::Estimate(query));
                            submitted = true;
                        }
                        Err(message) => self.input_error = Some(message),
                    }
                }
                if ui.button("📂 Select Dataset...").clicked() {
                    self.select_dataset();
                }
                if ui.button("🧠 Select Model...").clicked() {
                    self.select_model();
                }
            });

            if let Some(error) = &self.input_error {
                ui.label(
                    egui::RichText::new(format!("⚠ {}", error)).color(egui::Color32::GOLD),
                );
            }
        });

        submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_means_absent() {
        assert_eq!(InputPanel::parse_field("", "Mileage").unwrap(), None);
        assert_eq!(InputPanel::parse_field("   ", "Mileage").unwrap(), None);
    }

    #[test]
    fn test_numeric_field_parses() {
        assert_eq!(
            InputPanel::parse_field("82.5", "Maximum power").unwrap(),
            Some(82.5)
        );
    }

    #[test]
    fn test_non_numeric_field_is_rejected_with_label() {
        let err = InputPanel::parse_field("eighty", "Maximum power").unwrap_err();
        assert!(err.contains("Maximum power"));
    }
}
