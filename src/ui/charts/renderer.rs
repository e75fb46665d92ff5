use eframe::egui;
use egui_plot::{AxisHints, Bar, BarChart, Corner, Legend, Plot};

use crate::ui::data::HistogramBin;

pub struct ChartRenderer;

impl ChartRenderer {
    /// Format a price for the x-axis ("450000" -> "450k")
    fn format_price_axis(price: f64) -> String {
        let value = price.abs();
        if value >= 1_000_000.0 {
            format!("{:.1}M", price / 1_000_000.0)
        } else if value >= 1_000.0 {
            format!("{:.0}k", price / 1_000.0)
        } else {
            format!("{:.0}", price)
        }
    }

    pub fn render_price_histogram(ui: &mut egui::Ui, id: &str, bins: &[HistogramBin]) {
        ui.label(egui::RichText::new("Selling Price Distribution").strong().size(14.0));

        if bins.is_empty() {
            ui.add_sized([ui.available_width(), 180.0], egui::Label::new("No data available"));
            return;
        }

        let bars: Vec<Bar> = bins
            .iter()
            .map(|bin| {
                let center = (bin.lower + bin.upper) / 2.0;
                Bar::new(center, bin.count as f64).width(bin.upper - bin.lower)
            })
            .collect();

        let chart = BarChart::new(bars)
            .color(egui::Color32::from_rgb(0, 150, 255))
            .name("Records");

        // Custom x-axis formatter for prices
        let x_axis = AxisHints::new_x()
            .label("Price")
            .formatter(|mark, _range| Self::format_price_axis(mark.value));

        Plot::new(id)
            .legend(Legend::default().position(Corner::RightTop))
            .height(180.0)
            .show_axes([true, true])
            .custom_x_axes(vec![x_axis])
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }
}
