use eframe::egui::{self, RichText, Ui};

use super::plot;
use crate::color::ColorMap;
use crate::figure::Figure;

const TITLE_HEIGHT: f32 = 24.0;
const MIN_PLOT_HEIGHT: f32 = 160.0;

// ---------------------------------------------------------------------------
// Central panel – 2 × 2 figure grid
// ---------------------------------------------------------------------------

/// Lay the figure's panels out two per row, each under its title.
pub fn figure_grid(ui: &mut Ui, figure: &Figure, colors: &ColorMap) {
    let rows = figure.panels.len().div_ceil(2).max(1);
    let spacing = ui.spacing().item_spacing.y;
    let plot_height = ((ui.available_height() - spacing * rows as f32) / rows as f32
        - TITLE_HEIGHT)
        .max(MIN_PLOT_HEIGHT);

    for (row, pair) in figure.panels.chunks(2).enumerate() {
        ui.columns(2, |columns: &mut [Ui]| {
            for (col, (column_ui, panel)) in columns.iter_mut().zip(pair).enumerate() {
                column_ui.vertical_centered(|ui: &mut Ui| {
                    ui.label(RichText::new(panel.title).strong().size(15.0));
                });
                plot::panel_plot(column_ui, row * 2 + col, panel, colors, plot_height);
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Dataset summary line with a colour legend for the species.
pub fn top_bar(ui: &mut Ui, figure: &Figure, colors: &ColorMap) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Iris dataset");
        ui.separator();
        ui.label(format!(
            "{} flowers, {} species",
            figure.row_count,
            figure.species().len()
        ));
        ui.separator();
        for (label, color) in colors.legend_entries() {
            ui.label(RichText::new(format!("● {label}")).color(color));
        }
    });
}
