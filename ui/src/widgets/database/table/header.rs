//! Table header rendering for the column list.

use egui::Ui;
use egui_extras::TableRow;

/// Header column labels. The actions column has no heading.
const HEADERS: [&str; 6] = ["Name", "Description", "Data Type", "Format", "Nullable", ""];

/// Renders the table header with bold labels.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    if !label.is_empty() {
        ui.strong(label);
    }
}
