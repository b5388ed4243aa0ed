//! Notice shown when a schema is locked against edits.

use egui::{Frame, Margin, Response, RichText, Stroke, Ui};

use crate::utils::colors::COLOR_AMBER;

/// Explains why mutation actions are missing for a protected schema.
pub fn protected_schema_warning(ui: &mut Ui, schema: &str, entity: &str) -> Response {
    Frame::NONE
        .stroke(Stroke::new(1.0, COLOR_AMBER))
        .inner_margin(Margin::symmetric(12, 8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(format!("Viewing protected schema \"{schema}\"")).strong());
                ui.label(
                    RichText::new(format!(
                        "This schema is managed by the platform, so its {entity} are read-only \
                         through the dashboard."
                    ))
                    .weak(),
                );
            });
        })
        .response
}
