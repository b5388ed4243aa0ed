//! Error alert with a subject line and the raw failure underneath.

use egui::{Frame, Margin, Response, RichText, Stroke, Ui};

use crate::utils::colors::COLOR_RED;

/// Renders `subject` as the headline and `error` verbatim below it.
///
/// The caller derives the subject; the payload is whatever the failing
/// collaborator reported, untransformed.
pub fn alert_error(ui: &mut Ui, subject: &str, error: &dyn std::fmt::Display) -> Response {
    Frame::NONE
        .stroke(Stroke::new(1.0, COLOR_RED))
        .inner_margin(Margin::symmetric(12, 8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.colored_label(COLOR_RED, subject);
                ui.label(RichText::new(error.to_string()).weak());
            });
        })
        .response
}

#[cfg(test)]
mod alert_error_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn shows_subject_and_payload() {
        let harness = Harness::new_ui(|ui| {
            super::alert_error(
                ui,
                "Failed to retrieve columns for table \"public.orders\"",
                &"API returned status: 500",
            );
        });

        assert!(
            harness
                .query_by_label_contains("Failed to retrieve columns")
                .is_some(),
            "subject line should render"
        );
        assert!(
            harness
                .query_by_label_contains("API returned status: 500")
                .is_some(),
            "error payload should render verbatim"
        );
    }
}
