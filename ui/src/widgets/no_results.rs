//! Placeholder shown when the filter matches nothing.

use egui::{Frame, Margin, Response, RichText, Ui};

pub fn no_search_results(ui: &mut Ui, filter: &str) -> Response {
    Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(Margin::symmetric(12, 16))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No results found").strong());
                if !filter.is_empty() {
                    ui.label(
                        RichText::new(format!("Your search for \"{filter}\" returned no results"))
                            .weak(),
                    );
                }
            });
        })
        .response
}

#[cfg(test)]
mod no_results_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn mentions_the_filter_string() {
        let harness = Harness::new_ui(|ui| {
            super::no_search_results(ui, "zzz");
        });

        assert!(harness.query_by_label_contains("No results found").is_some());
        assert!(harness.query_by_label_contains("zzz").is_some());
    }

    #[test]
    fn empty_filter_shows_plain_placeholder() {
        let harness = Harness::new_ui(|ui| {
            super::no_search_results(ui, "");
        });

        assert!(harness.query_by_label_contains("No results found").is_some());
        assert!(harness.query_by_label_contains("returned no results").is_none());
    }
}
