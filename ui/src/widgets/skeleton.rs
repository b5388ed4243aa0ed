//! Placeholder rows shown while the table query is in flight.

use egui::{Response, Sense, Ui, vec2};

const SKELETON_ROWS: usize = 5;
const ROW_HEIGHT: f32 = 22.0;
const ROW_SPACING: f32 = 8.0;

/// Renders a spinner plus a stack of muted placeholder rows.
pub fn skeleton_loader(ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading columns...");
        });
        ui.add_space(ROW_SPACING);

        let fill = ui.visuals().widgets.noninteractive.bg_fill;
        for _ in 0..SKELETON_ROWS {
            let (rect, _) =
                ui.allocate_exact_size(vec2(ui.available_width(), ROW_HEIGHT), Sense::hover());
            ui.painter().rect_filled(rect, 4.0, fill);
            ui.add_space(ROW_SPACING);
        }
    })
    .response
}
