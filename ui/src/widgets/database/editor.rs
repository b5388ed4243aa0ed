//! Column editor window, opened by the add/edit triggers.
//!
//! Presentational only: the draft is kept in [`ColumnEditorState`] and
//! discarded on close. Submission belongs to the schema mutation flow, which
//! this slice does not own.

use egui::Context;
use schemadeck_states::StateCtx;

use super::state::ColumnEditorState;
use crate::widgets::form::{FormLayout, FormLayoutKind};

/// Shows the editor window when a draft is open.
pub fn column_editor(state_ctx: &mut StateCtx, ctx: &Context) {
    if !state_ctx.state::<ColumnEditorState>().is_open() {
        return;
    }
    let title = state_ctx.state::<ColumnEditorState>().title();
    let mut close_requested = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .show(ctx, |ui| {
            let editor = state_ctx.state_mut::<ColumnEditorState>();

            FormLayout::builder()
                .label("Name")
                .description("Column names must be unique within the table")
                .build()
                .show(ui, |ui| {
                    ui.text_edit_singleline(&mut editor.name);
                });

            ui.add_space(8.0);

            FormLayout::builder()
                .layout(FormLayoutKind::Horizontal)
                .label("Type")
                .id_salt("column_type")
                .build()
                .show(ui, |ui| {
                    ui.text_edit_singleline(&mut editor.data_type);
                });

            ui.add_space(8.0);

            FormLayout::builder()
                .layout(FormLayoutKind::Horizontal)
                .label("Default value")
                .label_optional("Optional")
                .id_salt("column_default")
                .build()
                .show(ui, |ui| {
                    ui.text_edit_singleline(&mut editor.default_value);
                });

            ui.add_space(8.0);

            FormLayout::builder()
                .layout(FormLayoutKind::FlexReversed)
                .label("Allow nullable")
                .description("Allow the column to assume a NULL value if no value is provided")
                .build()
                .show(ui, |ui| {
                    ui.checkbox(&mut editor.is_nullable, "");
                });

            ui.add_space(8.0);

            FormLayout::builder()
                .label("Description")
                .label_optional("Optional")
                .build()
                .show(ui, |ui| {
                    ui.text_edit_singleline(&mut editor.comment);
                });

            ui.add_space(12.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    close_requested = true;
                }
            });
        });

    if close_requested {
        state_ctx.state_mut::<ColumnEditorState>().close();
    }
}
