//! Row rendering for the column list table.

use egui_extras::TableRow;
use schemadeck_business::{Column, ColumnActionPolicy};

use super::cells::{
    render_action_menu, render_data_type_cell, render_description_cell, render_format_cell,
    render_name_cell, render_nullable_cell,
};
use crate::widgets::database::state::ColumnAction;

/// Renders a single column row with all cells.
///
/// Returns the action if the row's menu reported one. The menu cell stays
/// empty when the policy suppresses it (locked schema or read-only entity).
#[inline]
pub fn render_column_row(
    row: &mut TableRow<'_, '_>,
    column: &Column,
    policy: ColumnActionPolicy,
) -> Option<ColumnAction> {
    let mut action = None;

    row.col(|ui| {
        render_name_cell(ui, &column.name);
    });

    row.col(|ui| {
        render_description_cell(ui, column.comment.as_deref());
    });

    row.col(|ui| {
        render_data_type_cell(ui, &column.data_type);
    });

    row.col(|ui| {
        render_format_cell(ui, &column.format);
    });

    row.col(|ui| {
        render_nullable_cell(ui, column.is_nullable);
    });

    row.col(|ui| {
        if policy.show_menu {
            action = render_action_menu(ui, column, policy);
        }
    });

    action
}
