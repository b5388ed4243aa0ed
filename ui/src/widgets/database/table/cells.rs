//! Cell rendering functions for the column list table.

use egui::{RichText, Ui};
use schemadeck_business::{Column, ColumnActionPolicy};

use crate::utils::colors::COLOR_GREEN;
use crate::widgets::database::state::ColumnAction;

/// Renders the column name cell.
#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

/// Renders the description cell, with a muted placeholder when the column
/// carries no comment. Long comments are shown in full on hover.
#[inline]
pub fn render_description_cell(ui: &mut Ui, comment: Option<&str>) {
    match comment {
        Some(comment) => {
            ui.label(comment).on_hover_text(comment);
        }
        None => {
            ui.label(RichText::new("No description").weak());
        }
    }
}

/// Renders the data type cell in monospace.
#[inline]
pub fn render_data_type_cell(ui: &mut Ui, data_type: &str) {
    ui.label(RichText::new(data_type).monospace().small());
}

/// Renders the storage format cell in monospace.
#[inline]
pub fn render_format_cell(ui: &mut Ui, format: &str) {
    ui.label(RichText::new(format).monospace().small());
}

/// Renders the nullable marker, centered.
#[inline]
pub fn render_nullable_cell(ui: &mut Ui, is_nullable: bool) {
    ui.centered_and_justified(|ui| {
        if is_nullable {
            ui.label(RichText::new("✔").color(COLOR_GREEN));
        } else {
            ui.label(RichText::new("✕").weak());
        }
    });
}

/// Renders the per-row action menu.
///
/// Returns the action if a menu item was clicked. The caller only invokes
/// this when the policy allows the menu at all; the item-level gates are
/// re-checked here so they hold even if the menu gate regresses.
#[inline]
pub fn render_action_menu(
    ui: &mut Ui,
    column: &Column,
    policy: ColumnActionPolicy,
) -> Option<ColumnAction> {
    let mut action = None;

    ui.menu_button("⋮", |ui| {
        ui.set_min_width(140.0);

        let edit = ui.add_enabled(policy.edit_enabled, egui::Button::new("Edit column"));
        let edit = if policy.edit_enabled {
            edit
        } else {
            edit.on_disabled_hover_text("Additional permissions required to edit column")
        };
        if edit.clicked() {
            action = Some(ColumnAction::EditColumn(column.clone()));
        }

        let delete = ui.add_enabled(
            policy.delete_enabled,
            egui::Button::new(RichText::new("Delete column").color(egui::Color32::RED)),
        );
        let delete = if policy.delete_enabled {
            delete
        } else {
            delete.on_disabled_hover_text("Additional permissions required to delete column")
        };
        if delete.clicked() {
            action = Some(ColumnAction::DeleteColumn(column.clone()));
        }
    });

    action
}
