//! The column list panel.

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use schemadeck_business::{
    ColumnActionPolicy, PermissionAction, Permissions, ProtectedSchemas, Resource, Route,
    TableEditorResult, TableEditorState, filter_columns,
};
use schemadeck_states::StateCtx;

use super::state::{ColumnAction, ColumnListState};
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::render_column_row;
use crate::widgets::{
    alert_error, no_search_results, protected_schema_warning, skeleton_loader,
};

/// Renders the column inventory of the routed table/view entity.
///
/// Reads the query tri-state, the schema lock, and the session permissions
/// from `state_ctx`; the filter text lives in [`ColumnListState`]. Returns
/// the action a toolbar or row control reported this frame, if any.
pub fn column_list(state_ctx: &mut StateCtx, ui: &mut Ui) -> Option<ColumnAction> {
    let mut action = None;
    let mut navigate_back = false;

    // Snapshot the query state once; the frame renders from the clone so no
    // ctx borrow is held across the ui closures.
    let query = state_ctx.state::<TableEditorState>().clone();
    let route = *state_ctx.state::<Route>();

    let schema_locked = query
        .entity()
        .is_some_and(|entity| state_ctx.state::<ProtectedSchemas>().is_protected(&entity.schema));
    let can_write = state_ctx
        .state::<Permissions>()
        .can(PermissionAction::SqlAdminWrite, Resource::Columns);
    let policy = match query.entity() {
        Some(entity) => ColumnActionPolicy::derive(entity.kind, schema_locked, can_write),
        None => ColumnActionPolicy::denied(),
    };

    ui.vertical(|ui| {
        // Toolbar: back link, filter box, gated add button.
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back to tables").clicked() {
                navigate_back = true;
            }

            let filter = &mut state_ctx.state_mut::<ColumnListState>().filter;
            ui.add(
                egui::TextEdit::singleline(filter)
                    .hint_text("Filter columns")
                    .desired_width(220.0),
            );

            if policy.show_add {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let button = ui.add_enabled(policy.add_enabled, egui::Button::new("New column"));
                    let button = if policy.add_enabled {
                        button
                    } else {
                        button.on_disabled_hover_text(
                            "You need additional permissions to create columns",
                        )
                    };
                    if button.clicked() {
                        action = Some(ColumnAction::AddColumn);
                    }
                });
            }
        });

        ui.add_space(4.0);

        if schema_locked
            && let Some(entity) = query.entity()
        {
            protected_schema_warning(ui, &entity.schema, "columns");
            ui.add_space(4.0);
        }

        let filter = state_ctx.state::<ColumnListState>().filter.clone();

        match &query.result {
            TableEditorResult::Idle | TableEditorResult::Loading => {
                skeleton_loader(ui);
            }
            TableEditorResult::Error(err) => {
                let label = query
                    .known_entity()
                    .map(|entity| format!("\"{}\"", entity.qualified_name()))
                    .unwrap_or_else(|| match route {
                        Route::TableColumns { id } => format!("#{id}"),
                        Route::Tables => "#?".to_owned(),
                    });
                alert_error(
                    ui,
                    &format!("Failed to retrieve columns for table {label}"),
                    err,
                );
            }
            TableEditorResult::Loaded(entity) => {
                let visible = filter_columns(&entity.columns, &filter);
                if visible.is_empty() {
                    no_search_results(ui, &filter);
                } else {
                    let mut builder = TableBuilder::new(ui)
                        .striped(true)
                        .cell_layout(Layout::left_to_right(Align::Center));
                    for column in table_columns() {
                        builder = builder.column(column);
                    }
                    builder
                        .header(HEADER_HEIGHT, |mut header| {
                            render_table_header(&mut header);
                        })
                        .body(|body| {
                            body.rows(ROW_HEIGHT, visible.len(), |mut row| {
                                let column = visible[row.index()];
                                if let Some(row_action) =
                                    render_column_row(&mut row, column, policy)
                                {
                                    action = Some(row_action);
                                }
                            });
                        });
                }
            }
        }
    });

    if navigate_back {
        // The filter belongs to this view instance; leaving the page resets it.
        state_ctx.state_mut::<ColumnListState>().clear_filter();
        state_ctx.update::<Route>(|route| *route = Route::Tables);
    }

    action
}
