//! Column definitions for the column list table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const DATA_TYPE_WIDTH: f32 = 120.0;
pub const FORMAT_WIDTH: f32 = 100.0;
pub const NULLABLE_WIDTH: f32 = 80.0;
pub const ACTIONS_WIDTH: f32 = 48.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration for the column list.
///
/// Returns a vector of column definitions in order:
/// - Name (flexible, fills remaining space)
/// - Description (flexible)
/// - Data Type (fixed)
/// - Format (fixed)
/// - Nullable (fixed)
/// - Actions (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(120.0), // Name - flexible
        Column::remainder().at_least(160.0), // Description - flexible
        Column::exact(DATA_TYPE_WIDTH),      // Data Type - fixed
        Column::exact(FORMAT_WIDTH),         // Format - fixed
        Column::exact(NULLABLE_WIDTH),       // Nullable - fixed
        Column::exact(ACTIONS_WIDTH),        // Actions - fixed
    ]
}
