//! Column filtering for the column list view.

use crate::Column;

/// Returns the columns whose name contains `filter` as a substring, in the
/// original order. An empty filter returns every column.
///
/// Matching is case-sensitive; the filter box feeds raw keystrokes here.
pub fn filter_columns<'a>(columns: &'a [Column], filter: &str) -> Vec<&'a Column> {
    if filter.is_empty() {
        columns.iter().collect()
    } else {
        columns
            .iter()
            .filter(|column| column.name.contains(filter))
            .collect()
    }
}
