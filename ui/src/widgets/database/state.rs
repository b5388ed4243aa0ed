//! State for the column list view and its editor window.

use std::any::Any;

use schemadeck_business::Column;
use schemadeck_states::State;

/// A trigger reported by the column list. The caller decides what happens;
/// ignoring an action is the no-op default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnAction {
    AddColumn,
    EditColumn(Column),
    DeleteColumn(Column),
}

/// Local state of one mounted column list: just the filter text.
#[derive(Debug, Clone, Default)]
pub struct ColumnListState {
    pub filter: String,
}

impl ColumnListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }
}

impl State for ColumnListState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// What the editor window is pointed at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorTarget {
    #[default]
    Closed,
    NewColumn,
    EditColumn(Column),
}

/// Draft fields of the column editor window.
#[derive(Debug, Clone, Default)]
pub struct ColumnEditorState {
    pub target: EditorTarget,
    pub name: String,
    pub data_type: String,
    pub default_value: String,
    pub is_nullable: bool,
    pub comment: String,
}

impl ColumnEditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.target != EditorTarget::Closed
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            EditorTarget::EditColumn(_) => "Edit column",
            EditorTarget::Closed | EditorTarget::NewColumn => "New column",
        }
    }

    /// Opens an empty draft.
    pub fn open_new(&mut self) {
        *self = Self {
            target: EditorTarget::NewColumn,
            is_nullable: true,
            ..Self::default()
        };
    }

    /// Opens a draft pre-filled from `column`.
    pub fn open_edit(&mut self, column: &Column) {
        *self = Self {
            target: EditorTarget::EditColumn(column.clone()),
            name: column.name.clone(),
            data_type: column.data_type.clone(),
            default_value: String::new(),
            is_nullable: column.is_nullable,
            comment: column.comment.clone().unwrap_or_default(),
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

impl State for ColumnEditorState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod editor_state_tests {
    use super::*;

    fn column() -> Column {
        Column {
            name: "email".to_owned(),
            data_type: "text".to_owned(),
            format: "text".to_owned(),
            is_nullable: false,
            comment: Some("contact address".to_owned()),
        }
    }

    #[test]
    fn closed_by_default() {
        let editor = ColumnEditorState::new();
        assert!(!editor.is_open());
    }

    #[test]
    fn open_new_resets_the_draft() {
        let mut editor = ColumnEditorState::new();
        editor.name = "leftover".to_owned();

        editor.open_new();
        assert!(editor.is_open());
        assert_eq!(editor.title(), "New column");
        assert!(editor.name.is_empty());
        assert!(editor.is_nullable);
    }

    #[test]
    fn open_edit_prefills_from_the_column() {
        let mut editor = ColumnEditorState::new();
        editor.open_edit(&column());

        assert_eq!(editor.title(), "Edit column");
        assert_eq!(editor.name, "email");
        assert_eq!(editor.data_type, "text");
        assert!(!editor.is_nullable);
        assert_eq!(editor.comment, "contact address");
    }

    #[test]
    fn close_clears_everything() {
        let mut editor = ColumnEditorState::new();
        editor.open_edit(&column());
        editor.close();

        assert!(!editor.is_open());
        assert!(editor.name.is_empty());
    }
}
