mod alert_error;
pub mod database;
pub mod form;
mod no_results;
mod protected_warning;
mod skeleton;

pub use alert_error::alert_error;
pub use database::{ColumnAction, ColumnListState, column_list};
pub use form::{FormAlign, FormLayout, FormLayoutKind, FormSize, LabelLayout};
pub use no_results::no_search_results;
pub use protected_warning::protected_schema_warning;
pub use skeleton::skeleton_loader;
