//! Domain model and pure logic for the schemadeck dashboard.
//!
//! Everything here is synchronous and side-effect free; network IO lives at
//! the UI edge, which feeds results back into the states defined below.

mod actions;
mod api;
mod config;
mod entity;
mod filter;
mod permissions;
mod protected;
mod query;
mod route;

pub use actions::ColumnActionPolicy;
pub use api::{QueryError, parse_table_response, table_url};
pub use config::BusinessConfig;
pub use entity::{Column, EntityKind, TableEntity};
pub use filter::filter_columns;
pub use permissions::{PermissionAction, Permissions, Resource};
pub use protected::ProtectedSchemas;
pub use query::{TableEditorResult, TableEditorState};
pub use route::Route;
