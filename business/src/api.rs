//! Table-editor API payload handling.
//!
//! Transport runs at the UI edge (ehttp); this module owns the URL shape,
//! the error type, and the status/decode mapping so those stay unit-testable
//! without a server.

use thiserror::Error;

use crate::TableEntity;

/// Failure of a table-editor query, carried verbatim into the error alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("{0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to parse table payload: {0}")]
    Decode(String),
}

/// `GET {base}/api/tables/{id}` serves the entity snapshot.
pub fn table_url(api_base_url: &str, id: u64) -> String {
    format!("{}/api/tables/{id}", api_base_url.trim_end_matches('/'))
}

/// Maps a raw HTTP response to an entity or a typed error.
pub fn parse_table_response(status: u16, body: &[u8]) -> Result<TableEntity, QueryError> {
    if status != 200 {
        return Err(QueryError::Status(status));
    }
    serde_json::from_slice::<TableEntity>(body).map_err(|e| QueryError::Decode(e.to_string()))
}
