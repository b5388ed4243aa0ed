//! Tri-state result of the table-editor query.
//!
//! The UI reads this each frame; the fetch path (ui layer) writes it via the
//! app's drain step. No widget ever blocks on the query.

use std::any::Any;

use chrono::{DateTime, Utc};
use schemadeck_states::State;

use crate::{QueryError, TableEntity};

/// Status/result of the table-editor query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableEditorResult {
    /// No request has been made yet (or the cache was reset).
    #[default]
    Idle,

    /// A fetch is currently in-flight.
    Loading,

    /// The last fetch succeeded with this entity.
    Loaded(TableEntity),

    /// The last fetch failed.
    Error(QueryError),
}

/// State wrapper holding the latest query result.
#[derive(Debug, Clone, Default)]
pub struct TableEditorState {
    pub result: TableEditorResult,
    /// When the current `Loaded` payload arrived.
    pub last_fetched: Option<DateTime<Utc>>,
    /// Entity from the previous successful fetch, kept across refreshes so
    /// error subjects can still name the table.
    stale: Option<TableEntity>,
}

impl TableEditorState {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, TableEditorResult::Loading)
    }

    pub fn entity(&self) -> Option<&TableEntity> {
        match &self.result {
            TableEditorResult::Loaded(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match &self.result {
            TableEditorResult::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Best entity to name in messages: the current payload, or the one from
    /// the previous successful fetch.
    pub fn known_entity(&self) -> Option<&TableEntity> {
        self.entity().or(self.stale.as_ref())
    }

    pub fn set_loading(&mut self) {
        if let TableEditorResult::Loaded(entity) = &self.result {
            self.stale = Some(entity.clone());
        }
        self.result = TableEditorResult::Loading;
    }

    /// Applies a finished fetch, stamping `now` for `Loaded` payloads.
    pub fn apply(&mut self, outcome: Result<TableEntity, QueryError>, now: DateTime<Utc>) {
        match outcome {
            Ok(entity) => {
                self.result = TableEditorResult::Loaded(entity);
                self.last_fetched = Some(now);
            }
            Err(err) => {
                log::warn!("table query failed: {err}");
                self.result = TableEditorResult::Error(err);
            }
        }
    }
}

impl State for TableEditorState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;
    use crate::EntityKind;

    fn entity() -> TableEntity {
        TableEntity {
            id: 3,
            schema: "public".to_owned(),
            name: "users".to_owned(),
            kind: EntityKind::Table,
            columns: Vec::new(),
        }
    }

    #[test]
    fn starts_idle() {
        let state = TableEditorState::default();
        assert_eq!(state.result, TableEditorResult::Idle);
        assert!(!state.is_loading());
        assert!(state.entity().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn apply_success_stores_entity_and_timestamp() {
        let mut state = TableEditorState::default();
        state.set_loading();
        assert!(state.is_loading());

        let now = Utc::now();
        state.apply(Ok(entity()), now);

        assert_eq!(state.entity().map(TableEntity::qualified_name).as_deref(), Some("public.users"));
        assert_eq!(state.last_fetched, Some(now));
    }

    #[test]
    fn apply_error_keeps_payload_verbatim() {
        let mut state = TableEditorState::default();
        state.apply(Err(QueryError::Status(503)), Utc::now());

        assert_eq!(state.error(), Some(&QueryError::Status(503)));
        assert!(state.last_fetched.is_none());
    }

    #[test]
    fn failed_refresh_still_knows_the_entity() {
        let mut state = TableEditorState::default();
        state.apply(Ok(entity()), Utc::now());

        state.set_loading();
        state.apply(Err(QueryError::Status(500)), Utc::now());

        assert!(state.entity().is_none());
        assert_eq!(
            state.known_entity().map(TableEntity::qualified_name).as_deref(),
            Some("public.users")
        );
    }
}
