//! Table query transport.
//!
//! The fetch runs on ehttp's worker; the outcome crosses back to the UI
//! thread over a flume channel which the app drains at frame start. No egui
//! memory plumbing.

use chrono::Utc;
use schemadeck_business::{QueryError, TableEditorState, TableEntity, parse_table_response, table_url};
use schemadeck_states::StateCtx;

/// One finished fetch, success or failure.
pub type TableQueryOutcome = Result<TableEntity, QueryError>;

pub type TableQuerySender = flume::Sender<TableQueryOutcome>;
pub type TableQueryReceiver = flume::Receiver<TableQueryOutcome>;

/// Creates the channel the app threads outcomes through. Unbounded: at most
/// one outcome is queued per in-flight fetch.
pub fn table_query_channel() -> (TableQuerySender, TableQueryReceiver) {
    flume::unbounded()
}

/// Fetches the entity snapshot for `id`, reporting the outcome over `tx`.
///
/// The callback runs off the UI thread; `ctx` is only used to wake the UI
/// once the outcome is queued.
pub fn fetch_table(api_base_url: &str, id: u64, tx: TableQuerySender, ctx: egui::Context) {
    let url = table_url(api_base_url, id);
    log::debug!("fetching table entity from {url}");

    let request = ehttp::Request::get(&url);
    ehttp::fetch(request, move |result| {
        let outcome = match result {
            Ok(response) => parse_table_response(response.status, &response.bytes),
            Err(err) => Err(QueryError::Transport(err)),
        };
        if tx.send(outcome).is_err() {
            log::warn!("table query receiver dropped before the outcome arrived");
        }
        ctx.request_repaint();
    });
}

/// Applies queued outcomes to the query state. Called once per frame before
/// any widget reads the state.
pub fn drain_table_query(state_ctx: &mut StateCtx, rx: &TableQueryReceiver) {
    while let Ok(outcome) = rx.try_recv() {
        state_ctx
            .state_mut::<TableEditorState>()
            .apply(outcome, Utc::now());
    }
}

#[cfg(test)]
mod api_channel_tests {
    use schemadeck_business::{Column, EntityKind, TableEditorResult};

    use super::*;

    fn entity() -> TableEntity {
        TableEntity {
            id: 1,
            schema: "public".to_owned(),
            name: "orders".to_owned(),
            kind: EntityKind::Table,
            columns: vec![Column {
                name: "id".to_owned(),
                data_type: "bigint".to_owned(),
                format: "int8".to_owned(),
                is_nullable: false,
                comment: None,
            }],
        }
    }

    fn ctx_with_query_state() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(TableEditorState::default());
        ctx
    }

    #[test]
    fn drain_applies_a_loaded_outcome() {
        let mut state_ctx = ctx_with_query_state();
        let (tx, rx) = table_query_channel();

        tx.send(Ok(entity())).expect("receiver is alive");
        drain_table_query(&mut state_ctx, &rx);

        let query = state_ctx.state::<TableEditorState>();
        assert_eq!(
            query.entity().map(|e| e.qualified_name()).as_deref(),
            Some("public.orders")
        );
        assert!(query.last_fetched.is_some());
    }

    #[test]
    fn drain_applies_an_error_outcome() {
        let mut state_ctx = ctx_with_query_state();
        let (tx, rx) = table_query_channel();

        tx.send(Err(QueryError::Status(500))).expect("receiver is alive");
        drain_table_query(&mut state_ctx, &rx);

        let query = state_ctx.state::<TableEditorState>();
        assert_eq!(query.error(), Some(&QueryError::Status(500)));
    }

    #[test]
    fn drain_with_empty_channel_is_a_no_op() {
        let mut state_ctx = ctx_with_query_state();
        let (_tx, rx) = table_query_channel();

        drain_table_query(&mut state_ctx, &rx);

        assert_eq!(
            state_ctx.state::<TableEditorState>().result,
            TableEditorResult::Idle
        );
    }

    #[test]
    fn latest_queued_outcome_wins() {
        let mut state_ctx = ctx_with_query_state();
        let (tx, rx) = table_query_channel();

        tx.send(Err(QueryError::Status(500))).expect("receiver is alive");
        tx.send(Ok(entity())).expect("receiver is alive");
        drain_table_query(&mut state_ctx, &rx);

        assert!(state_ctx.state::<TableEditorState>().entity().is_some());
    }
}
