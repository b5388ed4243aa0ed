//! End-to-end fetch tests: mock project API -> ehttp -> channel -> state ->
//! rendered panel.

mod common;

use std::time::Duration;

use egui_kittest::Harness;
use kittest::Queryable;
use schemadeck_business::{BusinessConfig, QueryError, TableEditorState};
use schemadeck_ui::state::AppState;
use schemadeck_ui::widgets::database::{column_list, drain_table_query, fetch_table};

/// Drains the query channel until the state leaves `Loading`, panicking
/// after two seconds. The ehttp callback lands on its own worker thread, so
/// the test polls instead of blocking the runtime.
async fn wait_for_outcome(state: &mut AppState) {
    let deadline = Duration::from_secs(2);
    let started = std::time::Instant::now();
    loop {
        drain_table_query(&mut state.ctx, &state.query_rx);
        let query = state.ctx.state::<TableEditorState>();
        if !query.is_loading() {
            return;
        }
        assert!(
            started.elapsed() < deadline,
            "no fetch outcome arrived within {deadline:?}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

fn start_fetch(state: &AppState) {
    let base_url = state
        .ctx
        .state::<BusinessConfig>()
        .api_base_url()
        .to_owned();
    fetch_table(&base_url, 1, state.query_tx.clone(), egui::Context::default());
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_loads_the_entity_and_renders_its_rows() {
    let (_mock_server, mut state) = common::setup_app_state().await;

    state.ctx.state_mut::<TableEditorState>().set_loading();
    start_fetch(&state);
    wait_for_outcome(&mut state).await;

    {
        let query = state.ctx.state::<TableEditorState>();
        let entity = query.entity().expect("entity should be loaded");
        assert_eq!(entity.qualified_name(), "public.orders");
        assert_eq!(entity.columns.len(), 3);
    }

    // Render the panel from the fetched state and check the rows made it.
    let harness = Harness::new_ui_state(
        |ui, state: &mut AppState| {
            column_list(&mut state.ctx, ui);
        },
        state,
    );

    for name in ["id", "user_id", "email"] {
        assert!(
            harness.query_by_label(name).is_some(),
            "column '{name}' should render after the fetch"
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_fetch_surfaces_the_status_error() {
    let (_mock_server, mut state) = common::setup_app_state_with_status(500).await;

    state.ctx.state_mut::<TableEditorState>().set_loading();
    start_fetch(&state);
    wait_for_outcome(&mut state).await;

    {
        let query = state.ctx.state::<TableEditorState>();
        assert_eq!(query.error(), Some(&QueryError::Status(500)));
    }

    let harness = Harness::new_ui_state(
        |ui, state: &mut AppState| {
            column_list(&mut state.ctx, ui);
        },
        state,
    );

    assert!(
        harness
            .query_by_label_contains("Failed to retrieve columns")
            .is_some(),
        "error subject should render"
    );
    assert!(
        harness
            .query_by_label_contains("API returned status: 500")
            .is_some(),
        "error payload should pass through verbatim"
    );
}
