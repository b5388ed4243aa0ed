//! The main application state.

use schemadeck_business::{
    BusinessConfig, Permissions, ProtectedSchemas, Route, TableEditorState,
};
use schemadeck_states::StateCtx;

use crate::widgets::database::{
    ColumnEditorState, ColumnListState, TableQueryReceiver, TableQuerySender, table_query_channel,
};

/// Everything the app owns: the state ctx plus the ends of the table query
/// channel. The channel ends live here (not in the ctx) because the sender is
/// cloned into fetch callbacks that outlive any one frame.
pub struct AppState {
    pub ctx: StateCtx,
    pub query_tx: TableQuerySender,
    pub query_rx: TableQueryReceiver,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State wired to a specific API base URL, used by tests.
    pub fn test(api_base_url: impl Into<String>) -> Self {
        Self::with_config(BusinessConfig::new(api_base_url))
    }

    fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.add_state(Route::default());
        ctx.add_state(Permissions::allow_all());
        ctx.add_state(ProtectedSchemas::new());
        ctx.add_state(TableEditorState::default());
        ctx.add_state(ColumnListState::new());
        ctx.add_state(ColumnEditorState::new());

        let (query_tx, query_rx) = table_query_channel();

        Self {
            ctx,
            query_tx,
            query_rx,
        }
    }
}

#[cfg(test)]
mod app_state_tests {
    use super::*;

    #[test]
    fn default_state_registers_everything_the_widgets_read() {
        let state = AppState::new();

        assert!(state.ctx.try_state::<Route>().is_some());
        assert!(state.ctx.try_state::<Permissions>().is_some());
        assert!(state.ctx.try_state::<ProtectedSchemas>().is_some());
        assert!(state.ctx.try_state::<TableEditorState>().is_some());
        assert!(state.ctx.try_state::<ColumnListState>().is_some());
        assert!(state.ctx.try_state::<ColumnEditorState>().is_some());
    }

    #[test]
    fn test_state_points_at_the_given_base_url() {
        let state = AppState::test("http://127.0.0.1:4000");
        assert_eq!(
            state.ctx.state::<BusinessConfig>().api_base_url(),
            "http://127.0.0.1:4000"
        );
    }
}
