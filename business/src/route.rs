//! Route state for page navigation.

use std::any::Any;

use schemadeck_states::State;
use serde::{Deserialize, Serialize};

/// Which page of the dashboard is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// The table inventory of the project.
    #[default]
    Tables,
    /// The column list of one table/view entity.
    TableColumns { id: u64 },
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
