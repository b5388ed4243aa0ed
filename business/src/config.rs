//! Connection configuration for the project API.

use std::any::Any;

use schemadeck_states::State;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the dashboard talks to.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    api_base_url: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}

impl BusinessConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
