//! Managed ("locked") schemas.
//!
//! Columns of a protected schema cannot be edited through this UI; the
//! column list suppresses its mutation actions and shows a notice instead.

use std::any::Any;

use schemadeck_states::State;
use ustr::{Ustr, UstrSet};

/// Schemas the platform manages itself.
const DEFAULT_PROTECTED: &[&str] = &[
    "auth",
    "extensions",
    "information_schema",
    "net",
    "pg_catalog",
    "pgsodium",
    "realtime",
    "storage",
    "vault",
];

/// The set of schemas locked against edits from this UI.
#[derive(Debug, Clone)]
pub struct ProtectedSchemas {
    locked: UstrSet,
}

impl Default for ProtectedSchemas {
    fn default() -> Self {
        Self {
            locked: DEFAULT_PROTECTED.iter().copied().map(Ustr::from).collect(),
        }
    }
}

impl ProtectedSchemas {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty set, for tests and unrestricted local projects.
    pub fn none() -> Self {
        Self {
            locked: UstrSet::default(),
        }
    }

    pub fn lock(&mut self, schema: &str) {
        self.locked.insert(Ustr::from(schema));
    }

    pub fn is_protected(&self, schema: &str) -> bool {
        self.locked.contains(&Ustr::from(schema))
    }
}

impl State for ProtectedSchemas {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
