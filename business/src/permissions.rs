//! Capability checks for the current dashboard session.
//!
//! The permission set is resolved when the session opens; widgets only ask
//! boolean questions about it.

use std::any::Any;
use std::collections::HashSet;

use schemadeck_states::State;

/// Action kinds this slice asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionAction {
    SqlAdminRead,
    SqlAdminWrite,
}

/// Resource kinds this slice asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Tables,
    Columns,
}

/// Granted (action, resource) pairs for the session.
#[derive(Debug, Clone, Default)]
pub struct Permissions {
    granted: HashSet<(PermissionAction, Resource)>,
}

impl Permissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with every capability, used by the shell and tests.
    pub fn allow_all() -> Self {
        let mut granted = HashSet::new();
        for action in [PermissionAction::SqlAdminRead, PermissionAction::SqlAdminWrite] {
            for resource in [Resource::Tables, Resource::Columns] {
                granted.insert((action, resource));
            }
        }
        Self { granted }
    }

    pub fn grant(&mut self, action: PermissionAction, resource: Resource) {
        self.granted.insert((action, resource));
    }

    pub fn revoke(&mut self, action: PermissionAction, resource: Resource) {
        self.granted.remove(&(action, resource));
    }

    pub fn can(&self, action: PermissionAction, resource: Resource) -> bool {
        self.granted.contains(&(action, resource))
    }
}

impl State for Permissions {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod permissions_tests {
    use super::*;

    #[test]
    fn empty_session_denies() {
        let permissions = Permissions::new();
        assert!(!permissions.can(PermissionAction::SqlAdminWrite, Resource::Columns));
    }

    #[test]
    fn grant_is_pair_specific() {
        let mut permissions = Permissions::new();
        permissions.grant(PermissionAction::SqlAdminWrite, Resource::Columns);

        assert!(permissions.can(PermissionAction::SqlAdminWrite, Resource::Columns));
        assert!(!permissions.can(PermissionAction::SqlAdminWrite, Resource::Tables));
        assert!(!permissions.can(PermissionAction::SqlAdminRead, Resource::Columns));
    }

    #[test]
    fn revoke_removes_capability() {
        let mut permissions = Permissions::allow_all();
        permissions.revoke(PermissionAction::SqlAdminWrite, Resource::Columns);

        assert!(!permissions.can(PermissionAction::SqlAdminWrite, Resource::Columns));
        assert!(permissions.can(PermissionAction::SqlAdminRead, Resource::Columns));
    }
}
