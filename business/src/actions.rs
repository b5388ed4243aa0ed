//! Gating policy for column mutation actions.

use crate::EntityKind;

/// Which mutation controls the column list renders, and which are enabled.
///
/// Derived fresh each frame from the entity kind, the schema lock, and the
/// session's write capability. Delete is gated on the lock twice: the whole
/// menu disappears for a locked schema, and the item itself re-checks the
/// lock so the two gates can regress independently without opening a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnActionPolicy {
    /// Whether the "New column" control appears at all.
    pub show_add: bool,
    /// Whether "New column" is clickable (it renders disabled without the
    /// write capability, with an explanatory tooltip).
    pub add_enabled: bool,
    /// Whether per-row action menus appear at all.
    pub show_menu: bool,
    pub edit_enabled: bool,
    pub delete_enabled: bool,
}

impl ColumnActionPolicy {
    pub fn derive(kind: EntityKind, schema_locked: bool, can_write: bool) -> Self {
        let mutable_entity = kind.is_table_like() && !schema_locked;
        Self {
            show_add: mutable_entity,
            add_enabled: mutable_entity && can_write,
            show_menu: mutable_entity,
            edit_enabled: can_write,
            delete_enabled: can_write && !schema_locked,
        }
    }

    /// Policy for states where no entity is resolved yet.
    pub fn denied() -> Self {
        Self {
            show_add: false,
            add_enabled: false,
            show_menu: false,
            edit_enabled: false,
            delete_enabled: false,
        }
    }
}
