//! Client-held role flag.
//!
//! The portal has no real authentication: signing in derives a [`Role`]
//! from the email and writes it under [`ROLE_STORAGE_KEY`]. Every protected
//! page reads it back through [`RoleStore`]. The backing storage is a
//! [`KeyValueStore`] so the browser's `localStorage` and an in-memory map
//! are interchangeable.

use crate::role::Role;
use std::collections::HashMap;

/// Well-known storage key holding the role string.
pub const ROLE_STORAGE_KEY: &str = "userRole";

/// String key-value storage with `localStorage` semantics.
///
/// Implementations swallow backend failures: a failed read is `None`,
/// a failed write is dropped.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set_item(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Reads and writes the current role. Last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleStore<S> {
    storage: S,
}

impl<S: KeyValueStore> RoleStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn set_role(&mut self, role: Role) {
        self.storage.set_item(ROLE_STORAGE_KEY, role.as_str());
    }

    /// The stored role, or `None` when the key is absent or unrecognised.
    pub fn stored_role(&self) -> Option<Role> {
        self.storage
            .get_item(ROLE_STORAGE_KEY)
            .as_deref()
            .and_then(Role::parse)
    }

    /// The stored role, defaulting to `Employee`.
    pub fn get_role(&self) -> Role {
        self.stored_role().unwrap_or_default()
    }

    pub fn clear_role(&mut self) {
        self.storage.remove_item(ROLE_STORAGE_KEY);
    }

    /// Derive the role from `email`, store it and return it.
    pub fn sign_in(&mut self, email: &str) -> Role {
        let role = Role::from_email(email);
        self.set_role(role);
        role
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Page;
    use crate::views::DashboardView;

    #[test]
    fn empty_store_reads_employee() {
        let store = RoleStore::new(MemoryStore::new());
        assert_eq!(store.stored_role(), None);
        assert_eq!(store.get_role(), Role::Employee);
    }

    #[test]
    fn role_is_written_under_the_well_known_key() {
        let mut store = RoleStore::new(MemoryStore::new());
        store.set_role(Role::Manager);
        assert_eq!(
            store.storage().get_item("userRole").as_deref(),
            Some("manager")
        );
    }

    #[test]
    fn last_write_wins() {
        let mut store = RoleStore::new(MemoryStore::new());
        store.set_role(Role::Admin);
        store.set_role(Role::Employee);
        store.set_role(Role::Manager);
        assert_eq!(store.get_role(), Role::Manager);
    }

    #[test]
    fn clear_removes_the_key() {
        let mut store = RoleStore::new(MemoryStore::with_item(ROLE_STORAGE_KEY, "admin"));
        assert_eq!(store.get_role(), Role::Admin);
        store.clear_role();
        assert_eq!(store.storage().get_item(ROLE_STORAGE_KEY), None);
        assert_eq!(store.get_role(), Role::Employee);
    }

    #[test]
    fn garbage_value_reads_as_employee() {
        let store = RoleStore::new(MemoryStore::with_item(ROLE_STORAGE_KEY, "root"));
        assert_eq!(store.stored_role(), None);
        assert_eq!(store.get_role(), Role::Employee);
    }

    #[test]
    fn capitalised_admin_does_not_unlock_users() {
        for raw in ["Admin", "ADMIN", " admin "] {
            let store = RoleStore::new(MemoryStore::with_item(ROLE_STORAGE_KEY, raw));
            assert_eq!(store.get_role(), Role::Employee, "stored {raw:?}");
            assert!(!Page::Users.access_for(store.get_role()).is_allowed());
        }
    }

    #[test]
    fn manager_sign_in_is_denied_users_and_allowed_reports() {
        let mut store = RoleStore::new(MemoryStore::new());
        let role = store.sign_in("manager@example.com");
        assert_eq!(role, Role::Manager);
        assert_eq!(store.storage().get_item(ROLE_STORAGE_KEY).as_deref(), Some("manager"));

        let role = store.get_role();
        assert!(!Page::Users.access_for(role).is_allowed());
        assert!(Page::Reports.access_for(role).is_allowed());
    }

    #[test]
    fn cleared_role_lands_on_employee_dashboard() {
        let mut store = RoleStore::new(MemoryStore::new());
        store.sign_in("admin@example.com");
        store.clear_role();
        assert_eq!(DashboardView::for_role(store.get_role()), DashboardView::Employee);
    }
}
