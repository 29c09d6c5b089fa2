//! Client session: the role flag kept in `localStorage`.

use dioxus::prelude::*;
use shared_types::{KeyValueStore, MemoryStore, Role, RoleStore, ROLE_STORAGE_KEY};
use shared_ui::LoadingSpinner;

/// `localStorage` behind an in-memory cache.
///
/// Reads come from the cache so they stay synchronous inside render; writes
/// go to both. The cache is filled once from the browser by
/// [`use_session_provider`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserStorage {
    cache: MemoryStore,
}

impl BrowserStorage {
    /// Cache seeded with the value read back from the browser.
    pub fn hydrated(role: Option<String>) -> Self {
        match role {
            Some(value) => Self {
                cache: MemoryStore::with_item(ROLE_STORAGE_KEY, &value),
            },
            None => Self::default(),
        }
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.cache.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.cache.set_item(key, value);
        document::eval(&format!(
            "try {{ localStorage.setItem({}, {}); }} catch (e) {{}}",
            js_string(key),
            js_string(value)
        ));
    }

    fn remove_item(&mut self, key: &str) {
        self.cache.remove_item(key);
        document::eval(&format!(
            "try {{ localStorage.removeItem({}); }} catch (e) {{}}",
            js_string(key)
        ));
    }
}

/// Session context shared by every route.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    store: Signal<RoleStore<BrowserStorage>>,
    loaded: Signal<bool>,
}

impl SessionState {
    /// Session that has not read the browser yet.
    fn unloaded() -> Self {
        Self {
            store: Signal::new(RoleStore::new(BrowserStorage::default())),
            loaded: Signal::new(false),
        }
    }

    /// False until the stored role has been read back from the browser.
    pub fn is_loaded(&self) -> bool {
        *self.loaded.read()
    }

    /// Current role; a missing or unknown value reads as `Employee`.
    pub fn role(&self) -> Role {
        self.store.read().get_role()
    }

    pub fn set_role(&mut self, role: Role) {
        self.store.write().set_role(role);
    }

    pub fn clear(&mut self) {
        self.store.write().clear_role();
    }

    fn hydrate(&mut self, stored: Option<String>) {
        self.store.set(RoleStore::new(BrowserStorage::hydrated(stored)));
        self.loaded.set(true);
    }
}

/// Provide [`SessionState`] and load the stored role once on the client.
pub fn use_session_provider() -> SessionState {
    let mut session = use_context_provider(SessionState::unloaded);

    use_effect(move || {
        spawn(async move {
            let stored = document::eval(&format!(
                "try {{ return localStorage.getItem({}); }} catch (e) {{ return null; }}",
                js_string(ROLE_STORAGE_KEY)
            ))
            .join::<Option<String>>()
            .await
            .ok()
            .flatten();
            tracing::debug!(?stored, "session restored");
            session.hydrate(stored);
        });
    });

    session
}

/// Spinner until the stored role has been read once, then `children`.
#[component]
pub fn SessionGate(children: Element) -> Element {
    if use_session().is_loaded() {
        rsx! { {children} }
    } else {
        rsx! { LoadingSpinner {} }
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Role of the current visitor.
pub fn use_role() -> Role {
    use_session().role()
}
