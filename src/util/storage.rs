//! Browser localStorage helpers for client-persisted state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drafts and the session snapshot live in `localStorage` under `knoword.*`
//! keys. These helpers centralize the hydrate-only web-sys glue; on native
//! test builds they read and write a per-thread in-memory map instead, so the
//! persistence semantics (overwrite, remove, JSON round-trip) stay testable
//! without a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(all(test, not(feature = "hydrate")))]
thread_local! {
    static TEST_STORE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Load a JSON value from storage for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = raw_get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to storage for `key`, overwriting any previous value.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    raw_set(key, &raw);
}

/// Remove `key` from storage.
pub fn remove_key(key: &str) {
    raw_remove(key);
}

fn raw_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        TEST_STORE.with(|store| store.borrow().get(key).cloned())
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = key;
        None
    }
}

fn raw_set(key: &str, raw: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, raw);
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        TEST_STORE.with(|store| {
            store.borrow_mut().insert(key.to_owned(), raw.to_owned());
        });
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = (key, raw);
    }
}

fn raw_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        TEST_STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = key;
    }
}
