//! Durable preferences over `localStorage`.
//!
//! Thin backend adapter plus a process-wide [`PrefsStore`] singleton.
//! Storage can be unavailable (privacy mode); everything stays best-effort.

use hh_prefs::{PrefsBackend, PrefsStore};

pub struct LocalStorageBackend;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl PrefsBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        let Some(s) = storage() else { return };
        if s.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("prefs write failed for {key}").into());
        }
    }
}

thread_local! {
    static PREFS: PrefsStore<LocalStorageBackend> = PrefsStore::new(LocalStorageBackend);
}

/// Run a closure against the shared preference store.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&PrefsStore<LocalStorageBackend>) -> R,
{
    PREFS.with(|store| f(store))
}
