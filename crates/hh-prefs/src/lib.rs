use hh_catalog_types::Language;
use std::cell::RefCell;
use std::collections::HashMap;

pub const WISHLIST_KEY: &str = "hh_wishlist";
pub const RECENTS_KEY: &str = "hh_recently_viewed";
pub const DARK_MODE_KEY: &str = "hh_dark_mode";
pub const LANGUAGE_KEY: &str = "hh_lang";
pub const COOKIE_CONSENT_KEY: &str = "hh_cookie_consent";

pub const RECENTS_CAP: usize = 6;

/// Synchronous key/value access to origin-scoped durable storage.
/// Implementations never fail loudly: `read` answers `None` for anything
/// unavailable and `write` is best-effort.
pub trait PrefsBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Backend for environments without storage (privacy mode, quota exhausted).
#[derive(Default)]
pub struct NoopBackend;

impl PrefsBackend for NoopBackend {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) {}
}

#[derive(Default)]
pub struct MemoryBackend {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

impl PrefsBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

pub struct PrefsStore<B> {
    backend: B,
}

impl<B: PrefsBackend> PrefsStore<B> {
    pub fn new(backend: B) -> PrefsStore<B> {
        PrefsStore { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read_ids(&self, key: &str) -> Vec<String> {
        let Some(raw) = self.backend.read(key) else {
            return Vec::new();
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw) else {
            return Vec::new();
        };
        // Non-array values and non-string entries are treated as absent.
        value
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|v| v.as_str())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn write_ids(&self, key: &str, ids: &[String]) {
        if let Ok(raw) = serde_json::to_string(ids) {
            self.backend.write(key, &raw);
        }
    }

    fn read_flag(&self, key: &str) -> bool {
        self.backend.read(key).as_deref() == Some("1")
    }

    fn write_flag(&self, key: &str, on: bool) {
        self.backend.write(key, if on { "1" } else { "0" });
    }

    pub fn wishlist(&self) -> Vec<String> {
        self.read_ids(WISHLIST_KEY)
    }

    pub fn set_wishlist(&self, ids: &[String]) {
        self.write_ids(WISHLIST_KEY, ids);
    }

    pub fn is_wishlisted(&self, id: &str) -> bool {
        self.wishlist().iter().any(|entry| entry == id)
    }

    /// Returns the new membership state. The state is computed before the
    /// write lands; a failing backend silently keeps the old list.
    pub fn toggle_wishlist(&self, id: &str) -> bool {
        let mut ids = self.wishlist();
        let was_present = ids.iter().any(|entry| entry == id);
        if was_present {
            ids.retain(|entry| entry != id);
        } else {
            ids.push(id.to_owned());
        }
        self.write_ids(WISHLIST_KEY, &ids);
        !was_present
    }

    pub fn recently_viewed(&self) -> Vec<String> {
        let mut ids = self.read_ids(RECENTS_KEY);
        ids.truncate(RECENTS_CAP);
        ids
    }

    /// Moves `id` to the front, dropping any previous occurrence, and keeps
    /// at most [`RECENTS_CAP`] entries.
    pub fn add_recently_viewed(&self, id: &str) {
        let mut ids = self.recently_viewed();
        ids.retain(|entry| entry != id);
        ids.insert(0, id.to_owned());
        ids.truncate(RECENTS_CAP);
        self.write_ids(RECENTS_KEY, &ids);
    }

    pub fn dark_mode(&self) -> bool {
        self.read_flag(DARK_MODE_KEY)
    }

    pub fn set_dark_mode(&self, on: bool) {
        self.write_flag(DARK_MODE_KEY, on);
    }

    pub fn language(&self) -> Language {
        self.backend
            .read(LANGUAGE_KEY)
            .map(|raw| Language::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set_language(&self, lang: Language) {
        self.backend.write(LANGUAGE_KEY, lang.code());
    }

    pub fn cookie_consent(&self) -> bool {
        self.read_flag(COOKIE_CONSENT_KEY)
    }

    pub fn set_cookie_consent(&self, granted: bool) {
        self.write_flag(COOKIE_CONSENT_KEY, granted);
    }
}
