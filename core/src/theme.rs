//! Dark-mode preference: resolution at load, persistence on change.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    Rejected(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Rejected(reason) => write!(f, "storage rejected write: {reason}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Key-value client storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Global styling flag toggled alongside the preference.
pub trait ThemeSurface {
    fn apply_dark(&mut self, dark: bool);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode_preference(dark: bool) -> String {
    serde_json::to_string(&dark).unwrap_or_else(|_| dark.to_string())
}

pub fn decode_preference(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw.trim()).ok()
}

/// Stored value wins; otherwise the OS-level preference.
pub fn resolve_preference(stored: Option<&str>, prefers_dark: bool) -> bool {
    stored.and_then(decode_preference).unwrap_or(prefers_dark)
}

pub struct ThemeController<S, A> {
    store: S,
    surface: A,
    key: String,
    dark: bool,
    persistent: bool,
}

impl<S, A> ThemeController<S, A>
where
    S: PreferenceStore,
    A: ThemeSurface,
{
    pub fn new(store: S, mut surface: A, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let (stored, persistent) = match store.load(&key) {
            Ok(stored) => (stored, true),
            Err(_) => (None, false),
        };
        let dark = resolve_preference(stored.as_deref(), prefers_dark);
        surface.apply_dark(dark);
        Self {
            store,
            surface,
            key,
            dark,
            persistent,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// `false` once storage has failed; the preference then lives in memory
    /// until the page is reloaded.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn set(&mut self, dark: bool) {
        self.dark = dark;
        self.surface.apply_dark(dark);
        if !self.persistent {
            return;
        }
        if self.store.save(&self.key, &encode_preference(dark)).is_err() {
            self.persistent = false;
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.set(!self.dark);
        self.dark
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &A {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_json_boolean_round_trips() {
        assert_eq!(encode_preference(true), "true");
        assert_eq!(decode_preference("false"), Some(false));
        assert_eq!(decode_preference(" true\n"), Some(true));
        assert_eq!(decode_preference("\"dark\""), None);
    }

    #[test]
    fn unreadable_stored_value_falls_back_to_os() {
        assert!(resolve_preference(Some("yes"), true));
        assert!(!resolve_preference(None, false));
        assert!(!resolve_preference(Some("false"), true));
    }
}
