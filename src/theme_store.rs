use folio_core::{PreferenceStore, StorageError, ThemeController, ThemeSurface};
use web_sys::Storage;

pub(crate) const DARK_CLASS: &str = "dark";

pub(crate) type PageTheme = ThemeController<LocalStore, DocumentSurface>;

/// `window.localStorage`, resolved lazily so a blocked storage area only
/// fails the calls that touch it.
pub(crate) struct LocalStore;

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(|err| {
            let reason = err
                .as_string()
                .unwrap_or_else(|| "setItem threw".to_string());
            StorageError::Rejected(reason)
        })
    }
}

/// Toggles the `dark` class on `<html>`.
pub(crate) struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn apply_dark(&mut self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let _ = root.class_list().toggle_with_force(DARK_CLASS, dark);
    }
}

pub(crate) fn prefers_dark_mode() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(Some(query)) = window.match_media("(prefers-color-scheme: dark)") else {
        return false;
    };
    query.matches()
}

pub(crate) fn open_page_theme(storage_key: &str) -> PageTheme {
    let theme = ThemeController::new(LocalStore, DocumentSurface, storage_key, prefers_dark_mode());
    if !theme.is_persistent() {
        gloo::console::log!("theme: storage unavailable, preference kept in memory");
    }
    theme
}

/// Applies `dark` and logs once if persistence just stopped working.
pub(crate) fn set_page_theme(theme: &mut PageTheme, dark: bool) {
    let was_persistent = theme.is_persistent();
    theme.set(dark);
    if was_persistent && !theme.is_persistent() {
        gloo::console::warn!("theme: storage write failed, preference kept in memory");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_KEY: &str = "folio.test.darkMode";

    fn root_has_dark_class() -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .map(|root| root.class_list().contains(DARK_CLASS))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn toggle_twice_restores_storage_and_class() {
        let mut store = LocalStore;
        store.save(TEST_KEY, "true").unwrap();
        let mut theme = ThemeController::new(LocalStore, DocumentSurface, TEST_KEY, false);
        assert!(theme.is_dark());
        assert!(root_has_dark_class());

        set_page_theme(&mut theme, false);
        assert!(!root_has_dark_class());
        assert_eq!(LocalStore.load(TEST_KEY).unwrap().as_deref(), Some("false"));

        set_page_theme(&mut theme, true);
        assert!(root_has_dark_class());
        assert_eq!(LocalStore.load(TEST_KEY).unwrap().as_deref(), Some("true"));

        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(TEST_KEY);
        }
    }
}
