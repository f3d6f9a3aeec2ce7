use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::THEME_STORAGE_KEY;
use folio_core::theme::{decode_preference, encode_preference, MemoryStore};
use folio_core::{PreferenceStore, StorageError, ThemeController, ThemeSurface};

const KEY: &str = "darkMode";

#[derive(Clone, Default)]
struct RecordingSurface {
    applied: Rc<RefCell<Vec<bool>>>,
}

impl RecordingSurface {
    fn last(&self) -> Option<bool> {
        self.applied.borrow().last().copied()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply_dark(&mut self, dark: bool) {
        self.applied.borrow_mut().push(dark);
    }
}

/// Storage that refuses reads, writes, or both.
struct BrokenStore {
    fail_load: bool,
    fail_save: bool,
    saves: Rc<RefCell<u32>>,
}

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_load {
            Err(StorageError::Unavailable)
        } else {
            Ok(None)
        }
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        *self.saves.borrow_mut() += 1;
        if self.fail_save {
            Err(StorageError::Rejected("quota exceeded".to_string()))
        } else {
            Ok(())
        }
    }
}

#[test]
fn stored_preference_beats_os_preference() {
    let mut store = MemoryStore::new();
    store.save(KEY, "false").unwrap();
    let surface = RecordingSurface::default();
    let controller = ThemeController::new(store, surface.clone(), KEY, true);
    assert!(!controller.is_dark());
    assert_eq!(surface.last(), Some(false));
}

#[test]
fn absent_key_uses_os_preference() {
    let surface = RecordingSurface::default();
    let controller = ThemeController::new(MemoryStore::new(), surface.clone(), KEY, true);
    assert!(controller.is_dark());
    assert_eq!(surface.last(), Some(true));
}

#[test]
fn two_toggles_restore_storage_and_styling() {
    for start in [false, true] {
        let mut store = MemoryStore::new();
        store.save(KEY, &encode_preference(start)).unwrap();
        let surface = RecordingSurface::default();
        let mut controller = ThemeController::new(store, surface.clone(), KEY, !start);

        assert_eq!(controller.toggle(), !start);
        assert_eq!(controller.store().get(KEY), Some(encode_preference(!start).as_str()));
        controller.toggle();

        assert_eq!(controller.is_dark(), start);
        assert_eq!(controller.store().get(KEY), Some(encode_preference(start).as_str()));
        assert_eq!(surface.last(), Some(start));
    }
}

#[test]
fn failed_write_degrades_to_memory() {
    let saves = Rc::new(RefCell::new(0));
    let store = BrokenStore {
        fail_load: false,
        fail_save: true,
        saves: saves.clone(),
    };
    let surface = RecordingSurface::default();
    let mut controller = ThemeController::new(store, surface.clone(), KEY, false);
    assert!(controller.is_persistent());

    controller.set(true);
    assert!(controller.is_dark());
    assert!(!controller.is_persistent());
    assert_eq!(surface.last(), Some(true));

    controller.toggle();
    assert!(!controller.is_dark());
    assert_eq!(*saves.borrow(), 1);
}

#[test]
fn unreadable_storage_never_writes() {
    let saves = Rc::new(RefCell::new(0));
    let store = BrokenStore {
        fail_load: true,
        fail_save: false,
        saves: saves.clone(),
    };
    let mut controller = ThemeController::new(store, RecordingSurface::default(), KEY, true);
    assert!(controller.is_dark());
    assert!(!controller.is_persistent());
    controller.toggle();
    assert!(!controller.is_dark());
    assert_eq!(*saves.borrow(), 0);
}

#[test]
fn early_page_script_matches_stored_format() {
    let page = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../index.html"));
    let lookup = format!("localStorage.getItem({THEME_STORAGE_KEY:?})");
    assert!(page.contains(&lookup), "index.html must read {THEME_STORAGE_KEY}");
    assert!(page.contains("JSON.parse(stored)"));
    assert!(page.contains("typeof parsed === \"boolean\""));

    assert_eq!(decode_preference(&encode_preference(true)), Some(true));
    assert_eq!(decode_preference(" false "), Some(false));
    assert_eq!(decode_preference("yes"), None);
    assert_eq!(decode_preference("1"), None);
}
