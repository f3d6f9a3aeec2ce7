use std::cell::RefCell;

use folio_core::config::{
    REVEAL_DURATION_ENV, REVEAL_OFFSET_ENV, REVEAL_STAGGER_ENV, REVEAL_START_FRACTION_ENV,
    SECTION_THRESHOLD_ENV, THEME_STORAGE_KEY_ENV,
};
use folio_core::SiteConfig;

thread_local! {
    static SITE_CONFIG: RefCell<Option<SiteConfig>> = RefCell::new(None);
}

/// Build-time value for `key`, with Trunk's `TRUNK_PUBLIC_` spelling as a
/// fallback.
fn build_env(key: &str) -> Option<String> {
    let raw = match key {
        SECTION_THRESHOLD_ENV => option_env!("FOLIO_SECTION_THRESHOLD_PX")
            .or(option_env!("TRUNK_PUBLIC_FOLIO_SECTION_THRESHOLD_PX")),
        REVEAL_START_FRACTION_ENV => option_env!("FOLIO_REVEAL_START_FRACTION")
            .or(option_env!("TRUNK_PUBLIC_FOLIO_REVEAL_START_FRACTION")),
        REVEAL_DURATION_ENV => option_env!("FOLIO_REVEAL_DURATION_MS")
            .or(option_env!("TRUNK_PUBLIC_FOLIO_REVEAL_DURATION_MS")),
        REVEAL_STAGGER_ENV => option_env!("FOLIO_REVEAL_STAGGER_MS")
            .or(option_env!("TRUNK_PUBLIC_FOLIO_REVEAL_STAGGER_MS")),
        REVEAL_OFFSET_ENV => option_env!("FOLIO_REVEAL_OFFSET_PX")
            .or(option_env!("TRUNK_PUBLIC_FOLIO_REVEAL_OFFSET_PX")),
        THEME_STORAGE_KEY_ENV => option_env!("FOLIO_THEME_STORAGE_KEY")
            .or(option_env!("TRUNK_PUBLIC_FOLIO_THEME_STORAGE_KEY")),
        _ => None,
    };
    raw.map(str::to_string)
}

fn load_site_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    for issue in config.apply_overrides(build_env) {
        gloo::console::warn!("config:", issue.to_string());
    }
    config
}

pub(crate) fn site_config() -> SiteConfig {
    SITE_CONFIG.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(load_site_config)
            .clone()
    })
}
