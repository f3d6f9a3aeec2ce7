use std::fmt;

pub const SECTION_THRESHOLD_PX: f64 = 100.0;
pub const SCROLL_HINT_HIDE_PX: f64 = 100.0;
pub const REVEAL_START_FRACTION: f64 = 0.8;
pub const REVEAL_DURATION_MS: f64 = 800.0;
pub const REVEAL_STAGGER_MS: f64 = 100.0;
pub const REVEAL_OFFSET_PX: f64 = 30.0;
// power2.out
pub const REVEAL_EASING: &str = "cubic-bezier(0.33, 1, 0.68, 1)";
pub const THEME_STORAGE_KEY: &str = "darkMode";

pub const SECTION_THRESHOLD_ENV: &str = "FOLIO_SECTION_THRESHOLD_PX";
pub const REVEAL_START_FRACTION_ENV: &str = "FOLIO_REVEAL_START_FRACTION";
pub const REVEAL_DURATION_ENV: &str = "FOLIO_REVEAL_DURATION_MS";
pub const REVEAL_STAGGER_ENV: &str = "FOLIO_REVEAL_STAGGER_MS";
pub const REVEAL_OFFSET_ENV: &str = "FOLIO_REVEAL_OFFSET_PX";
pub const THEME_STORAGE_KEY_ENV: &str = "FOLIO_THEME_STORAGE_KEY";

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the viewport height, measured from the top, that a
    /// region's top edge must reach before it fires.
    pub start_fraction: f64,
    pub duration_ms: f64,
    pub stagger_ms: f64,
    pub offset_px: f64,
    pub easing: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            start_fraction: REVEAL_START_FRACTION,
            duration_ms: REVEAL_DURATION_MS,
            stagger_ms: REVEAL_STAGGER_MS,
            offset_px: REVEAL_OFFSET_PX,
            easing: REVEAL_EASING.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub section_threshold_px: f64,
    pub scroll_hint_hide_px: f64,
    pub reveal: RevealConfig,
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            section_threshold_px: SECTION_THRESHOLD_PX,
            scroll_hint_hide_px: SCROLL_HINT_HIDE_PX,
            reveal: RevealConfig::default(),
            theme_storage_key: THEME_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub key: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?} ignored: {}", self.key, self.value, self.reason)
    }
}

impl std::error::Error for ConfigIssue {}

impl SiteConfig {
    /// Applies `KEY=value` overrides; rejected keys keep their current value
    /// and are reported back.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<ConfigIssue>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut issues = Vec::new();
        let mut number = |key: &'static str, valid: fn(f64) -> bool, reason: &'static str| {
            let raw = lookup(key)?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() && valid(value) => Some(value),
                Ok(_) => {
                    issues.push(ConfigIssue {
                        key,
                        value: raw.clone(),
                        reason,
                    });
                    None
                }
                Err(_) => {
                    issues.push(ConfigIssue {
                        key,
                        value: raw.clone(),
                        reason: "not a number",
                    });
                    None
                }
            }
        };

        if let Some(value) = number(SECTION_THRESHOLD_ENV, |v| v >= 0.0, "must be >= 0") {
            self.section_threshold_px = value;
        }
        if let Some(value) = number(
            REVEAL_START_FRACTION_ENV,
            |v| v > 0.0 && v <= 1.0,
            "must be in (0, 1]",
        ) {
            self.reveal.start_fraction = value;
        }
        if let Some(value) = number(REVEAL_DURATION_ENV, |v| v >= 0.0, "must be >= 0") {
            self.reveal.duration_ms = value;
        }
        if let Some(value) = number(REVEAL_STAGGER_ENV, |v| v >= 0.0, "must be >= 0") {
            self.reveal.stagger_ms = value;
        }
        if let Some(value) = number(REVEAL_OFFSET_ENV, |v| v >= 0.0, "must be >= 0") {
            self.reveal.offset_px = value;
        }

        if let Some(raw) = lookup(THEME_STORAGE_KEY_ENV) {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                issues.push(ConfigIssue {
                    key: THEME_STORAGE_KEY_ENV,
                    value: raw.clone(),
                    reason: "storage key cannot be blank",
                });
            } else {
                self.theme_storage_key = trimmed.to_string();
            }
        }
        issues
    }
}
