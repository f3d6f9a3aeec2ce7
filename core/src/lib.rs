pub mod catalog;
pub mod config;
pub mod contact;
pub mod reveal;
pub mod scatter;
pub mod section;
pub mod theme;
pub mod view_state;

pub use config::{ConfigIssue, RevealConfig, SiteConfig};
pub use contact::{submit, ContactError, ContactField, ContactForm, ContactSink, ContactSubmission};
pub use reveal::{stagger_plan, RegionPhase, RevealStep, RevealTracker};
pub use section::Section;
pub use theme::{MemoryStore, PreferenceStore, StorageError, ThemeController, ThemeSurface};
pub use view_state::{
    active_section, scroll_progress, AboutTab, ScrollSample, SectionBounds, ViewAction, ViewState,
};
