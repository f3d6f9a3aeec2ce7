//! Page view state and the pure reducer that drives it.
//!
//! Everything scroll-derived (progress, offset, active section) is computed
//! from a [`ScrollSample`], so the reducer can be fed synthetic geometry
//! without a browser.

use crate::config::SiteConfig;
use crate::section::Section;

/// Viewport-relative vertical extent of a section container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn covers(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// One reading of the viewport position source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
    /// Sections whose containers were found; absent ones are skipped.
    pub sections: Vec<(Section, SectionBounds)>,
}

pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = document_height - viewport_height;
    if !scroll_top.is_finite() || !max_scroll.is_finite() || max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_top / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// First section, in document order, whose box straddles `threshold`.
pub fn active_section(sections: &[(Section, SectionBounds)], threshold: f64) -> Option<Section> {
    Section::ALL.iter().copied().find(|section| {
        sections
            .iter()
            .find(|(candidate, _)| candidate == section)
            .is_some_and(|(_, bounds)| bounds.covers(threshold))
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AboutTab {
    #[default]
    Skills,
    Interests,
}

impl AboutTab {
    pub fn label(self) -> &'static str {
        match self {
            AboutTab::Skills => "Skills",
            AboutTab::Interests => "Interests",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ViewThresholds {
    section_px: f64,
    scroll_hint_px: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub dark_mode: bool,
    pub menu_open: bool,
    pub active_section: Section,
    pub scroll_progress: f64,
    pub scroll_y: f64,
    pub about_tab: AboutTab,
    pub open_certificate: Option<usize>,
    thresholds: ViewThresholds,
}

#[derive(Clone, Debug)]
pub enum ViewAction {
    SetTheme(bool),
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    NavItemActivated(Section),
    Scrolled(ScrollSample),
    SelectTab(AboutTab),
    OpenCertificate(usize),
    CloseCertificate,
}

impl ViewState {
    pub fn new(dark_mode: bool, config: &SiteConfig) -> Self {
        Self {
            dark_mode,
            menu_open: false,
            active_section: Section::Home,
            scroll_progress: 0.0,
            scroll_y: 0.0,
            about_tab: AboutTab::default(),
            open_certificate: None,
            thresholds: ViewThresholds {
                section_px: config.section_threshold_px,
                scroll_hint_px: config.scroll_hint_hide_px,
            },
        }
    }

    pub fn reduce(&self, action: ViewAction) -> Self {
        let mut next = self.clone();
        match action {
            ViewAction::SetTheme(dark) => next.dark_mode = dark,
            ViewAction::ToggleTheme => next.dark_mode = !self.dark_mode,
            ViewAction::ToggleMenu => next.menu_open = !self.menu_open,
            ViewAction::CloseMenu | ViewAction::NavItemActivated(_) => next.menu_open = false,
            ViewAction::Scrolled(sample) => {
                next.scroll_progress = scroll_progress(
                    sample.scroll_top,
                    sample.document_height,
                    sample.viewport_height,
                );
                next.scroll_y = if sample.scroll_top.is_finite() {
                    sample.scroll_top.max(0.0)
                } else {
                    0.0
                };
                if let Some(section) = active_section(&sample.sections, self.thresholds.section_px)
                {
                    next.active_section = section;
                }
            }
            ViewAction::SelectTab(tab) => next.about_tab = tab,
            ViewAction::OpenCertificate(index) => next.open_certificate = Some(index),
            ViewAction::CloseCertificate => next.open_certificate = None,
        }
        next
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    pub fn scroll_hint_visible(&self) -> bool {
        self.scroll_y <= self.thresholds.scroll_hint_px
    }
}
