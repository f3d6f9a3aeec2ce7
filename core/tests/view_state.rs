use folio_core::{
    scroll_progress, AboutTab, ScrollSample, Section, SectionBounds, SiteConfig, ViewAction,
    ViewState,
};

const VIEWPORT: f64 = 800.0;
const SECTION_HEIGHT: f64 = 900.0;

/// Six stacked sections of equal height, measured at `scroll_top`.
fn sample_at(scroll_top: f64) -> ScrollSample {
    let sections = Section::ALL
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let top = index as f64 * SECTION_HEIGHT - scroll_top;
            (*section, SectionBounds::new(top, top + SECTION_HEIGHT))
        })
        .collect();
    ScrollSample {
        scroll_top,
        document_height: SECTION_HEIGHT * Section::ALL.len() as f64,
        viewport_height: VIEWPORT,
        sections,
    }
}

fn initial() -> ViewState {
    ViewState::new(false, &SiteConfig::default())
}

#[test]
fn progress_matches_ratio_across_range() {
    let document_height = 5400.0;
    let max_scroll = document_height - VIEWPORT;
    let mut offset = 0.0;
    while offset <= max_scroll {
        let expected = (offset / max_scroll * 100.0).clamp(0.0, 100.0);
        let actual = scroll_progress(offset, document_height, VIEWPORT);
        assert!((actual - expected).abs() < 1e-9, "offset {offset}");
        offset += 137.0;
    }
    assert_eq!(scroll_progress(max_scroll, document_height, VIEWPORT), 100.0);
}

#[test]
fn zero_max_scroll_reports_zero_progress() {
    let state = initial().reduce(ViewAction::Scrolled(ScrollSample {
        scroll_top: 0.0,
        document_height: VIEWPORT,
        viewport_height: VIEWPORT,
        sections: Vec::new(),
    }));
    assert_eq!(state.scroll_progress, 0.0);
}

#[test]
fn final_offset_decides_active_section() {
    let about_offset = SECTION_HEIGHT + 50.0;
    let sequences: [&[f64]; 3] = [
        &[0.0, 4000.0, 2500.0, about_offset],
        &[3500.0, about_offset],
        &[about_offset, about_offset, 120.0, 1800.0, about_offset],
    ];
    for offsets in sequences {
        let state = offsets.iter().fold(initial(), |state, offset| {
            state.reduce(ViewAction::Scrolled(sample_at(*offset)))
        });
        assert_eq!(state.active_section, Section::About, "offsets {offsets:?}");
    }
}

#[test]
fn no_match_keeps_previous_section() {
    let state = initial().reduce(ViewAction::Scrolled(sample_at(2.0 * SECTION_HEIGHT)));
    assert_eq!(state.active_section, Section::Portfolio);

    let gap = ScrollSample {
        scroll_top: 1900.0,
        document_height: 5400.0,
        viewport_height: VIEWPORT,
        sections: vec![(Section::Resume, SectionBounds::new(300.0, 1200.0))],
    };
    let state = state.reduce(ViewAction::Scrolled(gap));
    assert_eq!(state.active_section, Section::Portfolio);
    assert!((state.scroll_progress - 1900.0 / 4600.0 * 100.0).abs() < 1e-9);
}

#[test]
fn missing_containers_are_skipped() {
    let sample = ScrollSample {
        scroll_top: 0.0,
        document_height: 3000.0,
        viewport_height: VIEWPORT,
        sections: vec![(Section::Contact, SectionBounds::new(0.0, 700.0))],
    };
    let state = initial().reduce(ViewAction::Scrolled(sample));
    assert_eq!(state.active_section, Section::Contact);
}

#[test]
fn nav_item_always_closes_menu() {
    let closed = initial();
    let open = closed.reduce(ViewAction::ToggleMenu);
    assert!(open.menu_open);
    for start in [closed, open] {
        for section in Section::ALL {
            let next = start.reduce(ViewAction::NavItemActivated(section));
            assert!(!next.menu_open);
        }
    }
}

#[test]
fn reducer_leaves_input_untouched() {
    let state = initial();
    let snapshot = state.clone();
    let _ = state.reduce(ViewAction::ToggleTheme);
    let _ = state.reduce(ViewAction::Scrolled(sample_at(3000.0)));
    assert_eq!(state, snapshot);
}

#[test]
fn theme_toggles_twice_return_to_start() {
    let state = initial();
    let twice = state
        .reduce(ViewAction::ToggleTheme)
        .reduce(ViewAction::ToggleTheme);
    assert_eq!(twice.dark_mode, state.dark_mode);
    assert!(state.reduce(ViewAction::SetTheme(true)).dark_mode);
}

#[test]
fn tabs_and_certificate_dialog() {
    let state = initial()
        .reduce(ViewAction::SelectTab(AboutTab::Interests))
        .reduce(ViewAction::OpenCertificate(3));
    assert_eq!(state.about_tab, AboutTab::Interests);
    assert_eq!(state.open_certificate, Some(3));
    let closed = state.reduce(ViewAction::CloseCertificate);
    assert_eq!(closed.open_certificate, None);
    assert_eq!(closed.about_tab, AboutTab::Interests);
}

#[test]
fn custom_threshold_is_honoured() {
    let mut config = SiteConfig::default();
    config.section_threshold_px = 0.0;
    let state = ViewState::new(false, &config);
    let sample = ScrollSample {
        scroll_top: 850.0,
        document_height: 5400.0,
        viewport_height: VIEWPORT,
        sections: vec![
            (Section::Home, SectionBounds::new(-850.0, 50.0)),
            (Section::About, SectionBounds::new(50.0, 950.0)),
        ],
    };
    assert_eq!(state.reduce(ViewAction::Scrolled(sample)).active_section, Section::Home);
}
