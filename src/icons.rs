use folio_core::catalog::SocialIcon;
use folio_core::Section;
use yew::prelude::*;

/// Stroke icons on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Icon {
    Menu,
    Close,
    Home,
    User,
    Briefcase,
    FileText,
    Award,
    Mail,
    Github,
    Linkedin,
    Twitter,
    Moon,
    Sun,
    ChevronRight,
    ChevronDown,
    Send,
    ExternalLink,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Menu => &["M4 6h16M4 12h16M4 18h16"],
            Icon::Close => &["M18 6 6 18M6 6l12 12"],
            Icon::Home => &[
                "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            Icon::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            ],
            Icon::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            Icon::FileText => &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6M16 13H8M16 17H8M10 9H8",
            ],
            Icon::Award => &[
                "M18 8a6 6 0 1 1-12 0 6 6 0 0 1 12 0z",
                "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0z",
            ],
            Icon::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            Icon::Sun => &[
                "M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
                "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
            ],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::Send => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
            Icon::ExternalLink => &["M15 3h6v6", "M10 14 21 3", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"],
        }
    }
}

pub(crate) fn section_icon(section: Section) -> Icon {
    match section {
        Section::Home => Icon::Home,
        Section::About => Icon::User,
        Section::Portfolio => Icon::Briefcase,
        Section::Resume => Icon::FileText,
        Section::Certificates => Icon::Award,
        Section::Contact => Icon::Mail,
    }
}

pub(crate) fn social_icon(icon: SocialIcon) -> Icon {
    match icon {
        SocialIcon::Github => Icon::Github,
        SocialIcon::Linkedin => Icon::Linkedin,
        SocialIcon::Twitter => Icon::Twitter,
    }
}

pub(crate) fn icon(kind: Icon, class: &'static str) -> Html {
    html! {
        <svg
            class={classes!("icon", class)}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for kind.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
