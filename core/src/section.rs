use std::fmt;

/// Named page regions, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    #[default]
    Home,
    About,
    Portfolio,
    Resume,
    Certificates,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Resume,
        Section::Certificates,
        Section::Contact,
    ];

    /// DOM id of the section container, also used as the anchor fragment.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Resume => "resume",
            Section::Certificates => "certificates",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Resume => "Resume",
            Section::Certificates => "Certificates",
            Section::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_point_at_dom_ids() {
        assert_eq!(Section::About.anchor(), "#about");
        assert_eq!(Section::Certificates.to_string(), "certificates");
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn ids_follow_document_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|section| section.id()).collect();
        assert_eq!(
            ids,
            vec!["home", "about", "portfolio", "resume", "certificates", "contact"]
        );
    }
}
