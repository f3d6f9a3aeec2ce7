//! Static page content, generated at build time from `content/portfolio.toml`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
}

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub avatar: &'static str,
    pub bio: &'static str,
    pub copyright_year: u16,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: SocialIcon,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub rating: &'static str,
    /// Percent, 0..=100.
    pub level: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Certificate {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/portfolio_catalog.rs"));

pub fn certificate(index: usize) -> Option<&'static Certificate> {
    CERTIFICATES.get(index)
}
