use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const SOCIAL_ICONS: &[(&str, &str)] = &[
    ("github", "SocialIcon::Github"),
    ("linkedin", "SocialIcon::Linkedin"),
    ("twitter", "SocialIcon::Twitter"),
];

#[derive(Deserialize)]
struct ContentFile {
    profile: ProfileEntry,
    #[serde(default)]
    social: Vec<SocialEntry>,
    #[serde(default)]
    skills: Vec<SkillEntry>,
    #[serde(default)]
    interests: Vec<String>,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    #[serde(default)]
    jobs: Vec<JobEntry>,
    #[serde(default)]
    education: Vec<EducationEntry>,
    #[serde(default)]
    certificates: Vec<CertificateEntry>,
}

#[derive(Deserialize)]
struct ProfileEntry {
    name: String,
    initials: String,
    tagline: String,
    avatar: String,
    bio: String,
    copyright_year: u16,
}

#[derive(Deserialize)]
struct SocialEntry {
    label: String,
    icon: String,
    href: String,
}

#[derive(Deserialize)]
struct SkillEntry {
    name: String,
    rating: String,
    level: u8,
}

#[derive(Deserialize)]
struct ProjectEntry {
    title: String,
    description: String,
    image: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct JobEntry {
    title: String,
    company: String,
    period: String,
    #[serde(default)]
    responsibilities: Vec<String>,
}

#[derive(Deserialize)]
struct EducationEntry {
    degree: String,
    school: String,
    period: String,
}

#[derive(Deserialize)]
struct CertificateEntry {
    name: String,
    issuer: String,
    date: String,
    image: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read portfolio content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse portfolio content at {}: {err}",
            content_path.display()
        )
    });

    validate(&content, &content_path);

    let output = render(&content);
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("portfolio_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PORTFOLIO_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/portfolio.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn require_text(value: &str, what: &str, content_path: &Path) {
    if value.trim().is_empty() {
        panic!("{what} cannot be empty in {}", content_path.display());
    }
}

fn validate(content: &ContentFile, content_path: &Path) {
    let profile = &content.profile;
    require_text(&profile.name, "profile name", content_path);
    require_text(&profile.initials, "profile initials", content_path);
    require_text(&profile.tagline, "profile tagline", content_path);
    require_text(&profile.avatar, "profile avatar", content_path);
    require_text(&profile.bio, "profile bio", content_path);

    for social in &content.social {
        require_text(&social.label, "social label", content_path);
        require_text(&social.href, "social href", content_path);
        if social_icon(&social.icon).is_none() {
            panic!(
                "social '{}' uses unknown icon '{}' in {}",
                social.label,
                social.icon,
                content_path.display()
            );
        }
    }

    for skill in &content.skills {
        require_text(&skill.name, "skill name", content_path);
        require_text(&skill.rating, "skill rating", content_path);
        if skill.level > 100 {
            panic!(
                "skill '{}' has level {} above 100 in {}",
                skill.name,
                skill.level,
                content_path.display()
            );
        }
    }

    for interest in &content.interests {
        require_text(interest, "interest", content_path);
    }

    let mut titles = HashSet::new();
    for project in &content.projects {
        require_text(&project.title, "project title", content_path);
        require_text(&project.description, "project description", content_path);
        require_text(&project.image, "project image", content_path);
        if !titles.insert(project.title.clone()) {
            panic!(
                "duplicate project title '{}' in {}",
                project.title,
                content_path.display()
            );
        }
    }

    for job in &content.jobs {
        require_text(&job.title, "job title", content_path);
        require_text(&job.company, "job company", content_path);
        require_text(&job.period, "job period", content_path);
    }

    for entry in &content.education {
        require_text(&entry.degree, "education degree", content_path);
        require_text(&entry.school, "education school", content_path);
    }

    let mut names = HashSet::new();
    for cert in &content.certificates {
        require_text(&cert.name, "certificate name", content_path);
        require_text(&cert.issuer, "certificate issuer", content_path);
        require_text(&cert.image, "certificate image", content_path);
        if cert.image.starts_with("data:") {
            panic!(
                "certificate '{}' image cannot be a data URL in {}",
                cert.name,
                content_path.display()
            );
        }
        if !names.insert(cert.name.clone()) {
            panic!(
                "duplicate certificate name '{}' in {}",
                cert.name,
                content_path.display()
            );
        }
    }
}

fn social_icon(name: &str) -> Option<&'static str> {
    SOCIAL_ICONS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name.trim()))
        .map(|(_, variant)| *variant)
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_str_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|value| rust_string(value)).collect();
    format!("&[{}]", items.join(", "))
}

fn render(content: &ContentFile) -> String {
    let mut output = String::new();
    let profile = &content.profile;

    writeln!(&mut output, "pub const PROFILE: Profile = Profile {{").unwrap();
    writeln!(&mut output, "    name: {},", rust_string(&profile.name)).unwrap();
    writeln!(&mut output, "    initials: {},", rust_string(&profile.initials)).unwrap();
    writeln!(&mut output, "    tagline: {},", rust_string(&profile.tagline)).unwrap();
    writeln!(&mut output, "    avatar: {},", rust_string(&profile.avatar)).unwrap();
    writeln!(&mut output, "    bio: {},", rust_string(&profile.bio)).unwrap();
    writeln!(&mut output, "    copyright_year: {},", profile.copyright_year).unwrap();
    writeln!(&mut output, "}};").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const SOCIAL_LINKS: &[SocialLink] = &[").unwrap();
    for social in &content.social {
        let icon = social_icon(&social.icon).unwrap_or("SocialIcon::Github");
        writeln!(
            &mut output,
            "    SocialLink {{ label: {}, icon: {}, href: {} }},",
            rust_string(&social.label),
            icon,
            rust_string(&social.href)
        )
        .unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const SKILLS: &[Skill] = &[").unwrap();
    for skill in &content.skills {
        writeln!(
            &mut output,
            "    Skill {{ name: {}, rating: {}, level: {} }},",
            rust_string(&skill.name),
            rust_string(&skill.rating),
            skill.level
        )
        .unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(
        &mut output,
        "pub const INTERESTS: &[&str] = {};",
        rust_str_slice(&content.interests)
    )
    .unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const PROJECTS: &[Project] = &[").unwrap();
    for project in &content.projects {
        writeln!(&mut output, "    Project {{").unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&project.title)).unwrap();
        writeln!(
            &mut output,
            "        description: {},",
            rust_string(&project.description)
        )
        .unwrap();
        writeln!(&mut output, "        image: {},", rust_string(&project.image)).unwrap();
        writeln!(&mut output, "        tags: {},", rust_str_slice(&project.tags)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const JOBS: &[Job] = &[").unwrap();
    for job in &content.jobs {
        writeln!(&mut output, "    Job {{").unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&job.title)).unwrap();
        writeln!(&mut output, "        company: {},", rust_string(&job.company)).unwrap();
        writeln!(&mut output, "        period: {},", rust_string(&job.period)).unwrap();
        writeln!(
            &mut output,
            "        responsibilities: {},",
            rust_str_slice(&job.responsibilities)
        )
        .unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const EDUCATION: &[Education] = &[").unwrap();
    for entry in &content.education {
        writeln!(
            &mut output,
            "    Education {{ degree: {}, school: {}, period: {} }},",
            rust_string(&entry.degree),
            rust_string(&entry.school),
            rust_string(&entry.period)
        )
        .unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const CERTIFICATES: &[Certificate] = &[").unwrap();
    for cert in &content.certificates {
        writeln!(&mut output, "    Certificate {{").unwrap();
        writeln!(&mut output, "        name: {},", rust_string(&cert.name)).unwrap();
        writeln!(&mut output, "        issuer: {},", rust_string(&cert.issuer)).unwrap();
        writeln!(&mut output, "        date: {},", rust_string(&cert.date)).unwrap();
        writeln!(&mut output, "        image: {},", rust_string(&cert.image)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();

    output
}
