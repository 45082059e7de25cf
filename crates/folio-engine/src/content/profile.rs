use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Everything the page says about its owner.
/// A built-in default ships with the engine; the host may replace it with JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name (e.g., "Fabio Amorelli").
    pub name: String,
    /// Identity printed by `whoami`.
    pub handle: String,
    /// Site name, typed out by the logo typewriter.
    pub site: String,
    /// Fake working directory printed by `pwd`.
    pub home_dir: String,
    /// One-line role shown in the hero.
    pub headline: String,
    /// Biography block printed by `about`.
    #[serde(default)]
    pub about: Vec<String>,
    /// Skills shown as installable packages.
    #[serde(default)]
    pub skills: Vec<SkillPackage>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    /// Entries of the contact widget, in display order.
    #[serde(default)]
    pub contact: Vec<ContactEntry>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Static CV asset served next to the page.
    #[serde(default)]
    pub cv_url: Option<String>,
}

/// One row of the experience or education timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub from: String,
    pub to: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Location,
    Linkedin,
    Email,
    Phone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub kind: ContactKind,
    pub text: String,
}

/// Grouping used by the skills filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Methodologies,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        Self::Frontend,
        Self::Backend,
        Self::Tools,
        Self::Methodologies,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::Methodologies => "methodologies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Popularity {
    High,
    Medium,
    Specialized,
}

/// A skill presented as a package (`name@version`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPackage {
    pub name: String,
    pub version: String,
    pub description: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub popularity: Option<Popularity>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Listed in the "main stack" banner.
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl Profile {
    /// Parse a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FolioError::Profile)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(FolioError::Profile)
    }
}

fn entry(
    from: &str,
    to: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    highlights: &[&str],
) -> TimelineEntry {
    TimelineEntry {
        from: from.into(),
        to: to.into(),
        title: title.into(),
        subtitle: subtitle.into(),
        description: description.into(),
        highlights: highlights.iter().map(|s| s.to_string()).collect(),
    }
}

fn contact(kind: ContactKind, text: &str) -> ContactEntry {
    ContactEntry {
        kind,
        text: text.into(),
    }
}

fn social(label: &str, href: &str) -> SocialLink {
    SocialLink {
        label: label.into(),
        href: href.into(),
    }
}

fn skill(
    name: &str,
    version: &str,
    description: &str,
    category: SkillCategory,
    popularity: Popularity,
    featured: bool,
) -> SkillPackage {
    SkillPackage {
        name: name.into(),
        version: version.into(),
        description: description.into(),
        category,
        popularity: Some(popularity),
        dependencies: Vec::new(),
        featured,
    }
}

fn default_skills() -> Vec<SkillPackage> {
    use Popularity::{High, Medium};
    use SkillCategory::{Backend, Frontend, Methodologies, Tools};

    vec![
        skill(
            "react",
            "^18.2.0",
            "Frontend library for building UIs",
            Frontend,
            High,
            true,
        ),
        skill(
            "typescript",
            "^5.0.0",
            "Typed superset of JavaScript",
            Frontend,
            High,
            true,
        ),
        skill(
            "nextjs",
            "^15.0.0",
            "React framework for production",
            Frontend,
            High,
            true,
        ),
        skill(
            "tailwindcss",
            "^4.0.0",
            "Utility-first CSS framework",
            Frontend,
            High,
            false,
        ),
        skill(
            "styled-components",
            "^6.0.0",
            "CSS-in-JS styling solution",
            Frontend,
            Medium,
            false,
        ),
        skill(
            "context-api",
            "built-in",
            "React state management",
            Frontend,
            Medium,
            false,
        ),
        skill(
            "framer-motion",
            "^12.0.0",
            "Animation library for React",
            Frontend,
            Medium,
            false,
        ),
        skill(
            "nodejs",
            "^20.0.0",
            "JavaScript runtime for server-side",
            Backend,
            High,
            true,
        ),
        skill(
            "prisma",
            "^6.0.0",
            "Modern database toolkit",
            Backend,
            High,
            true,
        ),
        skill(
            "postgresql",
            "^16.0.0",
            "Relational database system",
            Backend,
            Medium,
            false,
        ),
        skill(
            "stripe-api",
            "^14.0.0",
            "Payment processing integration",
            Backend,
            Medium,
            false,
        ),
        skill(
            "jwt-auth",
            "^9.0.0",
            "JSON Web Token authentication",
            Backend,
            Medium,
            false,
        ),
        skill(
            "express",
            "^4.18.0",
            "Web framework for Node.js",
            Backend,
            Medium,
            false,
        ),
        skill(
            "git",
            "^2.40.0",
            "Version control system",
            Tools,
            High,
            true,
        ),
        skill(
            "linux",
            "arch",
            "Open source operating system",
            Tools,
            High,
            false,
        ),
        skill(
            "vite",
            "^6.0.0",
            "Build tool for modern web projects",
            Tools,
            Medium,
            false,
        ),
        skill(
            "ai-prompting",
            "proficient",
            "Effective AI tool utilization and prompting",
            Tools,
            High,
            true,
        ),
        skill(
            "problem-solving",
            "developing",
            "Breaking down complex problems",
            Methodologies,
            High,
            false,
        ),
        skill(
            "agile-basics",
            "learning",
            "Agile development practices",
            Methodologies,
            Medium,
            false,
        ),
        skill(
            "team-collaboration",
            "growing",
            "Working effectively in teams",
            Methodologies,
            High,
            false,
        ),
        skill(
            "continuous-learning",
            "always-on",
            "Staying updated with tech trends",
            Methodologies,
            High,
            true,
        ),
    ]
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Fabio Amorelli".into(),
            handle: "fabio@amorelli.dev".into(),
            site: "amorelli.dev".into(),
            home_dir: "/home/fabio/portfolio".into(),
            headline: "Full-stack developer".into(),
            about: vec![
                "Fabio Amorelli - Full-stack developer".into(),
                "Based in Itajubá, Minas Gerais, Brazil.".into(),
                "I build modern web applications with React, TypeScript and Node.js,".into(),
                "and I am studying Computer Engineering at UNIFEI.".into(),
                "Available for freelance work.".into(),
            ],
            experience: vec![
                entry(
                    "feb 2023",
                    "set 2023",
                    "Software Engineer Trainee",
                    "LEVTY",
                    "Developed client solutions using SYDLE One Platform. Worked with a team of engineers to deliver high-quality software.",
                    &[],
                ),
                entry(
                    "feb 2021",
                    "jan 2023",
                    "Software Developer",
                    "byron.solutions",
                    "",
                    &[
                        "Developed and published a Flutter app with Firebase backend",
                        "Led frontend development of a real estate website using React.js, TypeScript, and Next.js",
                        "Implemented key features using Context API, JWT Auth, and styled-components",
                        "Led company stack transition from WordPress to React.js and Next.js",
                        "Conducted technical training for team members in React and Strapi",
                    ],
                ),
                entry(
                    "jan 2022",
                    "jan 2023",
                    "Vice-President Director",
                    "byron.solutions",
                    "",
                    &[
                        "Led 5-person team and managed company operations",
                        "Oversaw administrative and financial responsibilities",
                        "Implemented strategic planning using PDCA, OKR, and SWOT",
                        "Represented company to university administration",
                        "Participated in executive decision-making",
                    ],
                ),
            ],
            education: vec![
                entry(
                    "2020",
                    "2026",
                    "Bachelor's in Computer Engineering",
                    "Universidade Federal de Itajubá",
                    "Currently studying computer engineering with a focus on software development.",
                    &[],
                ),
                entry(
                    "2019",
                    "2020",
                    "Bachelor's in Electrical Engineering",
                    "Universidade Federal de Itajubá",
                    "Studied electrical engineering for one year before switching to computer engineering",
                    &[],
                ),
            ],
            contact: vec![
                contact(ContactKind::Location, "Itajubá, Minas Gerais, Brazil"),
                contact(ContactKind::Linkedin, "fabioavf"),
                contact(ContactKind::Email, "amorelli.ff@gmail.com"),
                contact(ContactKind::Phone, "(35) 98887-0037"),
            ],
            skills: default_skills(),
            socials: vec![
                social("GitHub Profile", "https://github.com/fabioavf"),
                social("LinkedIn Profile", "https://linkedin.com/in/fabioavf"),
                social("Email Contact", "mailto:amorelli.ff@gmail.com"),
            ],
            cv_url: Some("/fabio-amorelli-cv.pdf".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_profile() {
        let json = r#"{
            "name": "Ada",
            "handle": "ada@example.dev",
            "site": "example.dev",
            "home_dir": "/home/ada",
            "headline": "Engineer"
        }"#;
        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.handle, "ada@example.dev");
        assert!(profile.about.is_empty());
        assert!(profile.contact.is_empty());
        assert!(profile.skills.is_empty());
        assert_eq!(profile.cv_url, None);
    }

    #[test]
    fn parse_skill_with_optional_fields_missing() {
        let json = r#"{
            "name": "Ada",
            "handle": "ada@example.dev",
            "site": "example.dev",
            "home_dir": "/home/ada",
            "headline": "Engineer",
            "skills": [
                {
                    "name": "rust",
                    "version": "1.80",
                    "description": "Systems",
                    "category": "backend"
                }
            ]
        }"#;
        let profile = Profile::from_json(json).unwrap();
        let rust = &profile.skills[0];
        assert_eq!(rust.category, SkillCategory::Backend);
        assert_eq!(rust.popularity, None);
        assert!(!rust.featured);
    }

    #[test]
    fn default_skills_cover_every_category() {
        let skills = Profile::default().skills;
        assert_eq!(skills.len(), 21);
        for category in SkillCategory::ALL {
            assert!(skills.iter().any(|s| s.category == category), "{}", category.id());
        }
        assert_eq!(skills.iter().filter(|s| s.featured).count(), 8);
    }

    #[test]
    fn parse_contact_entries() {
        let json = r#"{
            "name": "Ada",
            "handle": "ada@example.dev",
            "site": "example.dev",
            "home_dir": "/home/ada",
            "headline": "Engineer",
            "contact": [
                { "kind": "email", "text": "ada@example.dev" },
                { "kind": "phone", "text": "555" }
            ]
        }"#;
        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.contact.len(), 2);
        assert_eq!(profile.contact[0].kind, ContactKind::Email);
    }

    #[test]
    fn invalid_json_is_a_profile_error() {
        let err = Profile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FolioError::Profile(_)));
    }

    #[test]
    fn default_profile_survives_json() {
        let profile = Profile::default();
        let json = profile.to_json().unwrap();
        assert_eq!(Profile::from_json(&json).unwrap(), profile);
    }
}
