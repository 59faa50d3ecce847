use serde::{Deserialize, Serialize};

/// The five scroll-targetable regions of the page, in document order.
///
/// The set is fixed for the lifetime of a page load; each variant's
/// `anchor()` must match the `id` of exactly one rendered `<section>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Decorative glyph shown next to the nav label.
    pub fn icon(self) -> &'static str {
        match self {
            SectionId::Home => "\u{2302}",       // ⌂
            SectionId::About => "\u{263A}",      // ☺
            SectionId::Experience => "\u{2692}", // ⚒
            SectionId::Skills => "\u{2699}",     // ⚙
            SectionId::Contact => "\u{2709}",    // ✉
        }
    }
}

/// A shipped project inside an experience entry. An empty `link` means
/// "no external reference" and the name renders as plain text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    pub name: String,
    #[serde(default)]
    pub link: String,
}

/// One employment entry. `tech_stack` and `projects` keep their authored
/// order, which is also display order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub title: String,
    pub time_frame: String,
    pub company_name: String,
    #[serde(default)]
    pub company_url: String,
    #[serde(default)]
    pub position: Option<String>,
    pub responsibility: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectLink>,
}

/// Everything the page renders, authored as embedded JSON and parsed once
/// at startup.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub photo_url: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub experiences: Vec<ExperienceRecord>,
}

const PROFILE_JSON: &str = include_str!("profile.json");

/// Parse and normalize the embedded profile data. A malformed payload
/// degrades to an empty profile with a console warning rather than a
/// broken page.
pub fn load_profile() -> Profile {
    match serde_json::from_str::<Profile>(PROFILE_JSON) {
        Ok(profile) => normalize(profile),
        Err(e) => {
            leptos::logging::warn!("profile data failed to parse: {}", e);
            Profile::default()
        }
    }
}

/// One-time cleanup so render code never has to trim or null-check:
/// whitespace is stripped and entries with no usable text are dropped.
fn normalize(mut profile: Profile) -> Profile {
    for field in [
        &mut profile.name,
        &mut profile.headline,
        &mut profile.about,
        &mut profile.email,
    ] {
        let trimmed = field.trim().to_string();
        *field = trimmed;
    }

    profile.skills.retain(|s| !s.trim().is_empty());
    for skill in &mut profile.skills {
        *skill = skill.trim().to_string();
    }

    profile
        .experiences
        .retain(|e| !e.title.trim().is_empty() && !e.company_name.trim().is_empty());
    for exp in &mut profile.experiences {
        exp.title = exp.title.trim().to_string();
        exp.company_name = exp.company_name.trim().to_string();
        exp.position = exp
            .position
            .take()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        exp.tech_stack.retain(|t| !t.trim().is_empty());
        for tech in &mut exp.tech_stack {
            *tech = tech.trim().to_string();
        }
        exp.projects.retain(|p| !p.name.trim().is_empty());
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_parses() {
        let profile = load_profile();
        assert!(!profile.name.is_empty());
        assert!(!profile.experiences.is_empty());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "title": "Engineer",
            "timeFrame": "2020 - 2022",
            "companyName": "Acme",
            "responsibility": "Built things."
        }"#;
        let exp: ExperienceRecord = serde_json::from_str(json).unwrap();
        assert!(exp.company_url.is_empty());
        assert!(exp.position.is_none());
        assert!(exp.tech_stack.is_empty());
        assert!(exp.projects.is_empty());
    }

    #[test]
    fn test_project_without_link_is_plain() {
        let json = r#"{"name": "Internal CRM"}"#;
        let project: ProjectLink = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Internal CRM");
        assert!(project.link.is_empty());
    }

    #[test]
    fn test_normalize_drops_blank_entries() {
        let profile = Profile {
            name: "  Jo Doe ".to_string(),
            skills: vec!["Rust".to_string(), "  ".to_string()],
            experiences: vec![
                ExperienceRecord {
                    title: "Engineer".to_string(),
                    time_frame: "2020".to_string(),
                    company_name: "Acme".to_string(),
                    company_url: String::new(),
                    position: Some("   ".to_string()),
                    responsibility: "x".to_string(),
                    tech_stack: vec!["Rust".to_string(), String::new()],
                    projects: vec![ProjectLink {
                        name: String::new(),
                        link: String::new(),
                    }],
                },
                ExperienceRecord {
                    title: String::new(),
                    time_frame: String::new(),
                    company_name: "Ghost".to_string(),
                    company_url: String::new(),
                    position: None,
                    responsibility: String::new(),
                    tech_stack: vec![],
                    projects: vec![],
                },
            ],
            ..Profile::default()
        };

        let normalized = normalize(profile);
        assert_eq!(normalized.name, "Jo Doe");
        assert_eq!(normalized.skills, vec!["Rust".to_string()]);
        assert_eq!(normalized.experiences.len(), 1);
        let exp = &normalized.experiences[0];
        assert!(exp.position.is_none());
        assert_eq!(exp.tech_stack, vec!["Rust".to_string()]);
        assert!(exp.projects.is_empty());
    }

    #[test]
    fn test_section_order_is_document_order() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["home", "about", "experience", "skills", "contact"]
        );
    }
}
