use crate::portfolio::domain::entities::{
    AdminCredentials, ContactInfo, Education, EndDate, Experience, PortfolioDocument, Proficiency,
    Profile, Project, Season, Settings, Skill, SkillCategory,
};
use std::collections::BTreeMap;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "changeme";

fn skill(id: &str, name: &str, category: SkillCategory, level: u8) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category,
        proficiency: Proficiency::saturating(level),
        icon: None,
    }
}

/// The document written on first read and on reset.
pub fn default_document() -> PortfolioDocument {
    let social = ["github", "linkedin", "twitter", "instagram", "dribbble", "behance"]
        .into_iter()
        .map(|platform| (platform.to_string(), None))
        .collect::<BTreeMap<_, _>>();

    PortfolioDocument {
        profile: Profile {
            name: "Your Name".to_string(),
            title: "Software Engineer".to_string(),
            bio: "Tell visitors who you are and what you build.".to_string(),
            image: String::new(),
            resume_url: String::new(),
            location: "Earth".to_string(),
            email: "hello@example.com".to_string(),
            phone: String::new(),
        },
        skills: vec![
            skill("1", "TypeScript", SkillCategory::Frontend, 85),
            skill("2", "React", SkillCategory::Frontend, 80),
            skill("3", "Node.js", SkillCategory::Backend, 75),
            skill("4", "Git", SkillCategory::Tools, 90),
        ],
        projects: vec![Project {
            id: "1".to_string(),
            title: "Portfolio Website".to_string(),
            description: "This site, with an admin dashboard to edit it.".to_string(),
            long_description: "A public portfolio page backed by a single editable document."
                .to_string(),
            image: String::new(),
            technologies: vec!["Rust".to_string(), "actix-web".to_string()],
            live_url: None,
            github_url: None,
            featured: true,
            category: "web".to_string(),
            date: "2024-01".to_string(),
        }],
        experience: vec![Experience {
            id: "1".to_string(),
            company: "Company Name".to_string(),
            position: "Software Engineer".to_string(),
            description: "What you worked on and what changed because of it.".to_string(),
            start_date: "2022-01".to_string(),
            end_date: EndDate::Present,
            location: "Remote".to_string(),
        }],
        education: vec![Education {
            id: "1".to_string(),
            institution: "University Name".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2018-09".to_string(),
            end_date: EndDate::YearMonth("2022-06".to_string()),
            location: "City".to_string(),
        }],
        contact: ContactInfo {
            email: "hello@example.com".to_string(),
            phone: String::new(),
            location: "Earth".to_string(),
            social,
        },
        settings: Settings {
            site_title: "Portfolio".to_string(),
            tagline: "Building things for the web".to_string(),
            meta_description: "Personal portfolio".to_string(),
            admin_credentials: AdminCredentials::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD),
            season: Season::None,
        },
    }
}
