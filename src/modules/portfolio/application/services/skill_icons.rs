use crate::portfolio::domain::entities::Skill;

const DEVICON_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Well-known skill names and their devicon paths.
const SKILL_ICONS: &[(&str, &str)] = &[
    // Frontend
    ("React", "react/react-original"),
    ("TypeScript", "typescript/typescript-original"),
    ("JavaScript", "javascript/javascript-original"),
    ("HTML5", "html5/html5-original"),
    ("CSS3", "css3/css3-original"),
    ("Tailwind CSS", "tailwindcss/tailwindcss-plain"),
    ("Next.js", "nextjs/nextjs-original"),
    ("Vue.js", "vuejs/vuejs-original"),
    ("Angular", "angularjs/angularjs-original"),
    // Backend
    ("Node.js", "nodejs/nodejs-original"),
    ("Express.js", "express/express-original"),
    ("Python", "python/python-original"),
    ("Django", "django/django-plain"),
    ("Java", "java/java-original"),
    ("Spring Boot", "spring/spring-original"),
    ("PHP", "php/php-original"),
    ("Laravel", "laravel/laravel-plain"),
    ("Rust", "rust/rust-original"),
    // Database
    ("MongoDB", "mongodb/mongodb-original"),
    ("PostgreSQL", "postgresql/postgresql-original"),
    ("MySQL", "mysql/mysql-original"),
    ("Firebase", "firebase/firebase-plain"),
    ("Redis", "redis/redis-original"),
    // Tools & DevOps
    ("Git", "git/git-original"),
    ("GitHub", "github/github-original"),
    ("Docker", "docker/docker-original"),
    ("AWS", "amazonwebservices/amazonwebservices-original-wordmark"),
    ("VS Code", "vscode/vscode-original"),
    ("Figma", "figma/figma-original"),
];

/// Icon URL for a known skill name, matched case-insensitively.
pub fn skill_icon_url(skill_name: &str) -> Option<String> {
    let wanted = skill_name.trim();
    SKILL_ICONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, path)| format!("{DEVICON_BASE_URL}/{path}.svg"))
}

/// Gives every icon-less skill its known icon, if there is one.
pub fn fill_missing_icons(skills: &mut [Skill]) {
    for skill in skills.iter_mut().filter(|s| s.icon.is_none()) {
        skill.icon = skill_icon_url(&skill.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::domain::entities::{Proficiency, SkillCategory};

    fn skill(name: &str, icon: Option<&str>) -> Skill {
        Skill {
            id: name.to_string(),
            name: name.to_string(),
            category: SkillCategory::Other,
            proficiency: Proficiency::new(50).unwrap(),
            icon: icon.map(str::to_string),
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            skill_icon_url("typescript").as_deref(),
            Some("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg")
        );
        assert_eq!(skill_icon_url(" REACT "), skill_icon_url("React"));
    }

    #[test]
    fn unknown_skill_has_no_icon() {
        assert_eq!(skill_icon_url("Cobol on Cogs"), None);
    }

    #[test]
    fn fill_missing_icons_keeps_explicit_icons() {
        let mut skills = vec![
            skill("Docker", None),
            skill("Git", Some("custom.svg")),
            skill("Whittling", None),
        ];

        fill_missing_icons(&mut skills);

        assert!(skills[0].icon.as_deref().unwrap().ends_with("docker-original.svg"));
        assert_eq!(skills[1].icon.as_deref(), Some("custom.svg"));
        assert_eq!(skills[2].icon, None);
    }
}
