use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use utoipa::ToSchema;

/// The single record holding every piece of portfolio content.
///
/// All seven sections are required when deserializing; a payload missing any
/// of them is rejected rather than patched with defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub contact: ContactInfo,
    pub settings: Settings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image: String,
    pub resume_url: String,
    pub location: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

/// Skill level in percent. Values outside `0..=100` never deserialize.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "u8")]
pub struct Proficiency(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("proficiency must be between 0 and 100, got {0}")]
pub struct ProficiencyOutOfRange(pub i64);

impl Proficiency {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, ProficiencyOutOfRange> {
        Self::try_from(i64::from(value))
    }

    /// Clamps to `MAX` instead of failing.
    pub const fn saturating(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Proficiency {
    type Error = ProficiencyOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(ProficiencyOutOfRange(value)),
        }
    }
}

impl From<Proficiency> for u8 {
    fn from(value: Proficiency) -> Self {
        value.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    #[schema(value_type = u8, minimum = 0, maximum = 100)]
    pub proficiency: Proficiency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
    pub category: String,
    pub date: String,
}

pub const PRESENT: &str = "Present";

static YEAR_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("year-month pattern compiles")
});

/// End of an experience or education entry: either a `YYYY-MM` month or the
/// literal `"Present"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum EndDate {
    Present,
    YearMonth(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("end date must be YYYY-MM or \"Present\", got {0:?}")]
pub struct InvalidEndDate(pub String);

impl EndDate {
    pub fn year_month(value: impl Into<String>) -> Result<Self, InvalidEndDate> {
        Self::try_from(value.into())
    }

    pub fn is_present(&self) -> bool {
        matches!(self, EndDate::Present)
    }
}

impl TryFrom<String> for EndDate {
    type Error = InvalidEndDate;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == PRESENT {
            Ok(EndDate::Present)
        } else if YEAR_MONTH.is_match(&value) {
            Ok(EndDate::YearMonth(value))
        } else {
            Err(InvalidEndDate(value))
        }
    }
}

impl From<EndDate> for String {
    fn from(value: EndDate) -> Self {
        match value {
            EndDate::Present => PRESENT.to_string(),
            EndDate::YearMonth(v) => v,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: String,
    #[schema(value_type = String, example = "Present")]
    pub end_date: EndDate,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    #[schema(value_type = String, example = "Present")]
    pub end_date: EndDate,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Platform name (github, linkedin, ...) to profile URL.
    #[schema(value_type = Object)]
    pub social: BTreeMap<String, Option<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    None,
    Christmas,
    NewYear,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub site_title: String,
    pub tagline: String,
    pub meta_description: String,
    pub admin_credentials: AdminCredentials,
    pub season: Season,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn proficiency_accepts_bounds() {
        assert_eq!(Proficiency::new(0).unwrap().value(), 0);
        assert_eq!(Proficiency::new(100).unwrap().value(), 100);
        assert!(Proficiency::new(101).is_err());
        assert_eq!(Proficiency::saturating(250).value(), 100);
    }

    #[test]
    fn proficiency_rejects_out_of_range_json() {
        assert!(serde_json::from_value::<Proficiency>(json!(101)).is_err());
        assert!(serde_json::from_value::<Proficiency>(json!(-1)).is_err());
        assert_eq!(
            serde_json::from_value::<Proficiency>(json!(85)).unwrap(),
            Proficiency::new(85).unwrap()
        );
    }

    #[test]
    fn end_date_accepts_present_and_year_month() {
        assert_eq!(
            serde_json::from_value::<EndDate>(json!("Present")).unwrap(),
            EndDate::Present
        );
        assert_eq!(
            serde_json::from_value::<EndDate>(json!("2023-11")).unwrap(),
            EndDate::YearMonth("2023-11".to_string())
        );
    }

    #[test]
    fn end_date_rejects_other_values() {
        for bad in ["present", "2023-13", "2023", "Nov 2023", ""] {
            assert!(
                serde_json::from_value::<EndDate>(json!(bad)).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn end_date_serializes_to_plain_string() {
        assert_eq!(serde_json::to_value(EndDate::Present).unwrap(), json!("Present"));
        assert_eq!(
            serde_json::to_value(EndDate::year_month("2021-02").unwrap()).unwrap(),
            json!("2021-02")
        );
    }

    #[test]
    fn season_uses_lowercase_names() {
        assert_eq!(serde_json::to_value(Season::NewYear).unwrap(), json!("newyear"));
        assert_eq!(
            serde_json::from_value::<Season>(json!("christmas")).unwrap(),
            Season::Christmas
        );
    }

    #[test]
    fn skill_icon_is_optional() {
        let skill: Skill = serde_json::from_value(json!({
            "id": "1",
            "name": "Rust",
            "category": "backend",
            "proficiency": 90
        }))
        .unwrap();

        assert_eq!(skill.icon, None);
        assert_eq!(skill.category, SkillCategory::Backend);
    }
}
