use crate::portfolio::domain::entities::{
    ContactInfo, Education, Experience, PortfolioDocument, Profile, Project, Settings, Skill,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Name of one top-level field of [`PortfolioDocument`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionName {
    Profile,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Settings,
}

impl SectionName {
    pub const ALL: [SectionName; 7] = [
        SectionName::Profile,
        SectionName::Skills,
        SectionName::Projects,
        SectionName::Experience,
        SectionName::Education,
        SectionName::Contact,
        SectionName::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::Profile => "profile",
            SectionName::Skills => "skills",
            SectionName::Projects => "projects",
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Contact => "contact",
            SectionName::Settings => "settings",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionName {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// One section of the document together with its payload.
///
/// Serializes as the bare payload; use [`Section::from_json`] to decode, since
/// the payload alone does not say which section it belongs to.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum Section {
    Profile(Profile),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
    Experience(Vec<Experience>),
    Education(Vec<Education>),
    Contact(ContactInfo),
    Settings(Settings),
}

impl Section {
    pub fn name(&self) -> SectionName {
        match self {
            Section::Profile(_) => SectionName::Profile,
            Section::Skills(_) => SectionName::Skills,
            Section::Projects(_) => SectionName::Projects,
            Section::Experience(_) => SectionName::Experience,
            Section::Education(_) => SectionName::Education,
            Section::Contact(_) => SectionName::Contact,
            Section::Settings(_) => SectionName::Settings,
        }
    }

    pub fn from_json(
        name: SectionName,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match name {
            SectionName::Profile => Section::Profile(serde_json::from_value(value)?),
            SectionName::Skills => Section::Skills(serde_json::from_value(value)?),
            SectionName::Projects => Section::Projects(serde_json::from_value(value)?),
            SectionName::Experience => Section::Experience(serde_json::from_value(value)?),
            SectionName::Education => Section::Education(serde_json::from_value(value)?),
            SectionName::Contact => Section::Contact(serde_json::from_value(value)?),
            SectionName::Settings => Section::Settings(serde_json::from_value(value)?),
        })
    }
}

impl PortfolioDocument {
    /// Replaces exactly one field, leaving the other six untouched.
    pub fn apply_section(&mut self, section: Section) {
        match section {
            Section::Profile(v) => self.profile = v,
            Section::Skills(v) => self.skills = v,
            Section::Projects(v) => self.projects = v,
            Section::Experience(v) => self.experience = v,
            Section::Education(v) => self.education = v,
            Section::Contact(v) => self.contact = v,
            Section::Settings(v) => self.settings = v,
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.apply_section(section);
        self
    }

    pub fn section(&self, name: SectionName) -> Section {
        match name {
            SectionName::Profile => Section::Profile(self.profile.clone()),
            SectionName::Skills => Section::Skills(self.skills.clone()),
            SectionName::Projects => Section::Projects(self.projects.clone()),
            SectionName::Experience => Section::Experience(self.experience.clone()),
            SectionName::Education => Section::Education(self.education.clone()),
            SectionName::Contact => Section::Contact(self.contact.clone()),
            SectionName::Settings => Section::Settings(self.settings.clone()),
        }
    }
}
