use crate::portfolio::domain::entities::{
    ContactInfo, Education, Experience, PortfolioDocument, Profile, Project, Season, Settings,
    Skill,
};
use crate::portfolio::domain::section::{Section, SectionName};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Site settings without the admin credential pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicSettings {
    pub site_title: String,
    pub tagline: String,
    pub meta_description: String,
    pub season: Season,
}

impl From<&Settings> for PublicSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            site_title: settings.site_title.clone(),
            tagline: settings.tagline.clone(),
            meta_description: settings.meta_description.clone(),
            season: settings.season,
        }
    }
}

/// The document as served to anonymous readers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicPortfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub contact: ContactInfo,
    pub settings: PublicSettings,
}

impl From<&PortfolioDocument> for PublicPortfolio {
    fn from(document: &PortfolioDocument) -> Self {
        Self {
            profile: document.profile.clone(),
            skills: document.skills.clone(),
            projects: document.projects.clone(),
            experience: document.experience.clone(),
            education: document.education.clone(),
            contact: document.contact.clone(),
            settings: PublicSettings::from(&document.settings),
        }
    }
}

/// One section as served to anonymous readers.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum PublicSection {
    Settings(PublicSettings),
    Content(Section),
}

impl PortfolioDocument {
    pub fn public_section(&self, name: SectionName) -> PublicSection {
        match name {
            SectionName::Settings => PublicSection::Settings(PublicSettings::from(&self.settings)),
            other => PublicSection::Content(self.section(other)),
        }
    }
}
