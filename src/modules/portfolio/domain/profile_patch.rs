use crate::portfolio::domain::entities::Profile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Partial profile coming from an external source. `None` fields leave the
/// local value alone.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.bio.is_none()
            && self.image.is_none()
            && self.location.is_none()
            && self.resume_url.is_none()
    }

    pub fn apply_to(self, profile: Profile) -> Profile {
        Profile {
            name: self.name.unwrap_or(profile.name),
            bio: self.bio.unwrap_or(profile.bio),
            image: self.image.unwrap_or(profile.image),
            location: self.location.unwrap_or(profile.location),
            resume_url: self.resume_url.unwrap_or(profile.resume_url),
            ..profile
        }
    }
}
