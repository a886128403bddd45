use crate::portfolio::domain::entities::PortfolioDocument;
use crate::portfolio::domain::section::SectionName;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentValidationError {
    #[error("{section} contains an item with an empty id")]
    EmptyId { section: SectionName },

    #[error("{section} contains duplicate id {id:?}")]
    DuplicateId { section: SectionName, id: String },
}

fn check_ids<'a>(
    section: SectionName,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DocumentValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(DocumentValidationError::EmptyId { section });
        }
        if !seen.insert(id) {
            return Err(DocumentValidationError::DuplicateId {
                section,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl PortfolioDocument {
    /// Checks the invariants the type system does not already enforce.
    ///
    /// Proficiency ranges and end dates are guaranteed by their own types;
    /// what remains is id uniqueness within each list.
    pub fn validate(&self) -> Result<(), DocumentValidationError> {
        check_ids(SectionName::Skills, self.skills.iter().map(|s| s.id.as_str()))?;
        check_ids(SectionName::Projects, self.projects.iter().map(|p| p.id.as_str()))?;
        check_ids(
            SectionName::Experience,
            self.experience.iter().map(|e| e.id.as_str()),
        )?;
        check_ids(
            SectionName::Education,
            self.education.iter().map(|e| e.id.as_str()),
        )?;
        Ok(())
    }
}
