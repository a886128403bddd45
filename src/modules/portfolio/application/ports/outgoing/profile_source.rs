use crate::portfolio::domain::profile_patch::ProfilePatch;
use async_trait::async_trait;

/// External profile provider used to enrich the local profile on demand.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Never fails: any fetch or decode problem yields an empty patch.
    async fn get_profile(&self) -> ProfilePatch;
}
