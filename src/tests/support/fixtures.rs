use std::sync::Arc;

use crate::portfolio::application::services::{CacheMirror, PortfolioDataService, PortfolioProvider};
use crate::portfolio::domain::profile_patch::ProfilePatch;
use crate::tests::support::stubs::{FixedProfileSource, InMemoryKeyValueStore};

pub const FALLBACK_USERNAME: &str = "recovery";
pub const FALLBACK_PASSWORD: &str = "recovery-pass";

/// Mounted local-only provider. The returned store backs both the document
/// mirror and the session flag, as in a real local deployment.
pub async fn local_provider() -> (Arc<PortfolioProvider>, Arc<InMemoryKeyValueStore>) {
    let kv = Arc::new(InMemoryKeyValueStore::default());
    let data = Arc::new(PortfolioDataService::local(CacheMirror::new(kv.clone())));
    let provider = Arc::new(PortfolioProvider::new(
        data,
        Arc::new(FixedProfileSource::new(ProfilePatch::default())),
    ));
    provider.mount().await;
    (provider, kv)
}
