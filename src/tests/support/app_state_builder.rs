use crate::auth::application::services::AuthGate;
use crate::portfolio::application::ports::outgoing::{DocumentStore, ProfileSource};
use crate::portfolio::application::services::data_access::DEFAULT_REMOTE_TIMEOUT;
use crate::portfolio::application::services::{
    CacheMirror, PortfolioDataService, PortfolioProvider,
};
use crate::portfolio::domain::defaults::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use crate::portfolio::domain::entities::AdminCredentials;
use crate::portfolio::domain::profile_patch::ProfilePatch;
use crate::tests::support::fixtures::{FALLBACK_PASSWORD, FALLBACK_USERNAME};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Assembles a mounted `AppState` over in-memory stores.
///
/// Keep your own handle to any store passed in; the builder only wires it.
pub struct TestAppStateBuilder {
    remote: Option<Arc<dyn DocumentStore>>,
    local: Arc<InMemoryKeyValueStore>,
    profile_source: Arc<dyn ProfileSource>,
    signed_in: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            remote: None,
            local: Arc::new(InMemoryKeyValueStore::default()),
            profile_source: Arc::new(FixedProfileSource::new(ProfilePatch::default())),
            signed_in: false,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_remote(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.remote = Some(store);
        self
    }

    pub fn with_local_store(mut self, store: Arc<InMemoryKeyValueStore>) -> Self {
        self.local = store;
        self
    }

    pub fn with_profile_patch(mut self, patch: ProfilePatch) -> Self {
        self.profile_source = Arc::new(FixedProfileSource::new(patch));
        self
    }

    /// Starts with an admin session already open.
    pub fn signed_in(mut self) -> Self {
        self.signed_in = true;
        self
    }

    pub async fn build(self) -> web::Data<AppState> {
        let mirror = CacheMirror::new(self.local.clone());
        let data = match self.remote {
            Some(remote) => PortfolioDataService::with_remote(remote, mirror, DEFAULT_REMOTE_TIMEOUT),
            None => PortfolioDataService::local(mirror),
        };

        let provider = Arc::new(PortfolioProvider::new(Arc::new(data), self.profile_source));
        provider.mount().await;

        let auth_gate = Arc::new(AuthGate::new(
            Arc::clone(&provider),
            self.local,
            AdminCredentials::new(FALLBACK_USERNAME, FALLBACK_PASSWORD),
        ));
        if self.signed_in {
            assert!(
                auth_gate
                    .login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
                    .await,
                "test session could not be opened"
            );
        }

        web::Data::new(AppState {
            provider,
            auth_gate,
        })
    }
}
