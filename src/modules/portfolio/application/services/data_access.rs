use crate::portfolio::application::ports::outgoing::{
    DocumentStore, PushCallback, StoreError, Subscription,
};
use crate::portfolio::application::services::cache_mirror::CacheMirror;
use crate::portfolio::domain::defaults::default_document;
use crate::portfolio::domain::entities::PortfolioDocument;
use crate::portfolio::domain::section::Section;
use crate::portfolio::domain::validation::DocumentValidationError;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataAccessError {
    #[error("Remote store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid document: {0}")]
    Invalid(#[from] DocumentValidationError),

    #[error("Local cache write failed: {0}")]
    Cache(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Import text is not a portfolio document: {0}")]
    Parse(String),

    #[error(transparent)]
    Write(#[from] DataAccessError),
}

/// One API over the remote document store and the local cache mirror.
///
/// Reads degrade to the mirror (and finally to the defaults) instead of
/// failing. Writes go to both stores and report any failure to the caller.
pub struct PortfolioDataService {
    remote: Option<Arc<dyn DocumentStore>>,
    mirror: CacheMirror,
    timeout: Duration,
}

impl PortfolioDataService {
    /// Local-only deployment: the mirror is the only store.
    pub fn local(mirror: CacheMirror) -> Self {
        Self {
            remote: None,
            mirror,
            timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }

    pub fn with_remote(
        remote: Arc<dyn DocumentStore>,
        mirror: CacheMirror,
        timeout: Duration,
    ) -> Self {
        Self {
            remote: Some(remote),
            mirror,
            timeout,
        }
    }

    async fn remote_call<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Unavailable(format!(
                "timed out after {}s",
                self.timeout.as_secs_f32()
            ))),
        }
    }

    /// Returns the current document. Never fails.
    pub async fn get_data(&self) -> PortfolioDocument {
        let Some(remote) = &self.remote else {
            return self.get_local().await;
        };

        match self.remote_call(remote.get()).await {
            Ok(document) => {
                if let Err(e) = self.mirror.write(&document).await {
                    warn!("Failed to refresh local cache: {}", e);
                }
                document
            }
            Err(StoreError::NotFound) => {
                info!("No remote document yet, initialising with defaults");
                let defaults = default_document();
                if let Err(e) = self.remote_call(remote.set(&defaults)).await {
                    warn!("Failed to persist default document remotely: {}", e);
                }
                if let Err(e) = self.mirror.write(&defaults).await {
                    warn!("Failed to persist default document locally: {}", e);
                }
                defaults
            }
            Err(e) => {
                warn!("Remote read failed, serving cached document: {}", e);
                match self.mirror.read().await {
                    Ok(Some(document)) => document,
                    Ok(None) => default_document(),
                    Err(cache_err) => {
                        warn!("Local cache unreadable as well: {}", cache_err);
                        default_document()
                    }
                }
            }
        }
    }

    async fn get_local(&self) -> PortfolioDocument {
        match self.mirror.read().await {
            Ok(Some(document)) => document,
            Ok(None) => {
                let defaults = default_document();
                if let Err(e) = self.mirror.write(&defaults).await {
                    warn!("Failed to persist default document locally: {}", e);
                }
                defaults
            }
            Err(e) => {
                warn!("Local store unreadable, serving defaults: {}", e);
                default_document()
            }
        }
    }

    /// Replaces the whole document in both stores.
    ///
    /// The mirror is written even if the remote write fails, but the remote
    /// failure is still returned.
    pub async fn set_data(
        &self,
        document: PortfolioDocument,
    ) -> Result<PortfolioDocument, DataAccessError> {
        document.validate()?;

        let remote_result = match &self.remote {
            Some(remote) => self.remote_call(remote.set(&document)).await,
            None => Ok(()),
        };

        let mirror_result = self.mirror.write(&document).await;

        if let Err(e) = remote_result {
            error!("Remote write failed: {}", e);
            return Err(DataAccessError::StoreUnavailable(e.to_string()));
        }
        if let Err(e) = mirror_result {
            error!("Local cache write failed: {}", e);
            return Err(DataAccessError::Cache(e.to_string()));
        }

        Ok(document)
    }

    /// Read-modify-write of one section.
    ///
    /// Not atomic: two overlapping calls both read the same snapshot and the
    /// later write discards the earlier one's change.
    pub async fn update_section(
        &self,
        section: Section,
    ) -> Result<PortfolioDocument, DataAccessError> {
        let document = self.get_data().await.with_section(section);
        self.set_data(document).await
    }

    pub async fn reset(&self) -> Result<PortfolioDocument, DataAccessError> {
        self.set_data(default_document()).await
    }

    /// Pretty-printed JSON with fields in declaration order.
    pub async fn export_data(&self) -> Result<String, DataAccessError> {
        let document = self.get_data().await;
        serde_json::to_string_pretty(&document)
            .map_err(|e| DataAccessError::Serialization(e.to_string()))
    }

    pub async fn try_import_data(&self, text: &str) -> Result<PortfolioDocument, ImportError> {
        let document: PortfolioDocument =
            serde_json::from_str(text).map_err(|e| ImportError::Parse(e.to_string()))?;
        Ok(self.set_data(document).await?)
    }

    /// `false` when the text is not a valid document or could not be stored;
    /// the stored document is unchanged after a parse failure.
    pub async fn import_data(&self, text: &str) -> bool {
        match self.try_import_data(text).await {
            Ok(_) => true,
            Err(e) => {
                error!("Error importing data: {}", e);
                false
            }
        }
    }

    /// Push subscription on the remote store; inactive in local-only mode.
    pub async fn subscribe(&self, callback: PushCallback) -> Result<Subscription, StoreError> {
        match &self.remote {
            Some(remote) => self.remote_call(remote.subscribe(callback)).await,
            None => Ok(Subscription::inactive()),
        }
    }
}
