use crate::portfolio::application::ports::outgoing::{KeyValueError, KeyValueStore};
use crate::portfolio::domain::entities::PortfolioDocument;
use std::sync::Arc;

/// Key under which the last-known-good document is kept locally.
pub const MIRROR_KEY: &str = "portfolio_data";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error(transparent)]
    Store(#[from] KeyValueError),

    #[error("Cached document is corrupt: {0}")]
    Corrupt(String),
}

/// Same-shape copy of the remote document in local durable storage.
///
/// It never pushes changes; it is read only when it is the sole store or when
/// the remote store cannot be reached.
#[derive(Clone)]
pub struct CacheMirror {
    store: Arc<dyn KeyValueStore>,
}

impl CacheMirror {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn read(&self) -> Result<Option<PortfolioDocument>, CacheError> {
        match self.store.get(MIRROR_KEY).await? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| CacheError::Corrupt(e.to_string())),
            None => Ok(None),
        }
    }

    pub async fn write(&self, document: &PortfolioDocument) -> Result<(), CacheError> {
        let text =
            serde_json::to_string(document).map_err(|e| CacheError::Corrupt(e.to_string()))?;
        self.store.set(MIRROR_KEY, &text).await?;
        Ok(())
    }
}
