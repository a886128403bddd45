use crate::portfolio::domain::entities::PortfolioDocument;
use crate::portfolio::domain::section::Section;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No document has been written yet. Callers initialise instead of failing.
    #[error("Document not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Write conflict: {0}")]
    Conflict(String),

    #[error("Stored document could not be decoded: {0}")]
    Serialization(String),
}

/// Invoked with the full document every time the remote value changes.
pub type PushCallback = Arc<dyn Fn(PortfolioDocument) + Send + Sync>;

/// Handle returned by [`DocumentStore::subscribe`]. Cancelling (or dropping)
/// it stops further callbacks.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that never fires, for stores without push support.
    pub fn inactive() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Remote home of the single portfolio document.
///
/// There is no versioning: concurrent writers overwrite each other and the
/// last write wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self) -> Result<PortfolioDocument, StoreError>;

    async fn set(&self, document: &PortfolioDocument) -> Result<(), StoreError>;

    /// Replaces one section and returns the document as written.
    async fn patch_section(&self, section: Section) -> Result<PortfolioDocument, StoreError>;

    /// Registers a push listener. Errors raised while handling a push are
    /// logged by the store and never cancel the subscription.
    async fn subscribe(&self, callback: PushCallback) -> Result<Subscription, StoreError>;
}
