use crate::portfolio::application::ports::outgoing::{ProfileSource, Subscription};
use crate::portfolio::application::services::data_access::{DataAccessError, PortfolioDataService};
use crate::portfolio::domain::entities::PortfolioDocument;
use crate::portfolio::domain::section::Section;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};

/// Lifecycle of the in-memory document. There is no error state: load
/// failures already degrade to a cached or default document underneath.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderState {
    Loading,
    Ready(Arc<PortfolioDocument>),
}

impl ProviderState {
    pub fn document(&self) -> Option<&Arc<PortfolioDocument>> {
        match self {
            ProviderState::Loading => None,
            ProviderState::Ready(doc) => Some(doc),
        }
    }
}

/// Process-wide holder of the portfolio document.
///
/// Loads once on [`mount`](Self::mount), then keeps the document current from
/// two directions: the return value of its own writes, and remote pushes.
/// Consumers observe changes through [`watch`](Self::watch).
pub struct PortfolioProvider {
    data: Arc<PortfolioDataService>,
    profile_source: Arc<dyn ProfileSource>,
    state: Arc<watch::Sender<ProviderState>>,
    subscription: Mutex<Option<Subscription>>,
}

impl PortfolioProvider {
    pub fn new(data: Arc<PortfolioDataService>, profile_source: Arc<dyn ProfileSource>) -> Self {
        let (state, _) = watch::channel(ProviderState::Loading);
        Self {
            data,
            profile_source,
            state: Arc::new(state),
            subscription: Mutex::new(None),
        }
    }

    /// Loads the document, marks the provider ready and starts listening for
    /// remote pushes. Calling it again reloads and re-subscribes.
    pub async fn mount(&self) {
        let mut subscription = self.subscription.lock().await;
        if let Some(previous) = subscription.take() {
            previous.cancel();
        }

        self.state.send_replace(ProviderState::Loading);
        let document = self.data.get_data().await;
        self.publish(document);
        info!("Portfolio document loaded");

        let sender = Arc::clone(&self.state);
        let on_push = Arc::new(move |document: PortfolioDocument| {
            debug!("Received pushed portfolio document");
            sender.send_replace(ProviderState::Ready(Arc::new(document)));
        });

        match self.data.subscribe(on_push).await {
            Ok(sub) => *subscription = Some(sub),
            Err(e) => warn!("Live updates disabled, subscription failed: {}", e),
        }
    }

    /// Cancels the push subscription. Nothing is written.
    pub async fn shutdown(&self) {
        if let Some(sub) = self.subscription.lock().await.take() {
            sub.cancel();
            info!("Portfolio subscription cancelled");
        }
    }

    fn publish(&self, document: PortfolioDocument) -> Arc<PortfolioDocument> {
        let document = Arc::new(document);
        self.state
            .send_replace(ProviderState::Ready(Arc::clone(&document)));
        document
    }

    pub fn state(&self) -> ProviderState {
        self.state.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.state.borrow(), ProviderState::Ready(_))
    }

    /// The in-memory document, or `None` while loading.
    pub fn document(&self) -> Option<Arc<PortfolioDocument>> {
        self.state.borrow().document().cloned()
    }

    /// The in-memory document, read through the data service if not loaded yet.
    pub async fn current(&self) -> Arc<PortfolioDocument> {
        match self.document() {
            Some(document) => document,
            None => Arc::new(self.data.get_data().await),
        }
    }

    /// Receiver that sees every state change, local or pushed.
    pub fn watch(&self) -> watch::Receiver<ProviderState> {
        self.state.subscribe()
    }

    pub async fn refresh(&self) -> Arc<PortfolioDocument> {
        let document = self.data.get_data().await;
        self.publish(document)
    }

    pub async fn set_data(
        &self,
        document: PortfolioDocument,
    ) -> Result<Arc<PortfolioDocument>, DataAccessError> {
        let saved = self.data.set_data(document).await?;
        Ok(self.publish(saved))
    }

    pub async fn update_section(
        &self,
        section: Section,
    ) -> Result<Arc<PortfolioDocument>, DataAccessError> {
        let name = section.name();
        let saved = self.data.update_section(section).await?;
        info!("Section {} updated", name);
        Ok(self.publish(saved))
    }

    pub async fn reset(&self) -> Result<Arc<PortfolioDocument>, DataAccessError> {
        let saved = self.data.reset().await?;
        info!("Portfolio reset to defaults");
        Ok(self.publish(saved))
    }

    pub async fn export_data(&self) -> Result<String, DataAccessError> {
        self.data.export_data().await
    }

    pub async fn import_data(&self, text: &str) -> bool {
        match self.data.try_import_data(text).await {
            Ok(saved) => {
                self.publish(saved);
                info!("Portfolio imported");
                true
            }
            Err(e) => {
                error!("Error importing data: {}", e);
                false
            }
        }
    }

    /// Merges the external profile into the local one and saves it.
    ///
    /// External fields win; everything else is kept. Returns `false` when the
    /// source had nothing to offer or the save failed.
    pub async fn sync_with_github(&self) -> bool {
        let patch = self.profile_source.get_profile().await;
        if patch.is_empty() {
            warn!("GitHub sync skipped, no profile data received");
            return false;
        }

        let profile = self.current().await.profile.clone();
        let merged = patch.apply_to(profile);

        match self.update_section(Section::Profile(merged)).await {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to sync with GitHub: {}", e);
                false
            }
        }
    }
}
