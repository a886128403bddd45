use crate::portfolio::application::ports::outgoing::{
    DocumentStore, PushCallback, StoreError, Subscription,
};
use crate::portfolio::domain::entities::PortfolioDocument;
use crate::portfolio::domain::section::Section;
use async_trait::async_trait;
use deadpool_redis::redis::aio::PubSub;
use deadpool_redis::redis::{AsyncCommands, Client, RedisResult};
use deadpool_redis::Pool;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

/// Collection and document id of the single portfolio document.
pub const COLLECTION_NAME: &str = "portfolio";
pub const DOCUMENT_ID: &str = "data";

const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// Redis-backed implementation of `DocumentStore`.
///
/// ## Redis data model
/// ```text
/// portfolio:data          -> "{document json}"
/// portfolio:data:changes  -> pub/sub channel, payload = document json
/// ```
/// Every write sets the key and publishes the new value in one `MULTI/EXEC`,
/// so subscribers (this process included) see each committed document.
///
/// Section patches are read-modify-write without `WATCH`: concurrent writers
/// are last-write-wins.
#[derive(Clone)]
pub struct RedisDocumentStore {
    pool: Arc<Pool>,
    client: Client,
}

impl RedisDocumentStore {
    /// `pool` serves commands; `client` opens the dedicated pub/sub
    /// connections, which cannot come from the pool.
    pub fn new(pool: Arc<Pool>, client: Client) -> Self {
        Self { pool, client }
    }

    pub fn document_key() -> String {
        format!("{COLLECTION_NAME}:{DOCUMENT_ID}")
    }

    pub fn changes_channel() -> String {
        format!("{}:changes", Self::document_key())
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Pool error: {}", e)))
    }

    async fn write_and_publish(&self, json: &str) -> Result<(), StoreError> {
        let key = Self::document_key();
        let channel = Self::changes_channel();
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&key)
            .arg(json)
            .ignore()
            .cmd("PUBLISH")
            .arg(&channel)
            .arg(json)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

fn decode_document(json: &str) -> Result<PortfolioDocument, StoreError> {
    serde_json::from_str(json).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn encode_document(document: &PortfolioDocument) -> Result<String, StoreError> {
    serde_json::to_string(document).map_err(|e| StoreError::Serialization(e.to_string()))
}

async fn open_pubsub(client: &Client, channel: &str) -> RedisResult<PubSub> {
    let mut pubsub = client.get_async_pubsub().await?;
    pubsub.subscribe(channel).await?;
    Ok(pubsub)
}

/// Consumes pushes until cancelled. A dropped connection is re-opened after
/// `RECONNECT_DELAY`; bad payloads are logged and skipped.
async fn listen(
    client: Client,
    channel: String,
    first: PubSub,
    callback: PushCallback,
    mut cancel: oneshot::Receiver<()>,
) {
    let mut next = Some(first);

    loop {
        let pubsub = match next.take() {
            Some(pubsub) => pubsub,
            None => {
                tokio::select! {
                    _ = &mut cancel => return,
                    _ = tokio::time::sleep(RECONNECT_DELAY) => {}
                }
                match open_pubsub(&client, &channel).await {
                    Ok(pubsub) => {
                        info!("Re-subscribed to {}", channel);
                        pubsub
                    }
                    Err(e) => {
                        error!("Failed to re-subscribe to {}: {}", channel, e);
                        continue;
                    }
                }
            }
        };

        let mut messages = Box::pin(pubsub.into_on_message());
        loop {
            tokio::select! {
                _ = &mut cancel => return,
                message = messages.next() => match message {
                    Some(msg) => {
                        let decoded = msg
                            .get_payload::<String>()
                            .map_err(|e| StoreError::Serialization(e.to_string()))
                            .and_then(|payload| decode_document(&payload));
                        match decoded {
                            Ok(document) => {
                                debug!("Push received on {}", channel);
                                callback(document);
                            }
                            Err(e) => error!("Ignoring undecodable push on {}: {}", channel, e),
                        }
                    }
                    None => {
                        warn!("Push connection for {} closed", channel);
                        break;
                    }
                }
            }
        }
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    /// ```text
    /// GET portfolio:data
    /// ```
    async fn get(&self) -> Result<PortfolioDocument, StoreError> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(Self::document_key())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match value {
            Some(json) => decode_document(&json),
            None => Err(StoreError::NotFound),
        }
    }

    async fn set(&self, document: &PortfolioDocument) -> Result<(), StoreError> {
        let json = encode_document(document)?;
        self.write_and_publish(&json).await
    }

    async fn patch_section(&self, section: Section) -> Result<PortfolioDocument, StoreError> {
        let document = self.get().await?.with_section(section);
        self.set(&document).await?;
        Ok(document)
    }

    async fn subscribe(&self, callback: PushCallback) -> Result<Subscription, StoreError> {
        let channel = Self::changes_channel();
        let pubsub = open_pubsub(&self.client, &channel)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let (cancel_tx, cancel_rx) = oneshot::channel();
        tokio::spawn(listen(
            self.client.clone(),
            channel.clone(),
            pubsub,
            callback,
            cancel_rx,
        ));
        info!("Subscribed to {}", channel);

        Ok(Subscription::new(move || {
            let _ = cancel_tx.send(());
        }))
    }
}
