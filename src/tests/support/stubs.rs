use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::{
    DocumentStore, KeyValueError, KeyValueStore, ProfileSource, PushCallback, StoreError,
    Subscription,
};
use crate::portfolio::domain::entities::PortfolioDocument;
use crate::portfolio::domain::profile_patch::ProfilePatch;
use crate::portfolio::domain::section::Section;

/* --------------------------------------------------
 * Key-value store
 * -------------------------------------------------- */

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl InMemoryKeyValueStore {
    /// Stored text, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KeyValueError::Io("disk full".to_string()));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KeyValueError::Io("disk full".to_string()));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/* --------------------------------------------------
 * Document store
 * -------------------------------------------------- */

/// Remote store double. Every successful `set` is pushed synchronously to all
/// live subscribers, the writer's own subscription included.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    document: Mutex<Option<PortfolioDocument>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    delay: Mutex<Option<Duration>>,
    subscribers: Arc<Mutex<HashMap<u64, PushCallback>>>,
    next_subscriber: AtomicU64,
}

impl InMemoryDocumentStore {
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }

    async fn wait(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self) -> Result<PortfolioDocument, StoreError> {
        self.wait().await;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        self.document
            .lock()
            .unwrap()
            .clone()
            .ok_or(StoreError::NotFound)
    }

    async fn set(&self, document: &PortfolioDocument) -> Result<(), StoreError> {
        self.wait().await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        *self.document.lock().unwrap() = Some(document.clone());

        let callbacks: Vec<PushCallback> =
            self.subscribers.lock().unwrap().values().cloned().collect();
        for callback in callbacks {
            callback(document.clone());
        }
        Ok(())
    }

    async fn patch_section(&self, section: Section) -> Result<PortfolioDocument, StoreError> {
        let document = self.get().await?.with_section(section);
        self.set(&document).await?;
        Ok(document)
    }

    async fn subscribe(&self, callback: PushCallback) -> Result<Subscription, StoreError> {
        let id = self.next_subscriber.fetch_add(1, Ordering::SeqCst);
        self.subscribers.lock().unwrap().insert(id, callback);

        let subscribers = Arc::clone(&self.subscribers);
        Ok(Subscription::new(move || {
            subscribers.lock().unwrap().remove(&id);
        }))
    }
}

/* --------------------------------------------------
 * Profile source
 * -------------------------------------------------- */

pub struct FixedProfileSource {
    patch: ProfilePatch,
}

impl FixedProfileSource {
    pub fn new(patch: ProfilePatch) -> Self {
        Self { patch }
    }
}

#[async_trait]
impl ProfileSource for FixedProfileSource {
    async fn get_profile(&self) -> ProfilePatch {
        self.patch.clone()
    }
}
