use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyValueError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Local durable string store addressed by fixed keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KeyValueError>;
}
