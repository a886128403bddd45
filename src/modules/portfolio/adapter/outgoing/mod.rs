pub mod file_key_value_store;
pub mod github_profile_client;
pub mod redis_document_store;

pub use file_key_value_store::FileKeyValueStore;
pub use github_profile_client::{GithubProfileClient, DEFAULT_GITHUB_API_BASE};
pub use redis_document_store::RedisDocumentStore;
