pub mod document_store;
pub mod key_value_store;
pub mod profile_source;

pub use document_store::{DocumentStore, PushCallback, StoreError, Subscription};
pub use key_value_store::{KeyValueError, KeyValueStore};
pub use profile_source::ProfileSource;
