pub mod cache_mirror;
pub mod data_access;
pub mod provider;
pub mod skill_icons;

pub use cache_mirror::{CacheError, CacheMirror, MIRROR_KEY};
pub use data_access::{DataAccessError, ImportError, PortfolioDataService};
pub use provider::{PortfolioProvider, ProviderState};
