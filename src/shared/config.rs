use crate::portfolio::adapter::outgoing::DEFAULT_GITHUB_API_BASE;
use crate::portfolio::domain::entities::AdminCredentials;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CACHE_DIR: &str = "./data";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_GITHUB_USERNAME: &str = "octocat";
pub const DEFAULT_FALLBACK_USERNAME: &str = "admin";
pub const DEFAULT_FALLBACK_PASSWORD: &str = "portfolio-recovery";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Where the document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageMode {
    /// The local key-value store is the only store.
    Local,
    /// Redis is authoritative; the local store is the mirror.
    Remote { redis_url: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageMode,
    pub cache_dir: PathBuf,
    pub remote_timeout: Duration,
    pub github_username: String,
    pub github_api_base: String,
    pub fallback_credentials: AdminCredentials,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = required("HOST")?;
        let port = required("PORT")?
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                key: "PORT",
                message: e.to_string(),
            })?;

        let storage = match or_default("STORAGE_MODE", "local").to_ascii_lowercase().as_str() {
            "local" => StorageMode::Local,
            "remote" => StorageMode::Remote {
                redis_url: required("REDIS_URL")?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    key: "STORAGE_MODE",
                    message: format!("expected local or remote, got {other}"),
                })
            }
        };

        let timeout_secs = or_default("REMOTE_TIMEOUT_SECS", &DEFAULT_REMOTE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid {
                key: "REMOTE_TIMEOUT_SECS",
                message: e.to_string(),
            })?;
        if !(1..=120).contains(&timeout_secs) {
            return Err(ConfigError::Invalid {
                key: "REMOTE_TIMEOUT_SECS",
                message: "must be between 1 and 120 seconds".to_string(),
            });
        }

        let fallback_username = or_default("ADMIN_FALLBACK_USERNAME", DEFAULT_FALLBACK_USERNAME);
        let fallback_password = or_default("ADMIN_FALLBACK_PASSWORD", DEFAULT_FALLBACK_PASSWORD);
        if fallback_username.trim().is_empty() || fallback_password.is_empty() {
            return Err(ConfigError::Invalid {
                key: "ADMIN_FALLBACK_USERNAME",
                message: "recovery credentials must not be empty".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            storage,
            cache_dir: PathBuf::from(or_default("CACHE_DIR", DEFAULT_CACHE_DIR)),
            remote_timeout: Duration::from_secs(timeout_secs),
            github_username: or_default("GITHUB_USERNAME", DEFAULT_GITHUB_USERNAME),
            github_api_base: or_default("GITHUB_API_BASE", DEFAULT_GITHUB_API_BASE),
            fallback_credentials: AdminCredentials::new(fallback_username, fallback_password),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
