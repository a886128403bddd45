use crate::portfolio::application::ports::outgoing::ProfileSource;
use crate::portfolio::domain::profile_patch::ProfilePatch;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("portfolio-backend/", env!("CARGO_PKG_VERSION"));

/// Internal seam so the mapping can be tested without network access.
#[async_trait]
trait GithubHttp: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, String>;
}

struct ReqwestGithubHttp {
    client: reqwest::Client,
}

#[async_trait]
impl GithubHttp for ReqwestGithubHttp {
    async fn get_text(&self, url: &str) -> Result<String, String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("GitHub responded with {status}"));
        }

        response.text().await.map_err(|e| e.to_string())
    }
}

/// Subset of `GET /users/{username}` that feeds the profile.
#[derive(Deserialize)]
struct GithubUser {
    login: String,
    name: Option<String>,
    bio: Option<String>,
    avatar_url: Option<String>,
    location: Option<String>,
    blog: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Null or blank GitHub fields leave the local value in place instead of
/// clearing it.
impl From<GithubUser> for ProfilePatch {
    fn from(user: GithubUser) -> Self {
        ProfilePatch {
            name: non_empty(user.name).or(Some(user.login)),
            bio: non_empty(user.bio),
            image: non_empty(user.avatar_url),
            location: non_empty(user.location),
            // The website field doubles as the résumé / portfolio link.
            resume_url: non_empty(user.blog),
        }
    }
}

/// Public, unauthenticated read of one fixed GitHub account.
pub struct GithubProfileClient {
    http: Arc<dyn GithubHttp>,
    profile_url: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to build GitHub client: {0}")]
pub struct GithubClientError(String);

impl GithubProfileClient {
    pub fn new(
        api_base: &str,
        username: &str,
        timeout: Duration,
    ) -> Result<Self, GithubClientError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GithubClientError(e.to_string()))?;

        Ok(Self {
            http: Arc::new(ReqwestGithubHttp { client }),
            profile_url: Self::profile_url(api_base, username),
        })
    }

    fn profile_url(api_base: &str, username: &str) -> String {
        format!("{}/users/{}", api_base.trim_end_matches('/'), username)
    }
}

#[async_trait]
impl ProfileSource for GithubProfileClient {
    async fn get_profile(&self) -> ProfilePatch {
        let body = match self.http.get_text(&self.profile_url).await {
            Ok(body) => body,
            Err(e) => {
                error!("GitHub fetch error: {}", e);
                return ProfilePatch::default();
            }
        };

        match serde_json::from_str::<GithubUser>(&body) {
            Ok(user) => user.into(),
            Err(e) => {
                error!("GitHub profile could not be decoded: {}", e);
                ProfilePatch::default()
            }
        }
    }
}
