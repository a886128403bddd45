use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Locally persisted admin session flag.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<AuthUser>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct AuthUser {
    pub username: String,
}

impl AuthState {
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            user: Some(AuthUser {
                username: username.into(),
            }),
        }
    }
}
