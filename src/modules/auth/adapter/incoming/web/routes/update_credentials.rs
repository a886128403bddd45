use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::auth::application::domain::entities::AuthState;
use crate::auth::application::services::AuthError;
use crate::portfolio::adapter::incoming::web::data_access_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct UpdateCredentialsRequest {
    #[schema(example = "owner")]
    pub username: String,

    #[schema(example = "a-better-password")]
    pub password: String,
}

/// Replace admin credentials
///
/// Writes the new pair into the settings section. The previous pair stops
/// working; the recovery pair keeps working.
#[utoipa::path(
    put,
    path = "/api/auth/credentials",
    tag = "auth",
    request_body = UpdateCredentialsRequest,
    responses(
        (status = 200, description = "Credentials updated", body = inline(SuccessResponse<AuthState>)),
        (status = 400, description = "Empty username or password", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 503, description = "Remote store unavailable", body = ErrorResponse),
    )
)]
#[put("/api/auth/credentials")]
pub async fn update_credentials_handler(
    _session: AdminSession,
    req: web::Json<UpdateCredentialsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .auth_gate
        .update_credentials(&dto.username, &dto.password)
        .await
    {
        Ok(()) => ApiResponse::success(AuthState::signed_in(dto.username)),
        Err(AuthError::EmptyCredentials) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Username and password must not be empty",
        ),
        Err(AuthError::Store(e)) => data_access_error_response(&e),
        Err(AuthError::Session(e)) => {
            error!(error = %e, "Credentials saved but session flag could not be written");
            ApiResponse::internal_error()
        }
    }
}
