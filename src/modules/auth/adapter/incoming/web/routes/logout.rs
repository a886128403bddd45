use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AuthState;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Admin logout
///
/// Clears the session flag. Succeeds when no session was open.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session closed", body = inline(SuccessResponse<AuthState>)),
        (status = 500, description = "Session store failure", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(data: web::Data<AppState>) -> impl Responder {
    match data.auth_gate.logout().await {
        Ok(()) => {
            info!("Admin logged out");
            ApiResponse::success(AuthState::default())
        }
        Err(e) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
