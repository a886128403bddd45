use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AuthState;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin")]
    pub username: String,

    #[schema(example = "changeme")]
    pub password: String,
}

/// Admin login
///
/// Opens the admin session when the pair matches the stored credentials or
/// the recovery pair.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<AuthState>),
            example = json!({
                "success": true,
                "data": { "isAuthenticated": true, "user": { "username": "admin" } }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    info!(username = %dto.username, "Login attempt");

    if data.auth_gate.login(&dto.username, &dto.password).await {
        ApiResponse::success(AuthState::signed_in(dto.username))
    } else {
        warn!("Login failed: Invalid credentials");
        ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
    }
}
