use crate::api::schemas::SuccessResponse;
use crate::auth::application::domain::entities::AuthState;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Session flag, signed out when absent or unreadable",
            body = inline(SuccessResponse<AuthState>)
        ),
    )
)]
#[get("/api/auth/session")]
pub async fn session_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.auth_gate.session().await)
}
