use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::adapter::incoming::web::data_access_error_response;
use crate::portfolio::domain::entities::PortfolioDocument;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::warn;

/// Reset the portfolio to the built-in defaults
///
/// Overwrites every section, admin credentials included.
#[utoipa::path(
    post,
    path = "/api/portfolio/reset",
    tag = "portfolio",
    responses(
        (status = 200, description = "Defaults saved", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 503, description = "Remote store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/portfolio/reset")]
pub async fn reset_portfolio_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    warn!(
        user = ?session.user.map(|u| u.username),
        "Portfolio reset requested"
    );

    match data.provider.reset().await {
        Ok(saved) => ApiResponse::success(saved.as_ref()),
        Err(e) => data_access_error_response(&e),
    }
}
