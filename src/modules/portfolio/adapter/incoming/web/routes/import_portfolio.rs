use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::domain::entities::PortfolioDocument;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

/// Import a previously exported document
///
/// The raw body is the exported text. Anything that does not parse as a
/// complete portfolio document is refused and the stored document is kept.
#[utoipa::path(
    post,
    path = "/api/portfolio/import",
    tag = "portfolio",
    request_body(content = String, content_type = "application/json"),
    responses(
        (status = 200, description = "Imported document", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 400, description = "Import failed", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
    )
)]
#[post("/api/portfolio/import")]
pub async fn import_portfolio_handler(
    _session: AdminSession,
    body: String,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.provider.import_data(&body).await {
        let document = data.provider.current().await;
        ApiResponse::success(document.as_ref())
    } else {
        ApiResponse::bad_request(
            "IMPORT_FAILED",
            "The file is not a valid portfolio export or could not be saved",
        )
    }
}
