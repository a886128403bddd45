use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::portfolio::domain::public_view::PublicSection;
use crate::portfolio::domain::section::SectionName;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// One section of the portfolio document
///
/// `settings` comes without the admin credential pair.
#[utoipa::path(
    get,
    path = "/api/portfolio/sections/{section}",
    tag = "portfolio",
    params(
        ("section" = SectionName, Path, description = "profile, skills, projects, experience, education, contact or settings")
    ),
    responses(
        (status = 200, description = "Section payload", body = inline(SuccessResponse<PublicSection>)),
        (status = 404, description = "Unknown section", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/sections/{section}")]
pub async fn get_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let name = match path.parse::<SectionName>() {
        Ok(name) => name,
        Err(e) => return ApiResponse::not_found("UNKNOWN_SECTION", &e.to_string()),
    };

    let document = data.provider.current().await;
    ApiResponse::success(document.public_section(name))
}
