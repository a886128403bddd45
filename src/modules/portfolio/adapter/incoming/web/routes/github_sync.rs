use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::domain::entities::Profile;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

/// Pull public profile fields from GitHub
///
/// Name, bio, avatar, location and website overwrite the local profile when
/// GitHub has them; every other field is kept.
#[utoipa::path(
    post,
    path = "/api/portfolio/github-sync",
    tag = "portfolio",
    responses(
        (status = 200, description = "Merged profile", body = inline(SuccessResponse<Profile>)),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 502, description = "Nothing received from GitHub or save failed", body = ErrorResponse),
    )
)]
#[post("/api/portfolio/github-sync")]
pub async fn github_sync_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.provider.sync_with_github().await {
        let document = data.provider.current().await;
        ApiResponse::success(&document.profile)
    } else {
        ApiResponse::bad_gateway("GITHUB_SYNC_FAILED", "Could not sync the profile with GitHub")
    }
}
