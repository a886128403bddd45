use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::adapter::incoming::web::data_access_error_response;
use crate::portfolio::application::services::skill_icons::fill_missing_icons;
use crate::portfolio::domain::identity::new_item_id;
use crate::portfolio::domain::section::{Section, SectionName};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use tracing::info;

fn assign_missing_ids<T>(items: &mut [T], id_of: impl Fn(&mut T) -> &mut String) {
    for item in items.iter_mut() {
        let id = id_of(item);
        if id.trim().is_empty() {
            *id = new_item_id();
        }
    }
}

/// Editor conveniences applied before a section is saved: new list items get
/// an id, new skills get a known icon.
fn prepare_section(mut section: Section) -> Section {
    match &mut section {
        Section::Skills(skills) => {
            assign_missing_ids(skills, |s| &mut s.id);
            fill_missing_icons(skills);
        }
        Section::Projects(projects) => assign_missing_ids(projects, |p| &mut p.id),
        Section::Experience(items) => assign_missing_ids(items, |e| &mut e.id),
        Section::Education(items) => assign_missing_ids(items, |e| &mut e.id),
        Section::Profile(_) | Section::Contact(_) | Section::Settings(_) => {}
    }
    section
}

/// Replace one section of the portfolio document
///
/// The body is the bare section payload. Other sections are left as they were
/// read; a concurrent edit of another section may be overwritten.
#[utoipa::path(
    patch,
    path = "/api/portfolio/sections/{section}",
    tag = "portfolio",
    params(
        ("section" = SectionName, Path, description = "Section to replace")
    ),
    request_body = Section,
    responses(
        (status = 200, description = "Section saved", body = inline(SuccessResponse<Section>)),
        (status = 400, description = "Payload does not match the section", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse),
        (status = 422, description = "Duplicate item ids", body = ErrorResponse),
        (status = 503, description = "Remote store unavailable", body = ErrorResponse),
    )
)]
#[patch("/api/portfolio/sections/{section}")]
pub async fn patch_section_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let name = match path.parse::<SectionName>() {
        Ok(name) => name,
        Err(e) => return ApiResponse::not_found("UNKNOWN_SECTION", &e.to_string()),
    };

    let section = match Section::from_json(name, req.into_inner()) {
        Ok(section) => prepare_section(section),
        Err(e) => return ApiResponse::bad_request("INVALID_DOCUMENT", &e.to_string()),
    };

    match data.provider.update_section(section).await {
        Ok(saved) => {
            info!(section = %name, "Section saved");
            ApiResponse::success(saved.section(name))
        }
        Err(e) => data_access_error_response(&e),
    }
}
