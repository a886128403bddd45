use crate::api::schemas::SuccessResponse;
use crate::portfolio::application::services::skill_icons::skill_icon_url;
use crate::shared::api::ApiResponse;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams)]
pub struct SkillIconQuery {
    /// Skill name, matched case-insensitively
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct SkillIconResponse {
    #[schema(example = "Rust")]
    pub name: String,

    /// `null` for skills without a known icon
    #[schema(example = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg")]
    pub icon: Option<String>,
}

/// Icon for a skill name
#[utoipa::path(
    get,
    path = "/api/skills/icon",
    tag = "skills",
    params(SkillIconQuery),
    responses(
        (status = 200, description = "Icon lookup result", body = inline(SuccessResponse<SkillIconResponse>)),
    )
)]
#[get("/api/skills/icon")]
pub async fn get_skill_icon_handler(query: web::Query<SkillIconQuery>) -> impl Responder {
    let name = query.into_inner().name;
    let icon = skill_icon_url(&name);
    ApiResponse::success(SkillIconResponse { name, icon })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_known_and_unknown_skills() {
        let app = test::init_service(App::new().service(get_skill_icon_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/skills/icon?name=docker")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["icon"]
            .as_str()
            .unwrap()
            .ends_with("docker-original.svg"));

        let req = test::TestRequest::get()
            .uri("/api/skills/icon?name=Knitting")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["icon"].is_null());
    }
}
