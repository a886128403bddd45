use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::adapter::incoming::web::data_access_error_response;
use crate::AppState;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

fn export_file_name() -> String {
    format!("portfolio-data-{}.json", Utc::now().format("%Y-%m-%d"))
}

/// Download the portfolio document
///
/// Pretty-printed JSON, accepted unchanged by the import endpoint.
#[utoipa::path(
    get,
    path = "/api/portfolio/export",
    tag = "portfolio",
    responses(
        (status = 200, description = "Document as a JSON attachment", content_type = "application/json", body = String),
        (status = 401, description = "Admin session required", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/export")]
pub async fn export_portfolio_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.provider.export_data().await {
        Ok(text) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(export_file_name())],
            })
            .body(text),
        Err(e) => data_access_error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::domain::defaults::default_document;
    use crate::portfolio::domain::entities::PortfolioDocument;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_export_is_attachment() {
        let state = TestAppStateBuilder::default().signed_in().build().await;
        let app =
            test::init_service(App::new().app_data(state).service(export_portfolio_handler)).await;

        let req = test::TestRequest::get().uri("/api/portfolio/export").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let disposition = resp
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("portfolio-data-"));

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("\n  \"profile\""));
        let parsed: PortfolioDocument = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, default_document());
    }

    #[actix_web::test]
    async fn test_export_requires_session() {
        let state = TestAppStateBuilder::default().build().await;
        let app =
            test::init_service(App::new().app_data(state).service(export_portfolio_handler)).await;

        let req = test::TestRequest::get().uri("/api/portfolio/export").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
