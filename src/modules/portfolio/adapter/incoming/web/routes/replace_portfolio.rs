use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::adapter::incoming::web::data_access_error_response;
use crate::portfolio::domain::entities::PortfolioDocument;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::info;

/// Replace the whole portfolio document
#[utoipa::path(
    put,
    path = "/api/portfolio",
    tag = "portfolio",
    request_body = PortfolioDocument,
    responses(
        (status = 200, description = "Document saved", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 400, description = "Body is not a portfolio document", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 422, description = "Duplicate or empty item ids", body = ErrorResponse),
        (status = 503, description = "Remote store unavailable", body = ErrorResponse),
    )
)]
#[put("/api/portfolio")]
pub async fn replace_portfolio_handler(
    _session: AdminSession,
    req: web::Json<PortfolioDocument>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.provider.set_data(req.into_inner()).await {
        Ok(saved) => {
            info!("Portfolio document replaced");
            ApiResponse::success(saved.as_ref())
        }
        Err(e) => data_access_error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::ports::outgoing::DocumentStore;
    use crate::portfolio::domain::defaults::default_document;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::InMemoryDocumentStore;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn edited() -> PortfolioDocument {
        let mut doc = default_document();
        doc.settings.site_title = "Edited".to_string();
        doc
    }

    #[actix_web::test]
    async fn test_replace_success() {
        let remote = Arc::new(InMemoryDocumentStore::default());
        let state = TestAppStateBuilder::default()
            .with_remote(remote.clone())
            .signed_in()
            .build()
            .await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(replace_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/portfolio")
            .set_json(edited())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(state.provider.document().unwrap().settings.site_title, "Edited");
        assert_eq!(remote.get().await.unwrap(), edited());
    }

    #[actix_web::test]
    async fn test_replace_requires_session() {
        let state = TestAppStateBuilder::default().build().await;
        let app =
            test::init_service(App::new().app_data(state).service(replace_portfolio_handler)).await;

        let req = test::TestRequest::put()
            .uri("/api/portfolio")
            .set_json(edited())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_replace_duplicate_ids() {
        let state = TestAppStateBuilder::default().signed_in().build().await;
        let app =
            test::init_service(App::new().app_data(state).service(replace_portfolio_handler)).await;
        let mut doc = edited();
        doc.projects.push(doc.projects[0].clone());

        let req = test::TestRequest::put()
            .uri("/api/portfolio")
            .set_json(doc)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 422);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_DOCUMENT");
    }

    #[actix_web::test]
    async fn test_replace_out_of_range_proficiency() {
        let state = TestAppStateBuilder::default().signed_in().build().await;
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(replace_portfolio_handler),
        )
        .await;
        let mut value = serde_json::to_value(edited()).unwrap();
        value["skills"][0]["proficiency"] = serde_json::json!(101);

        let req = test::TestRequest::put()
            .uri("/api/portfolio")
            .set_json(value)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_replace_remote_down_keeps_local_copy() {
        let remote = Arc::new(InMemoryDocumentStore::default());
        let state = TestAppStateBuilder::default()
            .with_remote(remote.clone())
            .signed_in()
            .build()
            .await;
        remote.fail_writes(true);
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(replace_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/portfolio")
            .set_json(edited())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 503);
        remote.fail_writes(false);
        remote.fail_reads(true);
        assert_eq!(state.provider.refresh().await.settings.site_title, "Edited");
    }
}
