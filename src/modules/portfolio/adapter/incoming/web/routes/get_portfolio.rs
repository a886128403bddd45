use crate::api::schemas::SuccessResponse;
use crate::portfolio::domain::public_view::PublicPortfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Current portfolio document
///
/// Served from memory. While the remote store is unreachable this is the
/// cached copy, or the defaults when nothing was ever cached. The admin
/// credential pair is left out; the full document is only available through
/// the export route.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Full document", body = inline(SuccessResponse<PublicPortfolio>)),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let document = data.provider.current().await;
    ApiResponse::success(PublicPortfolio::from(document.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::domain::defaults::{default_document, DEFAULT_ADMIN_PASSWORD};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::InMemoryDocumentStore;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_get_portfolio_returns_document() {
        let state = TestAppStateBuilder::default().build().await;
        let app =
            test::init_service(App::new().app_data(state).service(get_portfolio_handler)).await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"],
            serde_json::to_value(PublicPortfolio::from(&default_document())).unwrap()
        );
    }

    #[actix_web::test]
    async fn test_get_portfolio_hides_admin_credentials() {
        let state = TestAppStateBuilder::default().build().await;
        let app =
            test::init_service(App::new().app_data(state).service(get_portfolio_handler)).await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["data"]["settings"].get("adminCredentials").is_none());
        assert!(!body.to_string().contains(DEFAULT_ADMIN_PASSWORD));
    }

    #[actix_web::test]
    async fn test_get_portfolio_while_remote_is_down() {
        let remote = Arc::new(InMemoryDocumentStore::default());
        remote.fail_reads(true);
        let state = TestAppStateBuilder::default()
            .with_remote(remote)
            .build()
            .await;
        let app =
            test::init_service(App::new().app_data(state).service(get_portfolio_handler)).await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["profile"]["name"], "Your Name");
    }
}
