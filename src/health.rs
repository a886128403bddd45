use crate::portfolio::adapter::outgoing::FileKeyValueStore;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    remote_store: &'static str,
    local_store: &'static str,
    document: &'static str,
}

/// Dependencies checked by the readiness probe.
pub struct ReadinessProbe {
    redis: Option<Arc<Pool>>,
    local: FileKeyValueStore,
}

impl ReadinessProbe {
    pub fn new(redis: Option<Arc<Pool>>, local: FileKeyValueStore) -> Self {
        Self { redis, local }
    }

    async fn remote_status(&self) -> &'static str {
        let Some(pool) = &self.redis else {
            return "disabled";
        };
        let Ok(mut conn) = pool.get().await else {
            return "unhealthy";
        };
        match deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
        {
            Ok(_) => "ok",
            Err(_) => "unhealthy",
        }
    }

    async fn local_status(&self) -> &'static str {
        match self.local.probe().await {
            Ok(()) => "ok",
            Err(_) => "unhealthy",
        }
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Remote store reachable (when configured)
/// - Local store writable
/// - Document loaded
///
/// A failing remote store makes the service unready even though reads would
/// still be served from the local copy.
#[get("/ready")]
pub async fn readiness(
    probe: web::Data<ReadinessProbe>,
    state: web::Data<AppState>,
) -> impl Responder {
    let remote_store = probe.remote_status().await;
    let local_store = probe.local_status().await;
    let document = if state.provider.is_ready() {
        "loaded"
    } else {
        "loading"
    };

    let ready = remote_store != "unhealthy" && local_store == "ok" && document == "loaded";
    let body = ReadinessResponse {
        status: if ready { "ok" } else { "unhealthy" },
        remote_store,
        local_store,
        document,
    };

    if ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use tempfile::TempDir;

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_ready_in_local_mode() {
        let dir = TempDir::new().unwrap();
        let probe = web::Data::new(ReadinessProbe::new(None, FileKeyValueStore::new(dir.path())));
        let state = TestAppStateBuilder::default().build().await;
        let app =
            test::init_service(App::new().app_data(probe).app_data(state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["remote_store"], "disabled");
        assert_eq!(body["document"], "loaded");
    }

    #[actix_web::test]
    async fn test_not_ready_when_local_store_unwritable() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let probe = web::Data::new(ReadinessProbe::new(
            None,
            FileKeyValueStore::new(blocker.join("nested")),
        ));
        let state = TestAppStateBuilder::default().build().await;
        let app =
            test::init_service(App::new().app_data(probe).app_data(state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 503);
    }
}
