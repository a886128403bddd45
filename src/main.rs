pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::portfolio;

use crate::api::openapi::ApiDoc;
use crate::auth::application::services::{AuthGate, SESSION_KEY};
use crate::health::ReadinessProbe;
use crate::portfolio::adapter::outgoing::{
    FileKeyValueStore, GithubProfileClient, RedisDocumentStore,
};
use crate::portfolio::application::ports::outgoing::KeyValueStore;
use crate::portfolio::application::services::{
    CacheMirror, PortfolioDataService, PortfolioProvider,
};
use crate::shared::api::{custom_json_config, json_config::JSON_BODY_LIMIT};
use crate::shared::config::{AppConfig, StorageMode};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<PortfolioProvider>,
    pub auth_gate: Arc<AuthGate>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Local durable store: document mirror and session flag
    let local_store = FileKeyValueStore::new(&config.cache_dir);
    let local_arc: Arc<dyn KeyValueStore> = Arc::new(local_store.clone());
    let mirror = CacheMirror::new(Arc::clone(&local_arc));

    // Remote store
    let (data_service, redis_pool) = match &config.storage {
        StorageMode::Local => {
            info!("Storage mode: local ({})", config.cache_dir.display());
            (PortfolioDataService::local(mirror), None)
        }
        StorageMode::Remote { redis_url } => {
            if rustls::crypto::ring::default_provider()
                .install_default()
                .is_err()
            {
                warn!("rustls crypto provider was already installed");
            }

            let pool = Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .map_err(|e| std::io::Error::other(format!("Failed to create Redis pool: {e}")))?;
            let client = deadpool_redis::redis::Client::open(redis_url.as_str())
                .map_err(|e| std::io::Error::other(format!("Invalid REDIS_URL: {e}")))?;

            let pool = Arc::new(pool);
            let remote = RedisDocumentStore::new(Arc::clone(&pool), client);
            info!("Storage mode: remote");
            (
                PortfolioDataService::with_remote(Arc::new(remote), mirror, config.remote_timeout),
                Some(pool),
            )
        }
    };

    let github = GithubProfileClient::new(
        &config.github_api_base,
        &config.github_username,
        config.remote_timeout,
    )
    .map_err(|e| std::io::Error::other(e.to_string()))?;

    let provider = Arc::new(PortfolioProvider::new(
        Arc::new(data_service),
        Arc::new(github),
    ));
    provider.mount().await;

    let auth_gate = Arc::new(AuthGate::new(
        Arc::clone(&provider),
        local_arc,
        config.fallback_credentials.clone(),
    ));
    info!("Session flag stored under key {}", SESSION_KEY);

    let state = AppState {
        provider: Arc::clone(&provider),
        auth_gate,
    };
    let probe = web::Data::new(ReadinessProbe::new(redis_pool, local_store));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(probe.clone())
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(JSON_BODY_LIMIT))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await;

    provider.shutdown().await;
    info!("Application stopped");
    server
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::portfolio::adapter::incoming::web::routes as portfolio_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(portfolio_routes::get_portfolio_handler);
    cfg.service(portfolio_routes::stream_portfolio_handler);
    cfg.service(portfolio_routes::get_section_handler);
    cfg.service(portfolio_routes::replace_portfolio_handler);
    cfg.service(portfolio_routes::patch_section_handler);
    cfg.service(portfolio_routes::reset_portfolio_handler);
    cfg.service(portfolio_routes::export_portfolio_handler);
    cfg.service(portfolio_routes::import_portfolio_handler);
    cfg.service(portfolio_routes::github_sync_handler);
    // Skills
    cfg.service(portfolio_routes::get_skill_icon_handler);
    // Auth
    cfg.service(auth_routes::login_handler);
    cfg.service(auth_routes::logout_handler);
    cfg.service(auth_routes::session_handler);
    cfg.service(auth_routes::update_credentials_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
