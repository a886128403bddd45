use crate::portfolio::application::services::DataAccessError;
use crate::shared::api::ApiResponse;
use actix_web::HttpResponse;
use tracing::error;

/// Maps a failed write to the error envelope. Every write path of the
/// portfolio and auth routes goes through here.
pub fn data_access_error_response(err: &DataAccessError) -> HttpResponse {
    match err {
        DataAccessError::StoreUnavailable(msg) => {
            error!("Remote store unavailable: {}", msg);
            ApiResponse::service_unavailable(
                "STORE_UNAVAILABLE",
                "Remote store is unavailable, the change was kept locally only",
            )
        }
        DataAccessError::Invalid(e) => ApiResponse::unprocessable("INVALID_DOCUMENT", &e.to_string()),
        DataAccessError::Cache(msg) | DataAccessError::Serialization(msg) => {
            error!("Portfolio write failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
