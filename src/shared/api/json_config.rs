use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Upper bound for request bodies; a full portfolio document with inline
/// images stays well below it.
pub const JSON_BODY_LIMIT: usize = 4 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("INVALID_DOCUMENT", &message),
            )
            .into()
        })
}
