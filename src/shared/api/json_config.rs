use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::debug;

/// Order forms carry long instructions; anything past this is rejected.
const MAX_JSON_BODY: usize = 64 * 1024;

/// Malformed or oversized JSON bodies become `400 VALIDATION_ERROR` in the
/// usual envelope instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BODY)
        .error_handler(|err, req| {
            let message = err.to_string();
            debug!(path = %req.path(), error = %message, "Rejected JSON body");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
