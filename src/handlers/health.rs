use crate::models::StatusPayload;
use axum::response::Json as ResponseJson;

/// GET /health
pub async fn health_check() -> ResponseJson<StatusPayload> {
    ResponseJson(StatusPayload::ok())
}
