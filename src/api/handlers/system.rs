// src/api/handlers/system.rs
use actix_web::HttpResponse;
use crate::api::types::{ApiResponse, HealthResponse};

/// Service health
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        "Service is healthy.",
    ))
}
