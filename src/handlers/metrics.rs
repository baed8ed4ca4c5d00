use actix_web::HttpResponse;

use crate::observability;

/// GET /metrics
pub async fn metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(observability::render())
}
