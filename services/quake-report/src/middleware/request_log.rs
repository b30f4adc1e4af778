use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Log every request with its status and latency
pub async fn request_log_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} -> {} in {} ms",
        method,
        uri,
        response.status(),
        started.elapsed().as_millis()
    );

    response
}
