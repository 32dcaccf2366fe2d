//! Access log: one event per request, levelled by status class.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Server errors log at `error`, rejections at `warn`, the rest at `info`.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let code = status.as_u16();

    if status.is_server_error() {
        error!(%method, %path, status = code, elapsed_ms, "request failed");
    } else if status.is_client_error() {
        warn!(%method, %path, status = code, elapsed_ms, "request rejected");
    } else {
        info!(%method, %path, status = code, elapsed_ms, "request served");
    }

    response
}
