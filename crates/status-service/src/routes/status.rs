//! Root status endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed payload identifying the service. Field order is the wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub status: &'static str,
}

impl StatusResponse {
    pub const CURRENT: Self = Self {
        service: "A",
        status: "ok",
    };
}

/// GET / — returns the service name and status.
pub async fn get() -> Json<StatusResponse> {
    Json(StatusResponse::CURRENT)
}
