use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::device::MockDevice;

#[derive(Debug, Deserialize)]
pub struct OfflineParams {
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct PinParams {
    pub value: Option<f64>,
}

pub async fn set_offline(
    State(device): State<MockDevice>,
    Query(params): Query<OfflineParams>,
) -> &'static str {
    device.set_offline(params.enabled).await;
    "ok"
}

pub async fn pin_temperature(
    State(device): State<MockDevice>,
    Query(params): Query<PinParams>,
) -> &'static str {
    device.pin_temperature(params.value).await;
    "ok"
}

/// Makes the device routes look dead while the device is offline.
pub async fn offline_guard(State(device): State<MockDevice>, request: Request, next: Next) -> Response {
    if device.is_offline().await {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    next.run(request).await
}
