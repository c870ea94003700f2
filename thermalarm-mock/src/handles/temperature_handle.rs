use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use thermalarm_api::{TemperatureLimits, parse_bound};

use crate::device::MockDevice;

/// Raw query of `temperature/setlimits`, validated by hand so bad numbers get a 400.
#[derive(Debug, Deserialize)]
pub struct SetLimitsParams {
    pub min: Option<String>,
    pub max: Option<String>,
}

pub async fn read_temperature(State(device): State<MockDevice>) -> String {
    device.temperature().await.to_string()
}

pub async fn get_limits(State(device): State<MockDevice>) -> Json<TemperatureLimits> {
    Json(device.limits().await)
}

pub async fn set_limits(
    State(device): State<MockDevice>,
    Query(params): Query<SetLimitsParams>,
) -> Result<&'static str, (StatusCode, String)> {
    let bound = |value: Option<String>, name: &str| {
        let value = value.ok_or((StatusCode::BAD_REQUEST, format!("missing {name}")))?;
        parse_bound(&value).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
    };

    let min = bound(params.min, "min")?;
    let max = bound(params.max, "max")?;

    device.set_limits(TemperatureLimits::new(min, max)).await;
    Ok("ok")
}
