use axum::routing::get;
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::device::MockDevice;
use crate::handles::*;

pub fn create_app(device: MockDevice) -> Router {
    let alarm = Router::new()
        .route("/status", get(get_status))
        .route("/on", get(switch_on))
        .route("/off", get(switch_off));

    let temperature = Router::new()
        .route("/read", get(read_temperature))
        .route("/limits", get(get_limits))
        .route("/setlimits", get(set_limits));

    let device_routes = Router::new()
        .nest("/alarm", alarm)
        .nest("/temperature", temperature)
        .route_layer(middleware::from_fn_with_state(device.clone(), offline_guard));

    let mock = Router::new()
        .route("/offline", get(set_offline))
        .route("/pin", get(pin_temperature));

    Router::new()
        .merge(device_routes)
        .nest("/mock", mock)
        .layer(TraceLayer::new_for_http())
        .with_state(device)
}
