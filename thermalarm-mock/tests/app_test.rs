use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use thermalarm_api::TemperatureLimits;
use thermalarm_mock::app::create_app;
use thermalarm_mock::device::MockDevice;
use thermalarm_mock::settings::{Device, Simulation};

fn device() -> MockDevice {
    MockDevice::new(
        &Device {
            initial_on: false,
            min: 18.0,
            max: 26.0,
        },
        Simulation::default(),
    )
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_switch_alarm() {
    let router = create_app(device());

    assert_eq!(get(&router, "/alarm/status").await, (StatusCode::OK, "false".to_string()));

    assert_eq!(get(&router, "/alarm/on").await.0, StatusCode::OK);
    assert_eq!(get(&router, "/alarm/status").await.1, "true");

    assert_eq!(get(&router, "/alarm/off").await.0, StatusCode::OK);
    assert_eq!(get(&router, "/alarm/status").await.1, "false");
}

#[tokio::test]
async fn test_read_temperature() {
    let device = device();
    let router = create_app(device.clone());

    let (status, body) = get(&router, "/temperature/read").await;
    assert_eq!(status, StatusCode::OK);
    let reading: f64 = body.parse().unwrap();
    assert!((13.0..=31.0).contains(&reading));

    device.pin_temperature(Some(30.5)).await;
    assert_eq!(get(&router, "/temperature/read").await.1, "30.5");

    assert_eq!(get(&router, "/mock/pin").await.0, StatusCode::OK);
    assert_ne!(get(&router, "/temperature/read").await.1, "30.5");
}

#[tokio::test]
async fn test_limits() {
    let device = device();
    let router = create_app(device.clone());

    let (status, body) = get(&router, "/temperature/limits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        TemperatureLimits::from_json(&body).unwrap(),
        TemperatureLimits::new(18.0, 26.0)
    );

    let (status, _) = get(&router, "/temperature/setlimits?min=15&max=27.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(device.limits().await, TemperatureLimits::new(15.0, 27.5));

    let body = get(&router, "/temperature/limits").await.1;
    let limits: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(limits["min"], 15.0);
    assert_eq!(limits["max"], 27.5);
}

#[tokio::test]
async fn test_reject_invalid_limits() {
    let device = device();
    let router = create_app(device.clone());

    let (status, _) = get(&router, "/temperature/setlimits?min=cold&max=27").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&router, "/temperature/setlimits?max=27").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(device.limits().await, TemperatureLimits::new(18.0, 26.0));
}

#[tokio::test]
async fn test_offline_device() {
    let device = device();
    let router = create_app(device.clone());

    assert_eq!(get(&router, "/mock/offline?enabled=true").await.0, StatusCode::OK);
    assert!(device.is_offline().await);

    for uri in [
        "/alarm/status",
        "/alarm/on",
        "/temperature/read",
        "/temperature/limits",
        "/temperature/setlimits?min=1&max=2",
    ] {
        assert_eq!(get(&router, uri).await.0, StatusCode::SERVICE_UNAVAILABLE, "{uri}");
    }
    assert!(!device.is_on().await);

    assert_eq!(get(&router, "/mock/offline?enabled=false").await.0, StatusCode::OK);
    assert_eq!(get(&router, "/alarm/status").await.0, StatusCode::OK);
}
