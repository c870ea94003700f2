use axum::extract::State;

use crate::device::MockDevice;

pub async fn get_status(State(device): State<MockDevice>) -> String {
    device.is_on().await.to_string()
}

pub async fn switch_on(State(device): State<MockDevice>) -> &'static str {
    device.switch(true).await;
    "ok"
}

pub async fn switch_off(State(device): State<MockDevice>) -> &'static str {
    device.switch(false).await;
    "ok"
}
