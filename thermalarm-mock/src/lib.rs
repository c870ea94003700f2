use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::app::create_app;
use crate::device::MockDevice;
use crate::settings::Settings;

pub mod app;
pub mod device;
pub mod handles;
pub mod settings;
pub mod simulate;

pub async fn run(settings: &Arc<Settings>) -> io::Result<()> {
    let ip_addr = settings
        .server
        .host
        .parse::<IpAddr>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let address = SocketAddr::from((ip_addr, settings.server.port));

    let listener = TcpListener::bind(&address).await?;
    let device = MockDevice::new(&settings.device, settings.simulation.clone());

    serve(listener, device).await
}

/// Serves the simulated device on an already bound listener.
pub async fn serve(listener: TcpListener, device: MockDevice) -> io::Result<()> {
    tracing::info!("listening on {:?}", listener.local_addr()?);

    axum::serve(listener, create_app(device)).await
}
