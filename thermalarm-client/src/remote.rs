use std::time::Duration;

use thermalarm_api::Resource;
use tokio::time;

use crate::error::{Error, Result};

/// Issues a named operation against the alarm device.
///
/// Any transport-level problem comes back as an error; the body is handed
/// over untouched.
#[async_trait::async_trait]
pub trait RemoteState: Send + Sync {
    async fn fetch(&self, resource: &Resource) -> Result<String>;
}

/// Runs one remote call, turning an elapsed `limit` into [`Error::Timeout`].
pub async fn fetch_within<R>(remote: &R, resource: &Resource, limit: Duration) -> Result<String>
where
    R: RemoteState + ?Sized,
{
    match time::timeout(limit, remote.fetch(resource)).await {
        Ok(result) => result,
        Err(_) => Err(Error::timeout(resource, limit)),
    }
}

pub struct HttpRemote {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new<S: Into<String>>(base_url: S, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn url(&self, resource: &Resource) -> String {
        format!("{}{}", self.base_url, resource.target())
    }
}

#[async_trait::async_trait]
impl RemoteState for HttpRemote {
    async fn fetch(&self, resource: &Resource) -> Result<String> {
        let url = self.url(resource);
        tracing::trace!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::transport(resource, e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| Error::transport(resource, e.to_string()))
    }
}
