//! Consumer-side chart resolution.
//!
//! Asks a remote `chartd` for a full chart and, when that is not possible,
//! falls back to a local sun-sign approximation so callers always get a
//! chart back.

use aphrodite::{approximate_chart, BirthChartRequest, BirthChartResult, BirthInput};
use aphrodite_config::ClientSettings;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("Could not decode chart from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can fetch a full chart for a request.
#[async_trait]
pub trait ChartTransport: Send + Sync {
    async fn fetch_chart(&self, request: &BirthChartRequest) -> Result<BirthChartResult, ClientError>;
}

/// `POST`s the request as JSON to a `chartd` endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChartTransport for HttpTransport {
    async fn fetch_chart(&self, request: &BirthChartRequest) -> Result<BirthChartResult, ClientError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|source| ClientError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}

/// Remote chart resolution with a local safety net.
pub struct ClientApproximation<T = HttpTransport> {
    transport: T,
}

impl ClientApproximation<HttpTransport> {
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        Ok(Self::new(HttpTransport::new(
            settings.endpoint.clone(),
            settings.timeout,
        )?))
    }
}

impl<T: ChartTransport> ClientApproximation<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the full chart, or approximate it locally when the remote side
    /// is unreachable, slow, or answers with anything but a chart.
    ///
    /// The approximation only knows the sun sign; moon and rising repeat it.
    pub async fn resolve_remote(&self, input: &BirthInput) -> BirthChartResult {
        match self.transport.fetch_chart(&input.to_request()).await {
            Ok(chart) => chart,
            Err(e) => {
                log::warn!("remote chart unavailable, approximating from sun sign: {}", e);
                approximate_chart(input)
            }
        }
    }
}
