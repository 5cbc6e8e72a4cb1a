// HTTP client for the doctor API
use crate::application::patient_gateway::{BurnControl, MetricsSource};
use crate::domain::metrics::MetricsSnapshot;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}

#[derive(Debug, Clone)]
pub struct HttpPatientClient {
    host: String,
    client: reqwest::Client,
}

impl HttpPatientClient {
    pub fn new(host: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("http://{}/api/{}", self.host, endpoint)
    }

    /// Fire a GET and hand back the response without looking at it.
    async fn get(&self, endpoint: &str) -> Result<reqwest::Response, ClientError> {
        let url = self.build_url(endpoint);
        tracing::debug!("GET {}", url);
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Transport { url, source })
    }
}

#[async_trait]
impl MetricsSource for HttpPatientClient {
    async fn fetch_metrics(&self) -> Result<MetricsSnapshot> {
        let response = self.get("metrics").await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus {
                url: self.build_url("metrics"),
                status: response.status(),
            }
            .into());
        }

        response
            .json::<MetricsSnapshot>()
            .await
            .context("Failed to parse metrics response")
    }
}

// The control endpoints are triggers: the response body and status carry
// nothing the dashboard acts on, so only transport failures surface.
#[async_trait]
impl BurnControl for HttpPatientClient {
    async fn start_burn(&self) -> Result<()> {
        self.get("start").await?;
        Ok(())
    }

    async fn stop_burn(&self) -> Result<()> {
        self.get("stop").await?;
        Ok(())
    }
}
