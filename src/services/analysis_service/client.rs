use crate::config::Config;
use crate::error::{AnalysisError, ViewerError, ViewerResult};
use crate::models::analysis::RawAnalysisResult;
use crate::models::api::AnalyzeRequest;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

/// Talks to the external analysis service.
///
/// One call carries the whole batch; the service decides the order of the
/// records it returns.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ViewerResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ViewerError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(AnalysisClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> ViewerResult<Self> {
        Self::new(config.analyzer_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn analyze(
        &self,
        identifiers: &[String],
    ) -> Result<Vec<RawAnalysisResult>, AnalysisError> {
        let endpoint = format!("{}/analyze", self.base_url);
        info!("POST {} ({} urls)", endpoint, identifiers.len());

        let response = self
            .http
            .post(&endpoint)
            .json(&AnalyzeRequest { urls: identifiers })
            .send()
            .await
            .map_err(AnalysisError::Network)?;

        let status = response.status();
        if !status.is_success() {
            warn!("analysis service answered {}", status);
            return Err(AnalysisError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(AnalysisError::Network)?;
        let results: Vec<RawAnalysisResult> = serde_json::from_slice(&body)?;
        info!("received {} results", results.len());
        Ok(results)
    }
}
