use super::ResultsApi;
use crate::app::QualifyingQuery;
use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result, WrapErr};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for Ergast-compatible endpoints
/// (`{base}/{season}/{round}/qualifying.json`).
#[derive(Debug, Clone)]
pub struct ErgastClient {
    client: Client,
    base_url: String,
}

impl ErgastClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("qualy/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .wrap_err("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn qualifying_url(&self, query: &QualifyingQuery) -> String {
        format!(
            "{}/{}/{}/qualifying.json",
            self.base_url, query.season, query.round
        )
    }
}

#[async_trait]
impl ResultsApi for ErgastClient {
    async fn get_qualifying_results(&self, query: &QualifyingQuery) -> Result<String> {
        let url = self.qualifying_url(query);
        tracing::debug!(%url, "requesting qualifying results");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .wrap_err_with(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(eyre!("{url} returned {status}"));
        }

        response
            .text()
            .await
            .wrap_err_with(|| format!("Failed to read body from {url}"))
    }
}
