use super::ProblemSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://projecteuler.net/minimal=";

/// Fetches problem text from `<base_url><id>`.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("build http client")?;
        Ok(Self { client, base_url: base_url.into() })
    }

    pub fn url_for(&self, id: u32) -> String {
        format!("{}{id}", self.base_url)
    }
}

#[async_trait]
impl ProblemSource for HttpSource {
    async fn fetch(&self, id: u32) -> Result<String> {
        let url = self.url_for(id);
        let resp = self.client.get(&url).send().await.with_context(|| format!("GET {url}"))?;
        let resp = resp.error_for_status().with_context(|| format!("GET {url}"))?;
        resp.text().await.with_context(|| format!("read body of {url}"))
    }
}
