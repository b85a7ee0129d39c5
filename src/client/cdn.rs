//! Republik CDN client for article PDF downloads
//!
//! PDFs are served unauthenticated from the CDN under the article path.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use reqwest::Client as HttpClient;
use tokio::io::AsyncWriteExt;

use crate::error::{ApiError, Result};

/// Republik CDN base URL
const CDN_BASE_URL: &str = "https://cdn.repub.ch";

/// Download timeout; PDFs can be tens of megabytes
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Client for the Republik CDN
pub struct CdnClient {
    http: HttpClient,
    base_url: String,
}

impl CdnClient {
    /// Create a client against the production CDN
    pub fn new() -> Result<Self> {
        Self::with_url(None)
    }

    /// Create a client with an optional base URL override
    pub fn with_url(base_url: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| CDN_BASE_URL.to_string()),
        })
    }

    /// Download the PDF rendition of an article to `destination`.
    ///
    /// `path` is the site-relative article path as returned by the content
    /// API (e.g. `/2026/01/05/ein-artikel`). Returns the number of bytes
    /// written.
    pub async fn download_pdf(&self, path: &str, destination: &Path) -> Result<u64> {
        let url = format!("{}/pdf{}.pdf", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let mut file = tokio::fs::File::create(destination).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(ApiError::from)?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(written)
    }
}
