//! HTTP transport for the Republik API
//!
//! A thin layer over `reqwest` that attaches the bearer token when one is
//! present and normalizes failures into the typed error taxonomy. Stateless
//! between calls; the underlying client pools connections.

use std::time::Duration;

use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Request timeout for all API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error payload shape used by the API for non-2xx responses
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP transport bound to one API base URL
pub struct Transport {
    http: HttpClient,
    base_url: String,
}

impl Transport {
    /// Create a transport for the given base URL (no trailing slash)
    pub fn new(base_url: String) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Send a request and parse the JSON response body.
    ///
    /// `bearer` is attached as an `Authorization: Bearer` header when given.
    /// Non-2xx statuses become `ApiError::Unauthorized` (401) or
    /// `ApiError::Status`; a 2xx body that fails to parse becomes
    /// `ApiError::Decode`.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        bearer: Option<&str>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(token) = bearer {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized.into());
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Prefer the structured message payload when the body carries one
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.message)
                .unwrap_or_else(|_| {
                    if text.is_empty() {
                        status.to_string()
                    } else {
                        text
                    }
                });
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let text = response.text().await.map_err(ApiError::from)?;
        let data = serde_json::from_str::<T>(&text)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))?;

        Ok(data)
    }
}
