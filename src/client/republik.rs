//! Republik API client implementation

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::models::{Article, PollStatus, TokenChallenge, Viewer};
use super::transport::Transport;
use super::{AuthApi, ContentApi};
use crate::error::{ApiError, Error, Result};

/// Republik API base URL
const API_BASE_URL: &str = "https://api.republik.ch";

/// Republik API client
pub struct RepublikClient {
    transport: Transport,
    token: Option<String>,
}

impl RepublikClient {
    /// Create a client against the production API
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_url(token, None)
    }

    /// Create a client with an optional base URL override
    pub fn with_url(token: Option<String>, base_url: Option<String>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| API_BASE_URL.to_string());
        Ok(Self {
            transport: Transport::new(base_url)?,
            token,
        })
    }

    fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[derive(Serialize)]
struct TokenRequestBody<'a> {
    email: &'a str,
}

/// Wire shape of one poll response
#[derive(Deserialize)]
struct PollResponse {
    status: String,
    #[serde(default)]
    token: Option<String>,
}

#[derive(Deserialize)]
struct DocumentsResponse {
    nodes: Vec<Article>,
}

#[async_trait]
impl AuthApi for RepublikClient {
    async fn request_token(&self, email: &str) -> Result<TokenChallenge> {
        let body = TokenRequestBody { email };
        let challenge: TokenChallenge = self
            .transport
            .send(Method::POST, "/auth/token-request", Some(&body), None)
            .await?;
        Ok(challenge)
    }

    async fn poll_token(&self, request_id: &str) -> Result<PollStatus> {
        let path = format!("/auth/token-request/{}", request_id);
        let response: PollResponse = self
            .transport
            .send::<(), _>(Method::GET, &path, None, None)
            .await
            .map_err(|err| match err {
                // A 404 here means the server already discarded the request
                Error::Api(ApiError::Status { status: 404, .. }) => {
                    ApiError::RequestNotFound.into()
                }
                other => other,
            })?;

        match response.status.as_str() {
            "PENDING" => Ok(PollStatus::Pending),
            "DENIED" => Ok(PollStatus::Denied),
            "GRANTED" => {
                let token = response.token.ok_or_else(|| {
                    ApiError::Decode("Granted response is missing the token".to_string())
                })?;
                Ok(PollStatus::Granted { token })
            }
            other => {
                Err(ApiError::Decode(format!("Unknown sign-in request status '{}'", other)).into())
            }
        }
    }
}

#[async_trait]
impl ContentApi for RepublikClient {
    async fn me(&self) -> Result<Viewer> {
        self.transport
            .send::<(), _>(Method::GET, "/me", None, self.bearer())
            .await
    }

    async fn latest_articles(&self, first: usize) -> Result<Vec<Article>> {
        let path = format!("/documents?first={}", first);
        let response: DocumentsResponse = self
            .transport
            .send::<(), _>(Method::GET, &path, None, self.bearer())
            .await?;
        Ok(response.nodes)
    }

    async fn articles_since(&self, since: DateTime<Utc>) -> Result<Vec<Article>> {
        // RFC 3339 with a Z suffix needs no percent-encoding in a query string
        let path = format!(
            "/documents?since={}",
            since.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let response: DocumentsResponse = self
            .transport
            .send::<(), _>(Method::GET, &path, None, self.bearer())
            .await?;
        Ok(response.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard, token: Option<&str>) -> RepublikClient {
        RepublikClient::with_url(token.map(String::from), Some(server.url())).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = RepublikClient::new(Some("token".to_string()));
        assert!(client.is_ok());
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_request_token_parses_challenge() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/auth/token-request")
            .with_status(200)
            .with_body(
                r#"{
                    "requestId": "req-1",
                    "phrase": "bierernst jauchzen",
                    "expiresAt": "2030-01-01T12:09:00Z"
                }"#,
            )
            .create_async()
            .await;

        let client = client_for(&server, None);
        let challenge = client.request_token("reader@example.com").await.unwrap();

        assert_eq!(challenge.request_id, "req-1");
        assert_eq!(challenge.phrase, "bierernst jauchzen");
        assert_eq!(challenge.expires_at.to_rfc3339(), "2030-01-01T12:09:00+00:00");
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_poll_token_maps_statuses() {
        let mut server = mockito::Server::new_async().await;
        let _pending = server
            .mock("GET", "/auth/token-request/req-pending")
            .with_status(200)
            .with_body(r#"{"status": "PENDING"}"#)
            .create_async()
            .await;
        let _granted = server
            .mock("GET", "/auth/token-request/req-granted")
            .with_status(200)
            .with_body(r#"{"status": "GRANTED", "token": "s%3BxgTxh26"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);

        assert_eq!(
            client.poll_token("req-pending").await.unwrap(),
            PollStatus::Pending
        );
        assert_eq!(
            client.poll_token("req-granted").await.unwrap(),
            PollStatus::Granted {
                token: "s%3BxgTxh26".to_string()
            }
        );
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_poll_token_missing_request_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/auth/token-request/req-gone")
            .with_status(404)
            .with_body(r#"{"message": "unknown request"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let err = client.poll_token("req-gone").await.unwrap_err();

        match err {
            Error::Api(ApiError::RequestNotFound) => (),
            other => panic!("Expected RequestNotFound, got {:?}", other),
        }
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_poll_token_granted_without_token_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/auth/token-request/req-odd")
            .with_status(200)
            .with_body(r#"{"status": "GRANTED"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let err = client.poll_token("req-odd").await.unwrap_err();

        match err {
            Error::Api(ApiError::Decode(_)) => (),
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_me_requires_valid_token() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/me")
            .with_status(401)
            .create_async()
            .await;

        let client = client_for(&server, Some("stale"));
        let err = client.me().await.unwrap_err();

        match err {
            Error::Api(ApiError::Unauthorized) => (),
            other => panic!("Expected Unauthorized, got {:?}", other),
        }
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_latest_articles_sends_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/documents?first=2")
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_body(
                r#"{
                    "nodes": [
                        {"title": "Eins", "path": "/2026/01/05/eins", "publishDate": "2026-01-05T05:00:00Z"},
                        {"title": "Zwei", "path": "/2026/01/06/zwei", "publishDate": "2026-01-06T05:00:00Z"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = client_for(&server, Some("secret-token"));
        let articles = client.latest_articles(2).await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Eins");
        assert_eq!(articles[1].path, "/2026/01/06/zwei");
    }
}
