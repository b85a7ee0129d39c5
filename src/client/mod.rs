//! Republik API client

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;

pub mod cdn;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod republik;
pub mod transport;

pub use cdn::CdnClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockRepublikClient;
pub use models::{Article, PollStatus, TokenChallenge, Viewer};
pub use republik::RepublikClient;

/// Sign-in operations for the Republik API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create a sign-in request for the given email address.
    ///
    /// The server mails the user a confirmation link and returns the
    /// verification phrase plus the expiry window of the request.
    async fn request_token(&self, email: &str) -> Result<TokenChallenge>;

    /// Fetch the current status of a pending sign-in request.
    ///
    /// Returns `ApiError::RequestNotFound` once the server has discarded
    /// the request (typically because it expired server-side).
    async fn poll_token(&self, request_id: &str) -> Result<PollStatus>;
}

/// Authenticated content operations for the Republik API
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch the authenticated user
    async fn me(&self) -> Result<Viewer>;

    /// List the most recent articles from the feed
    async fn latest_articles(&self, first: usize) -> Result<Vec<Article>>;

    /// List articles published at or after the given instant
    async fn articles_since(&self, since: DateTime<Utc>) -> Result<Vec<Article>>;
}
