//! Domain models returned by the Republik API client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pending sign-in request issued by the server.
///
/// The challenge is valid for polling until `expires_at`; the verification
/// phrase is what the user confirms out-of-band in the sign-in email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenChallenge {
    /// Opaque server-assigned handle used for polling
    #[serde(rename = "requestId")]
    pub request_id: String,

    /// Human-readable verification phrase shown to the user
    pub phrase: String,

    /// Instant after which the server discards the request
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

/// Status of a pending sign-in request as reported by one poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStatus {
    /// Not yet confirmed or denied
    Pending,
    /// The user rejected the verification
    Denied,
    /// Confirmed; the bearer token is ready
    Granted {
        /// Opaque token string, stored and echoed verbatim
        token: String,
    },
}

/// The authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewer {
    /// Account ID
    pub id: String,

    /// Account email address
    pub email: String,
}

/// A published article from the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article title
    pub title: String,

    /// Site-relative article path (also the CDN PDF path)
    pub path: String,

    /// Publication timestamp
    pub publish_date: DateTime<Utc>,
}
