//! Token acquisition for the Republik API
//!
//! Sign-in is a challenge/response handshake: the client creates a sign-in
//! request for an email address, the server mails the user a confirmation
//! link together with a verification phrase, and the client polls the
//! request status until it is granted, denied, or its expiry window lapses.
//! The server-issued expiry is the only bound on the loop; there is no
//! client-side retry budget, because the verification phrase is tied to
//! exactly one request lifetime.

use std::time::Duration;

use crate::client::{AuthApi, PollStatus, TokenChallenge};
use crate::error::{ApiError, Error, Result};

pub mod clock;

pub use clock::{Clock, SystemClock};

/// Default pause between status polls
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Timing policy for the polling loop
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    /// Pause between consecutive status polls
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Terminal outcome of one sign-in request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenResult {
    /// Confirmed in time; carries the bearer token verbatim
    Granted { token: String },
    /// The user rejected the verification
    Denied,
    /// The expiry window lapsed before confirmation
    Expired,
}

/// Drives the sign-in handshake for one email address.
///
/// Transport failures while creating the request propagate immediately; a
/// retry would issue a fresh request with a different verification phrase,
/// which only the caller may decide to do. Failures while polling are
/// transient and retried at the next interval, except a request-not-found
/// response, which means the server already discarded the request.
pub struct TokenAcquirer<A, C = SystemClock> {
    api: A,
    clock: C,
    policy: PollPolicy,
}

impl<A, C> TokenAcquirer<A, C>
where
    A: AuthApi,
    C: Clock,
{
    pub fn new(api: A, clock: C, policy: PollPolicy) -> Self {
        Self { api, clock, policy }
    }

    /// Create a sign-in request for `email`.
    ///
    /// The returned challenge carries the verification phrase to show the
    /// user and the instant the request expires.
    pub async fn request(&self, email: &str) -> Result<TokenChallenge> {
        self.api.request_token(email).await
    }

    /// Poll the challenge until it resolves.
    ///
    /// Consumes the challenge: a request id must never be polled again once
    /// a terminal result has been produced for it. Never issues a poll at or
    /// after the expiry instant.
    pub async fn wait(&self, challenge: TokenChallenge) -> Result<TokenResult> {
        loop {
            if self.clock.now() >= challenge.expires_at {
                return Ok(TokenResult::Expired);
            }

            match self.api.poll_token(&challenge.request_id).await {
                Ok(PollStatus::Pending) => {}
                Ok(PollStatus::Denied) => return Ok(TokenResult::Denied),
                Ok(PollStatus::Granted { token }) => return Ok(TokenResult::Granted { token }),
                // The server discarded the request, usually because it
                // already expired server-side
                Err(Error::Api(ApiError::RequestNotFound)) => return Ok(TokenResult::Expired),
                Err(err) => {
                    log::warn!("Sign-in status poll failed, retrying: {}", err);
                }
            }

            self.clock.sleep(self.policy.interval).await;
        }
    }

    /// Run the full handshake: create the request, hand the challenge to
    /// `on_challenge` (the caller prompts the user with it), then poll to a
    /// terminal result.
    pub async fn acquire<F>(&self, email: &str, mut on_challenge: F) -> Result<TokenResult>
    where
        F: FnMut(&TokenChallenge) + Send,
    {
        let challenge = self.request(email).await?;
        on_challenge(&challenge);
        self.wait(challenge).await
    }
}
