//! Mock Republik API client for testing
//!
//! Scripted implementation of the sign-in trait so the acquisition state
//! machine can be exercised without network access.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::AuthApi;
use super::models::{PollStatus, TokenChallenge};
use crate::error::{ApiError, Error, Result};

/// Mock API client with scripted responses.
///
/// Poll outcomes are consumed in order; once the script is exhausted every
/// further poll reports `Pending`, so a loop under test only terminates
/// through its own expiry handling.
#[derive(Default)]
pub struct MockRepublikClient {
    challenge: Mutex<Option<TokenChallenge>>,
    request_error: Mutex<Option<Error>>,
    poll_script: Mutex<VecDeque<Result<PollStatus>>>,
    calls: Mutex<CallCounts>,
}

/// API call counts for test assertions
#[derive(Debug, Default, Clone, Copy)]
struct CallCounts {
    request_token: usize,
    poll_token: usize,
}

impl MockRepublikClient {
    /// Challenge returned by `request_token`
    pub fn with_challenge(self, challenge: TokenChallenge) -> Self {
        *self.challenge.lock().unwrap() = Some(challenge);
        self
    }

    /// Error returned by the next `request_token` call
    pub fn with_request_error(self, error: Error) -> Self {
        *self.request_error.lock().unwrap() = Some(error);
        self
    }

    /// Outcomes returned by consecutive `poll_token` calls
    pub fn with_poll_outcomes(self, outcomes: Vec<Result<PollStatus>>) -> Self {
        *self.poll_script.lock().unwrap() = outcomes.into();
        self
    }

    /// Number of `request_token` calls issued so far
    pub fn request_calls(&self) -> usize {
        self.calls.lock().unwrap().request_token
    }

    /// Number of `poll_token` calls issued so far
    pub fn poll_calls(&self) -> usize {
        self.calls.lock().unwrap().poll_token
    }
}

#[async_trait]
impl AuthApi for MockRepublikClient {
    async fn request_token(&self, _email: &str) -> Result<TokenChallenge> {
        self.calls.lock().unwrap().request_token += 1;

        if let Some(err) = self.request_error.lock().unwrap().take() {
            return Err(err);
        }

        self.challenge
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::Decode("no challenge configured".to_string()).into())
    }

    async fn poll_token(&self, _request_id: &str) -> Result<PollStatus> {
        self.calls.lock().unwrap().poll_token += 1;

        match self.poll_script.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(PollStatus::Pending),
        }
    }
}
