//! The I/O seam between `DogClient` and the network.
//!
//! # Design
//! `Transport` performs one GET and returns the fully read body. Anything
//! that goes wrong before a response arrives is `Transport`; a response whose
//! body cannot be read to the end, or exceeds the body limit, is `Read`.
//! The body is returned as bytes, so a non-UTF-8 reply reaches the JSON
//! decoder and fails there. HTTP status codes are passed through as data,
//! never turned into errors.

use tracing::debug;

use crate::error::{DogApiError, Result};
use crate::http::HttpResponse;

/// Executes a single GET request.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

/// Largest response body `UreqTransport` reads by default, matching ureq's
/// own default. Longer bodies fail with `Read`.
pub const DEFAULT_BODY_LIMIT: u64 = 10 * 1024 * 1024;

/// Default transport backed by a `ureq::Agent`.
///
/// The agent's connection pool is shared by clones, so a cloned
/// `DogClient` reuses connections. Bodies are read up to `body_limit`
/// bytes; `breeds/list/all`, the largest reply, is well under 100 KB.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    body_limit: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self::with_agent(agent)
    }

    /// Use a caller-configured agent. Its `http_status_as_error` setting
    /// should be `false`, otherwise error envelopes surface as `Transport`.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self {
            agent,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, bytes: u64) -> Self {
        self.body_limit = bytes;
        self
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| DogApiError::Transport(Box::new(e)))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.body_limit)
            .read_to_vec()
            .map_err(|e| DogApiError::Read(Box::new(e)))?;

        debug!(%url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}
