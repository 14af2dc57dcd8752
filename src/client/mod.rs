//! xCAT REST API client
//!
//! [`Client`] issues authenticated GET requests against an xCAT management
//! node. Every call builds its own blocking HTTP client, performs exactly one
//! request (two for [`Client::get_network_objects`]) and returns the response
//! body; nothing is pooled or cached between calls.
//!
//! The client is synchronous. Call it from a plain thread or from
//! `spawn_blocking`, never directly on an async runtime worker.

use crate::error::{Result, XcatError};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

mod networks;
mod nodes;

/// Header carrying the xCAT auth token on every request
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Connection settings for an xCAT management node
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the management node, e.g. `https://mgmt:3001/xcatws`
    pub master: String,

    /// Token sent in the `X-Auth-Token` header
    pub token: String,

    /// Skip TLS certificate verification
    pub insecure: bool,

    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Settings with no timeout
    pub fn new(master: impl Into<String>, token: impl Into<String>, insecure: bool) -> Self {
        Self {
            master: master.into(),
            token: token.into(),
            insecure,
            timeout: None,
        }
    }

    /// Set a whole-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("master", &self.master)
            .field("token", &"<redacted>")
            .field("insecure", &self.insecure)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// xCAT API client
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    /// Build a client from the three connection values
    pub fn new(master: impl Into<String>, token: impl Into<String>, insecure: bool) -> Self {
        Self::from_config(ClientConfig::new(master, token, insecure))
    }

    /// Build a client from a prepared [`ClientConfig`]
    #[must_use]
    pub const fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Connection settings of this client
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for `uri`: the master URL followed by `uri`, verbatim.
    #[must_use]
    pub fn request_url(&self, uri: &str) -> String {
        format!("{}{}", self.config.master, uri)
    }

    /// GET `uri` on the management node and return the raw response body.
    ///
    /// The status code is not inspected: an xCAT error page comes back as a
    /// normal body.
    ///
    /// # Errors
    ///
    /// - [`XcatError::InvalidRequest`] if the URL or HTTP client cannot be built
    /// - [`XcatError::ConnectionError`] if the node is unreachable or TLS fails
    /// - [`XcatError::BodyRead`] if the body cannot be read
    pub fn request(&self, uri: &str) -> Result<Vec<u8>> {
        let url = self.request_url(uri);
        let http = self.http_client(&url)?;

        debug!(url = %url, insecure = self.config.insecure, "xCAT request");

        let response = http
            .get(&url)
            .header(AUTH_TOKEN_HEADER, &self.config.token)
            .send()
            .map_err(|e| XcatError::from_reqwest(&url, &e))?;

        let status = response.status();
        if status.is_success() {
            debug!(url = %url, status = status.as_u16(), "xCAT response");
        } else {
            warn!(url = %url, status = status.as_u16(), "xCAT returned non-success status");
        }

        let body = response.bytes().map_err(|e| XcatError::BodyRead {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        Ok(body.to_vec())
    }

    /// Per-call HTTP client honouring the TLS and timeout settings
    fn http_client(&self, url: &str) -> Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(self.config.insecure)
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| XcatError::InvalidRequest {
                url: url.to_string(),
                reason: format!("Failed to create HTTP client: {e}"),
            })
    }
}
