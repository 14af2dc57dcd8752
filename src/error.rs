//! Error types and handling for the xCAT client
//!
//! Every failure the client can hit maps onto one [`XcatError`] variant so the
//! binary can pick an exit code and library callers can match on the kind.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xCAT client operations
pub type Result<T> = std::result::Result<T, XcatError>;

/// Error types for xCAT client operations
#[derive(Error, Debug)]
pub enum XcatError {
    // ═══════════════════════════════════════════════════════════════
    // Network & HTTP Errors
    // ═══════════════════════════════════════════════════════════════
    /// The request could not be built (malformed URL, TLS backend setup)
    #[error("Failed to build request for {url}: {reason}")]
    InvalidRequest {
        /// Full request URL
        url: String,
        /// Underlying failure
        reason: String,
    },

    /// Failed to reach the management node (DNS, TCP, TLS handshake)
    #[error("Failed to connect to {url}: {reason}")]
    ConnectionError {
        /// Full request URL
        url: String,
        /// Underlying failure
        reason: String,
    },

    /// The response body could not be read to completion
    #[error("Failed to read response body from {url}: {reason}")]
    BodyRead {
        /// Full request URL
        url: String,
        /// Underlying failure
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════
    // Serialization & Decoding Errors
    // ═══════════════════════════════════════════════════════════════
    /// Response body is not valid JSON
    #[error("Deserialization failed: {0}")]
    DeserializationError(String),

    /// Response body is valid JSON but not the expected shape
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Failed to serialize data
    #[error("Serialization failed: {0}")]
    SerializationError(String),

    // ═══════════════════════════════════════════════════════════════
    // Configuration Errors
    // ═══════════════════════════════════════════════════════════════
    /// Failed to read configuration file
    #[error("Failed to read config from {path}: {reason}")]
    ConfigRead {
        /// Config file or directory
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Failed to write configuration file
    #[error("Failed to write config to {path}: {reason}")]
    ConfigWrite {
        /// Config file or directory
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No management node URL configured
    #[error("Missing xCAT master URL. Pass --master, set XCAT_MASTER or add `master` to the config file")]
    MissingMaster,

    /// No auth token configured
    #[error("Missing xCAT auth token. Pass --token, set XCAT_TOKEN or add `token` to the config file")]
    MissingToken,

    // ═══════════════════════════════════════════════════════════════
    // Validation & Input Errors
    // ═══════════════════════════════════════════════════════════════
    /// Invalid input argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing command output failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl XcatError {
    /// Get the exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingMaster | Self::MissingToken | Self::Output(_) => 1,
            Self::InvalidArgument(_) => 2,
            Self::ConfigRead { .. } | Self::ConfigWrite { .. } | Self::InvalidConfig(_) => 3,
            Self::InvalidRequest { .. } | Self::ConnectionError { .. } | Self::BodyRead { .. } => 4,
            Self::DeserializationError(_)
            | Self::UnexpectedShape(_)
            | Self::SerializationError(_) => 5,
        }
    }

    /// Map a `reqwest` failure onto the request phase it happened in.
    pub(crate) fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        let url = url.to_string();
        let reason = err.to_string();
        if err.is_builder() {
            Self::InvalidRequest { url, reason }
        } else if err.is_body() || err.is_decode() {
            Self::BodyRead { url, reason }
        } else {
            Self::ConnectionError { url, reason }
        }
    }
}

impl From<serde_json::Error> for XcatError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            Self::DeserializationError(format!("JSON syntax error: {err}"))
        } else {
            Self::DeserializationError(err.to_string())
        }
    }
}
