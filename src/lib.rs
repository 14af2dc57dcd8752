#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! ## Architecture
//!
//! - **[`client`]** - [`Client`], its [`ClientConfig`] and the read operations
//! - **[`json`]** - reshaping and pretty-printing of xCAT responses
//! - **[`config`]** - config file loading and CLI/environment merging
//! - **[`error`]** - error types and exit codes
//! - **[`logging`]** - tracing subscriber setup for the binary
//! - **[`cli`]** - command-line argument definitions
//!
//! ## Quick Start
//!
//! ```no_run
//! use xcat_cli::Client;
//!
//! let client = Client::new("https://mgmt:3001/xcatws", "my-token", true);
//! let nodes = client.get_all_nodes()?;
//! let power = client.node_range("n1-n10", &["power", "state"])?;
//! let networks = client.get_network_objects()?;
//! # Ok::<(), xcat_cli::XcatError>(())
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod json;
pub mod logging;

/// Client type aliases for convenience
pub use client::{Client, ClientConfig};

/// Error type alias for convenience
pub use error::{Result, XcatError};

/// Configuration type alias for convenience
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "xcat";
