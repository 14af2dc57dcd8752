//! Command-line interface argument parsing
//!
//! Defines all CLI commands and their arguments using Clap.

use crate::config::{Config, ENV_INSECURE, ENV_MASTER, ENV_TIMEOUT, ENV_TOKEN};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xcat - query an xCAT management node over its REST API
#[derive(Parser, Debug)]
#[command(name = "xcat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query nodes, node ranges and networks on an xCAT management node")]
#[command(long_about = concat!(
    "xcat (v", env!("CARGO_PKG_VERSION"), ")\n",
    "Query nodes, node ranges and networks on an xCAT management node.\n\n",
    "Connection settings come from flags, XCAT_* environment variables, or\n",
    "~/.config/xcat/config.toml, in that order of precedence."
))]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the management node (e.g. https://mgmt:3001/xcatws)
    #[arg(long, global = true, env = ENV_MASTER)]
    pub master: Option<String>,

    /// xCAT auth token sent as X-Auth-Token
    #[arg(long, global = true, env = ENV_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Skip TLS certificate verification (`--insecure=false` re-enables it)
    #[arg(
        short = 'k',
        long,
        global = true,
        env = ENV_INSECURE,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub insecure: Option<bool>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true, env = ENV_TIMEOUT)]
    pub timeout: Option<u64>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Re-indent JSON responses before printing
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every node in the inventory
    ///
    /// Example:
    ///   xcat nodes
    #[command(display_order = 1)]
    Nodes,

    /// Query a node range, optionally a sub-resource of it
    ///
    /// Without segments the range is looked up and an empty list printed;
    /// use `names` to list the nodes themselves.
    ///
    /// Examples:
    ///   xcat range n1-n10
    ///   xcat range n1-n10 power state
    #[command(display_order = 2)]
    Range {
        /// Node range expression (e.g. n1-n10, compute)
        range: String,

        /// Path segments appended to the range (e.g. power state)
        segments: Vec<String>,
    },

    /// Print the names of the nodes in a range, one per line
    ///
    /// Example:
    ///   xcat names compute
    #[command(display_order = 3)]
    Names {
        /// Node range expression
        range: String,
    },

    /// List network names
    ///
    /// Example:
    ///   xcat networks
    #[command(display_order = 4)]
    Networks,

    /// Fetch the full object of every network
    ///
    /// Example:
    ///   xcat network-objects
    #[command(display_order = 5)]
    NetworkObjects,

    /// GET an arbitrary API path
    ///
    /// Example:
    ///   xcat get '/groups?pretty=1'
    #[command(display_order = 6)]
    Get {
        /// Path appended to the master URL, starting with '/'
        uri: String,
    },

    /// Check CLI version
    #[command(display_order = 7)]
    Version,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Connection settings given on the command line or through the environment
    #[must_use]
    pub fn overrides(&self) -> Config {
        Config {
            master: self.master.clone(),
            token: self.token.clone(),
            insecure: self.insecure,
            timeout_secs: self.timeout,
        }
    }
}
