//! xcat - command-line client for the xCAT REST API
//!
//! Thin wrapper that resolves connection settings, calls one [`Client`]
//! operation and writes the response body to stdout.

use console::style;
use std::io::Write;
use xcat_cli::cli::{Cli, Commands};
use xcat_cli::{json, logging, Client, Config, Result, XcatError};

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

/// Main application entry point
#[allow(clippy::print_stderr)]
fn run() -> i32 {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match execute(&cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red().bold());
            err.exit_code()
        }
    }
}

/// Execute the requested command
fn execute(cli: &Cli) -> Result<()> {
    if matches!(cli.command, Commands::Version) {
        return write_line(&format!("xcat v{}", xcat_cli::VERSION));
    }

    let client = connect(cli)?;

    let body = match &cli.command {
        Commands::Nodes => client.get_all_nodes()?,
        Commands::Range { range, segments } => {
            let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
            client.node_range(range, &segments)?
        }
        Commands::Names { range } => {
            for name in client.node_names(range)? {
                write_line(&name)?;
            }
            return Ok(());
        }
        Commands::Networks => client.get_networks()?,
        Commands::NetworkObjects => client.get_network_objects()?,
        Commands::Get { uri } => {
            if !uri.starts_with('/') {
                return Err(XcatError::InvalidArgument(format!(
                    "URI must start with '/': {uri}"
                )));
            }
            client.request(uri)?
        }
        Commands::Version => return Ok(()),
    };

    write_body(&body, cli.pretty)
}

/// Resolve settings: config file, then environment and flags on top
fn connect(cli: &Cli) -> Result<Client> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.merge(&cli.overrides());

    tracing::debug!(master = ?config.master, insecure = ?config.insecure, "Resolved xCAT connection");

    Ok(Client::from_config(config.client_config()?))
}

fn write_body(body: &[u8], pretty: bool) -> Result<()> {
    let body = if pretty {
        json::prettify(body)?
    } else {
        body.to_vec()
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body)?;
    if !body.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn write_line(line: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;
    Ok(())
}
