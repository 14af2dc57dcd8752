//! Log output for the `xcat` binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (or to whatever application embeds the client).

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `warn`, or `debug` for this crate
/// when `verbose` is set. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    // Fails only when a global subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,xcat_cli=debug")
    } else {
        EnvFilter::new("warn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(false).to_string(), "warn");
        assert!(default_filter(true).to_string().contains("xcat_cli=debug"));
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
