//! Logging/tracing initialization for the CLI.

use tracing_subscriber::EnvFilter;

/// Build the env filter from CLI flags and the configured default level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces errors only,
/// `-v`/`-vv` raise verbosity, and the config file's level is the fallback.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber, writing to stderr so stdout stays
/// reserved for command output.
pub fn init_observability(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
