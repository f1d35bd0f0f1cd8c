//! Info command — package and configuration diagnostics.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use copyrank_core::assessments::ALL_ASSESSMENTS;
use copyrank_core::config::Config;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct Info<'a> {
    name: &'a str,
    version: &'a str,
    assessments: &'a [&'a str],
    log_level: &'a str,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(_args: InfoArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let info = Info {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        assessments: ALL_ASSESSMENTS,
        log_level: config.log_level.as_str(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", info.name.bold(), info.version);
    println!("  {} {}", "Log level:".cyan(), info.log_level);
    println!("  {} {}", "Assessments:".cyan(), info.assessments.join(", "));

    Ok(())
}
