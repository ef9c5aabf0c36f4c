//! Command-line arguments for wellness-api
//!
//! Each option falls back to a `WELLNESS_*` environment variable, so the
//! resolution order is CLI > environment > TOML file > compiled default.

use std::path::PathBuf;

use clap::Parser;
use wellness_common::config::CliOverrides;

/// Command-line arguments for wellness-api
#[derive(Parser, Debug)]
#[command(name = "wellness-api")]
#[command(about = "Rule-based wellness scoring service")]
#[command(version)]
pub struct Args {
    /// Path to TOML config file
    #[arg(short, long, env = "WELLNESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// IP address to bind to
    #[arg(long, env = "WELLNESS_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WELLNESS_PORT")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "WELLNESS_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        CliOverrides {
            config: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
        }
    }
}
