//! CLI module for urlmon
//!
//! Provides command-line interface for the monitor.
//! All operations are performed via the HTTP API.

use clap::Parser;

/// urlmon - URL reachability monitor
#[derive(Parser, Debug)]
#[command(name = "urlmon")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    URLMON_HOST             Bind address (default: 0.0.0.0)
    URLMON_PORT             Listen port (default: 8000)
    URLMON_LOG_LEVEL        Log level (default: info)
    URLMON_DATABASE_URL     Database URL (default: sqlite:<home>/.urlmon/urlmon.db)
"#)]
pub struct Cli;
