//! Configuration and CLI argument handling

use clap::Parser;

/// Upper bound for `--session-minutes`
pub const MAX_SESSION_MINUTES: u64 = 24 * 60;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "study-timer")]
#[command(about = "A study-session timer service with dashboards, subjects and study groups")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Study session length in minutes (at most one day)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u64).range(1..=MAX_SESSION_MINUTES)
    )]
    pub session_minutes: u64,

    /// Stops shorter than this many seconds are not recorded
    #[arg(long, default_value = "60")]
    pub record_threshold_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Session length in seconds
    pub fn session_length_seconds(&self) -> u64 {
        self.session_minutes * 60
    }
}
