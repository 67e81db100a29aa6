use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::domain::Radix;

/// Validates that a base is within 2..=36
fn validate_base(s: &str) -> Result<Radix, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Radix::new(value).map_err(|e| e.to_string())
}

/// Verbosity of the diagnostics written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "secret-recover")]
#[command(about = "Recover Shamir secrets from base-encoded shares by exact Lagrange interpolation")]
pub struct Cli {
    /// Diagnostic log level (written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct the secret of each test case
    Solve {
        /// JSON files holding one test case or an array of them (stdin if omitted)
        files: Vec<PathBuf>,

        /// Truncate inexact interpolation terms instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Decode a numeral into decimal
    Decode {
        /// Base of the numeral (2-36)
        #[arg(short, long, value_parser = validate_base)]
        base: Radix,

        /// Digits to decode
        value: String,
    },
    /// Re-encode a numeral from one base into another
    Convert {
        /// Base of the input numeral (2-36)
        #[arg(long, value_parser = validate_base)]
        from: Radix,

        /// Base of the output numeral (2-36)
        #[arg(long, value_parser = validate_base)]
        to: Radix,

        /// Digits to convert
        value: String,
    },
}
