use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::Zeroizing;

use secret_recover::cli::{Cli, Commands};
use secret_recover::commands::{convert_value, decode_value, parse_test_cases, solve_test_cases};
use secret_recover::domain::{DivisionPolicy, RecoveryConfig, TestCase};

/// Read a single JSON document from stdin
fn read_stdin() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter test case JSON (end with Ctrl-D):");
    }

    let mut input = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("Failed to read test cases from stdin")?;
    Ok(input)
}

fn read_file(path: &Path) -> Result<Zeroizing<String>> {
    std::fs::read_to_string(path)
        .map(Zeroizing::new)
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Load every test case from the given files, or from stdin when none are given
fn load_test_cases(files: &[PathBuf]) -> Result<Vec<TestCase>> {
    if files.is_empty() {
        let input = read_stdin()?;
        return parse_test_cases(&input);
    }

    let mut test_cases = Vec::new();
    for path in files {
        let input = read_file(path)?;
        let parsed = parse_test_cases(&input)
            .with_context(|| format!("Failed to load test cases from {}", path.display()))?;
        test_cases.extend(parsed);
    }
    Ok(test_cases)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(Into::<LevelFilter>::into(cli.log_level)),
        )
        .init();

    match cli.command {
        Commands::Solve { files, lenient } => {
            let policy = if lenient {
                DivisionPolicy::Truncate
            } else {
                DivisionPolicy::Strict
            };

            let test_cases = load_test_cases(&files)?;
            let secrets = solve_test_cases(&test_cases, RecoveryConfig::new(policy))?;

            for (idx, secret) in secrets.iter().enumerate() {
                let rendered = Zeroizing::new(secret.to_string());
                println!("Secret for test case {}: {}", idx + 1, &*rendered);
            }
        }
        Commands::Decode { base, value } => {
            let decoded = Zeroizing::new(decode_value(&value, base)?.to_string());
            println!("{}", &*decoded);
        }
        Commands::Convert { from, to, value } => {
            let converted = Zeroizing::new(convert_value(&value, from, to)?);
            println!("{}", &*converted);
        }
    }

    Ok(())
}
