//! HFR CLI - Main entry point

use clap::Parser;
use hfr_cli::{Cli, Commands};
use hfr_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("hfr-cli".to_string())
            .build()
    } else {
        LogConfig::builder()
            .level(LogLevel::Warn)
            .output(LogOutput::Console)
            .log_file_prefix("hfr-cli".to_string())
            .build()
    };

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    // Initialize logging (ignore errors as CLI should work without logging)
    let _ = init_logging(&log_config);

    // Execute command
    if let Err(e) = execute_command(cli) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
fn execute_command(cli: Cli) -> hfr_cli::Result<()> {
    match cli.command {
        Commands::Ingest {
            file,
            owner,
            policy,
            digest,
            identity,
            header_scan,
        } => hfr_cli::commands::ingest::run(file, owner, policy, digest, identity, header_scan),

        Commands::Fingerprint { file, digest } => {
            hfr_cli::commands::fingerprint::run(file, digest)
        }

        Commands::Classify { file, stored, digest } => {
            hfr_cli::commands::classify::run(file, stored, digest)
        }
    }
}
