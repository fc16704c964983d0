//! HFR CLI Library
//!
//! Command-line interface for the HFR measurement ingestion pipeline:
//!
//! - **Ingestion**: parse a total vector file into a measurement record
//!   (`hfr ingest`)
//! - **Fingerprinting**: print the content fingerprint of a file
//!   (`hfr fingerprint`)
//! - **Change classification**: compare a file against a stored fingerprint
//!   (`hfr classify`)

pub mod commands;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HFR - Oceanographic radar measurement ingestion
#[derive(Parser, Debug)]
#[command(name = "hfr")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest a total vector file and print the measurement record as JSON
    Ingest {
        /// Path to the `.tuv` file
        file: PathBuf,

        /// Owning organization written into the record
        #[arg(short, long, env = "HFR_OWNER", default_value = "SOCIB")]
        owner: String,

        /// Malformed-row policy (strict, lenient)
        #[arg(long)]
        policy: Option<String>,

        /// Digest algorithm (sha256, sha512)
        #[arg(long)]
        digest: Option<String>,

        /// Identity scheme (timestamped, content-addressed)
        #[arg(long)]
        identity: Option<String>,

        /// Header scan scope (whole-document, preamble)
        #[arg(long)]
        header_scan: Option<String>,
    },

    /// Print the content fingerprint of a file
    Fingerprint {
        /// Path to the file
        file: PathBuf,

        /// Digest algorithm (sha256, sha512)
        #[arg(long)]
        digest: Option<String>,
    },

    /// Classify a file against a previously stored fingerprint
    Classify {
        /// Path to the incoming file
        file: PathBuf,

        /// Fingerprint stored for the asset
        #[arg(short, long)]
        stored: String,

        /// Digest algorithm (sha256, sha512)
        #[arg(long)]
        digest: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ingest_flags() {
        let cli = Cli::parse_from([
            "hfr",
            "ingest",
            "TOTL_IBIZ_2023_05_01_0000.tuv",
            "--owner",
            "IMEDEA",
            "--policy",
            "strict",
        ]);

        match cli.command {
            Commands::Ingest { file, owner, policy, .. } => {
                assert_eq!(file, PathBuf::from("TOTL_IBIZ_2023_05_01_0000.tuv"));
                assert_eq!(owner, "IMEDEA");
                assert_eq!(policy.as_deref(), Some("strict"));
            },
            other => panic!("expected ingest command, got {other:?}"),
        }
    }
}
