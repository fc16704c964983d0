//! `hfr ingest` - parse a total vector file into a measurement record

use std::path::PathBuf;

use hfr_core::config::IngestConfig;
use hfr_core::identity::SystemClock;
use hfr_core::pipeline::Pipeline;
use tracing::info;

use crate::error::{CliError, Result};

pub fn run(
    file: PathBuf,
    owner: String,
    policy: Option<String>,
    digest: Option<String>,
    identity: Option<String>,
    header_scan: Option<String>,
) -> Result<()> {
    let mut config = IngestConfig::from_env()?;

    if let Some(policy) = policy {
        config.parse_policy = policy.parse()?;
    }
    if let Some(digest) = digest {
        config.digest = digest.parse()?;
    }
    if let Some(identity) = identity {
        config.identity = identity.parse()?;
    }
    if let Some(scan) = header_scan {
        config.header_scan = scan.parse()?;
    }

    let bytes = std::fs::read(&file)
        .map_err(|_| CliError::FileNotFound(file.display().to_string()))?;
    let filename = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    info!(filename = %filename, owner = %owner, "Ingesting measurement file");

    let record = Pipeline::new(config).ingest(&filename, bytes, &owner, &SystemClock)?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
