//! `hfr classify` - compare a file against a stored fingerprint

use std::path::PathBuf;

use hfr_common::digest::digest_file;
use hfr_common::types::DigestAlgorithm;
use hfr_core::classify::classify;
use tracing::info;

use crate::error::{CliError, Result};

pub fn run(file: PathBuf, stored: String, digest: Option<String>) -> Result<()> {
    let algorithm = match digest {
        Some(name) => name.parse()?,
        None => DigestAlgorithm::default(),
    };

    if !file.is_file() {
        return Err(CliError::FileNotFound(file.display().to_string()));
    }

    let incoming = digest_file(&file, algorithm)?;
    let kind = classify(&stored, &incoming);

    info!(stored = %stored, incoming = %incoming, change = %kind, "Classified file");

    println!("{}", kind);
    Ok(())
}
