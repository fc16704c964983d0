//! `hfr fingerprint` - print the content fingerprint of a file

use std::path::PathBuf;

use hfr_common::digest::digest_file;
use hfr_common::types::DigestAlgorithm;

use crate::error::{CliError, Result};

pub fn run(file: PathBuf, digest: Option<String>) -> Result<()> {
    let algorithm = match digest {
        Some(name) => name.parse()?,
        None => DigestAlgorithm::default(),
    };

    if !file.is_file() {
        return Err(CliError::FileNotFound(file.display().to_string()));
    }

    let fingerprint = digest_file(&file, algorithm)?;
    println!("{}  {}", fingerprint, file.display());
    Ok(())
}
