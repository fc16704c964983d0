//! Content fingerprinting for measurement files
//!
//! A fingerprint is the lowercase hex digest of the raw file bytes under a
//! single configured algorithm. Identical bytes always yield identical
//! fingerprints; fingerprints are compared only with exact string equality.

use crate::error::Result;
use crate::types::DigestAlgorithm;
use sha2::{Digest, Sha256, Sha512};
use std::io::Read;
use std::path::Path;

/// Compute the fingerprint of an in-memory byte slice
pub fn digest_bytes(data: &[u8], algorithm: DigestAlgorithm) -> String {
    match algorithm {
        DigestAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            hex::encode(hasher.finalize())
        },
        DigestAlgorithm::Sha512 => {
            let mut hasher = Sha512::new();
            hasher.update(data);
            hex::encode(hasher.finalize())
        },
    }
}

/// Compute the fingerprint of any readable source
pub fn digest_reader<R: Read>(reader: &mut R, algorithm: DigestAlgorithm) -> Result<String> {
    match algorithm {
        DigestAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            let mut buffer = [0u8; 8192];

            loop {
                let bytes_read = reader.read(&mut buffer)?;
                if bytes_read == 0 {
                    break;
                }
                hasher.update(&buffer[..bytes_read]);
            }

            Ok(hex::encode(hasher.finalize()))
        },
        DigestAlgorithm::Sha512 => {
            let mut hasher = Sha512::new();
            let mut buffer = [0u8; 8192];

            loop {
                let bytes_read = reader.read(&mut buffer)?;
                if bytes_read == 0 {
                    break;
                }
                hasher.update(&buffer[..bytes_read]);
            }

            Ok(hex::encode(hasher.finalize()))
        },
    }
}

/// Compute the fingerprint of a file
pub fn digest_file(path: impl AsRef<Path>, algorithm: DigestAlgorithm) -> Result<String> {
    let mut file = std::fs::File::open(path)?;
    digest_reader(&mut file, algorithm)
}
