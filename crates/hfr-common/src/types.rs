//! Common types used across the HFR workspace

use serde::{Deserialize, Serialize};

/// Digest algorithm used for content fingerprints.
///
/// The same algorithm must be used everywhere fingerprints are produced or
/// compared; it is carried in the ingest configuration rather than chosen
/// per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestAlgorithm::Sha256 => write!(f, "sha256"),
            DigestAlgorithm::Sha512 => write!(f, "sha512"),
        }
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = crate::HfrError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "sha512" | "sha-512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(crate::HfrError::config(format!("Invalid digest algorithm: {}", s))),
        }
    }
}
