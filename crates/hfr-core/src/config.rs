//! Ingest configuration
//!
//! Every behavioral choice the legacy system hard-coded (or got wrong) is an
//! explicit flag here: the digest algorithm, the malformed-row policy, the
//! header scan scope, and the identity scheme. Defaults preserve observed
//! legacy behavior except where the redesign mandates otherwise.

use hfr_common::types::DigestAlgorithm;
use hfr_common::{HfrError, Result};
use serde::{Deserialize, Serialize};

/// Policy for data rows that do not match the 20-column numeric schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Abort the whole ingestion on the first malformed row
    Strict,
    /// Reject the offending row, record a diagnostic on the record, and
    /// compute statistics over the successfully parsed rows only
    #[default]
    Lenient,
}

impl std::str::FromStr for ParsePolicy {
    type Err = HfrError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ParsePolicy::Strict),
            "lenient" => Ok(ParsePolicy::Lenient),
            _ => Err(HfrError::config(format!("Invalid parse policy: {}", s))),
        }
    }
}

/// Scope of the header key/value scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderScan {
    /// Scan every line, including the table region and trailer (legacy
    /// behavior; required to pick up `ProcessedTimeStamp` from the trailer)
    #[default]
    WholeDocument,
    /// Stop at the `%TableStart:` marker
    Preamble,
}

impl std::str::FromStr for HeaderScan {
    type Err = HfrError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whole-document" | "whole" => Ok(HeaderScan::WholeDocument),
            "preamble" => Ok(HeaderScan::Preamble),
            _ => Err(HfrError::config(format!("Invalid header scan scope: {}", s))),
        }
    }
}

/// Scheme for deriving a measurement identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityScheme {
    /// Digest of `{filename}-{unix_millis}-{fingerprint}` (legacy; two
    /// ingestions of identical bytes get distinct ids)
    #[default]
    Timestamped,
    /// Digest of `{filename}-{fingerprint}`; idempotent re-ingestion
    ContentAddressed,
}

impl std::str::FromStr for IdentityScheme {
    type Err = HfrError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timestamped" => Ok(IdentityScheme::Timestamped),
            "content-addressed" | "content" => Ok(IdentityScheme::ContentAddressed),
            _ => Err(HfrError::config(format!("Invalid identity scheme: {}", s))),
        }
    }
}

/// Configuration for one ingestion pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IngestConfig {
    /// Digest algorithm for fingerprints and identity digests alike
    pub digest: DigestAlgorithm,

    /// Malformed-row policy
    pub parse_policy: ParsePolicy,

    /// Header scan scope
    pub header_scan: HeaderScan,

    /// Identity derivation scheme
    pub identity: IdentityScheme,
}

impl IngestConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `HFR_DIGEST`: digest algorithm (sha256, sha512)
    /// - `HFR_PARSE_POLICY`: malformed-row policy (strict, lenient)
    /// - `HFR_HEADER_SCAN`: header scan scope (whole-document, preamble)
    /// - `HFR_IDENTITY`: identity scheme (timestamped, content-addressed)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(digest) = std::env::var("HFR_DIGEST") {
            config.digest = digest.parse()?;
        }

        if let Ok(policy) = std::env::var("HFR_PARSE_POLICY") {
            config.parse_policy = policy.parse()?;
        }

        if let Ok(scan) = std::env::var("HFR_HEADER_SCAN") {
            config.header_scan = scan.parse()?;
        }

        if let Ok(identity) = std::env::var("HFR_IDENTITY") {
            config.identity = identity.parse()?;
        }

        Ok(config)
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> IngestConfigBuilder {
        IngestConfigBuilder::default()
    }
}

/// Builder for IngestConfig
#[derive(Default)]
pub struct IngestConfigBuilder {
    config: IngestConfig,
}

impl IngestConfigBuilder {
    pub fn digest(mut self, digest: DigestAlgorithm) -> Self {
        self.config.digest = digest;
        self
    }

    pub fn parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.config.parse_policy = policy;
        self
    }

    pub fn header_scan(mut self, scan: HeaderScan) -> Self {
        self.config.header_scan = scan;
        self
    }

    pub fn identity(mut self, scheme: IdentityScheme) -> Self {
        self.config.identity = scheme;
        self
    }

    pub fn build(self) -> IngestConfig {
        self.config
    }
}
