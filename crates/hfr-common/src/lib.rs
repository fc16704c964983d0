//! HFR Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the HFR workspace.
//!
//! # Overview
//!
//! This crate provides functionality used across all HFR workspace members:
//!
//! - **Error Handling**: The workspace error type and result alias
//! - **Digests**: Content fingerprinting over raw measurement bytes
//! - **Logging**: Tracing subscriber configuration and initialization
//!
//! # Example
//!
//! ```no_run
//! use hfr_common::{digest, types::DigestAlgorithm, Result};
//!
//! fn fingerprint_file(path: &str) -> Result<String> {
//!     let fingerprint = digest::digest_file(path, DigestAlgorithm::Sha256)?;
//!     Ok(fingerprint)
//! }
//! ```

pub mod digest;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{HfrError, Result};
