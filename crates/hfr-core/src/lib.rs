//! HFR Measurement Ingestion Core
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Parses oceanographic high-frequency-radar total vector files (`.tuv`),
//! computes per-column summary statistics, and derives the content
//! fingerprint used as measurement identity and deduplication key.
//!
//! The pipeline is a synchronous, side-effect-free transformation of raw
//! bytes into a [`record::MeasurementRecord`]; all I/O (reading files,
//! fetching prior records, submitting to the ledger) belongs to external
//! collaborators behind the seams in [`collaborators`]. The only ambient
//! dependency is the wall clock, injected via [`identity::Clock`].
//!
//! # Example
//!
//! ```no_run
//! use hfr_core::config::IngestConfig;
//! use hfr_core::identity::SystemClock;
//! use hfr_core::pipeline::Pipeline;
//!
//! fn main() -> hfr_common::Result<()> {
//!     let bytes = std::fs::read("TOTL_IBIZ_2023_05_01_0000.tuv")?;
//!     let pipeline = Pipeline::new(IngestConfig::default());
//!     let record =
//!         pipeline.ingest("TOTL_IBIZ_2023_05_01_0000.tuv", bytes, "SOCIB", &SystemClock)?;
//!     println!("{}", serde_json::to_string_pretty(&record)?);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod collaborators;
pub mod columns;
pub mod config;
pub mod document;
pub mod header;
pub mod identity;
pub mod pipeline;
pub mod record;
pub mod stats;
pub mod table;

// Re-export commonly used types
pub use classify::ChangeKind;
pub use config::IngestConfig;
pub use pipeline::Pipeline;
pub use record::MeasurementRecord;
