//! Collaborator seams
//!
//! The surrounding system performs all I/O: it reads uploads, queries the
//! ledger for prior records, and queues assembled records for asynchronous
//! submission. The core only sees these traits, so tests run against
//! in-memory doubles and the pipeline never blocks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::MeasurementRecord;
use hfr_common::Result;

/// Handle returned by the dispatch collaborator for a queued submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle(pub Uuid);

impl JobHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read side of the ledger: the previously stored fingerprint for an asset
pub trait LedgerReader {
    fn stored_fingerprint(&self, id: &str) -> Result<Option<String>>;
}

/// Dispatch side: accepts an assembled record for asynchronous submission
pub trait RecordSink {
    fn submit(&self, record: &MeasurementRecord) -> Result<JobHandle>;
}
