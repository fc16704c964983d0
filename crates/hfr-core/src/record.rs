//! Measurement record
//!
//! The aggregate produced by one successful ingestion and handed to the
//! ledger-submission collaborator. Records are values: an update never
//! mutates a stored record in place, it produces a replacement.

use serde::{Deserialize, Serialize};

use crate::columns::RowDiagnostic;
use crate::header::HeaderMap;
use crate::stats::StatisticsSummary;

/// Schema version written into every record
pub const SOFTWARE_VERSION: i32 = 1;

/// One ingested measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Measurement identity (hex digest, see `identity`)
    pub id: String,

    /// Owning organization
    pub owner: String,

    /// Content fingerprint of the raw file bytes
    pub fingerprint: String,

    /// Original upload filename
    pub filename: String,

    /// Acquisition time as written in the file header (`TimeStamp`)
    pub file_creation_time: Option<String>,

    /// Full key/value header metadata
    pub header: HeaderMap,

    /// Longitude column values, in row order
    pub longitude: Vec<f64>,

    /// Latitude column values, in row order
    pub latitude: Vec<f64>,

    /// Combiner processing time from the trailer (`ProcessedTimeStamp`)
    pub processed_time: Option<String>,

    /// Per-column summary statistics
    pub statistics: StatisticsSummary,

    /// Row count declared by the file header (`TableRows`)
    pub series_count: Option<u64>,

    /// Schema version constant
    pub software_version: i32,

    /// Reserved for external resource links; currently always empty
    pub links: String,

    /// Rows rejected under the lenient parse policy
    pub diagnostics: Vec<RowDiagnostic>,
}
