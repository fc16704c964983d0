//! Ingestion pipeline
//!
//! Orchestrates one synchronous pass from raw bytes to a
//! [`MeasurementRecord`]: fingerprint the bytes, scan the header, slice the
//! table, project the columns, summarize, derive the identity, assemble.
//! The pipeline holds no state between invocations; concurrent ingestions of
//! independent documents never contend.

use tracing::{info, instrument, warn};

use crate::columns::project_rows;
use crate::config::IngestConfig;
use crate::document::RawDocument;
use crate::header::{parse_header, series_count, KEY_PROCESSED_TIMESTAMP, KEY_TIMESTAMP};
use crate::identity::{generate_id, Clock};
use crate::record::{MeasurementRecord, SOFTWARE_VERSION};
use crate::stats::summarize;
use crate::table::extract_data_rows;
use hfr_common::digest::digest_bytes;
use hfr_common::Result;

/// One configured ingestion pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: IngestConfig,
}

impl Pipeline {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Ingest one measurement file.
    ///
    /// Fails on a missing table marker, on a malformed row under the strict
    /// policy, and on a table with zero usable rows; no partial record is
    /// produced in those cases.
    #[instrument(skip(self, bytes, clock), fields(filename = %filename, size = bytes.len()))]
    pub fn ingest(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        owner: &str,
        clock: &dyn Clock,
    ) -> Result<MeasurementRecord> {
        let fingerprint = digest_bytes(&bytes, self.config.digest);
        let document = RawDocument::new(bytes);

        let header = parse_header(&document, self.config.header_scan);
        let rows = extract_data_rows(&document)?;
        let (table, diagnostics) = project_rows(&rows, self.config.parse_policy)?;

        if !diagnostics.is_empty() {
            warn!(
                rejected = diagnostics.len(),
                parsed = table.row_count(),
                "Rejected malformed data rows"
            );
        }

        let statistics = summarize(&table)?;
        let series_count = series_count(&header)?;
        let id = generate_id(filename, &fingerprint, self.config.identity, self.config.digest, clock);

        let longitude = table.column("Longitude").unwrap_or_default().to_vec();
        let latitude = table.column("Latitude").unwrap_or_default().to_vec();

        let record = MeasurementRecord {
            id,
            owner: owner.to_string(),
            fingerprint,
            filename: filename.to_string(),
            file_creation_time: header.get(KEY_TIMESTAMP).cloned(),
            processed_time: header.get(KEY_PROCESSED_TIMESTAMP).cloned(),
            header,
            longitude,
            latitude,
            statistics,
            series_count,
            software_version: SOFTWARE_VERSION,
            links: String::new(),
            diagnostics,
        };

        info!(
            id = %record.id,
            fingerprint = %record.fingerprint,
            rows = record.longitude.len(),
            "Measurement ingested"
        );

        Ok(record)
    }
}
