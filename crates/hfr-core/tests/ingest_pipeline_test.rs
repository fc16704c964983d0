//! End-to-end ingestion tests against a sample total vector file

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use hfr_common::digest::digest_bytes;
use hfr_common::types::DigestAlgorithm;
use hfr_common::HfrError;
use hfr_core::classify::{apply_change, ChangeKind};
use hfr_core::collaborators::{JobHandle, LedgerReader, RecordSink};
use hfr_core::config::{IdentityScheme, IngestConfig, ParsePolicy};
use hfr_core::identity::SystemClock;
use hfr_core::pipeline::Pipeline;
use hfr_core::record::{MeasurementRecord, SOFTWARE_VERSION};

const FIXTURE: &str = "TOTL_IBIZ_2023_05_01_0000.tuv";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(FIXTURE)
}

fn fixture_bytes() -> Vec<u8> {
    std::fs::read(fixture_path()).expect("Failed to read fixture")
}

fn ingest_fixture(config: IngestConfig) -> MeasurementRecord {
    Pipeline::new(config)
        .ingest(FIXTURE, fixture_bytes(), "SOCIB", &SystemClock)
        .expect("Failed to ingest fixture")
}

// ============================================================================
// FULL PIPELINE
// ============================================================================

#[test]
fn test_ingest_assembles_complete_record() {
    let record = ingest_fixture(IngestConfig::default());

    assert_eq!(record.owner, "SOCIB");
    assert_eq!(record.filename, FIXTURE);
    assert_eq!(record.fingerprint, digest_bytes(&fixture_bytes(), DigestAlgorithm::Sha256));
    assert_eq!(record.id.len(), 64);
    assert_eq!(record.file_creation_time.as_deref(), Some("2023 05 01  00 00 00"));
    assert_eq!(record.processed_time.as_deref(), Some("2023 05 01  01 23 45"));
    assert_eq!(record.series_count, Some(3));
    assert_eq!(record.software_version, SOFTWARE_VERSION);
    assert_eq!(record.links, "");
    assert!(record.diagnostics.is_empty());
}

#[test]
fn test_ingest_extracts_three_data_rows() {
    let record = ingest_fixture(IngestConfig::default());

    assert_eq!(record.longitude, vec![1.0460266, 1.0575712, 1.0691158]);
    assert_eq!(record.latitude, vec![38.4823057, 38.4827217, 38.4831323]);

    // Every column is summarized over exactly those 3 rows
    assert_eq!(record.statistics.mean.len(), 20);
    let ucomp_mean = record.statistics.mean["UComp"];
    assert!((ucomp_mean - (-10.369 + -9.858 + -8.836) / 3.0).abs() < 1e-9);
    assert_eq!(record.statistics.min["UComp"], -10.369);
    assert_eq!(record.statistics.max["UComp"], -8.836);
    // Evenly spaced longitudes: mean equals the middle value
    assert!((record.statistics.mean["Longitude"] - 1.0575712).abs() < 1e-9);
    assert_eq!(record.statistics.standard_deviation["YDistance"], 0.0);
}

#[test]
fn test_header_covers_trailer_but_never_site_source() {
    let record = ingest_fixture(IngestConfig::default());

    assert_eq!(record.header.get("Site").map(String::as_str), Some("TOTL \"\""));
    assert_eq!(record.header.get("TableColumns").map(String::as_str), Some("20"));
    // Trailer keys are only reachable because the scan covers the whole document
    assert!(record.header.contains_key("ProcessedTimeStamp"));
    assert!(record.header.contains_key("End"));
    assert!(!record.header.contains_key("SiteSource"));
}

#[test]
fn test_fingerprint_is_stable_across_ingestions() {
    let first = ingest_fixture(IngestConfig::default());
    let second = ingest_fixture(IngestConfig::default());
    assert_eq!(first.fingerprint, second.fingerprint);
}

#[test]
fn test_content_addressed_identity_is_idempotent() {
    let config = IngestConfig::builder()
        .identity(IdentityScheme::ContentAddressed)
        .build();
    let first = ingest_fixture(config);
    let second = ingest_fixture(config);
    assert_eq!(first.id, second.id);
}

// ============================================================================
// FAILURE PATHS
// ============================================================================

#[test]
fn test_missing_marker_aborts_ingestion() {
    let content = String::from_utf8(fixture_bytes())
        .unwrap()
        .replace("%TableStart:", "%TableResume:");

    let result =
        Pipeline::new(IngestConfig::default()).ingest(FIXTURE, content.into_bytes(), "SOCIB", &SystemClock);

    assert!(matches!(result, Err(HfrError::TableMarkerNotFound)));
}

#[test]
fn test_empty_table_aborts_ingestion() {
    let content = "%TimeStamp: 2023 05 01  00 00 00\n%TableStart:\n%%\n%%\n%TableEnd:\n%End:\n";

    let result = Pipeline::new(IngestConfig::default()).ingest(
        FIXTURE,
        content.as_bytes().to_vec(),
        "SOCIB",
        &SystemClock,
    );

    assert!(matches!(result, Err(HfrError::EmptyTable)));
}

#[test]
fn test_truncated_row_lenient_vs_strict() {
    // Truncate the second data row to 18 tokens
    let content = String::from_utf8(fixture_bytes()).unwrap().replace(
        "   1.0575712  38.4827217   -9.858   -1.649     0     1.910   1.596  -0.650  -14.0000  -36.0000  38.6265  201.3   9.995  260.5  1  2  0  0  0  0",
        "   1.0575712  38.4827217   -9.858   -1.649     0     1.910   1.596  -0.650  -14.0000  -36.0000  38.6265  201.3   9.995  260.5  1  2  0  0",
    );
    let bytes = content.into_bytes();

    let lenient = Pipeline::new(IngestConfig::default())
        .ingest(FIXTURE, bytes.clone(), "SOCIB", &SystemClock)
        .expect("lenient ingestion should succeed");

    // Statistics cover the two intact rows only; the rejection is surfaced
    assert_eq!(lenient.longitude, vec![1.0460266, 1.0691158]);
    assert_eq!(lenient.diagnostics.len(), 1);
    assert_eq!(lenient.diagnostics[0].line, 20);
    assert!((lenient.statistics.mean["UComp"] - (-10.369 + -8.836) / 2.0).abs() < 1e-9);

    let strict_config = IngestConfig::builder().parse_policy(ParsePolicy::Strict).build();
    let strict = Pipeline::new(strict_config).ingest(FIXTURE, bytes, "SOCIB", &SystemClock);
    assert!(matches!(strict, Err(HfrError::RowArity { line: 20, expected: 20, actual: 18 })));
}

// ============================================================================
// RE-SUBMISSION AGAINST THE LEDGER SEAM
// ============================================================================

/// In-memory ledger double
struct InMemoryLedger {
    fingerprints: HashMap<String, String>,
}

impl LedgerReader for InMemoryLedger {
    fn stored_fingerprint(&self, id: &str) -> hfr_common::Result<Option<String>> {
        Ok(self.fingerprints.get(id).cloned())
    }
}

/// Record sink double that collects submissions
#[derive(Default)]
struct CollectingSink {
    submitted: RefCell<Vec<MeasurementRecord>>,
}

impl RecordSink for CollectingSink {
    fn submit(&self, record: &MeasurementRecord) -> hfr_common::Result<JobHandle> {
        self.submitted.borrow_mut().push(record.clone());
        Ok(JobHandle::new())
    }
}

#[test]
fn test_resubmission_of_identical_bytes_is_a_transfer() {
    let existing = ingest_fixture(IngestConfig::default());
    let ledger = InMemoryLedger {
        fingerprints: HashMap::from([(existing.id.clone(), existing.fingerprint.clone())]),
    };

    let incoming = ingest_fixture(IngestConfig::default());
    let stored = ledger.stored_fingerprint(&existing.id).unwrap().unwrap();
    assert_eq!(stored, incoming.fingerprint);

    let (kind, record) = apply_change(&existing, incoming, "IMEDEA");

    assert_eq!(kind, ChangeKind::OwnershipTransfer);
    assert_eq!(record.owner, "IMEDEA");
    assert_eq!(record.id, existing.id);
    assert_eq!(record.statistics, existing.statistics);

    let sink = CollectingSink::default();
    let first = sink.submit(&record).unwrap();
    let second = sink.submit(&record).unwrap();
    assert_ne!(first, second);
    assert_eq!(sink.submitted.borrow().len(), 2);
    assert_eq!(sink.submitted.borrow()[0].owner, "IMEDEA");
}

#[test]
fn test_single_byte_change_is_a_content_update() {
    let existing = ingest_fixture(IngestConfig::default());

    // Flip one byte of one velocity value
    let content = String::from_utf8(fixture_bytes()).unwrap().replace("10.387", "10.388");
    let incoming = Pipeline::new(IngestConfig::default())
        .ingest(FIXTURE, content.into_bytes(), "SOCIB", &SystemClock)
        .unwrap();

    assert_ne!(incoming.fingerprint, existing.fingerprint);

    let (kind, record) = apply_change(&existing, incoming.clone(), "SOCIB");

    assert_eq!(kind, ChangeKind::ContentUpdate);
    assert_eq!(record.id, existing.id);
    assert_eq!(record.fingerprint, incoming.fingerprint);
    assert_eq!(record.statistics, incoming.statistics);
}
