//! Header metadata extraction
//!
//! Every line containing a `:` contributes a key/value pair: the text before
//! the first `:` (leading `%` stripped, trimmed) maps to the trimmed
//! remainder. Later duplicates overwrite earlier ones. `SiteSource` lines
//! are dropped; the upstream combiner emits one per contributing station and
//! the values are not meaningful at the measurement level.
//!
//! The scan covers the whole document by default. That is deliberate: the
//! `ProcessedTimeStamp` key lives in the trailer block after the table, so a
//! preamble-only scan loses it. The narrower scan is available via
//! [`HeaderScan::Preamble`] for consumers that cannot tolerate spurious keys
//! from table rows containing colons.

use std::collections::HashMap;

use crate::config::HeaderScan;
use crate::document::RawDocument;
use crate::table::TABLE_START_MARKER;
use hfr_common::{HfrError, Result};

/// Measurement creation time, as written by the acquisition site
pub const KEY_TIMESTAMP: &str = "TimeStamp";

/// Combiner processing time, found in the table trailer
pub const KEY_PROCESSED_TIMESTAMP: &str = "ProcessedTimeStamp";

/// Declared number of table rows
pub const KEY_TABLE_ROWS: &str = "TableRows";

/// Per-station key excluded from the header map
const EXCLUDED_KEY: &str = "SiteSource";

/// Key/value metadata extracted from colon-delimited lines
pub type HeaderMap = HashMap<String, String>;

/// Scan the document for header key/value pairs.
pub fn parse_header(doc: &RawDocument, scan: HeaderScan) -> HeaderMap {
    let mut header = HeaderMap::new();

    for line in doc.lines() {
        if scan == HeaderScan::Preamble && line.text.starts_with(TABLE_START_MARKER) {
            break;
        }

        let Some((raw_key, raw_value)) = line.text.split_once(':') else {
            continue;
        };

        let key = raw_key.trim();
        let key = key.strip_prefix('%').unwrap_or(key).trim();
        if key == EXCLUDED_KEY {
            continue;
        }

        header.insert(key.to_string(), raw_value.trim().to_string());
    }

    header
}

/// Parse the declared `TableRows` count from the header.
///
/// Absent key is `None`; a present but non-integer value is an error rather
/// than a silent placeholder.
pub fn series_count(header: &HeaderMap) -> Result<Option<u64>> {
    match header.get(KEY_TABLE_ROWS) {
        None => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| HfrError::SeriesCount {
                value: value.clone(),
            }),
    }
}
