//! Table extraction
//!
//! Locates the `%TableStart:` marker and slices the fixed-layout table
//! region: 2 annotation lines after the marker, then the data rows, then an
//! 8-line trailing footer block (`%TableEnd:`, processing trailer, `%End:`).

use crate::document::{Line, RawDocument};
use hfr_common::{HfrError, Result};

/// Marker line prefix that opens the table region
pub const TABLE_START_MARKER: &str = "%TableStart:";

/// Column-name/units annotation lines directly after the marker
const ANNOTATION_LINES: usize = 2;

/// Fixed-length trailer block closing the table region
const FOOTER_LINES: usize = 8;

/// Extract the data rows of the vector table.
///
/// Fails with [`HfrError::TableMarkerNotFound`] when no marker line exists.
/// A region shorter than the annotation and footer windows yields an empty
/// row set, which is a valid (empty) measurement at this stage.
pub fn extract_data_rows(doc: &RawDocument) -> Result<Vec<Line<'_>>> {
    let mut lines = doc.lines();

    if !lines.any(|line| line.text.starts_with(TABLE_START_MARKER)) {
        return Err(HfrError::TableMarkerNotFound);
    }

    // `any` consumed up to and including the marker; the rest is the region.
    let region: Vec<Line<'_>> = lines.collect();

    if region.len() <= ANNOTATION_LINES + FOOTER_LINES {
        return Ok(Vec::new());
    }

    Ok(region[ANNOTATION_LINES..region.len() - FOOTER_LINES].to_vec())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn doc_with_region(region_lines: usize) -> RawDocument {
        let mut text = String::from("%Site: TOTL\n%TableStart:\n");
        for i in 0..region_lines {
            text.push_str(&format!("line{}\n", i));
        }
        // No trailing newline so the region is exactly `region_lines` long
        text.pop();
        RawDocument::new(text.into_bytes())
    }

    #[test]
    fn test_missing_marker_is_an_error() {
        let doc = RawDocument::new(b"%Site: TOTL\n1.0 2.0 3.0".to_vec());
        assert!(matches!(extract_data_rows(&doc), Err(HfrError::TableMarkerNotFound)));
    }

    #[test]
    fn test_row_count_is_region_minus_ten() {
        for region in [10usize, 11, 13, 42] {
            let doc = doc_with_region(region);
            let rows = extract_data_rows(&doc).unwrap();
            assert_eq!(rows.len(), region.saturating_sub(10), "region of {} lines", region);
        }
    }

    #[test]
    fn test_short_region_yields_no_rows() {
        for region in [0usize, 1, 9] {
            let doc = doc_with_region(region);
            assert!(extract_data_rows(&doc).unwrap().is_empty());
        }
    }

    #[test]
    fn test_rows_keep_source_line_numbers() {
        let doc = doc_with_region(11);
        let rows = extract_data_rows(&doc).unwrap();
        // Marker is line 2, annotations are lines 3-4, first data row is line 5
        assert_eq!(rows[0].number, 5);
        assert_eq!(rows[0].text, "line2");
    }
}
