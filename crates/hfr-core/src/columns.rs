//! Column projection
//!
//! Tokenizes table data rows and maps tokens positionally onto the fixed
//! 20-column schema. Column identity is positional; the annotation lines in
//! the source file are never parsed.

use crate::config::ParsePolicy;
use crate::document::Line;
use hfr_common::{HfrError, Result};
use serde::{Deserialize, Serialize};

/// Number of columns in the vector table schema
pub const COLUMN_COUNT: usize = 20;

/// Column names in positional order
pub const COLUMN_NAMES: [&str; COLUMN_COUNT] = [
    "Longitude",
    "Latitude",
    "UComp",
    "VComp",
    "VectorFlag",
    "UStdDev",
    "VStdDev",
    "Covariance",
    "XDistance",
    "YDistance",
    "Range",
    "Bearing",
    "Velocity",
    "Direction",
    "SiteContributers1",
    "SiteContributers2",
    "SiteContributers3",
    "SiteContributers4",
    "SiteContributers5",
    "SiteContributers6",
];

/// A rejected data row, surfaced on the measurement record under the
/// lenient parse policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDiagnostic {
    /// 1-based source line number
    pub line: usize,
    /// Human-readable rejection reason, including the offending token
    pub reason: String,
}

/// Column-major numeric table; every column holds exactly `row_count` values
#[derive(Debug, Clone, PartialEq)]
pub struct VectorTable {
    columns: Vec<Vec<f64>>,
}

impl VectorTable {
    fn new() -> Self {
        Self {
            columns: vec![Vec::new(); COLUMN_COUNT],
        }
    }

    pub fn row_count(&self) -> usize {
        self.columns[0].len()
    }

    /// Values of a column by schema name
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let index = COLUMN_NAMES.iter().position(|&n| n == name)?;
        Some(&self.columns[index])
    }

    /// Iterate columns in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[f64])> {
        COLUMN_NAMES
            .iter()
            .zip(&self.columns)
            .map(|(&name, values)| (name, values.as_slice()))
    }

    fn push_row(&mut self, row: [f64; COLUMN_COUNT]) {
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value);
        }
    }
}

/// Parse one data row into schema position order.
///
/// Tokens beyond the 20th are ignored (site files append free-form flags on
/// some rows); fewer than 20 tokens or a non-finite token is an error. `NaN`
/// and infinite tokens are rejected here so no placeholder value can reach
/// the statistics stage.
fn parse_row(line: &Line<'_>) -> Result<[f64; COLUMN_COUNT]> {
    let mut tokens = line.text.split_whitespace();
    let mut row = [0.0f64; COLUMN_COUNT];

    for (index, name) in COLUMN_NAMES.iter().enumerate() {
        let Some(token) = tokens.next() else {
            return Err(HfrError::RowArity {
                line: line.number,
                expected: COLUMN_COUNT,
                actual: index,
            });
        };

        let value: f64 = token.parse().map_err(|_| HfrError::NumericParse {
            line: line.number,
            column: name,
            token: token.to_string(),
        })?;

        if !value.is_finite() {
            return Err(HfrError::NumericParse {
                line: line.number,
                column: name,
                token: token.to_string(),
            });
        }

        row[index] = value;
    }

    Ok(row)
}

/// Project data rows onto the column schema.
///
/// Under [`ParsePolicy::Strict`] the first malformed row aborts with its
/// parse error. Under [`ParsePolicy::Lenient`] malformed rows are dropped
/// whole and reported as diagnostics; the returned table contains only rows
/// that parsed completely.
pub fn project_rows(
    rows: &[Line<'_>],
    policy: ParsePolicy,
) -> Result<(VectorTable, Vec<RowDiagnostic>)> {
    let mut table = VectorTable::new();
    let mut diagnostics = Vec::new();

    for line in rows {
        match parse_row(line) {
            Ok(row) => table.push_row(row),
            Err(err) => match policy {
                ParsePolicy::Strict => return Err(err),
                ParsePolicy::Lenient => diagnostics.push(RowDiagnostic {
                    line: line.number,
                    reason: err.to_string(),
                }),
            },
        }
    }

    Ok((table, diagnostics))
}
