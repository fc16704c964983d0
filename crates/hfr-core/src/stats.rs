//! Summary statistics
//!
//! Per-column mean, min, max, and population standard deviation (divisor is
//! the row count, not row count minus one). A table with zero usable rows is
//! an explicit error; the division by zero is never allowed to surface as
//! NaN or infinity.

use std::collections::BTreeMap;

use crate::columns::VectorTable;
use hfr_common::{HfrError, Result};
use serde::{Deserialize, Serialize};

/// Four named numeric mappings, each keyed by the 20 schema column names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean: BTreeMap<String, f64>,
    pub min: BTreeMap<String, f64>,
    pub max: BTreeMap<String, f64>,
    #[serde(rename = "standardDeviation")]
    pub standard_deviation: BTreeMap<String, f64>,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Compute the per-column summary over all retained rows.
pub fn summarize(table: &VectorTable) -> Result<StatisticsSummary> {
    if table.row_count() == 0 {
        return Err(HfrError::EmptyTable);
    }

    let mut summary = StatisticsSummary {
        mean: BTreeMap::new(),
        min: BTreeMap::new(),
        max: BTreeMap::new(),
        standard_deviation: BTreeMap::new(),
    };

    for (name, values) in table.iter() {
        summary.mean.insert(name.to_string(), mean(values));
        summary
            .min
            .insert(name.to_string(), values.iter().copied().fold(f64::INFINITY, f64::min));
        summary
            .max
            .insert(name.to_string(), values.iter().copied().fold(f64::NEG_INFINITY, f64::max));
        summary
            .standard_deviation
            .insert(name.to_string(), population_std_dev(values));
    }

    Ok(summary)
}
