//! Run records and aggregate statistics
//!
//! One record per empire per run, plus a per-algorithm summary across runs.
//! Both serialize to JSON for whatever store sits downstream.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::conquest::stats::EmpireStanding;
use crate::core::error::Result;
use crate::core::types::EmpireId;

/// One empire's result in one conquest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConquestRecord {
    pub run: u32,
    pub world: String,
    pub empire: EmpireId,
    pub algorithm: u8,
    pub size: u32,
    pub percentage: f64,
}

/// Build the records for one finished run, ordered by empire id. Empires
/// that ended with nothing on the board still get a zero record.
pub fn records_for_run(
    run: u32,
    world: &str,
    mapping: &BTreeMap<EmpireId, u8>,
    standings: &HashMap<EmpireId, EmpireStanding>,
) -> Vec<ConquestRecord> {
    mapping
        .iter()
        .map(|(&empire, &algorithm)| {
            let standing = standings.get(&empire).copied().unwrap_or(EmpireStanding {
                size: 0,
                percentage: 0.0,
            });
            ConquestRecord {
                run,
                world: world.to_string(),
                empire,
                algorithm,
                size: standing.size,
                percentage: standing.percentage,
            }
        })
        .collect()
}

/// Mean size and share for one algorithm across every record that used it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    pub algorithm: u8,
    pub samples: u32,
    pub mean_size: f64,
    pub mean_percentage: f64,
}

/// Aggregate records per algorithm, ordered by algorithm id.
pub fn algorithm_summary(records: &[ConquestRecord]) -> Vec<AlgorithmSummary> {
    let mut buckets: BTreeMap<u8, (u32, f64, f64)> = BTreeMap::new();
    for record in records {
        let bucket = buckets.entry(record.algorithm).or_insert((0, 0.0, 0.0));
        bucket.0 += 1;
        bucket.1 += f64::from(record.size);
        bucket.2 += record.percentage;
    }

    buckets
        .into_iter()
        .map(|(algorithm, (samples, size_sum, pct_sum))| AlgorithmSummary {
            algorithm,
            samples,
            mean_size: size_sum / f64::from(samples),
            mean_percentage: pct_sum / f64::from(samples),
        })
        .collect()
}

/// Write any report as pretty JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
