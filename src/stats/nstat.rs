//! N-statistics (N50, N90, generic Nx) and the L50 rank.

use crate::error::{FeatureError, Result};
use serde::Serialize;

/// Nx length and the rank at which its cumulative threshold was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NxValue {
    pub percentile: f64,
    pub nx: usize,
    pub lx: usize,
}

pub fn sorted_descending(lengths: &[usize]) -> Vec<usize> {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

pub fn validate_percentile(percentile: f64) -> Result<()> {
    if !(percentile > 0.0 && percentile <= 100.0) {
        return Err(FeatureError::InvalidInput(format!(
            "N-statistic percentile must be in (0, 100], got {}",
            percentile
        )));
    }
    Ok(())
}

/// Walk a descending length list until the cumulative sum reaches
/// `percentile`% of `total` (inclusive).
pub fn nx_from_sorted(sorted: &[usize], total: usize, percentile: f64) -> Result<NxValue> {
    validate_percentile(percentile)?;
    if sorted.is_empty() {
        return Err(FeatureError::EmptyInput(format!(
            "N{} of an empty contig set",
            percentile
        )));
    }

    // Compare cumulative * 100 against total * percentile so integer
    // percentiles stay exact.
    let threshold = total as f64 * percentile;
    let mut cumulative = 0usize;
    for (i, &len) in sorted.iter().enumerate() {
        cumulative += len;
        if cumulative as f64 * 100.0 >= threshold {
            return Ok(NxValue {
                percentile,
                nx: len,
                lx: i + 1,
            });
        }
    }

    Err(FeatureError::UndefinedStatistic(format!(
        "cumulative length {} never reached N{} threshold of {}",
        cumulative,
        percentile,
        threshold / 100.0
    )))
}

pub fn nx(lengths: &[usize], percentile: f64) -> Result<usize> {
    let sorted = sorted_descending(lengths);
    let total = sorted.iter().sum();
    nx_from_sorted(&sorted, total, percentile).map(|v| v.nx)
}

pub fn n50(lengths: &[usize]) -> Result<usize> {
    nx(lengths, 50.0)
}

pub fn n90(lengths: &[usize]) -> Result<usize> {
    nx(lengths, 90.0)
}

/// 1-based index of the first entry in the descending list equal to `n50`.
/// With tied lengths the lowest index wins.
pub fn l50_from_sorted(sorted: &[usize], n50: usize) -> Result<usize> {
    sorted
        .iter()
        .position(|&len| len == n50)
        .map(|idx| idx + 1)
        .ok_or_else(|| {
            FeatureError::UndefinedStatistic(format!(
                "N50 length {} does not occur in the length list",
                n50
            ))
        })
}

pub fn l50(lengths: &[usize]) -> Result<usize> {
    let sorted = sorted_descending(lengths);
    let total = sorted.iter().sum();
    let n50 = nx_from_sorted(&sorted, total, 50.0)?.nx;
    l50_from_sorted(&sorted, n50)
}
