use crate::error::{FeatureError, Result};

/// Elementary aggregates over a length distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthSummary {
    pub count: usize,
    pub total: usize,
    pub max: usize,
    pub min: usize,
    pub median: f64,
    pub mean: f64,
}

pub fn max_length(lengths: &[usize]) -> Result<usize> {
    lengths
        .iter()
        .copied()
        .max()
        .ok_or_else(|| FeatureError::EmptyInput("maximum length of an empty contig set".into()))
}

pub fn min_length(lengths: &[usize]) -> Result<usize> {
    lengths
        .iter()
        .copied()
        .min()
        .ok_or_else(|| FeatureError::EmptyInput("minimum length of an empty contig set".into()))
}

/// Total length divided by contig count.
pub fn mean_length(lengths: &[usize]) -> Result<f64> {
    if lengths.is_empty() {
        return Err(FeatureError::Division(
            "mean length of an empty contig set".into(),
        ));
    }
    let total: usize = lengths.iter().sum();
    Ok(total as f64 / lengths.len() as f64)
}

/// Standard median: the middle value, or the average of the two middle
/// values for an even count.
pub fn median_length(lengths: &[usize]) -> Result<f64> {
    if lengths.is_empty() {
        return Err(FeatureError::EmptyInput(
            "median length of an empty contig set".into(),
        ));
    }
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    } else {
        Ok(sorted[mid] as f64)
    }
}

pub fn summarize_lengths(lengths: &[usize]) -> Result<LengthSummary> {
    if lengths.is_empty() {
        return Err(FeatureError::EmptyInput(
            "length statistics need at least one contig".into(),
        ));
    }
    Ok(LengthSummary {
        count: lengths.len(),
        total: lengths.iter().sum(),
        max: max_length(lengths)?,
        min: min_length(lengths)?,
        median: median_length(lengths)?,
        mean: mean_length(lengths)?,
    })
}
