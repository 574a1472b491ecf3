use crate::contig::Contig;
use crate::error::{FeatureError, Result};
use crate::repeat::RepeatCounter;
use crate::stats::AssemblyStatistics;

/// Feature row for one contig. Column names live in `FEATURE_COLUMNS`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub id: String,
    pub length: usize,
    pub dev_from_max: usize,
    pub dev_from_min: usize,
    pub dev_from_avg: f64,
    pub dev_from_median: f64,
    /// Length over N50 (a ratio, not a difference).
    pub dev_from_n50: f64,
    /// Length over the L50 rank.
    pub dev_from_l50: f64,
    pub repeat_count: Option<usize>,
}

impl FeatureVector {
    /// Derive the length features of `contig` from shared statistics and,
    /// when a counter is given, its repeat count.
    pub fn compute(
        contig: &Contig,
        stats: &AssemblyStatistics,
        repeats: Option<&dyn RepeatCounter>,
    ) -> Result<Self> {
        let len = contig.len();

        let dev_from_max = stats.max_len.checked_sub(len).ok_or_else(|| {
            FeatureError::InvalidInput(format!(
                "contig '{}' ({} bp) is longer than the assembly maximum {}",
                contig.id, len, stats.max_len
            ))
        })?;
        let dev_from_min = len.checked_sub(stats.min_len).ok_or_else(|| {
            FeatureError::InvalidInput(format!(
                "contig '{}' ({} bp) is shorter than the assembly minimum {}",
                contig.id, len, stats.min_len
            ))
        })?;

        if stats.n50 == 0 {
            return Err(FeatureError::Division(
                "N50 is zero; length ratio is undefined".into(),
            ));
        }
        if stats.l50 == 0 {
            return Err(FeatureError::Division(
                "L50 is zero; length ratio is undefined".into(),
            ));
        }

        let repeat_count = match repeats {
            Some(counter) => counter.count_repeats(&contig.id, &contig.sequence)?,
            None => None,
        };

        Ok(FeatureVector {
            id: contig.id.clone(),
            length: len,
            dev_from_max,
            dev_from_min,
            dev_from_avg: (len as f64 - stats.mean_len).abs(),
            dev_from_median: (len as f64 - stats.median_len).abs(),
            dev_from_n50: len as f64 / stats.n50 as f64,
            dev_from_l50: len as f64 / stats.l50 as f64,
            repeat_count,
        })
    }
}
