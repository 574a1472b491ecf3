//! Assembly-level statistics computed once per contig set.

pub mod coverage;
pub mod gc;
pub mod length;
pub mod nstat;

use crate::contig::ContigSet;
use crate::error::Result;
use nstat::{l50_from_sorted, nx_from_sorted, sorted_descending, validate_percentile, NxValue};
use serde::Serialize;

/// Read-only snapshot of the length distribution of one assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyStatistics {
    pub contig_count: usize,
    pub total_length: usize,
    pub max_len: usize,
    pub min_len: usize,
    pub median_len: f64,
    pub mean_len: f64,
    pub n50: usize,
    pub n90: usize,
    /// 1-based rank of the first N50-length contig in descending order.
    pub l50: usize,
    /// Nx/Lx for every requested percentile, in request order.
    pub nx: Vec<NxValue>,
    /// Length-weighted GC% of the whole assembly. Only known when the
    /// sequences were available, so `None` from [`Self::from_lengths`].
    pub gc_percent: Option<f64>,
}

impl AssemblyStatistics {
    /// Compute statistics for a contig set; `percentiles` lists the extra Nx
    /// values to report (N50 and N90 are always computed).
    pub fn compute(contigs: &ContigSet, percentiles: &[f64]) -> Result<Self> {
        let mut stats = Self::from_lengths(&contigs.lengths(), percentiles)?;
        stats.gc_percent = Some(gc::gc_content_set(contigs)?);
        Ok(stats)
    }

    pub fn from_lengths(lengths: &[usize], percentiles: &[f64]) -> Result<Self> {
        for &p in percentiles {
            validate_percentile(p)?;
        }

        let summary = length::summarize_lengths(lengths)?;
        let sorted = sorted_descending(lengths);

        let n50 = nx_from_sorted(&sorted, summary.total, 50.0)?.nx;
        let n90 = nx_from_sorted(&sorted, summary.total, 90.0)?.nx;
        let l50 = l50_from_sorted(&sorted, n50)?;

        let nx = percentiles
            .iter()
            .map(|&p| nx_from_sorted(&sorted, summary.total, p))
            .collect::<Result<Vec<_>>>()?;

        Ok(AssemblyStatistics {
            contig_count: summary.count,
            total_length: summary.total,
            max_len: summary.max,
            min_len: summary.min,
            median_len: summary.median,
            mean_len: summary.mean,
            n50,
            n90,
            l50,
            nx,
            gc_percent: None,
        })
    }

    pub fn nx_for(&self, percentile: f64) -> Option<&NxValue> {
        self.nx.iter().find(|v| v.percentile == percentile)
    }
}
