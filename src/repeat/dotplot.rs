//! Self dot-plot scan counting repeated diagonal runs inside one contig.
//!
//! Cell `(i, j)` of the self-comparison matrix matches when `s[i] == s[j]`.
//! Off-diagonal runs of matches are repeated substrings at different offsets.
//! Only one row of run lengths is kept: `run[j]` holds the length of the
//! match diagonal ending at `(i, j)`, and scanning `j` from right to left
//! lets `run[j - 1]` still refer to the previous row.

use crate::error::{FeatureError, Result};
use crate::repeat::RepeatCounter;
use tracing::warn;

pub const DEFAULT_MIN_RUN: usize = 6;

/// Contigs longer than this are skipped unless the bound is changed.
pub const DEFAULT_MAX_SCAN_LEN: usize = 50_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotPlotSummary {
    /// Completed diagonal runs of at least the minimum length.
    pub runs: usize,
    /// Summed length of those runs.
    pub total_run_length: usize,
}

/// Scan `seq` against itself and count diagonal runs of length `>= min_run`.
/// Bases are compared case-insensitively. O(n²) time, O(n) memory.
pub fn dotplot_scan(seq: &[u8], min_run: usize) -> DotPlotSummary {
    let s: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();
    let n = s.len();
    let mut run = vec![0usize; n];
    let mut summary = DotPlotSummary::default();

    for i in 0..n {
        for j in (0..n).rev() {
            if i == j {
                run[j] = 0;
                continue;
            }

            // Run that ended on the last column in the previous row
            if j == n - 1 && run[j] >= min_run {
                summary.runs += 1;
                summary.total_run_length += run[j];
            }

            if s[i] == s[j] {
                run[j] = if j > 0 { run[j - 1] + 1 } else { 1 };
            } else {
                if j > 0 && run[j - 1] >= min_run {
                    summary.runs += 1;
                    summary.total_run_length += run[j - 1];
                }
                run[j] = 0;
            }
        }
    }

    summary
}

pub fn dotplot_count(seq: &str, min_run: usize) -> usize {
    dotplot_scan(seq.as_bytes(), min_run).runs
}

/// Dot-plot backed repeat counter with a length guard for the O(n²) scan.
#[derive(Debug, Clone)]
pub struct DotPlotScanner {
    min_run: usize,
    max_scan_len: Option<usize>,
}

impl DotPlotScanner {
    pub fn new(min_run: usize) -> Result<Self> {
        if min_run == 0 {
            return Err(FeatureError::InvalidInput(
                "dot-plot minimum run length must be at least 1".into(),
            ));
        }
        Ok(DotPlotScanner {
            min_run,
            max_scan_len: Some(DEFAULT_MAX_SCAN_LEN),
        })
    }

    /// `None` scans every contig regardless of length.
    pub fn with_max_scan_len(mut self, max_scan_len: Option<usize>) -> Self {
        self.max_scan_len = max_scan_len;
        self
    }

    pub fn scan(&self, seq: &str) -> Option<DotPlotSummary> {
        match self.max_scan_len {
            Some(limit) if seq.len() > limit => None,
            _ => Some(dotplot_scan(seq.as_bytes(), self.min_run)),
        }
    }
}

impl RepeatCounter for DotPlotScanner {
    fn count_repeats(&self, id: &str, seq: &str) -> Result<Option<usize>> {
        match self.scan(seq) {
            Some(summary) => Ok(Some(summary.runs)),
            None => {
                warn!(
                    "Skipping repeat scan for {} ({} bp exceeds limit of {} bp)",
                    id,
                    seq.len(),
                    self.max_scan_len.unwrap_or_default()
                );
                Ok(None)
            }
        }
    }

    fn name(&self) -> &'static str {
        "dotplot"
    }
}
