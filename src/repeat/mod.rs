//! Per-contig repeat features.

pub mod dotplot;

use crate::config::FeatureConfig;
use crate::error::Result;
pub use dotplot::{dotplot_count, dotplot_scan, DotPlotScanner, DotPlotSummary};

/// Source of the `Nb_repeats` feature.
///
/// Implementations must be pure functions of the sequence so the feature
/// builder can call them from several threads at once.
pub trait RepeatCounter: Send + Sync {
    /// Repeat count for one contig, or `None` when the contig was not scanned.
    fn count_repeats(&self, id: &str, seq: &str) -> Result<Option<usize>>;

    fn name(&self) -> &'static str;
}

/// Build the repeat counter selected by the configuration, if any.
pub fn create_repeat_counter(config: &FeatureConfig) -> Result<Option<Box<dyn RepeatCounter>>> {
    if !config.detect_repeats {
        return Ok(None);
    }
    let scanner = DotPlotScanner::new(config.min_run_threshold)?
        .with_max_scan_len(config.max_repeat_scan_len);
    Ok(Some(Box::new(scanner)))
}
