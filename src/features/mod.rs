//! Feature vector builder: one row per contig from shared assembly statistics.

pub mod table;
pub mod vector;

use crate::config::FeatureConfig;
use crate::contig::ContigSet;
use crate::error::Result;
use crate::repeat::{create_repeat_counter, RepeatCounter};
use crate::stats::AssemblyStatistics;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

pub use table::{FeatureTable, FEATURE_COLUMNS, REPEAT_COLUMN};
pub use vector::FeatureVector;

/// Computes feature tables for contig sets.
///
/// Rows are computed on the rayon pool and kept in contig-set order. The
/// first failing row aborts the batch.
pub struct FeatureBuilder {
    config: FeatureConfig,
    repeats: Option<Box<dyn RepeatCounter>>,
}

impl FeatureBuilder {
    pub fn new(config: FeatureConfig) -> Result<Self> {
        config.validate()?;
        let repeats = create_repeat_counter(&config)?;
        Ok(FeatureBuilder { config, repeats })
    }

    /// Replace the repeat source used for `Nb_repeats`.
    pub fn with_repeat_counter(mut self, counter: Box<dyn RepeatCounter>) -> Self {
        self.repeats = Some(counter);
        self
    }

    pub fn statistics(&self, contigs: &ContigSet) -> Result<AssemblyStatistics> {
        if self.config.strict_alphabet {
            contigs.validate_alphabet()?;
        }
        AssemblyStatistics::compute(contigs, &self.config.n_percentiles)
    }

    pub fn build(&self, contigs: &ContigSet) -> Result<FeatureTable> {
        let stats = self.statistics(contigs)?;
        self.build_with_statistics(contigs, &stats)
    }

    /// Build rows against statistics computed earlier for the same set.
    pub fn build_with_statistics(
        &self,
        contigs: &ContigSet,
        stats: &AssemblyStatistics,
    ) -> Result<FeatureTable> {
        let start = Instant::now();
        let limit = self
            .config
            .max_contigs_per_batch
            .unwrap_or(contigs.len())
            .min(contigs.len());
        if limit < contigs.len() {
            info!(
                "Limiting feature rows to the first {} of {} contigs",
                limit,
                contigs.len()
            );
        }

        let repeats = self.repeats.as_deref();
        if let Some(counter) = repeats {
            debug!("Counting repeats with the {} backend", counter.name());
        }

        let rows = contigs.as_slice()[..limit]
            .par_iter()
            .map(|contig| FeatureVector::compute(contig, stats, repeats))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Computed {} feature rows in {:.2}s",
            rows.len(),
            start.elapsed().as_secs_f32()
        );

        Ok(FeatureTable::new(rows, repeats.is_some()))
    }
}

/// Build a feature table with the given configuration.
pub fn build_features(contigs: &ContigSet, config: &FeatureConfig) -> Result<FeatureTable> {
    FeatureBuilder::new(config.clone())?.build(contigs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeatureError;

    fn sample_set() -> ContigSet {
        ContigSet::from_pairs(vec![
            ("c1", "AAAA"),
            ("c2", "AAAAAAAA"),
            ("c3", "AA"),
        ])
        .unwrap()
    }

    #[test]
    fn test_rows_follow_input_order() {
        let table = build_features(&sample_set(), &FeatureConfig::default()).unwrap();
        let ids: Vec<&str> = table.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert!(table.has_repeats);
        assert_eq!(table.rows[1].dev_from_n50, 1.0);
        assert_eq!(table.rows[2].dev_from_l50, 2.0);
    }

    #[test]
    fn test_without_repeats() {
        let config = FeatureConfig {
            detect_repeats: false,
            ..Default::default()
        };
        let table = build_features(&sample_set(), &config).unwrap();
        assert!(!table.has_repeats);
        assert!(table.rows.iter().all(|r| r.repeat_count.is_none()));
    }

    #[test]
    fn test_max_contigs_per_batch() {
        let config = FeatureConfig {
            max_contigs_per_batch: Some(2),
            ..Default::default()
        };
        let table = build_features(&sample_set(), &config).unwrap();
        assert_eq!(table.len(), 2);
        // Statistics still see c3, so the minimum stays 2
        assert_eq!(table.rows[0].dev_from_min, 2);
    }

    #[test]
    fn test_empty_set_aborts() {
        let result = build_features(&ContigSet::new(), &FeatureConfig::default());
        assert!(matches!(result, Err(FeatureError::EmptyInput(_))));
    }

    #[test]
    fn test_strict_alphabet() {
        let set = ContigSet::from_pairs(vec![("c1", "ACGT"), ("c2", "ACXT")]).unwrap();
        let config = FeatureConfig {
            strict_alphabet: true,
            ..Default::default()
        };
        let result = build_features(&set, &config);
        assert!(matches!(result, Err(FeatureError::MalformedSequence { .. })));

        // Without the check the same set goes through
        assert!(build_features(&set, &FeatureConfig::default()).is_ok());
    }

    struct FailingCounter {
        fail_on: &'static str,
    }

    impl RepeatCounter for FailingCounter {
        fn count_repeats(&self, id: &str, _seq: &str) -> Result<Option<usize>> {
            if id == self.fail_on {
                return Err(FeatureError::InvalidInput(format!("cannot scan {}", id)));
            }
            Ok(Some(1))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_row_error_aborts_batch() {
        let builder = FeatureBuilder::new(FeatureConfig::default())
            .unwrap()
            .with_repeat_counter(Box::new(FailingCounter { fail_on: "c2" }));

        match builder.build(&sample_set()) {
            Err(FeatureError::InvalidInput(msg)) => assert_eq!(msg, "cannot scan c2"),
            other => panic!("expected the c2 failure, got {:?}", other),
        }

        let builder = FeatureBuilder::new(FeatureConfig::default())
            .unwrap()
            .with_repeat_counter(Box::new(FailingCounter { fail_on: "none" }));
        let table = builder.build(&sample_set()).unwrap();
        assert!(table.rows.iter().all(|r| r.repeat_count == Some(1)));
    }

    #[test]
    fn test_long_contig_skips_repeat_scan() {
        let set = ContigSet::from_pairs(vec![
            ("short", "ACGTAC"),
            ("long", "ACGTACGTACGTACGT"),
        ])
        .unwrap();
        let config = FeatureConfig {
            max_repeat_scan_len: Some(10),
            ..Default::default()
        };
        let table = build_features(&set, &config).unwrap();
        assert!(table.has_repeats);
        assert!(table.rows[0].repeat_count.is_some());
        assert_eq!(table.rows[1].repeat_count, None);

        let mut out = Vec::new();
        table.write_delimited(&mut out, b',').unwrap();
        let text = String::from_utf8(out).unwrap();
        let long = text.lines().find(|l| l.starts_with("long,")).unwrap();
        assert!(long.ends_with(','));
        assert_eq!(long.split(',').count(), FEATURE_COLUMNS.len() + 1);
    }
}
