use crate::error::{FeatureError, Result};
use crate::repeat::dotplot::{DEFAULT_MAX_SCAN_LEN, DEFAULT_MIN_RUN};
use crate::stats::nstat::validate_percentile;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Settings for one feature extraction run.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Minimum diagonal run length counted by the dot-plot scanner.
    pub min_run_threshold: usize,
    /// Nx percentiles reported with the assembly statistics.
    pub n_percentiles: Vec<f64>,
    /// Stop emitting rows after this many contigs. Statistics still cover
    /// the whole set.
    pub max_contigs_per_batch: Option<usize>,
    /// Emit the `Nb_repeats` column.
    pub detect_repeats: bool,
    /// Contigs longer than this are not dot-plot scanned.
    pub max_repeat_scan_len: Option<usize>,
    /// Reject sequences with characters outside the IUPAC nucleotide codes.
    pub strict_alphabet: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            min_run_threshold: DEFAULT_MIN_RUN,
            n_percentiles: vec![50.0, 90.0],
            max_contigs_per_batch: None,
            detect_repeats: true,
            max_repeat_scan_len: Some(DEFAULT_MAX_SCAN_LEN),
            strict_alphabet: false,
        }
    }
}

impl FeatureConfig {
    /// Load a JSON config file; missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading feature config from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let config: FeatureConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.detect_repeats && self.min_run_threshold == 0 {
            return Err(FeatureError::InvalidInput(
                "min_run_threshold must be at least 1".into(),
            ));
        }
        if self.n_percentiles.is_empty() {
            return Err(FeatureError::InvalidInput(
                "n_percentiles must name at least one percentile".into(),
            ));
        }
        for &p in &self.n_percentiles {
            validate_percentile(p)?;
        }
        if self.max_contigs_per_batch == Some(0) {
            return Err(FeatureError::InvalidInput(
                "max_contigs_per_batch must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = FeatureConfig::default();
        assert_eq!(config.min_run_threshold, 6);
        assert_eq!(config.n_percentiles, vec![50.0, 90.0]);
        assert_eq!(config.max_contigs_per_batch, None);
        assert!(config.detect_repeats);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"min_run_threshold": 8, "max_contigs_per_batch": 5000}}"#).unwrap();

        let config = FeatureConfig::from_file(file.path()).unwrap();
        assert_eq!(config.min_run_threshold, 8);
        assert_eq!(config.max_contigs_per_batch, Some(5000));
        assert_eq!(config.n_percentiles, vec![50.0, 90.0]);
        assert!(!config.strict_alphabet);
    }

    #[test]
    fn test_invalid_values() {
        let config = FeatureConfig {
            n_percentiles: vec![50.0, 120.0],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FeatureError::InvalidInput(_))));

        let config = FeatureConfig {
            min_run_threshold: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(matches!(FeatureConfig::from_file(file.path()), Err(FeatureError::Json(_))));
    }
}
