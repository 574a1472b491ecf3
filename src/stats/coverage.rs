use crate::error::{FeatureError, Result};
use serde::Serialize;

/// Read count and mean read length of a sequencing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadSummary {
    pub read_count: u64,
    pub total_bases: u64,
    pub mean_read_length: f64,
}

impl ReadSummary {
    pub fn from_lengths<I: IntoIterator<Item = usize>>(lengths: I) -> Result<Self> {
        let (read_count, total_bases) = lengths
            .into_iter()
            .fold((0u64, 0u64), |(n, bases), len| (n + 1, bases + len as u64));
        if read_count == 0 {
            return Err(FeatureError::Division(
                "mean read length of an empty read set".into(),
            ));
        }
        Ok(ReadSummary {
            read_count,
            total_bases,
            mean_read_length: total_bases as f64 / read_count as f64,
        })
    }

    pub fn coverage(&self, genome_size: u64) -> Result<f64> {
        coverage(self.read_count, self.mean_read_length, genome_size)
    }
}

/// Sequencing coverage: `reads * mean_read_length / genome_size`.
pub fn coverage(read_count: u64, mean_read_length: f64, genome_size: u64) -> Result<f64> {
    if genome_size == 0 {
        return Err(FeatureError::Division(
            "coverage with a genome size of zero".into(),
        ));
    }
    Ok(read_count as f64 * mean_read_length / genome_size as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage() {
        assert_eq!(coverage(100, 150.0, 15_000).unwrap(), 1.0);
        assert_eq!(coverage(0, 150.0, 15_000).unwrap(), 0.0);
        assert!(matches!(coverage(100, 150.0, 0), Err(FeatureError::Division(_))));
    }

    #[test]
    fn test_read_summary() {
        let summary = ReadSummary::from_lengths(vec![100, 200, 150]).unwrap();
        assert_eq!(summary.read_count, 3);
        assert_eq!(summary.total_bases, 450);
        assert_eq!(summary.mean_read_length, 150.0);
        assert_eq!(summary.coverage(450).unwrap(), 1.0);

        let empty = ReadSummary::from_lengths(Vec::new());
        assert!(matches!(empty, Err(FeatureError::Division(_))));
    }
}
