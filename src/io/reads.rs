use crate::error::{FeatureError, Result};
use crate::io::open_sequence_file;
use crate::stats::coverage::ReadSummary;
use bio::io::{fasta, fastq};
use std::io::BufRead;
use std::path::Path;
use tracing::info;

/// Count reads and their mean length in a FASTA or FASTQ stream. The
/// format is picked from the first record marker.
pub fn summarize_reads_from<R: BufRead>(mut reader: R) -> Result<ReadSummary> {
    let marker = reader.fill_buf()?.first().copied();
    let mut lengths = Vec::new();
    match marker {
        Some(b'>') => {
            for record in fasta::Reader::from_bufread(reader).records() {
                let record = record.map_err(|e| FeatureError::Parse(e.to_string()))?;
                lengths.push(record.seq().len());
            }
        }
        Some(b'@') => {
            for record in fastq::Reader::from_bufread(reader).records() {
                let record = record.map_err(|e| FeatureError::Parse(e.to_string()))?;
                lengths.push(record.seq().len());
            }
        }
        Some(other) => {
            return Err(FeatureError::Parse(format!(
                "unrecognised read file: expected '>' or '@', found '{}'",
                other as char
            )))
        }
        None => {}
    }
    ReadSummary::from_lengths(lengths)
}

pub fn summarize_reads<P: AsRef<Path>>(path: P) -> Result<ReadSummary> {
    let path = path.as_ref();
    let summary = summarize_reads_from(open_sequence_file(path)?)?;
    info!(
        "Read {} reads (mean length {:.1}) from {}",
        summary.read_count,
        summary.mean_read_length,
        path.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_fastq() {
        let data = "@r1\nACGTACGT\n+\nFFFFFFFF\n@r2\nACGT\n+\nFFFF\n";
        let summary = summarize_reads_from(data.as_bytes()).unwrap();
        assert_eq!(summary.read_count, 2);
        assert_eq!(summary.mean_read_length, 6.0);
    }

    #[test]
    fn test_summarize_fasta() {
        let data = ">r1\nACGTAC\n>r2\nACGTACGTAC\n";
        let summary = summarize_reads_from(data.as_bytes()).unwrap();
        assert_eq!(summary.read_count, 2);
        assert_eq!(summary.total_bases, 16);
    }

    #[test]
    fn test_summarize_empty_and_unknown() {
        assert!(matches!(summarize_reads_from(&b""[..]), Err(FeatureError::Division(_))));
        assert!(matches!(summarize_reads_from(&b"ACGT\n"[..]), Err(FeatureError::Parse(_))));
    }
}
