use crate::contig::ContigSet;
use crate::error::{FeatureError, Result};
use crate::io::open_sequence_file;
use bio::io::fasta;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Read every FASTA record into a contig set, keeping file order.
pub fn read_contigs_from<R: Read>(reader: R) -> Result<ContigSet> {
    let mut contigs = ContigSet::new();
    for record in fasta::Reader::new(reader).records() {
        let record = record.map_err(|e| FeatureError::Parse(e.to_string()))?;
        record
            .check()
            .map_err(|e| FeatureError::Parse(format!("FASTA record '{}': {}", record.id(), e)))?;
        let sequence = String::from_utf8(record.seq().to_vec())
            .map_err(|e| FeatureError::Parse(format!("FASTA record '{}': {}", record.id(), e)))?;
        contigs.insert(record.id(), sequence)?;
    }
    Ok(contigs)
}

/// Load contigs from a FASTA(.gz) file.
pub fn read_contigs<P: AsRef<Path>>(path: P) -> Result<ContigSet> {
    let path = path.as_ref();
    let contigs = read_contigs_from(open_sequence_file(path)?)?;
    info!(
        "Loaded {} contigs ({} bp) from {}",
        contigs.len(),
        contigs.total_length(),
        path.display()
    );
    Ok(contigs)
}
