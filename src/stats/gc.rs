use crate::contig::ContigSet;
use crate::error::{FeatureError, Result};

/// Count of G and C bases, case-insensitive.
pub fn gc_count(seq: &str) -> usize {
    seq.bytes()
        .filter(|&b| matches!(b, b'G' | b'C' | b'g' | b'c'))
        .count()
}

/// GC percentage of one sequence: `(G + C) / length * 100`.
///
/// Ambiguity codes count toward the length. An empty sequence has no
/// defined GC content and is an error.
pub fn gc_content(seq: &str) -> Result<f64> {
    if seq.is_empty() {
        return Err(FeatureError::Division(
            "GC content of a sequence with zero bases".into(),
        ));
    }
    Ok(gc_count(seq) as f64 / seq.len() as f64 * 100.0)
}

/// GC percentage over a whole assembly, weighted by contig length.
pub fn gc_content_set(contigs: &ContigSet) -> Result<f64> {
    let (gc, total) = contigs
        .iter()
        .fold((0usize, 0usize), |(gc, total), c| {
            (gc + gc_count(&c.sequence), total + c.len())
        });
    if total == 0 {
        return Err(FeatureError::Division(
            "GC content of an assembly with zero bases".into(),
        ));
    }
    Ok(gc as f64 / total as f64 * 100.0)
}
