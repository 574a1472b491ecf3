use crate::error::{FeatureError, Result};
use std::collections::HashMap;

/// IUPAC nucleotide codes accepted by strict alphabet validation.
const IUPAC_BASES: &[u8] = b"ACGTNRYSWKMBDHV";

/// A named contig sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    pub id: String,
    pub sequence: String,
}

impl Contig {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Contig {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Ordered id -> sequence mapping for one assembly.
///
/// Ids are unique and iteration follows insertion order, which is the order
/// rows appear in the feature table.
#[derive(Debug, Clone, Default)]
pub struct ContigSet {
    contigs: Vec<Contig>,
    index: HashMap<String, usize>,
}

impl ContigSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(id, sequence)` pairs, rejecting duplicate ids.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut set = ContigSet::new();
        for (id, seq) in pairs {
            set.insert(id, seq)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, id: impl Into<String>, sequence: impl Into<String>) -> Result<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(FeatureError::InvalidInput(format!(
                "duplicate contig id '{}'",
                id
            )));
        }
        self.index.insert(id.clone(), self.contigs.len());
        self.contigs.push(Contig::new(id, sequence));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contig> {
        self.contigs.iter()
    }

    pub fn as_slice(&self) -> &[Contig] {
        &self.contigs
    }

    pub fn get(&self, id: &str) -> Option<&Contig> {
        self.index.get(id).map(|&i| &self.contigs[i])
    }

    /// Contig lengths in iteration order.
    pub fn lengths(&self) -> Vec<usize> {
        self.contigs.iter().map(Contig::len).collect()
    }

    pub fn total_length(&self) -> usize {
        self.contigs.iter().map(Contig::len).sum()
    }

    /// Check every sequence against the IUPAC nucleotide alphabet
    /// (case-insensitive). Reports the first offending character.
    pub fn validate_alphabet(&self) -> Result<()> {
        for contig in &self.contigs {
            if let Some((position, &b)) = contig
                .sequence
                .as_bytes()
                .iter()
                .enumerate()
                .find(|(_, b)| !IUPAC_BASES.contains(&b.to_ascii_uppercase()))
            {
                return Err(FeatureError::MalformedSequence {
                    id: contig.id.clone(),
                    position,
                    found: b as char,
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ContigSet {
    type Item = &'a Contig;
    type IntoIter = std::slice::Iter<'a, Contig>;

    fn into_iter(self) -> Self::IntoIter {
        self.contigs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_and_lengths() {
        let set = ContigSet::from_pairs(vec![("c1", "AAAA"), ("c2", "AAAAAAAA"), ("c3", "AA")]).unwrap();
        let ids: Vec<&str> = set.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(set.lengths(), vec![4, 8, 2]);
        assert_eq!(set.total_length(), 14);
        assert_eq!(set.get("c2").map(|c| c.len()), Some(8));
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ContigSet::from_pairs(vec![("c1", "ACGT"), ("c1", "GG")]);
        assert!(matches!(result, Err(FeatureError::InvalidInput(_))));
    }

    #[test]
    fn test_get_after_rejected_duplicate() {
        let mut set = ContigSet::new();
        for i in 0..1000 {
            set.insert(format!("c{}", i), "A".repeat(i % 7 + 1)).unwrap();
        }
        assert!(set.insert("c500", "GGGG").is_err());

        // The rejected insert leaves the set untouched
        assert_eq!(set.len(), 1000);
        assert_eq!(set.get("c500").map(|c| c.sequence.as_str()), Some("AAAA"));
        assert_eq!(set.get("c999").map(|c| c.len()), Some(6));
        assert_eq!(set.get("c0").map(|c| c.id.as_str()), Some("c0"));
    }

    #[test]
    fn test_validate_alphabet() {
        let ok = ContigSet::from_pairs(vec![("c1", "acgtNRY")]).unwrap();
        assert!(ok.validate_alphabet().is_ok());

        let bad = ContigSet::from_pairs(vec![("c1", "ACGT"), ("c2", "AC-GT")]).unwrap();
        match bad.validate_alphabet() {
            Err(FeatureError::MalformedSequence { id, position, found }) => {
                assert_eq!(id, "c2");
                assert_eq!(position, 2);
                assert_eq!(found, '-');
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
