use rand::Rng;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{GenomeError, GenomeResult};
use crate::sequence::Nucleotide;

/// A class to hold sequence data. A vector of nucleotides, always stored uppercase.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Parses user text into a sequence.
    /// Surrounding whitespace is ignored, case is normalized and the empty string is rejected.
    pub fn parse(text: &str) -> GenomeResult<Sequence> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GenomeError::EmptySequence);
        }
        text.chars()
            .enumerate()
            .map(|(position, c)| Nucleotide::from_char(c, position))
            .collect::<GenomeResult<Vec<_>>>()
            .map(Sequence)
    }

    /// The empty sequence. Only produced by assembling zero fragments.
    pub(crate) fn empty() -> Sequence {
        Sequence(Vec::new())
    }

    /// Mutable access for in-crate edits. Callers keep the sequence non-empty.
    pub(crate) fn nucleotides_mut(&mut self) -> &mut Vec<Nucleotide> {
        &mut self.0
    }

    /// The first `k` nucleotides.
    pub fn prefix(&self, k: usize) -> &[Nucleotide] {
        &self.0[..k]
    }

    /// The last `k` nucleotides.
    pub fn suffix(&self, k: usize) -> &[Nucleotide] {
        &self.0[self.0.len() - k..]
    }
}

impl Deref for Sequence {
    type Target = Vec<Nucleotide>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Sequence {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::parse(s)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for nt in self.0.iter() {
            f.write_str(nt.string())?;
        }
        Ok(())
    }
}

impl FromIterator<Nucleotide> for Sequence {
    fn from_iter<T: IntoIterator<Item = Nucleotide>>(iter: T) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

/// Generates a random sequence.
pub fn random_seq(length: usize, rng: &mut impl Rng) -> Sequence {
    (0..length).map(|_| Nucleotide::random(rng)).collect()
}

/// Parses a list of strings, failing on the first invalid one.
pub fn parse_all<S: AsRef<str>>(texts: &[S]) -> GenomeResult<Vec<Sequence>> {
    texts.iter().map(|text| Sequence::parse(text.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use rand::prelude::{SeedableRng, StdRng};
    use crate::error::GenomeError;
    use crate::sequence::{random_seq, Sequence};
    use crate::test_utils::SEED;

    #[test]
    fn test_parse_normalizes_case() {
        let seq = Sequence::parse("  atGc\n").unwrap();
        assert_eq!(seq.to_string(), "ATGC");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(Sequence::parse(""), Err(GenomeError::EmptySequence)));
        assert!(matches!(Sequence::parse("   "), Err(GenomeError::EmptySequence)));
    }

    #[test]
    fn test_parse_reports_position() {
        match Sequence::parse("ATXG") {
            Err(GenomeError::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, 'X');
                assert_eq!(position, 2);
            }
            other => panic!("Expected invalid symbol, got {:?}", other),
        }
    }

    #[test]
    fn test_prefix_suffix() {
        let seq: Sequence = "CGATT".parse().unwrap();
        assert_eq!(seq.prefix(2), Sequence::parse("CG").unwrap().as_slice());
        assert_eq!(seq.suffix(3), Sequence::parse("ATT").unwrap().as_slice());
    }

    #[test]
    fn test_in_crate_edits_keep_validated_text() {
        let mut seq = Sequence::parse("ACGT").unwrap();
        seq.nucleotides_mut().push(crate::sequence::Nucleotide::A);
        assert_eq!(seq.to_string(), "ACGTA");
        assert!(Sequence::empty().is_empty());
    }

    #[test]
    fn test_random_seq_length() {
        let mut rng = StdRng::from_seed(SEED);
        for length in [1, 4, 17, 100] {
            assert_eq!(random_seq(length, &mut rng).len(), length);
        }
    }
}
