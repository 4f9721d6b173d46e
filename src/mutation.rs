//! Single random point mutations, as shown to a user exploring how one change to a DNA string
//! looks.

use rand::Rng;
use std::fmt::{Display, Formatter};
use tracing::debug;

use crate::error::{GenomeError, GenomeResult};
use crate::sequence::{Nucleotide, Sequence};

/// The kind of point mutation applied, with 0-based positions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MutationKind {
    /// `base` inserted before `position`.
    Insertion { position: usize, base: Nucleotide },
    /// `base` removed from `position`.
    Deletion { position: usize, base: Nucleotide },
    Substitution { position: usize, from: Nucleotide, to: Nucleotide },
}

impl MutationKind {
    pub fn position(&self) -> usize {
        match self {
            MutationKind::Insertion { position, .. }
            | MutationKind::Deletion { position, .. }
            | MutationKind::Substitution { position, .. } => *position,
        }
    }
}

/// Explanations use 1-based positions.
impl Display for MutationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationKind::Insertion { position, base } => {
                write!(f, "Insertion of {} at position {}", base, position + 1)
            }
            MutationKind::Deletion { position, .. } => {
                write!(f, "Deletion at position {}", position + 1)
            }
            MutationKind::Substitution { position, from, to } => {
                write!(f, "Substitution of {}→{} at position {}", from, to, position + 1)
            }
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PointMutation {
    pub kind: MutationKind,
    pub mutated: Sequence,
}

/// Applies one random insertion, deletion or substitution to a non-empty sequence.
/// A deletion drawn for a single-base sequence becomes a substitution, so the result is never
/// empty.
pub fn mutate(sequence: &Sequence, rng: &mut impl Rng) -> GenomeResult<PointMutation> {
    if sequence.is_empty() {
        return Err(GenomeError::EmptySequence);
    }

    let choice = rng.gen_range(0..3);
    let position = rng.gen_range(0..sequence.len());
    let mut mutated = sequence.clone();

    let kind = match choice {
        0 => {
            let base = Nucleotide::random(rng);
            mutated.nucleotides_mut().insert(position, base);
            MutationKind::Insertion { position, base }
        }
        1 if sequence.len() > 1 => {
            let base = mutated.nucleotides_mut().remove(position);
            MutationKind::Deletion { position, base }
        }
        _ => {
            let from = sequence[position];
            let to = from.random_other(rng);
            mutated.nucleotides_mut()[position] = to;
            MutationKind::Substitution { position, from, to }
        }
    };

    debug!(original = %sequence, mutated = %mutated, "{}", kind);
    Ok(PointMutation { kind, mutated })
}

/// Validates user text, then mutates it.
pub fn mutate_str(text: &str, rng: &mut impl Rng) -> GenomeResult<PointMutation> {
    mutate(&Sequence::parse(text)?, rng)
}

#[cfg(test)]
mod tests {
    use rand::prelude::{SeedableRng, StdRng};
    use crate::error::GenomeError;
    use crate::mutation::*;
    use crate::sequence::{Nucleotide, Sequence};
    use crate::test_utils::SEED;

    #[test]
    fn test_mutation_effects() {
        let mut rng = StdRng::from_seed(SEED);
        let original = Sequence::parse("ATCGGA").unwrap();
        let mut kinds_seen = [false; 3];

        for _ in 0..300 {
            let PointMutation { kind, mutated } = mutate(&original, &mut rng).unwrap();
            match kind {
                MutationKind::Insertion { position, base } => {
                    kinds_seen[0] = true;
                    assert_eq!(mutated.len(), original.len() + 1);
                    assert_eq!(mutated[position], base);
                    assert_eq!(&mutated[..position], &original[..position]);
                    assert_eq!(&mutated[position + 1..], &original[position..]);
                }
                MutationKind::Deletion { position, base } => {
                    kinds_seen[1] = true;
                    assert_eq!(mutated.len(), original.len() - 1);
                    assert_eq!(original[position], base);
                    assert_eq!(&mutated[..position], &original[..position]);
                    assert_eq!(&mutated[position..], &original[position + 1..]);
                }
                MutationKind::Substitution { position, from, to } => {
                    kinds_seen[2] = true;
                    assert_ne!(from, to);
                    assert_eq!(original[position], from);
                    assert_eq!(mutated[position], to);
                    let differences = original.iter().zip(mutated.iter()).filter(|(a, b)| a != b).count();
                    assert_eq!(differences, 1);
                }
            }
            assert!(kind.position() < original.len());
        }

        assert_eq!(kinds_seen, [true; 3]);
    }

    #[test]
    fn test_single_base_never_emptied() {
        let mut rng = StdRng::from_seed(SEED);
        let original = Sequence::parse("G").unwrap();
        for _ in 0..100 {
            let res = mutate(&original, &mut rng).unwrap();
            assert!(!res.mutated.is_empty());
            assert!(!matches!(res.kind, MutationKind::Deletion { .. }));
        }
    }

    #[test]
    fn test_explanations() {
        let insertion = MutationKind::Insertion { position: 2, base: Nucleotide::A };
        assert_eq!(insertion.to_string(), "Insertion of A at position 3");
        let deletion = MutationKind::Deletion { position: 1, base: Nucleotide::T };
        assert_eq!(deletion.to_string(), "Deletion at position 2");
        let substitution = MutationKind::Substitution {
            position: 0,
            from: Nucleotide::C,
            to: Nucleotide::G,
        };
        assert_eq!(substitution.to_string(), "Substitution of C→G at position 1");
    }

    #[test]
    fn test_invalid_text_rejected() {
        let mut rng = StdRng::from_seed(SEED);
        assert!(matches!(mutate_str("", &mut rng), Err(GenomeError::EmptySequence)));
        assert!(matches!(
            mutate_str("ATCZ", &mut rng),
            Err(GenomeError::InvalidSymbol { symbol: 'Z', position: 3 })
        ));
        assert!(mutate_str("atcg", &mut rng).unwrap().kind.position() < 4);
        assert!(matches!(mutate(&Sequence::empty(), &mut rng), Err(GenomeError::EmptySequence)));
    }
}
