use crate::error::{GenomeError, GenomeResult};
use crate::sequence::Sequence;

/// The fraction of positions at which the candidate matches the target.
/// Both sequences must be non-empty and of the same length.
pub fn fitness(candidate: &Sequence, target: &Sequence) -> GenomeResult<f64> {
    if target.is_empty() {
        return Err(GenomeError::EmptySequence);
    }
    if candidate.len() != target.len() {
        return Err(GenomeError::LengthMismatch {
            expected: target.len(),
            found: candidate.len(),
        });
    }

    let matches = candidate
        .iter()
        .zip(target.iter())
        .filter(|(a, b)| a == b)
        .count();
    Ok(matches as f64 / target.len() as f64)
}
