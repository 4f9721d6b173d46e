use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenomeResult;
use crate::sequence::{parse_all, Sequence};

/// Which overlap lengths the suffix-prefix scan is allowed to consider.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Overlaps strictly shorter than the shorter of the two sequences.
    #[default]
    Proper,
    /// Also allows the whole shorter sequence to be the overlap.
    Full,
}

impl OverlapPolicy {
    /// The largest overlap length scanned for sequences of the given lengths.
    fn max_overlap(&self, len_a: usize, len_b: usize) -> usize {
        let shorter = len_a.min(len_b);
        match self {
            OverlapPolicy::Proper => shorter.saturating_sub(1),
            OverlapPolicy::Full => shorter,
        }
    }
}

/// Length of the longest suffix of `a` that is also a prefix of `b`, never counting the whole
/// shorter sequence. Returns 0 when no such overlap exists.
pub fn compute_overlap(a: &Sequence, b: &Sequence) -> usize {
    compute_overlap_with(a, b, OverlapPolicy::Proper)
}

pub fn compute_overlap_with(a: &Sequence, b: &Sequence, policy: OverlapPolicy) -> usize {
    let mut best = 0;
    for k in 1..=policy.max_overlap(a.len(), b.len()) {
        if a.suffix(k) == b.prefix(k) {
            best = k;
        }
    }
    best
}

/// Merges the fragments in the given order, appending only the part of each fragment that does
/// not overlap the sequence assembled so far.
pub fn assemble(fragments: &[Sequence]) -> Sequence {
    assemble_with(fragments, OverlapPolicy::Proper)
}

pub fn assemble_with(fragments: &[Sequence], policy: OverlapPolicy) -> Sequence {
    let mut iter = fragments.iter();
    let mut res = match iter.next() {
        Some(first) => first.clone(),
        None => return Sequence::empty(),
    };

    for fragment in iter {
        let overlap = compute_overlap_with(&res, fragment, policy);
        debug!(fragment = %fragment, overlap, "Merging fragment");
        res.nucleotides_mut().extend_from_slice(&fragment[overlap..]);
    }

    res
}

/// Whether the assembled sequence is exactly the target.
pub fn check_assembly(assembled: &Sequence, target: &Sequence) -> bool {
    assembled == target
}

/// The first fragment, in enumeration order, that the target starts with.
pub fn hint<'f>(target: &Sequence, fragments: &'f [Sequence]) -> Option<&'f Sequence> {
    fragments.iter().find(|fragment| target.starts_with(fragment))
}

/// Text front end of `compute_overlap`. Both inputs are validated first.
pub fn compute_overlap_str(a: &str, b: &str) -> GenomeResult<usize> {
    Ok(compute_overlap(&Sequence::parse(a)?, &Sequence::parse(b)?))
}

/// Text front end of `assemble`. Every fragment is validated before anything is merged.
pub fn assemble_str<S: AsRef<str>>(fragments: &[S]) -> GenomeResult<String> {
    Ok(assemble(&parse_all(fragments)?).to_string())
}

/// Text front end of `hint`.
pub fn hint_str<S: AsRef<str>>(target: &str, fragments: &[S]) -> GenomeResult<Option<String>> {
    let target = Sequence::parse(target)?;
    let fragments = parse_all(fragments)?;
    Ok(hint(&target, &fragments).map(|fragment| fragment.to_string()))
}
