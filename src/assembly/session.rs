use fxhash::FxHashSet;
use tracing::info;

use crate::assembly::overlap::{assemble_with, check_assembly, hint, OverlapPolicy};
use crate::demo;
use crate::error::{GenomeError, GenomeResult};
use crate::sequence::{parse_all, Sequence};

/// The state of an interactive assembly puzzle: a target, the fragments it was cut into, and the
/// order the user has picked so far. Owned by the caller and threaded through every interaction.
#[derive(Debug, Clone)]
pub struct AssemblySession {
    /// The sequence the fragments should reconstruct.
    target: Sequence,
    /// All fragments, in their enumeration order.
    fragments: Vec<Sequence>,
    /// Indices into `fragments`, in the order they were chosen.
    chosen: Vec<usize>,
    policy: OverlapPolicy,
}

impl AssemblySession {
    /// Starts a session. The target and every fragment must be non-empty, and fragments must be
    /// pairwise distinct.
    pub fn new(target: Sequence, fragments: Vec<Sequence>, policy: OverlapPolicy) -> GenomeResult<AssemblySession> {
        if target.is_empty() {
            return Err(GenomeError::EmptySequence);
        }
        let mut seen = FxHashSet::default();
        for fragment in fragments.iter() {
            if fragment.is_empty() {
                return Err(GenomeError::EmptySequence);
            }
            if !seen.insert(fragment) {
                return Err(GenomeError::DuplicateFragment(fragment.to_string()));
            }
        }

        Ok(AssemblySession {
            target,
            fragments,
            chosen: Vec::new(),
            policy,
        })
    }

    /// Starts a session from user text, validating the target and every fragment.
    pub fn from_strs<S: AsRef<str>>(target: &str, fragments: &[S], policy: OverlapPolicy) -> GenomeResult<AssemblySession> {
        AssemblySession::new(Sequence::parse(target)?, parse_all(fragments)?, policy)
    }

    /// The built-in puzzle.
    pub fn demo() -> AssemblySession {
        AssemblySession::from_strs(demo::ASSEMBLY_TARGET, &demo::ASSEMBLY_FRAGMENTS, OverlapPolicy::Proper)
            .expect("Demo assembly constants are valid")
    }

    pub fn target(&self) -> &Sequence {
        &self.target
    }

    pub fn fragments(&self) -> &[Sequence] {
        &self.fragments
    }

    /// The fragments picked so far, in order.
    pub fn chosen(&self) -> Vec<&Sequence> {
        self.chosen.iter().map(|&i| &self.fragments[i]).collect()
    }

    /// The fragments not yet picked, in enumeration order.
    pub fn remaining(&self) -> Vec<&Sequence> {
        self.fragments
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.chosen.contains(i))
            .map(|(_, fragment)| fragment)
            .collect()
    }

    /// Appends a fragment to the chosen order.
    pub fn choose(&mut self, fragment: &Sequence) -> GenomeResult<()> {
        let index = self
            .fragments
            .iter()
            .position(|f| f == fragment)
            .ok_or_else(|| GenomeError::UnknownFragment(fragment.to_string()))?;
        self.choose_index(index)
    }

    /// Appends the fragment at the given enumeration index to the chosen order.
    pub fn choose_index(&mut self, index: usize) -> GenomeResult<()> {
        let fragment = self
            .fragments
            .get(index)
            .ok_or_else(|| GenomeError::UnknownFragment(format!("#{}", index)))?;
        if self.chosen.contains(&index) {
            return Err(GenomeError::FragmentAlreadyChosen(fragment.to_string()));
        }
        info!(fragment = %fragment, position = self.chosen.len() + 1, "Fragment chosen");
        self.chosen.push(index);
        Ok(())
    }

    /// Clears the chosen order, making every fragment available again.
    pub fn reset(&mut self) {
        info!(discarded = self.chosen.len(), "Assembly reset");
        self.chosen.clear();
    }

    /// The sequence assembled from the chosen order.
    pub fn assembled(&self) -> Sequence {
        let order: Vec<Sequence> = self.chosen().into_iter().cloned().collect();
        assemble_with(&order, self.policy)
    }

    /// Whether every fragment has been placed.
    pub fn is_complete(&self) -> bool {
        self.chosen.len() == self.fragments.len()
    }

    /// Whether the current assembly reproduces the target.
    pub fn is_correct(&self) -> bool {
        check_assembly(&self.assembled(), &self.target)
    }

    /// The fragment the target starts with, if any.
    pub fn hint(&self) -> Option<&Sequence> {
        hint(&self.target, &self.fragments)
    }
}
