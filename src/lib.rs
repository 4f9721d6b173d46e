//! Toy genome algorithms: reconstructing a sequence from overlapping fragments, evolving random
//! sequences towards a target, and applying single point mutations.
//!
//! Every string entering the library is validated against the `A`, `T`, `C`, `G` alphabet
//! (ignoring case) before any computation starts.

pub mod assembly;
pub mod config;
pub mod demo;
pub mod error;
pub mod evolution;
pub mod mutation;
pub mod sequence;

#[cfg(test)]
pub(crate) mod test_utils;

pub use assembly::{assemble, check_assembly, compute_overlap, hint, AssemblySession, OverlapPolicy};
pub use error::{GenomeError, GenomeResult};
pub use evolution::{evolve, fitness, run_trials, EvolutionParams, EvolutionReport};
pub use mutation::{mutate, MutationKind, PointMutation};
pub use sequence::{Nucleotide, Sequence};
