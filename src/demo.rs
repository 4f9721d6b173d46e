//! Built-in puzzle and search targets used when no configuration is given.

/// The sequence the demo fragments reconstruct.
pub const ASSEMBLY_TARGET: &str = "CGATTATGCGGTAC";

/// The demo fragments, in the order they are listed to the user.
pub const ASSEMBLY_FRAGMENTS: [&str; 3] = ["CGATT", "TATGCG", "CGGTAC"];

/// The default target of the evolutionary search.
pub const EVOLUTION_TARGET: &str = "ATGC";
pub const POPULATION_SIZE: usize = 50;
pub const MUTATION_RATE: f64 = 0.05;
pub const MAX_GENERATIONS: usize = 200;
