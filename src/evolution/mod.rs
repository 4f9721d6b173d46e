pub mod fitness;
pub mod search;
pub mod selection;
pub mod trials;

pub use fitness::fitness;
pub use search::{evolve, evolve_str, evolve_with, EvolutionParams, EvolutionReport, GenerationStats};
pub use selection::Selector;
pub use trials::{run_trials, TrialSummary};
