use rand::Rng;
use rand_distr::{Distribution, WeightedError, WeightedIndex};
use tracing::warn;

use crate::error::{GenomeError, GenomeResult};

/// Fitness-proportionate choice of an index into the population.
#[derive(Debug, Clone)]
pub enum Selector {
    /// Each index is drawn with probability proportional to its weight.
    Weighted(WeightedIndex<f64>),
    /// Every weight was zero, so every index is equally likely.
    Uniform(usize),
}

impl Selector {
    /// Builds a selector over the given non-negative weights.
    pub fn new(weights: &[f64]) -> GenomeResult<Selector> {
        match WeightedIndex::new(weights) {
            Ok(dist) => Ok(Selector::Weighted(dist)),
            Err(WeightedError::AllWeightsZero) => {
                warn!(size = weights.len(), "All fitnesses are zero, selecting uniformly");
                Ok(Selector::Uniform(weights.len()))
            }
            Err(e) => Err(GenomeError::InvalidParameter(format!(
                "Cannot select from fitnesses: {}",
                e
            ))),
        }
    }

    /// Samples an index.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        match self {
            Selector::Weighted(dist) => dist.sample(rng),
            Selector::Uniform(size) => rng.gen_range(0..*size),
        }
    }
}
