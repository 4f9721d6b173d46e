use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use tracing::{debug, info};

use crate::demo;
use crate::error::{GenomeError, GenomeResult};
use crate::evolution::fitness::fitness;
use crate::evolution::selection::Selector;
use crate::sequence::{random_seq, Nucleotide, Sequence};

/// The knobs of a single evolutionary run.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionParams {
    /// Number of individuals in every generation.
    pub population_size: usize,
    /// Probability that any single symbol of an offspring is redrawn.
    pub mutation_rate: f64,
    /// Upper bound on the number of generations scored.
    pub max_generations: usize,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        EvolutionParams {
            population_size: demo::POPULATION_SIZE,
            mutation_rate: demo::MUTATION_RATE,
            max_generations: demo::MAX_GENERATIONS,
        }
    }
}

impl EvolutionParams {
    /// Rejects degenerate configurations before a run starts.
    pub fn validate(&self) -> GenomeResult<()> {
        if self.population_size == 0 {
            return Err(GenomeError::InvalidParameter(String::from(
                "population size must be positive",
            )));
        }
        if self.max_generations == 0 {
            return Err(GenomeError::InvalidParameter(String::from(
                "generation budget must be positive",
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GenomeError::InvalidParameter(format!(
                "mutation rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

/// What the observer of a run sees after every generation is scored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GenerationStats {
    /// 1-indexed generation number.
    pub generation: usize,
    /// The best fitness seen so far in the run.
    pub best_fitness: f64,
    /// The mean fitness of the current generation.
    pub mean_fitness: f64,
}

/// The outcome of an evolutionary run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionReport {
    /// The fittest individual seen over the whole run.
    pub best: Sequence,
    pub best_fitness: f64,
    /// The generation the run stopped on.
    pub generations_used: usize,
    /// The running best fitness after each generation.
    pub history: Vec<f64>,
    /// Whether the observer stopped the run.
    pub cancelled: bool,
}

impl EvolutionReport {
    /// Whether the target was matched exactly.
    pub fn found(&self) -> bool {
        self.best_fitness == 1.0
    }
}

/// Evolves a random population towards the target until an exact match appears or the
/// generation budget runs out.
pub fn evolve<R: Rng>(target: &Sequence, params: &EvolutionParams, rng: &mut R) -> GenomeResult<EvolutionReport> {
    evolve_with(target, params, rng, |_| ControlFlow::Continue(()))
}

/// Like `evolve`, validating the target text first.
pub fn evolve_str<R: Rng>(target: &str, params: &EvolutionParams, rng: &mut R) -> GenomeResult<EvolutionReport> {
    evolve(&Sequence::parse(target)?, params, rng)
}

/// Runs the search, reporting every generation to the observer.
/// Returning `ControlFlow::Break` from the observer ends the run after that generation.
pub fn evolve_with<R, F>(
    target: &Sequence,
    params: &EvolutionParams,
    rng: &mut R,
    mut observer: F,
) -> GenomeResult<EvolutionReport>
where
    R: Rng,
    F: FnMut(&GenerationStats) -> ControlFlow<()>,
{
    if target.is_empty() {
        return Err(GenomeError::EmptySequence);
    }
    params.validate()?;
    let mutation = Bernoulli::new(params.mutation_rate)
        .map_err(|e| GenomeError::InvalidParameter(format!("mutation rate: {}", e)))?;

    let mut population: Vec<Sequence> = (0..params.population_size)
        .map(|_| random_seq(target.len(), rng))
        .collect();

    let mut best = population[0].clone();
    let mut best_fitness = f64::NEG_INFINITY;
    let mut history = Vec::new();

    for generation in 1..=params.max_generations {
        let scores = population
            .iter()
            .map(|candidate| fitness(candidate, target))
            .collect::<GenomeResult<Vec<f64>>>()?;

        // The running best only changes on a strict improvement.
        for (candidate, &score) in population.iter().zip(scores.iter()) {
            if score > best_fitness {
                best_fitness = score;
                best = candidate.clone();
            }
        }
        history.push(best_fitness);

        let stats = GenerationStats {
            generation,
            best_fitness,
            mean_fitness: scores.iter().sum::<f64>() / scores.len() as f64,
        };
        debug!(
            generation,
            best_fitness = stats.best_fitness,
            mean_fitness = stats.mean_fitness,
            "Generation scored"
        );
        let flow = observer(&stats);

        if best_fitness == 1.0 {
            info!(generation, best = %best, "Target matched");
            return Ok(EvolutionReport {
                best,
                best_fitness,
                generations_used: generation,
                history,
                cancelled: false,
            });
        }
        if flow.is_break() {
            info!(generation, best_fitness, "Run cancelled");
            return Ok(EvolutionReport {
                best,
                best_fitness,
                generations_used: generation,
                history,
                cancelled: true,
            });
        }
        if generation < params.max_generations {
            population = next_generation(&population, &scores, &mutation, rng)?;
        }
    }

    info!(
        generations = params.max_generations,
        best = %best,
        best_fitness,
        "Generation budget exhausted"
    );
    Ok(EvolutionReport {
        best,
        best_fitness,
        generations_used: params.max_generations,
        history,
        cancelled: false,
    })
}

/// Samples a parent pool proportionally to fitness, then builds every offspring from a single
/// parent drawn uniformly from that pool, redrawing each symbol with the mutation probability.
fn next_generation<R: Rng>(
    population: &[Sequence],
    scores: &[f64],
    mutation: &Bernoulli,
    rng: &mut R,
) -> GenomeResult<Vec<Sequence>> {
    let selector = Selector::new(scores)?;
    let parents: Vec<&Sequence> = (0..population.len())
        .map(|_| &population[selector.sample(rng)])
        .collect();

    Ok((0..population.len())
        .map(|_| {
            let mut child = parents[rng.gen_range(0..parents.len())].clone();
            for nt in child.nucleotides_mut().iter_mut() {
                if mutation.sample(rng) {
                    *nt = Nucleotide::random(rng);
                }
            }
            child
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use rand::prelude::{SeedableRng, StdRng};
    use std::ops::ControlFlow;
    use crate::error::GenomeError;
    use crate::evolution::*;
    use crate::sequence::Sequence;
    use crate::test_utils::{seq, SEED};

    #[test]
    fn test_demo_run_terminates() {
        let mut rng = StdRng::from_seed(SEED);
        let params = EvolutionParams::default();
        let report = evolve(&seq("ATGC"), &params, &mut rng).unwrap();

        assert!((0.0..=1.0).contains(&report.best_fitness));
        assert!(report.generations_used >= 1);
        assert!(report.generations_used <= params.max_generations);
        assert_eq!(report.history.len(), report.generations_used);
        assert_eq!(report.best.len(), 4);
        if report.found() {
            assert_eq!(report.best, seq("ATGC"));
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let params = EvolutionParams::default();
        let first = evolve(&seq("GATTACA"), &params, &mut StdRng::from_seed(SEED)).unwrap();
        let second = evolve(&seq("GATTACA"), &params, &mut StdRng::from_seed(SEED)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    /// Pins the outcome for a fixed seed, so any change to the order of random draws shows up.
    fn test_seeded_run_outcome() {
        let report = evolve(&seq("GATTACA"), &EvolutionParams::default(), &mut StdRng::from_seed(SEED)).unwrap();
        assert_eq!(report.generations_used, 19);
        assert_eq!(report.best, seq("GATTACA"));
        assert_eq!(report.best_fitness, 1.0);
        assert_eq!(report.history.len(), 19);
        assert_eq!(report.history[0], 5. / 7.);
        assert!(!report.cancelled);
    }

    #[test]
    fn test_history_never_regresses() {
        let mut rng = StdRng::from_seed(SEED);
        let params = EvolutionParams {
            population_size: 20,
            mutation_rate: 0.2,
            max_generations: 60,
        };
        for _ in 0..10 {
            let report = evolve(&seq("CGATTATGCGGTAC"), &params, &mut rng).unwrap();
            for window in report.history.windows(2) {
                assert!(window[0] <= window[1], "Best fitness regressed: {:?}", report.history);
            }
            assert_eq!(report.history.last().copied(), Some(report.best_fitness));
        }
    }

    #[test]
    fn test_stops_on_first_match() {
        let mut rng = StdRng::from_seed(SEED);
        let params = EvolutionParams::default();
        for _ in 0..10 {
            let report = evolve(&seq("AT"), &params, &mut rng).unwrap();
            assert!(report.found());
            assert_eq!(report.history.iter().filter(|&&f| f == 1.0).count(), 1);
        }
    }

    #[test]
    /// A single individual that can never change exercises the all-zero selection path.
    fn test_frozen_population() {
        let mut rng = StdRng::from_seed(SEED);
        let params = EvolutionParams {
            population_size: 1,
            mutation_rate: 0.0,
            max_generations: 5,
        };
        for _ in 0..20 {
            let report = evolve(&seq("A"), &params, &mut rng).unwrap();
            if report.found() {
                assert_eq!(report.generations_used, 1);
            } else {
                assert_eq!(report.generations_used, 5);
                assert!(report.history.iter().all(|&f| f == 0.0));
            }
        }
    }

    #[test]
    fn test_observer_can_cancel() {
        let mut rng = StdRng::from_seed(SEED);
        let target = seq("ACGTACGTACGTACGTACGTACGTACGTACGT");
        let mut seen = Vec::new();
        let report = evolve_with(&target, &EvolutionParams::default(), &mut rng, |stats| {
            seen.push(stats.generation);
            if stats.generation == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();

        assert!(report.cancelled);
        assert_eq!(report.generations_used, 3);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_configurations() {
        let mut rng = StdRng::from_seed(SEED);
        let target = seq("ATGC");
        let bad = [
            EvolutionParams { population_size: 0, ..Default::default() },
            EvolutionParams { max_generations: 0, ..Default::default() },
            EvolutionParams { mutation_rate: 1.5, ..Default::default() },
            EvolutionParams { mutation_rate: -0.1, ..Default::default() },
            EvolutionParams { mutation_rate: f64::NAN, ..Default::default() },
        ];
        for params in bad.iter() {
            assert!(matches!(
                evolve(&target, params, &mut rng),
                Err(GenomeError::InvalidParameter(_))
            ));
        }
        assert!(matches!(
            evolve(&Sequence::empty(), &EvolutionParams::default(), &mut rng),
            Err(GenomeError::EmptySequence)
        ));
        assert!(matches!(
            evolve_str("ATGN", &EvolutionParams::default(), &mut rng),
            Err(GenomeError::InvalidSymbol { symbol: 'N', position: 3 })
        ));
    }
}
