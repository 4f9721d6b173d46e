use rand::prelude::{SeedableRng, StdRng};
use rayon::prelude::*;
use tracing::info;

use crate::error::{GenomeError, GenomeResult};
use crate::evolution::search::{evolve, EvolutionParams, EvolutionReport};
use crate::sequence::Sequence;

/// Aggregate outcome of many independent runs with the same configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSummary {
    pub trials: usize,
    /// Runs that matched the target exactly.
    pub successes: usize,
    /// Mean generation count over the successful runs.
    pub mean_generations_to_success: Option<f64>,
    /// Mean best fitness over all runs.
    pub mean_best_fitness: f64,
}

impl TrialSummary {
    pub fn success_rate(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }

    fn from_reports(reports: &[EvolutionReport]) -> TrialSummary {
        let successes: Vec<usize> = reports
            .iter()
            .filter(|report| report.found())
            .map(|report| report.generations_used)
            .collect();

        TrialSummary {
            trials: reports.len(),
            successes: successes.len(),
            mean_generations_to_success: if successes.is_empty() {
                None
            } else {
                Some(successes.iter().sum::<usize>() as f64 / successes.len() as f64)
            },
            mean_best_fitness: reports.iter().map(|report| report.best_fitness).sum::<f64>()
                / reports.len() as f64,
        }
    }
}

/// Runs `trials` independent searches in parallel. Trial `i` is seeded with `base_seed + i`,
/// so the summary is reproducible regardless of scheduling.
pub fn run_trials(
    target: &Sequence,
    params: &EvolutionParams,
    trials: usize,
    base_seed: u64,
) -> GenomeResult<TrialSummary> {
    if trials == 0 {
        return Err(GenomeError::InvalidParameter(String::from(
            "number of trials must be positive",
        )));
    }
    if target.is_empty() {
        return Err(GenomeError::EmptySequence);
    }
    params.validate()?;

    let reports = (0..trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            evolve(target, params, &mut rng)
        })
        .collect::<GenomeResult<Vec<EvolutionReport>>>()?;

    let summary = TrialSummary::from_reports(&reports);
    info!(
        trials,
        successes = summary.successes,
        mean_best_fitness = summary.mean_best_fitness,
        "Trials finished"
    );
    Ok(summary)
}
