//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → truncation selection → subtree crossover → greedy
//! decoding → local search → elitist replacement → repeat.

use super::config::GaConfig;
use super::operators::{subtree_crossover, swap_candidates};
use crate::error::{DtreeError, Result};
use crate::greedy::GreedyInducer;
use crate::ls::{LsRunner, Neighborhood};
use crate::random::create_rng;
use crate::tree::{format_representation, Solution};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The most accurate solution observed during the run. It need not be
    /// a member of the final population.
    pub best: Solution,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the time limit stopped the run before `max_generations`.
    pub timed_out: bool,

    /// Best-ever accuracy after initialization and after each generation.
    pub accuracy_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let inducer = GreedyInducer::new(&dataset, 3)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&inducer, &config)?;
/// println!("Best accuracy: {}", result.best.accuracy());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config`.
    pub fn run(inducer: &GreedyInducer<'_>, config: &GaConfig) -> Result<GaResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(inducer, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    pub fn run_with_rng<R: Rng>(
        inducer: &GreedyInducer<'_>,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate().map_err(DtreeError::InvalidConfig)?;

        let start = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);

        // 1. Initialize population with random-attribute trees
        let mut population = (0..config.population_size)
            .map(|_| inducer.random(rng))
            .collect::<Result<Vec<_>>>()?;
        sort_by_accuracy(&mut population);

        // 2. Track best-ever
        let mut best = population[0].clone();
        let mut accuracy_history = vec![best.accuracy()];

        let mut generations = 0;
        let mut timed_out = false;

        // 3. Evolutionary loop
        while generations < config.max_generations {
            if deadline.is_some_and(|limit| start.elapsed() >= limit) {
                warn!(
                    "genetic algorithm time limit reached after {} generations",
                    generations
                );
                timed_out = true;
                break;
            }

            let parents = select_parents(&mut population, config, rng);
            let offspring = generate_offspring(inducer, &parents, config.neighborhood, rng)?;
            debug!(
                "generation {}: {} parents, {} offspring",
                generations,
                parents.len(),
                offspring.len()
            );

            // Elitist replacement
            population.extend(offspring);
            sort_by_accuracy(&mut population);
            if population[0].accuracy() > best.accuracy() {
                best = population[0].clone();
                debug!(
                    "generation {}: new best accuracy {:.6} {}",
                    generations,
                    best.accuracy(),
                    format_representation(best.representation())
                );
            }
            population.truncate(config.population_size);

            generations += 1;
            accuracy_history.push(best.accuracy());
        }

        info!(
            "genetic algorithm finished: {} generations in {:.3}s, best accuracy {:.6}",
            generations,
            start.elapsed().as_secs_f64(),
            best.accuracy()
        );

        Ok(GaResult {
            best,
            generations,
            timed_out,
            accuracy_history,
        })
    }
}

/// Sorts descending by accuracy; equal accuracies keep their order.
fn sort_by_accuracy(population: &mut [Solution]) {
    population.sort_by(|a, b| b.accuracy().total_cmp(&a.accuracy()));
}

/// Takes the best `parent_count` individuals and shuffles them for pairing.
fn select_parents<R: Rng>(
    population: &mut [Solution],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Solution> {
    sort_by_accuracy(population);
    let n_parents = config.parent_count(population.len());
    let mut parents = population[..n_parents].to_vec();
    parents.shuffle(rng);
    parents
}

/// Pairs parent `i` with parent `i + half` and recombines each pair.
///
/// Pairs sharing no swappable position produce nothing. Children identical
/// to either parent after local search are discarded.
fn generate_offspring<R: Rng>(
    inducer: &GreedyInducer<'_>,
    parents: &[Solution],
    neighborhood: Neighborhood,
    rng: &mut R,
) -> Result<Vec<Solution>> {
    let half = parents.len() / 2;
    let mut offspring = Vec::new();
    for i in 0..half {
        let rep1 = parents[i].representation();
        let rep2 = parents[i + half].representation();

        let candidates = swap_candidates(rep1, rep2);
        if candidates.is_empty() {
            continue;
        }
        let swap_root = candidates[rng.random_range(0..candidates.len())];
        let (child1, child2) = subtree_crossover(rep1, rep2, swap_root);

        for child in [child1, child2] {
            let decoded = inducer.decode(&child)?;
            let improved = LsRunner::improve(inducer, &decoded, neighborhood)?.best;
            if improved.representation() != rep1 && improved.representation() != rep2 {
                offspring.push(improved);
            }
        }
    }
    Ok(offspring)
}
