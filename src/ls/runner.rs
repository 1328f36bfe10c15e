//! Steepest-ascent hill climbing and its multi-start wrapper.
//!
//! # Algorithm
//!
//! 1. Start from the incumbent solution
//! 2. Decode every neighbor of the incumbent's representation
//! 3. If some neighbor is strictly more accurate, the most accurate one
//!    (first found on ties) becomes the incumbent; otherwise stop
//!
//! Multi-start repeats this from random-attribute trees and keeps the best.

use super::config::LsConfig;
use super::neighborhood::Neighborhood;
use crate::error::{DtreeError, Result};
use crate::greedy::GreedyInducer;
use crate::random::create_rng;
use crate::tree::{format_representation, Solution};
use log::{debug, info, warn};
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a single hill climb.
#[derive(Debug, Clone)]
pub struct LsResult {
    /// Local optimum reached.
    pub best: Solution,

    /// Number of improving moves applied.
    pub iterations: usize,

    /// Incumbent accuracy, starting with the initial solution and then
    /// after each improving move.
    pub accuracy_history: Vec<f64>,
}

/// Result of a multi-start run.
#[derive(Debug, Clone)]
pub struct MultistartResult {
    /// Best local optimum over all trials.
    pub best: Solution,

    /// Number of trials executed.
    pub trials: usize,

    /// Trial that produced `best`.
    pub best_trial: usize,

    /// Whether the time limit stopped the run before `num_trials`.
    pub timed_out: bool,
}

/// Executes local search.
pub struct LsRunner;

impl LsRunner {
    /// Hill-climbs from `initial` until no neighbor strictly improves accuracy.
    ///
    /// The returned solution is at least as accurate as `initial`.
    pub fn improve(
        inducer: &GreedyInducer<'_>,
        initial: &Solution,
        neighborhood: Neighborhood,
    ) -> Result<LsResult> {
        let n_attributes = inducer.dataset().n_attributes();
        let mut incumbent = initial.clone();
        let mut accuracy_history = vec![incumbent.accuracy()];

        loop {
            let mut improved: Option<Solution> = None;
            let mut best_accuracy = incumbent.accuracy();
            for neighbor in neighborhood.generate(incumbent.representation(), n_attributes) {
                let candidate = inducer.decode(&neighbor)?;
                if candidate.accuracy() > best_accuracy {
                    best_accuracy = candidate.accuracy();
                    improved = Some(candidate);
                }
            }

            match improved {
                Some(next) => {
                    debug!(
                        "local search step {}: accuracy {:.6} -> {:.6} {}",
                        accuracy_history.len(),
                        incumbent.accuracy(),
                        next.accuracy(),
                        format_representation(next.representation())
                    );
                    incumbent = next;
                    accuracy_history.push(incumbent.accuracy());
                }
                None => break,
            }
        }

        Ok(LsResult {
            best: incumbent,
            iterations: accuracy_history.len() - 1,
            accuracy_history,
        })
    }

    /// Runs multi-start local search with a generator seeded from `config`.
    pub fn multistart(
        inducer: &GreedyInducer<'_>,
        config: &LsConfig,
    ) -> Result<MultistartResult> {
        let mut rng = create_rng(config.seed);
        Self::multistart_with_rng(inducer, config, &mut rng)
    }

    /// Runs multi-start local search drawing from `rng`.
    ///
    /// Each trial builds a random-attribute tree and improves it; the most
    /// accurate optimum (first found on ties) is returned.
    pub fn multistart_with_rng<R: Rng>(
        inducer: &GreedyInducer<'_>,
        config: &LsConfig,
        rng: &mut R,
    ) -> Result<MultistartResult> {
        config.validate().map_err(DtreeError::InvalidConfig)?;

        let start = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);

        let mut best: Option<Solution> = None;
        let mut best_trial = 0;
        let mut trials = 0;
        let mut timed_out = false;

        while trials < config.num_trials {
            if deadline.is_some_and(|limit| start.elapsed() >= limit) {
                warn!("multi-start time limit reached after {} trials", trials);
                timed_out = true;
                break;
            }

            let random = inducer.random(rng)?;
            let improved = Self::improve(inducer, &random, config.neighborhood)?.best;
            debug!(
                "multistart trial {}: random {:.6}, improved {:.6}",
                trials,
                random.accuracy(),
                improved.accuracy()
            );

            let is_better = match &best {
                Some(b) => improved.accuracy() > b.accuracy(),
                None => true,
            };
            if is_better {
                best = Some(improved);
                best_trial = trials;
            }
            trials += 1;
        }

        let best = best.unwrap_or_else(|| inducer.empty_solution());
        info!(
            "multistart local search finished: {} trials, best accuracy {:.6} (trial {})",
            trials,
            best.accuracy(),
            best_trial
        );

        Ok(MultistartResult {
            best,
            trials,
            best_trial,
            timed_out,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AttributeKind, Dataset};
    use crate::tree::capacity;

    /// XOR of the first two columns; the third is independent of the label.
    fn tricky() -> Dataset {
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for i in 0..32usize {
            let a = (i & 1) as f64;
            let b = ((i >> 1) & 1) as f64;
            let c = ((i >> 2) % 3) as f64;
            rows.push(vec![a, b, c]);
            labels.push((i & 1) ^ ((i >> 1) & 1));
        }
        Dataset::new(rows, labels, vec![AttributeKind::Numerical; 3], 2).unwrap()
    }

    #[test]
    fn test_improve_is_monotone() {
        let data = tricky();
        let inducer = GreedyInducer::new(&data, 2).unwrap();
        let mut rng = create_rng(Some(5));
        for _ in 0..5 {
            let start = inducer.random(&mut rng).unwrap();
            let result = LsRunner::improve(&inducer, &start, Neighborhood::Swap).unwrap();
            assert!(result.best.accuracy() >= start.accuracy());
            assert_eq!(result.accuracy_history[0], start.accuracy());
            for w in result.accuracy_history.windows(2) {
                assert!(w[1] > w[0], "each accepted move must strictly improve");
            }
            assert_eq!(result.iterations + 1, result.accuracy_history.len());
        }
    }

    #[test]
    fn test_swap_never_worsens_fixed_start() {
        // Root on the noise column, children on the informative ones.
        let data = tricky();
        let inducer = GreedyInducer::new(&data, 2).unwrap();
        let mut rep = vec![None; capacity(2)];
        rep[0] = Some(2);
        rep[1] = Some(0);
        rep[2] = Some(0);
        let start = inducer.decode(&rep).unwrap();
        let result = LsRunner::improve(&inducer, &start, Neighborhood::Swap).unwrap();
        assert!(result.best.accuracy() >= start.accuracy());
    }

    #[test]
    fn test_local_optimum_is_fixed_point() {
        let data = tricky();
        let inducer = GreedyInducer::new(&data, 2).unwrap();
        let start = inducer.greedy().unwrap();
        let first = LsRunner::improve(&inducer, &start, Neighborhood::Swap).unwrap();
        let again = LsRunner::improve(&inducer, &first.best, Neighborhood::Swap).unwrap();
        assert_eq!(again.iterations, 0);
        assert_eq!(again.best, first.best);
    }

    #[test]
    fn test_replace_neighborhood_reaches_perfect_tree() {
        let data = tricky();
        let inducer = GreedyInducer::new(&data, 2).unwrap();
        let mut rep = vec![None; capacity(2)];
        rep[0] = Some(2);
        rep[1] = Some(0);
        rep[2] = Some(0);
        let start = inducer.decode(&rep).unwrap();
        assert_eq!(start.accuracy(), 0.5);
        let result = LsRunner::improve(&inducer, &start, Neighborhood::Replace).unwrap();
        assert_eq!(result.best.accuracy(), 1.0);
    }

    #[test]
    fn test_multistart_beats_or_matches_greedy() {
        // At depth 1 thirty restarts cover both informative attributes.
        let data = tricky();
        let inducer = GreedyInducer::new(&data, 1).unwrap();
        let greedy = inducer.greedy().unwrap();
        let config = LsConfig::default().with_num_trials(30).with_seed(42);
        let result = LsRunner::multistart(&inducer, &config).unwrap();
        assert_eq!(result.trials, 30);
        assert!(!result.timed_out);
        assert!(result.best_trial < result.trials);
        assert!(result.best.accuracy() >= greedy.accuracy());
    }

    #[test]
    fn test_multistart_deterministic() {
        let data = tricky();
        let inducer = GreedyInducer::new(&data, 3).unwrap();
        let config = LsConfig::default().with_num_trials(10).with_seed(9);
        let a = LsRunner::multistart(&inducer, &config).unwrap();
        let b = LsRunner::multistart(&inducer, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_trial, b.best_trial);
    }

    #[test]
    fn test_multistart_rejects_invalid_config() {
        let data = tricky();
        let inducer = GreedyInducer::new(&data, 2).unwrap();
        let config = LsConfig::default().with_num_trials(0);
        let err = LsRunner::multistart(&inducer, &config).unwrap_err();
        assert!(matches!(err, DtreeError::InvalidConfig(_)));
    }
}
