//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::ls::Neighborhood;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_dtree::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_dtree::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection_fraction(0.3)
///     .with_time_limit_ms(60_000)
///     .with_seed(1);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals kept after each generation.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Fraction of the population (best first) selected as parents.
    ///
    /// The parent count is `floor(fraction * population)`, reduced by one
    /// when odd so parents pair evenly.
    pub selection_fraction: f64,

    /// Neighborhood used by the local search applied to every offspring.
    pub neighborhood: Neighborhood,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// The check happens at the start of each generation, so the actual
    /// runtime may exceed this limit by one generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 10,
            selection_fraction: 0.4,
            neighborhood: Neighborhood::Swap,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the parent selection fraction.
    pub fn with_selection_fraction(mut self, fraction: f64) -> Self {
        self.selection_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the local search neighborhood applied to offspring.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents selected from a population of `population` individuals.
    pub fn parent_count(&self, population: usize) -> usize {
        let n = (self.selection_fraction * population as f64).floor() as usize;
        n - n % 2
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.selection_fraction) {
            return Err("selection_fraction must lie in [0, 1]".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
