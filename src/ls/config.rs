//! Local search configuration.

use super::neighborhood::Neighborhood;

/// Configuration for single-start and multi-start local search.
///
/// # Examples
///
/// ```
/// use u_dtree::ls::{LsConfig, Neighborhood};
///
/// let config = LsConfig::default()
///     .with_num_trials(50)
///     .with_time_limit_ms(2_000)
///     .with_seed(7);
/// assert_eq!(config.num_trials, 50);
/// assert_eq!(config.neighborhood, Neighborhood::Swap);
/// ```
#[derive(Debug, Clone)]
pub struct LsConfig {
    /// Neighborhood explored at each hill-climbing step.
    pub neighborhood: Neighborhood,

    /// Maximum number of random restarts in multi-start mode.
    pub num_trials: usize,

    /// Optional wall-clock limit in milliseconds for multi-start mode.
    ///
    /// Checked before each trial, so a run may exceed it by one trial.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for LsConfig {
    fn default() -> Self {
        Self {
            neighborhood: Neighborhood::Swap,
            num_trials: 100,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl LsConfig {
    /// Sets the neighborhood structure.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the maximum number of restarts.
    pub fn with_num_trials(mut self, n: usize) -> Self {
        self.num_trials = n;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_trials == 0 {
            return Err("num_trials must be at least 1".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LsConfig::default();
        assert_eq!(config.neighborhood, Neighborhood::Swap);
        assert_eq!(config.num_trials, 100);
        assert!(config.time_limit_ms.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LsConfig::default()
            .with_neighborhood(Neighborhood::Replace)
            .with_num_trials(5)
            .with_time_limit_ms(100)
            .with_seed(3);
        assert_eq!(config.neighborhood, Neighborhood::Replace);
        assert_eq!(config.num_trials, 5);
        assert_eq!(config.time_limit_ms, Some(100));
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_validate_zero_trials() {
        assert!(LsConfig::default().with_num_trials(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert!(LsConfig::default().with_time_limit_ms(0).validate().is_err());
    }
}
