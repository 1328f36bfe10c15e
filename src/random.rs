//! Seeded random number generation.
//!
//! Every algorithm draws from one generator created here and passed down
//! explicitly, so a seed fully determines a run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator for a run.
///
/// `None` seeds from system entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
