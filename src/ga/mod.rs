//! Genetic algorithm over decision tree representations.
//!
//! Individuals are attribute-assignment representations materialized by
//! the [`GreedyInducer`](crate::greedy::GreedyInducer). Each generation
//! pairs the best individuals, exchanges subtrees between partners, decodes
//! and locally improves every child, then keeps the best of parents and
//! offspring.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, generations, selection)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best-ever solution with per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: Swap-point selection and subtree crossover
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Barros et al. (2012), "A Survey of Evolutionary Algorithms for
//!   Decision-Tree Induction", *IEEE Trans. SMC Part C* 42(3).

mod config;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
