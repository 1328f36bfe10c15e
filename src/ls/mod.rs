//! Local search over attribute-assignment representations.
//!
//! A representation is improved by steepest-ascent hill climbing: every
//! neighbor is decoded into a tree by the
//! [`GreedyInducer`](crate::greedy::GreedyInducer) and the most accurate
//! strictly improving one replaces the incumbent, until none remains.
//!
//! # Key Types
//!
//! - [`Neighborhood`]: Move structure (swap with parent, or replace)
//! - [`LsConfig`]: Multi-start parameters (trials, time limit, seed)
//! - [`LsRunner`]: Single hill climb and multi-start driver
//!
//! # References
//!
//! - Martí, Resende & Ribeiro (2013), "Multi-start methods for combinatorial
//!   optimization", *European Journal of Operational Research* 226(1).

mod config;
mod neighborhood;
mod runner;

pub use config::LsConfig;
pub use neighborhood::{replace_neighbors, swap_neighbors, Neighborhood};
pub use runner::{LsResult, LsRunner, MultistartResult};
