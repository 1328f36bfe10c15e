//! Decision tree induction by greedy construction and metaheuristic search.
//!
//! Trees of bounded depth are grown top-down by information gain. The
//! attribute tested at each node can be chosen exhaustively, read from a
//! flat attribute-assignment array, or drawn at random; the array form lets
//! local search and a genetic algorithm explore tree structures while the
//! thresholds stay greedy.
//!
//! - **[`data`]**: Training set with numerical and categorical attributes.
//! - **[`tree`]**: Fixed-capacity binary tree and scored solutions.
//! - **[`greedy`]**: Top-down inducer and split search.
//! - **[`ls`]**: Steepest-ascent local search and multi-start.
//! - **[`ga`]**: Genetic algorithm with subtree crossover.
//! - **[`report`]**: Run summary and plain-text export.
//!
//! # Quick start
//!
//! ```
//! use u_dtree::data::{AttributeKind, Dataset};
//! use u_dtree::ga::{GaConfig, GaRunner};
//! use u_dtree::greedy::GreedyInducer;
//!
//! let rows = (0..20).map(|i| vec![(i % 4) as f64, (i % 3) as f64]).collect();
//! let labels = (0..20).map(|i| usize::from(i % 4 > 1)).collect();
//! let data = Dataset::new(
//!     rows,
//!     labels,
//!     vec![AttributeKind::Numerical, AttributeKind::Categorical { levels: 3 }],
//!     2,
//! )
//! .unwrap();
//!
//! let inducer = GreedyInducer::new(&data, 2).unwrap();
//! let config = GaConfig::default().with_population_size(10).with_seed(7);
//! let result = GaRunner::run(&inducer, &config).unwrap();
//! assert!(result.best.accuracy() >= result.accuracy_history[0]);
//! println!("{}", result.best.tree());
//! ```

pub mod data;
pub mod error;
pub mod ga;
pub mod greedy;
pub mod ls;
pub mod random;
pub mod report;
pub mod tree;

pub use error::{DtreeError, Result};
