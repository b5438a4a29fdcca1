//! Grid optimization by repeated generation.
//!
//! Each iteration generates a brand-new random grid, scores it by the
//! discovery depth of its goal, and lets an acceptance policy decide
//! whether it replaces the incumbent. The built-in policies are:
//!
//! - **Descent**: keep only improvements.
//! - **Random restarts**: descent with a periodically reset counter.
//! - **Random uphill**: descent that may also take worse grids.
//! - **Simulated annealing**: like random uphill, with the threshold derived
//!   from the initial temperature and decay rate.
//!
//! All four share one loop ([`OptimizerRunner`]); custom policies plug in
//! through [`AcceptancePolicy`].
//!
//! # References
//!
//! - Neller, T. (2010), "Rook Jumping Maze Design Considerations"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;
mod types;

pub use config::{Acceptance, OptimizerConfig};
pub use runner::{OptimizerResult, OptimizerRunner};
pub use types::{improves, AcceptancePolicy, Acceptor, Candidate, Score};
