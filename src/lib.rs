//! Rook jumping maze generation and search.
//!
//! A rook jumping maze is an n×n board of jump distances. A piece on a cell
//! must move exactly that many cells right, left, down, or up; the task is to
//! get from the top-left start to the bottom-right goal in as few jumps as
//! possible.
//!
//! - **Grid** ([`grid`]): boards, positions, and cell labels.
//! - **Graph** ([`graph`]): the directed jump graph of a board.
//! - **Search** ([`search`]): breadth-first shortest paths and depth-first
//!   discovery-depth labeling.
//! - **Optimizer** ([`optimizer`]): repeated grid generation under descent,
//!   random-restart, random-uphill, and simulated-annealing acceptance.
//!
//! # Examples
//!
//! ```
//! use rook_maze::optimizer::{OptimizerConfig, OptimizerRunner};
//!
//! let config = OptimizerConfig::default().with_iterations(200).with_seed(42);
//! let result = OptimizerRunner::run(&config);
//! let best = result.incumbent.expect("at least one iteration ran");
//! println!("{}\n\n{}", best.grid, best.depths);
//! ```

pub mod graph;
pub mod grid;
pub mod optimizer;
pub mod search;
