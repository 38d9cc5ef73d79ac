//! Exhaustive 2-opt.
//!
//! Compares every pair of non-overlapping edges, applying a swap as soon as
//! it strictly shortens the tour, and repeats full passes until a pass
//! makes no swap or the pass cap is reached. The cap is a fixed budget,
//! not a convergence bound: a capped run is not necessarily 2-optimal.
//!
//! # Key Types
//!
//! - [`ExhaustiveConfig`]: pass cap and construction settings
//! - [`ExhaustiveRunner`]: runs the pass loop
//! - [`ExhaustiveResult`]: improved tour with per-pass statistics
//!
//! # References
//!
//! - Croes, G.A. (1958). "A method for solving traveling salesman problems",
//!   *Operations Research* 6(6), 791-812.
//! - Lin, S. (1965). "Computer solutions of the traveling salesman problem",
//!   *Bell System Technical Journal* 44(10), 2245-2269.

mod config;
mod runner;

pub use config::ExhaustiveConfig;
pub use runner::{ExhaustiveResult, ExhaustiveRunner};
