//! Strategy facade.
//!
//! Runs one of the tour strategies over a city set, times it, and logs a
//! one-line summary. [`solve_all`] runs several strategies over the same
//! immutable city set; with the `parallel` feature they run concurrently
//! on the rayon pool.

mod config;
mod runner;

pub use config::{SolveConfig, Strategy};
pub use runner::{solve, solve_all, solve_with, Solution};
