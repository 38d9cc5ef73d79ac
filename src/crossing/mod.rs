//! Crossing-detection 2-opt.
//!
//! Finds every pair of tour edges whose segments intersect, then applies
//! one 2-opt swap per recorded crossing. The crossing list is computed once
//! from the starting tour and is not refreshed between swaps, so later
//! swaps act on positions looked up in an already-mutated tour. The result
//! may therefore keep some crossings or introduce new ones; callers that
//! need a crossing-free tour should use [`crate::exhaustive`] instead.
//!
//! # Key Types
//!
//! - [`Crossing`]: two non-adjacent edges that intersect
//! - [`CrossingConfig`]: containment rule and construction settings
//! - [`CrossingRunner`]: detection plus the swap sweep
//! - [`CrossingResult`]: improved tour with sweep statistics
//!
//! # References
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

mod config;
mod runner;
mod types;

pub use config::CrossingConfig;
pub use runner::{find_crossings, CrossingResult, CrossingRunner};
pub use types::Crossing;
