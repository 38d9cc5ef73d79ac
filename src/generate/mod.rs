//! Seeded random city generation.
//!
//! Produces reproducible instances with integer coordinates inside a
//! rectangle. Randomness comes only from the explicit seed, never from
//! process-wide state.

mod config;

pub use config::GeneratorConfig;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::geometry::{City, CitySet};

/// Draws `n` cities uniformly from `[0, width) × [0, height)`.
///
/// Duplicate draws collapse, so the set may hold fewer than `n` cities.
/// Without an explicit seed the count itself seeds the generator, so every
/// size maps to one fixed instance.
///
/// # Examples
///
/// ```
/// use u_tsp::generate::{generate_cities, GeneratorConfig};
///
/// let a = generate_cities(50, &GeneratorConfig::default()).unwrap();
/// let b = generate_cities(50, &GeneratorConfig::default()).unwrap();
/// assert_eq!(a, b);
/// assert!(a.len() <= 50);
/// ```
pub fn generate_cities(n: usize, config: &GeneratorConfig) -> Result<CitySet> {
    config.validate().map_err(Error::InvalidConfig)?;

    let seed = config.seed.unwrap_or(n as u64);
    let mut rng = StdRng::seed_from_u64(seed);
    let cities: Vec<City> = (0..n)
        .map(|_| {
            City::new(
                rng.random_range(0..config.width) as f64,
                rng.random_range(0..config.height) as f64,
            )
        })
        .collect();

    let set = CitySet::new(cities)?;
    log::debug!(
        "generate_cities: requested={n} unique={} seed={seed}",
        set.len()
    );
    Ok(set)
}
