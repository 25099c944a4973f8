use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

use searchlab::CompareConfig;

/// A generated comparison input: sorted distinct values and a target
/// guaranteed to be present.
pub struct Dataset {
    pub values: Vec<i64>,
    pub target: i64,
}

/// Draws `size` distinct values uniformly from `0..size * span_factor`,
/// sorts them ascending, and picks the target from the array. Seeded
/// runs reproduce exactly.
pub fn generate(config: &CompareConfig) -> Dataset {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let span = (config.size as i64).saturating_mul(config.span_factor);
    let mut seen = HashSet::with_capacity(config.size);
    while seen.len() < config.size {
        seen.insert(rng.gen_range(0..span));
    }

    let mut values: Vec<i64> = seen.into_iter().collect();
    values.sort_unstable();
    let target = values[rng.gen_range(0..values.len())];

    debug!(size = values.len(), span, target, "generated dataset");

    Dataset { values, target }
}
