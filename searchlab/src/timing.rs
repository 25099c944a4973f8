use std::time::{Duration, Instant};
use tracing::debug;

use crate::results::SearchOutcome;
use crate::search::{self, Algorithm};

/// A search outcome together with how long the call took.
///
/// Clock sampling happens here, around the call, never inside the
/// algorithm bodies; comparison counts stay the primary cost metric and
/// the elapsed time is informational.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

/// Runs one algorithm over `seq`, sampling the monotonic clock around
/// the call.
pub fn measure(seq: &[i64], target: i64, algorithm: Algorithm) -> Measurement {
    let start = Instant::now();
    let outcome = search::search(seq, target, algorithm);
    let elapsed = start.elapsed();

    debug!(
        algorithm = %algorithm,
        comparisons = outcome.comparisons,
        found = outcome.is_found(),
        ?elapsed,
        "search finished"
    );

    Measurement {
        algorithm,
        outcome,
        elapsed,
    }
}

/// Runs every algorithm over the same input, in presentation order
pub fn measure_all(seq: &[i64], target: i64) -> Vec<Measurement> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| measure(seq, target, algorithm))
        .collect()
}
