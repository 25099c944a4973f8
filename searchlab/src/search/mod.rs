pub mod binary;
pub mod interpolation;
pub mod jump;
pub mod linear;

use std::fmt;

use crate::results::SearchOutcome;

/// The search strategies available for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Linear,
    Binary,
    Jump,
    Interpolation,
}

impl Algorithm {
    /// Every algorithm, in presentation order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::Jump,
        Algorithm::Interpolation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Linear => "linear search",
            Algorithm::Binary => "binary search",
            Algorithm::Jump => "jump search",
            Algorithm::Interpolation => "interpolation search",
        }
    }

    /// Whether the algorithm requires the sequence sorted ascending
    pub fn requires_sorted(&self) -> bool {
        !matches!(self, Algorithm::Linear)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the given algorithm over `seq`.
///
/// All algorithms except [`Algorithm::Linear`] expect `seq` sorted
/// ascending; an unsorted sequence yields a meaningless outcome, not an
/// error.
pub fn search(seq: &[i64], target: i64, algorithm: Algorithm) -> SearchOutcome {
    match algorithm {
        Algorithm::Linear => linear::search(seq, target),
        Algorithm::Binary => binary::search(seq, target),
        Algorithm::Jump => jump::search(seq, target),
        Algorithm::Interpolation => interpolation::search(seq, target),
    }
}
