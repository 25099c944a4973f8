use crate::results::SearchOutcome;

/// Jumps ahead in blocks of `floor(sqrt(n))` until a block that could
/// hold the target is found, then scans that block linearly. Requires
/// ascending order.
///
/// The block increment stays `floor(sqrt(n))` of the full length for the
/// whole call; it is never re-derived from the remaining range. The
/// comparison counts of both phases depend on that.
pub fn search(seq: &[i64], target: i64) -> SearchOutcome {
    let n = seq.len();
    if n == 0 {
        return SearchOutcome::missing(0);
    }

    let block = n.isqrt();
    let mut step = block;
    let mut prev = 0;
    let mut comparisons = 0;

    // Block phase: advance while the current block tops out below the target.
    while prev < n && seq[step.min(n) - 1] < target {
        comparisons += 1;
        prev = step;
        step += block;
        if prev >= n {
            return SearchOutcome::missing(comparisons);
        }
    }

    // Scan phase inside the located block.
    while prev < step.min(n) {
        comparisons += 1;
        if seq[prev] == target {
            return SearchOutcome::found(prev, comparisons);
        }
        prev += 1;
    }

    SearchOutcome::missing(comparisons)
}
