//! Step-by-step replay of the binary search narrowing loop, for
//! rendering rather than searching. The trace mirrors the
//! `left`/`right`/`mid` evolution of [`crate::search::binary`] exactly,
//! one step per comparison, so a rendered walkthrough and the search
//! outcome can never disagree.

/// What a single probe decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probed element equals the target
    Matched,
    /// Probed element below the target; the range moves right
    MoveRight,
    /// Probed element above the target; the range moves left
    MoveLeft,
}

/// One step of the replay: the candidate range before the probe, the
/// probed index and value, and where the range went next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    /// 1-based step number
    pub step: usize,
    pub left: usize,
    pub right: usize,
    pub mid: usize,
    pub value: i64,
    pub outcome: ProbeOutcome,
}

impl TraceStep {
    /// Renders the full array with the probed element bracketed and
    /// everything outside the candidate range masked out.
    pub fn render_band(&self, seq: &[i64]) -> String {
        let width = cell_width(seq);
        let mut band = String::new();
        for (i, &value) in seq.iter().enumerate() {
            if i == self.mid {
                band.push_str(&format!("[{value:>width$}]"));
            } else if i >= self.left && i <= self.right {
                band.push_str(&format!(" {value:>width$} "));
            } else {
                band.push_str(&format!(" {:>width$} ", "·"));
            }
        }
        band
    }

    /// One line stating the probe's verdict
    pub fn describe(&self, target: i64) -> String {
        match self.outcome {
            ProbeOutcome::Matched => format!("found {} at index {}", self.value, self.mid),
            ProbeOutcome::MoveRight => format!("{} < {}, moving right", self.value, target),
            ProbeOutcome::MoveLeft => format!("{} > {}, moving left", self.value, target),
        }
    }
}

fn cell_width(seq: &[i64]) -> usize {
    seq.iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
}

/// Lazy, finite replay of a binary search over `seq`.
///
/// Yields one [`TraceStep`] per probe and stops after a match or once
/// the range empties. Build a fresh trace to replay from the start.
pub struct BinaryTrace<'a> {
    seq: &'a [i64],
    target: i64,
    left: isize,
    right: isize,
    step: usize,
    done: bool,
}

/// Starts a replay of binary search for `target` over `seq`
pub fn trace(seq: &[i64], target: i64) -> BinaryTrace<'_> {
    BinaryTrace {
        seq,
        target,
        left: 0,
        right: seq.len() as isize - 1,
        step: 0,
        done: false,
    }
}

impl Iterator for BinaryTrace<'_> {
    type Item = TraceStep;

    fn next(&mut self) -> Option<TraceStep> {
        if self.done || self.left > self.right {
            return None;
        }

        self.step += 1;
        let mid = (self.left + self.right) / 2;
        let value = self.seq[mid as usize];
        let (left, right) = (self.left as usize, self.right as usize);

        let outcome = if value == self.target {
            self.done = true;
            ProbeOutcome::Matched
        } else if value < self.target {
            self.left = mid + 1;
            ProbeOutcome::MoveRight
        } else {
            self.right = mid - 1;
            ProbeOutcome::MoveLeft
        };

        Some(TraceStep {
            step: self.step,
            left,
            right,
            mid: mid as usize,
            value,
            outcome,
        })
    }
}

/// Renders the whole walkthrough as printable lines: per step, the
/// masked band, the range summary, and the probe's verdict.
pub fn render(seq: &[i64], target: i64) -> Vec<String> {
    let mut lines = Vec::new();
    for step in trace(seq, target) {
        lines.push(format!("step {}: {}", step.step, step.render_band(seq)));
        lines.push(format!(
            "        range [{}..{}], mid {} = {}",
            step.left, step.right, step.mid, step.value
        ));
        lines.push(format!("  -> {}", step.describe(target)));
    }
    lines
}
