use colored::Colorize;
use searchlab::timing::Measurement;

/// Renders the ranked comparison-count summary. Rows sort by ascending
/// comparisons (ties keep presentation order); each bar scales relative
/// to the fewest comparisons observed and the cheapest rows are marked.
pub fn render(measurements: &[Measurement]) -> Vec<String> {
    let Some(fewest) = measurements.iter().map(|m| m.outcome.comparisons).min() else {
        return Vec::new();
    };
    // A zero minimum falls back to raw counts as bar lengths.
    let scale = fewest.max(1);

    let mut ranked: Vec<&Measurement> = measurements.iter().collect();
    ranked.sort_by_key(|m| m.outcome.comparisons);

    ranked
        .iter()
        .map(|m| {
            let comparisons = m.outcome.comparisons;
            let bar = "█".repeat(comparisons / scale);
            let mut line = format!("  {}: {} comparisons {}", m.algorithm, comparisons, bar);
            if comparisons == fewest {
                line.push_str(&format!(" {}", "★ fewest".green()));
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchlab::{Algorithm, SearchOutcome};
    use std::time::Duration;

    fn measurement(algorithm: Algorithm, comparisons: usize) -> Measurement {
        Measurement {
            algorithm,
            outcome: SearchOutcome::found(0, comparisons),
            elapsed: Duration::from_micros(1),
        }
    }

    #[test]
    fn test_rows_ranked_by_comparisons() {
        let lines = render(&[
            measurement(Algorithm::Linear, 12),
            measurement(Algorithm::Binary, 3),
            measurement(Algorithm::Jump, 6),
        ]);
        assert!(lines[0].starts_with("  binary search"));
        assert!(lines[1].starts_with("  jump search"));
        assert!(lines[2].starts_with("  linear search"));
    }

    #[test]
    fn test_bars_scale_by_the_minimum() {
        let lines = render(&[
            measurement(Algorithm::Linear, 12),
            measurement(Algorithm::Binary, 3),
        ]);
        assert_eq!(lines[0].matches('█').count(), 1);
        assert_eq!(lines[1].matches('█').count(), 4);
    }

    #[test]
    fn test_fewest_row_is_marked() {
        let lines = render(&[
            measurement(Algorithm::Linear, 12),
            measurement(Algorithm::Binary, 3),
        ]);
        assert!(lines[0].contains("★ fewest"));
        assert!(!lines[1].contains("★ fewest"));
    }

    #[test]
    fn test_zero_minimum_uses_raw_counts() {
        let lines = render(&[
            measurement(Algorithm::Interpolation, 0),
            measurement(Algorithm::Binary, 3),
        ]);
        assert_eq!(lines[0].matches('█').count(), 0);
        assert_eq!(lines[1].matches('█').count(), 3);
        assert!(lines[0].contains("★ fewest"));
        assert!(!lines[1].contains("★ fewest"));
    }

    #[test]
    fn test_ties_keep_presentation_order() {
        let lines = render(&[
            measurement(Algorithm::Binary, 3),
            measurement(Algorithm::Jump, 3),
        ]);
        assert!(lines[0].starts_with("  binary search"));
        assert!(lines[1].starts_with("  jump search"));
        assert!(lines[0].contains("★ fewest"));
        assert!(lines[1].contains("★ fewest"));
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert!(render(&[]).is_empty());
    }
}
