use crate::trace::Tracer;
use crate::{MoveKind, RunStats, SearchOutcome};

search_impl!("Linear Search", requires_sorted: false, moves: MoveKind::None);

/// Returns the first index holding `target`.
pub fn search(v: &[i32], target: i32, tracer: &mut Tracer<'_>) -> SearchOutcome {
    let mut stats = RunStats::default();

    for (i, &val) in v.iter().enumerate() {
        stats.comparisons += 1;
        tracer.step(v, format_args!("checking position {i}"), &[i]);

        if val == target {
            return SearchOutcome {
                index: Some(i),
                stats,
            };
        }
    }

    SearchOutcome { index: None, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let outcome = search(&[4, 7, 7, 1], 7, &mut Tracer::disabled());
        assert_eq!(outcome.index, Some(1));
        assert_eq!(outcome.stats.comparisons, 2);
    }

    #[test]
    fn miss_scans_everything() {
        let outcome = search(&[4, 7, 1], 9, &mut Tracer::disabled());
        assert_eq!(outcome.index, None);
        assert_eq!(outcome.stats.comparisons, 3);
    }
}
