use crate::trace::Tracer;
use crate::{MoveKind, RunStats, SearchOutcome};

search_impl!("Binary Search", requires_sorted: true, moves: MoveKind::None);

/// Bisects the inclusive range `[l, r]` until `target` is hit or the range is empty.
///
/// With duplicates any matching index may be returned.
pub fn search(v: &[i32], target: i32, tracer: &mut Tracer<'_>) -> SearchOutcome {
    let mut stats = RunStats::default();

    if v.is_empty() {
        return SearchOutcome { index: None, stats };
    }

    let mut l = 0;
    let mut r = v.len() - 1;

    while l <= r {
        // Never `(l + r) / 2`, that overflows for large ranges.
        let m = l + (r - l) / 2;

        stats.comparisons += 1;
        tracer.step(v, format_args!("range [{l}..{r}], middle {m}"), &[l, m, r]);

        if v[m] == target {
            return SearchOutcome {
                index: Some(m),
                stats,
            };
        }

        if v[m] < target {
            l = m + 1;
        } else {
            // `r = m - 1` would underflow, and the range below 0 is empty anyway.
            if m == 0 {
                break;
            }
            r = m - 1;
        }
    }

    SearchOutcome { index: None, stats }
}
