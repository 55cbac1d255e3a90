use std::cmp::Ordering;

use crate::trace::Tracer;
use crate::{MoveKind, RunStats};

sort_impl!("Quicksort", stable: false, moves: MoveKind::Swaps);

/// Sorts the slice with quicksort, using the last element of each range as pivot.
///
/// Unstable, in-place, *O*(*n* \* log(*n*)) on average and *O*(*n*^2) on sorted or reversed input
/// because of the fixed pivot choice.
///
/// Pending ranges are kept on an explicit stack instead of the call stack, so sorted input doesn't
/// recurse `n` levels deep. The left range is always finished before the right one.
pub fn sort(v: &mut [i32], tracer: &mut Tracer<'_>) -> RunStats {
    sort_by(v, |a, b| a.cmp(b), tracer)
}

pub fn sort_by<F>(v: &mut [i32], mut compare: F, tracer: &mut Tracer<'_>) -> RunStats
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    let mut is_less = |a: &i32, b: &i32| compare(a, b) == Ordering::Less;
    let mut stats = RunStats::default();

    // Half-open ranges `start..end`.
    let mut pending = vec![(0, v.len())];

    while let Some((start, end)) = pending.pop() {
        if end - start <= 1 {
            continue;
        }

        tracer.note(format_args!("partitioning [{}..{}]", start, end - 1));

        let pivot_pos = partition(v, start, end, &mut is_less, &mut stats, tracer);

        tracer.note(format_args!("pivot placed at position {pivot_pos}"));
        tracer.step(v, format_args!("current state"), &[pivot_pos]);

        // Pushed in reverse so the left side is popped first.
        pending.push((pivot_pos + 1, end));
        pending.push((start, pivot_pos));
    }

    stats
}

/// Lomuto partition of `v[start..end]` around `v[end - 1]`.
///
/// Returns the final position of the pivot. Everything left of it is strictly less, everything
/// right of it is greater or equal.
fn partition<F>(
    v: &mut [i32],
    start: usize,
    end: usize,
    is_less: &mut F,
    stats: &mut RunStats,
    tracer: &mut Tracer<'_>,
) -> usize
where
    F: FnMut(&i32, &i32) -> bool,
{
    let high = end - 1;
    let pivot = v[high];

    tracer.note(format_args!("pivot {pivot}"));

    // Number of elements found less than the pivot so far, they occupy `start..start + num_lt`.
    let mut num_lt = 0;

    for j in start..high {
        stats.comparisons += 1;

        let is_lt = is_less(&v[j], &pivot);
        tracer.comparison(v[j], pivot, is_lt);

        if is_lt {
            let i = start + num_lt;
            num_lt += 1;

            // A placement onto itself still counts as a structural move.
            if i != j {
                tracer.note(format_args!("exchanging {} and {}", v[i], v[j]));
                v.swap(i, j);
            }
            stats.moves += 1;
        }
    }

    let pivot_pos = start + num_lt;
    v.swap(pivot_pos, high);
    stats.moves += 1;

    pivot_pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_placement() {
        // Pivot 1: nothing smaller, pivot swapped to the front.
        // [1, 2, 8, 5] range 1..4 pivot 5: 2 placed onto itself, pivot swapped into slot 2.
        // [1, 2, 5, 8] range 3..4 is a single element.
        let mut v = [5, 2, 8, 1];
        let stats = sort(&mut v, &mut Tracer::disabled());
        assert_eq!(v, [1, 2, 5, 8]);
        assert_eq!(
            stats,
            RunStats {
                comparisons: 5,
                moves: 3
            }
        );
    }

    #[test]
    fn sorted_input_is_quadratic() {
        let len = 2_000;
        let mut v: Vec<i32> = (0..len).collect();
        let stats = sort(&mut v, &mut Tracer::disabled());
        let len = len as u64;
        assert_eq!(stats.comparisons, len * (len - 1) / 2);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}
