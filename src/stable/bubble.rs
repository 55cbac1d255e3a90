use std::cmp::Ordering;

use crate::trace::Tracer;
use crate::{MoveKind, RunStats};

sort_impl!("Bubble Sort", stable: true, moves: MoveKind::Swaps);

/// Sorts the slice with bubble sort.
///
/// This sort is stable, in-place and *O*(*n*^2) worst-case. A pass without a single swap proves
/// the slice sorted and ends the sort, so sorted input takes *O*(*n*).
pub fn sort(v: &mut [i32], tracer: &mut Tracer<'_>) -> RunStats {
    sort_by(v, |a, b| a.cmp(b), tracer)
}

/// Sorts the slice with a comparator function, see [`sort`].
pub fn sort_by<F>(v: &mut [i32], mut compare: F, tracer: &mut Tracer<'_>) -> RunStats
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    bubble_sort(v, &mut |a: &i32, b: &i32| compare(a, b) == Ordering::Less, tracer)
}

fn bubble_sort<F>(v: &mut [i32], is_less: &mut F, tracer: &mut Tracer<'_>) -> RunStats
where
    F: FnMut(&i32, &i32) -> bool,
{
    let mut stats = RunStats::default();
    let len = v.len();

    for pass in 0..len.saturating_sub(1) {
        tracer.note(format_args!("pass {}", pass + 1));

        let mut swapped = false;

        // The last `pass` elements are already in their final position.
        for j in 0..(len - pass - 1) {
            stats.comparisons += 1;
            tracer.step(
                v,
                format_args!("comparing positions {} and {}", j, j + 1),
                &[j, j + 1],
            );

            // Strictly greater, equal neighbours are never exchanged.
            let will_swap = is_less(&v[j + 1], &v[j]);
            tracer.comparison(v[j], v[j + 1], will_swap);

            if will_swap {
                v.swap(j, j + 1);
                stats.moves += 1;
                swapped = true;
            }
        }

        if !swapped {
            tracer.note(format_args!("no swaps in pass {}, sorted", pass + 1));
            break;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_hand_trace() {
        let mut v = [5, 2, 8, 1];
        let stats = sort(&mut v, &mut Tracer::disabled());
        assert_eq!(v, [1, 2, 5, 8]);
        assert_eq!(
            stats,
            RunStats {
                comparisons: 6,
                moves: 4
            }
        );
    }

    #[test]
    fn sorted_input_takes_single_pass() {
        let mut v: Vec<i32> = (0..100).collect();
        let stats = sort(&mut v, &mut Tracer::disabled());
        assert_eq!(stats.comparisons, 99);
        assert_eq!(stats.moves, 0);
    }

    #[test]
    fn reversed_input_is_quadratic() {
        let mut v: Vec<i32> = (0..10).rev().collect();
        let stats = sort(&mut v, &mut Tracer::disabled());
        assert_eq!(stats.comparisons, 45);
        assert_eq!(stats.moves, 45);
    }
}
