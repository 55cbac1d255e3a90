use std::cmp::Ordering;

use crate::trace::Tracer;
use crate::{MoveKind, RunStats};

sort_impl!("Insertion Sort", stable: true, moves: MoveKind::Shifts);

/// Sorts the slice with insertion sort.
///
/// Stable, in-place, *O*(*n*) on sorted input and *O*(*n*^2) on reversed input. Every key test
/// is counted, including the one that stops the shift loop.
pub fn sort(v: &mut [i32], tracer: &mut Tracer<'_>) -> RunStats {
    sort_by(v, |a, b| a.cmp(b), tracer)
}

pub fn sort_by<F>(v: &mut [i32], mut compare: F, tracer: &mut Tracer<'_>) -> RunStats
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    insertion_sort(v, &mut |a: &i32, b: &i32| compare(a, b) == Ordering::Less, tracer)
}

fn insertion_sort<F>(v: &mut [i32], is_less: &mut F, tracer: &mut Tracer<'_>) -> RunStats
where
    F: FnMut(&i32, &i32) -> bool,
{
    let mut stats = RunStats::default();

    for i in 1..v.len() {
        let key = v[i];

        tracer.note(format_args!("inserting {key} from position {i}"));
        tracer.step(v, format_args!("current state"), &[i]);

        // `hole` is the slot the key would be placed in if the shifting stopped now.
        let mut hole = i;
        while hole > 0 {
            stats.comparisons += 1;
            let prev = v[hole - 1];
            if !is_less(&key, &prev) {
                break;
            }

            tracer.note(format_args!("{prev} > {key}, shifting {prev} right"));
            v[hole] = prev;
            stats.moves += 1;
            hole -= 1;
        }

        v[hole] = key;

        tracer.note(format_args!("placing {key} at position {hole}"));
        tracer.step(v, format_args!("result"), &[hole]);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopping_comparison_is_counted() {
        // 2: one shift, reaches the front, no stopping test.
        // 8: stops at 5, one comparison.
        // 1: three shifts, reaches the front.
        let mut v = [5, 2, 8, 1];
        let stats = sort(&mut v, &mut Tracer::disabled());
        assert_eq!(v, [1, 2, 5, 8]);
        assert_eq!(
            stats,
            RunStats {
                comparisons: 5,
                moves: 4
            }
        );
    }

    #[test]
    fn sorted_input_never_shifts() {
        let mut v: Vec<i32> = (0..50).collect();
        let stats = sort(&mut v, &mut Tracer::disabled());
        assert_eq!(stats.comparisons, 49);
        assert_eq!(stats.moves, 0);
    }

    #[test]
    fn reversed_input_shifts_everything() {
        let mut v: Vec<i32> = (0..10).rev().collect();
        let stats = sort(&mut v, &mut Tracer::disabled());
        assert_eq!(stats.moves, 45);
        assert_eq!(stats.comparisons, 45);
    }
}
