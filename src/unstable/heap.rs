use std::cmp::Ordering;

use crate::trace::Tracer;
use crate::{MoveKind, RunStats};

sort_impl!("Heapsort", stable: false, moves: MoveKind::Swaps);

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Unstable and in-place. The first phase turns the slice into a max-heap, the second repeatedly
/// swaps the maximum behind the shrinking heap.
pub fn sort(v: &mut [i32], tracer: &mut Tracer<'_>) -> RunStats {
    sort_by(v, |a, b| a.cmp(b), tracer)
}

pub fn sort_by<F>(v: &mut [i32], mut compare: F, tracer: &mut Tracer<'_>) -> RunStats
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    let mut is_less = |a: &i32, b: &i32| compare(a, b) == Ordering::Less;
    let mut stats = RunStats::default();
    let len = v.len();

    tracer.note(format_args!("phase 1: building max-heap"));
    for node in (0..len / 2).rev() {
        sift_down(v, len, node, &mut is_less, &mut stats);
    }

    if len > 0 {
        tracer.step(v, format_args!("max-heap built"), &[0]);
        tracer.wait_for_ack();
    }

    tracer.note(format_args!("phase 2: extracting maxima"));
    for end in (1..len).rev() {
        v.swap(0, end);
        stats.moves += 1;

        tracer.step(
            v,
            format_args!("moved maximum {} to position {end}", v[end]),
            &[0, end],
        );

        sift_down(v, end, 0, &mut is_less, &mut stats);
    }

    stats
}

// This binary heap respects the invariant `parent >= child` within `v[..heap_len]`.
fn sift_down<F>(v: &mut [i32], heap_len: usize, node: usize, is_less: &mut F, stats: &mut RunStats)
where
    F: FnMut(&i32, &i32) -> bool,
{
    let mut largest = node;
    let left = 2 * node + 1;
    let right = 2 * node + 2;

    if left < heap_len {
        stats.comparisons += 1;
        if is_less(&v[largest], &v[left]) {
            largest = left;
        }
    }

    if right < heap_len {
        stats.comparisons += 1;
        if is_less(&v[largest], &v[right]) {
            largest = right;
        }
    }

    if largest != node {
        v.swap(node, largest);
        stats.moves += 1;
        sift_down(v, heap_len, largest, is_less, stats);
    }
}
