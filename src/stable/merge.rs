use std::cmp::Ordering;

use crate::trace::Tracer;
use crate::{MoveKind, RunStats};

sort_impl!("Merge Sort", stable: true, moves: MoveKind::Merges);

/// Sorts the slice with top-down merge sort.
///
/// Stable and *O*(*n* \* log(*n*)) in all cases. Each merge allocates two temporary buffers, one
/// per half, which are released before the merge returns.
pub fn sort(v: &mut [i32], tracer: &mut Tracer<'_>) -> RunStats {
    sort_by(v, |a, b| a.cmp(b), tracer)
}

pub fn sort_by<F>(v: &mut [i32], mut compare: F, tracer: &mut Tracer<'_>) -> RunStats
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    let mut stats = RunStats::default();

    if !v.is_empty() {
        let right = v.len() - 1;
        let mut is_less = |a: &i32, b: &i32| compare(a, b) == Ordering::Less;
        merge_sort(v, 0, right, &mut is_less, &mut stats, tracer);
    }

    stats
}

/// Sorts the inclusive range `[left, right]`.
fn merge_sort<F>(
    v: &mut [i32],
    left: usize,
    right: usize,
    is_less: &mut F,
    stats: &mut RunStats,
    tracer: &mut Tracer<'_>,
) where
    F: FnMut(&i32, &i32) -> bool,
{
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;

    tracer.note(format_args!("splitting [{left}..{right}] at {mid}"));
    tracer.wait_for_ack();

    merge_sort(v, left, mid, is_less, stats, tracer);
    merge_sort(v, mid + 1, right, is_less, stats, tracer);
    merge(v, left, mid, right, is_less, stats, tracer);
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge<F>(
    v: &mut [i32],
    left: usize,
    mid: usize,
    right: usize,
    is_less: &mut F,
    stats: &mut RunStats,
    tracer: &mut Tracer<'_>,
) where
    F: FnMut(&i32, &i32) -> bool,
{
    let left_run = v[left..=mid].to_vec();
    let right_run = v[mid + 1..=right].to_vec();

    tracer.note(format_args!("merging {left_run:?} with {right_run:?}"));

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        stats.comparisons += 1;

        // Ties take from the left run, which keeps the sort stable.
        if !is_less(&right_run[j], &left_run[i]) {
            v[k] = left_run[i];
            i += 1;
        } else {
            v[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }

    // At most one of the runs has elements left.
    let rest = if i < left_run.len() {
        &left_run[i..]
    } else {
        &right_run[j..]
    };
    v[k..=right].copy_from_slice(rest);

    stats.moves += 1;

    tracer.step(v, format_args!("merged [{left}..{right}]"), &[left, right]);
    tracer.wait_for_ack();
}
