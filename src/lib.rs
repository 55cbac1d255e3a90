//! Instrumented integer sorting and searching algorithms behind two uniform capability traits.
//!
//! Every algorithm reports its work through [`RunStats`] and, when enabled, narrates each step
//! through a [`trace::Tracer`]. Callers pick implementations from [`registry`].

/// Expands to a unit struct `SortImpl` implementing [`Sorter`] by forwarding to the module level
/// `sort_by` function.
macro_rules! sort_impl {
    ($name:expr, stable: $stable:expr, moves: $move_kind:expr) => {
        #[derive(Copy, Clone, Debug, Default)]
        pub struct SortImpl;

        impl $crate::Sorter for SortImpl {
            fn name(&self) -> &'static str {
                $name
            }

            fn is_stable(&self) -> bool {
                $stable
            }

            fn move_kind(&self) -> $crate::MoveKind {
                $move_kind
            }

            fn sort_by_traced(
                &self,
                v: &mut [i32],
                compare: &mut dyn FnMut(&i32, &i32) -> ::std::cmp::Ordering,
                tracer: &mut $crate::trace::Tracer<'_>,
            ) -> $crate::RunStats {
                let stats = sort_by(v, compare, tracer);
                tracer.complete($name, &stats);
                stats
            }
        }
    };
}

/// Same as `sort_impl!` but for searchers, producing `SearchImpl`.
macro_rules! search_impl {
    ($name:expr, requires_sorted: $requires_sorted:expr, moves: $move_kind:expr) => {
        #[derive(Copy, Clone, Debug, Default)]
        pub struct SearchImpl;

        impl $crate::Searcher for SearchImpl {
            fn name(&self) -> &'static str {
                $name
            }

            fn requires_sorted(&self) -> bool {
                $requires_sorted
            }

            fn move_kind(&self) -> $crate::MoveKind {
                $move_kind
            }

            fn search_traced(
                &self,
                v: &[i32],
                target: i32,
                tracer: &mut $crate::trace::Tracer<'_>,
            ) -> $crate::SearchOutcome {
                let outcome = search(v, target, tracer);
                tracer.complete($name, &outcome.stats);
                outcome
            }
        }
    };
}

pub mod registry;
pub mod search;
pub mod stable;
pub mod trace;
pub mod unstable;

use std::cmp::Ordering;

use trace::Tracer;

/// Index value used by callers that want the classic `-1` convention for a failed search.
pub const NOT_FOUND: isize = -1;

/// Work performed by a single algorithm run.
///
/// A fresh value is produced by every call, counters never carry over between runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub comparisons: u64,
    /// Structural changes, see [`MoveKind`] for what is counted per algorithm.
    pub moves: u64,
}

/// Describes what [`RunStats::moves`] counts for a given algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Swaps,
    Shifts,
    Merges,
    TableInserts,
    None,
}

impl MoveKind {
    pub fn label(self) -> &'static str {
        match self {
            MoveKind::Swaps => "swaps",
            MoveKind::Shifts => "shifts",
            MoveKind::Merges => "merges",
            MoveKind::TableInserts => "table inserts",
            MoveKind::None => "moves",
        }
    }
}

/// Result of a single search run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub index: Option<usize>,
    pub stats: RunStats,
}

impl SearchOutcome {
    /// Returns the found index or [`NOT_FOUND`].
    pub fn as_isize(&self) -> isize {
        self.index.map_or(NOT_FOUND, |i| i as isize)
    }
}

/// In-place sorting algorithm over `i32` keys.
///
/// After a run the slice is a permutation of its input, in non-decreasing order for [`sort`] and
/// in comparator order for [`sort_by`].
///
/// [`sort`]: Sorter::sort
/// [`sort_by`]: Sorter::sort_by
pub trait Sorter {
    fn name(&self) -> &'static str;

    /// `true` if equal keys keep their relative order.
    fn is_stable(&self) -> bool;

    fn move_kind(&self) -> MoveKind;

    /// Sorts with a comparator function, which must define a total order.
    fn sort_by_traced(
        &self,
        v: &mut [i32],
        compare: &mut dyn FnMut(&i32, &i32) -> Ordering,
        tracer: &mut Tracer<'_>,
    ) -> RunStats;

    fn sort_traced(&self, v: &mut [i32], tracer: &mut Tracer<'_>) -> RunStats {
        self.sort_by_traced(v, &mut |a: &i32, b: &i32| a.cmp(b), tracer)
    }

    fn sort(&self, v: &mut [i32]) -> RunStats {
        self.sort_traced(v, &mut Tracer::disabled())
    }

    fn sort_by(&self, v: &mut [i32], compare: &mut dyn FnMut(&i32, &i32) -> Ordering) -> RunStats {
        self.sort_by_traced(v, compare, &mut Tracer::disabled())
    }
}

/// Lookup algorithm over `i32` keys. The input is never modified.
pub trait Searcher {
    fn name(&self) -> &'static str;

    /// `true` if the algorithm only gives reliable answers on non-decreasing input. This is not
    /// checked, unsorted input yields an unspecified index or `None` but never panics.
    fn requires_sorted(&self) -> bool;

    fn move_kind(&self) -> MoveKind;

    fn search_traced(&self, v: &[i32], target: i32, tracer: &mut Tracer<'_>) -> SearchOutcome;

    fn search(&self, v: &[i32], target: i32) -> Option<usize> {
        self.search_traced(v, target, &mut Tracer::disabled()).index
    }
}
