use std::collections::hash_map::Entry;

use fxhash::FxHashMap;

use crate::trace::Tracer;
use crate::{MoveKind, RunStats, SearchOutcome};

search_impl!("Hash Search", requires_sorted: false, moves: MoveKind::TableInserts);

/// Builds a value to first-index table in one pass and looks `target` up once.
///
/// Later duplicates never overwrite the first occurrence. *O*(*n*) build time and *O*(*k*) extra
/// space for `k` distinct keys. `moves` counts the table entries, `comparisons` the single lookup.
pub fn search(v: &[i32], target: i32, tracer: &mut Tracer<'_>) -> SearchOutcome {
    let mut stats = RunStats::default();

    if v.is_empty() {
        return SearchOutcome { index: None, stats };
    }

    let table = build_table(v, &mut stats, tracer);
    tracer.note(format_args!("table holds {} distinct keys", table.len()));
    tracer.wait_for_ack();

    stats.comparisons += 1;
    let index = table.get(&target).copied();

    match index {
        Some(i) => tracer.note(format_args!("{target} found at index {i}")),
        None => tracer.note(format_args!("{target} not present")),
    }

    SearchOutcome { index, stats }
}

fn build_table(
    v: &[i32],
    stats: &mut RunStats,
    tracer: &mut Tracer<'_>,
) -> FxHashMap<i32, usize> {
    let mut table = FxHashMap::default();
    table.reserve(v.len());

    for (i, &key) in v.iter().enumerate() {
        match table.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(i);
                stats.moves += 1;
                tracer.note(format_args!("adding {key} -> index {i}"));
            }
            Entry::Occupied(slot) => {
                tracer.note(format_args!(
                    "{key} already stored at index {}, ignoring duplicate",
                    slot.get()
                ));
            }
        }
    }

    table
}
