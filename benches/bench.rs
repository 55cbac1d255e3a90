use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use regex::Regex;

use sort_search_rs::registry;
use sort_test_tools::patterns;

const SORT_SIZES: [usize; 4] = [16, 128, 1_000, 4_096];
const SEARCH_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

// The quadratic sorts take seconds per iteration beyond this.
const QUADRATIC_LIMIT: usize = 1_000;

fn name_filter() -> Option<Regex> {
    // Filters algorithm names, independent of criterion's own bench id filter.
    let pattern = env::var("BENCH_REGEX").ok()?;
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(err) => panic!("invalid BENCH_REGEX `{pattern}`: {err}"),
    }
}

fn pin_thread_to_core() {
    // Pin to the last core, the first is usually busier with system work.
    if let Some(core_id) = core_affinity::get_core_ids().and_then(|ids| ids.last().copied()) {
        core_affinity::set_for_current(core_id);
    }
}

fn bench_sorts(c: &mut Criterion) {
    pin_thread_to_core();
    let filter = name_filter();

    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 5] = [
        ("random", patterns::random),
        ("random_zipf", |len| patterns::random_zipf(len, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |len| patterns::saw_mixed(len, 8)),
    ];

    for sorter in registry::sorters() {
        if filter.as_ref().is_some_and(|f| !f.is_match(sorter.name())) {
            continue;
        }

        let quadratic = matches!(sorter.name(), "Bubble Sort" | "Insertion Sort" | "Quicksort");

        for (pattern_name, pattern_provider) in &pattern_providers {
            for len in SORT_SIZES {
                if quadratic && len > QUADRATIC_LIMIT {
                    continue;
                }

                let input = pattern_provider(len);
                c.bench_function(&format!("{}-{pattern_name}-{len}", sorter.name()), |b| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |v| sorter.sort(black_box(v.as_mut_slice())),
                        BatchSize::SmallInput,
                    )
                });
            }
        }
    }
}

fn bench_searches(c: &mut Criterion) {
    pin_thread_to_core();
    let filter = name_filter();

    for searcher in registry::searchers() {
        if filter.as_ref().is_some_and(|f| !f.is_match(searcher.name())) {
            continue;
        }

        for len in SEARCH_SIZES {
            let v = patterns::random_sorted(len, 0..(len as i32 * 4));
            let targets = patterns::random_uniform(16, 0..(len as i32 * 4));

            c.bench_function(&format!("{}-random_sorted-{len}", searcher.name()), |b| {
                b.iter(|| {
                    for &target in &targets {
                        black_box(searcher.search(black_box(&v), target));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, bench_sorts, bench_searches);
criterion_main!(benches);
