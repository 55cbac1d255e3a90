//! Ordered lists of every available algorithm, for enumeration and selection by name.

use thiserror::Error;

use crate::{search, stable, unstable, Searcher, Sorter};

static SORTERS: [&(dyn Sorter + Sync); 5] = [
    &stable::bubble::SortImpl,
    &stable::insertion::SortImpl,
    &unstable::quick::SortImpl,
    &stable::merge::SortImpl,
    &unstable::heap::SortImpl,
];

static SORTER_IDS: [&str; 5] = ["bubble", "insertion", "quick", "merge", "heap"];

static SEARCHERS: [&(dyn Searcher + Sync); 4] = [
    &search::linear::SearchImpl,
    &search::binary::SearchImpl,
    &search::interpolation::SearchImpl,
    &search::hash::SearchImpl,
];

static SEARCHER_IDS: [&str; 4] = ["linear", "binary", "interpolation", "hash"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown sorter `{0}`")]
    UnknownSorter(String),
    #[error("unknown searcher `{0}`")]
    UnknownSearcher(String),
}

/// All sorters in display order.
pub fn sorters() -> &'static [&'static (dyn Sorter + Sync)] {
    &SORTERS
}

/// All searchers in display order.
pub fn searchers() -> &'static [&'static (dyn Searcher + Sync)] {
    &SEARCHERS
}

/// Looks a sorter up by display name or short id, ignoring case.
pub fn find_sorter(name: &str) -> Result<&'static (dyn Sorter + Sync), RegistryError> {
    position(name, &SORTER_IDS, SORTERS.iter().map(|s| s.name()))
        .map(|i| SORTERS[i])
        .ok_or_else(|| RegistryError::UnknownSorter(name.to_owned()))
}

/// Looks a searcher up by display name or short id, ignoring case.
pub fn find_searcher(name: &str) -> Result<&'static (dyn Searcher + Sync), RegistryError> {
    position(name, &SEARCHER_IDS, SEARCHERS.iter().map(|s| s.name()))
        .map(|i| SEARCHERS[i])
        .ok_or_else(|| RegistryError::UnknownSearcher(name.to_owned()))
}

fn position<'a>(
    name: &str,
    ids: &[&str],
    display_names: impl Iterator<Item = &'a str>,
) -> Option<usize> {
    let name = name.trim();
    ids.iter()
        .zip(display_names)
        .position(|(id, display)| id.eq_ignore_ascii_case(name) || display.eq_ignore_ascii_case(name))
}

/// `true` if `v` is in non-decreasing order.
///
/// Searchers never check this themselves, callers can use it before picking one that
/// [requires sorted input](Searcher::requires_sorted).
pub fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        let names: Vec<_> = sorters().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            ["Bubble Sort", "Insertion Sort", "Quicksort", "Merge Sort", "Heapsort"]
        );

        let names: Vec<_> = searchers().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            ["Linear Search", "Binary Search", "Interpolation Search", "Hash Search"]
        );
    }

    #[test]
    fn lookup_by_id_or_name() {
        assert_eq!(find_sorter("heap").unwrap().name(), "Heapsort");
        assert_eq!(find_sorter("merge sort").unwrap().name(), "Merge Sort");
        assert_eq!(find_searcher(" HASH ").unwrap().name(), "Hash Search");
        assert_eq!(
            find_searcher("Binary Search").unwrap().name(),
            "Binary Search"
        );

        assert_eq!(
            find_sorter("bogo").err(),
            Some(RegistryError::UnknownSorter("bogo".into()))
        );
        assert_eq!(
            find_searcher("ternary").err(),
            Some(RegistryError::UnknownSearcher("ternary".into()))
        );
    }

    #[test]
    fn sorted_check() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
