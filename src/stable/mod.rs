// Elementary exchange sort with early exit on a pass without swaps.
pub mod bubble;

// Elementary insertion sort, shifting larger keys to the right.
pub mod insertion;

// Top-down merge sort with per-merge temporary buffers.
pub mod merge;
