// Lomuto partition quicksort, last element as pivot.
pub mod quick;

// Max-heap build followed by repeated extraction.
pub mod heap;
