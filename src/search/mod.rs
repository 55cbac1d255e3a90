// Sequential scan, no ordering requirement.
pub mod linear;

// Bisection over sorted input.
pub mod binary;

// Value-based position estimate over sorted input.
pub mod interpolation;

// Value to first-index table built on every call.
pub mod hash;
