pub mod patterns;

// Used by the test instantiation macros.
pub use paste;
