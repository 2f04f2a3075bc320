//! Options container integration tests
//!
//! Organized by concern: basic access, the merge family, cursor iteration,
//! derived views, and serialization.

mod iteration_tests;
mod merge_tests;
mod serialization_tests;
