//! The classic "two sum" exercise: find the indices of two elements in a
//! sequence whose values sum to a target.
//!
//! The library holds the solvers plus the parsing and formatting glue; the
//! three binaries under `src/bin/` are thin wrappers combining one input
//! format, one solver and one output format each.

pub mod output;
pub mod parse;
pub mod solve;
