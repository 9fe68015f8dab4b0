//! # Strategies
//!
//! Choices the algorithm makes that don't affect correctness, only the path to the optimum.
pub mod pivot_rule;
