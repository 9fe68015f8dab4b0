//! # Algorithms
pub mod error;
pub mod stepping_stone;
