//! # Number types
//!
//! The algorithms are generic over the values they compute with. This allows them to be tested with
//! exact rational numbers as well as with plain integers, using the same code.
pub mod traits;
