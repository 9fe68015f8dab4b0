//! # Storing of transportation problems in memory
//!
//! This module provides the data structures used to represent transportation problems, their plans
//! and solutions. Algorithms may introduce their specific data structures in
//! `algorithm::my_algorithm`.
pub mod number_types;
pub mod transportation;
