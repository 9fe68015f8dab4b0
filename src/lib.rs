//! # A transportation problem solver
//!
//! Balanced and unbalanced transportation problems are solved exactly. An initial plan is built
//! with the northwest corner method, after which the potential (MODI) method and the stepping stone
//! method alternate until the plan is optimal.
//!
//! ```
//! use transportation::algorithm::stepping_stone::solve;
//! use transportation::data::transportation::elements::Objective;
//!
//! let solution = solve(
//!     vec![30, 20],
//!     vec![10, 25, 5],
//!     vec![vec![2, 3, 1], vec![5, 4, 8]],
//!     Objective::Minimize,
//! ).unwrap();
//! assert_eq!(solution.cost(), &110);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
