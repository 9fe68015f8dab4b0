//! # Errors while solving
//!
//! Everything that can go wrong between receiving the raw problem data and returning an optimal
//! plan.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::data::transportation::elements::Side;

/// A `SolveError` describes why no optimal plan could be computed.
///
/// Input errors (`EmptyInput`, `DimensionMismatch`, `NegativeQuantity`, `InvalidPlan`) are detected
/// before any computation. The structural variants (`InvalidBasis`, `DisconnectedBasis`,
/// `NoCycle`) indicate a plan that was not a basic feasible solution when it reached the algorithm.
#[allow(missing_docs)]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// There are no supply nodes or no demand nodes.
    EmptyInput {
        nr_supply: usize,
        nr_demand: usize,
    },
    /// The cost matrix doesn't have the shape that the supply and demand imply.
    ///
    /// When `row` is `None`, the number of cost rows differs from the number of supply nodes.
    /// Otherwise, the indicated row has a length different from the number of demand nodes.
    DimensionMismatch {
        expected: usize,
        found: usize,
        row: Option<usize>,
    },
    /// A supply or demand quantity is negative.
    NegativeQuantity {
        side: Side,
        index: usize,
    },
    /// A plan provided to start from is not a basic feasible plan of the balanced problem.
    ///
    /// The contained `String` is a message for the end user.
    InvalidPlan {
        description: String,
    },
    /// The number of basic cells differs from `rows + columns - 1`.
    InvalidBasis {
        expected: usize,
        found: usize,
    },
    /// Not all potentials could be derived from the basic cells, the basis is not connected.
    DisconnectedBasis {
        /// Number of potentials (of both supply and demand nodes) that stayed unknown.
        unresolved: usize,
    },
    /// There is no unique closed loop through the entering cell.
    NoCycle {
        /// Row and column of the entering cell.
        entering: (usize, usize),
    },
    /// The iteration limit was reached before the plan became optimal.
    NonTerminating {
        limit: usize,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::EmptyInput { nr_supply, nr_demand } => write!(
                f,
                "Problem needs at least one supply and one demand node, found {} and {}",
                nr_supply, nr_demand,
            ),
            SolveError::DimensionMismatch { expected, found, row: None } => write!(
                f,
                "Cost matrix has {} rows, but there are {} supply nodes",
                found, expected,
            ),
            SolveError::DimensionMismatch { expected, found, row: Some(row) } => write!(
                f,
                "Cost matrix row {} has {} values, but there are {} demand nodes",
                row, found, expected,
            ),
            SolveError::NegativeQuantity { side, index } => write!(
                f,
                "Quantity of {} node {} is negative",
                side, index,
            ),
            SolveError::InvalidPlan { description } => write!(f, "Invalid plan: {}", description),
            SolveError::InvalidBasis { expected, found } => write!(
                f,
                "Plan should have {} basic cells, but has {}",
                expected, found,
            ),
            SolveError::DisconnectedBasis { unresolved } => write!(
                f,
                "Basis is not connected, {} potentials could not be derived",
                unresolved,
            ),
            SolveError::NoCycle { entering: (row, column) } => write!(
                f,
                "No closed loop through entering cell ({}, {})",
                row, column,
            ),
            SolveError::NonTerminating { limit } => write!(
                f,
                "Plan was not optimal after {} recalculations",
                limit,
            ),
        }
    }
}

impl Error for SolveError {
}
