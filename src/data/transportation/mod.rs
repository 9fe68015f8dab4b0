//! # Transportation problems
//!
//! A set of supply nodes, each with a quantity to ship, a set of demand nodes, each with a quantity
//! to receive, and a unit cost for shipping from any supply node to any demand node.
use crate::algorithm::error::SolveError;
use crate::data::number_types::traits::Number;
use crate::data::transportation::elements::Side;

pub mod balance;
pub mod elements;
pub mod plan;
pub mod solution;

/// A transportation problem with a dense cost matrix.
///
/// Rows of the cost matrix correspond to supply nodes, columns to demand nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportationProblem<F> {
    supply: Vec<F>,
    demand: Vec<F>,
    costs: Vec<Vec<F>>,
}

impl<F: Number> TransportationProblem<F> {
    /// Create a new instance after checking the shape of the data.
    ///
    /// # Arguments
    ///
    /// * `supply`: Quantity available at each supply node.
    /// * `demand`: Quantity required at each demand node.
    /// * `costs`: For each supply node, the unit cost of shipping to each of the demand nodes.
    ///
    /// # Errors
    ///
    /// If either side has no nodes, if the cost matrix has a different shape than the supply and
    /// demand imply, or if a quantity is negative.
    pub fn new(supply: Vec<F>, demand: Vec<F>, costs: Vec<Vec<F>>) -> Result<Self, SolveError> {
        if supply.is_empty() || demand.is_empty() {
            return Err(SolveError::EmptyInput {
                nr_supply: supply.len(),
                nr_demand: demand.len(),
            });
        }

        if costs.len() != supply.len() {
            return Err(SolveError::DimensionMismatch {
                expected: supply.len(),
                found: costs.len(),
                row: None,
            });
        }
        if let Some((row, values)) = costs.iter().enumerate()
            .find(|(_, values)| values.len() != demand.len()) {
            return Err(SolveError::DimensionMismatch {
                expected: demand.len(),
                found: values.len(),
                row: Some(row),
            });
        }

        for (side, quantities) in [(Side::Supply, &supply), (Side::Demand, &demand)] {
            if let Some(index) = quantities.iter().position(Number::is_negative) {
                return Err(SolveError::NegativeQuantity { side, index });
            }
        }

        Ok(Self { supply, demand, costs })
    }

    /// Create a new instance from data that is known to be consistent.
    pub(crate) fn new_unchecked(supply: Vec<F>, demand: Vec<F>, costs: Vec<Vec<F>>) -> Self {
        debug_assert!(!supply.is_empty() && !demand.is_empty());
        debug_assert_eq!(costs.len(), supply.len());
        debug_assert!(costs.iter().all(|row| row.len() == demand.len()));

        Self { supply, demand, costs }
    }

    /// Quantities available at the supply nodes.
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    /// Quantities required at the demand nodes.
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// Unit costs, one row per supply node.
    pub fn costs(&self) -> &[Vec<F>] {
        &self.costs
    }

    /// Number of supply nodes, the rows of a plan.
    pub fn nr_supply(&self) -> usize {
        self.supply.len()
    }

    /// Number of demand nodes, the columns of a plan.
    pub fn nr_demand(&self) -> usize {
        self.demand.len()
    }

    /// Number of basic cells in any basic feasible plan.
    pub fn basis_size(&self) -> usize {
        self.nr_supply() + self.nr_demand() - 1
    }
}
