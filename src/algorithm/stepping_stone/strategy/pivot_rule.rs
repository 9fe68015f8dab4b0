//! # Pivot rules
//!
//! Strategies for choosing the cell that enters the basis.
use crate::data::number_types::traits::Number;
use crate::data::transportation::solution::{Entering, Evaluation};

/// Deciding how to pivot.
///
/// During the stepping stone method, one needs to decide which non basic cell enters the basis.
/// Only cells with a negative evaluation improve the plan; if there are none, the plan is optimal.
/// The leaving cell then follows from the cycle through the entering cell.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Select the entering cell.
    ///
    /// # Return value
    ///
    /// `None` if no cell has a negative evaluation, i.e. the plan is optimal.
    fn select_entering_cell<F: Number>(&mut self, evaluation: &Evaluation<F>) -> Option<Entering<F>>;
}

/// Pivot on the cell with the most negative evaluation.
///
/// Ties are broken in favor of the first such cell in row major order.
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_entering_cell<F: Number>(&mut self, evaluation: &Evaluation<F>) -> Option<Entering<F>> {
        let mut smallest: Option<(usize, usize, &F)> = None;
        for (row, column, value) in evaluation.values().filter(|(_, _, value)| value.is_negative()) {
            if smallest.is_none_or(|(_, _, existing)| value < existing) {
                smallest = Some((row, column, value));
            }
        }

        smallest.map(|(row, column, value)| Entering { row, column, evaluation: value.clone() })
    }
}

/// Simply pivot on the first cell, in row major order, which has a negative evaluation.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_entering_cell<F: Number>(&mut self, evaluation: &Evaluation<F>) -> Option<Entering<F>> {
        evaluation.values()
            .find(|(_, _, value)| value.is_negative())
            .map(|(row, column, value)| Entering { row, column, evaluation: value.clone() })
    }
}

/// Whether no non basic cell has a negative evaluation.
pub fn is_optimal<F: Number>(evaluation: &Evaluation<F>) -> bool {
    evaluation.values().all(|(_, _, value)| !value.is_negative())
}
