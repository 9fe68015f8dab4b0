//! # Allocation plans
//!
//! A plan assigns a shipped quantity to every (supply node, demand node) pair in its basis. Rows
//! are indexed by supply nodes, columns by demand nodes.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

use crate::data::number_types::traits::{Number, total};
use crate::data::transportation::elements::Cell;

/// Dense, row major allocation matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan<F> {
    data: Vec<Vec<Cell<F>>>,
}

impl<F> Plan<F> {
    /// Create a plan without any basic cells.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: (0..nr_rows)
                .map(|_| (0..nr_columns).map(|_| Cell::Unallocated).collect())
                .collect(),
        }
    }

    /// Number of supply nodes.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Number of demand nodes.
    ///
    /// Taken from the first row; plans constructed from raw data might be ragged until validated.
    pub fn nr_columns(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// All rows of the plan.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell<F>]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Entry at a coordinate.
    pub fn get(&self, row: usize, column: usize) -> &Cell<F> {
        debug_assert!(row < self.nr_rows() && column < self.nr_columns());

        &self.data[row][column]
    }

    /// Overwrite the entry at a coordinate.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell<F>) {
        debug_assert!(row < self.nr_rows() && column < self.nr_columns());

        self.data[row][column] = cell;
    }

    /// Whether the entry at a coordinate is in the basis.
    pub fn is_basic(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_basic()
    }

    /// All basic cells with their coordinates, in row major order.
    pub fn basic_cells(&self) -> impl Iterator<Item = (usize, usize, &F)> {
        self.data.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate()
                .filter_map(move |(column, cell)| cell.quantity().map(|quantity| (row, column, quantity)))
        })
    }

    /// Number of basic cells, including allocated zeros.
    pub fn nr_basic(&self) -> usize {
        self.basic_cells().count()
    }
}

impl<F: Number> Plan<F> {
    /// Total quantity shipped from a supply node.
    pub fn row_total(&self, row: usize) -> F {
        total(self.data[row].iter().filter_map(Cell::quantity))
    }

    /// Total quantity shipped to a demand node.
    pub fn column_total(&self, column: usize) -> F {
        total(self.data.iter().filter_map(|cells| cells[column].quantity()))
    }

    /// Total cost of shipping according to this plan.
    ///
    /// # Arguments
    ///
    /// * `costs`: Unit cost per (supply node, demand node) pair, of the same shape as the plan.
    pub fn cost(&self, costs: &[Vec<F>]) -> F {
        self.basic_cells()
            .fold(F::zero(), |sum, (row, column, quantity)| {
                sum + quantity.clone() * costs[row][column].clone()
            })
    }

    /// Human readable version of the cost computation, e.g. `"10*2 + 0*3 + 5*1"`.
    ///
    /// Allocated zeros are included, as they are part of the basis.
    pub fn cost_expression(&self, costs: &[Vec<F>]) -> String {
        self.basic_cells()
            .map(|(row, column, quantity)| format!("{}*{}", quantity, costs[row][column]))
            .join(" + ")
    }
}

impl<F> From<Vec<Vec<Option<F>>>> for Plan<F> {
    fn from(rows: Vec<Vec<Option<F>>>) -> Self {
        Self {
            data: rows.into_iter()
                .map(|row| row.into_iter()
                    .map(|value| value.map_or(Cell::Unallocated, Cell::Allocated))
                    .collect())
                .collect(),
        }
    }
}

impl<F: Display> Display for Plan<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().join("\t"))?;
        }

        Ok(())
    }
}
