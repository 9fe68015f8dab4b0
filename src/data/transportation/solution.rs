//! # Representation of solved problems
//!
//! Once a transportation problem is solved, the full history of the computation is available: for
//! every plan that was visited, the potentials and evaluation matrix derived from it. This would
//! probably be used to show the user how the optimum was reached.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

use crate::algorithm::stepping_stone::cycle::Cycle;
use crate::data::transportation::elements::{Balance, Objective};
use crate::data::transportation::plan::Plan;
use crate::data::transportation::TransportationProblem;

/// Dual values of a basic plan.
///
/// For every basic cell `(j, i)`, `u[j] + v[i]` equals the unit cost of that cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Potentials<F> {
    /// One value per supply node.
    pub u: Vec<F>,
    /// One value per demand node.
    pub v: Vec<F>,
}

/// Reduced costs of the non basic cells of a plan.
///
/// Signs are chosen such that a negative value always indicates an improving move, regardless of
/// the objective.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation<F> {
    /// `None` for basic cells.
    pub(crate) data: Vec<Vec<Option<F>>>,
}

impl<F> Evaluation<F> {
    /// Reduced cost of a cell, `None` if the cell is basic.
    pub fn get(&self, row: usize, column: usize) -> Option<&F> {
        self.data[row][column].as_ref()
    }

    /// Reduced costs of all non basic cells with their coordinates, in row major order.
    pub fn values(&self) -> impl Iterator<Item = (usize, usize, &F)> {
        self.data.iter().enumerate().flat_map(|(row, values)| {
            values.iter().enumerate()
                .filter_map(move |(column, value)| value.as_ref().map(|value| (row, column, value)))
        })
    }
}

impl<F: Display> Display for Evaluation<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            let line = row.iter()
                .map(|value| value.as_ref().map_or_else(|| "-".to_string(), ToString::to_string))
                .join("\t");
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

/// The non basic cell chosen to enter the basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entering<F> {
    #[allow(missing_docs)]
    pub row: usize,
    #[allow(missing_docs)]
    pub column: usize,
    /// Reduced cost of the cell, always negative.
    pub evaluation: F,
}

/// A snapshot of one plan visited while solving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Iteration<F> {
    /// Number of recalculations performed before this plan was reached; the initial plan has 0.
    pub index: usize,
    #[allow(missing_docs)]
    pub plan: Plan<F>,
    #[allow(missing_docs)]
    pub potentials: Potentials<F>,
    #[allow(missing_docs)]
    pub evaluation: Evaluation<F>,
    /// Total cost of the plan.
    pub cost: F,
    /// How the total cost is computed, e.g. `"50*1 + 5*5"`.
    pub cost_expression: String,
    /// Cell that enters the basis in the next recalculation, `None` if the plan is optimal.
    pub entering: Option<Entering<F>>,
    /// Cycle along which the next plan is computed, `None` if the plan is optimal.
    pub cycle: Option<Cycle>,
}

impl<F: Display> Display for Iteration<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Iteration {}:", self.index)?;
        write!(f, "{}", self.plan)?;
        writeln!(
            f,
            "u = {}; v = {}",
            self.potentials.u.iter().join(", "),
            self.potentials.v.iter().join(", "),
        )?;
        writeln!(f, "Cost: {} = {}", self.cost_expression, self.cost)?;
        // Printed for the optimal plan as well
        write!(f, "Evaluation:\n{}", self.evaluation)?;

        match (&self.entering, &self.cycle) {
            (Some(entering), Some(cycle)) => writeln!(
                f,
                "Entering ({}, {}) with {}, cycle: {}",
                entering.row, entering.column, entering.evaluation, cycle,
            ),
            _ => writeln!(f, "Plan is optimal."),
        }
    }
}

/// Result of solving a transportation problem.
///
/// Contains the balanced version of the problem that was solved, and every plan visited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<F> {
    problem: TransportationProblem<F>,
    balance: Balance,
    objective: Objective,
    /// Never empty, the last one is optimal.
    iterations: Vec<Iteration<F>>,
}

impl<F> Solution<F> {
    pub(crate) fn new(
        problem: TransportationProblem<F>,
        balance: Balance,
        objective: Objective,
        iterations: Vec<Iteration<F>>,
    ) -> Self {
        debug_assert!(!iterations.is_empty());
        debug_assert!(iterations.last().is_some_and(|iteration| iteration.entering.is_none()));

        Self { problem, balance, objective, iterations }
    }

    /// The problem after balancing, so including any dummy node.
    pub fn problem(&self) -> &TransportationProblem<F> {
        &self.problem
    }

    /// Which dummy node, if any, was added to the problem.
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// All plans visited, starting with the initial plan and ending with the optimal one.
    pub fn iterations(&self) -> &[Iteration<F>] {
        &self.iterations
    }

    /// The final iteration, containing the optimal plan.
    pub fn optimum(&self) -> &Iteration<F> {
        &self.iterations[self.iterations.len() - 1]
    }

    /// The optimal plan.
    pub fn plan(&self) -> &Plan<F> {
        &self.optimum().plan
    }

    /// Total cost of the optimal plan.
    pub fn cost(&self) -> &F {
        &self.optimum().cost
    }

    /// Number of times the plan was recalculated along a cycle.
    pub fn nr_recalculations(&self) -> usize {
        self.iterations.len() - 1
    }
}
