//! # The stepping stone method
//!
//! Transportation problems are solved by moving from basic feasible plan to basic feasible plan.
//! The potential method determines whether the current plan can be improved and which cell should
//! enter the basis. The stepping stone method then shifts quantity along the cycle through that
//! cell, which removes another cell from the basis.
use log::{debug, info};

use crate::algorithm::error::SolveError;
use crate::algorithm::stepping_stone::cycle::recalculate;
use crate::algorithm::stepping_stone::initial::northwest_corner;
use crate::algorithm::stepping_stone::potential::{evaluate, potentials};
use crate::algorithm::stepping_stone::strategy::pivot_rule::{is_optimal, MostNegative, PivotRule};
use crate::data::number_types::traits::Number;
use crate::data::transportation::elements::Objective;
use crate::data::transportation::plan::Plan;
use crate::data::transportation::solution::{Iteration, Solution};
use crate::data::transportation::TransportationProblem;

pub mod cycle;
pub mod initial;
pub mod potential;
pub mod strategy;

/// Maximum number of recalculations used when no other limit is given.
pub const DEFAULT_ITERATION_LIMIT: usize = 10_000;

/// Parameters of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of recalculations before giving up.
    ///
    /// Choosing the most negative evaluation can, in theory, cycle between degenerate bases.
    pub iteration_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

/// Solve a transportation problem given as raw data.
///
/// Uses the most negative evaluation to select entering cells, and the default iteration limit.
///
/// # Arguments
///
/// * `supply`: Quantity available at each supply node.
/// * `demand`: Quantity required at each demand node.
/// * `costs`: For each supply node, the unit cost of shipping to each of the demand nodes.
/// * `objective`: Whether total cost should be minimized or maximized.
///
/// # Errors
///
/// If the data is inconsistent, see `TransportationProblem::new`, or if the iteration limit is
/// reached.
pub fn solve<F: Number>(
    supply: Vec<F>,
    demand: Vec<F>,
    costs: Vec<Vec<F>>,
    objective: Objective,
) -> Result<Solution<F>, SolveError> {
    TransportationProblem::new(supply, demand, costs)?.solve(objective)
}

impl<F: Number> TransportationProblem<F> {
    /// Solve this problem with the default strategy and settings.
    pub fn solve(self, objective: Objective) -> Result<Solution<F>, SolveError> {
        self.solve_with::<MostNegative>(objective, Settings::default())
    }

    /// Solve this problem, starting from the northwest corner plan.
    ///
    /// The problem is balanced first; the returned solution contains the balanced problem.
    pub fn solve_with<PR: PivotRule>(
        mut self,
        objective: Objective,
        settings: Settings,
    ) -> Result<Solution<F>, SolveError> {
        let balance = self.balance();
        let initial = northwest_corner(self.supply(), self.demand());
        let iterations = primal::<_, PR>(&self, initial, objective, settings)?;

        Ok(Solution::new(self, balance, objective, iterations))
    }

    /// Solve this problem, starting from a given plan.
    ///
    /// # Arguments
    ///
    /// * `plan`: A basic feasible plan of the balanced problem. If balancing adds a dummy node, the
    /// plan should include it.
    ///
    /// # Errors
    ///
    /// Next to the errors of `solve_with`, `SolveError::InvalidPlan` if the plan doesn't have the
    /// shape of the balanced problem, doesn't match its supply and demand, or doesn't have the right
    /// number of basic cells.
    pub fn solve_from<PR: PivotRule>(
        mut self,
        plan: Plan<F>,
        objective: Objective,
        settings: Settings,
    ) -> Result<Solution<F>, SolveError> {
        let balance = self.balance();
        check_basic_feasible(&self, &plan)?;
        let iterations = primal::<_, PR>(&self, plan, objective, settings)?;

        Ok(Solution::new(self, balance, objective, iterations))
    }
}

/// Improve the plan until it is optimal.
///
/// Every plan visited is recorded, including the final one.
fn primal<F: Number, PR: PivotRule>(
    problem: &TransportationProblem<F>,
    initial: Plan<F>,
    objective: Objective,
    settings: Settings,
) -> Result<Vec<Iteration<F>>, SolveError> {
    debug_assert!(problem.is_balanced());
    let costs = problem.costs();

    let mut rule = PR::new();
    let mut iterations: Vec<Iteration<F>> = Vec::new();
    let mut plan = initial;
    loop {
        debug_assert!(check_basic_feasible(problem, &plan).is_ok());

        let index = iterations.len();
        let potentials = potentials(&plan, costs)?;
        let evaluation = evaluate(&plan, costs, &potentials, objective);
        let cost = plan.cost(costs);
        let cost_expression = plan.cost_expression(costs);
        debug_assert!(iterations.last().is_none_or(|previous| match objective {
            Objective::Minimize => cost <= previous.cost,
            Objective::Maximize => cost >= previous.cost,
        }));

        match rule.select_entering_cell(&evaluation) {
            None => {
                debug_assert!(is_optimal(&evaluation));
                info!("Plan {} is optimal, cost: {} = {}", index, cost_expression, cost);
                iterations.push(Iteration {
                    index,
                    plan,
                    potentials,
                    evaluation,
                    cost,
                    cost_expression,
                    entering: None,
                    cycle: None,
                });

                break Ok(iterations);
            },
            Some(entering) => {
                debug!(
                    "Plan {} with cost {} is not optimal, evaluation {} at ({}, {})",
                    index, cost, entering.evaluation, entering.row, entering.column,
                );
                if index == settings.iteration_limit {
                    info!(
                        "Giving up after {} recalculations, plan cost: {} = {}, entering ({}, {}) with {}",
                        index, cost_expression, cost, entering.row, entering.column, entering.evaluation,
                    );
                    break Err(SolveError::NonTerminating { limit: settings.iteration_limit });
                }

                let (next, cycle) = recalculate(&plan, (entering.row, entering.column))?;
                iterations.push(Iteration {
                    index,
                    plan,
                    potentials,
                    evaluation,
                    cost,
                    cost_expression,
                    entering: Some(entering),
                    cycle: Some(cycle),
                });
                plan = next;
            },
        }
    }
}

/// Check that a plan is a basic feasible plan of a balanced problem.
fn check_basic_feasible<F: Number>(
    problem: &TransportationProblem<F>,
    plan: &Plan<F>,
) -> Result<(), SolveError> {
    let invalid = |description: String| Err(SolveError::InvalidPlan { description });

    if plan.nr_rows() != problem.nr_supply() {
        return invalid(format!(
            "plan has {} rows, but there are {} supply nodes",
            plan.nr_rows(), problem.nr_supply(),
        ));
    }
    if let Some((row, cells)) = plan.rows().enumerate().find(|(_, cells)| cells.len() != problem.nr_demand()) {
        return invalid(format!(
            "row {} of the plan has {} cells, but there are {} demand nodes",
            row, cells.len(), problem.nr_demand(),
        ));
    }
    if let Some((row, column, _)) = plan.basic_cells().find(|(_, _, quantity)| quantity.is_negative()) {
        return invalid(format!("allocation at ({}, {}) is negative", row, column));
    }
    if let Some(row) = (0..problem.nr_supply()).find(|&row| plan.row_total(row) != problem.supply()[row]) {
        return invalid(format!(
            "row {} ships {}, but supply is {}",
            row, plan.row_total(row), problem.supply()[row],
        ));
    }
    if let Some(column) = (0..problem.nr_demand()).find(|&column| plan.column_total(column) != problem.demand()[column]) {
        return invalid(format!(
            "column {} receives {}, but demand is {}",
            column, plan.column_total(column), problem.demand()[column],
        ));
    }
    if plan.nr_basic() != problem.basis_size() {
        return invalid(format!(
            "plan has {} basic cells, but should have {}",
            plan.nr_basic(), problem.basis_size(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::algorithm::error::SolveError;
    use crate::algorithm::stepping_stone::{Settings, solve};
    use crate::algorithm::stepping_stone::strategy::pivot_rule::{FirstProfitable, MostNegative};
    use crate::data::transportation::elements::{Balance, Objective};
    use crate::data::transportation::plan::Plan;
    use crate::data::transportation::TransportationProblem;

    fn problem() -> TransportationProblem<i32> {
        TransportationProblem::new(
            vec![30, 20],
            vec![10, 25, 5],
            vec![vec![2, 3, 1], vec![5, 4, 8]],
        ).unwrap()
    }

    #[test]
    fn single_recalculation() {
        let solution = problem().solve(Objective::Minimize).unwrap();

        assert_eq!(solution.balance(), Balance::DummyDemand);
        assert_eq!(solution.nr_recalculations(), 1);
        assert_eq!(solution.iterations()[0].cost, 140);
        assert_eq!(solution.cost(), &110);
        assert_eq!(solution.plan(), &Plan::from(vec![
            vec![Some(10), Some(15), Some(5), None],
            vec![None, Some(10), None, Some(10)],
        ]));
        assert_eq!(solution.optimum().cost_expression, "10*2 + 15*3 + 5*1 + 10*4 + 10*0");
    }

    #[test]
    fn entering_and_cycle_recorded() {
        let solution = problem().solve(Objective::Minimize).unwrap();

        let first = &solution.iterations()[0];
        let entering = first.entering.as_ref().unwrap();
        assert_eq!((entering.row, entering.column, entering.evaluation), (0, 2, -6));
        assert_eq!(first.cycle.as_ref().map(|cycle| cycle.leaving()), Some((1, 2)));

        let last = solution.optimum();
        assert_eq!(last.index, 1);
        assert!(last.entering.is_none());
        assert!(last.cycle.is_none());
    }

    #[test]
    fn single_cell() {
        let solution = solve(vec![5], vec![5], vec![vec![7]], Objective::Minimize).unwrap();
        assert_eq!(solution.nr_recalculations(), 0);
        assert_eq!(solution.cost(), &35);
        assert_eq!(solution.balance(), Balance::Balanced);
    }

    #[test]
    fn dummy_supply() {
        let solution = solve(vec![10, 10], vec![30], vec![vec![3], vec![1]], Objective::Minimize).unwrap();
        assert_eq!(solution.balance(), Balance::DummySupply);
        assert_eq!(solution.problem().supply(), &[10, 10, 10]);
        assert_eq!(solution.cost(), &40);
    }

    #[test]
    fn pivot_rules_agree() {
        let most_negative = problem()
            .solve_with::<MostNegative>(Objective::Maximize, Settings::default())
            .unwrap();
        let first_profitable = problem()
            .solve_with::<FirstProfitable>(Objective::Maximize, Settings::default())
            .unwrap();
        assert_eq!(most_negative.cost(), first_profitable.cost());
    }

    #[test]
    fn iteration_limit() {
        let result = problem().solve_with::<MostNegative>(
            Objective::Minimize,
            Settings { iteration_limit: 0 },
        );
        assert_eq!(result, Err(SolveError::NonTerminating { limit: 0 }));
    }

    #[test]
    fn from_optimal_plan() {
        let solution = problem().solve(Objective::Minimize).unwrap();
        let again = problem()
            .solve_from::<MostNegative>(solution.plan().clone(), Objective::Minimize, Settings::default())
            .unwrap();
        assert_eq!(again.nr_recalculations(), 0);
        assert_eq!(again.cost(), solution.cost());
    }

    #[test]
    fn from_invalid_plan() {
        let result = |plan| problem().solve_from::<MostNegative>(plan, Objective::Minimize, Settings::default());

        // Dummy column missing
        assert!(matches!(
            result(Plan::from(vec![vec![Some(10), Some(20), None], vec![None, Some(5), Some(5)]])),
            Err(SolveError::InvalidPlan { .. }),
        ));
        // Totals don't match
        assert!(matches!(
            result(Plan::from(vec![
                vec![Some(10), Some(20), None, None],
                vec![None, Some(5), Some(5), Some(9)],
            ])),
            Err(SolveError::InvalidPlan { .. }),
        ));
        // Feasible, but too many basic cells
        assert_eq!(
            result(Plan::from(vec![
                vec![Some(10), Some(20), Some(0), None],
                vec![None, Some(5), Some(5), Some(10)],
            ])),
            Err(SolveError::InvalidPlan {
                description: "plan has 6 basic cells, but should have 5".to_string(),
            }),
        );
    }
}
