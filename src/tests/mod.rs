//! # Tests that follow a problem through the whole computation.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn balanced()`
//! * `fn initial_plan()`
//! * `fn optimal_plan()`
//!
//! Every visited plan is checked with `check_iterations`.
use crate::data::number_types::traits::Number;
use crate::data::transportation::solution::Solution;


/// Check that each recorded iteration holds a basic feasible plan with consistent potentials.
fn check_iterations<F: Number>(solution: &Solution<F>) {
    let problem = solution.problem();
    let costs = problem.costs();

    for (index, iteration) in solution.iterations().iter().enumerate() {
        assert_eq!(iteration.index, index);

        let plan = &iteration.plan;
        assert_eq!(plan.nr_basic(), problem.basis_size());
        for row in 0..problem.nr_supply() {
            assert_eq!(plan.row_total(row), problem.supply()[row]);
        }
        for column in 0..problem.nr_demand() {
            assert_eq!(plan.column_total(column), problem.demand()[column]);
        }

        let potentials = &iteration.potentials;
        for (row, column, _) in plan.basic_cells() {
            assert_eq!(
                potentials.u[row].clone() + potentials.v[column].clone(),
                costs[row][column],
            );
        }
        for row in 0..problem.nr_supply() {
            for column in 0..problem.nr_demand() {
                assert_eq!(iteration.evaluation.get(row, column).is_none(), plan.is_basic(row, column));
            }
        }

        assert_eq!(iteration.cost, plan.cost(costs));
        assert_eq!(iteration.entering.is_none(), index == solution.nr_recalculations());
    }
}
