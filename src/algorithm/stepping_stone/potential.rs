//! # Potential method
//!
//! Also known as the MODI method. Dual values are derived from the basic cells of a plan, and used
//! to compute the reduced cost of every non basic cell.
use std::iter::once;

use fifo_set::FIFOSet;
use log::trace;

use crate::algorithm::error::SolveError;
use crate::data::number_types::traits::Number;
use crate::data::transportation::elements::{Objective, Side};
use crate::data::transportation::plan::Plan;
use crate::data::transportation::solution::{Evaluation, Potentials};

/// Derive the potentials of a basic plan.
///
/// The first supply node gets potential zero. From there, every basic cell `(j, i)` of which one
/// side is known determines the other side through `u[j] + v[i] = cost[j][i]`. Nodes are processed
/// in the order in which their potential becomes known, so the order of the basic cells in the plan
/// doesn't matter.
///
/// # Arguments
///
/// * `plan`: A plan whose basic cells form a spanning tree over the supply and demand nodes.
/// * `costs`: Unit costs, of the same shape as the plan.
///
/// # Errors
///
/// If the basic cells don't connect all nodes, some potentials can't be derived.
pub fn potentials<F: Number>(
    plan: &Plan<F>,
    costs: &[Vec<F>],
) -> Result<Potentials<F>, SolveError> {
    let (nr_rows, nr_columns) = (plan.nr_rows(), plan.nr_columns());
    debug_assert!(nr_rows > 0 && nr_columns > 0);

    let mut u = vec![None; nr_rows];
    let mut v = vec![None; nr_columns];
    u[0] = Some(F::zero());

    let mut queue = once((Side::Supply, 0)).collect::<FIFOSet<_>>();
    while let Some((side, index)) = queue.pop() {
        match side {
            Side::Supply => {
                let Some(known) = u[index].clone() else { continue };
                for column in 0..nr_columns {
                    if plan.is_basic(index, column) && v[column].is_none() {
                        v[column] = Some(costs[index][column].clone() - known.clone());
                        queue.push((Side::Demand, column));
                    }
                }
            },
            Side::Demand => {
                let Some(known) = v[index].clone() else { continue };
                for row in 0..nr_rows {
                    if plan.is_basic(row, index) && u[row].is_none() {
                        u[row] = Some(costs[row][index].clone() - known.clone());
                        queue.push((Side::Supply, row));
                    }
                }
            },
        }
    }

    let unresolved = u.iter().chain(v.iter()).filter(|value| value.is_none()).count();
    if unresolved > 0 {
        return Err(SolveError::DisconnectedBasis { unresolved });
    }

    let potentials = Potentials {
        u: u.into_iter().flatten().collect(),
        v: v.into_iter().flatten().collect(),
    };
    trace!("Potentials u = {:?}, v = {:?}", potentials.u, potentials.v);

    Ok(potentials)
}

/// Compute the reduced cost of every non basic cell.
///
/// The implied cost of a cell is `u[j] + v[i]`. When minimizing, the evaluation is the actual cost
/// minus the implied cost, when maximizing it is the other way around. In both cases, a negative
/// value means that bringing the cell into the basis improves the plan.
///
/// # Return value
///
/// A matrix with `None` at the basic cells.
pub fn evaluate<F: Number>(
    plan: &Plan<F>,
    costs: &[Vec<F>],
    potentials: &Potentials<F>,
    objective: Objective,
) -> Evaluation<F> {
    let data = (0..plan.nr_rows())
        .map(|row| (0..plan.nr_columns())
            .map(|column| {
                if plan.is_basic(row, column) {
                    return None;
                }

                let implied = potentials.u[row].clone() + potentials.v[column].clone();
                let actual = costs[row][column].clone();
                Some(match objective {
                    Objective::Minimize => actual - implied,
                    Objective::Maximize => implied - actual,
                })
            })
            .collect())
        .collect();

    Evaluation { data }
}
