//! # Initial basic feasible plan
//!
//! The northwest corner method: starting in the top left cell, allocate as much as possible and move
//! either down or right, until the bottom right cell is reached.
use crate::data::number_types::traits::Number;
use crate::data::transportation::elements::Cell;
use crate::data::transportation::plan::Plan;

/// Build a basic feasible plan with the northwest corner method.
///
/// Each visited cell is allocated the minimum of the remaining supply and demand. Afterwards, the
/// walk moves right if the current demand node is satisfied, and down otherwise. When supply and
/// demand run out at the same time, the walk only moves right, so the next cell in row major order
/// receives an allocated zero. In the last column it moves down instead. The walk therefore always visits exactly `rows + columns - 1` cells, which
/// become the basis.
///
/// # Arguments
///
/// * `supply`: Quantities of the supply nodes.
/// * `demand`: Quantities of the demand nodes, with the same total as `supply`.
///
/// # Return value
///
/// A plan with `supply.len() + demand.len() - 1` basic cells, matching all row and column totals.
pub fn northwest_corner<F: Number>(supply: &[F], demand: &[F]) -> Plan<F> {
    debug_assert!(!supply.is_empty() && !demand.is_empty());

    let (nr_rows, nr_columns) = (supply.len(), demand.len());
    let mut remaining_supply = supply.to_vec();
    let mut remaining_demand = demand.to_vec();

    let mut plan = Plan::new(nr_rows, nr_columns);
    let (mut row, mut column) = (0, 0);
    loop {
        let quantity = remaining_supply[row].clone().min(remaining_demand[column].clone());
        remaining_supply[row] = remaining_supply[row].clone() - quantity.clone();
        remaining_demand[column] = remaining_demand[column].clone() - quantity.clone();
        plan.set(row, column, Cell::Allocated(quantity));

        if row + 1 == nr_rows && column + 1 == nr_columns {
            break;
        }

        // At a tie, move right unless in the last column; the next cell holds an allocated zero
        if (remaining_demand[column].is_zero() || row + 1 == nr_rows) && column + 1 < nr_columns {
            column += 1;
        } else {
            row += 1;
        }
    }

    debug_assert_eq!(plan.nr_basic(), nr_rows + nr_columns - 1);
    plan
}
