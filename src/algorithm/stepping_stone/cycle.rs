//! # Recalculation cycles
//!
//! The stepping stone step. The basic cells of a plan form a spanning tree over the supply and
//! demand nodes: each basic cell `(j, i)` is an edge between supply node `j` and demand node `i`.
//! Adding the entering cell closes exactly one cycle. Shifting a quantity around that cycle, adding
//! on every other cell and subtracting on the rest, keeps all row and column totals intact.
use std::fmt;
use std::fmt::Display;

use enum_map::{Enum, EnumMap};
use fifo_set::FIFOSet;
use itertools::Itertools;
use log::trace;

use crate::algorithm::error::SolveError;
use crate::data::number_types::traits::Number;
use crate::data::transportation::elements::{Cell, Side};
use crate::data::transportation::plan::Plan;

/// Whether a cycle cell receives or gives up the shifted quantity.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    /// Receives; the entering cell and every second cell after it.
    Plus,
    /// Gives up; the leaving cell is one of these.
    Minus,
}

impl Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        })
    }
}

/// A closed loop through the entering cell and basic cells.
///
/// Consecutive cells share a column and a row alternately, starting with a column: the second cell
/// is the other cell of the loop in the column of the entering cell, whether it lies above or
/// below. Signs alternate as well, starting with `Sign::Plus` at the entering cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    cells: Vec<(usize, usize)>,
    /// Position of the leaving cell in `cells`.
    leaving: usize,
}

impl Cycle {
    /// Cells in traversal order, starting with the entering cell.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// The cell that enters the basis.
    pub fn entering(&self) -> (usize, usize) {
        self.cells[0]
    }

    /// The cell that leaves the basis.
    pub fn leaving(&self) -> (usize, usize) {
        self.cells[self.leaving]
    }

    /// All cells with their signs, in traversal order.
    pub fn signed_cells(&self) -> impl Iterator<Item = ((usize, usize), Sign)> + '_ {
        self.cells.iter().enumerate()
            .map(|(position, &cell)| (cell, if position % 2 == 0 { Sign::Plus } else { Sign::Minus }))
    }

    /// Cells grouped by sign, each group in traversal order.
    pub fn by_sign(&self) -> EnumMap<Sign, Vec<(usize, usize)>> {
        let mut groups = EnumMap::<Sign, Vec<_>>::default();
        for (cell, sign) in self.signed_cells() {
            groups[sign].push(cell);
        }

        groups
    }
}

impl Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.signed_cells()
            .map(|((row, column), sign)| format!("({}, {}){}", row, column, sign))
            .join(" ");
        f.write_str(&text)
    }
}

/// Move the plan to the adjacent basis in which the entering cell is basic.
///
/// The smallest quantity among the cells signed `Sign::Minus` is shifted around the cycle; the first
/// such cell in traversal order, see `Cycle`, leaves the basis. If that quantity is zero, the pivot
/// is degenerate: the basis changes but the allocation does not.
///
/// # Arguments
///
/// * `plan`: A basic feasible plan.
/// * `entering`: Row and column of a non basic cell.
///
/// # Return value
///
/// The new plan, and the cycle along which it was computed.
///
/// # Errors
///
/// If the plan doesn't have `rows + columns - 1` basic cells, or if there is no unique cycle through
/// the entering cell.
pub fn recalculate<F: Number>(
    plan: &Plan<F>,
    entering: (usize, usize),
) -> Result<(Plan<F>, Cycle), SolveError> {
    let expected = plan.nr_rows() + plan.nr_columns() - 1;
    let found = plan.nr_basic();
    if found != expected {
        return Err(SolveError::InvalidBasis { expected, found });
    }

    let cells = trace_loop(&isolate_loop(plan, entering), entering)?;
    let quantity = |(row, column): (usize, usize)| plan.get(row, column).quantity().cloned().unwrap_or_else(F::zero);

    // The first minimum is kept on ties
    let (leaving, shifted) = cells.iter().enumerate()
        .skip(1).step_by(2)
        .map(|(position, &cell)| (position, quantity(cell)))
        .min_by(|(_, left), (_, right)| left.cmp(right))
        .ok_or(SolveError::NoCycle { entering })?;
    let cycle = Cycle { cells, leaving };
    trace!("Cycle {}, shifting {} out of {:?}", cycle, shifted, cycle.leaving());

    let mut next = plan.clone();
    let groups = cycle.by_sign();
    for &cell in &groups[Sign::Plus] {
        next.set(cell.0, cell.1, Cell::Allocated(quantity(cell) + shifted.clone()));
    }
    for &cell in &groups[Sign::Minus] {
        next.set(cell.0, cell.1, Cell::Allocated(quantity(cell) - shifted.clone()));
    }
    let (row, column) = cycle.leaving();
    next.set(row, column, Cell::Unallocated);

    debug_assert_eq!(next.nr_basic(), expected);
    Ok((next, cycle))
}

/// Remove all cells that can't be on a cycle.
///
/// A row or column with a single remaining cell is a leaf of the graph; its cell is removed, which
/// may turn the row or column at the other end of that cell into a leaf. What remains of a spanning
/// tree plus one cell is exactly the cycle through that cell.
///
/// # Return value
///
/// For every cell, whether it remains.
fn isolate_loop<F>(plan: &Plan<F>, entering: (usize, usize)) -> Vec<Vec<bool>> {
    let (nr_rows, nr_columns) = (plan.nr_rows(), plan.nr_columns());

    let mut remaining = (0..nr_rows)
        .map(|row| (0..nr_columns)
            .map(|column| plan.is_basic(row, column) || (row, column) == entering)
            .collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let mut row_counts = remaining.iter()
        .map(|cells| cells.iter().filter(|&&cell| cell).count())
        .collect::<Vec<_>>();
    let mut column_counts = (0..nr_columns)
        .map(|column| remaining.iter().filter(|cells| cells[column]).count())
        .collect::<Vec<_>>();

    let mut queue = row_counts.iter().enumerate()
        .filter(|&(_, &count)| count == 1)
        .map(|(row, _)| (Side::Supply, row))
        .chain(column_counts.iter().enumerate()
            .filter(|&(_, &count)| count == 1)
            .map(|(column, _)| (Side::Demand, column)))
        .collect::<FIFOSet<_>>();
    while let Some((side, index)) = queue.pop() {
        match side {
            Side::Supply => {
                if row_counts[index] != 1 {
                    continue;
                }
                let Some(column) = (0..nr_columns).find(|&column| remaining[index][column]) else { continue };

                remaining[index][column] = false;
                row_counts[index] -= 1;
                column_counts[column] -= 1;
                if column_counts[column] == 1 {
                    queue.push((Side::Demand, column));
                }
            },
            Side::Demand => {
                if column_counts[index] != 1 {
                    continue;
                }
                let Some(row) = (0..nr_rows).find(|&row| remaining[row][index]) else { continue };

                remaining[row][index] = false;
                column_counts[index] -= 1;
                row_counts[row] -= 1;
                if row_counts[row] == 1 {
                    queue.push((Side::Supply, row));
                }
            },
        }
    }

    remaining
}

/// Walk the isolated loop, starting at the entering cell.
///
/// The first move is within the column of the entering cell, after which moves alternate between
/// rows and columns. Each move must have exactly one candidate.
fn trace_loop(
    remaining: &[Vec<bool>],
    entering: (usize, usize),
) -> Result<Vec<(usize, usize)>, SolveError> {
    let no_cycle = || SolveError::NoCycle { entering };

    if !remaining[entering.0][entering.1] {
        return Err(no_cycle());
    }
    let nr_remaining = remaining.iter().flatten().filter(|&&cell| cell).count();

    let mut cells = vec![entering];
    let (mut row, mut column) = entering;
    let mut along_column = true;
    loop {
        let candidate = if along_column {
            (0..remaining.len())
                .filter(|&other| other != row && remaining[other][column])
                .map(|other| (other, column))
                .exactly_one().ok()
        } else {
            (0..remaining[row].len())
                .filter(|&other| other != column && remaining[row][other])
                .map(|other| (row, other))
                .exactly_one().ok()
        };
        let next = candidate.ok_or_else(no_cycle)?;

        if next == entering {
            break;
        }
        if cells.len() == nr_remaining {
            return Err(no_cycle());
        }

        cells.push(next);
        (row, column) = next;
        along_column = !along_column;
    }

    // Anything left outside the loop was a cycle in the basis itself
    if cells.len() == nr_remaining {
        Ok(cells)
    } else {
        Err(no_cycle())
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::error::SolveError;
    use crate::algorithm::stepping_stone::cycle::{recalculate, Sign};
    use crate::data::transportation::plan::Plan;

    #[test]
    fn rectangle() {
        let plan = Plan::from(vec![
            vec![Some(10), Some(20), None, None],
            vec![None, Some(5), Some(5), Some(10)],
        ]);
        let (next, cycle) = recalculate(&plan, (0, 2)).unwrap();

        assert_eq!(cycle.cells(), &[(0, 2), (1, 2), (1, 1), (0, 1)]);
        assert_eq!(cycle.entering(), (0, 2));
        assert_eq!(cycle.leaving(), (1, 2));
        let groups = cycle.by_sign();
        assert_eq!(groups[Sign::Plus], vec![(0, 2), (1, 1)]);
        assert_eq!(groups[Sign::Minus], vec![(1, 2), (0, 1)]);
        assert_eq!(cycle.to_string(), "(0, 2)+ (1, 2)- (1, 1)+ (0, 1)-");

        assert_eq!(next, Plan::from(vec![
            vec![Some(10), Some(15), Some(5), None],
            vec![None, Some(10), None, Some(10)],
        ]));
    }

    #[test]
    fn hexagon_with_tie() {
        let plan = Plan::from(vec![
            vec![Some(5), Some(5), None],
            vec![None, Some(5), Some(5)],
            vec![None, None, Some(7)],
        ]);
        let (next, cycle) = recalculate(&plan, (2, 0)).unwrap();

        assert_eq!(cycle.cells(), &[(2, 0), (0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]);
        // Both (0, 0) and (1, 1) hold the minimum, the first one leaves
        assert_eq!(cycle.leaving(), (0, 0));
        assert_eq!(next, Plan::from(vec![
            vec![None, Some(10), None],
            vec![None, Some(0), Some(10)],
            vec![Some(5), None, Some(2)],
        ]));
        assert_eq!(next.nr_basic(), 5);
    }

    #[test]
    fn column_first_upwards() {
        let plan = Plan::from(vec![
            vec![Some(5), Some(5)],
            vec![None, Some(5)],
        ]);
        let (next, cycle) = recalculate(&plan, (1, 0)).unwrap();

        // The column partner lies above the entering cell, the walk still starts in the column
        assert_eq!(cycle.cells(), &[(1, 0), (0, 0), (0, 1), (1, 1)]);
        // Tied with (1, 1), which comes later
        assert_eq!(cycle.leaving(), (0, 0));
        assert_eq!(next, Plan::from(vec![
            vec![None, Some(10)],
            vec![Some(5), Some(0)],
        ]));
    }

    #[test]
    fn degenerate_pivot() {
        let plan = Plan::from(vec![
            vec![None, Some(10)],
            vec![Some(0), Some(20)],
        ]);
        let (next, cycle) = recalculate(&plan, (0, 0)).unwrap();

        assert_eq!(cycle.cells(), &[(0, 0), (1, 0), (1, 1), (0, 1)]);
        assert_eq!(cycle.leaving(), (1, 0));
        // The zero moves, the allocation stays the same
        assert_eq!(next, Plan::from(vec![
            vec![Some(0), Some(10)],
            vec![None, Some(20)],
        ]));
    }

    #[test]
    fn leaves_are_pruned() {
        // Long branches hang off the cycle through (0, 3)
        let plan = Plan::from(vec![
            vec![Some(3), Some(2), None, None],
            vec![None, Some(1), Some(4), None],
            vec![None, None, Some(1), Some(6)],
        ]);
        let (next, cycle) = recalculate(&plan, (0, 3)).unwrap();

        assert_eq!(cycle.cells(), &[(0, 3), (2, 3), (2, 2), (1, 2), (1, 1), (0, 1)]);
        assert_eq!(cycle.leaving(), (0, 1));
        for row in 0..3 {
            assert_eq!(next.row_total(row), plan.row_total(row));
        }
        for column in 0..4 {
            assert_eq!(next.column_total(column), plan.column_total(column));
        }
    }

    #[test]
    fn entering_is_basic() {
        let plan = Plan::from(vec![
            vec![Some(10), None],
            vec![Some(0), Some(20)],
        ]);
        assert_eq!(recalculate(&plan, (0, 0)), Err(SolveError::NoCycle { entering: (0, 0) }));
    }

    #[test]
    fn wrong_basis_size() {
        let plan = Plan::from(vec![
            vec![Some(10), None],
            vec![None, Some(20)],
        ]);
        assert_eq!(
            recalculate(&plan, (0, 1)),
            Err(SolveError::InvalidBasis { expected: 3, found: 2 }),
        );
    }

    #[test]
    fn basis_with_cycle() {
        let plan = Plan::from(vec![
            vec![Some(1), Some(1), None],
            vec![Some(1), Some(1), None],
            vec![None, None, Some(2)],
        ]);
        assert_eq!(recalculate(&plan, (2, 0)), Err(SolveError::NoCycle { entering: (2, 0) }));
    }
}
