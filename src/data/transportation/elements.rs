//! # Building blocks to describe transportation problems.
use std::fmt;
use std::fmt::Display;

/// Direction of optimization, also called the optimality criterion.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}
impl Default for Objective {
    fn default() -> Self {
        Objective::Minimize
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "max",
            Objective::Minimize => "min",
        })
    }
}

/// The two kinds of nodes in a transportation problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Storages, each shipping a fixed quantity. They index the rows of a plan.
    Supply,
    /// Shops, each receiving a fixed quantity. They index the columns of a plan.
    Demand,
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Side::Supply => "supply",
            Side::Demand => "demand",
        })
    }
}

/// A single entry of an allocation plan.
///
/// An allocated zero is a basic cell in a degenerate plan. It is distinct from an unallocated cell,
/// which is not part of the basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell<F> {
    /// Not in the basis.
    Unallocated,
    /// In the basis, shipping the contained quantity.
    Allocated(F),
}

impl<F> Cell<F> {
    /// Whether this cell is in the basis.
    pub fn is_basic(&self) -> bool {
        matches!(self, Cell::Allocated(_))
    }

    /// The allocated quantity, if any.
    pub fn quantity(&self) -> Option<&F> {
        match self {
            Cell::Unallocated => None,
            Cell::Allocated(quantity) => Some(quantity),
        }
    }
}

impl<F: Display> Display for Cell<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Unallocated => f.write_str("-"),
            Cell::Allocated(quantity) => quantity.fmt(f),
        }
    }
}

/// How total supply and total demand were made equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    /// Totals were equal already, no node was added.
    Balanced,
    /// Demand exceeded supply. The last supply node is a dummy; what it "ships" is unmet demand.
    DummySupply,
    /// Supply exceeded demand. The last demand node is a dummy; what it "receives" stays in storage.
    DummyDemand,
}
