//! # Balancing
//!
//! The algorithms require total supply to equal total demand. An unbalanced problem is closed by
//! adding a single dummy node with zero shipping costs.
use std::cmp::Ordering;

use log::info;

use crate::data::number_types::traits::{Number, total};
use crate::data::transportation::elements::Balance;
use crate::data::transportation::TransportationProblem;

impl<F: Number> TransportationProblem<F> {
    /// Make total supply equal total demand.
    ///
    /// If demand exceeds supply, a dummy supply node is appended, together with a row of zero
    /// costs. If supply exceeds demand, a dummy demand node is appended with a column of zero
    /// costs.
    ///
    /// # Return value
    ///
    /// Which dummy node was added, if any.
    pub fn balance(&mut self) -> Balance {
        let total_supply = total(&self.supply);
        let total_demand = total(&self.demand);

        match total_supply.cmp(&total_demand) {
            Ordering::Equal => Balance::Balanced,
            Ordering::Less => {
                let shortage = total_demand - total_supply;
                info!("Demand exceeds supply by {}, adding a dummy supply node", shortage);

                self.supply.push(shortage);
                self.costs.push((0..self.demand.len()).map(|_| F::zero()).collect());

                Balance::DummySupply
            },
            Ordering::Greater => {
                let surplus = total_supply - total_demand;
                info!("Supply exceeds demand by {}, adding a dummy demand node", surplus);

                self.demand.push(surplus);
                for row in &mut self.costs {
                    row.push(F::zero());
                }

                Balance::DummyDemand
            },
        }
    }

    /// Whether total supply equals total demand.
    pub fn is_balanced(&self) -> bool {
        total(&self.supply) == total(&self.demand)
    }
}

#[cfg(test)]
mod test {
    use crate::data::transportation::elements::Balance;
    use crate::data::transportation::TransportationProblem;

    #[test]
    fn balanced() {
        let mut problem = TransportationProblem::new(
            vec![10, 20],
            vec![30],
            vec![vec![1], vec![2]],
        ).unwrap();
        let copy = problem.clone();
        assert_eq!(problem.balance(), Balance::Balanced);
        assert_eq!(problem, copy);
    }

    #[test]
    fn dummy_supply() {
        let mut problem = TransportationProblem::new(
            vec![10, 10],
            vec![30],
            vec![vec![3], vec![1]],
        ).unwrap();
        assert!(!problem.is_balanced());
        assert_eq!(problem.balance(), Balance::DummySupply);
        assert!(problem.is_balanced());
        assert_eq!(problem.supply(), &[10, 10, 10]);
        assert_eq!(problem.costs(), &[vec![3], vec![1], vec![0]]);
    }

    #[test]
    fn dummy_demand() {
        let mut problem = TransportationProblem::new(
            vec![30, 20],
            vec![10, 25, 5],
            vec![vec![2, 3, 1], vec![5, 4, 8]],
        ).unwrap();
        assert_eq!(problem.balance(), Balance::DummyDemand);
        assert!(problem.is_balanced());
        assert_eq!(problem.demand(), &[10, 25, 5, 10]);
        assert_eq!(problem.costs(), &[vec![2, 3, 1, 0], vec![5, 4, 8, 0]]);
        assert_eq!(problem.basis_size(), 5);
    }
}
