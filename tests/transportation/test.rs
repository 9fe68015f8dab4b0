use relp_num::{RationalBig, RB};

use transportation::algorithm::error::SolveError;
use transportation::algorithm::stepping_stone::{Settings, solve};
use transportation::algorithm::stepping_stone::strategy::pivot_rule::MostNegative;
use transportation::data::transportation::elements::{Balance, Objective};
use transportation::data::transportation::TransportationProblem;
use transportation::io::{default_problem, import};
use transportation::io::error::ImportError;

use super::get_test_file_path;

fn read(name: &str) -> TransportationProblem<i64> {
    import(&get_test_file_path(name)).unwrap()
}

#[test]
fn storages() {
    let problem = read("storages");
    assert_eq!(problem, default_problem());

    let minimum = problem.clone().solve(Objective::Minimize).unwrap();
    assert_eq!(minimum.balance(), Balance::DummyDemand);
    assert_eq!(minimum.cost(), &1245);
    assert_eq!(minimum.nr_recalculations(), 5);

    let maximum = problem.solve(Objective::Maximize).unwrap();
    assert_eq!(maximum.cost(), &3800);
    assert_eq!(maximum.nr_recalculations(), 9);
}

#[test]
fn storages_rational() {
    let problem = read("storages");
    let convert = |values: &[i64]| values.iter().map(|&value| RB!(value)).collect::<Vec<RationalBig>>();

    let solution = solve(
        convert(problem.supply()),
        convert(problem.demand()),
        problem.costs().iter().map(|row| convert(row)).collect(),
        Objective::Minimize,
    ).unwrap();
    assert_eq!(solution.cost(), &RB!(1245));
}

#[test]
fn shortage() {
    let solution = read("shortage").solve(Objective::Minimize).unwrap();
    assert_eq!(solution.balance(), Balance::DummySupply);
    assert_eq!(solution.problem().supply(), [10, 10, 10]);
    assert_eq!(solution.cost(), &40);
}

#[test]
fn shortage_from_plan() {
    let problem = read("shortage");
    let solution = problem.clone().solve(Objective::Maximize).unwrap();

    let again = problem
        .solve_from::<MostNegative>(solution.plan().clone(), Objective::Maximize, Settings::default())
        .unwrap();
    assert_eq!(again.nr_recalculations(), 0);
    assert_eq!(again.cost(), solution.cost());
}

#[test]
fn malformed() {
    let result = import::<i64>(&get_test_file_path("malformed"));
    assert!(matches!(result, Err(ImportError::Parse(_))));
}

#[test]
fn missing() {
    let result = import::<i64>(&get_test_file_path("does_not_exist"));
    assert!(matches!(result, Err(ImportError::IO(_))));
}

#[test]
fn negative_demand() {
    let result = solve(vec![10], vec![-10], vec![vec![1]], Objective::Minimize);
    assert!(matches!(result, Err(SolveError::NegativeQuantity { .. })));
}
