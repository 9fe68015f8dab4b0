use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use env_logger::Builder;
use log::info;

use transportation::algorithm::stepping_stone::Settings;
use transportation::algorithm::stepping_stone::strategy::pivot_rule::MostNegative;
use transportation::data::transportation::elements::{Balance, Objective};
use transportation::data::transportation::solution::Solution;
use transportation::io::{default_problem, import};

/// Solve a transportation problem with the potential and stepping stone methods.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Tab-delimited problem file; a built-in example is solved when omitted
    problem_file: Option<PathBuf>,

    /// Whether the total cost should be minimized or maximized
    #[arg(long, value_enum, default_value_t = Direction::Min)]
    objective: Direction,

    /// Maximum number of recalculations before giving up
    #[arg(long)]
    limit: Option<usize>,

    /// Print every intermediate plan, not only the initial and the optimal one
    #[arg(long)]
    all: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

#[derive(Copy, Clone, ValueEnum)]
enum Direction {
    Min,
    Max,
}

impl From<Direction> for Objective {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Min => Objective::Minimize,
            Direction::Max => Objective::Maximize,
        }
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    let problem = match &opts.problem_file {
        Some(path) => {
            info!("Reading problem file: \"{}\"", path.display());
            import::<i64>(path)
                .with_context(|| format!("could not read problem from {}", path.display()))?
        },
        None => {
            info!("No problem file given, using the built-in example");
            default_problem()
        },
    };

    let mut settings = Settings::default();
    if let Some(limit) = opts.limit {
        settings.iteration_limit = limit;
    }

    let solution = problem.solve_with::<MostNegative>(opts.objective.into(), settings)
        .context("could not solve the problem")?;

    report(&solution, opts.all);

    Ok(())
}

fn report(solution: &Solution<i64>, all: bool) {
    match solution.balance() {
        Balance::Balanced => println!("Problem is balanced."),
        Balance::DummySupply => println!("Demand exceeds supply, added a dummy supply node."),
        Balance::DummyDemand => println!("Supply exceeds demand, added a dummy demand node."),
    }
    println!("Objective: {}", solution.objective());

    let iterations = solution.iterations();
    let last = iterations.len() - 1;
    for iteration in iterations {
        if all || iteration.index == 0 || iteration.index == last {
            print!("\n{}", iteration);
        }
    }

    println!(
        "Optimal after {} recalculations, total cost: {}",
        solution.nr_recalculations(),
        solution.cost(),
    );
}
