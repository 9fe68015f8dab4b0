//! # Reading of transportation problems
//!
//! Problems are stored as tab-delimited tables. The first line holds an ignored corner cell,
//! followed by the demand quantities. Every other line holds a supply quantity, followed by the
//! unit costs of shipping from that supply node to each demand node:
//!
//! ```text
//! 	200	90
//! 50	2	14
//! 240	3	5
//! ```
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::data::number_types::traits::Number;
use crate::data::transportation::TransportationProblem;
use crate::io::error::{ImportError, ParseError};

pub mod error;

/// Import a problem from a file.
///
/// # Arguments
///
/// * `file_path`: Location of a tab-delimited problem file.
///
/// # Errors
///
/// When the file cannot be found or read, when a value is not a number, or when the values don't
/// form a valid problem.
pub fn import<F>(file_path: &Path) -> Result<TransportationProblem<F>, ImportError>
where
    F: Number + FromStr,
    <F as FromStr>::Err: Error + Send + Sync + 'static,
{
    let mut text = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut text)
        .map_err(ImportError::IO)?;

    parse(&text)
}

/// Parse a problem from the contents of a tab-delimited file.
///
/// Empty lines are skipped, as is whitespace around the values.
///
/// # Errors
///
/// See `import`.
pub fn parse<F>(text: &str) -> Result<TransportationProblem<F>, ImportError>
where
    F: Number + FromStr,
    <F as FromStr>::Err: Error + Send + Sync + 'static,
{
    let mut lines = text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let demand = match lines.next() {
        Some((line_number, line)) => {
            parse_values(line.split('\t').skip(1), (line_number, line))?
        },
        None => return Err(ParseError::new("File contains no demand line").into()),
    };

    let mut supply = Vec::new();
    let mut costs = Vec::new();
    for (line_number, line) in lines {
        let mut values = parse_values(line.split('\t'), (line_number, line))?;
        if values.is_empty() {
            return Err(ParseError::with_file_location(
                "Supply line has no values", (line_number, line),
            ).into());
        }
        supply.push(values.remove(0));
        costs.push(values);
    }

    TransportationProblem::new(supply, demand, costs).map_err(ImportError::Inconsistent)
}

/// Parse the cells of a single line, skipping empty trailing cells.
fn parse_values<'a, F>(
    cells: impl Iterator<Item = &'a str>,
    (line_number, line): (usize, &str),
) -> Result<Vec<F>, ParseError>
where
    F: FromStr,
    <F as FromStr>::Err: Error + Send + Sync + 'static,
{
    let cells = cells.map(str::trim).collect::<Vec<_>>();
    let nr_cells = cells.iter().rposition(|cell| !cell.is_empty()).map_or(0, |index| index + 1);

    cells[..nr_cells].iter()
        .map(|cell| cell.parse::<F>().map_err(|error| {
            ParseError::wrap_other(
                error,
                format!("Failed to parse \"{}\" at line {}: \"{}\"", cell, line_number, line),
            )
        }))
        .collect()
}

/// The problem that is solved when no file is given.
///
/// Six storages supply five shops. Total supply exceeds total demand by 5.
pub fn default_problem() -> TransportationProblem<i64> {
    TransportationProblem::new_unchecked(
        vec![50, 150, 70, 30, 250, 75],
        vec![200, 90, 180, 20, 110],
        vec![
            vec![2, 14, 3, 2, 1],
            vec![3, 5, 3, 12, 9],
            vec![4, 1, 3, 4, 4],
            vec![7, 11, 3, 2, 5],
            vec![2, 8, 3, 2, 4],
            vec![6, 4, 3, 5, 1],
        ],
    )
}
