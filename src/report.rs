use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;
use core::str::FromStr;

use itertools::Itertools;

use crate::amount::Amount;
use crate::error::Error;
use crate::solution::FlowReport;

/// Parse the textual capacity-matrix form: one integer `n` followed by
/// `n * n` non-negative entries in row-major order. Token boundaries are any
/// whitespace; line layout carries no meaning and surplus trailing tokens
/// are ignored.
pub fn parse_capacity_matrix<Amt>(input: &str) -> Result<Vec<Vec<Amt>>, Error>
where
    Amt: Amount + FromStr,
{
    let mut tokens = input.split_whitespace();
    let n: usize = tokens
        .next()
        .ok_or_else(|| Error::MalformedInput(String::from("empty input")))?
        .parse()
        .map_err(|_| Error::MalformedInput(String::from("vertex count is not an integer")))?;

    let mut matrix = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let token = tokens
                .next()
                .ok_or_else(|| Error::MalformedInput(format!("matrix ends early at ({i}, {j})")))?;
            let capacity = token
                .parse::<Amt>()
                .map_err(|_| Error::MalformedInput(format!("entry ({i}, {j}) is not an integer")))?;
            if capacity < Amt::zero() {
                return Err(Error::MalformedInput(format!("entry ({i}, {j}) is negative")));
            }
            row.push(capacity);
        }
        matrix.push(row);
    }
    Ok(matrix)
}

/// Render a report in the textual output form: the max-flow line, one line
/// per flow-matrix row, the cut line and the iteration-count line.
pub fn render_report<Amt: Amount>(report: &FlowReport<Amt>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.max_flow);
    for row in &report.flows {
        let _ = writeln!(out, "{}", row.iter().join(" "));
    }
    let _ = writeln!(out, "{}", report.min_cut.iter().join(" "));
    let _ = writeln!(out, "{}", report.iterations);
    out
}
